//! Game-over rules for the free-style [`crate::game::Game`]
//!
//! Five or more stones in a row win. The advisor itself never asks who won;
//! it only needs these to drive self-play and tests.

pub mod win;

pub use win::{check_winner, find_five_positions, has_five_at_pos, has_five_in_row};
