//! Evaluation module for Gomoku positions
//!
//! This module provides window scanning, pattern definitions and the
//! heuristic move scorer. The score of a candidate considers:
//! - Centrality (distance from the board center, per axis)
//! - Adjacency to existing stones
//! - Threats created or left open once the stone is placed

pub mod heuristic;
pub mod lines;
pub mod patterns;

pub use heuristic::{adjacency, centrality, score_move, threat_bonus};
pub use lines::{windows, Window, WINDOW_LEN};
pub use patterns::{MoveScore, Pattern};
