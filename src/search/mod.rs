//! Search module for the move advisor
//!
//! Contains:
//! - Scoped board placements for simulation
//! - Threat detection over five-cell windows
//! - Ranking of legal moves by heuristic score
//! - Two-ply lookahead

pub mod lookahead;
pub mod ranking;
pub mod simulation;
pub mod threat;

pub use lookahead::{best_move, best_position, two_ply_scores, weakest_reply};
pub use ranking::{rank_moves, ScoredMove};
pub use simulation::Placement;
pub use threat::{find_pattern, find_threat, ThreatSummary};
