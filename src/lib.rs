//! Gomoku move advisor
//!
//! A five-in-a-row agent that plugs into a host game framework and picks one
//! move per turn:
//! - Threat detection over every five-cell window (win, block, open three)
//! - Heuristic move scoring (centrality, adjacency, threat bonuses)
//! - Optional two-ply lookahead
//! - Optional advisory oracle (a language-model client) as a tie-breaker
//!   among the top candidates, with a deterministic fallback
//!
//! # Architecture
//!
//! - [`board`]: Board grid, positions, directions
//! - [`game`]: Framework seam ([`GameState`]) and a free-style [`Game`]
//! - [`rules`]: Five-in-a-row detection for game over
//! - [`eval`]: Window scanning, patterns and the move scorer
//! - [`search`]: Threat detection, scoped simulation, ranking, lookahead
//! - [`oracle`]: Oracle trait, prompt construction, answer parsing
//! - [`config`]: Advisor options and named presets
//! - [`engine`]: The [`MoveAdvisor`] turn pipeline
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{find_threat, Game, Pos, Stone};
//!
//! let mut game = Game::new(15);
//! for (r, c) in [(7, 5), (0, 0), (7, 6), (0, 2), (7, 7), (0, 4), (7, 8)] {
//!     game.play(r, c).unwrap();
//! }
//!
//! // Black is one move from five
//! assert_eq!(find_threat(&game, Stone::Black, 4, 1), Some(Pos::new(7, 4)));
//! ```
//!
//! # Decision Priority
//!
//! 1. Own immediate win
//! 2. Block the opponent's immediate win
//! 3. Block the opponent's open three (when enabled)
//! 4. Two-ply lookahead (when enabled)
//! 5. Oracle pick among the top-scored candidates
//! 6. Top-scored candidate, or a random legal move

pub mod agent;
pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod oracle;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use agent::{Agent, AgentSession};
pub use board::{Board, Direction, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use config::{AdvisorConfig, Fallback, OracleMode, ThreatTiers, Variant};
pub use engine::{Decision, DecisionKind, MoveAdvisor};
pub use error::{ConfigError, GameError, OracleError};
pub use eval::{score_move, Pattern};
pub use game::{BoardStyle, Game, GameState};
pub use oracle::{Message, NoOracle, Oracle, Role, StdinOracle};
pub use search::{best_move, find_threat, rank_moves, Placement, ScoredMove, ThreatSummary};
