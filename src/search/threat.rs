//! Threat detection over five-cell windows
//!
//! Finds the move that completes or blocks a stone/empty pattern. Two
//! canonical queries exist:
//! - `(4, 1)`: one move from five (win, or block a win)
//! - `(3, 2)`: one move from an open four (build, or block an open three)
//!
//! No open-two or double-threat detection is attempted.

use crate::board::{Pos, Stone};
use crate::eval::{windows, Pattern};
use crate::game::GameState;

/// Find a move completing a window with exactly `stones_needed` stones of
/// `symbol` and exactly `empty_needed` empty cells.
///
/// Windows are scanned in [`windows`] order; the candidate of a matching
/// window is its first empty cell. A candidate the framework rejects via
/// [`GameState::is_valid_move`] is skipped and the scan continues.
pub fn find_threat<S: GameState + ?Sized>(
    state: &S,
    symbol: Stone,
    stones_needed: usize,
    empty_needed: usize,
) -> Option<Pos> {
    let board = state.board();
    windows(board.size()).find_map(|window| {
        if window.counts(board, symbol) != (stones_needed, empty_needed) {
            return None;
        }
        window
            .first_empty(board)
            .filter(|p| state.is_valid_move(p.row as i32, p.col as i32))
    })
}

/// [`find_threat`] for one of the canonical patterns
#[inline]
pub fn find_pattern<S: GameState + ?Sized>(state: &S, symbol: Stone, pattern: Pattern) -> Option<Pos> {
    find_threat(state, symbol, pattern.stones(), pattern.empty())
}

/// Every canonical threat on the board, for both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThreatSummary {
    /// Move completing our five
    pub own_win: Option<Pos>,
    /// Move completing the opponent's five
    pub opponent_win: Option<Pos>,
    /// Move extending our open three
    pub own_open_three: Option<Pos>,
    /// Move extending the opponent's open three
    pub opponent_open_three: Option<Pos>,
}

impl ThreatSummary {
    pub fn scan<S: GameState + ?Sized>(state: &S, own: Stone, opponent: Stone) -> Self {
        Self {
            own_win: find_pattern(state, own, Pattern::Immediate),
            opponent_win: find_pattern(state, opponent, Pattern::Immediate),
            own_open_three: find_pattern(state, own, Pattern::OpenThree),
            opponent_open_three: find_pattern(state, opponent, Pattern::OpenThree),
        }
    }

    /// No threats on the board
    pub fn is_quiet(&self) -> bool {
        *self == Self::default()
    }

    /// One human-readable line per threat present
    pub fn describe(&self) -> Vec<String> {
        [
            (self.own_win, "You can win immediately at"),
            (self.opponent_win, "Opponent threatens to win at"),
            (self.own_open_three, "You can extend an open three at"),
            (self.opponent_open_three, "Opponent can extend an open three at"),
        ]
        .into_iter()
        .filter_map(|(pos, text)| pos.map(|p| format!("{text} {p}")))
        .collect()
    }
}
