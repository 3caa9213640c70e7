//! Extracting a move from free-form oracle text
//!
//! The answer is expected to contain `{"row": <int>, "col": <int>}`
//! somewhere, possibly wrapped in prose or a code fence. Only the first
//! such object counts.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::board::Pos;
use crate::game::GameState;

static ANSWER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\{\s*"row"\s*:\s*-?\d+\s*,\s*"col"\s*:\s*-?\d+\s*\}"#)
        .expect("answer pattern is a valid regex")
});

#[derive(Debug, Deserialize)]
struct Answer {
    row: i64,
    col: i64,
}

/// First `{"row": r, "col": c}` object in `text`.
///
/// `None` when nothing matches or the match does not decode (e.g. a number
/// too large for an `i64`).
pub fn extract_move(text: &str) -> Option<(i64, i64)> {
    let found = ANSWER_RE.find(text)?;
    match serde_json::from_str::<Answer>(found.as_str()) {
        Ok(answer) => Some((answer.row, answer.col)),
        Err(err) => {
            tracing::debug!(%err, answer = found.as_str(), "oracle answer did not decode");
            None
        }
    }
}

/// Which cells an oracle answer may name
#[derive(Debug, Clone, Copy)]
pub enum AnswerScope<'a> {
    /// Any cell the framework accepts
    AnyLegal,
    /// One of the offered candidates (which must also still be legal)
    Candidates(&'a [Pos]),
}

/// Why an extracted answer was not used
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("({row}, {col}) is off the board")]
    OutOfBounds { row: i64, col: i64 },

    #[error("{0} is not a legal move")]
    Illegal(Pos),

    #[error("{0} was not one of the offered candidates")]
    NotCandidate(Pos),
}

/// Check bounds, then legality, then candidate membership
pub fn validate_answer<S: GameState + ?Sized>(
    state: &S,
    (row, col): (i64, i64),
    scope: AnswerScope<'_>,
) -> Result<Pos, Rejection> {
    let size = state.board_size() as i64;
    if !(0..size).contains(&row) || !(0..size).contains(&col) {
        return Err(Rejection::OutOfBounds { row, col });
    }
    let pos = Pos::new(row as u8, col as u8);
    if !state.is_valid_move(row as i32, col as i32) {
        return Err(Rejection::Illegal(pos));
    }
    match scope {
        AnswerScope::Candidates(candidates) if !candidates.contains(&pos) => {
            Err(Rejection::NotCandidate(pos))
        }
        _ => Ok(pos),
    }
}
