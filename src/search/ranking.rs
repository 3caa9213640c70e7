//! Ranking legal moves by heuristic score

use serde::Serialize;

use crate::board::{Pos, Stone};
use crate::eval::score_move;
use crate::game::GameState;

/// A candidate move and its score for this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredMove {
    pub pos: Pos,
    pub score: i32,
}

/// Score every legal move for `own`, best first.
///
/// The sort is stable, so equal scores keep row-major order.
pub fn rank_moves<S: GameState + ?Sized>(state: &mut S, own: Stone, opponent: Stone) -> Vec<ScoredMove> {
    let legal = state.legal_moves();
    let mut ranked = Vec::with_capacity(legal.len());
    for pos in legal {
        let score = score_move(state, pos, own, opponent);
        ranked.push(ScoredMove { pos, score });
    }
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}
