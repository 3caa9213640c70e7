//! Two-ply lookahead
//!
//! Every legal move `m` is valued as `score(m) - min(score(r))` over the
//! opponent's legal replies `r` with our stone at `m`. Taking the minimum
//! reply rewards moves that leave the opponent only weak options; it is
//! not a minimax worst case. Cost is O(L^2) placements and O(L^2 * W)
//! window scans for L legal moves and W windows, so this is only practical
//! on small boards or late in a game.

use crate::board::{Pos, Stone};
use crate::eval::score_move;
use crate::game::GameState;

use super::ranking::ScoredMove;
use super::simulation::Placement;

/// Lowest score among the replies available to `replier`, or 0 when the
/// board has no legal reply left
pub fn weakest_reply<S: GameState + ?Sized>(state: &mut S, replier: Stone, other: Stone) -> i32 {
    let mut weakest: Option<i32> = None;
    for reply in state.legal_moves() {
        let score = score_move(state, reply, replier, other);
        weakest = Some(weakest.map_or(score, |w| w.min(score)));
    }
    weakest.unwrap_or(0)
}

/// Two-ply value of every legal move for `own`, in legal-move order
pub fn two_ply_scores<S: GameState + ?Sized>(
    state: &mut S,
    own: Stone,
    opponent: Stone,
) -> Vec<ScoredMove> {
    let legal = state.legal_moves();
    let mut scored = Vec::with_capacity(legal.len());
    for pos in legal {
        let own_score = score_move(state, pos, own, opponent);
        let reply = {
            let mut placed = Placement::new(state, pos, own);
            weakest_reply(&mut *placed, opponent, own)
        };
        scored.push(ScoredMove {
            pos,
            score: own_score - reply,
        });
    }
    scored
}

/// Move with the highest two-ply value; ties go to the first in row-major order
pub fn best_move<S: GameState + ?Sized>(state: &mut S, own: Stone, opponent: Stone) -> Option<ScoredMove> {
    two_ply_scores(state, own, opponent)
        .into_iter()
        .fold(None, |best: Option<ScoredMove>, m| match best {
            Some(b) if b.score >= m.score => Some(b),
            _ => Some(m),
        })
}

/// Position of [`best_move`]
#[inline]
pub fn best_position<S: GameState + ?Sized>(state: &mut S, own: Stone, opponent: Stone) -> Option<Pos> {
    best_move(state, own, opponent).map(|m| m.pos)
}
