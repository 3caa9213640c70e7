//! Heuristic move scorer
//!
//! Scores a single candidate move. The score is only meaningful relative to
//! other candidates scored on the same board in the same turn:
//! - Centrality: closeness to the center, summed per axis
//! - Adjacency: contact with existing stones of either color
//! - Threats: patterns present once our stone is placed

use crate::board::{Board, Pos, Stone};
use crate::game::GameState;
use crate::search::{find_pattern, Placement};

use super::patterns::{MoveScore, Pattern};

/// Centrality term: `max(0, (c - |row - c|) + (c - |col - c|))` with `c = size / 2`
#[inline]
pub fn centrality(board: &Board, pos: Pos) -> i32 {
    let center = board.center();
    let row = center - (pos.row as i32 - center).abs();
    let col = center - (pos.col as i32 - center).abs();
    (row + col).max(0)
}

/// Adjacency term: [`MoveScore::ADJACENT_STONE`] per occupied neighbour
#[inline]
pub fn adjacency(board: &Board, pos: Pos) -> i32 {
    board.neighbors(pos).filter(|&n| !board.is_empty(n)).count() as i32
        * MoveScore::ADJACENT_STONE
}

/// Threat bonuses for the current board, from `own`'s point of view.
///
/// The four checks are independent and may all fire. The opponent terms
/// fire whenever the opponent has the pattern anywhere, even if the move
/// just scored was a block of a different window.
pub fn threat_bonus<S: GameState + ?Sized>(state: &S, own: Stone, opponent: Stone) -> i32 {
    let checks = [
        (own, Pattern::Immediate, MoveScore::OWN_IMMEDIATE),
        (opponent, Pattern::Immediate, MoveScore::OPPONENT_IMMEDIATE),
        (own, Pattern::OpenThree, MoveScore::OWN_OPEN_THREE),
        (opponent, Pattern::OpenThree, MoveScore::OPPONENT_OPEN_THREE),
    ];
    checks
        .into_iter()
        .filter(|&(color, pattern, _)| find_pattern(state, color, pattern).is_some())
        .map(|(_, _, bonus)| bonus)
        .sum()
}

/// Score `pos` as a move for `own`.
///
/// `own` is placed at `pos` while threats are measured and removed before
/// returning; the board is unchanged afterwards.
///
/// # Panics
/// If `pos` is occupied or off the board.
#[must_use]
pub fn score_move<S: GameState + ?Sized>(
    state: &mut S,
    pos: Pos,
    own: Stone,
    opponent: Stone,
) -> i32 {
    let board = state.board();
    let positional = centrality(board, pos) + adjacency(board, pos);

    let placed = Placement::new(state, pos, own);
    positional + threat_bonus(&*placed, own, opponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;

    fn game_with(size: usize, stones: &[(u8, u8, Stone)]) -> Game {
        let mut board = Board::with_size(size);
        for &(r, c, s) in stones {
            board.place_stone(Pos::new(r, c), s);
        }
        Game::from_board(board, Stone::Black)
    }

    #[test]
    fn test_centrality_values() {
        let board = Board::new();
        assert_eq!(centrality(&board, Pos::new(7, 7)), 14);
        assert_eq!(centrality(&board, Pos::new(0, 0)), 0);
        assert_eq!(centrality(&board, Pos::new(14, 14)), 0);
        assert_eq!(centrality(&board, Pos::new(7, 0)), 7);
    }

    #[test]
    fn test_centrality_even_board_never_negative() {
        let board = Board::with_size(10);
        assert!(board.positions().all(|p| centrality(&board, p) >= 0));
        assert_eq!(centrality(&board, Pos::new(5, 5)), 10);
        assert_eq!(centrality(&board, Pos::new(9, 9)), 2);
    }

    #[test]
    fn test_centrality_monotone_toward_center() {
        let board = Board::new();
        for row in 0..15u8 {
            for col in 0..7u8 {
                let outer = centrality(&board, Pos::new(row, col));
                let inner = centrality(&board, Pos::new(row, col + 1));
                assert!(inner >= outer, "({row},{col}) -> ({row},{})", col + 1);
            }
            for col in (8..15u8).rev() {
                let outer = centrality(&board, Pos::new(row, col));
                let inner = centrality(&board, Pos::new(row, col - 1));
                assert!(inner >= outer);
            }
        }
    }

    #[test]
    fn test_adjacency_counts_both_colors() {
        let game = game_with(
            15,
            &[(6, 6, Stone::Black), (6, 8, Stone::White), (8, 7, Stone::White)],
        );
        assert_eq!(adjacency(game.board(), Pos::new(7, 7)), 6);
        assert_eq!(adjacency(game.board(), Pos::new(0, 0)), 0);
        // Corner neighbours stay in bounds
        let corner = game_with(15, &[(1, 1, Stone::Black)]);
        assert_eq!(adjacency(corner.board(), Pos::new(0, 0)), 2);
    }

    #[test]
    fn test_score_empty_board() {
        let mut game = Game::new(15);
        assert_eq!(score_move(&mut game, Pos::new(7, 7), Stone::Black, Stone::White), 14);
        assert_eq!(score_move(&mut game, Pos::new(0, 0), Stone::Black, Stone::White), 0);
    }

    #[test]
    fn test_score_own_threats() {
        let mut game = game_with(
            15,
            &[(7, 5, Stone::Black), (7, 6, Stone::Black), (7, 7, Stone::Black)],
        );
        // centrality 13, one neighbour, a four, and the open three (7,3)..(7,7)
        let score = score_move(&mut game, Pos::new(7, 8), Stone::Black, Stone::White);
        assert_eq!(score, 13 + 2 + 50 + 20);
    }

    #[test]
    fn test_score_opponent_four_left_open() {
        let stones: Vec<_> = (3..7).map(|c| (7u8, c as u8, Stone::White)).collect();
        let mut game = game_with(15, &stones);

        // Blocking one end still leaves (7,2)..(7,6) open, so the penalty fires
        let block = score_move(&mut game, Pos::new(7, 7), Stone::Black, Stone::White);
        let centrality = 14;
        let adjacency = 2;
        assert_eq!(
            block,
            centrality + adjacency + MoveScore::OPPONENT_IMMEDIATE + MoveScore::OPPONENT_OPEN_THREE
        );
    }

    #[test]
    fn test_score_leaves_board_unchanged() {
        let mut game = game_with(
            15,
            &[(7, 7, Stone::Black), (7, 8, Stone::White), (6, 6, Stone::Black)],
        );
        let before = game.clone();
        for pos in game.legal_moves() {
            let _ = score_move(&mut game, pos, Stone::Black, Stone::White);
        }
        assert_eq!(game, before);
    }

    #[test]
    #[should_panic(expected = "occupied")]
    fn test_score_occupied_cell_panics() {
        let mut game = game_with(15, &[(7, 7, Stone::White)]);
        let _ = score_move(&mut game, Pos::new(7, 7), Stone::Black, Stone::White);
    }
}
