//! Five-in-a-row detection

use crate::board::{Board, Direction, Pos, Stone};

/// Check if there's 5+ in a row for the given color
pub fn has_five_in_row(board: &Board, stone: Stone) -> bool {
    find_five_positions(board, stone).is_some()
}

/// Count consecutive `color` stones from `pos` (exclusive) along `dir` times `sign`
#[inline]
fn run_length(board: &Board, pos: Pos, dir: Direction, sign: i32, color: Stone) -> usize {
    let size = board.size();
    (1..)
        .map_while(|i| pos.offset(dir, sign * i, size))
        .take_while(|&p| board.get(p) == color)
        .count()
}

/// Five-in-a-row check through a specific position.
///
/// Only checks the 4 axes through `pos`. No allocation.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    if color == Stone::Empty || board.get(pos) != color {
        return false;
    }
    Direction::ALL.iter().any(|&dir| {
        1 + run_length(board, pos, dir, 1, color) + run_length(board, pos, dir, -1, color) >= 5
    })
}

/// Find the positions of a 5-in-a-row if one exists
///
/// Returns the full run (at least 5 positions) starting from its first stone.
pub fn find_five_positions(board: &Board, stone: Stone) -> Option<Vec<Pos>> {
    if stone == Stone::Empty {
        return None;
    }
    let size = board.size();

    for pos in board.positions().filter(|&p| board.get(p) == stone) {
        for dir in Direction::ALL {
            // Only start from the first stone of a run
            if run_length(board, pos, dir, -1, stone) > 0 {
                continue;
            }
            let len = 1 + run_length(board, pos, dir, 1, stone);
            if len >= 5 {
                let line = (0..len as i32)
                    .filter_map(|i| pos.offset(dir, i, size))
                    .collect();
                return Some(line);
            }
        }
    }
    None
}

/// Check for a winner
pub fn check_winner(board: &Board) -> Option<Stone> {
    [Stone::Black, Stone::White]
        .into_iter()
        .find(|&stone| has_five_in_row(board, stone))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        assert!(has_five_in_row(&board, Stone::Black));
        assert!(!has_five_in_row(&board, Stone::White));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i, 9), Stone::Black);
        }
        assert!(has_five_in_row(&board, Stone::Black));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i, i), Stone::White);
        }
        assert!(has_five_in_row(&board, Stone::White));
    }

    #[test]
    fn test_five_in_row_anti_diagonal() {
        let mut board = Board::with_size(7);
        for i in 0..5u8 {
            board.place_stone(Pos::new(1 + i, 5 - i), Stone::Black);
        }
        assert!(has_five_in_row(&board, Stone::Black));
        assert!(has_five_at_pos(&board, Pos::new(3, 3), Stone::Black));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        for i in 0..6 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        let five = find_five_positions(&board, Stone::Black).unwrap();
        assert_eq!(five.len(), 6);
        assert_eq!(five[0], Pos::new(9, 0));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        assert!(!has_five_in_row(&board, Stone::Black));
        assert!(!has_five_at_pos(&board, Pos::new(9, 2), Stone::Black));
    }

    #[test]
    fn test_broken_line_not_win() {
        let mut board = Board::new();
        for i in [0, 1, 2, 4, 5] {
            board.place_stone(Pos::new(3, i), Stone::White);
        }
        board.place_stone(Pos::new(3, 3), Stone::Black);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_check_winner() {
        let mut board = Board::new();
        assert_eq!(check_winner(&board), None);
        for i in 0..5 {
            board.place_stone(Pos::new(i, 14), Stone::White);
        }
        assert_eq!(check_winner(&board), Some(Stone::White));
    }
}
