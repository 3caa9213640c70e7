use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_stone_symbols() {
    assert_eq!(Stone::Black.symbol(), 'X');
    assert_eq!(Stone::White.symbol(), 'O');
    assert_eq!(Stone::Empty.symbol(), '.');
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(7, 7);
    assert_eq!(pos.row, 7);
    assert_eq!(pos.col, 7);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0, 15));
    assert!(Pos::is_valid(14, 14, 15));
    assert!(!Pos::is_valid(-1, 0, 15));
    assert!(!Pos::is_valid(0, -1, 15));
    assert!(!Pos::is_valid(15, 0, 15));
    assert!(!Pos::is_valid(0, 15, 15));
    assert!(Pos::is_valid(18, 18, 19));
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(0, 0);
    assert_eq!(pos.offset(Direction::Diagonal, 2, 15), Some(Pos::new(2, 2)));
    assert_eq!(pos.offset(Direction::AntiDiagonal, 1, 15), None);
    assert_eq!(pos.offset(Direction::Horizontal, 14, 15), Some(Pos::new(0, 14)));
    assert_eq!(pos.offset(Direction::Horizontal, 15, 15), None);
}

#[test]
fn test_pos_ordering_is_row_major() {
    assert!(Pos::new(0, 14) < Pos::new(1, 0));
    assert!(Pos::new(3, 2) < Pos::new(3, 6));
}

#[test]
fn test_direction_order() {
    let deltas: Vec<_> = Direction::ALL.iter().map(|d| d.delta()).collect();
    assert_eq!(deltas, vec![(0, 1), (1, 0), (1, 1), (1, -1)]);
}

#[test]
fn test_board_place_remove() {
    let mut board = Board::new();
    let pos = Pos::new(7, 7);
    assert!(board.is_empty(pos));
    board.place_stone(pos, Stone::Black);
    assert_eq!(board.get(pos), Stone::Black);
    assert_eq!(board.stone_count(), 1);
    board.remove_stone(pos);
    assert!(board.is_board_empty());
}

#[test]
fn test_board_sizes() {
    assert_eq!(Board::new().size(), DEFAULT_BOARD_SIZE);
    assert_eq!(Board::with_size(19).center(), 9);
    assert_eq!(Board::with_size(6).center(), 3);
}

#[test]
#[should_panic]
fn test_board_too_small() {
    let _ = Board::with_size(4);
}

#[test]
fn test_neighbors_in_bounds() {
    let board = Board::new();
    assert_eq!(board.neighbors(Pos::new(0, 0)).count(), 3);
    assert_eq!(board.neighbors(Pos::new(0, 7)).count(), 5);
    assert_eq!(board.neighbors(Pos::new(7, 7)).count(), 8);
}

#[test]
fn test_positions_row_major() {
    let board = Board::with_size(5);
    let all: Vec<_> = board.positions().collect();
    assert_eq!(all.len(), 25);
    assert_eq!(all[0], Pos::new(0, 0));
    assert_eq!(all[1], Pos::new(0, 1));
    assert_eq!(all[5], Pos::new(1, 0));
}

#[test]
fn test_board_full() {
    let mut board = Board::with_size(5);
    for pos in board.positions().collect::<Vec<_>>() {
        board.place_stone(pos, Stone::White);
    }
    assert!(board.is_full());
    assert_eq!(board.empty_positions().count(), 0);
}

#[test]
fn test_render_standard() {
    let mut board = Board::with_size(5);
    board.place_stone(Pos::new(1, 2), Stone::Black);
    board.place_stone(Pos::new(3, 4), Stone::White);
    let text = board.to_string();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "     0  1  2  3  4");
    assert_eq!(lines[2], "  1  .  .  X  .  .");
    assert_eq!(lines[4], "  3  .  .  .  .  O");
}
