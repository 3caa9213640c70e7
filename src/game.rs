//! Game framework seam
//!
//! The hosting framework owns the board, decides legality and runs the turn
//! loop. The advisor only talks to it through [`GameState`]. [`Game`] is a
//! free-style implementation used by the CLI and the tests.

use crate::board::{Board, Pos, Stone};
use crate::error::GameError;
use crate::rules::has_five_at_pos;

/// Board rendering styles understood by [`GameState::format_board`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardStyle {
    /// Column header plus one labelled line per row
    #[default]
    Standard,
    /// Bare symbol rows, no coordinates
    Compact,
}

/// What the advisor needs from the hosting framework.
///
/// `board_mut` exists only for scoped simulation; see
/// [`crate::search::Placement`].
pub trait GameState {
    fn board(&self) -> &Board;

    fn board_mut(&mut self) -> &mut Board;

    fn board_size(&self) -> usize {
        self.board().size()
    }

    /// Framework legality check. Must reject out-of-bounds coordinates.
    fn is_valid_move(&self, row: i32, col: i32) -> bool;

    /// Legal moves in row-major order
    fn legal_moves(&self) -> Vec<Pos> {
        self.board()
            .positions()
            .filter(|p| self.is_valid_move(p.row as i32, p.col as i32))
            .collect()
    }

    fn format_board(&self, style: BoardStyle) -> String {
        let board = self.board();
        match style {
            BoardStyle::Standard => board.to_string(),
            BoardStyle::Compact => {
                let size = board.size() as u8;
                let mut out = String::with_capacity((size as usize + 1) * size as usize);
                for r in 0..size {
                    out.extend((0..size).map(|c| board.get(Pos::new(r, c)).symbol()));
                    out.push('\n');
                }
                out
            }
        }
    }
}

/// Free-style Gomoku: any empty cell is legal, five or more in a row wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Stone,
    winner: Option<Stone>,
    history: Vec<Pos>,
}

impl Game {
    /// New game on an empty board of `size`; Black moves first
    pub fn new(size: usize) -> Self {
        Self::from_board(Board::with_size(size), Stone::Black)
    }

    /// Wrap an existing position
    pub fn from_board(board: Board, to_move: Stone) -> Self {
        Self {
            board,
            to_move,
            winner: None,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn to_move(&self) -> Stone {
        self.to_move
    }

    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    #[inline]
    pub fn history(&self) -> &[Pos] {
        &self.history
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.board.is_full()
    }

    /// Play a move for the side to move.
    ///
    /// Returns the winner if this move completed five in a row.
    pub fn play(&mut self, row: i32, col: i32) -> Result<Option<Stone>, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let size = self.board.size();
        let pos = Pos::checked(row, col, size).ok_or(GameError::OutOfBounds { row, col, size })?;
        if !self.board.is_empty(pos) {
            return Err(GameError::Occupied(pos));
        }

        let color = self.to_move;
        self.board.place_stone(pos, color);
        self.history.push(pos);
        if has_five_at_pos(&self.board, pos, color) {
            self.winner = Some(color);
        }
        self.to_move = color.opponent();
        Ok(self.winner)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::from_board(Board::new(), Stone::Black)
    }
}

impl GameState for Game {
    fn board(&self) -> &Board {
        &self.board
    }

    fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn is_valid_move(&self, row: i32, col: i32) -> bool {
        match Pos::checked(row, col, self.board.size()) {
            Some(pos) => self.board.is_empty(pos),
            None => false,
        }
    }
}
