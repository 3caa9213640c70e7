//! Board representation for Gomoku

use serde::Serialize;

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Standard board size (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Smallest board on which a five-cell window fits
pub const MIN_BOARD_SIZE: usize = 5;

/// Largest supported board (fits `Pos` coordinates in a `u8`)
pub const MAX_BOARD_SIZE: usize = 32;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Symbol used when rendering the board
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::Black => 'X',
            Stone::White => 'O',
            Stone::Empty => '.',
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_BOARD_SIZE && (col as usize) < MAX_BOARD_SIZE);
        Self { row, col }
    }

    /// Build a position from signed coordinates, if they fall inside a board of `size`
    #[inline]
    pub fn checked(row: i32, col: i32, size: usize) -> Option<Self> {
        if Self::is_valid(row, col, size) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        row >= 0 && row < size as i32 && col >= 0 && col < size as i32
    }

    /// Step `n` cells along `dir`, staying inside a board of `size`
    #[inline]
    pub fn offset(self, dir: Direction, n: i32, size: usize) -> Option<Self> {
        let (dr, dc) = dir.delta();
        Self::checked(self.row as i32 + dr * n, self.col as i32 + dc * n, size)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

/// Line axes scanned for patterns.
///
/// Reverse vectors are never needed: windows are enumerated from every cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
}

impl Direction {
    /// Scan order; determines which of several tied matches is found first
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Unit vector as (row, col) step
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}
