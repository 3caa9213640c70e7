//! Board grid of arbitrary size

use std::fmt;

use super::{Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Square game board, row-major cell storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
}

impl Board {
    /// Create an empty standard-size board
    pub fn new() -> Self {
        Self::with_size(DEFAULT_BOARD_SIZE)
    }

    /// Create an empty board of the given size.
    ///
    /// # Panics
    /// If `size` is outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    pub fn with_size(size: usize) -> Self {
        assert!(
            (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size),
            "board size {size} outside {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}"
        );
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Center index used by the centrality term (integer division)
    #[inline]
    pub fn center(&self) -> i32 {
        (self.size / 2) as i32
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!(self.contains(pos), "{pos} outside {0}x{0} board", self.size);
        pos.row as usize * self.size + pos.col as usize
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[self.index(pos)]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone (no legality checks)
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        let idx = self.index(pos);
        self.cells[idx] = stone;
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        let idx = self.index(pos);
        self.cells[idx] = Stone::Empty;
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size as u8;
        (0..size).flat_map(move |r| (0..size).map(move |c| Pos::new(r, c)))
    }

    /// Empty positions in row-major order
    pub fn empty_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(|&p| self.is_empty(p))
    }

    /// In-bounds neighbours of `pos` (up to 8)
    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        let (row, col) = (pos.row as i32, pos.col as i32);
        (-1i32..=1)
            .flat_map(move |dr| (-1i32..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(move |(dr, dc)| Pos::checked(row + dr, col + dc, self.size))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s != Stone::Empty).count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&s| s != Stone::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Standard rendering: column header, then one labelled line per row.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, "{c:>3}")?;
        }
        writeln!(f)?;
        for r in 0..self.size {
            write!(f, "{r:>3}")?;
            for c in 0..self.size {
                let stone = self.get(Pos::new(r as u8, c as u8));
                write!(f, "{:>3}", stone.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
