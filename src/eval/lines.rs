//! Five-cell window enumeration
//!
//! A window is a straight run of [`WINDOW_LEN`] cells along one of the four
//! axes, fully inside the board. Windows are recomputed on every scan; the
//! boards involved are small enough that caching never pays off.

use crate::board::{Board, Direction, Pos, Stone};

/// Cells per window (five in a row)
pub const WINDOW_LEN: usize = 5;

/// A five-cell line segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: Pos,
    pub dir: Direction,
    cells: [Pos; WINDOW_LEN],
}

impl Window {
    /// Window starting at `start` along `dir`, if all cells fit on a board of `size`
    pub fn new(start: Pos, dir: Direction, size: usize) -> Option<Self> {
        let mut cells = [start; WINDOW_LEN];
        for (i, cell) in cells.iter_mut().enumerate().skip(1) {
            *cell = start.offset(dir, i as i32, size)?;
        }
        Some(Self { start, dir, cells })
    }

    /// Cells in window order
    #[inline]
    pub fn cells(&self) -> &[Pos; WINDOW_LEN] {
        &self.cells
    }

    /// Count `(stones of color, empty cells)` in this window
    #[inline]
    pub fn counts(&self, board: &Board, color: Stone) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(stones, empty), &p| match board.get(p) {
            s if s == color => (stones + 1, empty),
            Stone::Empty => (stones, empty + 1),
            _ => (stones, empty),
        })
    }

    /// First empty cell in window order
    #[inline]
    pub fn first_empty(&self, board: &Board) -> Option<Pos> {
        self.cells.iter().copied().find(|&p| board.is_empty(p))
    }
}

/// Every window on a board of `size`.
///
/// Order is row-major over start cells, then horizontal, vertical,
/// diagonal, anti-diagonal. Callers rely on this order to break ties.
pub fn windows(size: usize) -> impl Iterator<Item = Window> {
    let n = size as u8;
    (0..n)
        .flat_map(move |r| (0..n).map(move |c| Pos::new(r, c)))
        .flat_map(move |start| {
            Direction::ALL
                .into_iter()
                .filter_map(move |dir| Window::new(start, dir, size))
        })
}
