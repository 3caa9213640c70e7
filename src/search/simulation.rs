//! Scoped stone placement
//!
//! Simulation writes hypothetical stones into a board. A [`Placement`] owns
//! the write: the stone is removed when the guard drops, on every exit path
//! including early returns and unwinding. Nest guards by reborrowing through
//! `DerefMut`.

use std::ops::{Deref, DerefMut};

use crate::board::{Pos, Stone};
use crate::game::GameState;

/// A stone placed for the lifetime of the guard
pub struct Placement<'a, S: GameState + ?Sized> {
    state: &'a mut S,
    pos: Pos,
}

impl<'a, S: GameState + ?Sized> Placement<'a, S> {
    /// Place `stone` at `pos`.
    ///
    /// # Panics
    /// If `pos` is off the board or already occupied.
    pub fn new(state: &'a mut S, pos: Pos, stone: Stone) -> Self {
        let board = state.board_mut();
        assert!(board.contains(pos), "cannot simulate a stone off the board at {pos}");
        assert!(board.is_empty(pos), "cannot simulate a stone on occupied {pos}");
        board.place_stone(pos, stone);
        Self { state, pos }
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl<S: GameState + ?Sized> Deref for Placement<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.state
    }
}

impl<S: GameState + ?Sized> DerefMut for Placement<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.state
    }
}

impl<S: GameState + ?Sized> Drop for Placement<'_, S> {
    fn drop(&mut self) {
        self.state.board_mut().remove_stone(self.pos);
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use super::*;
    use crate::game::Game;

    #[test]
    fn test_placement_is_scoped() {
        let mut game = Game::new(9);
        let pos = Pos::new(4, 4);
        {
            let placed = Placement::new(&mut game, pos, Stone::Black);
            assert_eq!(placed.board().get(pos), Stone::Black);
            assert!(!placed.is_valid_move(4, 4));
            assert_eq!(placed.pos(), pos);
        }
        assert!(game.board().is_empty(pos));
        assert!(game.is_valid_move(4, 4));
    }

    #[test]
    fn test_nested_placements() {
        let mut game = Game::new(9);
        let before = game.clone();
        {
            let mut outer = Placement::new(&mut game, Pos::new(1, 1), Stone::Black);
            {
                let inner = Placement::new(&mut *outer, Pos::new(2, 2), Stone::White);
                assert_eq!(inner.board().stone_count(), 2);
            }
            assert_eq!(outer.board().stone_count(), 1);
            assert_eq!(outer.board().get(Pos::new(1, 1)), Stone::Black);
        }
        assert_eq!(game, before);
    }

    #[test]
    fn test_placement_restored_on_panic() {
        let mut game = Game::new(9);
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _placed = Placement::new(&mut game, Pos::new(3, 3), Stone::White);
            panic!("simulated failure");
        }));
        assert!(result.is_err());
        assert!(game.board().is_board_empty());
    }

    #[test]
    #[should_panic(expected = "occupied")]
    fn test_placement_on_occupied_cell() {
        let mut game = Game::new(9);
        game.play(0, 0).unwrap();
        let _placed = Placement::new(&mut game, Pos::new(0, 0), Stone::White);
    }
}
