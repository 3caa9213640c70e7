//! Agent capability set
//!
//! The hosting framework creates an agent once per game, tells it which
//! color it plays, then asks for one move per turn.

use crate::board::{Pos, Stone};
use crate::game::GameState;

/// Per-game identity of the agent. Fixed after [`Agent::setup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSession {
    pub own: Stone,
    pub opponent: Stone,
    pub debug: bool,
}

impl AgentSession {
    /// # Panics
    /// If `player` is [`Stone::Empty`].
    pub fn new(player: Stone, debug: bool) -> Self {
        assert_ne!(player, Stone::Empty, "an agent must play a color");
        Self {
            own: player,
            opponent: player.opponent(),
            debug,
        }
    }
}

/// What the turn loop needs from a player
#[allow(async_fn_in_trait)]
pub trait Agent {
    /// Called once when the game starts
    fn setup(&mut self, player: Stone);

    /// Pick a move, or `None` when no legal move remains.
    ///
    /// Any returned position is legal on `state`.
    async fn choose_move<S: GameState + Clone>(&mut self, state: &S) -> Option<Pos>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_colors() {
        let session = AgentSession::new(Stone::White, true);
        assert_eq!(session.own, Stone::White);
        assert_eq!(session.opponent, Stone::Black);
        assert!(session.debug);
    }

    #[test]
    #[should_panic]
    fn test_session_rejects_empty() {
        let _ = AgentSession::new(Stone::Empty, false);
    }
}
