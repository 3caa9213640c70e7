//! Oracle prompt construction

use std::fmt::Write;

use crate::agent::AgentSession;
use crate::game::{BoardStyle, GameState};
use crate::search::{ScoredMove, ThreatSummary};

/// System instruction plus one user message describing the position.
///
/// `summary` and `candidates` are included only when present.
pub fn build_messages<S: GameState + ?Sized>(
    state: &S,
    session: &AgentSession,
    summary: Option<&ThreatSummary>,
    candidates: &[ScoredMove],
) -> Vec<super::Message> {
    let own = session.own.symbol();
    let rival = session.opponent.symbol();
    let size = state.board_size();

    let system = format!(
        "You are a professional Gomoku (five-in-a-row) player acting as a tactical engine. \
         You play as {own} and the opponent plays as {rival}. \
         Evaluate the board using this priority order:\n\
         1. If there is a move that wins immediately, choose it.\n\
         2. If the opponent has a move that wins next turn, block it.\n\
         3. If there is a move that creates an open four, choose it.\n\
         4. If there is a move that blocks the opponent's open four, choose it.\n\
         5. If there is a move that creates an open three, choose it.\n\
         6. Otherwise, play the strongest positional move that advances your attack or limits theirs.\n\
         Output only the coordinates of the chosen move."
    );

    let mut user = format!(
        "Here is the current board. The grid is {size}x{size}, with row and column indices labeled.\n\
         Cells contain:\n\
         - \".\" for empty\n\
         - \"{own}\" for your stones\n\
         - \"{rival}\" for opponent's stones\n\n{}",
        state.format_board(BoardStyle::Standard)
    );

    if let Some(summary) = summary.filter(|s| !s.is_quiet()) {
        user.push_str("\nThreats:\n");
        for line in summary.describe() {
            let _ = writeln!(user, "- {line}");
        }
    }

    if !candidates.is_empty() {
        user.push_str("\nChoose one of these candidate moves (best heuristic score first):\n");
        for m in candidates {
            let _ = writeln!(user, "- row {}, col {} (score {})", m.pos.row, m.pos.col, m.score);
        }
    }

    user.push_str(
        "\nReturn ONLY a JSON object with two integers: row and col.\n\
         No extra text, no explanation, no code block.\n\n\
         Example:\n{ \"row\": 3, \"col\": 4 }",
    );

    vec![super::Message::system(system), super::Message::user(user)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Pos, Stone};
    use crate::game::Game;
    use crate::oracle::Role;

    #[test]
    fn test_messages_shape() {
        let mut game = Game::new(9);
        game.play(4, 4).unwrap();
        let session = AgentSession::new(Stone::White, false);
        let messages = build_messages(&game, &session, None, &[]);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.contains("You play as O and the opponent plays as X"));
        assert_eq!(messages[1].role, Role::User);
        assert!(messages[1].content.contains("9x9"));
        assert!(messages[1].content.contains(&game.format_board(BoardStyle::Standard)));
        assert!(!messages[1].content.contains("Threats"));
        assert!(!messages[1].content.contains("candidate"));
    }

    #[test]
    fn test_messages_include_threats_and_candidates() {
        let mut game = Game::new(15);
        for (r, c) in [(7, 5), (0, 0), (7, 6), (0, 2), (7, 7), (0, 4), (7, 8)] {
            game.play(r, c).unwrap();
        }
        let session = AgentSession::new(Stone::White, false);
        let summary = ThreatSummary::scan(&game, session.own, session.opponent);
        let candidates = [ScoredMove { pos: Pos::new(7, 4), score: 120 }];
        let messages = build_messages(&game, &session, Some(&summary), &candidates);

        let user = &messages[1].content;
        assert!(user.contains("Opponent threatens to win at (7, 4)"));
        assert!(user.contains("- row 7, col 4 (score 120)"));
        assert!(user.ends_with("{ \"row\": 3, \"col\": 4 }"));
    }
}
