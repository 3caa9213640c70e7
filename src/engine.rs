//! Move advisor integrating threat detection, scoring and the oracle
//!
//! Each turn is decided by the first step that produces a move:
//!
//! 1. **Immediate win**: complete our own four
//! 2. **Block win**: complete the opponent's four for them
//! 3. **Block open three** (when enabled)
//! 4. **Lookahead** (when enabled): two-ply search, returned directly
//! 5. **Oracle**: offer the top-scored candidates to the advisory oracle
//! 6. **Fallback**: top-scored candidate, or a random legal move
//!
//! Nothing carries over between turns. Simulation happens on a private copy
//! of the framework state, never on the caller's board.
//!
//! # Example
//!
//! ```
//! use gomoku::{Agent, AdvisorConfig, Game, GameState, MoveAdvisor, NoOracle, Stone, Variant};
//!
//! let mut game = Game::new(9);
//! game.play(4, 4).unwrap();
//!
//! let mut advisor = MoveAdvisor::new(AdvisorConfig::preset(Variant::Ranked), NoOracle);
//! advisor.setup(Stone::White);
//!
//! let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! let pos = rt.block_on(advisor.choose_move(&game)).unwrap();
//! assert!(game.board().is_empty(pos));
//! ```

use std::time::Instant;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::agent::{Agent, AgentSession};
use crate::board::{Pos, Stone};
use crate::config::{AdvisorConfig, Fallback, OracleMode};
use crate::eval::Pattern;
use crate::game::GameState;
use crate::oracle::{build_messages, extract_move, validate_answer, AnswerScope, NoOracle, Oracle};
use crate::search::{best_move, find_pattern, rank_moves, ScoredMove, ThreatSummary};

/// Which step of the pipeline produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionKind {
    /// Completes our five
    ImmediateWin,
    /// Blocks the opponent's five
    BlockWin,
    /// Blocks the opponent's open three
    BlockOpenThree,
    /// Two-ply lookahead pick
    Lookahead,
    /// Accepted oracle answer
    Oracle,
    /// Highest-scored candidate after the oracle gave nothing usable
    TopScored,
    /// Random legal move
    Random,
    /// No legal move left (or the agent was never set up)
    NoMove,
}

/// Result of one turn with the data that produced it
#[derive(Debug, Clone)]
pub struct Decision {
    /// Move to play, if any
    pub best_move: Option<Pos>,
    pub kind: DecisionKind,
    /// Heuristic or two-ply score of the move, when one was computed
    pub score: Option<i32>,
    /// Top-scored moves considered this turn, best first
    pub candidates: Vec<ScoredMove>,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl Decision {
    #[inline]
    fn forced(pos: Pos, kind: DecisionKind, start: Instant) -> Self {
        Self {
            best_move: Some(pos),
            kind,
            score: None,
            candidates: Vec::new(),
            time_ms: start.elapsed().as_millis() as u64,
        }
    }

    #[inline]
    fn no_move(start: Instant) -> Self {
        Self {
            best_move: None,
            kind: DecisionKind::NoMove,
            score: None,
            candidates: Vec::new(),
            time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

/// Gomoku agent combining tactical checks, heuristic ranking and an
/// advisory oracle.
///
/// Construct once per game, call [`Agent::setup`], then
/// [`Agent::choose_move`] every turn.
pub struct MoveAdvisor<O: Oracle = NoOracle> {
    config: AdvisorConfig,
    oracle: O,
    session: Option<AgentSession>,
    rng: ChaCha8Rng,
}

impl<O: Oracle> MoveAdvisor<O> {
    #[must_use]
    pub fn new(config: AdvisorConfig, oracle: O) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            config,
            oracle,
            session: None,
            rng,
        }
    }

    #[must_use]
    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> Option<&AgentSession> {
        self.session.as_ref()
    }

    /// Decide a move for the current position and report how.
    ///
    /// Never fails: oracle problems resolve through the fallback, and an
    /// exhausted board yields [`DecisionKind::NoMove`].
    pub async fn choose_move_with_stats<S: GameState + Clone>(&mut self, state: &S) -> Decision {
        let start = Instant::now();
        let Some(session) = self.session else {
            tracing::warn!("choose_move called before setup");
            return Decision::no_move(start);
        };

        let decision = self.decide(state, &session, start).await;
        if session.debug {
            tracing::info!(
                player = %session.own.symbol(),
                kind = ?decision.kind,
                best_move = ?decision.best_move,
                score = ?decision.score,
                candidates = ?decision.candidates,
                time_ms = decision.time_ms,
                "decision"
            );
        }
        decision
    }

    async fn decide<S: GameState + Clone>(
        &mut self,
        state: &S,
        session: &AgentSession,
        start: Instant,
    ) -> Decision {
        let (own, opponent) = (session.own, session.opponent);
        let mut work = state.clone();

        let legal = work.legal_moves();
        if legal.is_empty() {
            return Decision::no_move(start);
        }

        let tiers = self.config.threats;
        if tiers.immediate() {
            if let Some(pos) = find_pattern(&work, own, Pattern::Immediate) {
                tracing::debug!(%pos, "completing own four");
                return Decision::forced(pos, DecisionKind::ImmediateWin, start);
            }
            if let Some(pos) = find_pattern(&work, opponent, Pattern::Immediate) {
                tracing::debug!(%pos, "blocking opponent four");
                return Decision::forced(pos, DecisionKind::BlockWin, start);
            }
        }
        if tiers.open_three() {
            if let Some(pos) = find_pattern(&work, opponent, Pattern::OpenThree) {
                tracing::debug!(%pos, "blocking opponent open three");
                return Decision::forced(pos, DecisionKind::BlockOpenThree, start);
            }
        }

        if self.config.lookahead {
            if let Some(best) = best_move(&mut work, own, opponent) {
                tracing::debug!(pos = %best.pos, score = best.score, "two-ply pick");
                return Decision {
                    best_move: Some(best.pos),
                    kind: DecisionKind::Lookahead,
                    score: Some(best.score),
                    candidates: vec![best],
                    time_ms: start.elapsed().as_millis() as u64,
                };
            }
        }

        let mut candidates = if self.config.scoring {
            rank_moves(&mut work, own, opponent)
        } else {
            Vec::new()
        };
        candidates.truncate(self.config.candidates.max(1));
        tracing::debug!(?candidates, "ranked candidates");

        if self.config.consults_oracle() {
            let summary = tiers
                .immediate()
                .then(|| ThreatSummary::scan(&work, own, opponent));
            if let Some(pos) = self.consult(&work, session, summary.as_ref(), &candidates).await {
                let score = candidates.iter().find(|m| m.pos == pos).map(|m| m.score);
                return Decision {
                    best_move: Some(pos),
                    kind: DecisionKind::Oracle,
                    score,
                    candidates,
                    time_ms: start.elapsed().as_millis() as u64,
                };
            }
        }

        self.fallback(&legal, candidates, start)
    }

    /// Ask the oracle once; `None` for any failure or unusable answer
    async fn consult<S: GameState>(
        &self,
        state: &S,
        session: &AgentSession,
        summary: Option<&ThreatSummary>,
        candidates: &[ScoredMove],
    ) -> Option<Pos> {
        let messages = build_messages(state, session, summary, candidates);
        let reply = match self.oracle.complete(&messages).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(%err, "oracle failed, falling back");
                return None;
            }
        };

        let Some(answer) = extract_move(&reply) else {
            tracing::warn!(reply = %reply.trim(), "no move in oracle answer, falling back");
            return None;
        };

        let offered: Vec<Pos> = candidates.iter().map(|m| m.pos).collect();
        let scope = match self.config.oracle {
            OracleMode::Candidates if !offered.is_empty() => AnswerScope::Candidates(&offered),
            _ => AnswerScope::AnyLegal,
        };
        match validate_answer(state, answer, scope) {
            Ok(pos) => {
                tracing::debug!(%pos, "oracle answer accepted");
                Some(pos)
            }
            Err(rejection) => {
                tracing::warn!(%rejection, "oracle answer rejected, falling back");
                None
            }
        }
    }

    fn fallback(&mut self, legal: &[Pos], candidates: Vec<ScoredMove>, start: Instant) -> Decision {
        let (best_move, kind, score) = match (self.config.fallback, candidates.first()) {
            (Fallback::TopScored, Some(top)) => (Some(top.pos), DecisionKind::TopScored, Some(top.score)),
            _ => match legal.choose(&mut self.rng) {
                Some(&pos) => (Some(pos), DecisionKind::Random, None),
                None => (None, DecisionKind::NoMove, None),
            },
        };
        Decision {
            best_move,
            kind,
            score,
            candidates,
            time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl<O: Oracle> Agent for MoveAdvisor<O> {
    fn setup(&mut self, player: Stone) {
        self.session = Some(AgentSession::new(player, self.config.debug));
    }

    async fn choose_move<S: GameState + Clone>(&mut self, state: &S) -> Option<Pos> {
        self.choose_move_with_stats(state).await.best_move
    }
}
