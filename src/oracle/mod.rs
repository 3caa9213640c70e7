//! Advisory oracle
//!
//! A language-model completion client consulted as a tie-breaker among the
//! top candidates. The client owns transport, retries and timeouts; the
//! advisor sends one request per turn and treats anything unusable in the
//! answer as "no advice".

pub mod parse;
pub mod prompt;

use serde::Serialize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::error::OracleError;

pub use parse::{extract_move, validate_answer, AnswerScope, Rejection};
pub use prompt::build_messages;

/// Chat message author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One role-tagged chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Completion client seam
#[allow(async_fn_in_trait)]
pub trait Oracle {
    /// Free-form completion for the conversation so far
    async fn complete(&self, messages: &[Message]) -> Result<String, OracleError>;
}

/// No oracle wired in; every consultation falls back
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOracle;

impl Oracle for NoOracle {
    async fn complete(&self, _messages: &[Message]) -> Result<String, OracleError> {
        Err(OracleError::Unavailable)
    }
}

/// A human at the terminal answers in place of a model
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinOracle;

impl Oracle for StdinOracle {
    async fn complete(&self, messages: &[Message]) -> Result<String, OracleError> {
        let mut stdout = tokio::io::stdout();
        for message in messages.iter().filter(|m| m.role == Role::User) {
            stdout.write_all(message.content.as_bytes()).await?;
            stdout.write_all(b"\n> ").await?;
        }
        stdout.flush().await?;

        let mut line = String::new();
        let read = BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;
        if read == 0 {
            return Err(OracleError::Transport("stdin closed".to_string()));
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_wire_shape() {
        let json = serde_json::to_string(&[Message::system("rules"), Message::user("board")]).unwrap();
        assert_eq!(
            json,
            r#"[{"role":"system","content":"rules"},{"role":"user","content":"board"}]"#
        );
    }

    #[tokio::test]
    async fn test_no_oracle_is_unavailable() {
        let result = NoOracle.complete(&[Message::user("hi")]).await;
        assert!(matches!(result, Err(OracleError::Unavailable)));
    }
}
