//! Advisor configuration
//!
//! Successive versions of the agent differ only in which urgency tiers they
//! check, whether they score or look ahead, and how they use the oracle.
//! Those choices live here instead of in separate agents.
//!
//! Config files are TOML. An optional `variant` key picks the preset the
//! remaining keys override:
//!
//! ```toml
//! variant = "ranked"
//! candidates = 5
//! debug = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Urgency tiers checked before any scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatTiers {
    /// No forced moves; go straight to scoring / oracle
    None,
    /// Win if possible, else block the opponent's win
    Immediate,
    /// Immediate tiers, then block the opponent's open three
    #[default]
    OpenThree,
}

impl ThreatTiers {
    #[inline]
    pub fn immediate(self) -> bool {
        self != ThreatTiers::None
    }

    #[inline]
    pub fn open_three(self) -> bool {
        self == ThreatTiers::OpenThree
    }
}

/// How the advisory oracle is consulted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OracleMode {
    /// Never consulted
    Off,
    /// Any legal cell in the answer is accepted
    AnyLegal,
    /// Only one of the offered candidates is accepted
    #[default]
    Candidates,
}

/// What to play when the oracle gives nothing usable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fallback {
    /// Highest-scored move (random if scoring is off)
    #[default]
    TopScored,
    /// Uniformly random legal move
    Random,
}

/// Named presets, oldest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Ask the oracle, accept any legal cell, random fallback
    LlmOnly,
    /// Immediate win/block before asking the oracle
    Tactical,
    /// All tiers, score every move, offer the top candidates to the oracle
    #[default]
    Ranked,
    /// All tiers, then two-ply lookahead; no oracle
    Lookahead,
}

impl std::str::FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('-', "_").as_str() {
            "llm_only" => Ok(Variant::LlmOnly),
            "tactical" => Ok(Variant::Tactical),
            "ranked" => Ok(Variant::Ranked),
            "lookahead" => Ok(Variant::Lookahead),
            other => Err(format!("unknown variant `{other}`")),
        }
    }
}

/// Behaviour switches for [`crate::engine::MoveAdvisor`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdvisorConfig {
    pub threats: ThreatTiers,
    /// Rank all legal moves with the heuristic scorer
    pub scoring: bool,
    /// Decide by two-ply lookahead (skips the oracle)
    pub lookahead: bool,
    /// Number of top-scored moves offered to the oracle
    pub candidates: usize,
    pub oracle: OracleMode,
    pub fallback: Fallback,
    /// Log a summary of every decision at info level
    pub debug: bool,
    /// Seed for the random fallback; entropy when unset
    pub seed: Option<u64>,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self::preset(Variant::default())
    }
}

impl AdvisorConfig {
    pub fn preset(variant: Variant) -> Self {
        let base = Self {
            threats: ThreatTiers::OpenThree,
            scoring: true,
            lookahead: false,
            candidates: 3,
            oracle: OracleMode::Candidates,
            fallback: Fallback::TopScored,
            debug: false,
            seed: None,
        };
        match variant {
            Variant::LlmOnly => Self {
                threats: ThreatTiers::None,
                scoring: false,
                oracle: OracleMode::AnyLegal,
                fallback: Fallback::Random,
                ..base
            },
            Variant::Tactical => Self {
                threats: ThreatTiers::Immediate,
                scoring: false,
                oracle: OracleMode::AnyLegal,
                fallback: Fallback::Random,
                ..base
            },
            Variant::Ranked => base,
            Variant::Lookahead => Self {
                lookahead: true,
                oracle: OracleMode::Off,
                ..base
            },
        }
    }

    /// Parse a TOML config; `variant` selects the preset the other keys override
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let mut table: toml::Table = text.parse()?;
        let variant = match table.remove("variant") {
            Some(value) => Variant::deserialize(value)?,
            None => Variant::default(),
        };

        let mut merged = toml::Table::try_from(Self::preset(variant))?;
        merged.extend(table);
        Ok(Self::deserialize(toml::Value::Table(merged))?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Whether the oracle is consulted at all
    #[inline]
    pub fn consults_oracle(&self) -> bool {
        self.oracle != OracleMode::Off && !self.lookahead
    }
}
