//! Gomoku advisor CLI
//!
//! Plays one self-play game between two advisors and prints every move.
//! With `--oracle stdin` the person at the terminal answers the oracle
//! prompts.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use gomoku::board::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use gomoku::{
    AdvisorConfig, Agent, BoardStyle, Game, GameState, Message, MoveAdvisor, NoOracle, Oracle,
    OracleError, StdinOracle, Stone, Variant, DEFAULT_BOARD_SIZE,
};

#[derive(Parser)]
#[command(name = "gomoku")]
#[command(about = "Self-play with the Gomoku move advisor")]
struct Cli {
    /// Board size
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Preset for Black (llm-only, tactical, ranked, lookahead)
    #[arg(long, default_value = "ranked")]
    black: Variant,

    /// Preset for White
    #[arg(long, default_value = "tactical")]
    white: Variant,

    /// TOML config for Black (replaces --black)
    #[arg(long, value_name = "FILE")]
    black_config: Option<PathBuf>,

    /// TOML config for White (replaces --white)
    #[arg(long, value_name = "FILE")]
    white_config: Option<PathBuf>,

    /// Seed for random fallbacks (White uses seed + 1)
    #[arg(long)]
    seed: Option<u64>,

    /// Who answers oracle prompts
    #[arg(long, value_enum, default_value_t = OracleChoice::None)]
    oracle: OracleChoice,

    /// Stop after this many moves
    #[arg(long)]
    max_moves: Option<usize>,

    /// Log every decision
    #[arg(long)]
    debug: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OracleChoice {
    None,
    Stdin,
}

impl Oracle for OracleChoice {
    async fn complete(&self, messages: &[Message]) -> Result<String, OracleError> {
        match self {
            OracleChoice::None => NoOracle.complete(messages).await,
            OracleChoice::Stdin => StdinOracle.complete(messages).await,
        }
    }
}

fn side_config(
    variant: Variant,
    file: Option<&PathBuf>,
    seed: Option<u64>,
    debug: bool,
) -> Result<AdvisorConfig> {
    let mut config = match file {
        Some(path) => AdvisorConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => AdvisorConfig::preset(variant),
    };
    config.seed = seed.or(config.seed);
    config.debug |= debug;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&cli.size) {
        bail!(
            "board size must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE}, got {}",
            cli.size
        );
    }

    let black_config = side_config(cli.black, cli.black_config.as_ref(), cli.seed, cli.debug)?;
    let white_config = side_config(
        cli.white,
        cli.white_config.as_ref(),
        cli.seed.map(|s| s.wrapping_add(1)),
        cli.debug,
    )?;

    let mut black = MoveAdvisor::new(black_config, cli.oracle);
    let mut white = MoveAdvisor::new(white_config, cli.oracle);
    black.setup(Stone::Black);
    white.setup(Stone::White);

    let mut game = Game::new(cli.size);
    let limit = cli.max_moves.unwrap_or(usize::MAX);
    tracing::info!(size = cli.size, black = ?cli.black, white = ?cli.white, "starting game");

    while !game.is_over() && game.history().len() < limit {
        let color = game.to_move();
        let advisor = match color {
            Stone::Black => &mut black,
            _ => &mut white,
        };
        let decision = advisor.choose_move_with_stats(&game).await;
        let Some(pos) = decision.best_move else {
            tracing::info!("{} has no move", color.symbol());
            break;
        };

        game.play(pos.row as i32, pos.col as i32)
            .with_context(|| format!("{} chose an illegal move {pos}", color.symbol()))?;
        println!(
            "{} plays {pos} [{:?}, {} ms]",
            color.symbol(),
            decision.kind,
            decision.time_ms
        );
        println!("{}", game.format_board(BoardStyle::Standard));
    }

    match game.winner() {
        Some(stone) => println!("{} wins after {} moves", stone.symbol(), game.history().len()),
        None if game.board().is_full() => println!("Draw: board full"),
        None => println!("Stopped after {} moves", game.history().len()),
    }
    Ok(())
}
