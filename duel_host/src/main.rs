//! Command-line host for a duel against the AI.
//!
//! Narration goes to stdout, diagnostics to stderr.
//!
//! ```bash
//! # Play the built-in duel
//! cargo run -p duel_host
//!
//! # Watch a seeded, unattended duel without pauses
//! cargo run -p duel_host -- --auto --instant --seed 7
//! ```

mod console_observer;
mod players;

use clap::Parser;
use console_observer::ConsoleObserver;
use duel_lib::engine::ai::RandomDecisions;
use duel_lib::engine::pacing::{PacingConfig, TokioPacer};
use duel_lib::engine::{CombatEngine, ConfigError};
use duel_lib::players::{Player, RandomPlayer};
use duel_lib::rules::setup::{MatchConfig, SetupLoadError};
use duel_lib::rules::{MatchResult, Side};
use duel_lib::runner::{run_match, MatchError};
use players::CliPlayer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_MATCH: &str = include_str!("../assets/default_match.json");

#[derive(Parser)]
#[command(name = "duel_host")]
#[command(about = "Fight a turn-based duel against an AI opponent")]
#[command(version)]
struct Cli {
    /// Match setup file (JSON). The built-in duel is used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip presentation pauses
    #[arg(long)]
    instant: bool,

    /// Let the computer play the player side as well
    #[arg(long)]
    auto: bool,

    /// Seed for every random choice in the match
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Error, Debug)]
enum HostError {
    #[error("{0}")]
    Load(#[from] SetupLoadError),
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Match(#[from] MatchError),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(result) => {
            info!(%result, "duel finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "duel aborted");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> Result<MatchResult, HostError> {
    let config = match &cli.config {
        Some(path) => MatchConfig::from_path(path)?,
        None => MatchConfig::from_json_str(DEFAULT_MATCH)?,
    };

    let pacing = if cli.instant {
        PacingConfig {
            opening_ms: 0,
            wind_up_ms: 0,
            aftermath_ms: 0,
            enemy_thinking_ms: 0,
        }
    } else {
        config.pacing
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let player_rng = StdRng::seed_from_u64(rng.gen());

    let mut engine = CombatEngine::begin_match(
        &config.setup,
        RandomDecisions::new(rng),
        TokioPacer::new(pacing),
    )?;
    engine.add_observer(ConsoleObserver::new(engine.view().names));

    let mut player: Box<dyn Player + Send> = if cli.auto {
        Box::new(RandomPlayer::new(RandomDecisions::new(player_rng)))
    } else {
        Box::new(CliPlayer::new(engine.basic_attack(Side::Player).name.clone()))
    };

    Ok(run_match(&mut engine, player.as_mut()).await?)
}
