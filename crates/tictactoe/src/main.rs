//! tictactoe - terminal front-end for the tic-tac-toe engine
//!
//! Interactive play, computer duels and position analysis.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analyze;
mod cli;
mod config;
mod duel;
mod play;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::PlayConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use tictactoe_engine::{Difficulty, GameMode, Player, Session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout is the game surface.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            difficulty,
            pvp,
            first,
            seed,
        } => run_play(&config, difficulty, pvp, first, seed),
        Command::Duel {
            x,
            o,
            games,
            seed,
            json,
        } => run_duel(x, o, games, seed, json),
        Command::Analyze { moves, first, json } => run_analyze(&moves, first, json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(
    config_path: &Path,
    difficulty: Option<Difficulty>,
    pvp: bool,
    first: Option<Player>,
    seed: Option<u64>,
) -> Result<()> {
    let mut config = PlayConfig::load(config_path)
        .with_context(|| format!("Loading {}", config_path.display()))?;
    if let Some(difficulty) = difficulty {
        config = config.with_difficulty(difficulty);
    }
    if pvp {
        config = config.with_mode(GameMode::PlayerVsPlayer);
    }
    if let Some(first) = first {
        config = config.with_first(first);
    }
    if seed.is_some() {
        config = config.with_seed(seed);
    }

    let session_config = config.session_config();
    let mut session = match config.seed() {
        Some(seed) => Session::with_seed(session_config, *seed),
        None => Session::new(session_config),
    };

    info!("Starting interactive game");
    let stdin = std::io::stdin();
    play::run(&mut session, stdin.lock(), std::io::stdout().lock())
}

/// Run a series of computer-versus-computer games
#[instrument]
fn run_duel(x: Difficulty, o: Difficulty, games: u32, seed: Option<u64>, json: bool) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let tally = duel::run(x, o, games, &mut rng);
    info!(?tally, "Duel finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("{} games, X ({}) vs O ({})", tally.games(), x, o);
        println!("X wins: {}", tally.x_wins);
        println!("O wins: {}", tally.o_wins);
        println!("Draws:  {}", tally.draws);
    }
    Ok(())
}

/// Print move scores for a position
#[instrument]
fn run_analyze(moves: &str, first: Player, json: bool) -> Result<()> {
    let board = analyze::replay(moves, first)?;
    let analysis = analyze::analyze(board);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", analysis);
    }
    Ok(())
}
