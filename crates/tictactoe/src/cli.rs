//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::{Difficulty, Player};

/// Tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(
    about = "Tic-tac-toe in the terminal, against a person or the computer",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Path to a TOML config file (ignored if missing)
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,

        /// Computer strength: easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Two people share the board instead of playing the computer
        #[arg(long)]
        pvp: bool,

        /// Who moves first (the human, against the computer)
        #[arg(long)]
        first: Option<Player>,

        /// Seed for reproducible computer moves
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Let two computer players fight it out
    Duel {
        /// Strength of player X
        #[arg(long, default_value = "hard")]
        x: Difficulty,

        /// Strength of player O
        #[arg(long, default_value = "hard")]
        o: Difficulty,

        /// Number of games; the starting player alternates
        #[arg(short = 'n', long, default_value = "100")]
        games: u32,

        /// Seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score every open cell of a position
    Analyze {
        /// Moves so far, comma separated, as cell numbers 1-9 or labels
        #[arg(short, long, default_value = "")]
        moves: String,

        /// Who made the first move
        #[arg(long, default_value = "X")]
        first: Player,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}
