//! Command-line interface for strictly_pegs.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use strictly_pegs::Layout;

/// Strictly Pegs - a two-player peg-removal game with an exhaustive solver
#[derive(Parser, Debug)]
#[command(name = "strictly_pegs")]
#[command(about = "Play, analyze and solve peg-removal games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the named board layouts
    Layouts,

    /// List every legal move from the starting position
    Moves {
        /// Game settings
        #[command(flatten)]
        game: GameArgs,
    },

    /// Search for the best move from the starting position
    Solve {
        /// Game settings
        #[command(flatten)]
        game: GameArgs,
    },

    /// Print the starting position as a JSON snapshot
    Snapshot {
        /// Game settings
        #[command(flatten)]
        game: GameArgs,
    },

    /// Let the solver play both sides until the game ends
    Autoplay {
        /// Game settings
        #[command(flatten)]
        game: GameArgs,
    },

    /// Play interactively, entering moves as `x,y x,y`
    Play {
        /// Game settings
        #[command(flatten)]
        game: GameArgs,

        /// Who sits where: p = person, c = computer, first seat moves first
        #[arg(long, value_enum, default_value_t = Seating::PersonComputer)]
        players: Seating,
    },
}

/// Per-command overrides of the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct GameArgs {
    /// Named starting board
    #[arg(long)]
    pub layout: Option<Layout>,

    /// Fewest pegs per ply
    #[arg(long)]
    pub min: Option<u32>,

    /// Most pegs per ply
    #[arg(long)]
    pub max: Option<u32>,

    /// Require multi-peg takes to be contiguous
    #[arg(long)]
    pub adjacent: Option<bool>,

    /// Restrict multi-peg takes to a single row
    #[arg(long)]
    pub x_only: Option<bool>,

    /// Player two moves first
    #[arg(long)]
    pub second_player: bool,

    /// Start from a JSON snapshot instead of a layout
    #[arg(long, conflicts_with_all = ["layout", "min", "max", "adjacent", "x_only", "second_player"])]
    pub from_snapshot: Option<String>,
}

/// Seat assignment for interactive play.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seating {
    /// Person moves first, computer second
    #[value(name = "p-c")]
    PersonComputer,
    /// Computer moves first, person second
    #[value(name = "c-p")]
    ComputerPerson,
    /// Two people share the terminal
    #[value(name = "p-p")]
    PersonPerson,
}
