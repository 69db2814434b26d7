//! Strictly Pegs CLI - terminal host for the engine and solver
//!
//! Loads a game from a TOML config and command-line overrides, then lists
//! moves, solves positions, prints snapshots, or runs a game between people
//! and the solver.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod orchestrator;
pub mod players;

// Crate-level exports - Configuration
pub use config::{ConfigError, PegConfig, RulesConfig};

// Crate-level exports - Play
pub use orchestrator::Orchestrator;
pub use players::{HumanSeat, Seat, SolverSeat};
