//! Game orchestration between seats.

use crate::players::Seat;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_pegs::{Game, Player};
use tracing::{debug, info, instrument};

/// Runs a game between two seats until someone wins.
pub struct Orchestrator {
    game: Game,
    player_one: Box<dyn Seat>,
    player_two: Box<dyn Seat>,
}

impl Orchestrator {
    /// Creates an orchestrator for `game`.
    pub fn new(game: Game, player_one: Box<dyn Seat>, player_two: Box<dyn Seat>) -> Self {
        Self {
            game,
            player_one,
            player_two,
        }
    }

    /// Runs the game loop and returns the winner.
    ///
    /// Illegal moves from seats that may retry are reported and asked for
    /// again. From any other seat they end the run with an error.
    #[instrument(skip_all, fields(pegs_left = self.game.peg_count()))]
    pub fn run(&mut self, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<Player> {
        info!("Starting game orchestration");
        writeln!(out, "{}", self.game).context("Failed to write board")?;

        loop {
            if let Some(winner) = self.game.state().winner() {
                let name = self.seat(winner).name().to_string();
                info!(%winner, seat = %name, plies = self.game.history().len(), "Game over");
                writeln!(out, "{} wins", name).context("Failed to write result")?;
                return Ok(winner);
            }

            let player = self.game.to_move();
            let seat = match player {
                Player::One => &mut self.player_one,
                Player::Two => &mut self.player_two,
            };
            let mov = seat.choose_move(&mut self.game, input, out)?;

            match self.game.make_move(&mov) {
                Ok(()) => {
                    debug!(%player, %mov, "Move applied");
                    writeln!(out, "{}", self.game).context("Failed to write board")?;
                }
                Err(e) if seat.may_retry() => {
                    writeln!(out, "{}", e).context("Failed to write error")?;
                }
                Err(e) => {
                    return Err(e).with_context(|| format!("{} played an illegal move", seat.name()));
                }
            }
        }
    }

    fn seat(&self, player: Player) -> &dyn Seat {
        match player {
            Player::One => self.player_one.as_ref(),
            Player::Two => self.player_two.as_ref(),
        }
    }
}
