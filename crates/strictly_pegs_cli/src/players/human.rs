//! A person entering moves on a text stream.

use super::Seat;
use anyhow::{Context, Result, bail};
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use strictly_pegs::{Coord, Game, Move};
use tracing::{debug, instrument};

/// Error raised when typed input is not a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseMoveError {
    /// Nothing was entered.
    #[display("Enter at least one cell as x,y")]
    Empty,

    /// A cell is not of the form `x,y`.
    #[display("Expected x,y but got '{}'", _0)]
    Malformed(#[error(not(source))] String),
}

/// Parses cells written as `x,y`, separated by whitespace.
///
/// ```
/// use strictly_pegs::{Coord, Move};
/// use strictly_pegs_cli::players::parse_move;
///
/// let mov = parse_move("0,0 1,0").unwrap();
/// assert_eq!(mov, Move::new(vec![Coord::new(0, 0), Coord::new(1, 0)]));
/// ```
pub fn parse_move(input: &str) -> Result<Move, ParseMoveError> {
    let cells = input
        .split_whitespace()
        .map(|cell| {
            let (x, y) = cell
                .split_once(',')
                .ok_or_else(|| ParseMoveError::Malformed(cell.to_string()))?;
            let x = x.trim().parse::<i32>();
            let y = y.trim().parse::<i32>();
            match (x, y) {
                (Ok(x), Ok(y)) => Ok(Coord::new(x, y)),
                _ => Err(ParseMoveError::Malformed(cell.to_string())),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    if cells.is_empty() {
        return Err(ParseMoveError::Empty);
    }
    Ok(Move::new(cells))
}

/// A person typing moves, one per line.
#[derive(Debug, Clone)]
pub struct HumanSeat {
    name: String,
}

impl HumanSeat {
    /// Creates a human seat.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Seat for HumanSeat {
    #[instrument(skip_all, fields(seat = %self.name))]
    fn choose_move(
        &mut self,
        _game: &mut Game,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<Move> {
        loop {
            write!(out, "{} > ", self.name).context("Failed to write prompt")?;
            out.flush().context("Failed to flush prompt")?;

            let mut line = String::new();
            let read = input.read_line(&mut line).context("Failed to read move")?;
            if read == 0 {
                bail!("Input closed before {} moved", self.name);
            }

            match parse_move(&line) {
                Ok(mov) => return Ok(mov),
                Err(e) => {
                    debug!(error = %e, "Unreadable move");
                    writeln!(out, "{}", e).context("Failed to write error")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn may_retry(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_and_multiple_cells() {
        assert_eq!(parse_move(" 2,0 \n"), Ok(Move::single(2, 0)));
        assert_eq!(
            parse_move("4,0 4,1"),
            Ok(Move::new(vec![Coord::new(4, 0), Coord::new(4, 1)]))
        );
        // A space inside a cell splits it.
        assert_eq!(
            parse_move("1, 0"),
            Err(ParseMoveError::Malformed("1,".to_string()))
        );
    }

    #[test]
    fn test_parse_negative_coordinates() {
        assert_eq!(parse_move("-1,0"), Ok(Move::single(-1, 0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_move("   "), Err(ParseMoveError::Empty));
        assert_eq!(
            parse_move("1;2"),
            Err(ParseMoveError::Malformed("1;2".to_string()))
        );
        assert_eq!(
            parse_move("a,1"),
            Err(ParseMoveError::Malformed("a,1".to_string()))
        );
    }
}
