//! Player trait and implementations
//!
//! A Player supplies the human side of the game:
//! - the initial fleet
//! - one validated target per round
//! - whatever feedback it wants to show about each round
//!
//! Implementations:
//! - CliPlayer: interactive prompts over any `BufRead`/`Write` pair
//! - AutoPlayer: random fleet and random unrepeated moves

use rand::rngs::SmallRng;

use crate::bitboard::HitSet;
use crate::common::{Coord, GuessResult, MoveError};
use crate::fleet::Fleet;
use crate::game::GameEngine;
use crate::grid::in_bounds;

/// Interface implemented by different player types.
pub trait Player {
    /// Produce a fleet that satisfies the placement rules and the standard
    /// ship lengths.
    fn place_ships(&mut self, rng: &mut SmallRng) -> anyhow::Result<Fleet>;

    /// Choose the next target: on the board and not in `fired`.
    fn select_target(&mut self, rng: &mut SmallRng, fired: &HitSet) -> anyhow::Result<Coord>;

    /// Called before each round is played.
    fn show_turn(&mut self, _engine: &GameEngine) -> anyhow::Result<()> {
        Ok(())
    }

    /// Inform the player of the result of its last guess.
    fn handle_guess_result(&mut self, _coord: Coord, _result: GuessResult) -> anyhow::Result<()> {
        Ok(())
    }

    /// Inform the player of an opponent guess against its board.
    fn handle_opponent_guess(&mut self, _coord: Coord, _result: GuessResult) -> anyhow::Result<()> {
        Ok(())
    }

    /// Called once after the final round.
    fn show_outcome(&mut self, _engine: &GameEngine) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Check a raw move against the board edges and the cells already fired at.
pub fn validate_move(row: isize, col: isize, fired: &HitSet) -> Result<Coord, MoveError> {
    if !in_bounds(row, col) {
        return Err(MoveError::OutOfBounds { row, col });
    }
    let coord = (row as usize, col as usize);
    if fired.contains(coord) {
        return Err(MoveError::Repeated(coord));
    }
    Ok(coord)
}

pub mod auto;
pub use auto::AutoPlayer;

pub mod cli;
pub use cli::CliPlayer;
