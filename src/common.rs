//! Common types for the game: coordinates, guess results and error enums.

use core::fmt;

use crate::bitboard::BitBoardError;

/// A `(row, col)` cell on the board, 0-indexed.
pub type Coord = (usize, usize);

/// Index of a ship within its fleet, assigned in placement order.
pub type ShipId = usize;

/// Outcome of firing at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// No ship occupies the cell.
    Miss,
    /// The cell belongs to a ship that still has unhit segments.
    Hit,
    /// The shot hit the last untouched segment of the given ship.
    ShipDestroyed(ShipId),
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessResult::Miss => write!(f, "Miss"),
            GuessResult::Hit => write!(f, "Hit"),
            GuessResult::ShipDestroyed(_) => write!(f, "Ship destroyed"),
        }
    }
}

/// Errors returned when building ships and fleets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid index).
    BitBoardError(BitBoardError),
    /// Ship would extend past the edge of the board.
    ShipOutOfBounds,
    /// A ship overlaps or touches another ship.
    ShipsTouch,
    /// The fleet's ship lengths differ from the configured set.
    WrongComposition,
    /// A ship was given no cells.
    EmptyShip,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipsTouch => write!(f, "Ships touch each other"),
            BoardError::WrongComposition => {
                write!(f, "Fleet does not match the required ship lengths")
            }
            BoardError::EmptyShip => write!(f, "Ship has no cells"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Reasons a human-entered move or ship is rejected before it reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Text could not be parsed into coordinates.
    Malformed(String),
    /// Coordinate lies outside the grid.
    OutOfBounds { row: isize, col: isize },
    /// Coordinate was already fired upon by the same side.
    Repeated(Coord),
    /// Ship has the wrong number of cells.
    WrongLength { expected: usize, got: usize },
    /// Ship overlaps or touches one placed earlier.
    ShipsTouch,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Malformed(input) => write!(f, "Wrong format: '{}'", input),
            MoveError::OutOfBounds { row, col } => {
                write!(f, "Out of the bounds: {} {}", row, col)
            }
            MoveError::Repeated((r, c)) => write!(f, "Repeated move: {} {}", r, c),
            MoveError::WrongLength { expected, got } => {
                write!(f, "Wrong size: expected {} cells, got {}", expected, got)
            }
            MoveError::ShipsTouch => write!(f, "Ships touch each other"),
        }
    }
}

impl std::error::Error for MoveError {}
