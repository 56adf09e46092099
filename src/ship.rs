//! Ship shapes and straight-line placement.

use crate::bitboard::HitSet;
use crate::common::{BoardError, Coord};
use crate::config::BOARD_SIZE;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship: the cells it occupies, in the order they were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    cells: Vec<Coord>,
    mask: HitSet,
}

impl Ship {
    /// Build a ship from explicit cells. Duplicate cells collapse.
    pub fn new(cells: Vec<Coord>) -> Result<Self, BoardError> {
        if cells.is_empty() {
            return Err(BoardError::EmptyShip);
        }
        if cells.iter().any(|&(r, c)| r >= BOARD_SIZE || c >= BOARD_SIZE) {
            return Err(BoardError::ShipOutOfBounds);
        }
        let mask = HitSet::from_cells(cells.iter().copied())?;
        let mut unique = Vec::with_capacity(cells.len());
        for cell in cells {
            if !unique.contains(&cell) {
                unique.push(cell);
            }
        }
        Ok(Ship {
            cells: unique,
            mask,
        })
    }

    /// Place a straight ship of `length` with its top-left end at (`row`, `col`).
    pub fn linear(
        length: usize,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, BoardError> {
        let fits = match orientation {
            Orientation::Horizontal => row < BOARD_SIZE && col + length <= BOARD_SIZE,
            Orientation::Vertical => col < BOARD_SIZE && row + length <= BOARD_SIZE,
        };
        if !fits {
            return Err(BoardError::ShipOutOfBounds);
        }
        let cells = (0..length)
            .map(|i| match orientation {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
            })
            .collect();
        Self::new(cells)
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> HitSet {
        self.mask
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.mask.contains(coord)
    }

    /// True once every cell of the ship is in `shots`.
    pub fn is_destroyed_by(&self, shots: &HitSet) -> bool {
        shots.covers(&self.mask)
    }
}
