//! Fleets: placement validation and random generation.

use log::trace;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::bitboard::HitSet;
use crate::common::{BoardError, Coord, ShipId};
use crate::config::{BOARD_SIZE, SHIP_SIZES};
use crate::grid::neighbours8;
use crate::ship::{Orientation, Ship};

/// Returns `false` if any cell of any ship equals, or is an 8-neighbour of,
/// a cell of a ship earlier in the slice.
///
/// Callers may append a candidate ship, validate the whole list and pop the
/// candidate again on failure.
pub fn is_valid(ships: &[Ship]) -> bool {
    let mut occupied = HitSet::new();
    for ship in ships {
        for &cell in ship.cells() {
            if occupied.contains(cell) || neighbours8(cell).into_iter().any(|n| occupied.contains(n)) {
                return false;
            }
        }
        occupied |= ship.mask();
    }
    true
}

/// One side's ships, indexed by [`ShipId`] in placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Accept any set of mutually non-adjacent ships.
    pub fn new(ships: Vec<Ship>) -> Result<Self, BoardError> {
        if !is_valid(&ships) {
            return Err(BoardError::ShipsTouch);
        }
        Ok(Self { ships })
    }

    /// Accept only a fleet matching the configured ship-length multiset.
    pub fn standard(ships: Vec<Ship>) -> Result<Self, BoardError> {
        let fleet = Self::new(ships)?;
        if !fleet.has_lengths(&SHIP_SIZES) {
            return Err(BoardError::WrongComposition);
        }
        Ok(fleet)
    }

    /// True if the ship lengths equal `sizes` as a multiset.
    pub fn has_lengths(&self, sizes: &[usize]) -> bool {
        let mut ours: Vec<usize> = self.ships.iter().map(Ship::len).collect();
        let mut theirs = sizes.to_vec();
        ours.sort_unstable();
        theirs.sort_unstable();
        ours == theirs
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id)
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// The ship occupying `coord`, if any.
    pub fn owner_of(&self, coord: Coord) -> Option<ShipId> {
        self.ships.iter().position(|s| s.contains(coord))
    }

    /// Every cell occupied by any ship.
    pub fn occupied(&self) -> HitSet {
        self.ships
            .iter()
            .fold(HitSet::new(), |acc, ship| acc | ship.mask())
    }

    /// True when every ship is fully covered by `shots`.
    pub fn all_destroyed_by(&self, shots: &HitSet) -> bool {
        self.ships.iter().all(|s| s.is_destroyed_by(shots))
    }
}

/// Random straight ship of `length` that lies fully on the board.
pub fn random_ship<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Result<Ship, BoardError> {
    if length == 0 {
        return Err(BoardError::EmptyShip);
    }
    if length > BOARD_SIZE {
        return Err(BoardError::ShipOutOfBounds);
    }
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let (max_r, max_c) = match orientation {
        Orientation::Horizontal => (BOARD_SIZE - 1, BOARD_SIZE - length),
        Orientation::Vertical => (BOARD_SIZE - length, BOARD_SIZE - 1),
    };
    let row = rng.random_range(0..=max_r);
    let col = rng.random_range(0..=max_c);
    Ship::linear(length, orientation, row, col)
}

/// Random straight ship of `length` that fits beside `placed`, chosen among
/// every such placement. `None` when no cell is left for it.
pub fn random_ship_beside<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    placed: &[Ship],
) -> Result<Option<Ship>, BoardError> {
    if length == 0 {
        return Err(BoardError::EmptyShip);
    }
    if length > BOARD_SIZE {
        return Err(BoardError::ShipOutOfBounds);
    }
    let orientations: &[Orientation] = if length == 1 {
        &[Orientation::Horizontal]
    } else {
        &[Orientation::Horizontal, Orientation::Vertical]
    };
    let mut candidates = Vec::new();
    let mut fleet = placed.to_vec();
    for &orientation in orientations {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let Ok(ship) = Ship::linear(length, orientation, row, col) else {
                    continue;
                };
                fleet.push(ship);
                if is_valid(&fleet) {
                    candidates.extend(fleet.pop());
                } else {
                    fleet.pop();
                }
            }
        }
    }
    trace!("{} free placement(s) for a ship of length {}", candidates.len(), length);
    Ok(candidates.choose(rng).cloned())
}

/// Random fleet with the standard ship lengths.
pub fn generate_fleet<R: Rng + ?Sized>(rng: &mut R) -> Result<Fleet, BoardError> {
    generate_fleet_with(rng, &SHIP_SIZES)
}

/// Place one ship per entry of `sizes`, retrying each ship until it fits
/// beside those already accepted. Earlier ships are never moved.
pub fn generate_fleet_with<R: Rng + ?Sized>(
    rng: &mut R,
    sizes: &[usize],
) -> Result<Fleet, BoardError> {
    let mut ships = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let mut attempts = 0usize;
        loop {
            attempts += 1;
            ships.push(random_ship(rng, size)?);
            if is_valid(&ships) {
                break;
            }
            ships.pop();
        }
        trace!("placed ship of length {} after {} attempt(s)", size, attempts);
    }
    Ok(Fleet { ships })
}
