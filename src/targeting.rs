//! Opponent targeting: uniform random search that switches to a directed
//! hunt around the most recent hits.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::bitboard::HitSet;
use crate::common::{Coord, GuessResult};
use crate::config::BOARD_SIZE;
use crate::grid::neighbours8;

/// Interface implemented by opponent targeting strategies.
///
/// The turn engine only ever asks for the next cell and reports back what
/// that cell turned out to be, so strategies can be swapped freely.
pub trait TargetingStrategy {
    /// Choose a cell this strategy has not fired at before.
    fn next_target(&mut self, rng: &mut SmallRng) -> Coord;

    /// Inform the strategy of the result of its last shot.
    fn record_result(&mut self, coord: Coord, result: GuessResult);
}

/// Random search with a LIFO stack of candidate cells queued after each hit.
#[derive(Debug, Clone, Default)]
pub struct HuntTargeting {
    hunting: bool,
    stack: Vec<Coord>,
    tried: HitSet,
}

impl HuntTargeting {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_hunting(&self) -> bool {
        self.hunting
    }

    /// Candidates still queued, bottom of the stack first.
    pub fn pending(&self) -> &[Coord] {
        &self.stack
    }

    /// Every cell this strategy has fired at.
    pub fn tried(&self) -> &HitSet {
        &self.tried
    }

    fn random_untried(&self, rng: &mut SmallRng) -> Coord {
        loop {
            let coord = (
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            if !self.tried.contains(coord) {
                return coord;
            }
        }
    }
}

impl TargetingStrategy for HuntTargeting {
    fn next_target(&mut self, rng: &mut SmallRng) -> Coord {
        if self.hunting {
            // Two hits can queue the same neighbour; drop anything already fired at.
            while let Some(coord) = self.stack.pop() {
                if !self.tried.contains(coord) {
                    return coord;
                }
            }
        }
        self.random_untried(rng)
    }

    fn record_result(&mut self, coord: Coord, result: GuessResult) {
        let recorded = self.tried.insert(coord);
        debug_assert!(recorded.is_ok(), "result recorded for off-board cell {:?}", coord);
        match result {
            GuessResult::Hit => {
                let fresh = neighbours8(coord)
                    .into_iter()
                    .filter(|&n| !self.tried.contains(n));
                self.stack.extend(fresh);
                self.hunting = true;
            }
            GuessResult::ShipDestroyed(_) => {
                self.stack.clear();
                self.hunting = false;
            }
            // A stale stack keeps driving the hunt across misses.
            GuessResult::Miss => {}
        }
    }
}
