use anyhow::bail;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::bitboard::HitSet;
use crate::common::Coord;
use crate::config::BOARD_SIZE;
use crate::fleet::{generate_fleet, Fleet};

use super::Player;

/// Non-interactive player: random fleet, uniformly random unrepeated moves.
#[derive(Debug, Default)]
pub struct AutoPlayer;

impl AutoPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AutoPlayer {
    fn place_ships(&mut self, rng: &mut SmallRng) -> anyhow::Result<Fleet> {
        Ok(generate_fleet(rng)?)
    }

    fn select_target(&mut self, rng: &mut SmallRng, fired: &HitSet) -> anyhow::Result<Coord> {
        if fired.count_ones() >= BOARD_SIZE * BOARD_SIZE {
            bail!("no cells left to fire at");
        }
        loop {
            let coord = (
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            if !fired.contains(coord) {
                return Ok(coord);
            }
        }
    }
}
