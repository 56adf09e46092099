//! Turn engine: applies both sides' shots each round, tracks destroyed ships
//! and decides when the game is over.

use log::{debug, info};
use rand::rngs::SmallRng;

use crate::bitboard::HitSet;
use crate::common::{Coord, GuessResult, ShipId};
use crate::fleet::Fleet;
use crate::grid::{in_bounds, neighbours8};
use crate::targeting::{HuntTargeting, TargetingStrategy};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    PlayerWon,
    OpponentWon,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// One fleet together with everything the other side has fired at it.
#[derive(Debug, Clone)]
pub struct Battlefield {
    fleet: Fleet,
    shots: HitSet,
    destroyed: Vec<bool>,
    border: HitSet,
}

impl Battlefield {
    pub fn new(fleet: Fleet) -> Self {
        let destroyed = vec![false; fleet.len()];
        Self {
            fleet,
            shots: HitSet::new(),
            destroyed,
            border: HitSet::new(),
        }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Cells fired upon so far.
    pub fn shots(&self) -> &HitSet {
        &self.shots
    }

    /// Unfired cells around destroyed ships, drawn as misses.
    pub fn border(&self) -> &HitSet {
        &self.border
    }

    pub fn is_destroyed(&self, id: ShipId) -> bool {
        self.destroyed.get(id).copied().unwrap_or(false)
    }

    /// Ids of destroyed ships, in ascending order.
    pub fn destroyed_ids(&self) -> Vec<ShipId> {
        self.destroyed
            .iter()
            .enumerate()
            .filter_map(|(id, &gone)| gone.then_some(id))
            .collect()
    }

    /// What firing at `coord` would report, without recording the shot.
    pub fn classify(&self, coord: Coord) -> GuessResult {
        let Some(id) = self.fleet.owner_of(coord) else {
            return GuessResult::Miss;
        };
        if self.is_destroyed(id) {
            return GuessResult::Hit;
        }
        let mut shots = self.shots;
        if shots.insert(coord).is_err() {
            return GuessResult::Hit;
        }
        match self.fleet.ship(id) {
            Some(ship) if ship.is_destroyed_by(&shots) => GuessResult::ShipDestroyed(id),
            _ => GuessResult::Hit,
        }
    }

    /// Record a shot at `coord` and report its result.
    pub fn fire(&mut self, coord: Coord) -> GuessResult {
        let result = self.classify(coord);
        let recorded = self.shots.insert(coord);
        debug_assert!(recorded.is_ok(), "shot off the board: {:?}", coord);
        if let GuessResult::ShipDestroyed(id) = result {
            self.destroyed[id] = true;
            self.mark_border(id);
        }
        result
    }

    /// True when every ship in the fleet is covered by shots.
    pub fn all_destroyed(&self) -> bool {
        self.fleet.all_destroyed_by(&self.shots)
    }

    fn mark_border(&mut self, id: ShipId) {
        let Some(ship) = self.fleet.ship(id) else {
            return;
        };
        for &cell in ship.cells() {
            for n in neighbours8(cell) {
                if !self.shots.contains(n) && !ship.contains(n) {
                    let _ = self.border.insert(n);
                }
            }
        }
    }
}

fn on_board((r, c): Coord) -> bool {
    in_bounds(r as isize, c as isize)
}

/// Everything that happened in one completed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    pub turn: u32,
    pub player_move: Coord,
    pub player_result: GuessResult,
    pub opponent_move: Coord,
    pub opponent_result: GuessResult,
    pub status: GameStatus,
}

/// Core game state: both fleets, the shots against each, and the
/// opponent's targeting strategy.
pub struct GameEngine {
    player: Battlefield,
    opponent: Battlefield,
    targeting: Box<dyn TargetingStrategy>,
    turn: u32,
    status: GameStatus,
}

impl GameEngine {
    /// Create an engine where the opponent hunts with [`HuntTargeting`].
    pub fn new(player_fleet: Fleet, opponent_fleet: Fleet) -> Self {
        Self::with_strategy(player_fleet, opponent_fleet, Box::new(HuntTargeting::new()))
    }

    pub fn with_strategy(
        player_fleet: Fleet,
        opponent_fleet: Fleet,
        targeting: Box<dyn TargetingStrategy>,
    ) -> Self {
        Self {
            player: Battlefield::new(player_fleet),
            opponent: Battlefield::new(opponent_fleet),
            targeting,
            turn: 1,
            status: GameStatus::InProgress,
        }
    }

    /// The player's fleet and the opponent's shots against it.
    pub fn player_field(&self) -> &Battlefield {
        &self.player
    }

    /// The opponent's fleet and the player's shots against it.
    pub fn opponent_field(&self) -> &Battlefield {
        &self.opponent
    }

    /// Cells the player has fired at.
    pub fn player_hits(&self) -> &HitSet {
        self.opponent.shots()
    }

    /// Cells the opponent has fired at.
    pub fn opponent_hits(&self) -> &HitSet {
        self.player.shots()
    }

    /// Number of the round about to be played.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Play one round: the player's `player_move`, then the opponent's reply.
    ///
    /// `player_move` must be on the board and not fired at before; the move
    /// source is responsible for that. Must not be called once the game is over.
    pub fn play_round(&mut self, rng: &mut SmallRng, player_move: Coord) -> RoundReport {
        debug_assert!(!self.status.is_over(), "round played after game over");
        debug_assert!(on_board(player_move), "player move off the board");
        debug_assert!(!self.player_hits().contains(player_move), "repeated player move");

        let turn = self.turn;
        let player_result = self.opponent.fire(player_move);

        let opponent_move = self.targeting.next_target(rng);
        debug_assert!(on_board(opponent_move), "opponent move off the board");
        debug_assert!(!self.opponent_hits().contains(opponent_move), "repeated opponent move");
        let opponent_result = self.player.fire(opponent_move);
        self.targeting.record_result(opponent_move, opponent_result);

        self.status = self.evaluate_status();
        self.turn += 1;

        debug!(
            "turn {}: player {:?} -> {}, opponent {:?} -> {}",
            turn, player_move, player_result, opponent_move, opponent_result
        );
        if self.status.is_over() {
            info!("game over after {} turns: {:?}", turn, self.status);
        }

        RoundReport {
            turn,
            player_move,
            player_result,
            opponent_move,
            opponent_result,
            status: self.status,
        }
    }

    // The player's victory is checked first, so a round in which both
    // fleets fall goes to the player.
    fn evaluate_status(&self) -> GameStatus {
        if self.opponent.all_destroyed() {
            GameStatus::PlayerWon
        } else if self.player.all_destroyed() {
            GameStatus::OpponentWon
        } else {
            GameStatus::InProgress
        }
    }
}
