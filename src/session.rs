//! Full game loop: fleet setup, layout persistence, rounds and the round log.

use std::fs;

use anyhow::{anyhow, bail, Context};
use log::info;
use rand::rngs::SmallRng;
use serde::Serialize;

use crate::board::BoardView;
use crate::config::{GameConfig, SHIP_SIZES};
use crate::fleet::{generate_fleet, Fleet};
use crate::game::{GameEngine, GameStatus};
use crate::persist::{load_layout, save_layout, RoundLog, RoundRecord};
use crate::player::{validate_move, Player};

/// Which side won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Player,
    Bot,
}

/// Summary of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub winner: Option<Winner>,
    pub turns: u32,
    pub player_shots: usize,
    pub bot_shots: usize,
    pub player_ships_lost: usize,
    pub bot_ships_lost: usize,
}

impl From<&GameEngine> for GameSummary {
    fn from(engine: &GameEngine) -> Self {
        let winner = match engine.status() {
            GameStatus::PlayerWon => Some(Winner::Player),
            GameStatus::OpponentWon => Some(Winner::Bot),
            GameStatus::InProgress => None,
        };
        Self {
            winner,
            turns: engine.turn().saturating_sub(1),
            player_shots: engine.player_hits().count_ones(),
            bot_shots: engine.opponent_hits().count_ones(),
            player_ships_lost: engine.player_field().destroyed_ids().len(),
            bot_ships_lost: engine.opponent_field().destroyed_ids().len(),
        }
    }
}

/// Runs one game between a [`Player`] and the hunting bot.
///
/// With a [`GameConfig`] attached, both layouts are written to CSV and read
/// back before play, and every round is appended to the round log.
pub struct GameSession<P: Player> {
    player: P,
    config: Option<GameConfig>,
}

impl<P: Player> GameSession<P> {
    /// Session that keeps everything in memory.
    pub fn new(player: P) -> Self {
        Self {
            player,
            config: None,
        }
    }

    pub fn with_persistence(mut self, config: GameConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn into_player(self) -> P {
        self.player
    }

    /// Play until one fleet is destroyed.
    pub fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<GameSummary> {
        let player_fleet = self.player.place_ships(rng)?;
        let bot_fleet = generate_fleet(rng).map_err(|e| anyhow!(e))?;
        let (player_fleet, bot_fleet) = self.store_fleets(player_fleet, bot_fleet)?;

        let mut engine = GameEngine::new(player_fleet, bot_fleet);
        let mut log = match &self.config {
            Some(cfg) => {
                let path = cfg.round_log_path();
                info!("writing round log to {}", path.display());
                Some(RoundLog::create(&path)?)
            }
            None => None,
        };

        while !engine.status().is_over() {
            self.player.show_turn(&engine)?;
            let (r, c) = self.player.select_target(rng, engine.player_hits())?;
            let player_move = validate_move(r as isize, c as isize, engine.player_hits())
                .context("player supplied an invalid move")?;

            let report = engine.play_round(rng, player_move);
            self.player
                .handle_guess_result(report.player_move, report.player_result)?;
            self.player
                .handle_opponent_guess(report.opponent_move, report.opponent_result)?;

            if let Some(log) = log.as_mut() {
                let record = RoundRecord::new(
                    &report,
                    &BoardView::project(engine.player_field(), true),
                    &BoardView::project(engine.opponent_field(), false),
                );
                log.append(&record)?;
            }
        }

        self.player.show_outcome(&engine)?;
        Ok(GameSummary::from(&engine))
    }

    // Layouts go through the CSV files so play starts from what was persisted.
    fn store_fleets(&self, player: Fleet, bot: Fleet) -> anyhow::Result<(Fleet, Fleet)> {
        let Some(cfg) = &self.config else {
            return Ok((player, bot));
        };
        fs::create_dir_all(cfg.data_dir())
            .with_context(|| format!("creating {}", cfg.data_dir().display()))?;

        let player_path = cfg.player_ships_path();
        let bot_path = cfg.bot_ships_path();
        save_layout(&player, &player_path)?;
        save_layout(&bot, &bot_path)?;
        info!(
            "saved layouts to {} and {}",
            player_path.display(),
            bot_path.display()
        );

        let player = load_layout(&player_path)?;
        let bot = load_layout(&bot_path)?;
        for (fleet, path) in [(&player, &player_path), (&bot, &bot_path)] {
            if !fleet.has_lengths(&SHIP_SIZES) {
                bail!("{} does not hold the standard fleet", path.display());
            }
        }
        Ok((player, bot))
    }
}
