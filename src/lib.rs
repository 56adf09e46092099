mod bitboard;
mod board;
mod common;
mod config;
mod fleet;
mod game;
mod grid;
mod logging;
pub mod persist;
pub mod player;
mod session;
mod ship;
mod targeting;

pub use bitboard::{BitBoard, BitBoardError, HitSet, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
pub use grid::*;
pub use logging::init_logging;
pub use persist::{RoundLog, RoundRecord, ShipCellRecord};
pub use player::{validate_move, AutoPlayer, CliPlayer, Player};
pub use session::*;
pub use ship::*;
pub use targeting::*;
