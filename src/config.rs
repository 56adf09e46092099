use std::path::{Path, PathBuf};

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 10;
pub const SHIP_SIZES: [usize; NUM_SHIPS] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;

/// Row/column offsets of the eight surrounding cells, scanned row by row.
pub const DIRECTIONS_8: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const PLAYER_SHIPS_FILE: &str = "player_ships.csv";
pub const BOT_SHIPS_FILE: &str = "bot_ships.csv";
pub const ROUND_LOG_FILE: &str = "game_state.csv";

/// Where a session keeps its layout files and round log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    data_dir: PathBuf,
}

impl GameConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn player_ships_path(&self) -> PathBuf {
        self.data_dir.join(PLAYER_SHIPS_FILE)
    }

    pub fn bot_ships_path(&self) -> PathBuf {
        self.data_dir.join(BOT_SHIPS_FILE)
    }

    pub fn round_log_path(&self) -> PathBuf {
        self.data_dir.join(ROUND_LOG_FILE)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new("data")
    }
}
