//! Fixed game configuration. The board is not resizable and the speed does
//! not change, so everything lives here as constants.

use crate::snake::Position;

/// Board edge length in pixel units (the board is square).
pub const BOARD_SIZE: i32 = 600;

/// Edge length of one tile in pixel units.
pub const TILE_SIZE: i32 = 25;

/// Number of tiles along each edge of the board.
pub const GRID_SIZE: i32 = BOARD_SIZE / TILE_SIZE;

/// Total number of cells on the board.
pub const GRID_CELLS: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// Period between two game updates.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Where the head is placed whenever a game starts.
pub const START_POSITION: Position = Position::new(5, 5);

/// Food position before the first game places it for real.
pub const INITIAL_FOOD: Position = Position::new(10, 10);

pub const MENU_TITLE: &str = "SNAKE GAME";
pub const MENU_OPTIONS: [&str; 2] = ["Start Game", "Exit"];
pub const RESTART_OPTIONS: [&str; 2] = ["YES", "NO"];

/// Environment variable naming the log file. Logging is off when unset.
pub const LOG_FILE_ENV: &str = "SNAKE_LOG";

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";
