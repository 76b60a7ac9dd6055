//! Constants for the number caller.

use std::time::Duration;

/// Smallest number on the board.
pub const POOL_MIN: u8 = 1;

/// Largest number on the board.
pub const POOL_MAX: u8 = 90;

/// Size of a fresh pool.
pub const POOL_SIZE: usize = POOL_MAX as usize;

/// Board geometry: numbers are laid out row-major, 15 per row.
pub const BOARD_COLUMNS: u16 = 15;

/// Number of board rows.
pub const BOARD_ROWS: u16 = 6;

/// Hold between a call and its repeat, and again before the next call.
pub const DEFAULT_CALL_DELAY: Duration = Duration::from_secs(3);

/// How often the caller actor checks for due deadlines.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(100);

/// Announcement shown before the first call and after a restart.
pub const READY_MESSAGE: &str = "Game ready to start";

/// Terminal announcement once the pool is exhausted.
pub const GAME_OVER_MESSAGE: &str = "Game Over! All numbers have been called.";
