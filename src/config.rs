// Shared game constants. Everything that used to be tweakable lives here.
use std::time::Duration;

use crate::game::Rgb;

pub const ROW_COUNT: i32 = 32;
pub const COL_COUNT: i32 = 32;
pub const SQUARE_DIM: i32 = 24; // pixel size of one grid cell
pub const SNAKE_DIM: i32 = 20;
pub const FRUIT_DIM: i32 = 16;
pub const BASE_SPEED: i32 = 1; // cells per tick
pub const TICK_INTERVAL: Duration = Duration::from_millis(150);
pub const FRAME_BUDGET: Duration = Duration::from_millis(16); // ~60Hz input/render cap
// Presses closer together than this are one held key (covers the OS autorepeat delay).
pub const KEY_HOLD_GAP: Duration = Duration::from_millis(600);

pub const BACKGROUND: Rgb = Rgb(0, 0, 0);
pub const SNAKE_COLOR: Rgb = Rgb(255, 255, 255);
pub const TEXT_COLOR: Rgb = Rgb(255, 255, 255);
pub const GAME_OVER_COLOR: Rgb = Rgb(255, 0, 0);
pub const DEBUG_COLOR: Rgb = Rgb(255, 0, 0);
pub const GRID_COLOR: Rgb = Rgb(255, 255, 255);
pub const DEBUG_DOT_DIM: i32 = 4;

// Each grid cell is drawn two characters wide so cells look square.
pub const CELL_W: u16 = 2;
pub const PLAY_W: u16 = COL_COUNT as u16 * CELL_W + 2; // inner width plus side walls
pub const PLAY_H: u16 = ROW_COUNT as u16 + 2;
pub const MIN_WIDTH: u16 = PLAY_W + 2;
pub const MIN_HEIGHT: u16 = PLAY_H + 3; // cabinet border plus the key hint line

pub const LOG_ENV: &str = "COBRA_LOG";
pub const DEFAULT_LOG_PATH: &str = "cobra.log";

/// Immutable game configuration, built once at startup and handed to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub rows: i32,
    pub cols: i32,
    pub cell_dim: i32,
    pub snake_dim: i32,
    pub fruit_dim: i32,
    pub base_speed: i32,
    pub tick_interval: Duration,
    pub frame_budget: Duration,
    pub key_hold_gap: Duration,
}

impl Config {
    /// Pixel size of the whole board as `(width, height)`.
    pub fn board_size(&self) -> (i32, i32) {
        (self.cols * self.cell_dim, self.rows * self.cell_dim)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: ROW_COUNT,
            cols: COL_COUNT,
            cell_dim: SQUARE_DIM,
            snake_dim: SNAKE_DIM,
            fruit_dim: FRUIT_DIM,
            base_speed: BASE_SPEED,
            tick_interval: TICK_INTERVAL,
            frame_budget: FRAME_BUDGET,
            key_hold_gap: KEY_HOLD_GAP,
        }
    }
}
