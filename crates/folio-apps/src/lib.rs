//! Mini-games for Folio OS
//!
//! Pure game state; the front end feeds inputs and a clock and renders the
//! serialized views.
//!
//! - [`snake`]: Snake on a bounded grid
//! - [`tetris`]: 10×20 Tetris with a 7-bag
//! - [`calculator`]: four-function calculator that blue-screens on bad input
//!
//! Randomness comes from a seeded `SmallRng`, so a seed replays a game
//! exactly.

pub mod calculator;
pub mod snake;
pub mod tetris;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

use serde::Serialize;

pub use calculator::{Calculator, CalculatorConfig, CalculatorView, StopCode};
pub use snake::{Direction, Point, SnakeGame, SnakeView};
pub use tetris::{TetrisCommand, TetrisGame, TetrisView, Tetromino, BOARD_HEIGHT, BOARD_WIDTH};

/// Lifecycle of a game round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Running,
    /// No free cell left (Snake filled the board)
    Won,
    Over,
}

impl GameStatus {
    #[inline]
    pub fn is_running(self) -> bool {
        self == GameStatus::Running
    }
}
