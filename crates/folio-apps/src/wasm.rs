//! WASM exports for the mini-games
//!
//! Each game is a thin wrapper: inputs by name, state out as JSON. The front
//! end owns the animation loop and passes elapsed time in.

use wasm_bindgen::prelude::*;

use crate::calculator::{Calculator, CalculatorConfig};
use crate::snake::{Direction, SnakeGame};
use crate::tetris::{TetrisCommand, TetrisGame};

fn seed_from(seed: f64) -> u64 {
    if seed.is_finite() && seed >= 0.0 {
        seed as u64
    } else {
        let mut bytes = [0u8; 8];
        match getrandom::getrandom(&mut bytes) {
            Ok(()) => u64::from_le_bytes(bytes),
            Err(_) => 0x5eed,
        }
    }
}

/// Snake for WASM
#[wasm_bindgen]
pub struct SnakeController {
    game: SnakeGame,
    width: i32,
    height: i32,
}

#[wasm_bindgen]
impl SnakeController {
    /// Pass a negative seed for a random game
    #[wasm_bindgen(constructor)]
    pub fn new(width: i32, height: i32, seed: f64) -> Self {
        Self { game: SnakeGame::new(width, height, seed_from(seed)), width, height }
    }

    /// Queue a turn from a key name; false if ignored
    #[wasm_bindgen]
    pub fn key(&mut self, key: &str) -> bool {
        Direction::from_key(key).is_some_and(|d| self.game.turn(d))
    }

    #[wasm_bindgen]
    pub fn step(&mut self) -> String {
        self.game.step();
        self.get_state_json()
    }

    #[wasm_bindgen]
    pub fn restart(&mut self, seed: f64) {
        self.game = SnakeGame::new(self.width, self.height, seed_from(seed));
    }

    #[wasm_bindgen]
    pub fn get_state_json(&self) -> String {
        serde_json::to_string(&self.game.view()).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Tetris for WASM
#[wasm_bindgen]
pub struct TetrisController {
    game: TetrisGame,
}

#[wasm_bindgen]
impl TetrisController {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: f64) -> Self {
        Self { game: TetrisGame::new(seed_from(seed)) }
    }

    /// Apply a command from a key name; false if ignored
    #[wasm_bindgen]
    pub fn key(&mut self, key: &str) -> bool {
        TetrisCommand::from_key(key).is_some_and(|c| self.game.command(c))
    }

    #[wasm_bindgen]
    pub fn tick(&mut self, elapsed_ms: f64) {
        self.game.tick(elapsed_ms);
    }

    #[wasm_bindgen]
    pub fn restart(&mut self, seed: f64) {
        self.game = TetrisGame::new(seed_from(seed));
    }

    #[wasm_bindgen]
    pub fn get_state_json(&self) -> String {
        serde_json::to_string(&self.game.view()).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Calculator for WASM
#[wasm_bindgen]
pub struct CalculatorController {
    calc: Calculator,
}

#[wasm_bindgen]
impl CalculatorController {
    /// `config_json` is an optional `CalculatorConfig`
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Self {
        let config = config_json
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_else(CalculatorConfig::default);
        Self { calc: Calculator::new(config) }
    }

    /// Press a button; returns the new state
    #[wasm_bindgen]
    pub fn press(&mut self, button: &str) -> String {
        self.calc.press(button);
        self.get_state_json()
    }

    /// Reboot from the blue screen
    #[wasm_bindgen]
    pub fn reset(&mut self) -> String {
        self.calc.reset();
        self.get_state_json()
    }

    #[wasm_bindgen]
    pub fn get_state_json(&self) -> String {
        serde_json::to_string(&self.calc.view()).unwrap_or_else(|_| "{}".to_string())
    }
}
