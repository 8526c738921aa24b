//! Tetris
//!
//! Classic rules on a 10×20 board:
//! - pieces come from a shuffled bag of all seven tetrominoes
//! - rotation tries a few horizontal kicks, then one cell up
//! - soft drop scores 1 per cell, hard drop 2 per cell
//! - clears score 40/100/300/1200 times the level
//! - the level rises every 10 lines and shortens the gravity interval
//!
//! A piece that cannot spawn ends the game.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::GameStatus;

pub const BOARD_WIDTH: i32 = 10;
pub const BOARD_HEIGHT: i32 = 20;

/// Points for clearing 0..=4 lines at level 1
const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];
const LINES_PER_LEVEL: u32 = 10;

/// Horizontal offsets tried when a rotation collides
const KICKS: [(i32, i32); 6] = [(0, 0), (-1, 0), (1, 0), (-2, 0), (2, 0), (0, -1)];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tetromino {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl Tetromino {
    pub const ALL: [Tetromino; 7] = [
        Tetromino::I,
        Tetromino::O,
        Tetromino::T,
        Tetromino::S,
        Tetromino::Z,
        Tetromino::J,
        Tetromino::L,
    ];

    /// Side of the bounding box the piece rotates in
    fn box_size(self) -> i32 {
        match self {
            Tetromino::I => 4,
            Tetromino::O => 2,
            _ => 3,
        }
    }

    /// Cells in spawn orientation, relative to the box's top-left
    fn spawn_cells(self) -> [(i32, i32); 4] {
        match self {
            Tetromino::I => [(0, 1), (1, 1), (2, 1), (3, 1)],
            Tetromino::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
            Tetromino::T => [(1, 0), (0, 1), (1, 1), (2, 1)],
            Tetromino::S => [(1, 0), (2, 0), (0, 1), (1, 1)],
            Tetromino::Z => [(0, 0), (1, 0), (1, 1), (2, 1)],
            Tetromino::J => [(0, 0), (0, 1), (1, 1), (2, 1)],
            Tetromino::L => [(2, 0), (0, 1), (1, 1), (2, 1)],
        }
    }

    /// Cells after `rotation` clockwise quarter turns
    pub fn cells(self, rotation: u8) -> [(i32, i32); 4] {
        let n = self.box_size();
        let mut cells = self.spawn_cells();
        for _ in 0..rotation % 4 {
            for cell in cells.iter_mut() {
                *cell = (n - 1 - cell.1, cell.0);
            }
        }
        cells
    }
}

/// Player input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TetrisCommand {
    Left,
    Right,
    Rotate,
    SoftDrop,
    HardDrop,
}

impl TetrisCommand {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "left" | "ArrowLeft" => Some(TetrisCommand::Left),
            "right" | "ArrowRight" => Some(TetrisCommand::Right),
            "rotate" | "ArrowUp" => Some(TetrisCommand::Rotate),
            "soft-drop" | "ArrowDown" => Some(TetrisCommand::SoftDrop),
            "hard-drop" | " " => Some(TetrisCommand::HardDrop),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ActivePiece {
    kind: Tetromino,
    rotation: u8,
    x: i32,
    y: i32,
}

impl ActivePiece {
    fn spawn(kind: Tetromino) -> Self {
        let x = (BOARD_WIDTH - kind.box_size()) / 2;
        Self { kind, rotation: 0, x, y: 0 }
    }

    fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let (x, y) = (self.x, self.y);
        self.kind.cells(self.rotation).into_iter().map(move |(cx, cy)| (x + cx, y + cy))
    }

    fn shifted(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy, ..self }
    }
}

/// Serializable snapshot for rendering
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TetrisView {
    /// Row-major, `BOARD_HEIGHT` rows of `BOARD_WIDTH` cells
    pub board: Vec<Vec<Option<Tetromino>>>,
    pub active: Option<(Tetromino, Vec<(i32, i32)>)>,
    pub next: Option<Tetromino>,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub status: GameStatus,
}

pub struct TetrisGame {
    board: Vec<Option<Tetromino>>,
    active: Option<ActivePiece>,
    bag: Vec<Tetromino>,
    score: u32,
    lines: u32,
    status: GameStatus,
    /// Time accumulated toward the next gravity step
    gravity_ms: f64,
    rng: SmallRng,
}

impl TetrisGame {
    pub fn new(seed: u64) -> Self {
        let mut game = Self {
            board: vec![None; (BOARD_WIDTH * BOARD_HEIGHT) as usize],
            active: None,
            bag: Vec::new(),
            score: 0,
            lines: 0,
            status: GameStatus::Running,
            gravity_ms: 0.0,
            rng: SmallRng::seed_from_u64(seed),
        };
        game.spawn_next();
        game
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        1 + self.lines / LINES_PER_LEVEL
    }

    /// Milliseconds between gravity steps at the current level
    pub fn gravity_interval_ms(&self) -> f64 {
        (1000.0 - 75.0 * (self.level() - 1) as f64).max(100.0)
    }

    pub fn active_kind(&self) -> Option<Tetromino> {
        self.active.map(|piece| piece.kind)
    }

    /// Piece that spawns after the active one
    pub fn next_piece(&self) -> Option<Tetromino> {
        self.bag.last().copied()
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<Tetromino> {
        if self.in_bounds(x, y) {
            self.board[(y * BOARD_WIDTH + x) as usize]
        } else {
            None
        }
    }

    /// Apply a player command; false if it had no effect
    pub fn command(&mut self, command: TetrisCommand) -> bool {
        if !self.status.is_running() {
            return false;
        }
        match command {
            TetrisCommand::Left => self.try_move(-1, 0),
            TetrisCommand::Right => self.try_move(1, 0),
            TetrisCommand::Rotate => self.rotate(),
            TetrisCommand::SoftDrop => {
                if self.try_move(0, 1) {
                    self.score += 1;
                } else {
                    self.lock();
                }
                self.gravity_ms = 0.0;
                true
            }
            TetrisCommand::HardDrop => {
                let mut dropped = 0;
                while self.try_move(0, 1) {
                    dropped += 1;
                }
                self.score += 2 * dropped;
                self.lock();
                self.gravity_ms = 0.0;
                true
            }
        }
    }

    /// Advance the clock by `elapsed_ms`, applying gravity
    pub fn tick(&mut self, elapsed_ms: f64) {
        if !self.status.is_running() {
            return;
        }
        self.gravity_ms += elapsed_ms.max(0.0);
        while self.status.is_running() && self.gravity_ms >= self.gravity_interval_ms() {
            self.gravity_ms -= self.gravity_interval_ms();
            if !self.try_move(0, 1) {
                self.lock();
            }
        }
    }

    pub fn view(&self) -> TetrisView {
        let board = (0..BOARD_HEIGHT)
            .map(|y| (0..BOARD_WIDTH).map(|x| self.cell(x, y)).collect())
            .collect();
        TetrisView {
            board,
            active: self.active.map(|piece| (piece.kind, piece.cells().collect())),
            next: self.next_piece(),
            score: self.score,
            lines: self.lines,
            level: self.level(),
            status: self.status,
        }
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < BOARD_WIDTH && y < BOARD_HEIGHT
    }

    fn fits(&self, piece: &ActivePiece) -> bool {
        piece.cells().all(|(x, y)| self.in_bounds(x, y) && self.cell(x, y).is_none())
    }

    fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        let moved = piece.shifted(dx, dy);
        if self.fits(&moved) {
            self.active = Some(moved);
            true
        } else {
            false
        }
    }

    fn rotate(&mut self) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        let turned = ActivePiece { rotation: (piece.rotation + 1) % 4, ..piece };
        for (dx, dy) in KICKS {
            let candidate = turned.shifted(dx, dy);
            if self.fits(&candidate) {
                self.active = Some(candidate);
                return true;
            }
        }
        false
    }

    /// Merge the active piece into the board, clear lines, spawn the next one
    fn lock(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        for (x, y) in piece.cells() {
            if self.in_bounds(x, y) {
                self.board[(y * BOARD_WIDTH + x) as usize] = Some(piece.kind);
            }
        }

        let cleared = self.clear_lines();
        if cleared > 0 {
            // scored at the level the lines were cleared on
            self.score += LINE_SCORES[cleared] * self.level();
            self.lines += cleared as u32;
        }
        self.spawn_next();
    }

    fn clear_lines(&mut self) -> usize {
        let width = BOARD_WIDTH as usize;
        let kept: Vec<Option<Tetromino>> = self
            .board
            .chunks(width)
            .filter(|row| row.iter().any(|cell| cell.is_none()))
            .flatten()
            .copied()
            .collect();

        let cleared = (self.board.len() - kept.len()) / width;
        if cleared > 0 {
            let mut board = vec![None; cleared * width];
            board.extend(kept);
            self.board = board;
        }
        cleared
    }

    fn refill_bag(&mut self) {
        if self.bag.is_empty() {
            let mut bag = Tetromino::ALL.to_vec();
            bag.shuffle(&mut self.rng);
            self.bag = bag;
        }
    }

    fn spawn_next(&mut self) {
        self.refill_bag();
        let Some(kind) = self.bag.pop() else {
            return;
        };
        self.refill_bag();

        let piece = ActivePiece::spawn(kind);
        if self.fits(&piece) {
            self.active = Some(piece);
        } else {
            tracing::debug!(score = self.score, lines = self.lines, "tetris game over");
            self.status = GameStatus::Over;
        }
    }
}
