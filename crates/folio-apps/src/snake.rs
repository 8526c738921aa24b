//! Snake
//!
//! The snake moves one cell per `step`. Turns are queued so two quick key
//! presses between steps both take effect; a turn that would reverse the
//! snake onto itself is dropped.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::GameStatus;

/// Turns buffered ahead of the next steps
const MAX_QUEUED_TURNS: usize = 3;

/// Points per food eaten
const FOOD_SCORE: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse a key name (`up`, `ArrowUp`, `w`, ...)
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "up" | "ArrowUp" | "w" | "W" => Some(Direction::Up),
            "down" | "ArrowDown" | "s" | "S" => Some(Direction::Down),
            "left" | "ArrowLeft" | "a" | "A" => Some(Direction::Left),
            "right" | "ArrowRight" | "d" | "D" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Serializable snapshot for rendering
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SnakeView {
    pub width: i32,
    pub height: i32,
    /// Head first
    pub body: Vec<Point>,
    pub food: Option<Point>,
    pub score: u32,
    pub status: GameStatus,
}

pub struct SnakeGame {
    width: i32,
    height: i32,
    /// Head at the front
    body: VecDeque<Point>,
    direction: Direction,
    turns: VecDeque<Direction>,
    food: Option<Point>,
    score: u32,
    status: GameStatus,
    rng: SmallRng,
}

impl SnakeGame {
    /// New game on a `width`×`height` grid; the snake starts mid-board heading right
    pub fn new(width: i32, height: i32, seed: u64) -> Self {
        let width = width.max(4);
        let height = height.max(1);
        let head = Point::new(width / 2, height / 2);
        let body = (0..3).map(|i| Point::new(head.x - i, head.y)).collect();

        let mut game = Self {
            width,
            height,
            body,
            direction: Direction::Right,
            turns: VecDeque::new(),
            food: None,
            score: 0,
            status: GameStatus::Running,
            rng: SmallRng::seed_from_u64(seed),
        };
        game.place_food();
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
    pub fn head(&self) -> Point {
        self.body[0]
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.body.len()
    }

    #[inline]
    pub fn food(&self) -> Option<Point> {
        self.food
    }

    /// Direction the next step moves in
    pub fn heading(&self) -> Direction {
        self.turns.front().copied().unwrap_or(self.direction)
    }

    /// Queue a turn; false if it would reverse, repeats the last turn or the queue is full
    pub fn turn(&mut self, direction: Direction) -> bool {
        let last = self.turns.back().copied().unwrap_or(self.direction);
        if direction == last || direction == last.opposite() || self.turns.len() >= MAX_QUEUED_TURNS {
            return false;
        }
        self.turns.push_back(direction);
        true
    }

    /// Advance one cell
    pub fn step(&mut self) -> GameStatus {
        if !self.status.is_running() {
            return self.status;
        }

        if let Some(next) = self.turns.pop_front() {
            self.direction = next;
        }

        let (dx, dy) = self.direction.delta();
        let head = self.head();
        let next = Point::new(head.x + dx, head.y + dy);
        let eating = self.food == Some(next);

        if !self.in_bounds(next) {
            return self.game_over("wall");
        }
        // the tail moves out of the way unless the snake is growing
        let blocking = if eating { self.body.len() } else { self.body.len() - 1 };
        if self.body.iter().take(blocking).any(|&p| p == next) {
            return self.game_over("self");
        }

        self.body.push_front(next);
        if eating {
            self.score += FOOD_SCORE;
            self.place_food();
        } else {
            self.body.pop_back();
        }
        self.status
    }

    pub fn view(&self) -> SnakeView {
        SnakeView {
            width: self.width,
            height: self.height,
            body: self.body.iter().copied().collect(),
            food: self.food,
            score: self.score,
            status: self.status,
        }
    }

    fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    fn game_over(&mut self, cause: &str) -> GameStatus {
        tracing::debug!(cause, score = self.score, "snake game over");
        self.status = GameStatus::Over;
        self.status
    }

    /// Put food on a random free cell; a full board wins
    fn place_food(&mut self) {
        let free: Vec<Point> = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| Point::new(x, y)))
            .filter(|p| !self.body.contains(p))
            .collect();

        if free.is_empty() {
            self.food = None;
            self.status = GameStatus::Won;
            return;
        }
        self.food = Some(free[self.rng.gen_range(0..free.len())]);
    }
}
