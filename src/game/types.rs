//! Data structures for a run: the player, obstacle pairs and the run snapshot.

use crate::config::GameConfig;

/// One vertically aligned pair of barriers with a gap between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge shared by both halves.
    pub x: f64,
    /// Top edge of the bottom barrier.
    pub bottom_height: f64,
    /// Origin of the top barrier sprite: `bottom_height - gap - barrier_length`.
    pub top_height: f64,
    /// Whether the player has already been credited for this pair.
    pub scored: bool,
}

impl Obstacle {
    pub fn new(x: f64, bottom_height: f64, config: &GameConfig) -> Self {
        Self {
            x,
            bottom_height,
            top_height: bottom_height - config.gap - config.barrier_length,
            scored: false,
        }
    }

    /// Right edge of both halves.
    pub fn right_edge(&self, config: &GameConfig) -> f64 {
        self.x + config.barrier_width
    }

    /// Lower edge of the visible top barrier (upper edge of the gap).
    pub fn gap_top(&self, config: &GameConfig) -> f64 {
        self.top_height + config.barrier_length
    }
}

/// The controlled sprite.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Fixed for the whole run.
    pub x: f64,
    pub y: f64,
    /// Positive = downward.
    pub vertical_velocity: f64,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        let (x, y) = config.player_start();
        Self {
            x,
            y,
            vertical_velocity: 0.0,
        }
    }

    /// Sprite rotation for renderers, in degrees (positive = nose up).
    pub fn tilt_degrees(&self) -> f64 {
        (-self.vertical_velocity * 3.0).clamp(-90.0, 30.0)
    }
}

/// Overall mode of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Waiting for a start input; shows the idle or game-over screen.
    Inactive,
    Active,
}

/// Everything mutable about the current (or last) run.
#[derive(Debug, Clone)]
pub struct RunState {
    pub player: Player,
    /// Ascending by `x`.
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Set when the run ended by collision.
    pub crashed: bool,
    /// Simulated ticks since the run started.
    pub tick_count: u64,
    /// Set once this run's score goes above the best it started with.
    pub new_best: bool,
}

impl RunState {
    /// A fresh run with no obstacles yet.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            player: Player::new(config),
            obstacles: Vec::new(),
            score: 0,
            crashed: false,
            tick_count: 0,
            new_best: false,
        }
    }
}
