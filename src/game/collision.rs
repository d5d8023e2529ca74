//! Collision detection between the player, the ground/ceiling and obstacles.
//!
//! Hitboxes are deliberately smaller than the sprites: the player box and
//! each barrier box are inset by their configured margins before testing.

use super::types::{Obstacle, Player, RunState};
use crate::config::{GameConfig, TopHitboxPolicy};

/// Axis-aligned rectangle in world coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Hitbox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Strictly positive overlap; touching edges do not count.
    pub fn intersects(&self, other: &Hitbox) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn contains_point(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

/// Top and bottom barrier boxes of one obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleHitboxes {
    pub top: Hitbox,
    pub bottom: Hitbox,
}

/// Every hitbox of a run snapshot, for debug drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Hitboxes {
    pub player: Hitbox,
    pub obstacles: Vec<ObstacleHitboxes>,
}

pub fn player_hitbox(player: &Player, config: &GameConfig) -> Hitbox {
    let m = config.collision_margin_player;
    Hitbox::new(
        player.x + m,
        player.y + m,
        config.player_width - 2.0 * m,
        config.player_height - 2.0 * m,
    )
}

pub fn obstacle_hitboxes(obstacle: &Obstacle, config: &GameConfig) -> ObstacleHitboxes {
    let m = config.collision_margin_obstacle;
    let x = obstacle.x + m;
    let width = config.barrier_width - 2.0 * m;

    let top_height = match config.top_hitbox_policy {
        TopHitboxPolicy::GapEdge => obstacle.gap_top(config),
        TopHitboxPolicy::AbsoluteHeight => obstacle.top_height.abs(),
    };

    ObstacleHitboxes {
        top: Hitbox::new(x, 0.0, width, top_height),
        bottom: Hitbox::new(
            x,
            obstacle.bottom_height,
            width,
            config.floor_line - obstacle.bottom_height,
        ),
    }
}

/// True when the player is on/below the floor threshold or at/above the ceiling.
pub fn out_of_bounds(player: &Player, config: &GameConfig) -> bool {
    player.y >= config.floor_line - config.player_height || player.y <= 0.0
}

/// Pass/fail decision for the current snapshot.
pub fn is_colliding(player: &Player, obstacles: &[Obstacle], config: &GameConfig) -> bool {
    if out_of_bounds(player, config) {
        return true;
    }

    let bird = player_hitbox(player, config);
    obstacles.iter().any(|obstacle| {
        let boxes = obstacle_hitboxes(obstacle, config);
        bird.intersects(&boxes.top) || bird.intersects(&boxes.bottom)
    })
}

/// Read-only hitbox query used by renderers.
pub fn hitboxes(run: &RunState, config: &GameConfig) -> Hitboxes {
    Hitboxes {
        player: player_hitbox(&run.player, config),
        obstacles: run
            .obstacles
            .iter()
            .map(|o| obstacle_hitboxes(o, config))
            .collect(),
    }
}
