//! Simulation core of the game.
//!
//! A player sprite falls under gravity and jumps on input while pairs of
//! barriers scroll in from the right. Touching a barrier, the ground or the
//! ceiling ends the run; every pair passed scores one point.

pub mod collision;
pub mod machine;
pub mod obstacles;
pub mod physics;
pub mod score;
pub mod types;

pub use collision::{Hitbox, Hitboxes, ObstacleHitboxes};
pub use machine::{Control, Game, GameView, InputEvent, TickOutcome};
pub use score::ScoreUpdate;
pub use types::*;
