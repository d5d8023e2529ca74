//! Obstacle spawning, scrolling and pruning.
//!
//! The sequence is kept in spawn order, which is also ascending `x`: every
//! new pair is placed `obstacle_spacing` to the right of the last one and all
//! pairs scroll at the same speed.

use super::types::Obstacle;
use crate::config::GameConfig;
use rand::Rng;

/// Number of pairs seeded at the start of a run.
pub const INITIAL_OBSTACLES: usize = 2;

/// Append a new pair with a random gap height.
pub fn spawn_next<R: Rng>(obstacles: &mut Vec<Obstacle>, config: &GameConfig, rng: &mut R) {
    let x = match obstacles.last() {
        Some(last) => last.x + config.obstacle_spacing,
        None => config.play_width,
    };
    let width = config.spawn_band_high - config.spawn_band_low;
    // An unsampleable band (empty, or too wide to measure) pins to its low edge.
    let bottom_height = if width > 0.0 && width.is_finite() {
        rng.gen_range(config.spawn_band_low..=config.spawn_band_high)
    } else {
        config.spawn_band_low
    };
    obstacles.push(Obstacle::new(x, bottom_height, config));
}

/// Scroll every pair left by `speed`.
pub fn advance(obstacles: &mut [Obstacle], speed: f64) {
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= speed;
    }
}

/// Drop pairs that are entirely past the left edge. Returns how many were removed.
pub fn prune(obstacles: &mut Vec<Obstacle>, config: &GameConfig) -> usize {
    let before = obstacles.len();
    obstacles.retain(|o| o.right_edge(config) > 0.0);
    before - obstacles.len()
}

/// Spawn a pair when the buffer beyond the right edge runs low.
/// Returns true if a pair was spawned.
pub fn ensure_lookahead<R: Rng>(
    obstacles: &mut Vec<Obstacle>,
    config: &GameConfig,
    rng: &mut R,
) -> bool {
    let needs_spawn = match obstacles.last() {
        Some(last) => last.x < config.play_width - config.obstacle_spacing,
        None => true,
    };
    if needs_spawn {
        spawn_next(obstacles, config, rng);
    }
    needs_spawn
}

/// Replace the sequence with the initial pairs of a fresh run.
pub fn reseed<R: Rng>(obstacles: &mut Vec<Obstacle>, config: &GameConfig, rng: &mut R) {
    obstacles.clear();
    for _ in 0..INITIAL_OBSTACLES {
        spawn_next(obstacles, config, rng);
    }
}

/// One tick of obstacle movement: advance, prune, then top up the lookahead.
pub fn scroll<R: Rng>(obstacles: &mut Vec<Obstacle>, config: &GameConfig, rng: &mut R) {
    advance(obstacles, config.scroll_speed);
    let removed = prune(obstacles, config);
    if removed > 0 {
        log::debug!("Pruned {} obstacle(s)", removed);
    }
    ensure_lookahead(obstacles, config, rng);
}
