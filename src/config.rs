//! Game tuning: one configuration struct and its named presets.
//!
//! All geometry is in world units (pixels of a 600x500 play area for the
//! built-in presets). Velocities and accelerations are per tick.

use crate::utils::persistence;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// File in the data directory that, when present, replaces the chosen preset.
pub const CONFIG_FILENAME: &str = "config.json";

/// Which geometry the top barrier's collision rectangle uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopHitboxPolicy {
    /// Hitbox reaches down to the upper edge of the gap (`top_height + barrier_length`).
    GapEdge,
    /// Hitbox height is `|top_height|`, regardless of where the gap starts.
    AbsoluteHeight,
}

/// Named configuration presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    Classic,
    Relaxed,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Classic, Preset::Relaxed];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Relaxed => "relaxed",
        }
    }

    /// Look up a preset by its (case-insensitive) name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    pub fn config(&self) -> GameConfig {
        match self {
            Self::Classic => GameConfig::classic(),
            Self::Relaxed => GameConfig::relaxed(),
        }
    }
}

/// Reasons a configuration is rejected.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be positive")]
    NotPositive(&'static str),
    #[error("{0} must be a finite number")]
    NotFinite(&'static str),
    #[error("spawn band is empty ({low} > {high})")]
    EmptySpawnBand { low: f64, high: f64 },
    #[error("spawn band [{low}, {high}] leaves the play area (height {height})")]
    SpawnBandOutOfBounds { low: f64, high: f64, height: f64 },
    #[error("floor line {floor} lies outside the play area (height {height})")]
    FloorOutOfBounds { floor: f64, height: f64 },
    #[error("jump impulse must point upward (got {0})")]
    JumpNotUpward(f64),
    #[error("collision margin {0} swallows the whole sprite")]
    MarginTooLarge(&'static str),
}

/// Every tunable the simulation core reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub preset: Preset,

    // Play area
    pub play_width: f64,
    pub play_height: f64,
    /// Y coordinate of the ground; the player dies touching it.
    pub floor_line: f64,

    // Obstacles
    pub barrier_width: f64,
    pub barrier_length: f64,
    /// Vertical gap between the two halves of a pair.
    pub gap: f64,
    /// Horizontal distance between consecutive pairs.
    pub obstacle_spacing: f64,
    /// Horizontal scroll per tick.
    pub scroll_speed: f64,
    pub spawn_band_low: f64,
    pub spawn_band_high: f64,

    // Player
    pub gravity: f64,
    /// Velocity assigned on jump (negative = upward).
    pub jump_impulse: f64,
    pub player_width: f64,
    pub player_height: f64,

    // Collision
    pub collision_margin_player: f64,
    pub collision_margin_obstacle: f64,
    pub top_hitbox_policy: TopHitboxPolicy,

    /// Simulation ticks per second.
    pub tick_rate: u32,
}

impl GameConfig {
    /// Steep gravity, fast scrolling, spawn band tied to the floor line.
    pub fn classic() -> Self {
        let play_height = 500.0;
        let floor_line = play_height * 0.8;
        let barrier_length = 400.0;
        let gap = 150.0;
        Self {
            preset: Preset::Classic,
            play_width: 600.0,
            play_height,
            floor_line,
            barrier_width: 70.0,
            barrier_length,
            gap,
            obstacle_spacing: 300.0,
            scroll_speed: 4.0,
            spawn_band_low: floor_line - barrier_length * 0.6,
            spawn_band_high: floor_line - gap - 50.0,
            gravity: 0.25,
            jump_impulse: -7.0,
            player_width: 40.0,
            player_height: 30.0,
            collision_margin_player: 5.0,
            collision_margin_obstacle: 5.0,
            top_hitbox_policy: TopHitboxPolicy::GapEdge,
            tick_rate: 32,
        }
    }

    /// Softer physics and a spawn band at 40-60% of the play-area height.
    pub fn relaxed() -> Self {
        let play_height = 500.0;
        Self {
            preset: Preset::Relaxed,
            play_width: 600.0,
            play_height,
            floor_line: play_height * 0.8,
            barrier_width: 70.0,
            barrier_length: 400.0,
            gap: 150.0,
            obstacle_spacing: 300.0,
            scroll_speed: 3.0,
            spawn_band_low: play_height * 0.4,
            spawn_band_high: play_height * 0.6,
            gravity: 0.2,
            jump_impulse: -6.0,
            player_width: 40.0,
            player_height: 30.0,
            collision_margin_player: 6.0,
            collision_margin_obstacle: 8.0,
            top_hitbox_policy: TopHitboxPolicy::GapEdge,
            tick_rate: 32,
        }
    }

    /// Where every run starts the player.
    pub fn player_start(&self) -> (f64, f64) {
        ((self.play_width / 5.0).floor(), (self.play_height / 2.0).floor())
    }

    /// Reject configurations the simulation is not total over.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("play_width", self.play_width),
            ("play_height", self.play_height),
            ("barrier_width", self.barrier_width),
            ("barrier_length", self.barrier_length),
            ("gap", self.gap),
            ("obstacle_spacing", self.obstacle_spacing),
            ("scroll_speed", self.scroll_speed),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
        ];
        for (name, value) in positive {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite(name));
            }
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive(name));
            }
        }
        let finite = [
            ("floor_line", self.floor_line),
            ("spawn_band_low", self.spawn_band_low),
            ("spawn_band_high", self.spawn_band_high),
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("collision_margin_player", self.collision_margin_player),
            ("collision_margin_obstacle", self.collision_margin_obstacle),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite(name));
            }
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::NotPositive("tick_rate"));
        }
        if !(self.floor_line > 0.0 && self.floor_line <= self.play_height) {
            return Err(ConfigError::FloorOutOfBounds {
                floor: self.floor_line,
                height: self.play_height,
            });
        }
        if self.spawn_band_low > self.spawn_band_high {
            return Err(ConfigError::EmptySpawnBand {
                low: self.spawn_band_low,
                high: self.spawn_band_high,
            });
        }
        // Sampling needs a finite band width; keeping the band on screen
        // also keeps every gap reachable.
        if self.spawn_band_low < 0.0 || self.spawn_band_high > self.play_height {
            return Err(ConfigError::SpawnBandOutOfBounds {
                low: self.spawn_band_low,
                high: self.spawn_band_high,
                height: self.play_height,
            });
        }
        if !(self.jump_impulse < 0.0) {
            return Err(ConfigError::JumpNotUpward(self.jump_impulse));
        }
        if self.collision_margin_player * 2.0 >= self.player_width.min(self.player_height) {
            return Err(ConfigError::MarginTooLarge("collision_margin_player"));
        }
        if self.collision_margin_obstacle * 2.0 >= self.barrier_width {
            return Err(ConfigError::MarginTooLarge("collision_margin_obstacle"));
        }
        Ok(())
    }

    /// Wall-clock length of one tick, used only to pace the loop.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate.max(1)))
    }
}

/// Read a configuration file, falling back to `fallback` when the file is
/// missing, unreadable, malformed, or fails validation.
pub fn load_from_or(path: &Path, fallback: Preset) -> GameConfig {
    match persistence::load_json_from::<GameConfig>(path) {
        Ok(Some(config)) => match config.validate() {
            Ok(()) => {
                log::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!(
                    "Ignoring {}: {}; using {} preset",
                    path.display(),
                    e,
                    fallback.name()
                );
                fallback.config()
            }
        },
        Ok(None) => fallback.config(),
        Err(e) => {
            log::warn!(
                "Could not read {}: {}; using {} preset",
                path.display(),
                e,
                fallback.name()
            );
            fallback.config()
        }
    }
}

/// Configuration from ~/.flapper/config.json, or the fallback preset.
pub fn load_or(fallback: Preset) -> GameConfig {
    match persistence::save_path(CONFIG_FILENAME) {
        Ok(path) => load_from_or(&path, fallback),
        Err(e) => {
            log::warn!("No data directory ({}); using {} preset", e, fallback.name());
            fallback.config()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}
