//! Flapper - a terminal side-scroller about flying through gaps.
//!
//! The simulation core lives in [`game`]; everything that touches the
//! terminal is behind the [`ui::Frontend`] trait.

pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod game_loop;
pub mod highscore;
pub mod input;
pub mod logging;
pub mod ui;
pub mod utils;

pub use config::{GameConfig, Preset, TopHitboxPolicy};
pub use error::FlapperError;
pub use game::{Game, GameMode, GameView, InputEvent};
pub use highscore::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore};
