//! Scoring: one point per obstacle pair the player has fully passed.

use super::types::{Obstacle, Player};
use crate::config::GameConfig;
use crate::highscore::HighScoreStore;

/// Result of a score update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreUpdate {
    pub score: u32,
    pub high_score: u32,
    /// A new high score was set and written to the store during this update.
    pub persisted: bool,
}

/// Credit every unscored pair whose trailing edge is left of the player.
///
/// Walks the sequence in ascending `x` so several pairs passed in the same
/// tick each add one. A new high score is written through immediately; a
/// failed write is logged and the in-memory value is kept.
pub fn update(
    player: &Player,
    obstacles: &mut [Obstacle],
    score: u32,
    high_score: u32,
    config: &GameConfig,
    store: &mut dyn HighScoreStore,
) -> ScoreUpdate {
    let mut score = score;
    for obstacle in obstacles.iter_mut() {
        if obstacle.scored {
            continue;
        }
        if obstacle.right_edge(config) < player.x {
            obstacle.scored = true;
            score += 1;
        } else {
            // later pairs are further right
            break;
        }
    }

    if score <= high_score {
        return ScoreUpdate {
            score,
            high_score,
            persisted: false,
        };
    }

    let persisted = match store.save(score) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("High score {} not saved: {}", score, e);
            false
        }
    };
    ScoreUpdate {
        score,
        high_score: score,
        persisted,
    }
}
