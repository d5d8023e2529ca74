//! Tick-based vertical physics for the player.

use super::types::Player;

/// Constant per-tick acceleration followed by position update.
pub fn integrate(player: &mut Player, gravity: f64) {
    player.vertical_velocity += gravity;
    player.y += player.vertical_velocity;
}

/// Override the current velocity with the jump impulse.
pub fn jump(player: &mut Player, impulse: f64) {
    player.vertical_velocity = impulse;
}

/// Advance the player one tick.
///
/// A buffered jump replaces the gravity step for that tick, so the velocity
/// after the tick is exactly `impulse`.
pub fn step(player: &mut Player, gravity: f64, impulse: f64, jump_queued: bool) {
    if jump_queued {
        jump(player, impulse);
        player.y += player.vertical_velocity;
    } else {
        integrate(player, gravity);
    }
}
