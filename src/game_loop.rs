//! Fixed-tick-rate main loop: poll input, simulate one tick, render.

use crate::game::{Control, Game};
use crate::ui::Frontend;
use rand::Rng;
use std::io;
use std::time::Instant;

/// Totals reported when the loop exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoopSummary {
    /// Loop iterations (frames) completed.
    pub frames: u64,
    /// Frames in which the core simulated a tick.
    pub simulated_ticks: u64,
}

/// Drive `game` with `frontend` until a quit input arrives.
///
/// Each iteration waits for input until the next tick boundary, applies the
/// inputs in arrival order, simulates one tick and draws. Frontend I/O
/// errors end the loop.
pub fn run<R: Rng, F: Frontend>(game: &mut Game<R>, frontend: &mut F) -> io::Result<LoopSummary> {
    let interval = game.config().tick_interval();
    let mut summary = LoopSummary::default();
    let mut next_tick = Instant::now() + interval;

    frontend.draw(&game.view())?;

    loop {
        for input in frontend.poll_input(next_tick)? {
            if game.handle_input(input) == Control::Quit {
                return Ok(summary);
            }
        }

        if game.tick().simulated {
            summary.simulated_ticks += 1;
        }
        frontend.draw(&game.view())?;
        summary.frames += 1;

        next_tick += interval;
        let now = Instant::now();
        if next_tick < now {
            // Fell behind (slow terminal); resync instead of bursting ticks.
            next_tick = now;
        }
    }
}
