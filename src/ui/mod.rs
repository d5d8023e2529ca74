//! Frontends: the input/render collaborator the game loop drives.

pub mod flappy_scene;
pub mod game_common;
pub mod terminal;

use crate::game::{GameView, InputEvent};
use std::io;
use std::time::Instant;

pub use terminal::TerminalFrontend;

/// Input polling and drawing, supplied from outside the simulation core.
pub trait Frontend {
    /// Collect input events until `deadline`. Blocking until the deadline
    /// paces the loop; an implementation may return early on `Quit`.
    fn poll_input(&mut self, deadline: Instant) -> io::Result<Vec<InputEvent>>;

    /// Draw the snapshot.
    fn draw(&mut self, view: &GameView<'_>) -> io::Result<()>;
}
