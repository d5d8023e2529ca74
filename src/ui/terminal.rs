//! Crossterm/ratatui frontend.

use super::flappy_scene::render_game;
use super::Frontend;
use crate::game::{GameView, InputEvent};
use crate::input::{map_key, KeyAction};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Instant;

pub struct TerminalFrontend {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    show_hitboxes: bool,
}

impl TerminalFrontend {
    /// Enter raw mode and the alternate screen. Any failure after raw mode
    /// is on undoes it before returning.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let terminal = undo_on_error(
            || {
                let mut stdout = io::stdout();
                stdout.execute(EnterAlternateScreen)?;
                let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
                terminal.hide_cursor()?;
                Ok(terminal)
            },
            abandon_terminal,
        )?;
        Ok(Self {
            terminal,
            show_hitboxes: false,
        })
    }

    /// Leave the alternate screen and raw mode.
    pub fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        self.terminal.backend_mut().execute(LeaveAlternateScreen)?;
        self.terminal.show_cursor()
    }
}

/// Best-effort teardown for a half-finished setup.
fn abandon_terminal() {
    let _ = io::stdout().execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Run `setup`; if it fails, run `undo` and pass the error on.
fn undo_on_error<T>(
    setup: impl FnOnce() -> io::Result<T>,
    undo: impl FnOnce(),
) -> io::Result<T> {
    setup().map_err(|e| {
        undo();
        e
    })
}

impl Frontend for TerminalFrontend {
    fn poll_input(&mut self, deadline: Instant) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        loop {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            if !event::poll(deadline - now)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    Some(KeyAction::Game(InputEvent::Quit)) => {
                        events.push(InputEvent::Quit);
                        return Ok(events);
                    }
                    Some(KeyAction::Game(input)) => events.push(input),
                    Some(KeyAction::ToggleHitboxes) => {
                        self.show_hitboxes = !self.show_hitboxes;
                        log::debug!("Hitbox overlay {}", self.show_hitboxes);
                    }
                    None => {}
                }
            }
        }
        Ok(events)
    }

    fn draw(&mut self, view: &GameView<'_>) -> io::Result<()> {
        let show_hitboxes = self.show_hitboxes;
        self.terminal.draw(|frame| {
            let area = frame.size();
            render_game(frame, area, view, show_hitboxes);
        })?;
        Ok(())
    }
}
