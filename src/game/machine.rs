//! The game state machine: mode, reset cycle and per-tick orchestration.

use super::collision::{self, Hitboxes};
use super::types::{GameMode, RunState};
use super::{obstacles, physics, score};
use crate::config::GameConfig;
use crate::highscore::HighScoreStore;
use rand::Rng;

/// Discrete inputs the core understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Start a run when inactive, jump when active.
    Flap,
    /// Leave the game, from any state.
    Quit,
}

/// What `handle_input` asks the caller to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// What happened during one call to `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// False when the game was inactive and nothing was simulated.
    pub simulated: bool,
    pub crashed: bool,
    /// Points gained this tick.
    pub scored: u32,
    pub new_high_score: bool,
}

/// Read-only snapshot handed to renderers.
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    pub run: &'a RunState,
    pub mode: GameMode,
    pub high_score: u32,
    pub config: &'a GameConfig,
}

impl GameView<'_> {
    /// Hitboxes of the snapshot for optional debug drawing.
    pub fn hitboxes(&self) -> Hitboxes {
        collision::hitboxes(self.run, self.config)
    }

    /// True before the first run of the process.
    pub fn is_idle(&self) -> bool {
        self.mode == GameMode::Inactive && !self.run.crashed
    }
}

/// Owns the run state, the high score and the injected collaborators.
pub struct Game<R: Rng> {
    config: GameConfig,
    run: RunState,
    mode: GameMode,
    high_score: u32,
    jump_queued: bool,
    runs_started: u32,
    store: Box<dyn HighScoreStore>,
    rng: R,
}

impl<R: Rng> Game<R> {
    /// New inactive game; the high score is loaded from `store` once, here.
    pub fn new(config: GameConfig, store: Box<dyn HighScoreStore>, rng: R) -> Self {
        let high_score = store.load();
        log::info!(
            "Game ready ({} preset, high score {})",
            config.preset.name(),
            high_score
        );
        let run = RunState::new(&config);
        Self {
            config,
            run,
            mode: GameMode::Inactive,
            high_score,
            jump_queued: false,
            runs_started: 0,
            store,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn run(&self) -> &RunState {
        &self.run
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn runs_started(&self) -> u32 {
        self.runs_started
    }

    pub fn view(&self) -> GameView<'_> {
        GameView {
            run: &self.run,
            mode: self.mode,
            high_score: self.high_score,
            config: &self.config,
        }
    }

    /// Apply one input event.
    pub fn handle_input(&mut self, input: InputEvent) -> Control {
        match input {
            InputEvent::Quit => {
                log::info!("Quit requested (score {})", self.run.score);
                Control::Quit
            }
            InputEvent::Flap => {
                match self.mode {
                    GameMode::Inactive => self.start_run(),
                    // Repeated flaps before the next tick collapse into one
                    GameMode::Active => self.jump_queued = true,
                }
                Control::Continue
            }
        }
    }

    /// Replace the run with a fresh one and go active.
    fn start_run(&mut self) {
        let mut run = RunState::new(&self.config);
        obstacles::reseed(&mut run.obstacles, &self.config, &mut self.rng);
        self.run = run;
        self.jump_queued = false;
        self.mode = GameMode::Active;
        self.runs_started += 1;
        log::info!("Run {} started", self.runs_started);
    }

    /// Simulate one tick. Inactive ticks do nothing.
    pub fn tick(&mut self) -> TickOutcome {
        if self.mode != GameMode::Active {
            return TickOutcome::default();
        }

        let config = &self.config;
        let run = &mut self.run;

        physics::step(
            &mut run.player,
            config.gravity,
            config.jump_impulse,
            self.jump_queued,
        );
        self.jump_queued = false;

        obstacles::scroll(&mut run.obstacles, config, &mut self.rng);

        let crashed = collision::is_colliding(&run.player, &run.obstacles, config);

        let previous_score = run.score;
        let update = score::update(
            &run.player,
            &mut run.obstacles,
            run.score,
            self.high_score,
            config,
            self.store.as_mut(),
        );
        let new_high_score = update.high_score > self.high_score;
        run.score = update.score;
        self.high_score = update.high_score;
        run.tick_count += 1;

        if new_high_score {
            run.new_best = true;
            log::debug!("New high score {}", self.high_score);
        }

        if crashed {
            run.crashed = true;
            self.mode = GameMode::Inactive;
            log::info!(
                "Run {} over after {} ticks: score {}, best {}",
                self.runs_started,
                run.tick_count,
                run.score,
                self.high_score
            );
        }

        TickOutcome {
            simulated: true,
            crashed,
            scored: update.score - previous_score,
            new_high_score,
        }
    }
}
