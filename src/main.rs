use flapper::cli::{self, Command, USAGE};
use flapper::config::{self, Preset, CONFIG_FILENAME};
use flapper::game_loop;
use flapper::highscore::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore};
use flapper::ui::TerminalFrontend;
use flapper::utils::{persistence, version_line};
use flapper::{FlapperError, Game};

fn main() {
    let command = match cli::parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'flapper --help' for usage.");
            std::process::exit(1);
        }
    };

    if let Err(e) = execute(command) {
        eprintln!("flapper: {}", e);
        std::process::exit(1);
    }
}

fn execute(command: Command) -> Result<(), FlapperError> {
    match command {
        Command::Version => {
            println!("{}", version_line());
            Ok(())
        }
        Command::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        Command::WriteConfig { preset } => write_config(preset),
        Command::Play { preset } => play(preset),
    }
}

fn write_config(preset: Preset) -> Result<(), FlapperError> {
    let path = persistence::save_path(CONFIG_FILENAME).map_err(|source| {
        FlapperError::WriteConfig {
            path: CONFIG_FILENAME.into(),
            source,
        }
    })?;
    persistence::save_json_to(&path, &preset.config())
        .map_err(|source| FlapperError::WriteConfig {
            path: path.clone(),
            source,
        })?;
    println!("Wrote {} preset to {}", preset.name(), path.display());
    Ok(())
}

fn play(preset: Option<Preset>) -> Result<(), FlapperError> {
    if let Some(path) = flapper::logging::init() {
        log::info!("Logging to {}", path.display());
    }

    let config = match preset {
        Some(preset) => preset.config(),
        None => config::load_or(Preset::Classic),
    };

    let store: Box<dyn HighScoreStore> = match FileHighScoreStore::in_data_dir() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("High score will not be saved: {}", e);
            Box::new(MemoryHighScoreStore::new())
        }
    };

    let mut game = Game::new(config, store, rand::thread_rng());

    let mut frontend = TerminalFrontend::new()?;
    let result = game_loop::run(&mut game, &mut frontend);
    let restored = frontend.restore();

    let summary = result?;
    restored?;
    log::info!(
        "Exiting after {} frames ({} simulated ticks), best {}",
        summary.frames,
        summary.simulated_ticks,
        game.high_score()
    );
    println!("Best score: {}", game.high_score());
    Ok(())
}
