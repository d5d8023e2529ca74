//! Integration test: whole-run behavior of the simulation core.
//!
//! Drives `Game` through the public API with a seeded RNG and an in-memory
//! high-score store, checking physics, obstacle flow, scoring and the
//! inactive/active cycle over many ticks.

use flapper::game::obstacles;
use flapper::game::{Control, Game, GameMode, InputEvent, Obstacle};
use flapper::{GameConfig, HighScoreStore, MemoryHighScoreStore, Preset};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::cell::RefCell;
use std::rc::Rc;

fn new_game(config: GameConfig, seed: u64) -> Game<ChaCha8Rng> {
    Game::new(
        config,
        Box::new(MemoryHighScoreStore::new()),
        ChaCha8Rng::seed_from_u64(seed),
    )
}

/// Store shared with the test so saves can be inspected after the game owns it.
#[derive(Clone, Default)]
struct SharedStore(Rc<RefCell<Vec<u32>>>);

impl HighScoreStore for SharedStore {
    fn load(&self) -> u32 {
        self.0.borrow().last().copied().unwrap_or(0)
    }

    fn save(&mut self, score: u32) -> Result<(), flapper::highscore::StoreError> {
        self.0.borrow_mut().push(score);
        Ok(())
    }
}

/// Flap each time the player falls below a line just above the next gap's
/// floor. With the classic jump arc (~101px climb) the player then stays
/// inside the 150px gap.
fn autopilot(game: &mut Game<ChaCha8Rng>) {
    let config = game.config().clone();
    let run = game.run();
    let player = &run.player;
    let target = run
        .obstacles
        .iter()
        .find(|o| o.right_edge(&config) >= player.x)
        .map(|o| o.bottom_height - 45.0)
        .unwrap_or(config.floor_line / 2.0);
    let should_flap = player.y > target && player.vertical_velocity > 0.0;
    if should_flap {
        game.handle_input(InputEvent::Flap);
    }
}

// =============================================================================
// Physics
// =============================================================================

#[test]
fn test_free_fall_ends_run_at_deterministic_tick() {
    for seed in [1, 2, 3] {
        let mut game = new_game(GameConfig::classic(), seed);
        game.handle_input(InputEvent::Flap);

        let mut ended_at = None;
        for tick in 1..=100 {
            game.tick();
            if game.mode() == GameMode::Inactive {
                ended_at = Some(tick);
                break;
            }
        }
        assert_eq!(ended_at, Some(31), "seed {}", seed);
        assert!(game.run().player.y >= 370.0);
        assert!(game.run().crashed);
    }
}

#[test]
fn test_velocity_is_gravity_or_impulse() {
    let config = GameConfig::classic();
    let mut game = new_game(config.clone(), 9);
    game.handle_input(InputEvent::Flap);

    for tick in 0..25 {
        let before = game.run().player.vertical_velocity;
        let jumped = tick % 6 == 0;
        if jumped {
            game.handle_input(InputEvent::Flap);
        }
        game.tick();
        if game.mode() != GameMode::Active {
            break;
        }
        let after = game.run().player.vertical_velocity;
        if jumped {
            assert_eq!(after, config.jump_impulse);
        } else {
            assert!((after - (before + config.gravity)).abs() < 1e-12);
        }
    }
}

#[test]
fn test_double_jump_in_one_tick_equals_single() {
    let mut single = new_game(GameConfig::classic(), 4);
    let mut double = new_game(GameConfig::classic(), 4);
    for g in [&mut single, &mut double] {
        g.handle_input(InputEvent::Flap);
        for _ in 0..5 {
            g.tick();
        }
    }

    single.handle_input(InputEvent::Flap);
    double.handle_input(InputEvent::Flap);
    double.handle_input(InputEvent::Flap);
    single.tick();
    double.tick();

    assert_eq!(single.run().player, double.run().player);
}

// =============================================================================
// Obstacles
// =============================================================================

#[test]
fn test_obstacle_scrolls_and_disappears() {
    let config = GameConfig::classic();
    let mut game = new_game(config.clone(), 5);
    game.handle_input(InputEvent::Flap);
    let first_bottom = game.run().obstacles[0].bottom_height;
    let w = config.play_width;
    let s = config.scroll_speed;

    let mut k = 0u32;
    loop {
        k += 1;
        autopilot(&mut game);
        game.tick();
        assert_eq!(game.mode(), GameMode::Active, "tick {}", k);

        let expected_x = w - f64::from(k) * s;
        let still_there = game
            .run()
            .obstacles
            .iter()
            .any(|o| o.bottom_height == first_bottom && (o.x - expected_x).abs() < 1e-9);
        if expected_x + config.barrier_width <= 0.0 {
            assert!(!still_there, "tick {}", k);
            break;
        }
        assert!(still_there, "tick {}", k);
        if k > 1_000 {
            panic!("obstacle never left the screen");
        }
    }
}

#[test]
fn test_obstacles_sorted_and_spaced_during_play() {
    let config = GameConfig::classic();
    let mut game = new_game(config.clone(), 11);
    game.handle_input(InputEvent::Flap);

    for _ in 0..3_000 {
        autopilot(&mut game);
        game.tick();
        let obs = &game.run().obstacles;
        assert!(!obs.is_empty());
        assert!(obs
            .windows(2)
            .all(|w| w[1].x - w[0].x >= config.obstacle_spacing - 1e-9));
        assert!(obs.iter().all(|o| o.right_edge(&config) > 0.0));
        if game.mode() == GameMode::Inactive {
            game.handle_input(InputEvent::Flap);
        }
    }
}

// =============================================================================
// Scoring and high score
// =============================================================================

#[test]
fn test_score_counts_each_passed_obstacle_once() {
    let config = GameConfig::classic();
    let mut game = new_game(config.clone(), 21);
    game.handle_input(InputEvent::Flap);

    let mut passed_total = 0u32;
    let mut last_score = 0;
    for _ in 0..2_000 {
        autopilot(&mut game);
        let before: Vec<bool> = game.run().obstacles.iter().map(|o| o.scored).collect();
        let outcome = game.tick();
        if !outcome.simulated {
            break;
        }
        // score only grows, one per newly scored obstacle
        assert!(game.run().score >= last_score);
        let newly_scored = game
            .run()
            .obstacles
            .iter()
            .filter(|o| o.scored)
            .count() as u32;
        let previously_scored_survivors = before.iter().filter(|s| **s).count() as u32;
        assert!(newly_scored <= previously_scored_survivors + outcome.scored);
        passed_total += outcome.scored;
        last_score = game.run().score;
        if game.mode() == GameMode::Inactive {
            break;
        }
    }
    assert_eq!(game.run().score, passed_total);
}

#[test]
fn test_high_score_is_running_maximum() {
    let store = SharedStore::default();
    let saves = store.0.clone();
    let mut game = Game::new(
        GameConfig::classic(),
        Box::new(store),
        ChaCha8Rng::seed_from_u64(77),
    );

    let mut best = 0u32;
    for run in 0..6 {
        game.handle_input(InputEvent::Flap);
        assert_eq!(game.mode(), GameMode::Active);
        for tick in 0..4_000 {
            // later runs fly longer
            if tick < 200 * (run + 1) {
                autopilot(&mut game);
            }
            let before = game.high_score();
            game.tick();
            assert!(game.high_score() >= before);
            if game.mode() == GameMode::Inactive {
                break;
            }
        }
        best = best.max(game.run().score);
        assert_eq!(game.high_score(), best);
    }

    let saves = saves.borrow();
    assert!(saves.windows(2).all(|w| w[0] < w[1]));
    if best > 0 {
        assert_eq!(*saves.last().unwrap(), best);
    }
}

#[test]
fn test_two_obstacles_passed_in_one_tick() {
    let config = GameConfig::classic();
    let mut game = new_game(config.clone(), 8);
    game.handle_input(InputEvent::Flap);

    // Hand-built sequence: two pairs right behind the player, in ascending x.
    let mut seq = vec![
        Obstacle::new(-40.0, 180.0, &config),
        Obstacle::new(50.0, 180.0, &config),
    ];
    obstacles::advance(&mut seq, config.scroll_speed);
    let mut store = MemoryHighScoreStore::new();
    let update = flapper::game::score::update(
        &game.run().player,
        &mut seq,
        0,
        0,
        &config,
        &mut store,
    );
    assert_eq!(update.score, 2);
    assert!(update.persisted);
    assert_eq!(store.saves, vec![2]);
}

// =============================================================================
// State machine
// =============================================================================

#[test]
fn test_quit_is_honored_in_every_state() {
    let mut game = new_game(GameConfig::relaxed(), 2);
    assert_eq!(game.handle_input(InputEvent::Quit), Control::Quit);
    game.handle_input(InputEvent::Flap);
    assert_eq!(game.handle_input(InputEvent::Quit), Control::Quit);
    while game.mode() == GameMode::Active {
        game.tick();
    }
    assert_eq!(game.handle_input(InputEvent::Quit), Control::Quit);
}

#[test]
fn test_relaxed_preset_plays() {
    let config = Preset::Relaxed.config();
    let mut game = new_game(config.clone(), 13);
    game.handle_input(InputEvent::Flap);
    assert_eq!(game.config().preset, Preset::Relaxed);
    for o in &game.run().obstacles {
        assert!(o.bottom_height >= config.play_height * 0.4);
        assert!(o.bottom_height <= config.play_height * 0.6);
    }
    let mut ticks = 0;
    while game.mode() == GameMode::Active && ticks < 1_000 {
        game.tick();
        ticks += 1;
    }
    // softer gravity keeps the player up longer than the classic 31 ticks
    assert!(ticks > 31);
}
