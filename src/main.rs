//! Headless demo driver
//!
//! Runs one complete game on a worker loop with a bang-bang altitude-hold
//! autopilot feeding the thrust input, exercising pause/resume mid-run, and
//! prints the persisted result. `RUST_LOG=info` shows the lifecycle events.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use reef_runner::runner::Hooks;
use reef_runner::sim::{GamePhase, GameState, RunConfig};
use reef_runner::{Clock, GameLoop, MemoryScoreStore, MonotonicClock, ScoreStore, Settings};

const PLAYFIELD_WIDTH: f32 = 1080.0;
const PLAYFIELD_HEIGHT: f32 = 1920.0;
const MAX_RUN: Duration = Duration::from_secs(60);

fn main() {
    env_logger::init();

    let config = match RunConfig::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT) {
        Ok(config) => config,
        Err(err) => {
            log::error!("invalid playfield: {err}");
            std::process::exit(1);
        }
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("starting run with seed {seed}");

    let scores: Arc<MemoryScoreStore> = Arc::new(MemoryScoreStore::new());
    let settings = Arc::new(Settings::default());
    let clock = Arc::new(MonotonicClock::new());

    let hooks = Hooks {
        on_game_over: Some(Box::new(|| println!("game over"))),
        ..Default::default()
    };

    let state = GameState::new(config, seed, clock.now_ms());
    let game = GameLoop::spawn(state, scores.clone(), settings, clock, hooks);

    // Bang-bang altitude hold: thrust whenever the avatar is below center.
    let hold_y = config.height / 2.0;
    let started = Instant::now();
    let mut paused_once = false;
    loop {
        let snapshot = game.snapshot();
        if snapshot.phase == GamePhase::GameOver {
            break;
        }
        if started.elapsed() > MAX_RUN {
            log::info!("time limit reached, stopping");
            break;
        }

        // Exercise the pause path once, two seconds in.
        if !paused_once && started.elapsed() > Duration::from_secs(2) {
            paused_once = true;
            if game.pause() {
                log::info!("demo pause at score {:.1}", game.snapshot().score);
                thread::sleep(Duration::from_millis(500));
                game.resume();
            }
        }

        game.set_thrust(snapshot.avatar_y > hold_y);
        thread::sleep(Duration::from_millis(8));
    }

    let mut game = game;
    game.stop();

    let final_score = game.snapshot().score;
    println!("final score: {}", final_score as i64);
    println!("best score:  {}", scores.highest_score());
    println!("last score:  {}", scores.last_score());
}
