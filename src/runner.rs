//! Loop controller
//!
//! One persistent worker thread per run, started once and controlled through
//! a pause/resume flag rather than re-spawned on every resume. The loop is
//! the only writer of simulation state; presentation layers read cloned
//! snapshots. Pause is cooperative: the requester sets the flag and blocks
//! with a bounded wait until the loop acknowledges at a tick boundary, so a
//! hung tick cannot block the caller indefinitely. Stop joins the thread,
//! guaranteeing the loop has fully exited before owned resources go away.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::clock::Clock;
use crate::consts::{PAUSE_ACK_TIMEOUT_MS, TICK_INTERVAL_MS};
use crate::scores::ScoreStore;
use crate::settings::SettingsProvider;
use crate::sim::{GameState, Snapshot, TickInput, tick};

/// Collision cue sink. Each cue is gated by its own settings flag.
pub trait FeedbackSink: Send {
    /// Haptic buzz, gated by `haptics_enabled`.
    fn vibrate(&self);
    /// Crash sound, gated by `sound_enabled`.
    fn play_sound(&self);
}

/// Optional notification hooks. All run on the loop thread.
#[derive(Default)]
pub struct Hooks {
    /// Per-tick snapshot callback (at most once per tick)
    pub on_frame: Option<Box<dyn Fn(&Snapshot) + Send>>,
    /// No-argument end-of-run signal, fired exactly once on GameOver
    pub on_game_over: Option<Box<dyn Fn() + Send>>,
    /// Collision feedback, gated by the settings provider
    pub feedback: Option<Box<dyn FeedbackSink>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Run,
    Pause,
    Stop,
}

struct Control {
    command: Command,
    /// Set by the loop once it has honored the current command at a tick
    /// boundary
    acknowledged: bool,
}

struct Shared {
    control: Mutex<Control>,
    control_changed: Condvar,
    thrust: AtomicBool,
    snapshot: Mutex<Snapshot>,
    game_over: AtomicBool,
}

/// Handle to one run's loop thread. Dropping the handle stops the loop.
pub struct GameLoop {
    shared: Arc<Shared>,
    handle: Option<JoinHandle<()>>,
}

impl GameLoop {
    /// Start the worker for a fresh run. The state must come from a valid
    /// `RunConfig`; the loop never starts without known playfield
    /// dimensions.
    pub fn spawn(
        state: GameState,
        scores: Arc<dyn ScoreStore>,
        settings: Arc<dyn SettingsProvider>,
        clock: Arc<dyn Clock>,
        hooks: Hooks,
    ) -> Self {
        let shared = Arc::new(Shared {
            control: Mutex::new(Control {
                command: Command::Run,
                acknowledged: false,
            }),
            control_changed: Condvar::new(),
            thrust: AtomicBool::new(false),
            snapshot: Mutex::new(state.snapshot()),
            game_over: AtomicBool::new(false),
        });

        let worker_shared = shared.clone();
        let handle = thread::Builder::new()
            .name("game-loop".into())
            .spawn(move || run_loop(state, worker_shared, scores, settings, clock, hooks))
            .expect("failed to spawn game loop thread");

        Self {
            shared,
            handle: Some(handle),
        }
    }

    /// Level value of the thrust control, sampled once per tick.
    pub fn set_thrust(&self, active: bool) {
        self.shared.thrust.store(active, Ordering::Relaxed);
    }

    /// Latest published per-tick snapshot. Never a torn mid-tick state.
    pub fn snapshot(&self) -> Snapshot {
        self.shared.snapshot.lock().expect("snapshot poisoned").clone()
    }

    pub fn is_game_over(&self) -> bool {
        self.shared.game_over.load(Ordering::Acquire)
    }

    /// Request a pause and wait (bounded) for the in-flight tick to finish.
    /// Returns whether the loop acknowledged within the timeout.
    pub fn pause(&self) -> bool {
        if self.is_game_over() {
            return false;
        }
        let mut control = self.shared.control.lock().expect("control poisoned");
        control.command = Command::Pause;
        control.acknowledged = false;
        self.shared.control_changed.notify_all();

        let deadline = Instant::now() + Duration::from_millis(PAUSE_ACK_TIMEOUT_MS);
        while !control.acknowledged {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                log::warn!("pause not acknowledged within {PAUSE_ACK_TIMEOUT_MS}ms");
                return false;
            }
            let (guard, _timeout) = self
                .shared
                .control_changed
                .wait_timeout(control, remaining)
                .expect("control poisoned");
            control = guard;
        }
        true
    }

    /// Resume from pause. The loop shifts every timer by the paused
    /// duration before the next tick.
    pub fn resume(&self) {
        let mut control = self.shared.control.lock().expect("control poisoned");
        if control.command == Command::Pause {
            control.command = Command::Run;
            control.acknowledged = false;
            self.shared.control_changed.notify_all();
        }
    }

    /// Stop the loop and join the thread. After this returns the loop has
    /// fully exited and owned resources are safe to release.
    pub fn stop(&mut self) {
        {
            let mut control = self.shared.control.lock().expect("control poisoned");
            control.command = Command::Stop;
            self.shared.control_changed.notify_all();
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("game loop thread panicked");
            }
        }
    }
}

impl Drop for GameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_loop(
    mut state: GameState,
    shared: Arc<Shared>,
    scores: Arc<dyn ScoreStore>,
    settings: Arc<dyn SettingsProvider>,
    clock: Arc<dyn Clock>,
    hooks: Hooks,
) {
    state.start(clock.now_ms());
    log::info!(
        "run started: playfield {}x{}",
        state.config.width,
        state.config.height
    );

    let mut paused_at: Option<u64> = None;

    loop {
        // Honor control requests at the tick boundary.
        {
            let mut control = shared.control.lock().expect("control poisoned");
            loop {
                match control.command {
                    Command::Stop => {
                        control.acknowledged = true;
                        shared.control_changed.notify_all();
                        log::info!("run stopped at score {:.1}", state.score.value());
                        return;
                    }
                    Command::Pause => {
                        if paused_at.is_none() {
                            paused_at = Some(clock.now_ms());
                            state.pause();
                            publish(&shared, &state, &hooks);
                            log::info!("paused at score {:.1}", state.score.value());
                        }
                        control.acknowledged = true;
                        shared.control_changed.notify_all();
                        control = shared
                            .control_changed
                            .wait(control)
                            .expect("control poisoned");
                    }
                    Command::Run => {
                        if let Some(pause_started) = paused_at.take() {
                            let now = clock.now_ms();
                            state.resume(now, now.saturating_sub(pause_started));
                            log::info!("resumed after {}ms", now.saturating_sub(pause_started));
                        }
                        break;
                    }
                }
            }
        }

        let tick_started = Instant::now();
        let now = clock.now_ms();
        let input = TickInput {
            thrust: shared.thrust.load(Ordering::Relaxed),
        };
        let outcome = tick(&mut state, input, now);
        publish(&shared, &state, &hooks);

        if outcome.game_over {
            finish_run(&state, scores.as_ref(), settings.as_ref(), &hooks);
            shared.game_over.store(true, Ordering::Release);
            return;
        }

        // Sleep out the rest of the tick budget; ticks are short and run to
        // completion, only continuation is cancellable.
        if let Some(remaining) =
            Duration::from_millis(TICK_INTERVAL_MS).checked_sub(tick_started.elapsed())
        {
            thread::sleep(remaining);
        }
    }
}

fn publish(shared: &Shared, state: &GameState, hooks: &Hooks) {
    let snapshot = state.snapshot();
    if let Some(on_frame) = &hooks.on_frame {
        on_frame(&snapshot);
    }
    *shared.snapshot.lock().expect("snapshot poisoned") = snapshot;
}

/// Terminal-transition side effects, performed exactly once per run.
fn finish_run(
    state: &GameState,
    scores: &dyn ScoreStore,
    settings: &dyn SettingsProvider,
    hooks: &Hooks,
) {
    let current = state.score.value();
    let best = scores.highest_score().max(current as i64);
    match scores.add_score(best, current) {
        Ok(id) => log::info!("score persisted: record {id}, best {best}, last {current:.1}"),
        Err(err) => log::error!("failed to persist score: {err}"),
    }

    if let Some(feedback) = &hooks.feedback {
        if settings.haptics_enabled() {
            feedback.vibrate();
        }
        if settings.sound_enabled() {
            feedback.play_sound();
        }
    }

    if let Some(on_game_over) = &hooks.on_game_over {
        on_game_over();
    }
}
