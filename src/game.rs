//! Game controller
//!
//! Owns the mutable simulation state and the cooperative scheduler that
//! drives it. The rendering layer talks to this and nothing else: phase
//! operations in, a read-only state snapshot out once per frame.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::audio::AudioController;
use crate::consts::{EASE_DT, PHYSICS_DT};
use crate::sim::state::{GamePhase, GameState};
use crate::sim::tick::StepEvents;
use crate::sim::{easing, tick};
use crate::tuning::Tuning;

/// Deadlines for the fixed-cadence sub-steps.
///
/// One clock drives both cadences: the 16 ms easing work and the 25 ms
/// physics step. Due deadlines dispatch in timestamp order, easing before
/// physics on exact ties, so the relative phase of the cadences is
/// deterministic.
#[derive(Debug, Clone, Copy)]
struct Scheduler {
    clock: f64,
    next_ease: f64,
    next_physics: f64,
    armed: bool,
}

impl Scheduler {
    fn disarmed() -> Self {
        Self {
            clock: 0.0,
            next_ease: 0.0,
            next_physics: 0.0,
            armed: false,
        }
    }

    /// Arm both cadences with fresh initial phase, as if the intervals had
    /// just been created.
    fn arm(&mut self) {
        self.next_ease = self.clock + EASE_DT as f64;
        self.next_physics = self.clock + PHYSICS_DT as f64;
        self.armed = true;
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

/// The game loop: all mutable simulation state behind the operations the
/// rendering layer calls.
pub struct GameLoop<A: AudioController> {
    state: GameState,
    tuning: Tuning,
    rng: Pcg32,
    scheduler: Scheduler,
    audio: A,
}

impl<A: AudioController> GameLoop<A> {
    /// Create a loop sitting on the start screen. The seed drives only the
    /// serve-direction coin flips.
    pub fn new(seed: u64, tuning: Tuning, audio: A) -> Self {
        Self {
            state: GameState::new(&tuning),
            rng: Pcg32::seed_from_u64(seed),
            scheduler: Scheduler::disarmed(),
            tuning,
            audio,
        }
    }

    /// Read-only view for the rendering layer, polled once per frame.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Reset all state to initial values and begin play. State and
    /// scheduler are replaced in one call, so a consumer polling between
    /// frames never observes a half-reset game.
    pub fn start(&mut self) {
        self.state = GameState::new(&self.tuning);
        self.state.phase = GamePhase::Running;
        self.scheduler.arm();
        self.audio.play();
        log::info!("game started");
    }

    /// Restart from the game-over screen. Identical to [`start`](Self::start).
    pub fn restart(&mut self) {
        self.start();
    }

    /// Toggle Running <-> Paused. A no-op on the start and game-over
    /// screens.
    pub fn toggle_pause(&mut self) {
        match self.state.phase {
            GamePhase::Running => {
                self.state.phase = GamePhase::Paused;
                self.scheduler.disarm();
                self.audio.pause();
            }
            GamePhase::Paused => {
                self.state.phase = GamePhase::Running;
                self.scheduler.arm();
                self.audio.play();
            }
            GamePhase::NotStarted | GamePhase::GameOver => {}
        }
    }

    /// Pointer input: aim the player paddle. Coordinates are clamped to the
    /// playable area; input is ignored unless the game is running. Only the
    /// target fields move here, so input may interleave freely with the
    /// scheduler.
    pub fn set_player_paddle_target(&mut self, x: f32, y: f32) {
        if self.state.phase != GamePhase::Running {
            return;
        }
        self.state.player.set_target(x, y);
    }

    /// Feed elapsed wall-clock time to the scheduler and dispatch every
    /// sub-step that came due. A no-op unless the game is running.
    pub fn advance(&mut self, dt: f32) {
        if self.state.phase != GamePhase::Running || !self.scheduler.armed {
            return;
        }
        self.scheduler.clock += dt as f64;

        while self.scheduler.armed {
            let ease_first = self.scheduler.next_ease <= self.scheduler.next_physics;
            let deadline = if ease_first {
                self.scheduler.next_ease
            } else {
                self.scheduler.next_physics
            };
            if deadline > self.scheduler.clock {
                break;
            }

            if ease_first {
                easing::ease_player_paddle(&mut self.state, &self.tuning);
                easing::ease_opponent_paddle(&mut self.state, &self.tuning);
                easing::ease_ball_display(&mut self.state, &self.tuning);
                self.scheduler.next_ease += EASE_DT as f64;
            } else {
                let events = tick::step(&mut self.state, &self.tuning, &mut self.rng);
                self.apply_side_effects(events);
                self.scheduler.next_physics += PHYSICS_DT as f64;
            }
        }
    }

    /// Restore a previously captured snapshot. The scheduler re-arms from
    /// scratch when the snapshot was running; timer phase is not part of a
    /// snapshot.
    pub fn restore(&mut self, state: GameState) {
        self.scheduler = Scheduler::disarmed();
        if state.phase == GamePhase::Running {
            self.scheduler.arm();
        }
        self.state = state;
    }

    fn apply_side_effects(&mut self, events: StepEvents) {
        if events.player_scored || events.opponent_scored {
            log::debug!(
                "score {} - {} (lives {})",
                self.state.player_score,
                self.state.opponent_score,
                self.state.lives
            );
        }
        if events.level_up {
            log::info!(
                "level {} at {} - {}, ball speed {:.1}",
                self.state.level,
                self.state.player_score,
                self.state.opponent_score,
                self.state.ball_speed
            );
        }
        if events.game_over {
            self.scheduler.disarm();
            self.audio.pause();
            log::info!(
                "game over: {} - {}, level {}, currency {}",
                self.state.player_score,
                self.state.opponent_score,
                self.state.level,
                self.state.currency
            );
        }
    }
}
