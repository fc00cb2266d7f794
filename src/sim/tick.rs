//! Fixed cadence physics step
//!
//! Advances the true ball, resolves collisions, and applies scoring, lives,
//! and level progression. One call per 25 ms of wall-clock while the game
//! runs.

use rand::Rng;

use super::collision;
use super::state::{GamePhase, GameState};
use crate::consts::*;
use crate::tuning::Tuning;

/// What happened during a physics step. Side effects (audio, logging) are
/// applied by the controller, never in here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepEvents {
    pub wall_bounce: bool,
    pub player_scored: bool,
    pub opponent_scored: bool,
    pub level_up: bool,
    pub game_over: bool,
}

/// Advance the simulation by one physics step.
///
/// A no-op unless the phase is Running: a step dispatched after a pause or
/// game-over raced with scheduler cancellation must not mutate anything.
pub fn step(state: &mut GameState, tuning: &Tuning, rng: &mut impl Rng) -> StepEvents {
    let mut events = StepEvents::default();
    if state.phase != GamePhase::Running {
        return events;
    }

    state.ball.pos += state.ball.vel * BALL_STEP_SCALE;

    events.wall_bounce = collision::reflect_off_walls(&mut state.ball.pos, &mut state.ball.vel);

    // Player paddle: reflect upward, kick sideways by contact offset, and
    // pin the ball to the paddle edge so it can't re-trigger next step.
    let paddle = state.player.pos;
    if collision::hits_paddle(
        state.ball.pos,
        paddle.x,
        paddle.y - PADDLE_HALF_HEIGHT,
        paddle.y + PADDLE_HALF_HEIGHT,
    ) {
        state.ball.vel.y = -state.ball.vel.y.abs();
        state.ball.vel.x += collision::hit_offset(state.ball.pos.x, paddle.x) * tuning.paddle_kick;
        state.ball.pos.y = paddle.y - PADDLE_HALF_HEIGHT;
    }

    // Opponent paddle: same rule over its fixed band, reflecting downward.
    if collision::hits_paddle(
        state.ball.pos,
        state.opponent.x,
        OPPONENT_BAND_TOP,
        OPPONENT_BAND_BOTTOM,
    ) {
        state.ball.vel.y = state.ball.vel.y.abs();
        state.ball.vel.x +=
            collision::hit_offset(state.ball.pos.x, state.opponent.x) * tuning.paddle_kick;
        state.ball.pos.y = OPPONENT_BAND_BOTTOM;
    }

    if state.ball.pos.y < GOAL_TOP {
        state.player_score += 1;
        state.currency += tuning.currency_per_point;
        let serve_left = rng.random_bool(0.5);
        state.reset_ball(true, serve_left);
        events.player_scored = true;
    } else if state.ball.pos.y > GOAL_BOTTOM {
        state.opponent_score += 1;
        events.opponent_scored = true;
        if state.lives > 0 {
            state.lives -= 1;
            let serve_left = rng.random_bool(0.5);
            state.reset_ball(false, serve_left);
        } else {
            // Out of lives: the ball freezes where it went out and the
            // controller tears the scheduler down.
            state.phase = GamePhase::GameOver;
            events.game_over = true;
        }
    }

    // Level progression runs only on the step a point landed, using the
    // post-scoring totals, so a total sitting on a multiple of five can
    // never re-trigger it.
    if events.player_scored || events.opponent_scored {
        let total = state.combined_score();
        if total > 0 && total.is_multiple_of(tuning.points_per_level) {
            state.level = total / tuning.points_per_level + 1;
            state.ball_speed =
                (state.ball_speed + tuning.ball_speed_increment).min(tuning.ball_speed_max);
            events.level_up = true;
        }
    }

    events
}
