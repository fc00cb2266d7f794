//! Interpolation sub-steps
//!
//! The 16 ms cadence work: player paddle easing, opponent tracking, and the
//! cosmetic ball-display smoothing. Each is a first-order filter taking a
//! fixed fraction of the remaining distance per step. The controller only
//! dispatches these while the game runs.

use super::state::GameState;
use crate::tuning::Tuning;

/// Ease the player paddle toward its pointer target.
pub fn ease_player_paddle(state: &mut GameState, tuning: &Tuning) {
    let paddle = &mut state.player;
    paddle.pos += (paddle.target - paddle.pos) * tuning.paddle_ease;
}

/// Two-stage opponent lag: the position chases the paddle's own target, then
/// the target chases the ball. The paddle trails a trailing target and never
/// quite catches up, which keeps the AI beatable.
pub fn ease_opponent_paddle(state: &mut GameState, tuning: &Tuning) {
    let ball_x = state.ball.pos.x;
    let opponent = &mut state.opponent;
    // Position eases toward the pre-update target; the order matters for
    // the lag feel.
    opponent.x += (opponent.target_x - opponent.x) * tuning.opponent_ease;
    opponent.target_x += (ball_x - opponent.target_x) * tuning.opponent_track_ease;
}

/// Ease the rendered ball toward the true ball. Cosmetic only; collision
/// detection never reads the display position.
pub fn ease_ball_display(state: &mut GameState, tuning: &Tuning) {
    state.ball_display += (state.ball.pos - state.ball_display) * tuning.display_ease;
}
