//! Ping Pong Go - casual ping-pong mini-game simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (game state, physics step, easing)
//! - `game`: The `GameLoop` controller and its cooperative scheduler
//! - `audio`: Injected play/pause side-channel
//! - `snapshot`: Versioned mid-game save/restore
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod game;
pub mod sim;
pub mod snapshot;
pub mod tuning;

pub use audio::{AudioController, LogAudio, NullAudio};
pub use game::GameLoop;
pub use tuning::Tuning;

/// Game configuration constants
///
/// All coordinates are percentages of the fixed play-field, 0 at the top/left
/// edge and 100 at the bottom/right edge. Values here are field geometry and
/// cadence invariants; balance knobs live in [`crate::tuning::Tuning`].
pub mod consts {
    /// Easing sub-step cadence in seconds (paddles and ball display)
    pub const EASE_DT: f32 = 0.016;
    /// Physics step cadence in seconds
    pub const PHYSICS_DT: f32 = 0.025;

    /// Fraction of its velocity the ball advances per physics step
    pub const BALL_STEP_SCALE: f32 = 0.5;

    /// Table side edges the ball reflects off
    pub const TABLE_LEFT: f32 = 10.0;
    pub const TABLE_RIGHT: f32 = 90.0;

    /// Goal lines. Above the top line the player scores, below the bottom
    /// line the opponent does.
    pub const GOAL_TOP: f32 = 5.0;
    pub const GOAL_BOTTOM: f32 = 95.0;

    /// Paddle hit-zone half extents
    pub const PADDLE_HALF_WIDTH: f32 = 8.0;
    pub const PADDLE_HALF_HEIGHT: f32 = 3.0;

    /// Clamp range for the player paddle's pointer target
    pub const PLAYER_MIN_X: f32 = 5.0;
    pub const PLAYER_MAX_X: f32 = 95.0;
    pub const PLAYER_MIN_Y: f32 = 70.0;
    pub const PLAYER_MAX_Y: f32 = 90.0;

    /// Opponent paddle row. The opponent never moves vertically, so its hit
    /// band is fixed rather than derived from a paddle position.
    pub const OPPONENT_Y: f32 = 15.0;
    pub const OPPONENT_BAND_TOP: f32 = 12.0;
    pub const OPPONENT_BAND_BOTTOM: f32 = 18.0;

    /// Field center, where the ball respawns after a point
    pub const FIELD_CENTER: f32 = 50.0;
    /// Player paddle rest height
    pub const PLAYER_START_Y: f32 = 85.0;
}
