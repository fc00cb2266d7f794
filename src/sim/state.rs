//! Game state and core simulation types
//!
//! Everything that must survive a snapshot lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GamePhase {
    /// Waiting on the start screen
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Game is paused
    Paused,
    /// Run ended
    GameOver,
}

/// The ball's true simulation state
///
/// Collision detection always reads this, never the smoothed display
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// The player's paddle, eased toward a pointer-driven target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerPaddle {
    pub pos: Vec2,
    pub target: Vec2,
}

impl PlayerPaddle {
    /// Aim the paddle. Only the target moves here; the position follows via
    /// easing. Out-of-range pointer coordinates are clamped to the playable
    /// area.
    pub fn set_target(&mut self, x: f32, y: f32) {
        self.target.x = x.clamp(PLAYER_MIN_X, PLAYER_MAX_X);
        self.target.y = y.clamp(PLAYER_MIN_Y, PLAYER_MAX_Y);
    }
}

/// The AI paddle. Fixed row, horizontal tracking only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpponentPaddle {
    pub x: f32,
    pub target_x: f32,
}

impl OpponentPaddle {
    /// Vertical position, constant for the whole game
    pub fn y(&self) -> f32 {
        OPPONENT_Y
    }
}

/// Complete game state (serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// True ball state
    pub ball: Ball,
    /// Smoothed ball position, rendering only
    pub ball_display: Vec2,
    /// Player paddle
    pub player: PlayerPaddle,
    /// Opponent paddle
    pub opponent: OpponentPaddle,
    pub player_score: u32,
    pub opponent_score: u32,
    /// Conceded points left before game over
    pub lives: u8,
    pub level: u32,
    pub currency: u32,
    /// Serve speed, raised at each level-up
    pub ball_speed: f32,
}

impl GameState {
    /// Fresh state sitting on the start screen
    pub fn new(tuning: &Tuning) -> Self {
        let center = Vec2::new(FIELD_CENTER, FIELD_CENTER);
        let player_rest = Vec2::new(FIELD_CENTER, PLAYER_START_Y);
        Self {
            phase: GamePhase::NotStarted,
            ball: Ball {
                pos: center,
                vel: Vec2::new(tuning.ball_speed_initial, -tuning.ball_speed_initial),
            },
            ball_display: center,
            player: PlayerPaddle {
                pos: player_rest,
                target: player_rest,
            },
            opponent: OpponentPaddle {
                x: FIELD_CENTER,
                target_x: FIELD_CENTER,
            },
            player_score: 0,
            opponent_score: 0,
            lives: tuning.starting_lives,
            level: 1,
            currency: 0,
            ball_speed: tuning.ball_speed_initial,
        }
    }

    /// Combined score driving level progression
    pub fn combined_score(&self) -> u32 {
        self.player_score + self.opponent_score
    }

    /// Respawn the ball at the field center after a point.
    ///
    /// Vertical direction is toward whoever just scored the point against;
    /// horizontal direction is the caller's coin flip. Both true and display
    /// positions snap back so the rendered ball doesn't glide across the
    /// field.
    pub fn reset_ball(&mut self, toward_player: bool, serve_left: bool) {
        let center = Vec2::new(FIELD_CENTER, FIELD_CENTER);
        let vx = if serve_left {
            -self.ball_speed
        } else {
            self.ball_speed
        };
        let vy = if toward_player {
            self.ball_speed
        } else {
            -self.ball_speed
        };
        self.ball = Ball {
            pos: center,
            vel: Vec2::new(vx, vy),
        };
        self.ball_display = center;
    }
}
