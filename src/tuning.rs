//! Data-driven game balance
//!
//! Balance knobs, decoupled from the field geometry in [`crate::consts`].
//! Defaults reproduce the shipped game exactly; a JSON file can override
//! them for playtesting.

use serde::{Deserialize, Serialize};

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Ball speed at game start and used for every serve
    pub ball_speed_initial: f32,
    /// Added to the ball speed at each level-up
    pub ball_speed_increment: f32,
    /// Hard cap on the ball speed
    pub ball_speed_max: f32,
    /// Combined points needed per level
    pub points_per_level: u32,
    /// Currency awarded per player point
    pub currency_per_point: u32,
    /// Conceded points survivable before game over
    pub starting_lives: u8,
    /// Fraction of the remaining distance the player paddle covers per
    /// easing step
    pub paddle_ease: f32,
    /// Fraction the opponent paddle covers toward its own target per step
    pub opponent_ease: f32,
    /// Fraction the opponent's target covers toward the ball per step.
    /// Kept below `opponent_ease` so the tracking always lags the ball.
    pub opponent_track_ease: f32,
    /// Fraction the displayed ball covers toward the true ball per step
    pub display_ease: f32,
    /// Horizontal kick per unit of hit offset from the paddle center
    pub paddle_kick: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ball_speed_initial: 0.8,
            ball_speed_increment: 0.1,
            ball_speed_max: 1.5,
            points_per_level: 5,
            currency_per_point: 5,
            starting_lives: 2,
            paddle_ease: 0.2,
            opponent_ease: 0.2,
            opponent_track_ease: 0.1,
            display_ease: 0.5,
            paddle_kick: 0.6,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults when the file
    /// is missing or malformed.
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {path}");
                    tuning
                }
                Err(e) => {
                    log::warn!("ignoring malformed tuning file {path}: {e}");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
