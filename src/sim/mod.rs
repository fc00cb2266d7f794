//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed cadences only (no wall-clock reads)
//! - Seeded RNG only, threaded in by the caller
//! - No rendering or platform dependencies

pub mod collision;
pub mod easing;
pub mod state;
pub mod tick;

pub use state::{Ball, GamePhase, GameState, OpponentPaddle, PlayerPaddle};
pub use tick::{StepEvents, step};
