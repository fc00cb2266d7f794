//! Collision checks for the flat table
//!
//! Axis-aligned band tests: the ball reflects off the table's side edges and
//! the two paddle hit zones. All checks run on true simulation coordinates.

use glam::Vec2;

use crate::consts::*;

/// Reflect the ball off the table's side edges, clamping it back inside.
/// Returns true when a reflection happened.
pub fn reflect_off_walls(pos: &mut Vec2, vel: &mut Vec2) -> bool {
    if pos.x <= TABLE_LEFT || pos.x >= TABLE_RIGHT {
        vel.x = -vel.x;
        pos.x = pos.x.clamp(TABLE_LEFT, TABLE_RIGHT);
        true
    } else {
        false
    }
}

/// Whether the ball sits inside a paddle's hit zone: a horizontal band
/// around the paddle row, `PADDLE_HALF_WIDTH` either side of its center.
pub fn hits_paddle(ball: Vec2, paddle_x: f32, band_top: f32, band_bottom: f32) -> bool {
    ball.y >= band_top
        && ball.y <= band_bottom
        && ball.x >= paddle_x - PADDLE_HALF_WIDTH
        && ball.x <= paddle_x + PADDLE_HALF_WIDTH
}

/// Horizontal offset of the contact point from the paddle center, normalized
/// to [-1, 1] by the paddle half width. Scales the sideways kick a hit
/// imparts.
pub fn hit_offset(ball_x: f32, paddle_x: f32) -> f32 {
    (ball_x - paddle_x) / PADDLE_HALF_WIDTH
}
