//! Headless demo driver
//!
//! Autoplays the game: the pointer input chases the ball the way a player's
//! mouse would, the scheduler runs at a frame-like cadence, and progress is
//! logged. Usage:
//!
//! ```text
//! ping-pong-go [seed] [tuning.json]
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use ping_pong_go::consts::PLAYER_START_Y;
use ping_pong_go::sim::GamePhase;
use ping_pong_go::{GameLoop, LogAudio, Tuning};

/// Frame cadence for the demo driver (~60 fps)
const FRAME_DT: f32 = 1.0 / 60.0;
/// Simulated seconds before a run that never ends is cut off
const MAX_SECONDS: f32 = 180.0;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    let tuning = match args.next() {
        Some(path) => Tuning::load_or_default(&path),
        None => Tuning::default(),
    };

    log::info!("autoplay with seed {seed}");
    let mut game = GameLoop::new(seed, tuning, LogAudio);
    game.start();

    let mut elapsed = 0.0f32;
    while game.state().phase == GamePhase::Running && elapsed < MAX_SECONDS {
        // The autopilot stands in for the player's pointer: chase the ball's
        // x at the paddle's rest height. The easing lag makes it miss often
        // enough for runs to end.
        let ball_x = game.state().ball.pos.x;
        game.set_player_paddle_target(ball_x, PLAYER_START_Y);
        game.advance(FRAME_DT);
        elapsed += FRAME_DT;
    }

    let state = game.state();
    println!(
        "final: {} - {} | level {} | currency {} | lives {} | {}",
        state.player_score,
        state.opponent_score,
        state.level,
        state.currency,
        state.lives,
        if state.phase == GamePhase::GameOver {
            "game over"
        } else {
            "cut off"
        }
    );
}
