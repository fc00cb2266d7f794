//! Background audio side-channel
//!
//! The simulation drives background playback through an injected capability.
//! Commands are one-way and best-effort: an implementation swallows its own
//! failures (player not ready, channel gone), and the simulation never
//! observes them.

/// Playback controller the game drives on phase transitions.
///
/// `play` fires on start, restart, and resume; `pause` on pause and game
/// over.
pub trait AudioController {
    /// Start or resume background playback.
    fn play(&mut self);
    /// Pause background playback.
    fn pause(&mut self);
}

/// Discards every command. For headless runs and tests that don't care
/// about audio.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioController for NullAudio {
    fn play(&mut self) {}
    fn pause(&mut self) {}
}

/// Logs commands instead of playing anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAudio;

impl AudioController for LogAudio {
    fn play(&mut self) {
        log::info!("audio: play");
    }

    fn pause(&mut self) {
        log::info!("audio: pause");
    }
}
