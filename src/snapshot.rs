//! Mid-game snapshots
//!
//! Versioned JSON envelope around [`GameState`]. Snapshots are caller-driven;
//! nothing persists across sessions on its own. Restoring into a
//! [`crate::GameLoop`] re-arms the scheduler from scratch and reproduces the
//! uninterrupted trajectory, up to the serve-direction coin flips drawn at
//! score resets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sim::state::GameState;

/// Envelope format version. Bump on breaking changes to `GameState`.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct Envelope {
    version: u32,
    state: GameState,
}

/// Snapshot decode failure
#[derive(Debug)]
pub enum SnapshotError {
    /// Envelope written by an incompatible version
    Version(u32),
    /// The JSON itself didn't parse
    Parse(serde_json::Error),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Version(v) => write!(f, "unsupported snapshot version {v}"),
            SnapshotError::Parse(e) => write!(f, "snapshot parse error: {e}"),
        }
    }
}

impl std::error::Error for SnapshotError {}

impl From<serde_json::Error> for SnapshotError {
    fn from(e: serde_json::Error) -> Self {
        SnapshotError::Parse(e)
    }
}

/// Encode a state into the versioned envelope.
pub fn encode(state: &GameState) -> serde_json::Result<String> {
    serde_json::to_string(&Envelope {
        version: SNAPSHOT_VERSION,
        state: state.clone(),
    })
}

/// Decode an envelope produced by [`encode`].
pub fn decode(json: &str) -> Result<GameState, SnapshotError> {
    let envelope: Envelope = serde_json::from_str(json)?;
    if envelope.version != SNAPSHOT_VERSION {
        return Err(SnapshotError::Version(envelope.version));
    }
    Ok(envelope.state)
}
