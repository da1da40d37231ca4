//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::MouseButton;
use crate::types::Position;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Pointer input ---
    /// A click anywhere on the playfield, sidebar included.
    Click {
        point: Position,
        #[serde(default)]
        button: MouseButton,
    },

    // --- Simulation control ---
    /// Set wall-clock pacing (1.0 = normal, 2.0 = double), clamped to [0, 4].
    /// Scales at or near 0 run at the normal pace; use `Pause` to freeze.
    SetTimeScale { scale: f64 },
    /// Spawn the fleets and start the engagement.
    StartMission,
    /// Tear the mission down and return to the main menu.
    ReturnToMenu,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}

impl PlayerCommand {
    /// Primary-button click at `(x, y)`.
    pub fn click(x: f64, y: f64) -> Self {
        Self::Click {
            point: Position::new(x, y),
            button: MouseButton::Primary,
        }
    }
}
