//! Events emitted by the simulation for the render layer and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::Side;
use crate::types::{Position, ShipId};

/// Render hook instructions, applied by the frontend in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RenderCommand {
    /// Tint a ship sprite (`None` restores the original colour).
    SetTint { ship: ShipId, tint: Option<u32> },
    /// Update the sidebar life bar.
    SetStatsPanel {
        name: String,
        current_life: u32,
        max_life: u32,
        visible: bool,
    },
    /// Draw the weapon range indicator.
    DrawRangeCircle { center: Position, radius: f64 },
    ClearRangeCircle,
    /// Remove a sunk ship from the scene.
    RemoveShip { ship: ShipId },
}

/// Combat feedback for sound and log panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    /// A gun fired; `hit` tells whether damage was applied.
    ShotFired {
        shooter: ShipId,
        target: ShipId,
        gun_index: usize,
        hit: bool,
        damage: u32,
    },
    /// A ship's life reached zero.
    ShipDestroyed { ship: ShipId, side: Side },
}
