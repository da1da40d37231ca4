//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which side a ship fights for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Owned by the player; may receive move orders.
    Player,
    /// Enemy ship; may be selected for inspection only.
    Hostile,
}

impl Side {
    /// Whether ships on `self` engage ships on `other`.
    pub fn opposes(self, other: Side) -> bool {
        self != other
    }
}

/// Pointer button of a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

/// Selection / order state as seen by the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionPhase {
    /// Nothing selected and nothing moving.
    #[default]
    Idle,
    /// A living ship is selected.
    Selected,
    /// A ship is executing a move order and nothing is selected.
    Moving,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    MissionComplete,
}

/// How a mission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionOutcome {
    /// Every hostile ship sank.
    Victory,
    /// Every player ship sank.
    Defeat,
}
