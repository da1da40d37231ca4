//! Game state snapshot: the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{CombatEvent, RenderCommand};
use crate::types::{Position, ShipId, SimTime};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub outcome: Option<MissionOutcome>,
    pub ships: Vec<ShipView>,
    pub selection: SelectionView,
    pub render_commands: Vec<RenderCommand>,
    pub combat_events: Vec<CombatEvent>,
    pub score: ScoreView,
}

/// A ship as shown on the playfield and in the sidebar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipView {
    pub id: ShipId,
    pub name: String,
    pub side: Side,
    /// `None` once a sunk hostile has been removed from the world.
    pub position: Option<Position>,
    pub speed: f64,
    /// Heading in radians (0 = +x).
    pub heading: f64,
    pub current_life: u32,
    pub max_life: u32,
    pub is_dead: bool,
    /// Longest gun range, for the range indicator.
    pub max_range: f64,
    /// Waypoint currently being approached, for patrolling ships.
    pub patrol_cursor: Option<usize>,
}

/// Selection and move-order state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionView {
    pub phase: SelectionPhase,
    pub selected: Option<ShipId>,
    pub moving: Option<ShipId>,
    pub destination: Option<Position>,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub player_shots: u32,
    pub player_hits: u32,
    pub player_damage_dealt: u32,
    pub hostile_shots: u32,
    pub hostile_hits: u32,
    pub hostile_damage_dealt: u32,
    pub mission_time_secs: f64,
}
