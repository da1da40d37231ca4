//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::Side;
use crate::types::ShipId;

/// Links a world body back to its ship registry entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShipTag {
    pub id: ShipId,
    pub side: Side,
}

/// Axis-aligned click region centred on the entity's position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClickRegion {
    pub half_width: f64,
    pub half_height: f64,
}

/// Marks a body whose position is owned by a patrol driver rather than
/// by velocity integration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Patrolling;

// Position and Velocity (types.rs) are used directly as components.
