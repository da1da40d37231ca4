//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt,
//! keeping bodies inside the playable area. Patrolling bodies are skipped;
//! their driver owns their position.

use glam::DVec2;
use hecs::{Entity, World};

use broadside_core::components::Patrolling;
use broadside_core::constants::DT;
use broadside_core::types::{Position, Velocity};

/// Rectangle bodies are confined to.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            min: DVec2::ZERO,
            max: DVec2::new(width, height),
        }
    }
}

/// Integrate velocities. Bodies that would leave `bounds` are clamped to
/// the edge and stopped; their entities are returned.
pub fn run(world: &mut World, bounds: &Bounds) -> Vec<Entity> {
    let mut hits = Vec::new();
    for (entity, (pos, vel, patrolling)) in
        world.query_mut::<(&mut Position, &mut Velocity, Option<&Patrolling>)>()
    {
        if patrolling.is_some() || vel.is_zero() {
            continue;
        }
        let next = pos.as_dvec2() + vel.as_dvec2() * DT;
        let clamped = next.clamp(bounds.min, bounds.max);
        *pos = Position::from(clamped);
        if clamped != next {
            *vel = Velocity::default();
            hits.push(entity);
        }
    }
    hits
}
