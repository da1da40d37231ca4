//! Physical body primitives over the ECS world.
//!
//! The rest of the simulation only touches positions and velocities
//! through these helpers: read a position, steer toward a point, stop.

use hecs::{Entity, World};

use broadside_core::types::{Position, Velocity};

/// Current position of a body, if it still exists.
pub fn position_of(world: &World, entity: Entity) -> Option<Position> {
    world.get::<&Position>(entity).ok().map(|p| *p)
}

/// Current velocity of a body, if it still exists.
pub fn velocity_of(world: &World, entity: Entity) -> Option<Velocity> {
    world.get::<&Velocity>(entity).ok().map(|v| *v)
}

/// Point the body at `target` at constant `speed`. Returns false if the
/// body is gone.
pub fn set_velocity_towards(world: &mut World, entity: Entity, target: Position, speed: f64) -> bool {
    let Some(from) = position_of(world, entity) else {
        return false;
    };
    match world.get::<&mut Velocity>(entity) {
        Ok(mut vel) => {
            *vel = Velocity::towards(&from, &target, speed);
            true
        }
        Err(_) => false,
    }
}

/// Zero the body's velocity.
pub fn stop(world: &mut World, entity: Entity) {
    if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
        *vel = Velocity::default();
    }
}
