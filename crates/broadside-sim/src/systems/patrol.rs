//! Patrol system: moves every body carrying a `PatrolDriver` along its loop.

use hecs::World;

use broadside_core::types::{Position, Velocity};
use broadside_patrol::PatrolDriver;

pub fn run(world: &mut World, dt: f64) {
    for (_entity, (pos, vel, driver)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut PatrolDriver)>()
    {
        let step = driver.advance(dt);
        *pos = step.position;
        *vel = step.velocity;
    }
}
