//! Cleanup system: removes the bodies of sunk hostile ships.
//!
//! Their registry records stay queryable until the mission is torn down.
//! A sunk player ship keeps its body as a wreck.

use hecs::World;
use tracing::warn;

use broadside_core::enums::Side;
use broadside_core::events::RenderCommand;

use crate::registry::ShipRegistry;

pub fn run(world: &mut World, registry: &mut ShipRegistry, render: &mut Vec<RenderCommand>) {
    let sunk: Vec<_> = registry
        .iter()
        .filter(|(id, record)| {
            record.is_dead() && record.side == Side::Hostile && registry.body(*id).is_some()
        })
        .map(|(id, _)| id)
        .collect();

    for ship in sunk {
        if let Some(entity) = registry.detach_body(ship) {
            if let Err(err) = world.despawn(entity) {
                warn!(%ship, %err, "sunk ship's body was already gone");
            }
            render.push(RenderCommand::RemoveShip { ship });
        }
    }
}
