//! Selection bookkeeping: completes move orders and redraws indicators.

use hecs::{Entity, World};
use tracing::debug;

use broadside_core::components::ShipTag;
use broadside_core::events::RenderCommand;

use crate::registry::ShipRegistry;
use crate::selection::SelectionState;

/// Halt the mover on arrival or on a world-bounds hit, then redraw the
/// selected ship's life bar and range circle.
pub fn run(
    world: &mut World,
    registry: &ShipRegistry,
    selection: &mut SelectionState,
    render: &mut Vec<RenderCommand>,
    bounds_hits: &[Entity],
    arrival_epsilon: f64,
) {
    for &entity in bounds_hits {
        let Ok(ship) = world.get::<&ShipTag>(entity).map(|tag| tag.id) else {
            continue;
        };
        if let Some(order) = selection.on_bounds_hit(ship, world, registry) {
            debug!(ship = %order.ship, "move order ended at world bounds");
        }
    }

    if let Some(order) = selection.check_arrival(world, registry, arrival_epsilon) {
        debug!(ship = %order.ship, x = order.destination.x, y = order.destination.y, "move order complete");
    }

    selection.refresh_indicators(world, registry, render);
}
