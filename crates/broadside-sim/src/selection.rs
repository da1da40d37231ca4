//! Selection and move-order state machine.
//!
//! At most one ship is selected and at most one ship is executing a move
//! order. Issuing an order ends the selection; the two are tracked
//! independently afterwards. Every visible change is pushed to the render
//! queue in the same call that makes it, so a frontend replaying the queue
//! never sees two ships tinted as selected.

use hecs::World;

use broadside_core::constants::SELECTED_TINT;
use broadside_core::enums::{SelectionPhase, Side};
use broadside_core::error::SimError;
use broadside_core::events::RenderCommand;
use broadside_core::types::{Position, ShipId};

use crate::body;
use crate::registry::ShipRegistry;

/// An outstanding order to sail to `destination`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOrder {
    pub ship: ShipId,
    pub destination: Position,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: Option<ShipId>,
    moving: Option<MoveOrder>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<ShipId> {
        self.selected
    }

    pub fn moving(&self) -> Option<MoveOrder> {
        self.moving
    }

    /// Selection takes precedence: a ship can be inspected while another
    /// one is still sailing.
    pub fn phase(&self) -> SelectionPhase {
        match (self.selected, self.moving) {
            (Some(_), _) => SelectionPhase::Selected,
            (None, Some(_)) => SelectionPhase::Moving,
            (None, None) => SelectionPhase::Idle,
        }
    }

    /// Drop all state without emitting render commands (mission teardown).
    pub fn reset(&mut self) {
        self.selected = None;
        self.moving = None;
    }

    /// Select `id` for inspection. Dead or unknown ships deselect instead.
    /// Selecting the ship that is under way halts it.
    pub fn select(
        &mut self,
        id: ShipId,
        world: &mut World,
        registry: &ShipRegistry,
        render: &mut Vec<RenderCommand>,
    ) {
        if !registry.is_alive(id) {
            self.deselect(registry, render);
            return;
        }
        if self.selected == Some(id) {
            return;
        }

        self.deselect(registry, render);
        if self.moving.is_some_and(|order| order.ship == id) {
            self.halt_mover(world, registry);
        }

        self.selected = Some(id);
        render.push(RenderCommand::SetTint {
            ship: id,
            tint: Some(SELECTED_TINT),
        });
        self.refresh_indicators(world, registry, render);
    }

    /// Clear the selection and its visuals. The move order, if any, stays.
    pub fn deselect(&mut self, registry: &ShipRegistry, render: &mut Vec<RenderCommand>) {
        let Some(old) = self.selected.take() else {
            return;
        };
        render.push(RenderCommand::SetTint {
            ship: old,
            tint: None,
        });
        render.push(stats_panel(registry, old, false));
        render.push(RenderCommand::ClearRangeCircle);
    }

    /// Order the selected ship to `destination`. Returns `Ok(None)` when
    /// nothing is selected and `InvalidState` when the selected ship may not
    /// be ordered (hostile or sunk).
    pub fn order_move(
        &mut self,
        destination: Position,
        speed: f64,
        world: &mut World,
        registry: &ShipRegistry,
        render: &mut Vec<RenderCommand>,
    ) -> Result<Option<MoveOrder>, SimError> {
        let Some(ship) = self.selected else {
            return Ok(None);
        };
        let record = registry.get(ship)?;
        if record.is_dead() {
            return Err(SimError::InvalidState {
                ship,
                reason: "ship is sunk",
            });
        }
        if record.side != Side::Player {
            return Err(SimError::InvalidState {
                ship,
                reason: "only player ships take move orders",
            });
        }
        let entity = registry.body(ship).ok_or(SimError::InvalidState {
            ship,
            reason: "ship has no body",
        })?;

        // Single mover: a different ship under way is stopped first.
        if self.moving.is_some_and(|order| order.ship != ship) {
            self.halt_mover(world, registry);
        }
        if !body::set_velocity_towards(world, entity, destination, speed) {
            return Err(SimError::InvalidState {
                ship,
                reason: "ship has no body",
            });
        }

        let order = MoveOrder { ship, destination };
        self.moving = Some(order);
        self.deselect(registry, render);
        Ok(Some(order))
    }

    /// Stop the moving ship and clear its order.
    pub fn halt_mover(&mut self, world: &mut World, registry: &ShipRegistry) -> Option<MoveOrder> {
        let order = self.moving.take()?;
        if let Some(entity) = registry.body(order.ship) {
            body::stop(world, entity);
        }
        Some(order)
    }

    /// Halt the mover once it is strictly closer than `epsilon` to its
    /// destination. Returns the completed order.
    pub fn check_arrival(
        &mut self,
        world: &mut World,
        registry: &ShipRegistry,
        epsilon: f64,
    ) -> Option<MoveOrder> {
        let order = self.moving?;
        let arrived = match registry
            .body(order.ship)
            .and_then(|entity| body::position_of(world, entity))
        {
            Some(pos) => pos.range_to(&order.destination) < epsilon,
            // Body gone: nothing left to steer.
            None => true,
        };
        if arrived {
            self.halt_mover(world, registry)
        } else {
            None
        }
    }

    /// The mover hit the edge of the playable area: treated as arrival.
    pub fn on_bounds_hit(
        &mut self,
        ship: ShipId,
        world: &mut World,
        registry: &ShipRegistry,
    ) -> Option<MoveOrder> {
        if self.moving.is_some_and(|order| order.ship == ship) {
            self.halt_mover(world, registry)
        } else {
            None
        }
    }

    /// A ship sank: it can be neither selected nor moving.
    pub fn forget(
        &mut self,
        id: ShipId,
        world: &mut World,
        registry: &ShipRegistry,
        render: &mut Vec<RenderCommand>,
    ) {
        if self.selected == Some(id) {
            self.deselect(registry, render);
        }
        if self.moving.is_some_and(|order| order.ship == id) {
            self.halt_mover(world, registry);
        }
    }

    /// Redraw the life bar and range circle of the selected ship.
    pub fn refresh_indicators(
        &self,
        world: &World,
        registry: &ShipRegistry,
        render: &mut Vec<RenderCommand>,
    ) {
        let Some(id) = self.selected else {
            return;
        };
        render.push(stats_panel(registry, id, true));
        let center = registry
            .body(id)
            .and_then(|entity| body::position_of(world, entity));
        if let (Some(center), Ok(record)) = (center, registry.get(id)) {
            render.push(RenderCommand::DrawRangeCircle {
                center,
                radius: record.max_range(),
            });
        }
    }
}

/// Life bar contents for `id`; blank if the ship is unknown.
pub fn stats_panel(registry: &ShipRegistry, id: ShipId, visible: bool) -> RenderCommand {
    match registry.get(id) {
        Ok(record) => RenderCommand::SetStatsPanel {
            name: record.name.clone(),
            current_life: record.current_life(),
            max_life: record.max_life(),
            visible,
        },
        Err(_) => RenderCommand::SetStatsPanel {
            name: String::new(),
            current_life: 0,
            max_life: 0,
            visible: false,
        },
    }
}
