//! Snapshot system: builds a complete GameStateSnapshot from engine state.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use broadside_core::enums::*;
use broadside_core::events::{CombatEvent, RenderCommand};
use broadside_core::state::*;
use broadside_core::types::SimTime;
use broadside_patrol::PatrolDriver;

use crate::body;
use crate::registry::ShipRegistry;
use crate::score::ScoreState;
use crate::selection::SelectionState;

/// Per-tick output gathered by the engine.
pub struct TickOutput {
    pub render_commands: Vec<RenderCommand>,
    pub combat_events: Vec<CombatEvent>,
}

#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    registry: &ShipRegistry,
    selection: &SelectionState,
    score: &ScoreState,
    time: &SimTime,
    phase: GamePhase,
    outcome: Option<MissionOutcome>,
    output: TickOutput,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        outcome,
        ships: build_ships(world, registry),
        selection: build_selection(selection),
        render_commands: output.render_commands,
        combat_events: output.combat_events,
        score: score.view(time.elapsed_secs),
    }
}

/// Ships in registry order, sunk hostiles included (without a position).
fn build_ships(world: &World, registry: &ShipRegistry) -> Vec<ShipView> {
    registry
        .iter()
        .map(|(id, record)| {
            let entity = registry.body(id);
            let position = entity.and_then(|e| body::position_of(world, e));
            let velocity = entity
                .and_then(|e| body::velocity_of(world, e))
                .unwrap_or_default();
            let patrol_cursor = entity.and_then(|e| {
                world
                    .get::<&PatrolDriver>(e)
                    .ok()
                    .map(|driver| driver.cursor())
            });
            ShipView {
                id,
                name: record.name.clone(),
                side: record.side,
                position,
                speed: velocity.speed(),
                heading: velocity.heading(),
                current_life: record.current_life(),
                max_life: record.max_life(),
                is_dead: record.is_dead(),
                max_range: record.max_range(),
                patrol_cursor,
            }
        })
        .collect()
}

fn build_selection(selection: &SelectionState) -> SelectionView {
    let moving = selection.moving();
    SelectionView {
        phase: selection.phase(),
        selected: selection.selected(),
        moving: moving.map(|order| order.ship),
        destination: moving.map(|order| order.destination),
    }
}
