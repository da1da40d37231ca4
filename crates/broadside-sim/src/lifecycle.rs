//! Damage application and the alive → dead transition.
//!
//! All damage goes through [`apply_damage`] so the life bar of a selected
//! ship is refreshed on every hit and a sinking ship is released by the
//! selection machine in the same step.

use hecs::World;
use tracing::info;

use broadside_core::error::SimError;
use broadside_core::events::{CombatEvent, RenderCommand};
use broadside_core::types::ShipId;

use crate::body;
use crate::registry::{DamageOutcome, ShipRegistry};
use crate::selection::{stats_panel, SelectionState};

/// Mutable state touched by a damage application.
pub struct DamageContext<'a> {
    pub world: &'a mut World,
    pub registry: &'a mut ShipRegistry,
    pub selection: &'a mut SelectionState,
    pub render: &'a mut Vec<RenderCommand>,
    pub events: &'a mut Vec<CombatEvent>,
}

pub fn apply_damage(
    ctx: &mut DamageContext<'_>,
    target: ShipId,
    amount: u32,
) -> Result<DamageOutcome, SimError> {
    let outcome = ctx.registry.apply_damage(target, amount)?;
    if outcome == DamageOutcome::AlreadyDead {
        return Ok(outcome);
    }

    if ctx.selection.selected() == Some(target) {
        ctx.render.push(stats_panel(ctx.registry, target, true));
    }

    if outcome == DamageOutcome::Destroyed {
        on_destroyed(ctx, target)?;
    }
    Ok(outcome)
}

/// Stop the wreck and release it from selection and orders. Hostile bodies
/// are despawned by the cleanup system at the end of the tick.
fn on_destroyed(ctx: &mut DamageContext<'_>, ship: ShipId) -> Result<(), SimError> {
    let record = ctx.registry.get(ship)?;
    let side = record.side;
    info!(%ship, name = %record.name, ?side, "ship destroyed");

    if let Some(entity) = ctx.registry.body(ship) {
        body::stop(ctx.world, entity);
    }
    ctx.selection
        .forget(ship, ctx.world, ctx.registry, ctx.render);
    ctx.events.push(CombatEvent::ShipDestroyed { ship, side });
    Ok(())
}
