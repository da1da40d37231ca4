//! Combat resolver: pairwise engagement checks, gun fire and hit rolls.
//!
//! Every ordered (shooter, target) pair from opposing sides is evaluated in
//! registry order. Effects are applied immediately, so a ship sunk by an
//! earlier pair neither fires nor is fired upon later in the same tick.

use rand::Rng;
use tracing::{debug, warn};

use broadside_core::error::SimError;
use broadside_core::events::CombatEvent;
use broadside_core::types::ShipId;

use crate::body;
use crate::lifecycle::{self, DamageContext};
use crate::score::ScoreState;

/// Resolve all engagement pairs at simulation time `now_ms`.
pub fn run<R: Rng + ?Sized>(
    ctx: &mut DamageContext<'_>,
    rng: &mut R,
    score: &mut ScoreState,
    now_ms: f64,
) {
    let ids = ctx.registry.ids();
    for &shooter in &ids {
        for &target in &ids {
            if shooter == target {
                continue;
            }
            if let Err(err) = resolve_pair(ctx, rng, score, shooter, target, now_ms) {
                warn!(%shooter, %target, %err, "engagement pair skipped");
            }
        }
    }
}

/// Fire every ready, in-range gun of `shooter` at `target`.
pub fn resolve_pair<R: Rng + ?Sized>(
    ctx: &mut DamageContext<'_>,
    rng: &mut R,
    score: &mut ScoreState,
    shooter: ShipId,
    target: ShipId,
    now_ms: f64,
) -> Result<(), SimError> {
    let shooter_side = ctx.registry.get(shooter)?.side;
    let target_side = ctx.registry.get(target)?.side;
    if !shooter_side.opposes(target_side) {
        return Ok(());
    }
    if !ctx.registry.is_alive(shooter) || !ctx.registry.is_alive(target) {
        return Ok(());
    }

    let shooter_pos = ctx
        .registry
        .body(shooter)
        .and_then(|e| body::position_of(ctx.world, e))
        .ok_or(SimError::InvalidState {
            ship: shooter,
            reason: "living ship has no body",
        })?;
    let target_pos = ctx
        .registry
        .body(target)
        .and_then(|e| body::position_of(ctx.world, e))
        .ok_or(SimError::InvalidState {
            ship: target,
            reason: "living ship has no body",
        })?;
    let distance = shooter_pos.range_to(&target_pos);

    let gun_count = ctx.registry.get(shooter)?.guns.len();
    for gun_index in 0..gun_count {
        if !ctx.registry.is_alive(target) {
            break;
        }

        let (accuracy, damage) = {
            let gun = &mut ctx.registry.get_mut(shooter)?.guns[gun_index];
            if !gun.in_range(distance) || !gun.can_fire(now_ms) {
                continue;
            }
            gun.fire(now_ms);
            (gun.accuracy(), gun.damage())
        };

        let sample: f64 = rng.gen();
        let hit = sample < accuracy;
        debug!(%shooter, %target, gun_index, distance, hit, "gun fired");

        score.record_shot(shooter_side, hit, damage);
        ctx.events.push(CombatEvent::ShotFired {
            shooter,
            target,
            gun_index,
            hit,
            damage: if hit { damage } else { 0 },
        });

        if hit {
            lifecycle::apply_damage(ctx, target, damage)?;
        }
    }
    Ok(())
}
