//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player's ship and the patrolling hostile with their
//! component bundles and registry records.

use hecs::World;

use broadside_core::components::{ClickRegion, Patrolling, ShipTag};
use broadside_core::config::{BroadsideConfig, PatrolConfig, PlayfieldConfig, ShipLoadout};
use broadside_core::constants::SHIP_CLICK_SIZE;
use broadside_core::enums::Side;
use broadside_core::error::SimError;
use broadside_core::types::{Position, ShipId, Velocity};
use broadside_patrol::{PatrolDriver, PatrolPath};

use crate::registry::ShipRegistry;

/// Ids of the two combatants of a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fleet {
    pub player: ShipId,
    pub hostile: ShipId,
}

/// Spawn both fleets. The player is registered first, so it resolves its
/// engagements first each tick.
pub fn setup_mission(
    world: &mut World,
    registry: &mut ShipRegistry,
    config: &BroadsideConfig,
) -> Result<Fleet, SimError> {
    let player = spawn_player_ship(
        world,
        registry,
        &config.player,
        config.playfield.player_spawn,
    )?;
    let hostile = spawn_hostile_ship(
        world,
        registry,
        &config.hostile,
        &config.patrol,
        &config.playfield,
    )?;
    Ok(Fleet { player, hostile })
}

/// Spawn the player's ship at rest.
pub fn spawn_player_ship(
    world: &mut World,
    registry: &mut ShipRegistry,
    loadout: &ShipLoadout,
    spawn: Position,
) -> Result<ShipId, SimError> {
    let entity = world.spawn((spawn, Velocity::default(), click_region()));
    register_body(world, registry, entity, loadout, Side::Player)
}

/// Spawn a hostile at the start of its Z-shaped patrol loop.
pub fn spawn_hostile_ship(
    world: &mut World,
    registry: &mut ShipRegistry,
    loadout: &ShipLoadout,
    patrol: &PatrolConfig,
    playfield: &PlayfieldConfig,
) -> Result<ShipId, SimError> {
    let path = PatrolPath::z_loop(playfield.playable_width(), playfield.height, patrol.inset)?;
    let driver = PatrolDriver::new(path, patrol.speed);
    let entity = world.spawn((
        driver.position(),
        Velocity::default(),
        click_region(),
        Patrolling,
        driver,
    ));
    register_body(world, registry, entity, loadout, Side::Hostile)
}

fn click_region() -> ClickRegion {
    ClickRegion {
        half_width: SHIP_CLICK_SIZE / 2.0,
        half_height: SHIP_CLICK_SIZE / 2.0,
    }
}

/// Register `entity` and tag it with its id; the body is despawned again if
/// the loadout is rejected.
fn register_body(
    world: &mut World,
    registry: &mut ShipRegistry,
    entity: hecs::Entity,
    loadout: &ShipLoadout,
    side: Side,
) -> Result<ShipId, SimError> {
    let registered = loadout
        .build_guns()
        .map_err(SimError::from)
        .and_then(|guns| registry.register(entity, loadout.name.clone(), loadout.max_life, guns, side));
    let id = match registered {
        Ok(id) => id,
        Err(err) => {
            let _ = world.despawn(entity);
            return Err(err);
        }
    };
    world
        .insert_one(entity, ShipTag { id, side })
        .map_err(|_| SimError::NotFound(id))?;
    Ok(id)
}
