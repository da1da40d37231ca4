//! Ship registry: combat and UI state for every combatant.
//!
//! Stored in `SimulationEngine`, NOT as ECS components. Each entry points
//! at the hecs entity carrying the ship's body; a sunk hostile loses its
//! body but keeps its record until the mission is torn down.

use std::collections::BTreeMap;

use hecs::Entity;

use broadside_core::enums::Side;
use broadside_core::error::{ConfigError, SimError};
use broadside_core::types::ShipId;
use broadside_core::weapon::Gun;

/// Mutable combat state of one ship.
#[derive(Debug, Clone)]
pub struct ShipRecord {
    pub name: String,
    pub side: Side,
    max_life: u32,
    current_life: u32,
    is_dead: bool,
    /// Guns in firing order.
    pub guns: Vec<Gun>,
}

/// What a damage application did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Target was already dead; nothing changed.
    AlreadyDead,
    /// Target survived with `remaining` life.
    Damaged { remaining: u32 },
    /// Target's life reached zero with this hit.
    Destroyed,
}

impl ShipRecord {
    pub fn max_life(&self) -> u32 {
        self.max_life
    }

    pub fn current_life(&self) -> u32 {
        self.current_life
    }

    pub fn is_dead(&self) -> bool {
        self.is_dead
    }

    /// Longest gun range, 0.0 for an unarmed ship.
    pub fn max_range(&self) -> f64 {
        self.guns.iter().map(|g| g.range()).fold(0.0, f64::max)
    }
}

#[derive(Debug)]
struct ShipEntry {
    record: ShipRecord,
    body: Option<Entity>,
}

/// Registry of all combatants, iterated in id (registration) order.
#[derive(Debug, Default)]
pub struct ShipRegistry {
    ships: BTreeMap<ShipId, ShipEntry>,
    next_id: u32,
}

impl ShipRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a ship whose body is `entity`.
    pub fn register(
        &mut self,
        entity: Entity,
        name: impl Into<String>,
        max_life: u32,
        guns: Vec<Gun>,
        side: Side,
    ) -> Result<ShipId, SimError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigError::invalid("ship.name", "must not be empty").into());
        }
        if max_life == 0 {
            return Err(ConfigError::invalid("ship.max_life", "must be positive").into());
        }

        let id = ShipId(self.next_id);
        self.next_id += 1;
        self.ships.insert(
            id,
            ShipEntry {
                record: ShipRecord {
                    name,
                    side,
                    max_life,
                    current_life: max_life,
                    is_dead: false,
                    guns,
                },
                body: Some(entity),
            },
        );
        Ok(id)
    }

    pub fn get(&self, id: ShipId) -> Result<&ShipRecord, SimError> {
        self.ships
            .get(&id)
            .map(|entry| &entry.record)
            .ok_or(SimError::NotFound(id))
    }

    pub fn get_mut(&mut self, id: ShipId) -> Result<&mut ShipRecord, SimError> {
        self.ships
            .get_mut(&id)
            .map(|entry| &mut entry.record)
            .ok_or(SimError::NotFound(id))
    }

    /// The ship's body, `None` once it has been removed from the world.
    pub fn body(&self, id: ShipId) -> Option<Entity> {
        self.ships.get(&id).and_then(|entry| entry.body)
    }

    /// Forget the ship's body (after despawning it) and return it.
    pub fn detach_body(&mut self, id: ShipId) -> Option<Entity> {
        self.ships.get_mut(&id).and_then(|entry| entry.body.take())
    }

    /// Subtract `amount` life, clamping at zero. Dead ships are left alone.
    pub fn apply_damage(&mut self, id: ShipId, amount: u32) -> Result<DamageOutcome, SimError> {
        let record = self.get_mut(id)?;
        if record.is_dead {
            return Ok(DamageOutcome::AlreadyDead);
        }
        record.current_life = record.current_life.saturating_sub(amount);
        if record.current_life == 0 {
            record.is_dead = true;
            Ok(DamageOutcome::Destroyed)
        } else {
            Ok(DamageOutcome::Damaged {
                remaining: record.current_life,
            })
        }
    }

    /// Registered and not dead. Unknown ids are not alive.
    pub fn is_alive(&self, id: ShipId) -> bool {
        self.get(id).map(|r| !r.is_dead).unwrap_or(false)
    }

    /// Remove the ship entirely. Later lookups fail with `NotFound`.
    pub fn teardown(&mut self, id: ShipId) -> Result<ShipRecord, SimError> {
        self.ships
            .remove(&id)
            .map(|entry| entry.record)
            .ok_or(SimError::NotFound(id))
    }

    /// Tear down every ship and restart id allocation.
    pub fn clear(&mut self) {
        self.ships.clear();
        self.next_id = 0;
    }

    pub fn ids(&self) -> Vec<ShipId> {
        self.ships.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShipId, &ShipRecord)> {
        self.ships.iter().map(|(id, entry)| (*id, &entry.record))
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Number of living ships on `side`.
    pub fn living_on(&self, side: Side) -> usize {
        self.iter()
            .filter(|(_, record)| record.side == side && !record.is_dead)
            .count()
    }
}
