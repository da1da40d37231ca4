//! Scenario configuration: playfield geometry, fleet loadouts and tuning.
//!
//! Loaded from `broadside_config.json` with support for an environment
//! variable override of the file path.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{require_positive, ConfigError};
use crate::types::Position;
use crate::weapon::Gun;

pub const BUILTIN_BROADSIDE_CONFIG: &str = include_str!("data/broadside_config.json");

/// Environment variable naming a config file to load instead of the builtin one.
pub const CONFIG_PATH_ENV: &str = "BROADSIDE_CONFIG";

/// Root configuration for a skirmish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BroadsideConfig {
    pub playfield: PlayfieldConfig,
    pub movement: MovementConfig,
    pub patrol: PatrolConfig,
    pub player: ShipLoadout,
    pub hostile: ShipLoadout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfieldConfig {
    /// Full width including the sidebar.
    pub width: f64,
    pub height: f64,
    /// Width of the stats sidebar on the right edge.
    pub sidebar_width: f64,
    /// Where the player's ship starts.
    pub player_spawn: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Speed of ordered ships (pixels/s).
    pub order_speed: f64,
    /// A moving ship halts once strictly closer than this to its destination.
    pub arrival_epsilon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatrolConfig {
    /// Patrol speed (pixels/s).
    pub speed: f64,
    /// Distance kept from the playable area edges.
    pub inset: f64,
}

/// Name, hull and guns of one combatant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipLoadout {
    pub name: String,
    pub max_life: u32,
    pub guns: Vec<GunConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GunConfig {
    pub range: f64,
    pub fire_rate_per_min: f64,
    pub accuracy: f64,
    pub damage: u32,
}

impl Default for BroadsideConfig {
    fn default() -> Self {
        Self {
            playfield: PlayfieldConfig::default(),
            movement: MovementConfig::default(),
            patrol: PatrolConfig::default(),
            player: ShipLoadout::default_player(),
            hostile: ShipLoadout::default_hostile(),
        }
    }
}

impl Default for PlayfieldConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            sidebar_width: SIDEBAR_WIDTH,
            player_spawn: Position::new(200.0, 200.0),
        }
    }
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            order_speed: ORDER_SPEED,
            arrival_epsilon: ARRIVAL_EPSILON,
        }
    }
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self {
            speed: PATROL_SPEED,
            inset: PATROL_INSET,
        }
    }
}

impl ShipLoadout {
    pub fn default_player() -> Self {
        Self {
            name: "USS Monitor".to_string(),
            max_life: 3000,
            guns: vec![
                GunConfig {
                    range: 300.0,
                    fire_rate_per_min: 6.0,
                    accuracy: 0.6,
                    damage: 250,
                },
                GunConfig {
                    range: 150.0,
                    fire_rate_per_min: 30.0,
                    accuracy: 0.8,
                    damage: 40,
                },
            ],
        }
    }

    pub fn default_hostile() -> Self {
        Self {
            name: "USS Constellation".to_string(),
            max_life: 4000,
            guns: vec![GunConfig {
                range: 250.0,
                fire_rate_per_min: 10.0,
                accuracy: 0.5,
                damage: 200,
            }],
        }
    }

    /// Build fresh guns (never fired) for this loadout.
    pub fn build_guns(&self) -> Result<Vec<Gun>, ConfigError> {
        self.guns.iter().map(GunConfig::build).collect()
    }
}

impl GunConfig {
    pub fn build(&self) -> Result<Gun, ConfigError> {
        Gun::new(self.range, self.fire_rate_per_min, self.accuracy, self.damage)
    }
}

impl PlayfieldConfig {
    /// Width of the area ships move in (everything left of the sidebar).
    pub fn playable_width(&self) -> f64 {
        self.width - self.sidebar_width
    }
}

impl BroadsideConfig {
    /// Parse the configuration embedded in the binary.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json_str(BUILTIN_BROADSIDE_CONFIG)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: PathBuf::from(path),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load from the file named by `BROADSIDE_CONFIG`, or the builtin config
    /// when the variable is unset.
    pub fn from_env_or_default() -> Result<Self, ConfigError> {
        match env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_path(PathBuf::from(path)),
            None => Self::builtin(),
        }
    }

    /// Check every value; loadouts must also produce valid guns.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let field = &self.playfield;
        require_positive("playfield.width", field.width)?;
        require_positive("playfield.height", field.height)?;
        if !(field.sidebar_width >= 0.0 && field.sidebar_width < field.width) {
            return Err(ConfigError::invalid(
                "playfield.sidebar_width",
                format!(
                    "must be within [0, {}), got {}",
                    field.width, field.sidebar_width
                ),
            ));
        }
        let spawn = field.player_spawn;
        if !(0.0..=field.playable_width()).contains(&spawn.x)
            || !(0.0..=field.height).contains(&spawn.y)
        {
            return Err(ConfigError::invalid(
                "playfield.player_spawn",
                format!("({}, {}) lies outside the playable area", spawn.x, spawn.y),
            ));
        }

        require_positive("movement.order_speed", self.movement.order_speed)?;
        require_positive("movement.arrival_epsilon", self.movement.arrival_epsilon)?;
        // One tick's step must be shorter than the arrival disc's diameter,
        // otherwise a mover can jump over it and never arrive.
        let step = self.movement.order_speed * DT;
        if step >= 2.0 * self.movement.arrival_epsilon {
            return Err(ConfigError::invalid(
                "movement.order_speed",
                format!(
                    "moves {step} per tick, must stay below twice the arrival epsilon ({})",
                    self.movement.arrival_epsilon
                ),
            ));
        }
        require_positive("patrol.speed", self.patrol.speed)?;

        let inset = self.patrol.inset;
        if !(inset >= 0.0 && inset * 2.0 < field.playable_width() && inset * 2.0 < field.height) {
            return Err(ConfigError::invalid(
                "patrol.inset",
                format!("{inset} leaves no room for a patrol loop"),
            ));
        }

        validate_loadout("player", &self.player)?;
        validate_loadout("hostile", &self.hostile)
    }
}

fn validate_loadout(side: &'static str, loadout: &ShipLoadout) -> Result<(), ConfigError> {
    if loadout.name.trim().is_empty() {
        return Err(ConfigError::invalid(side, "ship name must not be empty"));
    }
    if loadout.max_life == 0 {
        return Err(ConfigError::invalid(side, "max_life must be positive"));
    }
    loadout.build_guns().map(|_| ())
}
