//! Hit-scan gun model: range, fire-rate gating, accuracy and damage.

use serde::Serialize;

use crate::constants::MS_PER_MINUTE;
use crate::error::{require_positive, ConfigError};

/// A single gun mount. Owned by exactly one ship record.
///
/// Only [`Gun::new`] builds one, so the parameters are always valid;
/// [`crate::config::GunConfig`] is the deserialized form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gun {
    /// Maximum engagement distance.
    range: f64,
    /// Shots per minute.
    fire_rate_per_min: f64,
    /// Probability that a shot hits (0.0 - 1.0).
    accuracy: f64,
    /// Life removed by a hit.
    damage: u32,
    /// Simulation time of the last shot (ms). `None` until the first shot.
    last_fire_ms: Option<f64>,
}

impl Gun {
    /// Build a gun, rejecting non-positive range, fire rate or damage and
    /// accuracy outside [0, 1].
    pub fn new(
        range: f64,
        fire_rate_per_min: f64,
        accuracy: f64,
        damage: u32,
    ) -> Result<Self, ConfigError> {
        require_positive("gun.range", range)?;
        require_positive("gun.fire_rate_per_min", fire_rate_per_min)?;
        if !(0.0..=1.0).contains(&accuracy) {
            return Err(ConfigError::invalid(
                "gun.accuracy",
                format!("must be within [0, 1], got {accuracy}"),
            ));
        }
        if damage == 0 {
            return Err(ConfigError::invalid("gun.damage", "must be positive"));
        }
        Ok(Self {
            range,
            fire_rate_per_min,
            accuracy,
            damage,
            last_fire_ms: None,
        })
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    pub fn fire_rate_per_min(&self) -> f64 {
        self.fire_rate_per_min
    }

    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    /// Minimum time between two shots (ms).
    pub fn fire_interval_ms(&self) -> f64 {
        MS_PER_MINUTE / self.fire_rate_per_min
    }

    /// Whether a full interval has passed since the last shot.
    /// Unused ready time is not banked.
    pub fn can_fire(&self, now_ms: f64) -> bool {
        match self.last_fire_ms {
            None => true,
            Some(last) => now_ms - last >= self.fire_interval_ms(),
        }
    }

    /// Record a shot at `now_ms`. Callers check [`Gun::can_fire`] first.
    pub fn fire(&mut self, now_ms: f64) {
        self.last_fire_ms = Some(now_ms);
    }

    pub fn last_fire_ms(&self) -> Option<f64> {
        self.last_fire_ms
    }

    pub fn in_range(&self, distance: f64) -> bool {
        distance <= self.range
    }
}
