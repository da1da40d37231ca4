//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position on the playfield (pixels, screen orientation).
/// x grows to the right, y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity (pixels per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Opaque handle for a combatant, issued by the ship registry.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ShipId(pub u32);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn range_to(&self, other: &Position) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Velocity of magnitude `speed` pointing from `from` to `to`.
    /// Zero when the two points coincide.
    pub fn towards(from: &Position, to: &Position, speed: f64) -> Self {
        let dir = (to.as_dvec2() - from.as_dvec2()).normalize_or_zero();
        Self::from(dir * speed)
    }

    /// Speed magnitude.
    pub fn speed(&self) -> f64 {
        self.as_dvec2().length()
    }

    /// Heading in radians (0 = +x, clockwise in screen space).
    pub fn heading(&self) -> f64 {
        self.y.atan2(self.x).rem_euclid(std::f64::consts::TAU)
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Velocity {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl std::fmt::Display for ShipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ship#{}", self.0)
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Elapsed simulation time in milliseconds, the clock guns are timed against.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_secs * 1000.0
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        // Derived from the tick count so whole seconds stay exact.
        self.elapsed_secs = self.tick as f64 / crate::constants::TICK_RATE as f64;
    }
}
