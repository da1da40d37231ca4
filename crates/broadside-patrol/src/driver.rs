//! Patrol driver: advances a ship along its route by elapsed time.
//!
//! The driver only produces the next position, heading velocity and
//! waypoint cursor. Applying them to a body is the caller's job.

use broadside_core::types::{Position, Velocity};

use crate::route::PatrolPath;

/// Constant-speed walker over a closed [`PatrolPath`]. Attached to hostile
/// ships as an ECS component.
#[derive(Debug, Clone)]
pub struct PatrolDriver {
    path: PatrolPath,
    /// Normalised progress around the loop, in [0, 1).
    phase: f64,
    speed: f64,
}

/// Result of one driver step.
#[derive(Debug, Clone, Copy)]
pub struct PatrolStep {
    pub position: Position,
    /// Velocity along the current segment (for heading display).
    pub velocity: Velocity,
    /// Waypoint being approached after the step.
    pub cursor: usize,
    /// Whether the step passed waypoint 0 and started a new lap.
    pub wrapped: bool,
}

impl PatrolDriver {
    pub fn new(path: PatrolPath, speed: f64) -> Self {
        Self {
            path,
            phase: 0.0,
            speed,
        }
    }

    pub fn path(&self) -> &PatrolPath {
        &self.path
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Back to the first waypoint.
    pub fn restart(&mut self) {
        self.phase = 0.0;
    }

    pub fn position(&self) -> Position {
        self.path.position_at_phase(self.phase)
    }

    pub fn cursor(&self) -> usize {
        self.path.cursor_at_phase(self.phase)
    }

    /// Move `speed * dt` along the loop.
    pub fn advance(&mut self, dt: f64) -> PatrolStep {
        let raw = self.phase + self.speed * dt / self.path.perimeter();
        let wrapped = raw >= 1.0;
        self.phase = raw.rem_euclid(1.0);

        let sample = self.path.sample(self.phase);
        PatrolStep {
            position: Position::from(sample.position),
            velocity: Velocity::from(sample.direction * self.speed),
            cursor: sample.cursor,
            wrapped,
        }
    }
}
