//! Closed patrol routes and their phase parameterisation.
//!
//! A route is a polyline whose last waypoint connects back to the first.
//! Phase 0.0 is the first waypoint; phase grows with distance travelled
//! and wraps at 1.0.

use glam::DVec2;

use broadside_core::constants::WAYPOINT_EPSILON;
use broadside_core::error::ConfigError;
use broadside_core::types::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct PatrolPath {
    waypoints: Vec<DVec2>,
    /// Cumulative distance at the start of each segment.
    segment_starts: Vec<f64>,
    perimeter: f64,
}

/// Where a phase lands on the route.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RouteSample {
    pub position: DVec2,
    /// Unit direction of travel.
    pub direction: DVec2,
    /// Index of the waypoint being approached.
    pub cursor: usize,
}

impl PatrolPath {
    pub fn new(waypoints: Vec<Position>) -> Result<Self, ConfigError> {
        if waypoints.len() < 2 {
            return Err(ConfigError::invalid(
                "patrol.waypoints",
                format!("need at least 2 waypoints, got {}", waypoints.len()),
            ));
        }
        let waypoints: Vec<DVec2> = waypoints.iter().map(Position::as_dvec2).collect();

        let mut segment_starts = Vec::with_capacity(waypoints.len());
        let mut perimeter = 0.0;
        for (i, start) in waypoints.iter().enumerate() {
            segment_starts.push(perimeter);
            let end = waypoints[(i + 1) % waypoints.len()];
            perimeter += start.distance(end);
        }

        if perimeter <= WAYPOINT_EPSILON {
            return Err(ConfigError::invalid(
                "patrol.waypoints",
                "all waypoints coincide",
            ));
        }

        Ok(Self {
            waypoints,
            segment_starts,
            perimeter,
        })
    }

    /// The Z-shaped loop hostiles sail: inset from the playable rectangle,
    /// bottom-right → top-right → top-left → bottom-left → bottom-right, then
    /// back along the Z: bottom-left → top-left → top-right → (bottom-right).
    pub fn z_loop(playable_width: f64, height: f64, inset: f64) -> Result<Self, ConfigError> {
        let left = inset;
        let right = playable_width - inset;
        let top = inset;
        let bottom = height - inset;
        if right <= left || bottom <= top {
            return Err(ConfigError::invalid(
                "patrol.inset",
                format!("{inset} leaves no room inside {playable_width}x{height}"),
            ));
        }

        let bottom_right = Position::new(right, bottom);
        let top_right = Position::new(right, top);
        let top_left = Position::new(left, top);
        let bottom_left = Position::new(left, bottom);

        Self::new(vec![
            bottom_right,
            top_right,
            top_left,
            bottom_left,
            bottom_right,
            bottom_left,
            top_left,
            top_right,
        ])
    }

    pub fn waypoints(&self) -> impl Iterator<Item = Position> + '_ {
        self.waypoints.iter().map(|w| Position::from(*w))
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Total length of the closed loop.
    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }

    /// Point on the loop at `phase` (wrapped into [0, 1)).
    pub fn position_at_phase(&self, phase: f64) -> Position {
        Position::from(self.sample(phase).position)
    }

    /// Index of the waypoint being approached at `phase`.
    pub fn cursor_at_phase(&self, phase: f64) -> usize {
        self.sample(phase).cursor
    }

    pub(crate) fn sample(&self, phase: f64) -> RouteSample {
        let distance = phase.rem_euclid(1.0) * self.perimeter;
        let n = self.waypoints.len();

        // Last segment whose start is at or before `distance`, skipping
        // zero-length segments so the cursor never points at the waypoint
        // the ship is already sitting on.
        for i in (0..n).rev() {
            let start = self.waypoints[i];
            let end = self.waypoints[(i + 1) % n];
            let length = start.distance(end);
            if length <= WAYPOINT_EPSILON || self.segment_starts[i] > distance {
                continue;
            }
            let along = (distance - self.segment_starts[i]).min(length);
            let direction = (end - start) / length;
            return RouteSample {
                position: start + direction * along,
                direction,
                cursor: (i + 1) % n,
            };
        }

        // Unreachable for a valid path: segment 0 starts at distance 0.
        RouteSample {
            position: self.waypoints[0],
            direction: DVec2::ZERO,
            cursor: 1 % n,
        }
    }
}
