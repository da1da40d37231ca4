//! Patrol motion for Broadside's non-player ships.
//!
//! Closed waypoint loops computed from the playfield and a driver that walks
//! them at constant speed. No ECS or combat dependency.

pub mod driver;
pub mod route;

pub use broadside_core as core;
pub use driver::{PatrolDriver, PatrolStep};
pub use route::PatrolPath;
