//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for
//! read-only) plus whatever engine state they touch. They do not own state.

pub mod cleanup;
pub mod combat;
pub mod movement;
pub mod orders;
pub mod patrol;
pub mod snapshot;
