//! BROADSIDE headless runner.
//!
//! Hosts the simulation on its own thread and exposes a small control
//! surface (start, command, poll, stop) for a frontend to drive.

pub mod control;
pub mod game_loop;
pub mod state;

pub use broadside_core as core;
