//! Simulation engine for BROADSIDE.
//!
//! Owns the hecs ECS world and the ship registry, runs systems at a fixed
//! tick rate, and produces GameStateSnapshots for the frontend.

pub mod body;
pub mod engine;
pub mod input;
pub mod lifecycle;
pub mod registry;
pub mod score;
pub mod selection;
pub mod systems;
pub mod world_setup;

pub use broadside_core as core;
pub use engine::{SimConfig, SimulationEngine};
