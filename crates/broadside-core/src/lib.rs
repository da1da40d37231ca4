//! Core types and definitions for the Broadside skirmish simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, components, commands, render hooks, snapshots, the gun model,
//! configuration and the error taxonomy. It has no dependency on any
//! rendering or windowing framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
pub mod weapon;
