//! Simulation engine for ABYSS.
//!
//! Owns the hecs ECS world, runs systems once per frame,
//! and produces GameStateSnapshots for the front end.

pub mod engine;
pub mod hit_index;
pub mod scheduler;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use abyss_core as core;
pub use engine::{SimConfig, SimulationEngine};
