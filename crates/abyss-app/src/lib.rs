//! ABYSS headless driver.
//!
//! Wires the simulation, campaign and fact crates together: loads config
//! and saved progress, runs dives either frame-by-frame or on a real-time
//! game loop thread, and folds the resulting events back into the save.

pub mod config;
pub mod dive;
pub mod game_loop;
pub mod state;

pub use abyss_core as core;
