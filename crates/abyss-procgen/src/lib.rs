//! Procedural world population for ABYSS.
//!
//! Decides which catalog entities are in view at a given depth, where each
//! one sits in the water column, and which missions are offered each day.
//! Everything here is a pure function of its inputs.

pub mod missions;
pub mod placement;
pub mod visibility;

pub use abyss_core as core;
