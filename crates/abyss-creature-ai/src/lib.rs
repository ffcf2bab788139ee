//! Creature behavior for ABYSS.
//!
//! Per-frame motion and lifecycle for entities in the render set: idle
//! bobbing, hostile drift toward the player axis in combat, and the dying
//! spin-and-shrink.

pub mod fsm;
pub mod profiles;

pub use abyss_core as core;
