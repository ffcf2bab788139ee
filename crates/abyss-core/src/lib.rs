//! Core types and definitions for the ABYSS dive simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! the static world catalog, components, commands, events, snapshots,
//! and tuning constants. It has no dependency on any runtime framework.

pub mod catalog;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
