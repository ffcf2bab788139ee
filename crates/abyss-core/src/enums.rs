//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// What kind of thing a catalog entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityCategory {
    Creature,
    Plant,
    Landmark,
    /// Collected on inspection for a one-time reward.
    Treasure,
}

/// Dive mode chosen at launch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Observational: entities can be inspected, nothing fights back.
    #[default]
    Exploration,
    /// Hostiles close in and damage the hull; firing is enabled.
    Combat,
}

/// Top-level application mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppMode {
    /// Intro comic.
    #[default]
    Intro,
    /// Timed title fade.
    Splash,
    Menu,
    /// Home base (sleep to advance the day).
    Home,
    /// Active dive.
    Game,
    /// Hull destroyed.
    GameOver,
    /// Reached the bottom.
    GameWon,
}

impl AppMode {
    /// Terminal modes end a run and wait for the player to leave.
    pub fn is_terminal(self) -> bool {
        matches!(self, AppMode::GameOver | AppMode::GameWon)
    }
}

/// Lifecycle of a rendered entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeState {
    #[default]
    Alive,
    /// Hit and playing its removal animation.
    Dying,
    /// Gone from the render set.
    Removed,
}

/// Why a fire request was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireRejection {
    NotCombat,
    NoAmmo,
    HullDestroyed,
    Paused,
    Reloading,
    NoTarget,
}
