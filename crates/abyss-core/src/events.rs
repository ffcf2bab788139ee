//! Events emitted by the simulation.
//!
//! The economy and persistence layers consume these; the simulation never
//! touches coins or storage itself.

use serde::{Deserialize, Serialize};

use crate::enums::AppMode;

/// Something that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The application switched modes.
    ModeChanged { from: AppMode, to: AppMode },
    /// An entity was catalogued for the first time.
    Discovered { entity_id: String },
    /// A treasure was recovered.
    TreasureCollected { entity_id: String, reward: u64 },
    /// An entity was inspected (drives mission progress).
    Inspected { entity_id: String },
    /// Descriptive text should be looked up for the selection.
    FactRequested {
        entity_id: String,
        name: String,
        depth: f64,
    },
    /// A projectile left the launcher.
    Fired { target_id: String, ammo_left: u32 },
    /// A projectile struck its target.
    Kill { entity_id: String, hostile: bool },
    /// The hull took proximity damage.
    HullDamaged { amount: f64, health: f64 },
    /// The bottom was reached.
    Won { reward: u64 },
    /// The hull was destroyed.
    Defeated,
    /// A night passed at the home base.
    DayAdvanced,
}
