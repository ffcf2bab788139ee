//! Player commands sent from the front end to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. A command
//! that does not apply in the current mode is ignored.

use serde::{Deserialize, Serialize};

use crate::enums::GameMode;

/// Everything needed to start a dive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchOptions {
    pub vessel_id: String,
    pub ocean_id: String,
    pub mode: GameMode,
    /// Identifiers the player has already catalogued.
    #[serde(default)]
    pub catalogued: Vec<String>,
}

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Front end ---
    /// Show the next intro comic panel (finishes the intro after the last).
    AdvanceIntro,
    /// Skip the rest of the intro.
    SkipIntro,
    /// Start a dive from the menu.
    Launch(LaunchOptions),
    /// Go to the home base.
    GoHome,
    /// Sleep at the home base, restoring the vessel and advancing the day.
    Sleep,
    /// Leave the home base for the menu.
    ReturnToMenu,

    // --- Run control ---
    Pause,
    Resume,
    /// Restart the current run from the surface.
    Reset,
    /// Abandon the run and return to the menu.
    Exit,

    // --- Exploration ---
    /// Inspect whatever is under a screen point.
    InspectAt { x: f32, y: f32 },
    /// Inspect a specific entity.
    Inspect { entity_id: String },
    /// Deliver descriptive text for an inspected entity.
    ApplyFact { entity_id: String, text: String },
    /// Dismiss the fact card.
    CloseFact,
    /// Switch the vessel's lamp on or off.
    ToggleLight,

    // --- Combat ---
    /// Fire at the locked target.
    Fire,
}
