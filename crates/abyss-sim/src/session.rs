//! Per-run session state.
//!
//! Stored on `SimulationEngine`, NOT as ECS entities. Everything here is
//! reset when a dive is launched or restarted.

use std::collections::HashSet;

use abyss_core::catalog::{Vessel, DEFAULT_OCEAN_ID, STARTER_VESSEL_ID};
use abyss_core::commands::LaunchOptions;
use abyss_core::constants::FIRE_COOLDOWN_SECS;
use abyss_core::enums::GameMode;
use abyss_core::types::ScreenPoint;

/// The fact card.
#[derive(Debug, Clone)]
pub struct Selection {
    pub entity_id: String,
    pub name: String,
    pub fact: Option<String>,
}

/// State of one dive.
#[derive(Debug, Clone)]
pub struct Session {
    pub vessel_id: String,
    pub ocean_id: String,
    pub game_mode: GameMode,

    // --- Hull & weapons ---
    pub health: f64,
    pub max_health: f64,
    pub ammo: u32,
    pub ammo_capacity: u32,
    /// Session time of the last accepted shot.
    pub last_fired_secs: Option<f64>,
    /// Target of the shot fired within the trigger window.
    pub firing_at: Option<String>,
    pub next_projectile_id: u32,

    // --- Depth ---
    pub target_depth: f64,
    pub current_depth: f64,
    /// Set once the bottom has been reached.
    pub won: bool,

    // --- Targeting ---
    pub reticle: ScreenPoint,
    pub locked_target: Option<String>,

    // --- Entities ---
    /// Ids hit this run. Never alive again until the next launch.
    pub killed: HashSet<String>,
    /// Killed ids still playing their removal animation.
    pub dying: Vec<String>,
    /// Ids the player has catalogued (carried across runs).
    pub catalogued: HashSet<String>,

    // --- Exploration ---
    pub selection: Option<Selection>,
    pub light_on: bool,

    /// Session time accumulated toward the next survival tick.
    pub survival_accumulator: f64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            vessel_id: STARTER_VESSEL_ID.to_string(),
            ocean_id: DEFAULT_OCEAN_ID.to_string(),
            game_mode: GameMode::default(),
            health: 0.0,
            max_health: 0.0,
            ammo: 0,
            ammo_capacity: 0,
            last_fired_secs: None,
            firing_at: None,
            next_projectile_id: 0,
            target_depth: 0.0,
            current_depth: 0.0,
            won: false,
            reticle: ScreenPoint::CENTER,
            locked_target: None,
            killed: HashSet::new(),
            dying: Vec::new(),
            catalogued: HashSet::new(),
            selection: None,
            light_on: true,
            survival_accumulator: 0.0,
        }
    }
}

impl Session {
    /// A fresh run in `vessel` with the given launch options.
    pub fn launch(vessel: &Vessel, options: &LaunchOptions) -> Self {
        let mut session = Self {
            vessel_id: vessel.id.to_string(),
            ocean_id: options.ocean_id.clone(),
            game_mode: options.mode,
            catalogued: options.catalogued.iter().cloned().collect(),
            ..Self::default()
        };
        session.refit(vessel);
        session
    }

    /// Restart from the surface, keeping vessel, ocean, mode and catalogue.
    pub fn restart(&mut self, vessel: &Vessel) {
        let catalogued = std::mem::take(&mut self.catalogued);
        let light_on = self.light_on;
        *self = Self {
            vessel_id: self.vessel_id.clone(),
            ocean_id: self.ocean_id.clone(),
            game_mode: self.game_mode,
            catalogued,
            light_on,
            ..Self::default()
        };
        self.refit(vessel);
    }

    /// Restore hull and magazine to the vessel's full values.
    pub fn refit(&mut self, vessel: &Vessel) {
        self.max_health = vessel.max_health;
        self.health = vessel.max_health;
        self.ammo_capacity = vessel.ammo_capacity;
        self.ammo = vessel.ammo_capacity;
    }

    pub fn is_combat(&self) -> bool {
        self.game_mode == GameMode::Combat
    }

    /// Reload gauge (0..=100) at session time `now_secs`.
    pub fn reload_progress(&self, now_secs: f64) -> f64 {
        match self.last_fired_secs {
            None => 100.0,
            Some(fired) => ((now_secs - fired) / FIRE_COOLDOWN_SECS * 100.0).min(100.0),
        }
    }

    /// Killed this run and not yet finished dying.
    pub fn is_dying(&self, entity_id: &str) -> bool {
        self.dying.iter().any(|id| id == entity_id)
    }

    /// Whether an entity belongs in the render set, given it is visible.
    pub fn renders(&self, entity_id: &str) -> bool {
        !self.killed.contains(entity_id) || self.is_dying(entity_id)
    }
}
