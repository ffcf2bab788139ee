//! Game state snapshot: the complete visible state handed to the front end each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{ScreenPoint, SimTime};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub mode: AppMode,
    pub game_mode: GameMode,
    pub paused: bool,
    /// Current intro panel (only meaningful in `Intro`).
    pub intro_panel: u8,
    pub vessel_id: String,
    pub ocean_id: String,
    pub depth: DepthView,
    pub hull: HullView,
    pub weapons: WeaponsView,
    pub light_on: bool,
    pub entities: Vec<EntityView>,
    pub projectiles: Vec<ProjectileView>,
    pub bursts: Vec<BurstView>,
    pub selection: Option<SelectionView>,
    pub killed_count: u32,
    pub events: Vec<GameEvent>,
}

/// Depth gauge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepthView {
    pub current: f64,
    pub target: f64,
    pub zone: String,
}

/// Hull integrity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HullView {
    pub health: f64,
    pub max_health: f64,
}

/// Fire control display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponsView {
    pub ammo: u32,
    pub ammo_capacity: u32,
    /// 0..=100, 100 when ready to fire.
    pub reload_progress: f64,
    pub reticle: ScreenPoint,
    pub locked_target: Option<String>,
    /// Target of the shot fired within the last trigger window.
    pub firing_at: Option<String>,
}

/// A rendered catalog entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityView {
    pub entity_id: String,
    pub name: String,
    pub catalog_depth: f64,
    pub position: Vec3,
    pub roll: f32,
    pub scale: f32,
    pub hostile: bool,
    pub life: LifeState,
    pub catalogued: bool,
}

/// An in-flight projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub target_id: String,
    pub position: Vec3,
    pub heading: Vec3,
}

/// An impact burst.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurstView {
    pub position: Vec3,
    pub scale: f32,
    pub opacity: f32,
}

/// The fact card for the selected entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionView {
    pub entity_id: String,
    pub name: String,
    pub fact: Option<String>,
    pub loading: bool,
}
