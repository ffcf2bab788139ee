//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// A catalog entity currently in the render set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creature {
    /// Catalog identifier.
    pub entity_id: String,
    pub hostile: bool,
    pub category: EntityCategory,
    /// Catalog scale factor.
    pub base_scale: f32,
    /// Catalog depth in meters (drives the bob phase).
    pub catalog_depth: f64,
}

/// Procedural resting place of a creature.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Anchor {
    /// World position the creature spawned at.
    pub position: Vec3,
    /// Which side of the water column it sits on (+1 or -1).
    pub side: i8,
}

/// World-space pose, updated every frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    /// Rotation about the viewing axis (radians).
    pub roll: f32,
    pub scale: f32,
}

impl Transform {
    pub fn at(position: Vec3, scale: f32) -> Self {
        Self {
            position,
            roll: 0.0,
            scale,
        }
    }
}

/// Alive/dying state of a creature.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Lifecycle {
    pub state: LifeState,
    /// Session time at which the current state began.
    pub since_secs: f64,
}

/// A homing projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Projectile number, unique within the session.
    pub id: u32,
    /// Catalog identifier of the target.
    pub target_id: String,
    /// Units per second.
    pub speed: f32,
    /// Unit vector the projectile faces.
    pub heading: Vec3,
}

/// A short-lived impact burst.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Burst {
    pub opacity: f32,
}
