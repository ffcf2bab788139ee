//! Entity spawn factories.
//!
//! Creates creature, projectile and burst entities with the appropriate
//! component bundles.

use glam::Vec3;
use hecs::World;

use abyss_core::catalog::SeaEntity;
use abyss_core::components::*;
use abyss_core::constants::{PLAYER_Z, PROJECTILE_SPEED};
use abyss_core::enums::LifeState;

use abyss_procgen::placement::procedural_position;

/// Spawn a catalog entity at its procedural placement, alive.
pub fn spawn_creature(world: &mut World, entity: &SeaEntity, now_secs: f64) -> hecs::Entity {
    let placement = procedural_position(entity.id, entity.depth);
    let position = Vec3::new(placement.x, -(entity.depth as f32), placement.z);

    world.spawn((
        Creature {
            entity_id: entity.id.to_string(),
            hostile: entity.hostile,
            category: entity.category,
            base_scale: entity.scale,
            catalog_depth: entity.depth,
        },
        Anchor {
            position,
            side: placement.side,
        },
        Transform::at(position, entity.scale),
        Lifecycle {
            state: LifeState::Alive,
            since_secs: now_secs,
        },
    ))
}

/// Where projectiles leave the vessel at `depth`.
pub fn launch_point(depth: f64) -> Vec3 {
    Vec3::new(0.0, -(depth as f32), PLAYER_Z)
}

/// Spawn a projectile homing on `target_id`, facing straight ahead.
pub fn spawn_projectile(world: &mut World, id: u32, target_id: &str, depth: f64) -> hecs::Entity {
    world.spawn((
        Projectile {
            id,
            target_id: target_id.to_string(),
            speed: PROJECTILE_SPEED,
            heading: Vec3::NEG_Z,
        },
        Transform::at(launch_point(depth), 1.0),
    ))
}

/// Spawn an impact burst at `position`.
pub fn spawn_burst(world: &mut World, position: Vec3) -> hecs::Entity {
    world.spawn((Burst { opacity: 1.0 }, Transform::at(position, 1.0)))
}

/// Despawn every projectile and burst.
pub fn clear_effects(world: &mut World) {
    let mut doomed: Vec<hecs::Entity> = Vec::new();
    for (entity, _projectile) in world.query_mut::<&Projectile>() {
        doomed.push(entity);
    }
    for (entity, _burst) in world.query_mut::<&Burst>() {
        doomed.push(entity);
    }
    for entity in doomed {
        let _ = world.despawn(entity);
    }
}
