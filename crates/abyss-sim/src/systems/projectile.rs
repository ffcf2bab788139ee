//! Projectile homing and impact resolution.
//!
//! Projectiles read their target's published position every frame. A
//! projectile whose target has no published position detonates where it is.

use std::collections::HashMap;

use glam::Vec3;
use hecs::{Entity, World};

use abyss_core::catalog::find_entity;
use abyss_core::components::{Projectile, Transform};
use abyss_core::constants::{DYING_DURATION_SECS, PROJECTILE_HIT_RADIUS};
use abyss_core::events::GameEvent;

use crate::scheduler::{Scheduler, TimerAction};
use crate::session::Session;
use crate::systems::creature_motion;
use crate::world_setup;

/// A projectile reaching (or losing) its target.
#[derive(Debug, Clone)]
pub struct Impact {
    pub target_id: String,
    pub position: Vec3,
}

/// Advance every projectile by `dt`. Impacted projectiles are despawned and
/// returned.
pub fn run(
    world: &mut World,
    positions: &HashMap<String, Vec3>,
    dt: f64,
    despawn_buffer: &mut Vec<Entity>,
) -> Vec<Impact> {
    despawn_buffer.clear();
    let mut impacts = Vec::new();

    for (entity, (projectile, transform)) in world.query_mut::<(&mut Projectile, &mut Transform)>() {
        let Some(&target) = positions.get(&projectile.target_id) else {
            impacts.push(Impact {
                target_id: projectile.target_id.clone(),
                position: transform.position,
            });
            despawn_buffer.push(entity);
            continue;
        };

        if transform.position.distance(target) < PROJECTILE_HIT_RADIUS {
            impacts.push(Impact {
                target_id: projectile.target_id.clone(),
                position: target,
            });
            despawn_buffer.push(entity);
            continue;
        }

        let heading = (target - transform.position).normalize_or_zero();
        transform.position += heading * projectile.speed * dt as f32;
        projectile.heading = heading;
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    impacts
}

/// Apply impacts: burst, dying transition and kill notice. A target that
/// was already killed this run only gets the burst.
pub fn resolve_impacts(
    world: &mut World,
    session: &mut Session,
    scheduler: &mut Scheduler,
    impacts: Vec<Impact>,
    now_secs: f64,
    events: &mut Vec<GameEvent>,
) {
    for impact in impacts {
        world_setup::spawn_burst(world, impact.position);

        if !session.killed.insert(impact.target_id.clone()) {
            continue;
        }

        if creature_motion::begin_dying(world, &impact.target_id, now_secs) {
            session.dying.push(impact.target_id.clone());
            scheduler.schedule(
                now_secs,
                DYING_DURATION_SECS,
                TimerAction::PruneDying {
                    entity_id: impact.target_id.clone(),
                },
            );
        }

        let hostile = find_entity(&impact.target_id).is_some_and(|e| e.hostile);
        tracing::info!(target = %impact.target_id, hostile, "target destroyed");
        events.push(GameEvent::Kill {
            entity_id: impact.target_id,
            hostile,
        });
    }
}
