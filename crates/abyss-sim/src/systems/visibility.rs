//! Render-set sync: spawns entities that came into view and despawns the
//! ones that left it.
//!
//! The render set is every visible catalog entity that has not been killed,
//! plus killed ones still playing their removal animation. An entity that
//! leaves and re-enters the set is respawned at its procedural placement.

use std::collections::HashSet;

use hecs::{Entity, World};

use abyss_core::components::Creature;
use abyss_core::constants::RENDER_RANGE;

use abyss_procgen::visibility::visible_entities;

use crate::session::Session;
use crate::world_setup;

/// Sync creature entities with the render set at the current depth.
pub fn run(world: &mut World, session: &Session, now_secs: f64, despawn_buffer: &mut Vec<Entity>) {
    let render_set: Vec<_> = visible_entities(session.current_depth, RENDER_RANGE, &session.ocean_id)
        .into_iter()
        .filter(|e| session.renders(e.id))
        .collect();
    let wanted: HashSet<&str> = render_set.iter().map(|e| e.id).collect();

    despawn_buffer.clear();
    let mut present: HashSet<String> = HashSet::new();
    for (entity, creature) in world.query_mut::<&Creature>() {
        if wanted.contains(creature.entity_id.as_str()) {
            present.insert(creature.entity_id.clone());
        } else {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for entity in render_set {
        if !present.contains(entity.id) {
            world_setup::spawn_creature(world, entity, now_secs);
        }
    }
}
