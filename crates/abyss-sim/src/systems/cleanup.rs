//! Cleanup system: removes creatures that finished dying.

use hecs::{Entity, World};

use abyss_core::components::{Creature, Lifecycle};
use abyss_core::enums::LifeState;

use crate::session::Session;

/// Despawn removed creatures and drop them from the dying list.
/// Uses a pre-allocated buffer to avoid per-frame allocation.
pub fn run(world: &mut World, session: &mut Session, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (creature, lifecycle)) in world.query_mut::<(&Creature, &Lifecycle)>() {
        if lifecycle.state == LifeState::Removed {
            session.dying.retain(|id| *id != creature.entity_id);
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
