//! Creature motion system: runs the creature FSM for every rendered entity
//! and publishes world positions for homing.

use std::collections::HashMap;

use glam::Vec3;
use hecs::World;

use abyss_core::components::{Anchor, Creature, Lifecycle, Transform};
use abyss_core::enums::LifeState;

use abyss_creature_ai::fsm::{evaluate, CreatureContext};

/// Advance every creature by `dt` and refresh `positions` with the world
/// position of each alive creature. Dying and removed ones are unpublished.
pub fn run(
    world: &mut World,
    now_secs: f64,
    dt: f64,
    combat: bool,
    positions: &mut HashMap<String, Vec3>,
) {
    positions.clear();

    for (_entity, (creature, anchor, transform, lifecycle)) in
        world.query_mut::<(&Creature, &Anchor, &mut Transform, &mut Lifecycle)>()
    {
        let ctx = CreatureContext {
            hostile: creature.hostile,
            life: lifecycle.state,
            combat,
            base_scale: creature.base_scale,
            catalog_depth: creature.catalog_depth,
            anchor: anchor.position,
            position: transform.position,
            roll: transform.roll,
            scale: transform.scale,
            elapsed_secs: now_secs,
            dt,
            elapsed_in_state_secs: now_secs - lifecycle.since_secs,
        };

        let update = evaluate(&ctx);
        transform.position = update.position;
        transform.roll = update.roll;
        transform.scale = update.scale;
        if update.life_changed {
            lifecycle.state = update.new_life;
            lifecycle.since_secs = now_secs;
        }

        if lifecycle.state == LifeState::Alive {
            positions.insert(creature.entity_id.clone(), transform.position);
        }
    }
}

/// Mark a creature as dying. Returns false if it was not alive.
pub fn begin_dying(world: &mut World, entity_id: &str, now_secs: f64) -> bool {
    for (_entity, (creature, lifecycle)) in world.query_mut::<(&Creature, &mut Lifecycle)>() {
        if creature.entity_id == entity_id && lifecycle.state == LifeState::Alive {
            lifecycle.state = LifeState::Dying;
            lifecycle.since_secs = now_secs;
            return true;
        }
    }
    false
}
