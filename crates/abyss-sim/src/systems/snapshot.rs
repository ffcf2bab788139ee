//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use abyss_core::catalog::{find_entity, zone_at};
use abyss_core::components::*;
use abyss_core::enums::*;
use abyss_core::events::GameEvent;
use abyss_core::state::*;
use abyss_core::types::SimTime;

use crate::session::Session;

/// Front-end state that lives outside the session.
pub struct FrontEnd {
    pub mode: AppMode,
    pub paused: bool,
    pub intro_panel: u8,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    front: &FrontEnd,
    session: &Session,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        mode: front.mode,
        game_mode: session.game_mode,
        paused: front.paused,
        intro_panel: front.intro_panel,
        vessel_id: session.vessel_id.clone(),
        ocean_id: session.ocean_id.clone(),
        depth: DepthView {
            current: session.current_depth,
            target: session.target_depth,
            zone: zone_at(session.current_depth).name.to_string(),
        },
        hull: HullView {
            health: session.health,
            max_health: session.max_health,
        },
        weapons: WeaponsView {
            ammo: session.ammo,
            ammo_capacity: session.ammo_capacity,
            reload_progress: session.reload_progress(time.elapsed_secs),
            reticle: session.reticle,
            locked_target: session.locked_target.clone(),
            firing_at: session.firing_at.clone(),
        },
        light_on: session.light_on,
        entities: build_entities(world, session),
        projectiles: build_projectiles(world),
        bursts: build_bursts(world),
        selection: session.selection.as_ref().map(|s| SelectionView {
            entity_id: s.entity_id.clone(),
            name: s.name.clone(),
            fact: s.fact.clone(),
            loading: s.fact.is_none(),
        }),
        killed_count: session.killed.len() as u32,
        events,
    }
}

/// Build EntityView list, shallowest first.
fn build_entities(world: &World, session: &Session) -> Vec<EntityView> {
    let mut entities: Vec<EntityView> = world
        .query::<(&Creature, &Transform, &Lifecycle)>()
        .iter()
        .map(|(_, (creature, transform, lifecycle))| EntityView {
            entity_id: creature.entity_id.clone(),
            name: find_entity(&creature.entity_id)
                .map(|e| e.name.to_string())
                .unwrap_or_default(),
            catalog_depth: creature.catalog_depth,
            position: transform.position,
            roll: transform.roll,
            scale: transform.scale,
            hostile: creature.hostile,
            life: lifecycle.state,
            catalogued: session.catalogued.contains(&creature.entity_id),
        })
        .collect();

    entities.sort_by(|a, b| {
        a.catalog_depth
            .total_cmp(&b.catalog_depth)
            .then_with(|| a.entity_id.cmp(&b.entity_id))
    });
    entities
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Transform)>()
        .iter()
        .map(|(_, (projectile, transform))| ProjectileView {
            id: projectile.id,
            target_id: projectile.target_id.clone(),
            position: transform.position,
            heading: projectile.heading,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}

fn build_bursts(world: &World) -> Vec<BurstView> {
    world
        .query::<(&Burst, &Transform)>()
        .iter()
        .map(|(_, (burst, transform))| BurstView {
            position: transform.position,
            scale: transform.scale,
            opacity: burst.opacity,
        })
        .collect()
}
