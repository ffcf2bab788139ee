//! Survival tick: proximity damage from nearby hostiles in combat.

use abyss_core::constants::*;
use abyss_core::events::GameEvent;

use abyss_procgen::visibility::visible_entities;

use crate::session::Session;

/// Accumulate `dt` of session time and apply one damage step per elapsed
/// second. Returns true on the frame the hull is destroyed.
pub fn run(session: &mut Session, dt: f64, events: &mut Vec<GameEvent>) -> bool {
    if !session.is_combat() || session.health <= 0.0 {
        return false;
    }

    session.survival_accumulator += dt;
    while session.survival_accumulator >= SURVIVAL_TICK_SECS {
        session.survival_accumulator -= SURVIVAL_TICK_SECS;
        if damage_step(session, events) {
            return true;
        }
    }
    false
}

/// Number of undefeated hostiles within survival range.
pub fn hostiles_in_range(session: &Session) -> usize {
    visible_entities(session.current_depth, SURVIVAL_RANGE, &session.ocean_id)
        .into_iter()
        .filter(|e| e.hostile && !session.killed.contains(e.id))
        .count()
}

fn damage_step(session: &mut Session, events: &mut Vec<GameEvent>) -> bool {
    let count = hostiles_in_range(session);
    if count == 0 {
        return false;
    }

    let amount = DAMAGE_PER_HOSTILE * count as f64;
    session.health = (session.health - amount).max(0.0);
    events.push(GameEvent::HullDamaged {
        amount,
        health: session.health,
    });

    if session.health <= 0.0 {
        tracing::info!(depth = session.current_depth, "hull destroyed");
        events.push(GameEvent::Defeated);
        return true;
    }
    false
}
