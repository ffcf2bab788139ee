//! Targeting and fire control.
//!
//! The reticle is steered by the joystick each combat frame and the lock is
//! whatever entity sits under it. Fire requests are checked against mode,
//! magazine, hull, pause and the reload cooldown before a shot is taken.

use abyss_core::constants::*;
use abyss_core::enums::FireRejection;
use abyss_core::types::{InputSnapshot, ScreenPoint};

use crate::hit_index::HitIndex;
use crate::session::Session;

/// Steer the reticle, register its probe and recompute the lock.
pub fn run(session: &mut Session, input: &InputSnapshot, hit_index: &mut HitIndex) {
    let stick = input.clamped_joystick();
    if stick.x != 0.0 || stick.y != 0.0 {
        session.reticle = ScreenPoint::new(
            clamp_reticle(session.reticle.x + stick.x * RETICLE_SENSITIVITY),
            clamp_reticle(session.reticle.y + stick.y * RETICLE_SENSITIVITY),
        );
    }

    hit_index.register_reticle(session.reticle);
    session.locked_target = hit_index.entity_at(session.reticle);
}

fn clamp_reticle(v: f32) -> f32 {
    v.clamp(RETICLE_MARGIN, 100.0 - RETICLE_MARGIN)
}

/// Validate a fire request at session time `now_secs` and take the shot.
/// Returns the target on success; ammo and cooldown are untouched on
/// rejection.
pub fn try_fire(
    session: &mut Session,
    hit_index: &HitIndex,
    paused: bool,
    now_secs: f64,
) -> Result<String, FireRejection> {
    if !session.is_combat() {
        return Err(FireRejection::NotCombat);
    }
    if session.ammo == 0 {
        return Err(FireRejection::NoAmmo);
    }
    if session.health <= 0.0 {
        return Err(FireRejection::HullDestroyed);
    }
    if paused {
        return Err(FireRejection::Paused);
    }
    if let Some(fired) = session.last_fired_secs {
        if now_secs - fired < FIRE_COOLDOWN_SECS {
            return Err(FireRejection::Reloading);
        }
    }

    let target = session
        .locked_target
        .clone()
        .or_else(|| hit_index.entity_at(session.reticle))
        .ok_or(FireRejection::NoTarget)?;

    session.last_fired_secs = Some(now_secs);
    session.ammo -= 1;
    session.firing_at = Some(target.clone());
    Ok(target)
}
