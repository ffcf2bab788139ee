//! Creature lifecycle state machine.
//!
//! Pure functions that compute the next pose and lifecycle state of one
//! rendered entity. No ECS dependency, operates on plain data.

use glam::Vec3;

use abyss_core::constants::*;
use abyss_core::enums::LifeState;

use crate::profiles::{get_profile, MotionProfile};

/// Input to the creature FSM for a single entity.
pub struct CreatureContext {
    pub hostile: bool,
    pub life: LifeState,
    /// Whether the dive is in combat mode.
    pub combat: bool,
    pub base_scale: f32,
    /// Catalog depth, used as the bob phase offset.
    pub catalog_depth: f64,
    /// Procedural resting position in world space.
    pub anchor: Vec3,
    pub position: Vec3,
    pub roll: f32,
    pub scale: f32,
    /// Session clock (seconds).
    pub elapsed_secs: f64,
    /// Frame duration (seconds).
    pub dt: f64,
    /// Seconds since the entity entered its current lifecycle state.
    pub elapsed_in_state_secs: f64,
}

/// Output from the creature FSM.
pub struct CreatureUpdate {
    pub position: Vec3,
    pub roll: f32,
    pub scale: f32,
    pub new_life: LifeState,
    pub life_changed: bool,
}

/// Evaluate the FSM for one entity. Returns the updated pose and state.
pub fn evaluate(ctx: &CreatureContext) -> CreatureUpdate {
    match ctx.life {
        LifeState::Alive => evaluate_alive(ctx, &get_profile(ctx.hostile)),
        LifeState::Dying => evaluate_dying(ctx),
        LifeState::Removed => CreatureUpdate {
            position: ctx.position,
            roll: ctx.roll,
            scale: ctx.scale,
            new_life: LifeState::Removed,
            life_changed: false,
        },
    }
}

fn evaluate_alive(ctx: &CreatureContext, profile: &MotionProfile) -> CreatureUpdate {
    let t = ctx.elapsed_secs as f32;
    let phase = t + ctx.catalog_depth as f32 * BOB_DEPTH_PHASE;

    let mut position = ctx.position;
    position.y = ctx.anchor.y + phase.sin() * profile.bob_amplitude;
    let roll = (t * 2.0).sin() * profile.roll_amplitude;

    let scale = match profile.drift_rate {
        Some(rate) if ctx.combat => {
            let blend = (ctx.dt as f32 * rate).min(1.0);
            position.x = lerp(position.x, 0.0, blend);
            position.z = lerp(position.z, 0.0, blend);
            ctx.base_scale * (1.0 + (t * AGGRO_PULSE_FREQUENCY).sin() * profile.pulse_amplitude)
        }
        _ => ctx.base_scale,
    };

    CreatureUpdate {
        position,
        roll,
        scale,
        new_life: LifeState::Alive,
        life_changed: false,
    }
}

fn evaluate_dying(ctx: &CreatureContext) -> CreatureUpdate {
    let roll = ctx.roll + ctx.dt as f32 * DYING_SPIN_RATE;
    let scale = ctx.scale * DYING_SHRINK_FACTOR;

    let gone = scale < ctx.base_scale * DYING_MIN_SCALE_RATIO
        || ctx.elapsed_in_state_secs >= DYING_DURATION_SECS;
    let new_life = if gone {
        LifeState::Removed
    } else {
        LifeState::Dying
    };

    CreatureUpdate {
        position: ctx.position,
        roll,
        scale,
        new_life,
        life_changed: gone,
    }
}

/// Linear interpolation.
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
