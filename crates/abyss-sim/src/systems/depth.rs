//! Depth driver: input to target depth, then eased current depth.

use abyss_core::constants::*;
use abyss_core::events::GameEvent;
use abyss_core::types::InputSnapshot;

use crate::session::Session;

/// Apply wheel and drag input to the target depth, clamped to the trench.
pub fn apply_input(session: &mut Session, input: &InputSnapshot) {
    let delta = input.wheel_delta * WHEEL_SENSITIVITY + input.drag_delta_y * TOUCH_SENSITIVITY;
    if delta != 0.0 {
        session.target_depth = (session.target_depth + delta).clamp(0.0, MAX_DEPTH);
    }
}

/// Ease the current depth toward the target. Returns true on the frame the
/// bottom is reached; the win event is emitted exactly once per run.
pub fn run(session: &mut Session, events: &mut Vec<GameEvent>) -> bool {
    if session.won {
        return false;
    }

    if session.current_depth > VICTORY_DEPTH {
        session.won = true;
        tracing::info!(depth = session.current_depth, "reached the bottom");
        events.push(GameEvent::Won {
            reward: WIN_REWARD,
        });
        return true;
    }

    let gap = session.target_depth - session.current_depth;
    if gap.abs() < DEPTH_SETTLE_EPSILON {
        return false;
    }

    let easing = if gap.abs() > DEPTH_FAST_GAP {
        DEPTH_EASE_FAST
    } else {
        DEPTH_EASE_SLOW
    };
    session.current_depth += gap * easing;
    false
}
