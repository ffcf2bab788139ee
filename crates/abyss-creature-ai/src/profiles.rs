//! Temperament-specific motion profiles.

use abyss_core::constants::*;

/// Motion parameters for one temperament.
pub struct MotionProfile {
    /// Vertical bob amplitude (world units).
    pub bob_amplitude: f32,
    /// Peak roll while idling (radians).
    pub roll_amplitude: f32,
    /// Fraction of the remaining lateral offset closed per second in combat,
    /// None for creatures that hold their placement.
    pub drift_rate: Option<f32>,
    /// Relative scale swing of the combat pulse.
    pub pulse_amplitude: f32,
}

/// Get the motion profile for a hostile or peaceful entity.
pub fn get_profile(hostile: bool) -> MotionProfile {
    if hostile {
        MotionProfile {
            bob_amplitude: BOB_AMPLITUDE,
            roll_amplitude: ROLL_AMPLITUDE,
            drift_rate: Some(HOSTILE_DRIFT_RATE),
            pulse_amplitude: AGGRO_PULSE_AMPLITUDE,
        }
    } else {
        MotionProfile {
            bob_amplitude: BOB_AMPLITUDE,
            roll_amplitude: ROLL_AMPLITUDE,
            drift_rate: None,
            pulse_amplitude: 0.0,
        }
    }
}
