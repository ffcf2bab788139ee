//! Deterministic lateral placement of catalog entities.
//!
//! An entity's spot in the water column is derived from a hash of its
//! identifier alone, so it reappears in the same place every time it comes
//! back into view.

use serde::{Deserialize, Serialize};

use abyss_core::constants::{PLACEMENT_X_MIN, PLACEMENT_X_SPAN, PLACEMENT_Z_HALF_SPAN};

/// Lateral placement of an entity around the descent axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Sideways offset, always outside the central lane.
    pub x: f32,
    /// Offset toward (+) or away from (-) the camera.
    pub z: f32,
    /// +1 for the right-hand side, -1 for the left.
    pub side: i8,
}

/// 32-bit polynomial rolling hash (`h * 31 + c`) over UTF-16 code units.
pub fn stable_hash(id: &str) -> i32 {
    id.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

/// Place an entity by identifier. The depth argument is accepted for call-site
/// symmetry with the catalog but does not influence the result.
pub fn procedural_position(id: &str, _depth: f64) -> Placement {
    let hash = stable_hash(id);

    let rand = (i64::from(hash).abs() % 1000) as f32 / 1000.0;
    let side: i8 = if hash % 2 == 0 { 1 } else { -1 };

    let x = f32::from(side) * (PLACEMENT_X_MIN + rand * PLACEMENT_X_SPAN);
    let z = rand * (2.0 * PLACEMENT_Z_HALF_SPAN) - PLACEMENT_Z_HALF_SPAN;

    Placement { x, z, side }
}
