//! Systems that run on the simulation world each frame.
//!
//! Systems are free functions over `&mut World` and the session. They hold
//! no state of their own.

pub mod cleanup;
pub mod creature_motion;
pub mod depth;
pub mod effects;
pub mod inspection;
pub mod projectile;
pub mod snapshot;
pub mod survival;
pub mod targeting;
pub mod visibility;
