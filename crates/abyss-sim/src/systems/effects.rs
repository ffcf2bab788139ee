//! Impact bursts: grow and fade each frame, removed once transparent.

use hecs::{Entity, World};

use abyss_core::components::{Burst, Transform};
use abyss_core::constants::{BURST_FADE_RATE, BURST_GROWTH_FACTOR};

pub fn run(world: &mut World, dt: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (burst, transform)) in world.query_mut::<(&mut Burst, &mut Transform)>() {
        transform.scale *= BURST_GROWTH_FACTOR;
        burst.opacity -= dt as f32 * BURST_FADE_RATE;
        if burst.opacity <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
