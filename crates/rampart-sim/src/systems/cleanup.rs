//! Cleanup system: removes invaders that are slain or have breached.

use hecs::{Entity, World};

use rampart_core::components::{Invader, InvaderState};
use rampart_core::enums::InvaderPhase;

/// Remove invaders in a terminal state. Uses a pre-allocated buffer to
/// avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (state, _invader)) in world.query_mut::<(&InvaderState, &Invader)>() {
        if matches!(state.phase, InvaderPhase::Slain | InvaderPhase::Breached) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
