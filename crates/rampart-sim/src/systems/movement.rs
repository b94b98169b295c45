//! Invader movement system.
//!
//! Advances invaders toward the keep each tick: position += velocity * dt.
//! Flags a breach when an advancing invader closes inside the keep wall.

use hecs::World;
use tracing::info;

use rampart_core::components::{Invader, InvaderState};
use rampart_core::constants::{DT, KEEP_BREACH_RADIUS};
use rampart_core::enums::InvaderPhase;
use rampart_core::events::GameEvent;
use rampart_core::types::{Position, Velocity};

use crate::tracking::ScoreState;
use crate::world_setup;

/// Advance all invaders and detect keep breaches.
pub fn run(world: &mut World, events: &mut Vec<GameEvent>, score: &mut ScoreState) {
    let keep = Position::new(0.0, 0.0, 0.0);

    for (_entity, (_invader, state, pos, vel)) in
        world.query_mut::<(&Invader, &mut InvaderState, &mut Position, &mut Velocity)>()
    {
        if state.phase != InvaderPhase::Advancing {
            continue;
        }

        // Home on the keep at archetype speed.
        let (speed, _) = world_setup::invader_archetype_params(state.archetype);
        let range = pos.range_to(&keep);
        if range > 1e-9 {
            vel.x = (keep.x - pos.x) / range * speed;
            vel.y = (keep.y - pos.y) / range * speed;
            vel.z = (keep.z - pos.z) / range * speed;
        }

        pos.x += vel.x * DT;
        pos.y += vel.y * DT;
        pos.z += vel.z * DT;

        if pos.range_to(&keep) <= KEEP_BREACH_RADIUS {
            state.phase = InvaderPhase::Breached;
            score.invaders_breached += 1;
            events.push(GameEvent::InvaderBreached {
                invader_id: state.invader_id,
            });
            info!("invader {} breached the keep", state.invader_id);
        }
    }
}
