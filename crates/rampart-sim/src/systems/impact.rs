//! Impact resolution system — checks projectile-invader proximity and
//! applies damage.

use hecs::World;
use tracing::{debug, info};

use rampart_core::components::{Invader, InvaderState, Projectile, ProjectileState};
use rampart_core::constants::PROJECTILE_HIT_RADIUS;
use rampart_core::enums::InvaderPhase;
use rampart_core::events::GameEvent;
use rampart_core::types::Position;

use crate::tracking::ScoreState;

/// Run the impact system: apply damage on contact, expire spent projectiles.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<hecs::Entity>,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
) {
    // Collect projectile state up front; damage application re-queries the world.
    let projectiles: Vec<(hecs::Entity, Position, u32, i32, f64)> = world
        .query::<(&Projectile, &ProjectileState, &Position)>()
        .iter()
        .map(|(entity, (_projectile, state, pos))| {
            (entity, *pos, state.tower_id, state.damage, state.progress)
        })
        .collect();

    for (entity, pos, tower_id, damage, progress) in projectiles {
        // Nearest advancing invader inside the hit radius. An invader slain
        // by an earlier projectile this tick is no longer advancing and
        // cannot soak a second hit.
        let mut best: Option<(hecs::Entity, f64, u32)> = None;
        for (inv_entity, (_invader, state, inv_pos)) in
            world.query::<(&Invader, &InvaderState, &Position)>().iter()
        {
            if state.phase != InvaderPhase::Advancing {
                continue;
            }
            let range = pos.range_to(inv_pos);
            if range > PROJECTILE_HIT_RADIUS {
                continue;
            }
            let better = match best {
                None => true,
                Some((_, best_range, _)) => range < best_range,
            };
            if better {
                best = Some((inv_entity, range, state.invader_id));
            }
        }

        if let Some((inv_entity, _range, invader_id)) = best {
            let mut slain = false;
            let mut remaining_hp = 0;
            if let Ok(mut state) = world.get::<&mut InvaderState>(inv_entity) {
                state.hp -= damage;
                remaining_hp = state.hp.max(0);
                if state.hp <= 0 {
                    state.phase = InvaderPhase::Slain;
                    slain = true;
                }
            }

            score.shots_hit += 1;
            events.push(GameEvent::ProjectileHit {
                tower_id,
                invader_id,
                remaining_hp,
            });
            debug!(
                "tower {} hit invader {}, {} hp left",
                tower_id, invader_id, remaining_hp
            );
            if slain {
                score.invaders_slain += 1;
                events.push(GameEvent::InvaderSlain {
                    invader_id,
                    tower_id,
                });
                info!("invader {} slain by tower {}", invader_id, tower_id);
            }

            despawn_buffer.push(entity);
            continue;
        }

        // Completed the arc without contact.
        if progress >= 1.0 {
            events.push(GameEvent::ProjectileExpired { tower_id });
            despawn_buffer.push(entity);
        }
    }

    // Despawn spent projectiles
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
