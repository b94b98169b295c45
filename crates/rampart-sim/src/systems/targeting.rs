//! Target selection and velocity estimation.
//!
//! Each tower independently tracks the closest advancing invader inside its
//! engagement range. Target velocity is estimated by finite differences over
//! successive position samples, never read from the invader's own Velocity
//! component, so the fire solution only knows what the tower has observed.

use std::collections::HashMap;

use hecs::World;

use rampart_core::components::{Invader, InvaderState, Tower, TowerState};
use rampart_core::constants::MIN_VELOCITY_SAMPLE_DT;
use rampart_core::enums::InvaderPhase;
use rampart_core::types::{Position, Velocity};

use crate::tracking::TargetTrack;

/// Refresh every tower's track against the current world state.
pub fn run(
    world: &World,
    tracks: &mut HashMap<u32, TargetTrack>,
    elapsed_secs: f64,
    tower_range: f64,
) {
    let invaders: Vec<(hecs::Entity, Position)> = world
        .query::<(&Invader, &InvaderState, &Position)>()
        .iter()
        .filter(|(_, (_, state, _))| state.phase == InvaderPhase::Advancing)
        .map(|(entity, (_, _, pos))| (entity, *pos))
        .collect();

    for (_entity, (_tower, tower_state, tower_pos)) in
        world.query::<(&Tower, &TowerState, &Position)>().iter()
    {
        let closest = invaders
            .iter()
            .map(|&(entity, pos)| (entity, pos, tower_pos.range_to(&pos)))
            .filter(|&(_, _, range)| range <= tower_range)
            .min_by(|a, b| a.2.total_cmp(&b.2));

        let Some((target, target_pos, _range)) = closest else {
            tracks.remove(&tower_state.tower_id);
            continue;
        };

        match tracks.get_mut(&tower_state.tower_id) {
            // Same target: take a fresh velocity sample once enough wall
            // clock has passed to divide by.
            Some(track) if track.target == target => {
                let dt = elapsed_secs - track.last_sample_secs;
                if dt > MIN_VELOCITY_SAMPLE_DT {
                    track.estimated_vel = Velocity::new(
                        (target_pos.x - track.last_pos.x) / dt,
                        (target_pos.y - track.last_pos.y) / dt,
                        (target_pos.z - track.last_pos.z) / dt,
                    );
                    track.last_pos = target_pos;
                    track.last_sample_secs = elapsed_secs;
                }
            }
            // New or switched target: start over with a zero estimate.
            _ => {
                tracks.insert(
                    tower_state.tower_id,
                    TargetTrack::acquire(target, target_pos, elapsed_secs),
                );
            }
        }
    }
}
