//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world. Views are sorted
//! by stable ids so identical world states serialize identically.

use hecs::World;

use rampart_core::components::*;
use rampart_core::constants::DT;
use rampart_core::enums::*;
use rampart_core::events::GameEvent;
use rampart_core::state::*;
use rampart_core::types::{Position, SimTime, Velocity};

use crate::engine::SimConfig;
use crate::tracking::ScoreState;

/// Build a complete GameStateSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    doctrine: FireDoctrine,
    scenario: Option<ScenarioId>,
    config: &SimConfig,
    events: Vec<GameEvent>,
    score: &ScoreState,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        doctrine,
        scenario,
        towers: build_towers(world, time, config.fire_interval_secs),
        invaders: build_invaders(world),
        projectiles: build_projectiles(world),
        events,
        score: ScoreView {
            invaders_slain: score.invaders_slain,
            invaders_breached: score.invaders_breached,
            invaders_total: score.invaders_total,
            shots_fired: score.shots_fired,
            shots_hit: score.shots_hit,
            keep_intact: score.invaders_breached == 0,
            mission_time_secs: time.elapsed_secs,
        },
    }
}

/// Build TowerView list, sorted by tower id.
fn build_towers(world: &World, time: &SimTime, fire_interval_secs: f64) -> Vec<TowerView> {
    let mut towers: Vec<TowerView> = world
        .query::<(&Tower, &TowerState, &Position)>()
        .iter()
        .map(|(_, (_tower, state, pos))| {
            let cooldown_secs = match state.last_shot_tick {
                None => 0.0,
                Some(tick) => {
                    let since = time.tick.saturating_sub(tick) as f64 * DT;
                    (fire_interval_secs - since).max(0.0)
                }
            };
            TowerView {
                tower_id: state.tower_id,
                position: *pos,
                yaw: state.yaw,
                cooldown_secs,
                aim: state.aim.map(|aim| AimView {
                    intercept_point: aim.intercept_point,
                    target_position: aim.target_position,
                    time_to_impact: aim.time_to_impact,
                    firing_yaw: aim.firing_yaw,
                    firing_pitch: aim.firing_pitch,
                }),
            }
        })
        .collect();

    towers.sort_by_key(|t| t.tower_id);
    towers
}

/// Build InvaderView list, sorted by invader id.
fn build_invaders(world: &World) -> Vec<InvaderView> {
    let keep = Position::new(0.0, 0.0, 0.0);

    let mut invaders: Vec<InvaderView> = world
        .query::<(&Invader, &InvaderState, &Position, &Velocity)>()
        .iter()
        .map(|(_, (_invader, state, pos, vel))| InvaderView {
            invader_id: state.invader_id,
            archetype: state.archetype,
            position: *pos,
            hp: state.hp,
            speed: vel.speed(),
            heading: vel.heading(),
            range_to_keep: pos.range_to(&keep),
        })
        .collect();

    invaders.sort_by_key(|i| i.invader_id);
    invaders
}

/// Build ProjectileView list, sorted by launch tick then owning tower.
/// A tower fires at most once per tick, so the pair is unique.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &ProjectileState, &Position)>()
        .iter()
        .map(|(_, (_projectile, state, pos))| ProjectileView {
            tower_id: state.tower_id,
            launch_tick: state.launch_tick,
            position: *pos,
            yaw: state.yaw,
            pitch: state.pitch,
            progress: state.progress,
        })
        .collect();

    projectiles.sort_by_key(|p| (p.launch_tick, p.tower_id));
    projectiles
}
