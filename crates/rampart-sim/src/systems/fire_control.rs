//! Fire control system — slews turrets onto firing solutions and launches
//! projectiles.
//!
//! Aiming runs every tick whether or not the tower may fire, so a tower
//! under `Hold` doctrine still leads its target and is ready the moment
//! doctrine flips back to `Free`.

use std::collections::HashMap;
use std::f64::consts::{PI, TAU};

use glam::DVec3;
use hecs::World;
use tracing::debug;

use rampart_core::components::*;
use rampart_core::constants::*;
use rampart_core::enums::FireDoctrine;
use rampart_core::events::GameEvent;
use rampart_core::types::Position;

use rampart_ballistics::arc::ArcTrajectory;
use rampart_ballistics::intercept::{self, InterceptSolution};

use crate::engine::SimConfig;
use crate::tracking::{ScoreState, TargetTrack};

/// Per-tower outcome of the aiming pass, applied after all towers are solved.
struct TowerUpdate {
    entity: hecs::Entity,
    yaw: f64,
    aim: Option<TurretAim>,
    fire: Option<FireOrder>,
}

/// Everything needed to spawn one projectile.
struct FireOrder {
    tower_id: u32,
    muzzle: DVec3,
    yaw: f64,
    arc: ArcTrajectory,
}

/// Run the fire control system for one tick.
pub fn run(
    world: &mut World,
    tracks: &HashMap<u32, TargetTrack>,
    config: &SimConfig,
    doctrine: FireDoctrine,
    current_tick: u64,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
) {
    // Step 1: Collect tower state so the world can be queried per target.
    let towers: Vec<(hecs::Entity, u32, Position, f64, Option<u64>)> = world
        .query::<(&Tower, &TowerState, &Position)>()
        .iter()
        .map(|(entity, (_tower, state, pos))| {
            (entity, state.tower_id, *pos, state.yaw, state.last_shot_tick)
        })
        .collect();

    // Step 2: Solve each tower's aim and firing decision.
    let mut updates: Vec<TowerUpdate> = Vec::with_capacity(towers.len());
    for (entity, tower_id, tower_pos, yaw, last_shot_tick) in towers {
        let muzzle = tower_pos.as_dvec3() + TOWER_MUZZLE_HEIGHT * DVec3::Z;
        let solved = tracks
            .get(&tower_id)
            .and_then(|track| solve_tower_aim(world, track, muzzle, config.effective_speed()));

        let Some((target_position, solution)) = solved else {
            // No track or no solution: hold yaw, drop any stale aim.
            updates.push(TowerUpdate {
                entity,
                yaw,
                aim: None,
                fire: None,
            });
            continue;
        };

        // Yaw toward the firing direction. A dead-vertical shot has no
        // horizontal component; hold yaw, which leaves the turret aligned.
        let fd = solution.firing_direction;
        let desired_yaw = if fd.x == 0.0 && fd.y == 0.0 {
            yaw
        } else {
            fd.x.atan2(fd.y).rem_euclid(TAU)
        };

        let delta = shortest_angle(desired_yaw - yaw);
        let max_step = TURRET_SLEW_RATE * DT;
        let new_yaw = (yaw + delta.clamp(-max_step, max_step)).rem_euclid(TAU);
        let aligned = shortest_angle(desired_yaw - new_yaw).abs() <= TURRET_AIM_TOLERANCE;

        let aim = TurretAim {
            intercept_point: Position::from_dvec3(solution.intercept_point),
            target_position,
            time_to_impact: solution.time_to_impact,
            firing_yaw: desired_yaw,
            firing_pitch: fd.z.clamp(-1.0, 1.0).asin(),
        };

        let mut fire = None;
        if doctrine == FireDoctrine::Free
            && aligned
            && cooldown_ready(last_shot_tick, current_tick, config.fire_interval_secs)
        {
            fire = Some(FireOrder {
                tower_id,
                muzzle,
                yaw: desired_yaw,
                arc: ArcTrajectory::launch(muzzle, solution.intercept_point, config.projectile_speed),
            });
        }

        updates.push(TowerUpdate {
            entity,
            yaw: new_yaw,
            aim: Some(aim),
            fire,
        });
    }

    // Step 3: Apply turret state and spawn projectiles.
    for update in updates {
        if let Ok(mut state) = world.get::<&mut TowerState>(update.entity) {
            state.yaw = update.yaw;
            state.aim = update.aim;
            if update.fire.is_some() {
                state.last_shot_tick = Some(current_tick);
            }
        }

        if let Some(order) = update.fire {
            let flight_secs = order.arc.total_duration();
            world.spawn((
                Projectile,
                Position::from_dvec3(order.muzzle),
                ProjectileState {
                    tower_id: order.tower_id,
                    launch_tick: current_tick,
                    damage: PROJECTILE_DAMAGE,
                    yaw: order.yaw,
                    pitch: 0.0,
                    progress: 0.0,
                },
                order.arc,
            ));
            score.shots_fired += 1;
            events.push(GameEvent::ShotFired {
                tower_id: order.tower_id,
                bearing: order.yaw,
                flight_secs,
            });
            debug!("tower {} fired, {:.2}s flight", order.tower_id, flight_secs);
        }
    }
}

/// Look up the tracked target and solve for an intercept from `muzzle`.
/// Returns the target's current position alongside the solution.
fn solve_tower_aim(
    world: &World,
    track: &TargetTrack,
    muzzle: DVec3,
    projectile_speed: f64,
) -> Option<(Position, InterceptSolution)> {
    let target_pos = world.get::<&Position>(track.target).ok()?;
    let solution = intercept::solve(
        target_pos.as_dvec3(),
        track.estimated_vel.as_dvec3(),
        muzzle,
        projectile_speed,
    )?;
    Some((*target_pos, solution))
}

/// A tower may fire if it has never fired or its fire interval has elapsed.
fn cooldown_ready(last_shot_tick: Option<u64>, current_tick: u64, interval_secs: f64) -> bool {
    match last_shot_tick {
        None => true,
        Some(tick) => (current_tick.saturating_sub(tick)) as f64 * DT >= interval_secs,
    }
}

/// Wrap an angle difference into [-PI, PI).
fn shortest_angle(delta: f64) -> f64 {
    (delta + PI).rem_euclid(TAU) - PI
}
