//! Closed-form intercept solver for constant-velocity targets.
//!
//! Finds the earliest time at which a projectile fired now at fixed speed
//! can meet a target moving with constant velocity. Equating projectile
//! travel distance with target displacement gives a quadratic in the
//! flight time tau:
//!
//! ```text
//! (|V|^2 - s^2) tau^2 + 2 (D . V) tau + |D|^2 = 0
//! ```
//!
//! where `D` is the launcher-to-target offset, `V` the target velocity,
//! and `s` the projectile speed. The solver picks the smallest
//! non-negative root, falling back to the linear solution when the
//! leading coefficient vanishes (target speed equal to projectile speed).

use glam::DVec3;
use serde::{Deserialize, Serialize};

use rampart_core::constants::INTERCEPT_EPSILON;

/// A firing solution against a constant-velocity target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterceptSolution {
    /// Predicted meeting point of projectile and target.
    pub intercept_point: DVec3,
    /// Flight time from launch to the meeting point (seconds).
    pub time_to_impact: f64,
    /// Unit vector from launcher to intercept point (zero if coincident).
    pub firing_direction: DVec3,
}

/// Solve for the earliest intercept of a constant-velocity target.
///
/// `projectile_speed` is in world units per second. Returns `None` when
/// no forward-in-time intercept exists (target outrunning the projectile,
/// negative discriminant, or non-finite inputs).
pub fn solve(
    target_pos: DVec3,
    target_vel: DVec3,
    launcher_pos: DVec3,
    projectile_speed: f64,
) -> Option<InterceptSolution> {
    if !target_pos.is_finite() || !target_vel.is_finite() || !launcher_pos.is_finite() {
        return None;
    }
    if !projectile_speed.is_finite() || projectile_speed <= 0.0 {
        return None;
    }

    let offset = target_pos - launcher_pos;
    let a = target_vel.length_squared() - projectile_speed * projectile_speed;
    let b = 2.0 * offset.dot(target_vel);
    let c = offset.length_squared();

    let tau = if a.abs() < INTERCEPT_EPSILON {
        // Degenerate case: equal speeds collapse the quadratic to b*tau + c = 0.
        if b.abs() < INTERCEPT_EPSILON {
            return None;
        }
        let tau = -c / b;
        if tau < 0.0 {
            return None;
        }
        tau
    } else {
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_disc = discriminant.sqrt();
        let root_a = (-b + sqrt_disc) / (2.0 * a);
        let root_b = (-b - sqrt_disc) / (2.0 * a);

        // Earliest intercept that is not in the past.
        if root_a >= 0.0 && root_b >= 0.0 {
            root_a.min(root_b)
        } else if root_a >= 0.0 {
            root_a
        } else if root_b >= 0.0 {
            root_b
        } else {
            return None;
        }
    };

    let intercept_point = target_pos + target_vel * tau;
    let firing_direction = (intercept_point - launcher_pos).normalize_or_zero();

    Some(InterceptSolution {
        intercept_point,
        time_to_impact: tau,
        firing_direction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rampart_core::constants::{PROJECTILE_SPEED, PROJECTILE_SPEED_SCALE};

    fn effective_speed() -> f64 {
        PROJECTILE_SPEED * PROJECTILE_SPEED_SCALE
    }

    #[test]
    fn test_stationary_target_direct_shot() {
        let target = DVec3::new(0.0, 3.0, 0.0);
        let solution = solve(target, DVec3::ZERO, DVec3::ZERO, 1.5).expect("solvable");

        // Flight time is just range over speed, aimed straight at the target.
        assert!(
            (solution.time_to_impact - 2.0).abs() < 1e-9,
            "expected tau = 2.0s, got {}",
            solution.time_to_impact
        );
        assert!((solution.intercept_point - target).length() < 1e-9);
        assert!((solution.firing_direction - DVec3::Y).length() < 1e-9);
    }

    #[test]
    fn test_default_tuning_scenario() {
        // Stationary target 10 units east, default speed knob 0.2 scaled
        // by 400 = 80 units/s: tau = 10 / 80.
        let solution = solve(
            DVec3::new(10.0, 0.0, 0.0),
            DVec3::ZERO,
            DVec3::ZERO,
            effective_speed(),
        )
        .expect("solvable");

        assert!(
            (solution.time_to_impact - 0.125).abs() < 1e-12,
            "expected tau = 0.125s, got {}",
            solution.time_to_impact
        );
        assert!((solution.firing_direction - DVec3::X).length() < 1e-12);
    }

    #[test]
    fn test_rendezvous_residual_is_small() {
        // A projectile flying straight at the solved direction must meet
        // the extrapolated target at the solved time.
        let cases = [
            (DVec3::new(4.0, 2.0, 0.0), DVec3::new(-1.0, 0.5, 0.0)),
            (DVec3::new(-3.0, 1.0, 0.5), DVec3::new(0.8, -1.2, 0.0)),
            (DVec3::new(0.0, 9.5, 0.0), DVec3::new(2.0, -2.0, 0.0)),
        ];
        let launcher = DVec3::new(0.5, -0.5, 0.5);
        let speed = effective_speed();

        for (target_pos, target_vel) in cases {
            let solution = solve(target_pos, target_vel, launcher, speed).expect("solvable");
            let projectile_at_tau =
                launcher + solution.firing_direction * speed * solution.time_to_impact;
            let target_at_tau = target_pos + target_vel * solution.time_to_impact;
            let residual = (projectile_at_tau - target_at_tau).length();
            assert!(
                residual < 1e-6,
                "rendezvous residual {residual} too large for target at {target_pos:?}"
            );
        }
    }

    #[test]
    fn test_crossing_target_takes_earliest_root() {
        // Target faster than the projectile but closing head-on: both
        // roots are positive (it can be met inbound or after it passes).
        let solution = solve(
            DVec3::new(10.0, 0.0, 0.0),
            DVec3::new(-2.0, 0.0, 0.0),
            DVec3::ZERO,
            1.0,
        )
        .expect("solvable");

        // Roots are 10/3 and 10; the earlier one wins.
        assert!(
            (solution.time_to_impact - 10.0 / 3.0).abs() < 1e-9,
            "expected earliest root 10/3, got {}",
            solution.time_to_impact
        );
    }

    #[test]
    fn test_lead_on_crossing_target() {
        // Target crossing perpendicular to the line of sight; the firing
        // direction must lead it.
        let target_pos = DVec3::new(10.0, 0.0, 0.0);
        let target_vel = DVec3::new(0.0, 1.0, 0.0);
        let solution = solve(target_pos, target_vel, DVec3::ZERO, 2.0).expect("solvable");

        assert!(solution.intercept_point.y > 0.0, "intercept must lead north");
        assert!(
            solution.firing_direction.y > 0.0,
            "firing direction must lead north, got {:?}",
            solution.firing_direction
        );
    }

    #[test]
    fn test_firing_direction_is_unit_length() {
        let solution = solve(
            DVec3::new(3.0, -2.0, 1.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(-1.0, 0.0, 0.5),
            effective_speed(),
        )
        .expect("solvable");
        assert!(
            (solution.firing_direction.length() - 1.0).abs() < 1e-9,
            "firing direction not unit length: {:?}",
            solution.firing_direction
        );
    }

    #[test]
    fn test_outrunning_target_has_no_solution() {
        // Target fleeing directly away faster than the projectile.
        let solution = solve(
            DVec3::new(10.0, 0.0, 0.0),
            DVec3::new(100.0, 0.0, 0.0),
            DVec3::ZERO,
            80.0,
        );
        assert!(solution.is_none(), "fleeing faster target must be unsolvable");
    }

    #[test]
    fn test_equal_speed_closing_uses_linear_fallback() {
        // Target speed exactly equals projectile speed: a = 0. Closing
        // head-on from 10 units east gives tau = -c/b = 100/1600.
        let solution = solve(
            DVec3::new(10.0, 0.0, 0.0),
            DVec3::new(-80.0, 0.0, 0.0),
            DVec3::ZERO,
            80.0,
        )
        .expect("solvable");

        assert!(
            (solution.time_to_impact - 0.0625).abs() < 1e-12,
            "expected linear-fallback tau = 0.0625, got {}",
            solution.time_to_impact
        );
        assert!((solution.intercept_point - DVec3::new(5.0, 0.0, 0.0)).length() < 1e-9);
        assert!(solution.time_to_impact.is_finite());
    }

    #[test]
    fn test_equal_speed_fleeing_has_no_solution() {
        let solution = solve(
            DVec3::new(10.0, 0.0, 0.0),
            DVec3::new(80.0, 0.0, 0.0),
            DVec3::ZERO,
            80.0,
        );
        assert!(solution.is_none(), "equal-speed fleeing target must be unsolvable");
    }

    #[test]
    fn test_equal_speed_perpendicular_has_no_solution() {
        // a = 0 and b = 0: the degenerate linear equation has no root.
        let solution = solve(
            DVec3::new(10.0, 0.0, 0.0),
            DVec3::new(0.0, 80.0, 0.0),
            DVec3::ZERO,
            80.0,
        );
        assert!(solution.is_none());
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        let nan = DVec3::new(f64::NAN, 0.0, 0.0);
        let inf = DVec3::new(f64::INFINITY, 0.0, 0.0);
        let ok = DVec3::new(1.0, 1.0, 0.0);

        assert!(solve(nan, DVec3::ZERO, DVec3::ZERO, 80.0).is_none());
        assert!(solve(ok, inf, DVec3::ZERO, 80.0).is_none());
        assert!(solve(ok, DVec3::ZERO, nan, 80.0).is_none());
        assert!(solve(ok, DVec3::ZERO, DVec3::ZERO, f64::NAN).is_none());
        assert!(solve(ok, DVec3::ZERO, DVec3::ZERO, 0.0).is_none());
        assert!(solve(ok, DVec3::ZERO, DVec3::ZERO, -5.0).is_none());
    }

    #[test]
    fn test_coincident_target_zero_direction() {
        // Target already at the launcher: tau = 0 with a zero direction
        // rather than a NaN from normalizing a zero vector.
        let solution = solve(DVec3::ZERO, DVec3::new(1.0, 0.0, 0.0), DVec3::ZERO, 80.0)
            .expect("solvable");
        assert_eq!(solution.time_to_impact, 0.0);
        assert_eq!(solution.firing_direction, DVec3::ZERO);
        assert!(solution.intercept_point.is_finite());
    }
}
