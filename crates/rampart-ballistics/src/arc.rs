//! Arced projectile flight paths.
//!
//! A projectile flies a quadratic Bezier curve from muzzle to intercept
//! point. The control point sits above the chord midpoint and is pushed
//! slightly along the horizontal launch direction, giving a forward-leaning
//! lob. Flight duration is fixed at launch from the arc length and the
//! configured speed, so sampling is a pure function of elapsed time.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use rampart_core::constants::{
    ARC_APEX_RISE, ARC_FORWARD_BIAS, ARC_LENGTH_SEGMENTS, MIN_FLIGHT_DURATION_SECS,
    MIN_TANGENT_LENGTH, PROJECTILE_SPEED_SCALE, TANGENT_FACING_START_T,
};

/// A fixed flight path from muzzle to intercept point.
///
/// Immutable once launched; all flight state derives from elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcTrajectory {
    start: DVec3,
    control: DVec3,
    end: DVec3,
    total_length: f64,
    total_duration: f64,
}

/// One evaluated point along an arc.
#[derive(Debug, Clone, Copy)]
pub struct ArcSample {
    /// World position at the sampled time.
    pub position: DVec3,
    /// Curve derivative at the sampled time (not normalized).
    pub tangent: DVec3,
    /// Parametric progress in [0, 1].
    pub t: f64,
    /// True once the arc has been fully traversed.
    pub complete: bool,
}

impl ArcTrajectory {
    /// Plan an arc from `start` to `end` at the configured speed knob.
    ///
    /// `configured_speed` is the small tuning value; the world speed is
    /// `configured_speed * PROJECTILE_SPEED_SCALE` units per second.
    /// Duration is floored at one tick so a degenerate arc still spends
    /// a tick in flight rather than dividing by zero.
    pub fn launch(start: DVec3, end: DVec3, configured_speed: f64) -> Self {
        let control = control_point(start, end);
        let total_length = polyline_length(start, control, end, ARC_LENGTH_SEGMENTS);
        let total_duration = (total_length / (configured_speed * PROJECTILE_SPEED_SCALE))
            .max(MIN_FLIGHT_DURATION_SECS);
        Self {
            start,
            control,
            end,
            total_length,
            total_duration,
        }
    }

    /// Sample the arc at `elapsed_secs` since launch.
    ///
    /// Progress clamps to [0, 1], so sampling past the end keeps
    /// returning exactly the end point with `complete` set.
    pub fn sample(&self, elapsed_secs: f64) -> ArcSample {
        let t = (elapsed_secs / self.total_duration).clamp(0.0, 1.0);
        ArcSample {
            position: bezier_point(self.start, self.control, self.end, t),
            tangent: bezier_tangent(self.start, self.control, self.end, t),
            t,
            complete: t >= 1.0,
        }
    }

    /// Facing direction at parametric progress `t`, if one is defined.
    ///
    /// Early in flight the projectile holds the fixed horizontal launch
    /// direction instead of pitching along the curve; after that it faces
    /// the tangent. Returns `None` when the direction is degenerate
    /// (vertical chord early on, or a vanishing tangent) and the caller
    /// should keep its previous facing.
    pub fn facing_at(&self, t: f64) -> Option<DVec3> {
        if t < TANGENT_FACING_START_T {
            let dir = horizontal_direction(self.start, self.end);
            if dir == DVec3::ZERO {
                None
            } else {
                Some(dir)
            }
        } else {
            let tangent = bezier_tangent(self.start, self.control, self.end, t);
            if tangent.length() > MIN_TANGENT_LENGTH {
                Some(tangent.normalize())
            } else {
                None
            }
        }
    }

    pub fn start(&self) -> DVec3 {
        self.start
    }

    pub fn control(&self) -> DVec3 {
        self.control
    }

    pub fn end(&self) -> DVec3 {
        self.end
    }

    /// Approximate arc length in world units.
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Flight duration in seconds.
    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }
}

/// Control point above the chord midpoint, pushed along the launch heading.
fn control_point(start: DVec3, end: DVec3) -> DVec3 {
    let mid = (start + end) * 0.5;
    mid + DVec3::Z * ARC_APEX_RISE + horizontal_direction(start, end) * ARC_FORWARD_BIAS
}

/// Z-zeroed, normalized start-to-end direction (zero for vertical chords).
fn horizontal_direction(start: DVec3, end: DVec3) -> DVec3 {
    DVec3::new(end.x - start.x, end.y - start.y, 0.0).normalize_or_zero()
}

fn bezier_point(p0: DVec3, p1: DVec3, p2: DVec3, t: f64) -> DVec3 {
    let u = 1.0 - t;
    u * u * p0 + 2.0 * u * t * p1 + t * t * p2
}

fn bezier_tangent(p0: DVec3, p1: DVec3, p2: DVec3, t: f64) -> DVec3 {
    2.0 * (1.0 - t) * (p1 - p0) + 2.0 * t * (p2 - p1)
}

/// Chord-sum approximation of the curve length.
fn polyline_length(p0: DVec3, p1: DVec3, p2: DVec3, segments: u32) -> f64 {
    let mut length = 0.0;
    let mut previous = p0;
    for i in 1..=segments {
        let t = f64::from(i) / f64::from(segments);
        let current = bezier_point(p0, p1, p2, t);
        length += previous.distance(current);
        previous = current;
    }
    length
}
