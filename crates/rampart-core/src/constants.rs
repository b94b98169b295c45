//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Arena ---

/// Radius of the playable field around the keep (world units).
pub const ARENA_RADIUS: f64 = 12.0;

/// Range from the keep at which an invader counts as breaching it.
pub const KEEP_BREACH_RADIUS: f64 = 0.5;

/// Minimum spawn distance from the keep for scheduled invaders.
pub const INVADER_SPAWN_RADIUS_MIN: f64 = 8.0;

/// Maximum spawn distance from the keep for scheduled invaders.
pub const INVADER_SPAWN_RADIUS_MAX: f64 = 10.0;

/// Bearing jitter applied to each invader in a wave (radians, +/-).
pub const INVADER_SPAWN_BEARING_JITTER: f64 = 0.3;

// --- Towers ---

/// East/west offset of the two towers flanking the keep.
pub const TOWER_FLANK_OFFSET: f64 = 2.5;

/// Minimum time between shots from one tower (seconds).
pub const TOWER_FIRE_INTERVAL_SECS: f64 = 0.5;

/// Maximum engagement range, measured tower to target (world units).
pub const TOWER_RANGE: f64 = 4.0;

/// Height of the muzzle above the tower base (world units).
pub const TOWER_MUZZLE_HEIGHT: f64 = 0.5;

/// Turret yaw slew rate (rad/s).
pub const TURRET_SLEW_RATE: f64 = 6.0;

/// Maximum yaw error for a tower to be considered on-target (radians).
pub const TURRET_AIM_TOLERANCE: f64 = 0.1;

// --- Projectiles ---

/// Configured projectile speed knob. Multiplied by
/// [`PROJECTILE_SPEED_SCALE`] to get world units per second.
pub const PROJECTILE_SPEED: f64 = 0.2;

/// Scale factor from the speed knob to world units per second.
pub const PROJECTILE_SPEED_SCALE: f64 = 400.0;

/// Hit points removed from an invader on projectile impact.
pub const PROJECTILE_DAMAGE: i32 = 10;

/// Range within which a projectile strikes an invader (world units).
pub const PROJECTILE_HIT_RADIUS: f64 = 0.3;

// --- Arc trajectory ---

/// Vertical rise of the arc control point above the chord midpoint.
pub const ARC_APEX_RISE: f64 = 1.0;

/// Horizontal push of the arc control point along the launch direction.
pub const ARC_FORWARD_BIAS: f64 = 0.5;

/// Number of chords used to approximate the arc length.
pub const ARC_LENGTH_SEGMENTS: u32 = 20;

/// Floor on flight duration so degenerate arcs still take one tick.
pub const MIN_FLIGHT_DURATION_SECS: f64 = DT;

/// Arc progress below which a projectile faces its launch direction
/// instead of the curve tangent.
pub const TANGENT_FACING_START_T: f64 = 0.3;

/// Minimum tangent magnitude for a valid facing update.
pub const MIN_TANGENT_LENGTH: f64 = 0.01;

// --- Intercept solver ---

/// Threshold below which the quadratic's leading coefficient is
/// treated as zero and the linear fallback applies.
pub const INTERCEPT_EPSILON: f64 = 1e-9;

// --- Target tracking ---

/// Minimum elapsed time between velocity samples (seconds).
pub const MIN_VELOCITY_SAMPLE_DT: f64 = 0.01;

// --- Invader archetypes ---

/// Walker ground speed (units/s).
pub const WALKER_SPEED: f64 = 1.2;

/// Walker hit points.
pub const WALKER_HP: i32 = 30;

/// Sprinter ground speed (units/s).
pub const SPRINTER_SPEED: f64 = 2.4;

/// Sprinter hit points.
pub const SPRINTER_HP: i32 = 10;

// --- Commands ---

/// Maximum accepted time scale.
pub const MAX_TIME_SCALE: f64 = 4.0;
