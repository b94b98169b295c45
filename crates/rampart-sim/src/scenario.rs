//! Scenario definitions — hardcoded mission wave schedules.
//!
//! Each scenario defines wave composition, timing, and spawn bearings.

use std::f64::consts::PI;

use rampart_core::constants::TICK_RATE;
use rampart_core::enums::{InvaderArchetype, ScenarioId};

use crate::systems::wave_spawner::{WaveEntry, WaveSchedule};

/// Build the wave schedule for a given scenario.
pub fn build_schedule(scenario: ScenarioId) -> WaveSchedule {
    match scenario {
        ScenarioId::Skirmish => build_skirmish(),
        ScenarioId::Onslaught => build_onslaught(),
    }
}

/// Skirmish: "First Watch"
/// 3 waves, 8 total invaders, single axis (North), 8s spacing.
fn build_skirmish() -> WaveSchedule {
    let north = 0.0; // 0 radians = North

    WaveSchedule {
        waves: vec![
            // Wave 1 (t=0): 2x Walker from North
            WaveEntry::with_bearing(0, vec![(InvaderArchetype::Walker, 2)], north),
            // Wave 2 (t=8s): 2x Walker + 1x Sprinter from North
            WaveEntry::with_bearing(
                secs_to_ticks(8.0),
                vec![
                    (InvaderArchetype::Walker, 2),
                    (InvaderArchetype::Sprinter, 1),
                ],
                north,
            ),
            // Wave 3 (t=16s): 3x Walker from North
            WaveEntry::with_bearing(
                secs_to_ticks(16.0),
                vec![(InvaderArchetype::Walker, 3)],
                north,
            ),
        ],
    }
}

/// Onslaught: "Broken Gate"
/// 5 waves, 18 total invaders, three axes plus a final all-bearings wave.
fn build_onslaught() -> WaveSchedule {
    let north = 0.0;
    let east = PI / 2.0;
    let west = PI * 1.5; // 270 degrees

    WaveSchedule {
        waves: vec![
            // Wave 1 (t=0): 3x Walker from North
            WaveEntry::with_bearing(0, vec![(InvaderArchetype::Walker, 3)], north),
            // Wave 2 (t=6s): 2x Sprinter from East
            WaveEntry::with_bearing(
                secs_to_ticks(6.0),
                vec![(InvaderArchetype::Sprinter, 2)],
                east,
            ),
            // Wave 3 (t=12s): 3x Walker + 1x Sprinter from West
            WaveEntry::with_bearing(
                secs_to_ticks(12.0),
                vec![
                    (InvaderArchetype::Walker, 3),
                    (InvaderArchetype::Sprinter, 1),
                ],
                west,
            ),
            // Wave 4 (t=20s): 4x Walker from North
            WaveEntry::with_bearing(
                secs_to_ticks(20.0),
                vec![(InvaderArchetype::Walker, 4)],
                north,
            ),
            // Wave 5 (t=26s): 2x Walker + 3x Sprinter from random bearings
            WaveEntry::new(
                secs_to_ticks(26.0),
                vec![
                    (InvaderArchetype::Walker, 2),
                    (InvaderArchetype::Sprinter, 3),
                ],
            ),
        ],
    }
}

/// Convert seconds to ticks.
fn secs_to_ticks(secs: f64) -> u64 {
    (secs * TICK_RATE as f64) as u64
}
