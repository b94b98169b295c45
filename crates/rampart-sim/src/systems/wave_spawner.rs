//! Wave spawning system — spawns invader waves at scheduled ticks.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use rampart_core::enums::InvaderArchetype;
use rampart_core::events::GameEvent;

/// A single wave definition.
#[derive(Debug, Clone)]
pub struct WaveEntry {
    /// Tick at which this wave spawns.
    pub spawn_at_tick: u64,
    /// Invaders to spawn: (archetype, count).
    pub invaders: Vec<(InvaderArchetype, u32)>,
    /// Approach bearing in radians, or `None` to roll one per invader.
    pub bearing: Option<f64>,
    /// Whether this wave has already been spawned.
    pub spawned: bool,
}

impl WaveEntry {
    /// Wave approaching from random bearings.
    pub fn new(spawn_at_tick: u64, invaders: Vec<(InvaderArchetype, u32)>) -> Self {
        Self {
            spawn_at_tick,
            invaders,
            bearing: None,
            spawned: false,
        }
    }

    /// Wave approaching from a fixed bearing.
    pub fn with_bearing(
        spawn_at_tick: u64,
        invaders: Vec<(InvaderArchetype, u32)>,
        bearing: f64,
    ) -> Self {
        Self {
            spawn_at_tick,
            invaders,
            bearing: Some(bearing),
            spawned: false,
        }
    }

    /// Number of invaders in this wave.
    fn invader_count(&self) -> u32 {
        self.invaders.iter().map(|(_, count)| count).sum()
    }
}

/// The complete wave schedule for a mission.
#[derive(Debug, Clone, Default)]
pub struct WaveSchedule {
    pub waves: Vec<WaveEntry>,
}

impl WaveSchedule {
    /// Total number of invaders across all waves.
    pub fn total_invaders(&self) -> u32 {
        self.waves
            .iter()
            .flat_map(|w| w.invaders.iter())
            .map(|(_, count)| count)
            .sum()
    }

    /// True once every scheduled wave has spawned. An empty schedule counts
    /// as fully spawned.
    pub fn all_spawned(&self) -> bool {
        self.waves.iter().all(|w| w.spawned)
    }
}

/// Check the schedule and spawn any due waves.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    schedule: &mut WaveSchedule,
    next_invader_id: &mut u32,
    current_tick: u64,
    events: &mut Vec<GameEvent>,
) {
    for (wave_index, wave) in schedule.waves.iter_mut().enumerate() {
        if !wave.spawned && current_tick >= wave.spawn_at_tick {
            for &(archetype, count) in &wave.invaders {
                for _ in 0..count {
                    let bearing = wave
                        .bearing
                        .unwrap_or_else(|| rng.gen_range(0.0..std::f64::consts::TAU));
                    crate::world_setup::spawn_invader(
                        world,
                        rng,
                        next_invader_id,
                        archetype,
                        bearing,
                    );
                }
            }
            wave.spawned = true;

            let invader_count = wave.invader_count() as usize;
            events.push(GameEvent::WaveLaunched {
                wave_index,
                invader_count,
            });
            info!("wave {} launched: {} invaders", wave_index, invader_count);
        }
    }
}
