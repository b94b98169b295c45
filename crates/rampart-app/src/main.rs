//! Headless mission runner — drives the simulation engine from the command
//! line, free-running or paced at 30Hz.

use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rampart_core::commands::PlayerCommand;
use rampart_core::constants::TICK_RATE;
use rampart_core::enums::{GamePhase, ScenarioId};
use rampart_sim::engine::{SimConfig, SimulationEngine};

/// Nominal duration of one tick at 1x speed.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

#[derive(Parser)]
#[command(author, version, about = "Rampart headless mission runner", long_about = None)]
struct Args {
    /// Scenario to run: "skirmish" or "onslaught"
    #[arg(short, long, default_value = "skirmish")]
    scenario: String,

    /// RNG seed (same seed = same mission)
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Simulation speed multiplier, clamped to 0..4
    #[arg(long, default_value_t = 1.0)]
    time_scale: f64,

    /// Stop after this many ticks even if the mission is still running
    #[arg(long, default_value_t = 18_000)]
    max_ticks: u64,

    /// Pace ticks against the wall clock instead of free-running
    #[arg(long, default_value_t = false)]
    realtime: bool,

    /// Print the final snapshot as JSON on exit
    #[arg(long, default_value_t = false)]
    dump_final_snapshot: bool,
}

fn parse_scenario(name: &str) -> Result<ScenarioId> {
    match name.to_ascii_lowercase().as_str() {
        "skirmish" => Ok(ScenarioId::Skirmish),
        "onslaught" => Ok(ScenarioId::Onslaught),
        other => bail!("unknown scenario {other:?} (expected \"skirmish\" or \"onslaught\")"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let scenario = parse_scenario(&args.scenario)?;

    let config = SimConfig {
        seed: args.seed,
        time_scale: args.time_scale,
        ..Default::default()
    };
    let mut engine = SimulationEngine::new(config)?;
    engine.queue_command(PlayerCommand::StartMission { scenario });

    info!(
        "running {:?} (seed {}, time scale {})",
        scenario, args.seed, args.time_scale
    );

    let mut next_tick_time = Instant::now();
    let mut last_snapshot = None;

    for _ in 0..args.max_ticks {
        let snapshot = engine.tick();
        let done = snapshot.phase == GamePhase::MissionComplete;
        last_snapshot = Some(snapshot);
        if done {
            break;
        }

        if args.realtime {
            // Sleep until the next tick boundary, adjusting for time scale.
            let time_scale = engine.time_scale();
            let effective_tick_duration = if time_scale > 0.001 {
                TICK_DURATION.div_f64(time_scale)
            } else {
                TICK_DURATION
            };

            next_tick_time += effective_tick_duration;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > effective_tick_duration * 2 {
                // Too far behind — reset to avoid catch-up spiral
                next_tick_time = now;
            }
        }
    }

    let Some(snapshot) = last_snapshot else {
        bail!("mission never ticked (max-ticks was 0)");
    };

    if snapshot.phase != GamePhase::MissionComplete {
        warn!(
            "mission still running after {} ticks (phase {:?})",
            snapshot.time.tick, snapshot.phase
        );
    }

    let score = &snapshot.score;
    info!(
        "final score: {}/{} slain, {} breached, {}/{} shots hit, keep {}",
        score.invaders_slain,
        score.invaders_total,
        score.invaders_breached,
        score.shots_hit,
        score.shots_fired,
        if score.keep_intact { "intact" } else { "breached" }
    );

    if args.dump_final_snapshot {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }

    Ok(())
}
