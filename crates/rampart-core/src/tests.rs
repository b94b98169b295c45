#[cfg(test)]
mod tests {
    use glam::DVec3;

    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{Position, SimTime, Velocity};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Idle,
            GamePhase::Active,
            GamePhase::Paused,
            GamePhase::MissionComplete,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_fire_doctrine_serde() {
        let variants = vec![FireDoctrine::Free, FireDoctrine::Hold];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: FireDoctrine = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_invader_enums_serde() {
        let archetypes = vec![InvaderArchetype::Walker, InvaderArchetype::Sprinter];
        for v in archetypes {
            let json = serde_json::to_string(&v).unwrap();
            let back: InvaderArchetype = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
        let phases = vec![
            InvaderPhase::Advancing,
            InvaderPhase::Slain,
            InvaderPhase::Breached,
        ];
        for v in phases {
            let json = serde_json::to_string(&v).unwrap();
            let back: InvaderPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartMission {
                scenario: ScenarioId::Skirmish,
            },
            PlayerCommand::Pause,
            PlayerCommand::Resume,
            PlayerCommand::ReturnToIdle,
            PlayerCommand::SetDoctrine {
                mode: FireDoctrine::Hold,
            },
            PlayerCommand::SetTimeScale { scale: 2.0 },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify GameEvent round-trips through serde.
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::WaveLaunched {
                wave_index: 0,
                invader_count: 3,
            },
            GameEvent::ShotFired {
                tower_id: 1,
                bearing: 1.5,
                flight_secs: 0.05,
            },
            GameEvent::ProjectileHit {
                tower_id: 1,
                invader_id: 4,
                remaining_hp: 20,
            },
            GameEvent::InvaderSlain {
                invader_id: 4,
                tower_id: 1,
            },
            GameEvent::InvaderBreached { invader_id: 9 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: GameEvent = serde_json::from_str(&json).unwrap();
        }
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        // Verify the default snapshot is reasonably small
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify Position geometry calculations.
    #[test]
    fn test_position_range() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 0.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-10);
        assert!((a.horizontal_range_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_position_bearing() {
        let origin = Position::new(0.0, 0.0, 0.0);

        // Due North (positive Y)
        let north = Position::new(0.0, 100.0, 0.0);
        assert!((origin.bearing_to(&north) - 0.0).abs() < 1e-10);

        // Due East (positive X)
        let east = Position::new(100.0, 0.0, 0.0);
        let expected_east = std::f64::consts::FRAC_PI_2;
        assert!(
            (origin.bearing_to(&east) - expected_east).abs() < 1e-10,
            "East bearing should be PI/2, got {}",
            origin.bearing_to(&east)
        );
    }

    /// Verify the DVec3 bridges used by the ballistics crate.
    #[test]
    fn test_dvec3_bridges() {
        let p = Position::new(1.0, -2.0, 3.5);
        assert_eq!(p.as_dvec3(), DVec3::new(1.0, -2.0, 3.5));
        assert_eq!(Position::from_dvec3(p.as_dvec3()), p);

        let v = Velocity::new(-4.0, 0.5, 0.0);
        assert_eq!(v.as_dvec3(), DVec3::new(-4.0, 0.5, 0.0));
        assert_eq!(Velocity::from_dvec3(v.as_dvec3()), v);
    }

    /// Verify Velocity calculations.
    #[test]
    fn test_velocity_speed() {
        let v = Velocity::new(3.0, 4.0, 0.0);
        assert!((v.speed() - 5.0).abs() < 1e-10);
        assert!((v.horizontal_speed() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_velocity_heading() {
        // Heading north (positive Y)
        let north = Velocity::new(0.0, 10.0, 0.0);
        assert!((north.heading() - 0.0).abs() < 1e-10);

        // Heading east (positive X)
        let east = Velocity::new(10.0, 0.0, 0.0);
        let expected = std::f64::consts::FRAC_PI_2;
        assert!((east.heading() - expected).abs() < 1e-10);
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..30 {
            time.advance();
        }
        assert_eq!(time.tick, 30);
        // 30 ticks at 30Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }
}
