#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::catalog::*;
    use crate::commands::{LaunchOptions, PlayerCommand};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{InputSnapshot, ScreenPoint, SimTime, Viewport};

    #[test]
    fn test_catalog_ids_unique() {
        let mut seen = HashSet::new();
        for entity in SEA_ENTITIES {
            assert!(seen.insert(entity.id), "duplicate id {}", entity.id);
        }
        assert_eq!(SEA_ENTITIES.len(), 46);
    }

    #[test]
    fn test_catalog_depths_in_range() {
        for entity in SEA_ENTITIES {
            assert!(entity.depth >= 0.0, "{} above the surface", entity.id);
            assert!(entity.depth <= MAX_DEPTH, "{} below the floor", entity.id);
            assert!(entity.scale > 0.0);
        }
    }

    #[test]
    fn test_catalog_ocean_tags_are_known() {
        for entity in SEA_ENTITIES {
            if let Some(oceans) = entity.oceans {
                for ocean in oceans {
                    assert!(find_ocean(ocean).is_some(), "{} names unknown ocean {ocean}", entity.id);
                }
            }
        }
    }

    #[test]
    fn test_untagged_entity_is_everywhere() {
        let orca = find_entity("orca").unwrap();
        assert!(orca.oceans.is_none());
        for ocean in OCEANS {
            assert!(orca.in_ocean(ocean.id));
        }

        let titanic = find_entity("titanic").unwrap();
        assert!(titanic.in_ocean("atlantic"));
        assert!(!titanic.in_ocean("pacific"));
    }

    #[test]
    fn test_mission_targets_resolve() {
        for template in MISSION_TEMPLATES {
            let matched = SEA_ENTITIES
                .iter()
                .any(|e| e.id == template.target_id || e.id.contains(template.target_id));
            assert!(matched, "mission target {} matches nothing", template.target_id);
        }
    }

    #[test]
    fn test_starter_vessel_is_free() {
        let starter = find_vessel(STARTER_VESSEL_ID).unwrap();
        assert_eq!(starter.price, 0);
        assert_eq!(starter.ammo_capacity, 20);
        assert!(find_vessel("submarine-x").is_none());
    }

    #[test]
    fn test_zone_lookup() {
        assert_eq!(zone_at(0.0).name, "Epipelagic Zone (Sunlight)");
        assert_eq!(zone_at(199.9).name, "Epipelagic Zone (Sunlight)");
        assert_eq!(zone_at(200.0).name, "Mesopelagic Zone (Twilight)");
        assert_eq!(zone_at(3999.0).name, "Bathypelagic Zone (Midnight)");
        assert_eq!(zone_at(MAX_DEPTH).name, "Hadalpelagic Zone (The Trenches)");
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..FRAME_RATE {
            time.advance(DT);
        }
        assert_eq!(time.tick, FRAME_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_joystick_magnitude_clamped() {
        let input = InputSnapshot::joystick(3.0, 4.0);
        let v = input.clamped_joystick();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!((v.x - 0.6).abs() < 1e-6);

        let small = InputSnapshot::joystick(0.3, 0.0);
        assert_eq!(small.clamped_joystick().x, 0.3);
    }

    #[test]
    fn test_screen_point_to_pixels() {
        let viewport = Viewport::default();
        let px = ScreenPoint::CENTER.to_pixels(&viewport);
        assert_eq!(px.x, 640.0);
        assert_eq!(px.y, 360.0);
    }

    #[test]
    fn test_player_command_tagged_serde() {
        let cmd = PlayerCommand::Launch(LaunchOptions {
            vessel_id: "classic".into(),
            ocean_id: "pacific".into(),
            mode: GameMode::Combat,
            catalogued: vec![],
        });
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"Launch\""));
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, back);

        let inspect: PlayerCommand =
            serde_json::from_str(r#"{"type":"InspectAt","x":12.5,"y":40.0}"#).unwrap();
        assert_eq!(inspect, PlayerCommand::InspectAt { x: 12.5, y: 40.0 });
    }

    #[test]
    fn test_launch_options_catalogued_defaults_empty() {
        let json = r#"{"vessel_id":"classic","ocean_id":"indian","mode":"Exploration"}"#;
        let opts: LaunchOptions = serde_json::from_str(json).unwrap();
        assert!(opts.catalogued.is_empty());
    }

    #[test]
    fn test_snapshot_default_serializes() {
        let mut snapshot = GameStateSnapshot::default();
        snapshot.events.push(GameEvent::Kill {
            entity_id: "orca".into(),
            hostile: true,
        });
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"mode\":\"Intro\""));
        assert!(json.contains("\"type\":\"Kill\""));
    }

    #[test]
    fn test_terminal_modes() {
        assert!(AppMode::GameOver.is_terminal());
        assert!(AppMode::GameWon.is_terminal());
        assert!(!AppMode::Game.is_terminal());
        assert!(!AppMode::Menu.is_terminal());
    }
}
