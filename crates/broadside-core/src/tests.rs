#[cfg(test)]
mod tests {
    use glam::DVec2;

    use crate::commands::{PlayerCommand, PlayerIntents};
    use crate::components::Health;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::{dispatch_all, Presentation, PresentationEvent};
    use crate::geometry::{convex_overlap, heading_vector, Frame, Obb, Segment, Triangle};
    use crate::types::{Arena, EntityId, Position, SimTime};

    fn footprint_at(x: f64, y: f64, heading: f64) -> Obb {
        Obb::new(DVec2::new(x, y), 70.0, 20.0, heading)
    }

    // ---- Geometry ----

    #[test]
    fn test_heading_vector_screen_convention() {
        let east = heading_vector(0.0);
        assert!((east.x - 1.0).abs() < 1e-12 && east.y.abs() < 1e-12);

        // 90° points down the screen.
        let south = heading_vector(90.0);
        assert!(south.x.abs() < 1e-12 && (south.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_frame_starboard_is_clockwise() {
        let frame = Frame::new(DVec2::new(100.0, 100.0), 0.0);
        let port = frame.to_world(DVec2::new(0.0, -10.0));
        let starboard = frame.to_world(DVec2::new(0.0, 10.0));
        assert!((port.y - 90.0).abs() < 1e-12, "port should be up the screen");
        assert!((starboard.y - 110.0).abs() < 1e-12);

        let back = frame.to_local(starboard);
        assert!((back - DVec2::new(0.0, 10.0)).length() < 1e-12);
    }

    #[test]
    fn test_axis_aligned_overlap() {
        let a = footprint_at(0.0, 0.0, 0.0);
        assert!(a.overlaps(&footprint_at(60.0, 0.0, 0.0)));
        assert!(a.overlaps(&footprint_at(70.0, 0.0, 0.0)), "touching counts");
        assert!(!a.overlaps(&footprint_at(80.0, 0.0, 0.0)));
        assert!(!a.overlaps(&footprint_at(0.0, 25.0, 0.0)));
    }

    #[test]
    fn test_rotated_boxes_separated_despite_bounding_box_overlap() {
        // Two parallel 45° hulls side by side: their axis-aligned bounds
        // overlap, their rotated footprints do not.
        let a = footprint_at(0.0, 0.0, 45.0);
        let offset = heading_vector(45.0).perp() * 30.0;
        let b = footprint_at(offset.x, offset.y, 45.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));

        let closer = heading_vector(45.0).perp() * 15.0;
        let c = footprint_at(closer.x, closer.y, 45.0);
        assert!(a.overlaps(&c));
    }

    #[test]
    fn test_crossed_hulls_overlap() {
        let a = footprint_at(100.0, 100.0, 0.0);
        let b = footprint_at(100.0, 100.0, 90.0);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_point_containment_follows_rotation() {
        let upright = footprint_at(100.0, 100.0, 90.0);
        assert!(upright.contains(DVec2::new(100.0, 130.0)));
        assert!(!upright.contains(DVec2::new(120.0, 100.0)));

        let level = footprint_at(100.0, 100.0, 0.0);
        assert!(level.contains(DVec2::new(120.0, 100.0)));
        assert!(!level.contains(DVec2::new(100.0, 130.0)));
    }

    #[test]
    fn test_segment_against_footprint() {
        let hull = footprint_at(0.0, 0.0, 0.0);
        let crossing = Segment::new(DVec2::new(0.0, -100.0), DVec2::new(0.0, 100.0));
        let beside = Segment::new(DVec2::new(50.0, -100.0), DVec2::new(50.0, 100.0));
        assert!(hull.overlaps_shape(&crossing.vertices()));
        assert!(!hull.overlaps_shape(&beside.vertices()));
    }

    #[test]
    fn test_triangle_against_footprint() {
        let wedge = Triangle([
            DVec2::new(0.0, 0.0),
            DVec2::new(150.0, 0.0),
            DVec2::new(150.0, -100.0),
        ]);
        assert!(footprint_at(120.0, -40.0, 0.0).overlaps_shape(wedge.vertices()));
        // Below the wedge's base line.
        assert!(!footprint_at(120.0, 40.0, 0.0).overlaps_shape(wedge.vertices()));
        // Across the hypotenuse, near the apex side.
        assert!(!footprint_at(20.0, -80.0, 90.0).overlaps_shape(wedge.vertices()));
    }

    #[test]
    fn test_convex_overlap_empty_shape() {
        assert!(!convex_overlap(&[], &[DVec2::ZERO]));
    }

    #[test]
    fn test_triangle_inside_arena() {
        let arena = Arena::new(200.0, 200.0);
        let inside = Triangle([
            DVec2::new(10.0, 10.0),
            DVec2::new(190.0, 10.0),
            DVec2::new(100.0, 190.0),
        ]);
        let poking_out = Triangle([
            DVec2::new(10.0, 10.0),
            DVec2::new(210.0, 10.0),
            DVec2::new(100.0, 190.0),
        ]);
        assert!(inside.inside(&arena));
        assert!(!poking_out.inside(&arena));
    }

    // ---- Types ----

    #[test]
    fn test_position_advanced() {
        let p = Position::new(100.0, 100.0).advanced(-90.0, 100.0);
        assert!((p.x - 100.0).abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
    }

    #[test]
    fn test_sim_time_sixty_ticks_one_second() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_arena_validation() {
        assert!(Arena::new(800.0, 600.0).validate().is_ok());
        assert_eq!(
            Arena::new(-1.0, 600.0).validate(),
            Err(ConfigError::InvalidArena {
                width: -1.0,
                height: 600.0
            })
        );
        assert!(Arena::new(800.0, 0.0).validate().is_err());
        assert!(Arena::new(f64::NAN, 600.0).validate().is_err());
    }

    #[test]
    fn test_config_error_messages() {
        let msg = ConfigError::InvalidEnemyCount(7).to_string();
        assert_eq!(msg, "enemy count must be between 1 and 5, got 7");
    }

    // ---- Components ----

    #[test]
    fn test_health_critical_threshold() {
        let mut health = Health::full();
        assert!(!health.is_critical());
        health.current = 25;
        assert!(health.is_critical());
        health.current = 0;
        assert!(health.is_sunk());
    }

    // ---- Commands ----

    #[test]
    fn test_intents_collect_and_iterate_in_order() {
        let intents: PlayerIntents = [Intent::FireRight, Intent::Accelerate, Intent::TurnLeft]
            .into_iter()
            .collect();
        let held: Vec<Intent> = intents.iter().collect();
        assert_eq!(
            held,
            vec![Intent::Accelerate, Intent::TurnLeft, Intent::FireRight]
        );

        let mut intents = intents;
        intents.remove(Intent::Accelerate);
        assert!(!intents.contains(Intent::Accelerate));
        assert!(!intents.is_empty());
        assert!(PlayerIntents::none().is_empty());
    }

    #[test]
    fn test_player_command_tagged_json() {
        let json = serde_json::to_string(&PlayerCommand::Configure { enemy_count: 2 }).unwrap();
        assert_eq!(json, r#"{"type":"Configure","enemy_count":2}"#);

        let back: PlayerCommand = serde_json::from_str(r#"{"type":"Pause"}"#).unwrap();
        assert!(matches!(back, PlayerCommand::Pause));
    }

    // ---- Presentation contract ----

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Presentation for Recorder {
        fn attach_visual(&mut self, entity: EntityId, kind: EntityKind, model: u8) {
            self.calls.push(format!("attach {entity} {kind:?} {model}"));
        }
        fn detach_visual(&mut self, entity: EntityId) {
            self.calls.push(format!("detach {entity}"));
        }
        fn on_health_changed(&mut self, ship: EntityId, current: i32, max: i32, critical: bool) {
            self.calls
                .push(format!("health {ship} {current}/{max} {critical}"));
        }
        fn on_entity_destroyed(&mut self, entity: EntityId, _position: Position, size: f64) {
            self.calls.push(format!("destroyed {entity} {size}"));
        }
        fn on_game_ended(&mut self, player_won: bool) {
            self.calls.push(format!("ended {player_won}"));
        }
    }

    #[test]
    fn test_dispatch_routes_each_event() {
        let events = vec![
            PresentationEvent::AttachVisual {
                entity: EntityId(1),
                kind: EntityKind::EnemyShip,
                model: 3,
            },
            PresentationEvent::HealthChanged {
                ship: EntityId(1),
                current: 90,
                max: 100,
                critical: false,
            },
            PresentationEvent::EntityDestroyed {
                entity: EntityId(1),
                position: Position::new(1.0, 2.0),
                size: 100.0,
            },
            PresentationEvent::DetachVisual {
                entity: EntityId(1),
            },
            PresentationEvent::GameEnded { player_won: true },
        ];

        let mut recorder = Recorder::default();
        dispatch_all(&events, &mut recorder);

        assert_eq!(
            recorder.calls,
            vec![
                "attach #1 EnemyShip 3",
                "health #1 90/100 false",
                "destroyed #1 100",
                "detach #1",
                "ended true",
            ]
        );
    }

    #[test]
    fn test_board_side_offsets() {
        assert_eq!(BoardSide::Left.heading_offset(), -90.0);
        assert_eq!(BoardSide::Right.heading_offset(), 90.0);
        assert_eq!(Steering::Straight.turn(), None);
        assert_eq!(Steering::TurnLeft.turn(), Some(TurnDirection::Left));
    }
}
