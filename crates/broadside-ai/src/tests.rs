#[cfg(test)]
mod tests {
    use glam::DVec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use broadside_core::constants::*;
    use broadside_core::enums::{BoardSide, Steering};
    use broadside_core::geometry::Obb;
    use broadside_core::types::Arena;

    use crate::policy::{
        choose_steering, choose_target, evaluate, random_steering, steering_for_draw,
        PolicyContext,
    };
    use crate::sensors::SensorRig;

    fn arena() -> Arena {
        Arena::new(1000.0, 600.0)
    }

    fn hull(x: f64, y: f64, heading: f64) -> Obb {
        Obb::new(DVec2::new(x, y), FOOTPRINT_LENGTH, FOOTPRINT_BEAM, heading)
    }

    fn make_context(x: f64, y: f64, heading: f64, contacts: &[Obb]) -> PolicyContext<'_> {
        PolicyContext {
            rig: SensorRig::mounted(DVec2::new(x, y), heading),
            arena: arena(),
            contacts,
            player: None,
            previous: Steering::Straight,
        }
    }

    // ---- Sensor rig ----

    #[test]
    fn test_rig_geometry_heading_east() {
        let rig = SensorRig::mounted(DVec2::new(500.0, 300.0), 0.0);
        let [apex, ahead, port_corner] = rig.left_wedge.0;
        assert!((apex - DVec2::new(500.0, 300.0)).length() < 1e-9);
        assert!((ahead - DVec2::new(650.0, 300.0)).length() < 1e-9);
        assert!((port_corner - DVec2::new(650.0, 200.0)).length() < 1e-9);

        assert!((rig.left_board.end - DVec2::new(500.0, -100.0)).length() < 1e-9);
        assert!((rig.right_board.end - DVec2::new(500.0, 700.0)).length() < 1e-9);
    }

    #[test]
    fn test_rig_rotates_with_heading() {
        // Facing down the screen, port is towards +x.
        let rig = SensorRig::mounted(DVec2::new(500.0, 300.0), 90.0);
        assert!((rig.left_board.end - DVec2::new(900.0, 300.0)).length() < 1e-9);
        assert!((rig.right_board.end - DVec2::new(100.0, 300.0)).length() < 1e-9);
        assert!(choose_target(&rig, Some(&hull(700.0, 300.0, 0.0))) == Some(BoardSide::Left));
    }

    // ---- Collision avoidance ----

    #[test]
    fn test_contact_in_left_wedge_steers_right() {
        let contacts = [hull(620.0, 240.0, 0.0)];
        let ctx = make_context(500.0, 300.0, 0.0, &contacts);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(choose_steering(&ctx, &mut rng), Steering::TurnRight);
    }

    #[test]
    fn test_contact_in_right_wedge_steers_left() {
        let contacts = [hull(620.0, 360.0, 0.0)];
        let ctx = make_context(500.0, 300.0, 0.0, &contacts);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(choose_steering(&ctx, &mut rng), Steering::TurnLeft);
    }

    #[test]
    fn test_contact_in_both_wedges_holds_course() {
        let contacts = [hull(620.0, 300.0, 90.0)];
        let ctx = make_context(500.0, 300.0, 0.0, &contacts);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(choose_steering(&ctx, &mut rng), Steering::Straight);
    }

    #[test]
    fn test_first_detecting_contact_wins() {
        // Far contact first (no detection), then one in the right wedge,
        // then one in the left wedge which is never reached.
        let contacts = [
            hull(100.0, 100.0, 0.0),
            hull(620.0, 360.0, 0.0),
            hull(620.0, 240.0, 0.0),
        ];
        let ctx = make_context(500.0, 300.0, 0.0, &contacts);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(choose_steering(&ctx, &mut rng), Steering::TurnLeft);
    }

    #[test]
    fn test_undetected_contacts_fall_back_to_random() {
        let contacts = [hull(100.0, 100.0, 0.0), hull(900.0, 500.0, 45.0)];
        let ctx = make_context(500.0, 300.0, 0.0, &contacts);

        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut mirror = rng.clone();
            assert_eq!(
                choose_steering(&ctx, &mut rng),
                random_steering(&mut mirror),
                "seed {seed}: fallback should be exactly one random draw"
            );
        }
    }

    #[test]
    fn test_no_contacts_keeps_previous_decision() {
        let mut ctx = make_context(500.0, 300.0, 0.0, &[]);
        ctx.previous = Steering::TurnLeft;
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(choose_steering(&ctx, &mut rng), Steering::TurnLeft);
    }

    // ---- Boundary avoidance ----

    #[test]
    fn test_left_wedge_outside_steers_right() {
        // Near the top edge heading east: the port wedge crosses y = 0.
        let ctx = make_context(500.0, 80.0, 0.0, &[]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(choose_steering(&ctx, &mut rng), Steering::TurnRight);
    }

    #[test]
    fn test_right_wedge_outside_steers_left() {
        let ctx = make_context(500.0, 520.0, 0.0, &[]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(choose_steering(&ctx, &mut rng), Steering::TurnLeft);
    }

    #[test]
    fn test_boundary_overrides_random_fallback() {
        let contacts = [hull(100.0, 500.0, 0.0)];
        let ctx = make_context(500.0, 80.0, 0.0, &contacts);
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            assert_eq!(choose_steering(&ctx, &mut rng), Steering::TurnRight);
        }
    }

    #[test]
    fn test_detected_contact_skips_boundary_check() {
        // Port wedge is outside the arena, but a contact in the starboard
        // wedge settles the decision first.
        let contacts = [hull(620.0, 140.0, 0.0)];
        let ctx = make_context(500.0, 80.0, 0.0, &contacts);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(choose_steering(&ctx, &mut rng), Steering::TurnLeft);
    }

    // ---- Targeting ----

    #[test]
    fn test_player_on_port_line_fires_left() {
        let rig = SensorRig::mounted(DVec2::new(500.0, 300.0), 0.0);
        assert_eq!(
            choose_target(&rig, Some(&hull(500.0, 150.0, 0.0))),
            Some(BoardSide::Left)
        );
        assert_eq!(
            choose_target(&rig, Some(&hull(500.0, 450.0, 0.0))),
            Some(BoardSide::Right)
        );
        assert_eq!(choose_target(&rig, Some(&hull(800.0, 300.0, 0.0))), None);
        assert_eq!(choose_target(&rig, None), None);
    }

    #[test]
    fn test_player_beyond_line_length_is_ignored() {
        let rig = SensorRig::mounted(DVec2::new(500.0, 500.0), 0.0);
        // Port line ends at y = 100; the footprint sits above it.
        assert_eq!(choose_target(&rig, Some(&hull(500.0, 50.0, 0.0))), None);
    }

    #[test]
    fn test_fire_and_steer_in_same_tick() {
        let contacts = [hull(620.0, 240.0, 0.0), hull(500.0, 150.0, 0.0)];
        let mut ctx = make_context(500.0, 300.0, 0.0, &contacts);
        ctx.player = Some(contacts[1]);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let decision = evaluate(&ctx, &mut rng);
        assert_eq!(decision.fire, Some(BoardSide::Left));
        assert_eq!(decision.steering, Steering::TurnRight);
    }

    // ---- Random fallback ----

    #[test]
    fn test_draw_cutoffs() {
        assert_eq!(steering_for_draw(0), Steering::Straight);
        assert_eq!(steering_for_draw(1), Steering::TurnLeft);
        assert_eq!(steering_for_draw(499), Steering::TurnLeft);
        assert_eq!(steering_for_draw(500), Steering::Straight);
        assert_eq!(steering_for_draw(1000), Steering::Straight);
        assert_eq!(steering_for_draw(1500), Steering::Straight);
        assert_eq!(steering_for_draw(1501), Steering::TurnRight);
        assert_eq!(steering_for_draw(1999), Steering::TurnRight);
    }

    #[test]
    fn test_random_fallback_frequencies() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let samples = 200_000;
        let (mut left, mut straight, mut right) = (0u32, 0u32, 0u32);
        for _ in 0..samples {
            match random_steering(&mut rng) {
                Steering::TurnLeft => left += 1,
                Steering::Straight => straight += 1,
                Steering::TurnRight => right += 1,
            }
        }
        let frac = |n: u32| f64::from(n) / f64::from(samples);
        assert!((frac(straight) - 0.5).abs() < 0.01, "straight {}", frac(straight));
        assert!((frac(left) - 0.25).abs() < 0.01, "left {}", frac(left));
        assert!((frac(right) - 0.25).abs() < 0.01, "right {}", frac(right));
        // Holding course or one side: three quarters of all draws.
        assert!((frac(straight + left) - 0.75).abs() < 0.01);
    }
}
