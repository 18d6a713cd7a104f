//! Property-based tests for camera movement and body animation.
//!
//! These check the geometric invariants across arbitrary look directions,
//! key combinations and orbital phases.

use std::f32::consts::TAU;

use bevy::prelude::*;
use proptest::prelude::*;

use crate::animation::{moon_angle, moon_offset, rotate_planar};
use crate::camera::{first_person_step, focus_goal, movement_vector, MIN_STEP_SECS, MOVE_SPEED};
use crate::interaction::proximity::{debounce, first_in_range, trigger_distance};
use crate::registry::{body_data, BodyId, MoonOrbitStyle};
use crate::test_utils::{assertions, fixtures};

fn look_direction() -> impl Strategy<Value = Vec3> {
    (-1.0f32..1.0, -1.0f32..1.0, -1.0f32..1.0)
        .prop_filter("non-zero look", |(x, y, z)| x * x + y * y + z * z > 1e-4)
        .prop_map(|(x, y, z)| Vec3::new(x, y, z).normalize())
}

fn body_id() -> impl Strategy<Value = BodyId> {
    (0usize..BodyId::ALL.len()).prop_map(|i| BodyId::ALL[i])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Movement is always unit length or zero, whatever is held.
    #[test]
    fn prop_movement_is_unit_or_zero(look in look_direction(), mask in 0u8..64) {
        let v = movement_vector(look, &fixtures::held_from_mask(mask));
        assertions::assert_unit_or_zero(v, 1e-5);
    }

    /// Horizontal keys never move the camera vertically.
    #[test]
    fn prop_horizontal_keys_stay_level(look in look_direction(), mask in 0u8..16) {
        let v = movement_vector(look, &fixtures::held_from_mask(mask));
        prop_assert!(v.y.abs() < 1e-6, "vertical drift {}", v.y);
    }

    /// A step never covers less than the minimum time step.
    #[test]
    fn prop_step_length_bounded(look in look_direction(), dt in 0.0f32..0.1) {
        let held = fixtures::held_from_mask(0b00_0001);
        let step = first_person_step(look, &held, dt);
        let expected = MOVE_SPEED * dt.max(MIN_STEP_SECS);
        prop_assert!((step.length() - expected).abs() < 1e-4);
    }

    /// Moons stay on their orbit radius in both orbit styles.
    #[test]
    fn prop_moon_stays_on_orbit(
        radius in 1.0f32..40.0,
        angle in 0.0f32..TAU,
        tilt_deg in 0.0f32..30.0,
    ) {
        for style in [MoonOrbitStyle::Flat, MoonOrbitStyle::Inclined { tilt_deg }] {
            assertions::assert_on_orbit(moon_offset(style, radius, angle), Vec3::ZERO, radius, 1e-3);
        }
    }

    /// Moon phase is always within one turn.
    #[test]
    fn prop_moon_angle_wrapped(clock_ms in 0.0f64..1.0e10, rate in 0.0f64..0.01, mult in 0.0f32..10.0) {
        let angle = moon_angle(clock_ms, rate, mult);
        prop_assert!((0.0..=TAU).contains(&angle), "angle {angle}");
    }

    /// Asteroid drift keeps the distance from the star and the height.
    #[test]
    fn prop_drift_preserves_radius(
        x in -400.0f32..400.0,
        y in -2.0f32..2.0,
        z in -400.0f32..400.0,
        angle in -0.01f32..0.01,
    ) {
        let p = Vec3::new(x, y, z);
        let rotated = rotate_planar(p, angle);
        prop_assert_eq!(rotated.y, p.y);
        let before = Vec2::new(p.x, p.z).length();
        let after = Vec2::new(rotated.x, rotated.z).length();
        prop_assert!((before - after).abs() < 1e-2, "{before} vs {after}");
    }

    /// The focus goal sits exactly `offset` away from its target.
    #[test]
    fn prop_focus_goal_distance(
        camera in (-300.0f32..300.0, -300.0f32..300.0, -300.0f32..300.0),
        body in body_id(),
    ) {
        let target = fixtures::rest_position(body);
        let offset = body_data(body).focus_offset;
        let goal = focus_goal(Vec3::new(camera.0, camera.1, camera.2), target, offset);
        assertions::assert_on_orbit(goal, target, offset, 1e-2);
    }

    /// A camera inside a body's trigger sphere always finds some body.
    #[test]
    fn prop_inside_sphere_is_a_hit(body in body_id(), look in look_direction(), fraction in 0.0f32..0.99) {
        let center = fixtures::rest_position(body);
        let reach = trigger_distance(Some(body_data(body).radius));
        let camera = center + look * reach * fraction;
        prop_assert!(first_in_range(camera, &[(body, center)]).is_some());
    }

    /// However long the camera stays in one sphere, it narrates once.
    #[test]
    fn prop_debounce_narrates_once(body in body_id(), ticks in 1usize..200) {
        let mut last = None;
        let fired = (0..ticks)
            .filter(|_| debounce(&mut last, Some(body)).is_some())
            .count();
        prop_assert_eq!(fired, 1);
    }
}
