//! Headless Bevy integration tests.
//!
//! These tests verify the animation and camera systems run correctly without
//! a GPU or a window.

mod common;

use bevy::prelude::*;
use common::{advance, tour_app};
use solar_tour::animation::ASTEROID_DRIFT;
use solar_tour::camera::{CameraFocus, CameraMode, MainCamera, OVERHEAD_POSITION, START_POSITION};
use solar_tour::interaction::ExplorationState;
use solar_tour::registry::{body_data, BodyId};
use solar_tour::scene::{Asteroid, Body, Moon};
use solar_tour::types::Settings;

fn camera_transform(app: &mut App) -> Transform {
    let mut query = app
        .world_mut()
        .query_filtered::<&Transform, With<MainCamera>>();
    query.single(app.world()).copied().unwrap_or_default()
}

fn spawn_pivot(app: &mut App, id: BodyId) -> Entity {
    let world = app.world_mut();
    let pivot = world.spawn(Transform::default()).id();
    world.entity_mut(pivot).insert(Body {
        id,
        pivot,
        spin_node: pivot,
        mesh: pivot,
        atmosphere: None,
        ring: None,
        orbit_guide: None,
        moons: Vec::new(),
    });
    pivot
}

#[test]
fn test_resources_initialize() {
    let (app, _) = tour_app();
    let world = app.world();

    assert_eq!(*world.resource::<Settings>(), Settings::default());
    let state = world.resource::<ExplorationState>();
    assert!(state.movement_enabled);
    assert_eq!(state.visited_count(), 0);
    assert!(world.resource::<CameraFocus>().target.is_none());
}

#[test]
fn test_camera_starts_looking_at_star() {
    let (mut app, _) = tour_app();
    let transform = camera_transform(&mut app);

    assert_eq!(transform.translation, START_POSITION);
    let to_star = (-START_POSITION).normalize();
    assert!(transform.forward().as_vec3().dot(to_star) > 0.999);
}

#[test]
fn test_revolution_follows_orbit_multiplier() {
    let (mut app, _) = tour_app();
    let pivot = spawn_pivot(&mut app, BodyId::Earth);

    app.update();
    let one = app.world().get::<Transform>(pivot).map(|t| t.rotation).unwrap_or_default();

    app.world_mut().resource_mut::<Settings>().orbit_speed = 0.0;
    app.update();
    let frozen = app.world().get::<Transform>(pivot).map(|t| t.rotation).unwrap_or_default();

    // Rotating +X about Y by a sends it to (cos a, 0, -sin a).
    let swept = one * Vec3::X;
    let angle = (-swept.z).atan2(swept.x);
    assert!((angle - body_data(BodyId::Earth).orbit_rate).abs() < 1e-6);
    assert_eq!(one, frozen, "orbit speed 0 must freeze revolution");
}

#[test]
fn test_moon_stays_at_orbit_radius() {
    let (mut app, _) = tour_app();
    let data = &body_data(BodyId::Earth).moons[0];
    let moon = app
        .world_mut()
        .spawn((Moon { body: BodyId::Earth, data }, Transform::default()))
        .id();

    let center = Vec3::new(body_data(BodyId::Earth).orbit_distance, 0.0, 0.0);
    for _ in 0..20 {
        app.update();
        let pos = app.world().get::<Transform>(moon).map(|t| t.translation).unwrap_or_default();
        assert!((pos.distance(center) - data.orbit_radius).abs() < 1e-3);
    }
}

#[test]
fn test_asteroids_drift_around_star() {
    let (mut app, _) = tour_app();
    let start = Vec3::new(140.0, 0.5, 0.0);
    let rock = app
        .world_mut()
        .spawn((Asteroid, Transform::from_translation(start)))
        .id();

    for _ in 0..10 {
        app.update();
    }
    let pos = app.world().get::<Transform>(rock).map(|t| t.translation).unwrap_or_default();

    assert!((Vec2::new(pos.x, pos.z).length() - 140.0).abs() < 1e-2);
    assert_eq!(pos.y, 0.5);
    let swept = Vec2::new(start.x, start.z).angle_to(Vec2::new(pos.x, pos.z)).abs();
    assert!((swept - 10.0 * ASTEROID_DRIFT).abs() < 1e-4, "swept {swept}");
}

#[test]
fn test_overhead_mode_eases_toward_fixed_point() {
    let (mut app, _) = tour_app();
    app.world_mut().resource_mut::<ExplorationState>().camera_mode = CameraMode::Overhead;

    let before = camera_transform(&mut app).translation.distance(OVERHEAD_POSITION);
    advance(&mut app, 1.0);
    let after = camera_transform(&mut app).translation.distance(OVERHEAD_POSITION);

    assert!(after < before * 0.5, "{before} -> {after}");
}

#[test]
fn test_focus_flies_to_target_and_releases() {
    let (mut app, _) = tour_app();
    let target_pos = Vec3::new(90.0, 0.0, 0.0);
    let transform = Transform::from_translation(target_pos);
    let target = app
        .world_mut()
        .spawn((transform, GlobalTransform::from(transform)))
        .id();
    {
        let mut focus = app.world_mut().resource_mut::<CameraFocus>();
        focus.target = Some(target);
        focus.offset = 25.0;
    }

    advance(&mut app, 10.0);

    let camera = camera_transform(&mut app);
    assert!((camera.translation.distance(target_pos) - 25.0).abs() < 1.0);
    assert!(app.world().resource::<CameraFocus>().target.is_none());
}
