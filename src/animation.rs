//! Per-tick animation of bodies, moons and the asteroid field.
//!
//! Spin and revolution advance by a fixed increment per tick scaled by the
//! current [`Settings`]. Moon positions are recomputed from the absolute clock,
//! so changing the orbital multiplier makes moons jump phase.

use std::f64::consts::TAU;

use bevy::prelude::*;

use crate::registry::{body_data, MoonOrbitStyle};
use crate::scene::{Asteroid, AtmosphereShell, Body, Moon, SpinNode};
use crate::types::{Settings, TickSet, DEG_TO_RAD};

/// Planar drift of every asteroid per tick, before the orbital multiplier.
pub const ASTEROID_DRIFT: f32 = 0.0001;

/// Self-spin of every asteroid per tick.
pub const ASTEROID_SPIN: f32 = 0.0001;

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Settings>().add_systems(
            Update,
            (spin_bodies, revolve_bodies, orbit_moons, drift_asteroids).in_set(TickSet::Animate),
        );
    }
}

/// Offset of a moon from its parent's centre at orbital angle `angle`.
///
/// Flat orbits trace a circle in the horizontal plane. Inclined orbits trace
/// the same circle tilted out of it by the configured angle.
pub fn moon_offset(style: MoonOrbitStyle, radius: f32, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    match style {
        MoonOrbitStyle::Flat => Vec3::new(radius * cos, 0.0, radius * sin),
        MoonOrbitStyle::Inclined { tilt_deg } => {
            let (tilt_sin, tilt_cos) = (tilt_deg * DEG_TO_RAD).sin_cos();
            Vec3::new(radius * cos, radius * sin * tilt_sin, radius * sin * tilt_cos)
        }
    }
}

/// Orbital angle of a moon at `clock_ms` milliseconds, wrapped to one turn.
pub fn moon_angle(clock_ms: f64, rate: f64, multiplier: f32) -> f32 {
    (clock_ms * rate * multiplier as f64).rem_euclid(TAU) as f32
}

/// Rotate a position about the vertical axis, keeping its height.
pub fn rotate_planar(position: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(
        position.x * cos + position.z * sin,
        position.y,
        position.z * cos - position.x * sin,
    )
}

fn spin_bodies(
    settings: Res<Settings>,
    mut spin_nodes: Query<(&SpinNode, &mut Transform), Without<AtmosphereShell>>,
    mut shells: Query<(&AtmosphereShell, &mut Transform), Without<SpinNode>>,
) {
    for (node, mut transform) in &mut spin_nodes {
        transform.rotate_local_y(body_data(node.body).spin_rate * settings.spin_speed);
    }
    for (shell, mut transform) in &mut shells {
        transform.rotate_local_y(shell.spin_rate * settings.spin_speed);
    }
}

fn revolve_bodies(settings: Res<Settings>, mut pivots: Query<(&Body, &mut Transform)>) {
    for (body, mut transform) in &mut pivots {
        transform.rotate_y(body_data(body.id).orbit_rate * settings.orbit_speed);
    }
}

/// Place every attached moon on its orbit. Moons still loading have no entity yet.
fn orbit_moons(
    time: Res<Time>,
    settings: Res<Settings>,
    mut moons: Query<(&Moon, &mut Transform)>,
) {
    let clock_ms = time.elapsed_secs_f64() * 1000.0;
    for (moon, mut transform) in &mut moons {
        let center = Vec3::new(body_data(moon.body).orbit_distance, 0.0, 0.0);
        let angle = moon_angle(clock_ms, moon.data.orbit_rate, settings.orbit_speed);
        transform.translation = center + moon_offset(moon.data.style, moon.data.orbit_radius, angle);
        transform.rotate_local_y(moon.data.spin_step);
    }
}

fn drift_asteroids(
    settings: Res<Settings>,
    mut asteroids: Query<&mut Transform, With<Asteroid>>,
) {
    let angle = ASTEROID_DRIFT * settings.orbit_speed;
    for mut transform in &mut asteroids {
        transform.translation = rotate_planar(transform.translation, angle);
        transform.rotate_local_y(ASTEROID_SPIN);
    }
}
