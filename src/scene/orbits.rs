//! Orbit-path guides drawn with gizmos.
//!
//! Each guide is a closed loop of sampled points at the body's orbit radius,
//! attached to the body's pivot. Purely decorative.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::registry::BodyId;

pub struct OrbitGuidePlugin;

impl Plugin for OrbitGuidePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitGuideSettings>()
            .add_systems(Update, draw_orbit_guides);
    }
}

/// Orbit guide attached to a body's pivot.
#[derive(Component, Clone, Copy, Debug)]
pub struct OrbitGuide {
    pub body: BodyId,
    pub radius: f32,
}

/// Settings for orbit guide rendering.
#[derive(Resource, Clone, Debug)]
pub struct OrbitGuideSettings {
    pub visible: bool,
    /// Number of sampled points on each loop.
    pub segments: u32,
    pub alpha: f32,
}

impl Default for OrbitGuideSettings {
    fn default() -> Self {
        Self {
            visible: true,
            segments: 100,
            alpha: 0.12,
        }
    }
}

/// Points of a closed loop in the guide's local XZ plane. First point repeats at the end.
pub fn guide_points(radius: f32, segments: u32) -> Vec<Vec3> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32 * TAU;
            Vec3::new(radius * t.cos(), 0.0, radius * t.sin())
        })
        .collect()
}

fn draw_orbit_guides(
    mut gizmos: Gizmos,
    settings: Res<OrbitGuideSettings>,
    guides: Query<(&OrbitGuide, &GlobalTransform)>,
) {
    if !settings.visible {
        return;
    }

    let color = Color::srgba(1.0, 1.0, 1.0, settings.alpha);
    for (guide, transform) in &guides {
        let points = guide_points(guide.radius, settings.segments)
            .into_iter()
            .map(|p| transform.transform_point(p));
        gizmos.linestrip(points, color);
    }
}
