//! Hover highlighting for bodies and asteroids.
//!
//! The closest raycast target under the cursor is outlined each frame. A
//! hover on an atmosphere shell outlines the planet it belongs to.

use std::f32::consts::TAU;

use bevy::picking::mesh_picking::ray_cast::MeshRayCast;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::camera::MainCamera;
use crate::identity::{pick_hit, IdentityIndex};
use crate::input::{closest_target, cursor_ray};
use crate::registry::body_data;
use crate::types::TickSet;

use super::{BodyMesh, RaycastTarget};

/// Margin of the outline relative to the primitive's radius.
const OUTLINE_SCALE: f32 = 1.25;

/// Approximate radius of an unscaled asteroid template.
const ASTEROID_BASE_RADIUS: f32 = 1.0;

pub struct HighlightPlugin;

impl Plugin for HighlightPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoveredBody>().add_systems(
            Update,
            (detect_hover, draw_highlight)
                .chain()
                .in_set(TickSet::Interact),
        );
    }
}

/// Resource tracking the currently hovered primitive.
#[derive(Resource, Default)]
pub struct HoveredBody {
    /// Primitive to outline (a planet, never its shell).
    pub entity: Option<Entity>,
}

/// Find the closest hovered raycast target and resolve it to what it stands for.
fn detect_hover(
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    targets: Query<(), With<RaycastTarget>>,
    materials: Query<&MeshMaterial3d<StandardMaterial>>,
    index: Res<IdentityIndex>,
    mut ray_cast: MeshRayCast,
    mut hovered: ResMut<HoveredBody>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Some(ray) = cursor_ray(window, camera, camera_transform) else {
        hovered.entity = None;
        return;
    };

    hovered.entity = closest_target(&mut ray_cast, ray, &targets).map(|(entity, _)| {
        index
            .resolve(pick_hit(entity, &materials))
            .map_or(entity, |resolved| resolved.mesh)
    });
}

/// Outline radius for a hovered primitive.
fn outline_radius(body: Option<&BodyMesh>, transform: &GlobalTransform) -> f32 {
    let base = match body {
        Some(mesh) => body_data(mesh.body).radius,
        None => ASTEROID_BASE_RADIUS * transform.scale().max_element(),
    };
    base * OUTLINE_SCALE
}

/// Draw a camera-facing ring around the hovered primitive.
fn draw_highlight(
    mut gizmos: Gizmos,
    hovered: Res<HoveredBody>,
    targets: Query<(&GlobalTransform, Option<&BodyMesh>)>,
    camera_query: Query<&GlobalTransform, With<MainCamera>>,
) {
    let Some(entity) = hovered.entity else {
        return;
    };
    let Ok((transform, body)) = targets.get(entity) else {
        return;
    };
    let Ok(camera) = camera_query.single() else {
        return;
    };

    let center = transform.translation();
    let radius = outline_radius(body, transform);
    let right = camera.right().as_vec3();
    let up = camera.up().as_vec3();
    let color = Color::srgba(0.0, 1.0, 1.0, 0.8);

    let segments = 48;
    let points = (0..=segments).map(|i| {
        let t = i as f32 / segments as f32 * TAU;
        center + (right * t.cos() + up * t.sin()) * radius
    });
    gizmos.linestrip(points, color);
}
