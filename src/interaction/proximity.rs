//! Narration triggered by flying close to a body.

use bevy::prelude::*;

use crate::camera::{CameraMode, MainCamera};
use crate::identity::Identity;
use crate::registry::{body_data, BodyId, Subject};
use crate::scene::BodyMesh;

use super::{ExplorationState, NarrationSource, NarrationTrigger};

/// Distance beyond a body's surface at which proximity narration fires.
pub const PROXIMITY_MARGIN: f32 = 15.0;

/// Radius assumed for a body without a known size.
pub const FALLBACK_RADIUS: f32 = 5.0;

/// Camera distance below which `radius`-sized body triggers narration.
pub fn trigger_distance(radius: Option<f32>) -> f32 {
    PROXIMITY_MARGIN + radius.filter(|r| *r > 0.0).unwrap_or(FALLBACK_RADIUS)
}

/// First body, in registry order, whose trigger sphere contains `camera`.
pub fn first_in_range(
    camera: Vec3,
    positions: &[(BodyId, Vec3)],
) -> Option<(BodyId, Vec3)> {
    let mut ordered = positions.to_vec();
    ordered.sort_by_key(|(id, _)| *id);
    ordered.into_iter().find(|(id, pos)| {
        camera.distance(*pos) < trigger_distance(Some(body_data(*id).radius))
    })
}

/// Update the debounce marker for this tick's hit. Returns the body to narrate.
///
/// A body is narrated when it becomes the hit and differs from the marker.
/// Leaving every trigger sphere clears the marker.
pub fn debounce(last: &mut Option<BodyId>, hit: Option<BodyId>) -> Option<BodyId> {
    match hit {
        Some(id) if *last != Some(id) => {
            *last = Some(id);
            Some(id)
        }
        Some(_) => None,
        None => {
            *last = None;
            None
        }
    }
}

pub(super) fn check_proximity(
    mut state: ResMut<ExplorationState>,
    camera_query: Query<&Transform, With<MainCamera>>,
    bodies: Query<(&BodyMesh, &GlobalTransform)>,
    mut triggers: MessageWriter<NarrationTrigger>,
) {
    if state.camera_mode != CameraMode::FirstPerson || !state.movement_enabled {
        return;
    }
    let Ok(camera) = camera_query.single() else {
        return;
    };

    let positions: Vec<(BodyId, Vec3)> = bodies
        .iter()
        .map(|(mesh, transform)| (mesh.body, transform.translation()))
        .collect();
    let hit = first_in_range(camera.translation, &positions);

    if let Some(id) = debounce(&mut state.last_proximity, hit.map(|(id, _)| id)) {
        info!("Approaching {}", id.name());
        triggers.write(NarrationTrigger {
            identity: Identity::Body(id),
            world_pos: hit.map(|(_, pos)| pos),
            focus_offset: Subject::Body(id).focus_offset(),
            source: NarrationSource::Proximity,
        });
    }
}
