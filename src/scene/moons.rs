//! Moon attachment, including moons whose model arrives asynchronously.

use bevy::asset::LoadState;
use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;

use crate::animation::moon_offset;
use crate::registry::{BodyId, MoonSource};

use super::{AssetLoadError, AssetLoadFailed, Body, Moon};

pub struct MoonPlugin;

impl Plugin for MoonPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, poll_moon_models);
    }
}

/// Visual for a moon that is ready to be attached.
#[derive(Clone, Debug)]
pub enum MoonVisual {
    Mesh {
        mesh: Handle<Mesh>,
        material: Handle<StandardMaterial>,
    },
    /// A loaded glTF scene.
    Scene(Handle<Scene>),
}

/// Spawn a moon's visual under its body's pivot and record it in the slot.
///
/// Returns the moon entity. Attaching an already populated slot replaces the
/// reference but leaves the previous entity alone.
pub fn attach_moon(
    commands: &mut Commands,
    body: &mut Body,
    slot: usize,
    visual: MoonVisual,
) -> Option<Entity> {
    let moon = body.moons.get_mut(slot)?;
    let data = moon.data;
    let translation = Vec3::new(body_distance(body.id), 0.0, 0.0)
        + moon_offset(data.style, data.orbit_radius, 0.0);
    let marker = Moon {
        body: body.id,
        data,
    };

    let entity = match visual {
        MoonVisual::Mesh { mesh, material } => commands
            .spawn((
                Name::new(data.name),
                marker,
                Mesh3d(mesh),
                MeshMaterial3d(material),
                Transform::from_translation(translation),
                ChildOf(body.pivot),
            ))
            .id(),
        MoonVisual::Scene(scene) => {
            let scale = match data.source {
                MoonSource::Model { scale, .. } => scale,
                MoonSource::Texture { .. } => 1.0,
            };
            commands
                .spawn((
                    Name::new(data.name),
                    marker,
                    SceneRoot(scene),
                    Transform::from_translation(translation).with_scale(Vec3::splat(scale)),
                    ChildOf(body.pivot),
                ))
                .id()
        }
    };

    moon.entity = Some(entity);
    Some(entity)
}

fn body_distance(id: BodyId) -> f32 {
    crate::registry::body_data(id).orbit_distance
}

struct PendingMoonModel {
    body: BodyId,
    slot: usize,
    path: &'static str,
    handle: Handle<Scene>,
}

/// Model moons whose glTF has not finished loading.
#[derive(Resource, Default)]
pub struct PendingMoonModels {
    entries: Vec<PendingMoonModel>,
}

impl PendingMoonModels {
    /// Start loading a moon model.
    pub fn queue(&mut self, asset_server: &AssetServer, body: BodyId, slot: usize, path: &'static str) {
        let handle = asset_server.load(GltfAssetLabel::Scene(0).from_asset(path));
        self.entries.push(PendingMoonModel {
            body,
            slot,
            path,
            handle,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Attach model moons as their loads complete; report the ones that fail.
fn poll_moon_models(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut pending: ResMut<PendingMoonModels>,
    mut bodies: Query<&mut Body>,
    mut failures: MessageWriter<AssetLoadFailed>,
) {
    if pending.is_empty() {
        return;
    }

    pending.entries.retain(|entry| match asset_server.load_state(&entry.handle) {
        LoadState::Loaded => {
            let Some(mut body) = bodies.iter_mut().find(|b| b.id == entry.body) else {
                return false;
            };
            if let Some(entity) = attach_moon(
                &mut commands,
                &mut body,
                entry.slot,
                MoonVisual::Scene(entry.handle.clone()),
            ) {
                info!("Attached moon model {} ({entity})", entry.path);
            }
            false
        }
        LoadState::Failed(err) => {
            let error = AssetLoadError::MoonModel {
                path: entry.path,
                reason: err.to_string(),
            };
            warn!("{error}");
            failures.write(AssetLoadFailed(error));
            false
        }
        LoadState::NotLoaded | LoadState::Loading => true,
    });
}
