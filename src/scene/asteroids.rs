//! Asteroid belts cloned from a shared glTF pack.
//!
//! The pack loads once; every mesh in it becomes a template that is cloned
//! into both belts. Clones are never removed.

use std::f32::consts::TAU;
use std::ops::RangeInclusive;

use bevy::asset::LoadState;
use bevy::gltf::{Gltf, GltfMesh};
use bevy::prelude::*;
use rand::Rng;

use crate::identity::IdentityIndex;

use super::{AssetLoadError, AssetLoadFailed, RaycastTarget};

/// Path of the shared asteroid pack.
pub const ASTEROID_PACK: &str = "asteroids/asteroidPack.glb";

/// Uniform scale range of a clone.
pub const ASTEROID_SCALE: RangeInclusive<f32> = 0.8..=1.2;

/// One ring of clones around the star.
#[derive(Clone, Copy, Debug)]
pub struct BeltSpec {
    pub count: usize,
    pub min_radius: f32,
    pub max_radius: f32,
}

/// Inner belt between Mars and Jupiter, outer belt past Pluto.
pub const BELTS: [BeltSpec; 2] = [
    BeltSpec {
        count: 1000,
        min_radius: 130.0,
        max_radius: 160.0,
    },
    BeltSpec {
        count: 3000,
        min_radius: 352.0,
        max_radius: 370.0,
    },
];

/// An asteroid clone. Labelled generically as "Asteroid".
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Asteroid;

/// Load progress of the asteroid pack.
#[derive(Resource, Default)]
pub enum AsteroidField {
    #[default]
    NotLoaded,
    Loading(Handle<Gltf>),
    Loaded {
        count: usize,
    },
    Failed(AssetLoadError),
}

/// Where a clone goes and how big it is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub scale: f32,
}

pub struct AsteroidPlugin;

impl Plugin for AsteroidPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AsteroidField>()
            .add_systems(Startup, load_asteroid_pack)
            .add_systems(Update, spawn_asteroid_belts);
    }
}

/// Scatter `count` clones uniformly in angle within a flat annulus.
pub fn scatter_belt<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    min_radius: f32,
    max_radius: f32,
) -> Vec<Placement> {
    (0..count)
        .map(|_| {
            let radius = rng.random_range(min_radius..=max_radius);
            let angle = rng.random_range(0.0..TAU);
            Placement {
                position: Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin()),
                scale: rng.random_range(ASTEROID_SCALE),
            }
        })
        .collect()
}

/// Clone every template into every belt. Returns the number of clones spawned.
///
/// Each template receives `count / templates` clones, rounded up.
pub fn spawn_belts<R: Rng + ?Sized>(
    commands: &mut Commands,
    index: &mut IdentityIndex,
    templates: &[(Handle<Mesh>, Handle<StandardMaterial>)],
    belts: &[BeltSpec],
    rng: &mut R,
) -> usize {
    if templates.is_empty() {
        return 0;
    }

    let mut spawned = 0;
    for belt in belts {
        let per_template = belt.count.div_ceil(templates.len());
        for (mesh, material) in templates {
            for placement in scatter_belt(rng, per_template, belt.min_radius, belt.max_radius) {
                let entity = commands
                    .spawn((
                        Asteroid,
                        Mesh3d(mesh.clone()),
                        MeshMaterial3d(material.clone()),
                        Transform::from_translation(placement.position)
                            .with_scale(Vec3::splat(placement.scale)),
                        RaycastTarget,
                    ))
                    .id();
                index.register_asteroid(entity);
                spawned += 1;
            }
        }
    }
    spawned
}

fn load_asteroid_pack(asset_server: Res<AssetServer>, mut field: ResMut<AsteroidField>) {
    *field = AsteroidField::Loading(asset_server.load(ASTEROID_PACK));
}

/// Once the pack is loaded, clone its meshes into the belts.
fn spawn_asteroid_belts(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    gltf_meshes: Res<Assets<GltfMesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut field: ResMut<AsteroidField>,
    mut index: ResMut<IdentityIndex>,
    mut failures: MessageWriter<AssetLoadFailed>,
) {
    let AsteroidField::Loading(handle) = &*field else {
        return;
    };

    let outcome = match asset_server.load_state(handle) {
        LoadState::NotLoaded | LoadState::Loading => return,
        LoadState::Failed(err) => Err(AssetLoadError::AsteroidPack {
            path: ASTEROID_PACK,
            reason: err.to_string(),
        }),
        LoadState::Loaded => {
            let templates: Vec<_> = gltfs
                .get(handle)
                .into_iter()
                .flat_map(|gltf| gltf.meshes.iter())
                .filter_map(|mesh| gltf_meshes.get(mesh))
                .filter_map(|mesh| mesh.primitives.first())
                .map(|primitive| {
                    let material = primitive
                        .material
                        .clone()
                        .unwrap_or_else(|| materials.add(StandardMaterial::default()));
                    (primitive.mesh.clone(), material)
                })
                .collect();

            if templates.is_empty() {
                Err(AssetLoadError::EmptyAsteroidPack {
                    path: ASTEROID_PACK,
                })
            } else {
                let count = spawn_belts(
                    &mut commands,
                    &mut index,
                    &templates,
                    &BELTS,
                    &mut rand::rng(),
                );
                info!(
                    "Spawned {count} asteroids from {} templates",
                    templates.len()
                );
                Ok(count)
            }
        }
    };

    *field = match outcome {
        Ok(count) => AsteroidField::Loaded { count },
        Err(error) => {
            warn!("{error}");
            failures.write(AssetLoadFailed(error.clone()));
            AsteroidField::Failed(error)
        }
    };
}

#[cfg(test)]
mod tests {
    use bevy::ecs::world::CommandQueue;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_scatter_stays_in_annulus() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let placements = scatter_belt(&mut rng, 500, 130.0, 160.0);
        assert_eq!(placements.len(), 500);
        for p in &placements {
            let r = p.position.length();
            assert!((130.0..=160.0 + 1e-3).contains(&r), "radius {r} out of belt");
            assert_eq!(p.position.y, 0.0);
            assert!(ASTEROID_SCALE.contains(&p.scale));
        }
    }

    #[test]
    fn test_scatter_is_deterministic_for_a_seed() {
        let a = scatter_belt(&mut ChaCha8Rng::seed_from_u64(3), 10, 352.0, 370.0);
        let b = scatter_belt(&mut ChaCha8Rng::seed_from_u64(3), 10, 352.0, 370.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_spawn_belts_registers_every_clone() {
        let mut world = World::new();
        let mut meshes = Assets::<Mesh>::default();
        let mut materials = Assets::<StandardMaterial>::default();
        let templates: Vec<_> = (0..12)
            .map(|_| {
                (
                    meshes.add(Sphere::new(1.0)),
                    materials.add(StandardMaterial::default()),
                )
            })
            .collect();
        let mut index = IdentityIndex::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        let mut queue = CommandQueue::default();
        let spawned = {
            let mut commands = Commands::new(&mut queue, &world);
            spawn_belts(&mut commands, &mut index, &templates, &BELTS, &mut rng)
        };
        queue.apply(&mut world);

        // 1000 / 12 and 3000 / 12, rounded up per template
        assert_eq!(spawned, 12 * 84 + 12 * 250);
        assert_eq!(index.asteroid_count(), spawned);
        let mut query = world.query_filtered::<Entity, (With<Asteroid>, With<RaycastTarget>)>();
        assert_eq!(query.iter(&world).count(), spawned);
    }

    #[test]
    fn test_spawn_belts_without_templates_spawns_nothing() {
        let world = World::new();
        let mut index = IdentityIndex::default();
        let mut queue = CommandQueue::default();
        let mut commands = Commands::new(&mut queue, &world);
        let spawned = spawn_belts(
            &mut commands,
            &mut index,
            &[],
            &BELTS,
            &mut ChaCha8Rng::seed_from_u64(0),
        );
        assert_eq!(spawned, 0);
        assert_eq!(index.asteroid_count(), 0);
    }
}
