//! Body construction: pivot, spin node, primary mesh and attachments.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use crate::identity::IdentityIndex;
use crate::registry::{BodyData, MoonSource, ATMOSPHERE_MARGIN, ATMOSPHERE_ROLL, BODIES};
use crate::types::{Settings, DEG_TO_RAD};

use super::moons::{attach_moon, MoonVisual, PendingMoonModels};
use super::orbits::OrbitGuide;
use super::{AtmosphereShell, Body, BodyMesh, MoonSlot, RaycastTarget, Ring, SpinNode, Star};

/// Emissive tint of the star.
const STAR_EMISSIVE: Color = Color::srgb(1.0, 0.973, 0.561);

/// Colour of the light the star casts.
const STAR_LIGHT: Color = Color::srgb(0.992, 1.0, 0.827);

/// Point light intensity (lumens) and reach of the star.
const STAR_LIGHT_LUMENS: f32 = 2.0e8;
const STAR_LIGHT_RANGE: f32 = 1000.0;

/// Plugin spawning every body in the registry.
pub struct BodyPlugin;

impl Plugin for BodyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<IdentityIndex>()
            .init_resource::<PendingMoonModels>()
            .init_resource::<Settings>()
            .add_systems(Startup, spawn_solar_system)
            .add_systems(Update, apply_sun_intensity);
    }
}

/// Prebuilt render handles for one body.
///
/// Kept separate from [`build_body`] so the hierarchy can be built with
/// handles from any `Assets` store.
pub struct BodyVisuals {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
    pub atmosphere: Option<(Handle<Mesh>, Handle<StandardMaterial>)>,
    pub ring: Option<(Handle<Mesh>, Handle<StandardMaterial>)>,
    /// One entry per registry moon; `None` while the visual is still loading.
    pub moons: Vec<Option<MoonVisual>>,
}

/// Handle to the star's material, kept for live intensity edits.
#[derive(Resource)]
pub struct StarMaterial(pub Handle<StandardMaterial>);

/// Build the hierarchy for one body and insert [`Body`] on its pivot.
pub fn build_body(commands: &mut Commands, data: &'static BodyData, visuals: BodyVisuals) -> Body {
    let id = data.id;

    let pivot = commands
        .spawn((
            Name::new(format!("{} pivot", id.name())),
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    let spin_node = commands
        .spawn((
            Name::new(format!("{} spin", id.name())),
            SpinNode { body: id },
            Transform::from_xyz(data.orbit_distance, 0.0, 0.0)
                .with_rotation(Quat::from_rotation_z(data.tilt_deg * DEG_TO_RAD)),
            Visibility::default(),
            ChildOf(pivot),
        ))
        .id();

    let mut mesh_commands = commands.spawn((
        Name::new(id.name()),
        BodyMesh { body: id },
        Mesh3d(visuals.mesh),
        MeshMaterial3d(visuals.material),
        Transform::default(),
        RaycastTarget,
        ChildOf(spin_node),
    ));
    if data.is_star() {
        mesh_commands.insert(Star);
    }
    let mesh = mesh_commands.id();

    let atmosphere = data.atmosphere.zip(visuals.atmosphere).map(|(shell, (m, mat))| {
        commands
            .spawn((
                AtmosphereShell {
                    body: id,
                    spin_rate: shell.spin_rate,
                },
                Mesh3d(m),
                MeshMaterial3d(mat),
                Transform::from_rotation(Quat::from_rotation_z(ATMOSPHERE_ROLL)),
                RaycastTarget,
                ChildOf(mesh),
            ))
            .id()
    });

    // Annulus meshes lie in XY; lay the ring into the equatorial plane.
    let ring = data.ring.zip(visuals.ring).map(|(_, (m, mat))| {
        commands
            .spawn((
                Ring { body: id },
                Mesh3d(m),
                MeshMaterial3d(mat),
                Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
                ChildOf(mesh),
            ))
            .id()
    });

    let orbit_guide = (data.orbit_distance > 0.0).then(|| {
        commands
            .spawn((
                OrbitGuide {
                    body: id,
                    radius: data.orbit_distance,
                },
                Transform::default(),
                ChildOf(pivot),
            ))
            .id()
    });

    let mut body = Body {
        id,
        pivot,
        spin_node,
        mesh,
        atmosphere,
        ring,
        orbit_guide,
        moons: data
            .moons
            .iter()
            .map(|moon| MoonSlot {
                data: moon,
                entity: None,
            })
            .collect(),
    };

    for (index, visual) in visuals.moons.into_iter().enumerate() {
        if let Some(visual) = visual {
            attach_moon(commands, &mut body, index, visual);
        }
    }

    commands.entity(pivot).insert(body.clone());
    body
}

fn planet_material(texture: Handle<Image>) -> StandardMaterial {
    StandardMaterial {
        base_color_texture: Some(texture),
        perceptual_roughness: 1.0,
        ..default()
    }
}

fn star_material(texture: Handle<Image>, intensity: f32) -> StandardMaterial {
    StandardMaterial {
        base_color_texture: Some(texture.clone()),
        emissive: STAR_EMISSIVE.to_linear() * intensity,
        emissive_texture: Some(texture),
        ..default()
    }
}

/// Spawn every body in the registry, its light, and queue model moons.
fn spawn_solar_system(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut index: ResMut<IdentityIndex>,
    mut pending: ResMut<PendingMoonModels>,
    settings: Res<Settings>,
) {
    for data in &BODIES {
        let id = data.id;
        let texture: Handle<Image> = asset_server.load(data.texture);

        let material = if data.is_star() {
            let handle = materials.add(star_material(texture, settings.sun_intensity));
            commands.insert_resource(StarMaterial(handle.clone()));
            handle
        } else {
            materials.add(planet_material(texture))
        };
        let material_id = material.id();

        let atmosphere = data.atmosphere.map(|shell| {
            let mat = materials.add(StandardMaterial {
                base_color: Color::srgba(1.0, 1.0, 1.0, shell.opacity),
                base_color_texture: Some(asset_server.load(shell.texture)),
                alpha_mode: AlphaMode::Blend,
                ..default()
            });
            (meshes.add(Sphere::new(data.radius + ATMOSPHERE_MARGIN)), mat)
        });
        let atmosphere_material = atmosphere.as_ref().map(|(_, mat)| mat.id());

        let ring = data.ring.map(|ring| {
            let mat = materials.add(StandardMaterial {
                base_color_texture: Some(asset_server.load(ring.texture)),
                alpha_mode: AlphaMode::Blend,
                double_sided: true,
                cull_mode: None,
                ..default()
            });
            (meshes.add(Annulus::new(ring.inner_radius, ring.outer_radius)), mat)
        });

        let moons = data
            .moons
            .iter()
            .map(|moon| match moon.source {
                MoonSource::Texture { path, size } => Some(MoonVisual::Mesh {
                    mesh: meshes.add(Sphere::new(size)),
                    material: materials.add(planet_material(asset_server.load(path))),
                }),
                MoonSource::Model { .. } => None,
            })
            .collect();

        let body = build_body(
            &mut commands,
            data,
            BodyVisuals {
                mesh: meshes.add(Sphere::new(data.radius).mesh().uv(64, 32)),
                material,
                atmosphere,
                ring,
                moons,
            },
        );

        if data.is_star() {
            index.register_star(body.mesh);
            commands.spawn((
                PointLight {
                    color: STAR_LIGHT,
                    intensity: STAR_LIGHT_LUMENS,
                    range: STAR_LIGHT_RANGE,
                    shadows_enabled: true,
                    ..default()
                },
                Transform::default(),
                ChildOf(body.pivot),
            ));
        } else {
            index.register_body(id, body.mesh, material_id);
        }
        if let Some(shell) = atmosphere_material {
            index.register_material(id, shell);
        }

        for (slot, moon) in data.moons.iter().enumerate() {
            if let MoonSource::Model { path, .. } = moon.source {
                pending.queue(&asset_server, id, slot, path);
            }
        }
    }

    info!("Spawned {} bodies", BODIES.len());
}

/// Push the sun-intensity setting to the star's emissive strength.
fn apply_sun_intensity(
    settings: Res<Settings>,
    star: Option<Res<StarMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !settings.is_changed() {
        return;
    }
    let Some(star) = star else {
        return;
    };
    let Some(material) = materials.get_mut(&star.0) else {
        return;
    };
    material.emissive = STAR_EMISSIVE.to_linear() * settings.sun_intensity;
}
