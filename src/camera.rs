//! Camera for the tour.
//!
//! Two exclusive modes: first-person free flight and an overhead view that
//! eases toward a fixed point above the star. Each mode has its own update
//! function; toggling takes effect on the next tick with no blending.

use bevy::prelude::*;

use crate::input::HeldDirections;
use crate::interaction::ExplorationState;
use crate::types::TickSet;

/// Where the camera starts, looking at the star.
pub const START_POSITION: Vec3 = Vec3::new(-175.0, 115.0, 5.0);

/// Vertical field of view in degrees.
pub const FOV_DEG: f32 = 45.0;
pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 1000.0;

/// First-person flight speed in units per second.
pub const MOVE_SPEED: f32 = 36.0;

/// Lower bound on the per-tick time step for first-person movement.
pub const MIN_STEP_SECS: f32 = 0.001;

/// Fixed point the overhead view eases toward.
pub const OVERHEAD_POSITION: Vec3 = Vec3::new(0.0, 400.0, 0.1);

/// Fraction of the remaining distance covered per tick in overhead mode.
pub const OVERHEAD_SMOOTHING: f32 = 0.05;

/// Fraction of the remaining distance covered per tick while focusing a body.
pub const FOCUS_SMOOTHING: f32 = 0.05;

/// Focus ends once the camera is this close to its goal.
const FOCUS_ARRIVAL: f32 = 0.5;

/// Forward direction used when the look direction is vertical.
const FALLBACK_FORWARD: Vec3 = Vec3::NEG_Z;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Active camera mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraMode {
    #[default]
    FirstPerson,
    Overhead,
}

impl CameraMode {
    pub fn toggled(self) -> Self {
        match self {
            CameraMode::FirstPerson => CameraMode::Overhead,
            CameraMode::Overhead => CameraMode::FirstPerson,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CameraMode::FirstPerson => "First person",
            CameraMode::Overhead => "Overhead",
        }
    }
}

/// Resource for smooth camera focus on a body.
///
/// While a target is set, first-person mode eases toward a point `offset`
/// away from it. Any held movement key hands control back to the player.
#[derive(Resource, Default, Debug)]
pub struct CameraFocus {
    pub target: Option<Entity>,
    pub offset: f32,
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraFocus>()
            .init_resource::<HeldDirections>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, update_camera.in_set(TickSet::Camera));
    }
}

/// Spawn the main camera with a perspective projection.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: FOV_DEG.to_radians(),
            near: NEAR,
            far: FAR,
            ..default()
        }),
        Transform::from_translation(START_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}

/// Horizontal movement direction for the held keys, relative to `look`.
///
/// The look direction is flattened onto the horizontal plane; vertical keys
/// move along world up. The result is unit length or zero.
pub fn movement_vector(look: Vec3, held: &HeldDirections) -> Vec3 {
    let flat = Vec3::new(look.x, 0.0, look.z);
    let forward = if flat.length_squared() == 0.0 {
        FALLBACK_FORWARD
    } else {
        flat.normalize()
    };
    let right = forward.cross(Vec3::Y).normalize();

    let mut v = Vec3::ZERO;
    if held.forward {
        v += forward;
    }
    if held.back {
        v -= forward;
    }
    if held.right {
        v += right;
    }
    if held.left {
        v -= right;
    }
    if held.up {
        v.y += 1.0;
    }
    if held.down {
        v.y -= 1.0;
    }
    v.normalize_or_zero()
}

/// One first-person step: displacement for the held keys over `dt` seconds.
pub fn first_person_step(look: Vec3, held: &HeldDirections, dt: f32) -> Vec3 {
    movement_vector(look, held) * MOVE_SPEED * dt.max(MIN_STEP_SECS)
}

/// One overhead step: ease toward [`OVERHEAD_POSITION`] and aim at the origin.
pub fn overhead_step(transform: &Transform) -> Transform {
    let translation = transform.translation.lerp(OVERHEAD_POSITION, OVERHEAD_SMOOTHING);
    Transform::from_translation(translation).looking_at(Vec3::ZERO, Vec3::Y)
}

/// Where a focused camera settles: `offset` from the target, on the camera's side.
pub fn focus_goal(camera: Vec3, target: Vec3, offset: f32) -> Vec3 {
    let away = (camera - target).try_normalize().unwrap_or(Vec3::Y);
    target + away * offset
}

fn update_camera(
    time: Res<Time>,
    held: Res<HeldDirections>,
    state: Res<ExplorationState>,
    mut focus: ResMut<CameraFocus>,
    targets: Query<&GlobalTransform>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    match state.camera_mode {
        CameraMode::FirstPerson => {
            if !state.movement_enabled {
                return;
            }
            if held.any() {
                focus.target = None;
            }
            if let Some(target) = focus.target {
                let Ok(target_transform) = targets.get(target) else {
                    focus.target = None;
                    return;
                };
                let target_pos = target_transform.translation();
                let goal = focus_goal(transform.translation, target_pos, focus.offset);
                transform.translation = transform.translation.lerp(goal, FOCUS_SMOOTHING);
                transform.look_at(target_pos, Vec3::Y);
                if transform.translation.distance(goal) < FOCUS_ARRIVAL {
                    focus.target = None;
                }
                return;
            }
            let step = first_person_step(transform.forward().as_vec3(), &held, time.delta_secs());
            transform.translation += step;
        }
        CameraMode::Overhead => {
            focus.target = None;
            *transform = overhead_step(&transform);
        }
    }
}
