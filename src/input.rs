//! Keyboard, mouse look and click picking.
//!
//! Held movement keys are sampled into [`HeldDirections`] every frame. The
//! mode toggle is always available. A left click casts a ray through the
//! cursor and narrates whatever the closest raycast target stands for.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::camera::{CameraMode, MainCamera};
use crate::identity::{pick_hit, IdentityIndex};
use crate::interaction::{ExplorationState, NarrationSource, NarrationTrigger};
use crate::scene::RaycastTarget;
use crate::types::TickSet;

pub const FORWARD_KEYS: [KeyCode; 2] = [KeyCode::KeyW, KeyCode::ArrowUp];
pub const BACK_KEYS: [KeyCode; 2] = [KeyCode::KeyS, KeyCode::ArrowDown];
pub const LEFT_KEYS: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
pub const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
pub const UP_KEYS: [KeyCode; 1] = [KeyCode::Space];
pub const DOWN_KEYS: [KeyCode; 2] = [KeyCode::ShiftLeft, KeyCode::ShiftRight];
pub const MODE_TOGGLE_KEY: KeyCode = KeyCode::KeyC;

/// Radians of camera rotation per pixel of mouse motion.
pub const LOOK_SENSITIVITY: f32 = 0.003;

/// Pitch limit, just short of straight up or down.
const MAX_PITCH: f32 = 1.54;

/// Movement directions currently held.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldDirections {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl HeldDirections {
    pub fn any(&self) -> bool {
        self.forward || self.back || self.left || self.right || self.up || self.down
    }
}

/// Plugin providing keyboard input handling and click picking.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HeldDirections>().add_systems(
            Update,
            (
                sample_held_keys,
                toggle_camera_mode,
                mouse_look,
                pick_on_click,
            )
                .in_set(TickSet::Input),
        );
    }
}

/// Read held movement keys from the keyboard state.
pub fn held_from_keys(keys: &ButtonInput<KeyCode>) -> HeldDirections {
    HeldDirections {
        forward: keys.any_pressed(FORWARD_KEYS),
        back: keys.any_pressed(BACK_KEYS),
        left: keys.any_pressed(LEFT_KEYS),
        right: keys.any_pressed(RIGHT_KEYS),
        up: keys.any_pressed(UP_KEYS),
        down: keys.any_pressed(DOWN_KEYS),
    }
}

fn sample_held_keys(keys: Res<ButtonInput<KeyCode>>, mut held: ResMut<HeldDirections>) {
    let now = held_from_keys(&keys);
    if *held != now {
        *held = now;
    }
}

/// C: switch between first-person and overhead.
pub fn toggle_camera_mode(keys: Res<ButtonInput<KeyCode>>, mut state: ResMut<ExplorationState>) {
    if keys.just_pressed(MODE_TOGGLE_KEY) {
        state.camera_mode = state.camera_mode.toggled();
        info!("Camera mode: {}", state.camera_mode.label());
    }
}

/// Right-drag to look around in first-person mode.
fn mouse_look(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    state: Res<ExplorationState>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if state.camera_mode != CameraMode::FirstPerson
        || !mouse_buttons.pressed(MouseButton::Right)
        || mouse_motion.delta == Vec2::ZERO
    {
        return;
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    let (yaw, pitch, _) = transform.rotation.to_euler(EulerRot::YXZ);
    let yaw = yaw - mouse_motion.delta.x * LOOK_SENSITIVITY;
    let pitch = (pitch - mouse_motion.delta.y * LOOK_SENSITIVITY).clamp(-MAX_PITCH, MAX_PITCH);
    transform.rotation = Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0);
}

/// World-space ray through the cursor, if the cursor is over the window.
pub fn cursor_ray(window: &Window, camera: &Camera, camera_transform: &GlobalTransform) -> Option<Ray3d> {
    let cursor = window.cursor_position()?;
    camera.viewport_to_world(camera_transform, cursor).ok()
}

/// Closest raycast target along `ray` and the hit point.
pub fn closest_target(
    ray_cast: &mut MeshRayCast,
    ray: Ray3d,
    targets: &Query<(), With<RaycastTarget>>,
) -> Option<(Entity, Vec3)> {
    let filter = |entity: Entity| targets.contains(entity);
    let settings = MeshRayCastSettings::default().with_filter(&filter);
    ray_cast
        .cast_ray(ray, &settings)
        .first()
        .map(|(entity, hit)| (*entity, hit.point))
}

/// Left click: resolve the closest target under the cursor and narrate it.
#[allow(clippy::too_many_arguments)]
fn pick_on_click(
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    targets: Query<(), With<RaycastTarget>>,
    materials: Query<&MeshMaterial3d<StandardMaterial>>,
    transforms: Query<&GlobalTransform>,
    index: Res<IdentityIndex>,
    mut ray_cast: MeshRayCast,
    mut contexts: EguiContexts,
    mut triggers: MessageWriter<NarrationTrigger>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    if let Ok(ctx) = contexts.ctx_mut() {
        if ctx.wants_pointer_input() {
            return;
        }
    }

    let Ok(window) = window_query.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Some(ray) = cursor_ray(window, camera, camera_transform) else {
        return;
    };
    let Some((entity, point)) = closest_target(&mut ray_cast, ray, &targets) else {
        return;
    };
    let Some(resolved) = index.resolve(pick_hit(entity, &materials)) else {
        debug!("Click on unresolved primitive {entity}");
        return;
    };

    let world_pos = transforms
        .get(resolved.mesh)
        .map_or(point, |t| t.translation());

    triggers.write(NarrationTrigger {
        identity: resolved.identity,
        world_pos: Some(world_pos),
        focus_offset: resolved.focus_offset,
        source: NarrationSource::Click,
    });
}
