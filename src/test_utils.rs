//! Test utilities for the tour.
//!
//! Provides fixtures for scene positions and held keys, assertions for the
//! geometric invariants of the animation, and a headless app builder.

use bevy::prelude::*;

use crate::input::HeldDirections;

/// Fixtures for building test inputs.
pub mod fixtures {
    use super::*;
    use crate::registry::{body_data, BodyId};

    /// Every direction flag set from a bitmask, in the order
    /// forward, back, left, right, up, down.
    pub fn held_from_mask(mask: u8) -> HeldDirections {
        HeldDirections {
            forward: mask & 0b00_0001 != 0,
            back: mask & 0b00_0010 != 0,
            left: mask & 0b00_0100 != 0,
            right: mask & 0b00_1000 != 0,
            up: mask & 0b01_0000 != 0,
            down: mask & 0b10_0000 != 0,
        }
    }

    /// World position of a body at the start of the tour (no revolution yet).
    pub fn rest_position(id: BodyId) -> Vec3 {
        Vec3::new(body_data(id).orbit_distance, 0.0, 0.0)
    }
}

/// Assertions for geometric invariants.
pub mod assertions {
    use super::*;

    /// Assert that `v` is either zero or unit length.
    ///
    /// # Panics
    /// Panics if the length is neither 0 nor 1 within `tolerance`.
    pub fn assert_unit_or_zero(v: Vec3, tolerance: f32) {
        let len = v.length();
        assert!(
            len <= tolerance || (len - 1.0).abs() <= tolerance,
            "expected a unit or zero vector, got {v} (length {len})"
        );
    }

    /// Assert that `point` lies on a circle of `radius` around `center`.
    pub fn assert_on_orbit(point: Vec3, center: Vec3, radius: f32, tolerance: f32) {
        let distance = point.distance(center);
        assert!(
            (distance - radius).abs() <= tolerance,
            "expected distance {radius} from {center}, got {distance}"
        );
    }
}

/// Utilities for creating headless Bevy apps for testing.
pub mod bevy_test {
    use bevy::prelude::*;

    /// Create a minimal Bevy app for testing without rendering.
    ///
    /// Scene tests add the transform and animation plugins on top.
    pub fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::BodyId;

    #[test]
    fn test_mask_covers_every_direction() {
        let all = fixtures::held_from_mask(0b11_1111);
        assert!(all.forward && all.back && all.left && all.right && all.up && all.down);
        assert!(!fixtures::held_from_mask(0).any());
    }

    #[test]
    fn test_sun_rests_at_origin() {
        assert_eq!(fixtures::rest_position(BodyId::Sun), Vec3::ZERO);
    }
}
