//! Shared resources, system sets and constants.

use std::ops::RangeInclusive;

use bevy::prelude::*;

/// Per-tick ordering of the tour's systems.
///
/// Input is sampled first so that a mode toggle or a click is seen by the
/// camera and interaction systems in the same frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TickSet {
    /// Keyboard, mouse look and click picking.
    Input,
    /// Spin, revolution, moons and asteroid field.
    Animate,
    /// Camera update for the active mode.
    Camera,
    /// Proximity checks, narration, visits and the quiz.
    Interact,
    /// Timers, speech signals, tones and confetti.
    Effects,
}

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;

/// Allowed range of the orbital-speed multiplier.
pub const ORBIT_SPEED_RANGE: RangeInclusive<f32> = 0.0..=10.0;

/// Allowed range of the spin-speed multiplier.
pub const SPIN_SPEED_RANGE: RangeInclusive<f32> = 0.0..=10.0;

/// Allowed range of the star's emission intensity.
pub const SUN_INTENSITY_RANGE: RangeInclusive<f32> = 1.0..=10.0;

/// User-adjustable animation settings.
///
/// Every angular update reads the current values, so edits take effect on
/// the next tick.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct Settings {
    /// Multiplier on every body's revolution rate (and asteroid drift).
    pub orbit_speed: f32,
    /// Multiplier on every body's spin rate.
    pub spin_speed: f32,
    /// Emissive strength of the star.
    pub sun_intensity: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            orbit_speed: 1.0,
            spin_speed: 1.0,
            sun_intensity: 1.9,
        }
    }
}

impl Settings {
    /// Clamp every field into its allowed range.
    pub fn clamp(&mut self) {
        self.orbit_speed = self
            .orbit_speed
            .clamp(*ORBIT_SPEED_RANGE.start(), *ORBIT_SPEED_RANGE.end());
        self.spin_speed = self
            .spin_speed
            .clamp(*SPIN_SPEED_RANGE.start(), *SPIN_SPEED_RANGE.end());
        self.sun_intensity = self
            .sun_intensity
            .clamp(*SUN_INTENSITY_RANGE.start(), *SUN_INTENSITY_RANGE.end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.orbit_speed, 1.0);
        assert_eq!(settings.spin_speed, 1.0);
        assert_eq!(settings.sun_intensity, 1.9);
    }

    #[test]
    fn test_settings_clamp() {
        let mut settings = Settings {
            orbit_speed: -2.0,
            spin_speed: 42.0,
            sun_intensity: 0.0,
        };
        settings.clamp();
        assert_eq!(settings.orbit_speed, 0.0);
        assert_eq!(settings.spin_speed, 10.0);
        assert_eq!(settings.sun_intensity, 1.0);
    }
}
