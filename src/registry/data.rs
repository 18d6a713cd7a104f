//! Render-scale parameters for every body in the tour.
//!
//! Sizes are in render units (the Sun is drawn 40 times smaller than its
//! true proportion to Earth). Spin and orbital rates are radians applied per
//! tick before the speed multipliers in [`Settings`](crate::types::Settings).
//! Moon orbit rates are radians per millisecond of clock time.

use super::BodyId;

/// Ring descriptor (Saturn, Uranus).
#[derive(Clone, Copy, Debug)]
pub struct RingData {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub texture: &'static str,
}

/// Translucent shell layered just outside a body's surface.
#[derive(Clone, Copy, Debug)]
pub struct AtmosphereData {
    pub texture: &'static str,
    /// Extra spin applied to the shell on top of the body's own spin.
    pub spin_rate: f32,
    pub opacity: f32,
}

/// Radius margin between a body's surface and its atmosphere shell.
pub const ATMOSPHERE_MARGIN: f32 = 0.1;

/// Fixed roll of every atmosphere shell (radians about the forward axis).
pub const ATMOSPHERE_ROLL: f32 = 0.41;

/// How a moon's circular orbit is oriented relative to the parent's orbital plane.
///
/// Earth's Moon carries a fixed inclination while Mars and Jupiter moons orbit
/// flat. This is per-family flavour and stays configured per moon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoonOrbitStyle {
    /// Circle in the horizontal plane.
    Flat,
    /// Circle tilted out of the horizontal plane by a fixed angle.
    Inclined { tilt_deg: f32 },
}

/// Where a moon's visual comes from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoonSource {
    /// Textured sphere, available immediately.
    Texture { path: &'static str, size: f32 },
    /// glTF model, available only after the asset finishes loading.
    Model { path: &'static str, scale: f32 },
}

/// Static data for a moon attached to a body.
#[derive(Clone, Copy, Debug)]
pub struct MoonData {
    pub name: &'static str,
    pub source: MoonSource,
    /// Distance from the parent body's centre.
    pub orbit_radius: f32,
    /// Angular rate in radians per millisecond of clock time.
    pub orbit_rate: f64,
    /// Self-rotation applied per tick.
    pub spin_step: f32,
    pub style: MoonOrbitStyle,
}

/// Static data for a body in the registry.
#[derive(Clone, Copy, Debug)]
pub struct BodyData {
    pub id: BodyId,
    pub radius: f32,
    /// Offset of the body from its pivot along +X.
    pub orbit_distance: f32,
    pub tilt_deg: f32,
    pub spin_rate: f32,
    pub orbit_rate: f32,
    pub texture: &'static str,
    pub ring: Option<RingData>,
    pub atmosphere: Option<AtmosphereData>,
    pub moons: &'static [MoonData],
    /// Framing distance used when focusing the camera on this body.
    pub focus_offset: f32,
}

impl BodyData {
    /// Whether this body emits light instead of receiving it.
    pub fn is_star(&self) -> bool {
        self.id == BodyId::Sun
    }
}

const EARTH_MOONS: &[MoonData] = &[MoonData {
    name: "Moon",
    source: MoonSource::Texture {
        path: "images/moonmap.jpg",
        size: 1.6,
    },
    orbit_radius: 10.0,
    orbit_rate: 0.001,
    spin_step: 0.01,
    style: MoonOrbitStyle::Inclined { tilt_deg: 5.0 },
}];

const MARS_MOONS: &[MoonData] = &[
    MoonData {
        name: "Phobos",
        source: MoonSource::Model {
            path: "images/mars/phobos.glb",
            scale: 0.1,
        },
        orbit_radius: 5.0,
        orbit_rate: 0.002,
        spin_step: 0.001,
        style: MoonOrbitStyle::Flat,
    },
    MoonData {
        name: "Deimos",
        source: MoonSource::Model {
            path: "images/mars/deimos.glb",
            scale: 0.1,
        },
        orbit_radius: 9.0,
        orbit_rate: 0.0005,
        spin_step: 0.001,
        style: MoonOrbitStyle::Flat,
    },
];

const JUPITER_MOONS: &[MoonData] = &[
    MoonData {
        name: "Io",
        source: MoonSource::Texture {
            path: "images/jupiterIo.jpg",
            size: 1.6,
        },
        orbit_radius: 20.0,
        orbit_rate: 0.0005,
        spin_step: 0.01,
        style: MoonOrbitStyle::Flat,
    },
    MoonData {
        name: "Europa",
        source: MoonSource::Texture {
            path: "images/jupiterEuropa.jpg",
            size: 1.4,
        },
        orbit_radius: 24.0,
        orbit_rate: 0.00025,
        spin_step: 0.01,
        style: MoonOrbitStyle::Flat,
    },
    MoonData {
        name: "Ganymede",
        source: MoonSource::Texture {
            path: "images/jupiterGanymede.jpg",
            size: 2.0,
        },
        orbit_radius: 28.0,
        orbit_rate: 0.000125,
        spin_step: 0.01,
        style: MoonOrbitStyle::Flat,
    },
    MoonData {
        name: "Callisto",
        source: MoonSource::Texture {
            path: "images/jupiterCallisto.jpg",
            size: 1.7,
        },
        orbit_radius: 32.0,
        orbit_rate: 0.00006,
        spin_step: 0.01,
        style: MoonOrbitStyle::Flat,
    },
];

/// Every body in registry order (Sun outward).
pub const BODIES: [BodyData; 10] = [
    BodyData {
        id: BodyId::Sun,
        radius: 697.0 / 40.0,
        orbit_distance: 0.0,
        tilt_deg: 0.0,
        spin_rate: 0.001,
        orbit_rate: 0.0,
        texture: "images/sun.jpg",
        ring: None,
        atmosphere: None,
        moons: &[],
        focus_offset: 120.0,
    },
    BodyData {
        id: BodyId::Mercury,
        radius: 2.4,
        orbit_distance: 40.0,
        tilt_deg: 0.0,
        spin_rate: 0.001,
        orbit_rate: 0.004,
        texture: "images/mercurymap.jpg",
        ring: None,
        atmosphere: None,
        moons: &[],
        focus_offset: 10.0,
    },
    BodyData {
        id: BodyId::Venus,
        radius: 6.1,
        orbit_distance: 65.0,
        tilt_deg: 3.0,
        spin_rate: 0.0005,
        orbit_rate: 0.0006,
        texture: "images/venusmap.jpg",
        ring: None,
        atmosphere: Some(AtmosphereData {
            texture: "images/venus_atmosphere.jpg",
            spin_rate: 0.0005,
            opacity: 0.4,
        }),
        moons: &[],
        focus_offset: 25.0,
    },
    BodyData {
        id: BodyId::Earth,
        radius: 6.4,
        orbit_distance: 90.0,
        tilt_deg: 23.0,
        spin_rate: 0.005,
        orbit_rate: 0.001,
        texture: "images/earth_daymap.jpg",
        ring: None,
        atmosphere: Some(AtmosphereData {
            texture: "images/earth_atmosphere.jpg",
            spin_rate: 0.001,
            opacity: 0.4,
        }),
        moons: EARTH_MOONS,
        focus_offset: 25.0,
    },
    BodyData {
        id: BodyId::Mars,
        radius: 3.4,
        orbit_distance: 115.0,
        tilt_deg: 25.0,
        spin_rate: 0.01,
        orbit_rate: 0.0007,
        texture: "images/marsmap.jpg",
        ring: None,
        atmosphere: None,
        moons: MARS_MOONS,
        focus_offset: 15.0,
    },
    BodyData {
        id: BodyId::Jupiter,
        radius: 69.0 / 4.0,
        orbit_distance: 200.0,
        tilt_deg: 3.0,
        spin_rate: 0.005,
        orbit_rate: 0.0003,
        texture: "images/jupiter.jpg",
        ring: None,
        atmosphere: None,
        moons: JUPITER_MOONS,
        focus_offset: 50.0,
    },
    BodyData {
        id: BodyId::Saturn,
        radius: 58.0 / 4.0,
        orbit_distance: 270.0,
        tilt_deg: 26.0,
        spin_rate: 0.01,
        orbit_rate: 0.0002,
        texture: "images/saturnmap.jpg",
        ring: Some(RingData {
            inner_radius: 18.0,
            outer_radius: 29.0,
            texture: "images/saturn_ring.png",
        }),
        atmosphere: None,
        moons: &[],
        focus_offset: 50.0,
    },
    BodyData {
        id: BodyId::Uranus,
        radius: 25.0 / 4.0,
        orbit_distance: 320.0,
        tilt_deg: 82.0,
        spin_rate: 0.005,
        orbit_rate: 0.0001,
        texture: "images/uranus.jpg",
        ring: Some(RingData {
            inner_radius: 6.0,
            outer_radius: 8.0,
            texture: "images/uranus_ring.png",
        }),
        atmosphere: None,
        moons: &[],
        focus_offset: 25.0,
    },
    BodyData {
        id: BodyId::Neptune,
        radius: 24.0 / 4.0,
        orbit_distance: 340.0,
        tilt_deg: 28.0,
        spin_rate: 0.005,
        orbit_rate: 0.00008,
        texture: "images/neptune.jpg",
        ring: None,
        atmosphere: None,
        moons: &[],
        focus_offset: 20.0,
    },
    BodyData {
        id: BodyId::Pluto,
        radius: 1.0,
        orbit_distance: 350.0,
        tilt_deg: 57.0,
        spin_rate: 0.001,
        orbit_rate: 0.00006,
        texture: "images/plutomap.jpg",
        ring: None,
        atmosphere: None,
        moons: &[],
        focus_offset: 10.0,
    },
];

/// Framing distance for a generic asteroid.
pub const ASTEROID_FOCUS_OFFSET: f32 = 6.0;

/// Get the render data for a body.
pub fn body_data(id: BodyId) -> &'static BodyData {
    // BODIES is declared in BodyId::ALL order.
    &BODIES[id.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bodies_follow_id_order() {
        for (i, data) in BODIES.iter().enumerate() {
            assert_eq!(data.id.index(), i, "{:?} out of order", data.id);
            assert_eq!(body_data(data.id).id, data.id);
        }
    }

    #[test]
    fn test_only_sun_sits_at_origin() {
        for data in &BODIES {
            if data.is_star() {
                assert_eq!(data.orbit_distance, 0.0);
                assert_eq!(data.orbit_rate, 0.0);
            } else {
                assert!(data.orbit_distance > 0.0, "{:?} has no orbit", data.id);
                assert!(data.orbit_rate > 0.0);
            }
        }
    }

    #[test]
    fn test_rings_are_wider_than_their_planet() {
        for data in BODIES.iter().filter(|b| b.ring.is_some()) {
            let ring = data.ring.unwrap();
            assert!(ring.inner_radius < ring.outer_radius);
            assert!(ring.outer_radius > data.radius);
        }
    }

    #[test]
    fn test_moons_orbit_outside_parent_surface() {
        for data in &BODIES {
            for moon in data.moons {
                assert!(
                    moon.orbit_radius > data.radius,
                    "{} orbits inside {:?}",
                    moon.name,
                    data.id
                );
            }
        }
    }

    #[test]
    fn test_only_earth_moon_is_inclined() {
        for data in &BODIES {
            for moon in data.moons {
                let inclined = matches!(moon.style, MoonOrbitStyle::Inclined { .. });
                assert_eq!(inclined, data.id == BodyId::Earth, "{}", moon.name);
            }
        }
    }
}
