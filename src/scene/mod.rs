//! Scene graph for the tour: bodies, moons, asteroid belts and decorations.
//!
//! Each body is built as
//!
//! ```text
//! pivot (Body)                      rotated about Y: revolution
//! ├── spin node (SpinNode)          offset by orbit distance, tilted about Z, spun about local Y
//! │   └── primary mesh (BodyMesh)
//! │       ├── atmosphere shell      optional, slightly larger radius
//! │       └── ring                  optional, in the equatorial plane
//! ├── orbit guide (OrbitGuide)
//! └── moons (Moon)                  positioned at animation time
//! ```
//!
//! Pivots have no parent.

pub mod asteroids;
pub mod bodies;
pub mod highlight;
pub mod moons;
pub mod orbits;

use bevy::prelude::*;

use crate::registry::{BodyId, MoonData};

pub use self::asteroids::{Asteroid, AsteroidField, AsteroidPlugin};
pub use self::bodies::{build_body, BodyPlugin, BodyVisuals};
pub use self::highlight::{HighlightPlugin, HoveredBody};
pub use self::moons::{attach_moon, MoonPlugin, MoonVisual};
pub use self::orbits::{OrbitGuidePlugin, OrbitGuideSettings};

/// A built body. Lives on the body's pivot entity.
#[derive(Component, Clone, Debug)]
pub struct Body {
    pub id: BodyId,
    pub pivot: Entity,
    pub spin_node: Entity,
    /// The primary visual primitive.
    pub mesh: Entity,
    pub atmosphere: Option<Entity>,
    pub ring: Option<Entity>,
    pub orbit_guide: Option<Entity>,
    pub moons: Vec<MoonSlot>,
}

/// A moon owned by a body. `entity` stays `None` until the visual exists.
#[derive(Clone, Debug)]
pub struct MoonSlot {
    pub data: &'static MoonData,
    pub entity: Option<Entity>,
}

impl MoonSlot {
    pub fn is_populated(&self) -> bool {
        self.entity.is_some()
    }
}

/// Marks the node carrying a body's offset, tilt and spin.
#[derive(Component, Clone, Copy, Debug)]
pub struct SpinNode {
    pub body: BodyId,
}

/// Marks a body's primary visual primitive.
#[derive(Component, Clone, Copy, Debug)]
pub struct BodyMesh {
    pub body: BodyId,
}

/// Translucent shell around a planet. Spins on top of its planet.
#[derive(Component, Clone, Copy, Debug)]
pub struct AtmosphereShell {
    pub body: BodyId,
    pub spin_rate: f32,
}

#[derive(Component, Clone, Copy, Debug)]
pub struct Ring {
    pub body: BodyId,
}

/// A moon's visual. Position is recomputed every tick.
#[derive(Component, Clone, Copy, Debug)]
pub struct Moon {
    pub body: BodyId,
    pub data: &'static MoonData,
}

/// The star's primary mesh.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Star;

/// Anything the pointer ray and the hover highlight may hit.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct RaycastTarget;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AssetLoadError {
    #[error("moon model {path} failed to load: {reason}")]
    MoonModel { path: &'static str, reason: String },

    #[error("asteroid pack {path} failed to load: {reason}")]
    AsteroidPack { path: &'static str, reason: String },

    #[error("asteroid pack {path} contains no meshes")]
    EmptyAsteroidPack { path: &'static str },
}

/// Reported once per asset that could not be merged into the scene.
#[derive(Message, Debug, Clone)]
pub struct AssetLoadFailed(pub AssetLoadError);

/// Plugin aggregating scene construction and decoration.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AssetLoadFailed>().add_plugins((
            BodyPlugin,
            MoonPlugin,
            AsteroidPlugin,
            OrbitGuidePlugin,
            HighlightPlugin,
        ));
    }
}
