//! Reverse lookup from a picked render primitive to the entity it represents.
//!
//! A hit is resolved in a fixed order: the star's mesh, then asteroid clones,
//! then material identity. Material identity is what maps an atmosphere shell
//! back to its planet, since the shell is its own intersectable primitive.
//! All tables are filled while the scene is built, so resolution is O(1).

use std::collections::{HashMap, HashSet};

use bevy::prelude::*;

use crate::registry::{BodyId, Subject};

/// What a pick hit represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Identity {
    Body(BodyId),
    /// A clone in one of the asteroid belts.
    Asteroid(Entity),
}

impl Identity {
    pub fn subject(&self) -> Subject {
        match self {
            Identity::Body(id) => Subject::Body(*id),
            Identity::Asteroid(_) => Subject::Asteroid,
        }
    }

    pub fn name(&self) -> &'static str {
        self.subject().name()
    }
}

/// The closest primitive under the pointer.
#[derive(Clone, Copy, Debug)]
pub struct PickHit {
    pub entity: Entity,
    pub material: Option<AssetId<StandardMaterial>>,
}

/// Outcome of a successful resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolved {
    pub identity: Identity,
    /// Primitive that stands for the entity (the planet, never its shell).
    pub mesh: Entity,
    /// Framing distance for the camera.
    pub focus_offset: f32,
}

/// Lookup tables filled during scene construction.
#[derive(Resource, Default, Debug)]
pub struct IdentityIndex {
    star: Option<Entity>,
    asteroids: HashSet<Entity>,
    materials: HashMap<AssetId<StandardMaterial>, BodyId>,
    meshes: HashMap<BodyId, Entity>,
}

impl IdentityIndex {
    pub fn register_star(&mut self, mesh: Entity) {
        self.star = Some(mesh);
        self.meshes.insert(BodyId::Sun, mesh);
    }

    /// Register a body's primary mesh and material.
    pub fn register_body(&mut self, id: BodyId, mesh: Entity, material: AssetId<StandardMaterial>) {
        self.meshes.insert(id, mesh);
        self.materials.insert(material, id);
    }

    /// Register an additional material (atmosphere shell) as belonging to `id`.
    pub fn register_material(&mut self, id: BodyId, material: AssetId<StandardMaterial>) {
        self.materials.insert(material, id);
    }

    pub fn register_asteroid(&mut self, entity: Entity) {
        self.asteroids.insert(entity);
    }

    pub fn asteroid_count(&self) -> usize {
        self.asteroids.len()
    }

    /// Primary mesh of a body, if built.
    pub fn body_mesh(&self, id: BodyId) -> Option<Entity> {
        self.meshes.get(&id).copied()
    }

    /// Map a hit to the entity it represents. `None` is a normal outcome.
    pub fn resolve(&self, hit: PickHit) -> Option<Resolved> {
        if self.star == Some(hit.entity) {
            return Some(Resolved {
                identity: Identity::Body(BodyId::Sun),
                mesh: hit.entity,
                focus_offset: Subject::Body(BodyId::Sun).focus_offset(),
            });
        }

        if self.asteroids.contains(&hit.entity) {
            return Some(Resolved {
                identity: Identity::Asteroid(hit.entity),
                mesh: hit.entity,
                focus_offset: Subject::Asteroid.focus_offset(),
            });
        }

        let id = *self.materials.get(&hit.material?)?;
        Some(Resolved {
            identity: Identity::Body(id),
            mesh: self.body_mesh(id).unwrap_or(hit.entity),
            focus_offset: Subject::Body(id).focus_offset(),
        })
    }
}

/// Build a [`PickHit`] for an entity, reading its material if it has one.
pub fn pick_hit(
    entity: Entity,
    materials: &Query<&MeshMaterial3d<StandardMaterial>>,
) -> PickHit {
    PickHit {
        entity,
        material: materials.get(entity).ok().map(|m| m.0.id()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        index: IdentityIndex,
        sun: Entity,
        earth: Entity,
        earth_shell: Entity,
        earth_shell_material: AssetId<StandardMaterial>,
        rock: Entity,
        rock_material: AssetId<StandardMaterial>,
        stray: Entity,
    }

    fn fixture() -> Fixture {
        let mut world = World::new();
        let mut materials = Assets::<StandardMaterial>::default();
        let sun = world.spawn_empty().id();
        let earth = world.spawn_empty().id();
        let earth_shell = world.spawn_empty().id();
        let rock = world.spawn_empty().id();
        let stray = world.spawn_empty().id();

        let earth_material = materials.add(StandardMaterial::default()).id();
        let earth_shell_material = materials.add(StandardMaterial::default()).id();
        let rock_material = materials.add(StandardMaterial::default()).id();

        let mut index = IdentityIndex::default();
        index.register_star(sun);
        index.register_body(BodyId::Earth, earth, earth_material);
        index.register_material(BodyId::Earth, earth_shell_material);
        index.register_asteroid(rock);

        Fixture {
            index,
            sun,
            earth,
            earth_shell,
            earth_shell_material,
            rock,
            rock_material,
            stray,
        }
    }

    #[test]
    fn test_star_resolves_by_entity() {
        let f = fixture();
        let resolved = f
            .index
            .resolve(PickHit { entity: f.sun, material: None })
            .unwrap();
        assert_eq!(resolved.identity, Identity::Body(BodyId::Sun));
        assert_eq!(resolved.focus_offset, 120.0);
    }

    #[test]
    fn test_atmosphere_shell_resolves_to_planet() {
        let f = fixture();
        let resolved = f
            .index
            .resolve(PickHit {
                entity: f.earth_shell,
                material: Some(f.earth_shell_material),
            })
            .unwrap();
        assert_eq!(resolved.identity, Identity::Body(BodyId::Earth));
        assert_eq!(resolved.mesh, f.earth, "shell hit should stand for the planet mesh");
        assert_eq!(resolved.focus_offset, 25.0);
    }

    #[test]
    fn test_asteroid_membership_wins_over_material() {
        let f = fixture();
        let resolved = f
            .index
            .resolve(PickHit {
                entity: f.rock,
                material: Some(f.rock_material),
            })
            .unwrap();
        assert_eq!(resolved.identity, Identity::Asteroid(f.rock));
        assert_eq!(resolved.identity.name(), "Asteroid");
        assert_eq!(resolved.focus_offset, 6.0);
    }

    #[test]
    fn test_every_clone_resolves_to_itself() {
        let mut world = World::new();
        let mut materials = Assets::<StandardMaterial>::default();
        let shared = materials.add(StandardMaterial::default()).id();
        let own = materials.add(StandardMaterial::default()).id();

        let mut index = IdentityIndex::default();
        // A planet material that collides with the clones' template.
        index.register_body(BodyId::Mars, world.spawn_empty().id(), shared);

        let clones = [
            (world.spawn_empty().id(), shared),
            (world.spawn_empty().id(), shared),
            (world.spawn_empty().id(), own),
        ];
        for (clone, _) in clones {
            index.register_asteroid(clone);
        }
        assert_eq!(index.asteroid_count(), 3);

        for (clone, material) in clones {
            let resolved = index
                .resolve(PickHit {
                    entity: clone,
                    material: Some(material),
                })
                .unwrap();
            assert_eq!(resolved.identity, Identity::Asteroid(clone));
            assert_eq!(resolved.mesh, clone);
            assert_eq!(resolved.identity.name(), "Asteroid");
        }
    }

    #[test]
    fn test_unknown_primitive_is_a_miss() {
        let f = fixture();
        assert!(f
            .index
            .resolve(PickHit { entity: f.stray, material: None })
            .is_none());
        assert!(f
            .index
            .resolve(PickHit {
                entity: f.stray,
                material: Some(f.rock_material),
            })
            .is_none());
    }
}
