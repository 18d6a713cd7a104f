//! Body registry: static descriptive data for every body in the tour.
//!
//! Everything here is plain data. The scene builder reads [`data`] to
//! construct the hierarchy, narration and the info card read [`facts`].

pub mod data;
pub mod facts;

pub use data::{
    body_data, AtmosphereData, BodyData, MoonData, MoonOrbitStyle, MoonSource, RingData,
    ASTEROID_FOCUS_OFFSET, ATMOSPHERE_MARGIN, ATMOSPHERE_ROLL, BODIES,
};
pub use facts::{facts, narration, BodyFacts};

/// Identifier for a body in the tour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl BodyId {
    /// Every body, Sun outward. Proximity checks walk this order.
    pub const ALL: [BodyId; 10] = [
        BodyId::Sun,
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
        BodyId::Pluto,
    ];

    /// Stable name, used in captions and logs.
    pub fn name(&self) -> &'static str {
        match self {
            BodyId::Sun => "Sun",
            BodyId::Mercury => "Mercury",
            BodyId::Venus => "Venus",
            BodyId::Earth => "Earth",
            BodyId::Mars => "Mars",
            BodyId::Jupiter => "Jupiter",
            BodyId::Saturn => "Saturn",
            BodyId::Uranus => "Uranus",
            BodyId::Neptune => "Neptune",
            BodyId::Pluto => "Pluto",
        }
    }

    /// Look a body up by its stable name.
    pub fn from_name(name: &str) -> Option<BodyId> {
        BodyId::ALL.into_iter().find(|id| id.name() == name)
    }

    /// Position of this body in [`BodyId::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Something that can be narrated: a body, or the generic asteroid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subject {
    Body(BodyId),
    Asteroid,
}

impl Subject {
    pub fn name(&self) -> &'static str {
        match self {
            Subject::Body(id) => id.name(),
            Subject::Asteroid => "Asteroid",
        }
    }

    /// Framing distance used when focusing the camera on this subject.
    pub fn focus_offset(&self) -> f32 {
        match self {
            Subject::Body(id) => body_data(*id).focus_offset,
            Subject::Asteroid => ASTEROID_FOCUS_OFFSET,
        }
    }
}

/// Bodies that must all be visited before the quiz unlocks.
pub const QUIZ_TARGETS: [BodyId; 10] = BodyId::ALL;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for id in BodyId::ALL {
            assert_eq!(BodyId::from_name(id.name()), Some(id));
        }
        assert_eq!(BodyId::from_name("Asteroid"), None);
        assert_eq!(BodyId::from_name("earth"), None);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, id) in BodyId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_focus_offsets() {
        assert_eq!(Subject::Body(BodyId::Sun).focus_offset(), 120.0);
        assert_eq!(Subject::Body(BodyId::Mars).focus_offset(), 15.0);
        assert_eq!(Subject::Asteroid.focus_offset(), 6.0);
    }

    #[test]
    fn test_quiz_targets_cover_every_body_once() {
        let mut seen = std::collections::HashSet::new();
        for id in QUIZ_TARGETS {
            assert!(seen.insert(id), "{id:?} listed twice");
        }
        assert_eq!(seen.len(), BodyId::ALL.len());
    }
}
