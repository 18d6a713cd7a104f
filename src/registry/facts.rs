//! Display facts and narration lines.
//!
//! Facts are shown in the info card (English). Narration is spoken and
//! captioned in Indonesian.

use super::{BodyId, Subject};

/// Descriptive facts for the info card.
#[derive(Clone, Copy, Debug)]
pub struct BodyFacts {
    pub radius: &'static str,
    pub tilt: &'static str,
    pub rotation: &'static str,
    pub orbit: &'static str,
    pub distance: &'static str,
    pub moons: &'static str,
    pub info: &'static str,
    pub narratives: &'static [&'static str],
}

const SUN: BodyFacts = BodyFacts {
    radius: "696,340 km",
    tilt: "0°",
    rotation: "about 25 days (equator)",
    orbit: "-",
    distance: "0 km (center of the solar system)",
    moons: "0 (star)",
    info: "The Sun is a huge ball of hot gas that gives us light and heat.",
    narratives: &[
        "The Sun is a huge ball of fire that gives light and warmth to the planets. Without the Sun there would be no day or plants.",
        "Think of the Sun as a giant lamp in the sky that keeps the planets warm and bright.",
    ],
};

const ASTEROID: BodyFacts = BodyFacts {
    radius: "various",
    tilt: "-",
    rotation: "various",
    orbit: "orbiting the Sun in belts or paths",
    distance: "mostly between Mars and Jupiter",
    moons: "0",
    info: "Asteroids are chunks of rock and ice that orbit the Sun.",
    narratives: &[
        "Asteroids are like space rocks that float around the Sun. Many live in the asteroid belt between Mars and Jupiter.",
        "Some asteroids are small like pebbles, others are big like mountains.",
    ],
};

const MERCURY: BodyFacts = BodyFacts {
    radius: "2,439.7 km",
    tilt: "0.034°",
    rotation: "58.6 Earth days",
    orbit: "88 Earth days",
    distance: "57.9 million km",
    moons: "0",
    info: "Mercury is small and very hot because it is so close to the Sun.",
    narratives: &[
        "Mercury is the smallest planet and orbits very close to the Sun, so it gets very hot.",
        "Mercury moves quickly around the Sun but spins slowly on its axis.",
    ],
};

const VENUS: BodyFacts = BodyFacts {
    radius: "6,051.8 km",
    tilt: "177.4°",
    rotation: "243 Earth days",
    orbit: "225 Earth days",
    distance: "108.2 million km",
    moons: "0",
    info: "Venus has thick clouds and is very hot.",
    narratives: &[
        "Venus is wrapped in thick clouds and is very hot, like a giant greenhouse.",
        "If you visited Venus you would feel much hotter than on Earth because of its thick atmosphere.",
    ],
};

const EARTH: BodyFacts = BodyFacts {
    radius: "6,371 km",
    tilt: "23.5°",
    rotation: "24 hours",
    orbit: "365 days",
    distance: "150 million km",
    moons: "1 (Moon)",
    info: "Earth is our home, full of water and life.",
    narratives: &[
        "Earth is the planet we live on. It has oceans, plants, animals and people.",
        "Earth is just the right distance from the Sun so life can grow here.",
    ],
};

const MARS: BodyFacts = BodyFacts {
    radius: "3,389.5 km",
    tilt: "25.19°",
    rotation: "1.03 Earth days",
    orbit: "687 Earth days",
    distance: "227.9 million km",
    moons: "2 (Phobos and Deimos)",
    info: "Mars is called the Red Planet because of its rusty color.",
    narratives: &[
        "Mars looks red because its soil has iron which is like rust.",
        "Scientists explore Mars because one day people might visit there.",
    ],
};

const JUPITER: BodyFacts = BodyFacts {
    radius: "69,911 km",
    tilt: "3.13°",
    rotation: "9.9 hours",
    orbit: "12 Earth years",
    distance: "778.5 million km",
    moons: "95+ (Ganymede, Callisto, Europa, Io are the largest)",
    info: "Jupiter is the largest planet and has a big storm called the Great Red Spot.",
    narratives: &[
        "Jupiter is a giant planet much bigger than Earth and has many moons.",
        "A huge storm on Jupiter is called the Great Red Spot and it has been blowing for a long time.",
    ],
};

const SATURN: BodyFacts = BodyFacts {
    radius: "58,232 km",
    tilt: "26.73°",
    rotation: "10.7 hours",
    orbit: "29.5 Earth years",
    distance: "1.4 billion km",
    moons: "146+",
    info: "Saturn is famous for its beautiful rings.",
    narratives: &[
        "Saturn has wide rings made of ice and rock that look like a giant hula-hoop.",
        "The rings make Saturn one of the most beautiful planets to look at.",
    ],
};

const URANUS: BodyFacts = BodyFacts {
    radius: "25,362 km",
    tilt: "97.77°",
    rotation: "17.2 hours",
    orbit: "84 Earth years",
    distance: "2.9 billion km",
    moons: "27+",
    info: "Uranus rotates on its side and is pale blue.",
    narratives: &[
        "Uranus spins on its side, as if it were rolling around the Sun.",
        "Uranus looks blue because of gases in its atmosphere.",
    ],
};

const NEPTUNE: BodyFacts = BodyFacts {
    radius: "24,622 km",
    tilt: "28.32°",
    rotation: "16.1 hours",
    orbit: "165 Earth years",
    distance: "4.5 billion km",
    moons: "14+",
    info: "Neptune is a deep blue and very cold planet with strong winds.",
    narratives: &[
        "Neptune is very far from the Sun and is deep blue in color.",
        "Winds on Neptune are some of the strongest in the solar system.",
    ],
};

const PLUTO: BodyFacts = BodyFacts {
    radius: "1,188.3 km",
    tilt: "122.53°",
    rotation: "6.4 Earth days",
    orbit: "248 Earth years",
    distance: "5.9 billion km",
    moons: "5 (Charon, Styx, Nix, Kerberos, Hydra)",
    info: "Pluto is a small, distant dwarf planet.",
    narratives: &[
        "Pluto is small and far away from the Sun, so it is very cold and dark.",
        "Once considered a planet, Pluto is now called a dwarf planet because it is small.",
    ],
};

/// Info-card facts for a subject.
pub fn facts(subject: Subject) -> &'static BodyFacts {
    match subject {
        Subject::Asteroid => &ASTEROID,
        Subject::Body(id) => match id {
            BodyId::Sun => &SUN,
            BodyId::Mercury => &MERCURY,
            BodyId::Venus => &VENUS,
            BodyId::Earth => &EARTH,
            BodyId::Mars => &MARS,
            BodyId::Jupiter => &JUPITER,
            BodyId::Saturn => &SATURN,
            BodyId::Uranus => &URANUS,
            BodyId::Neptune => &NEPTUNE,
            BodyId::Pluto => &PLUTO,
        },
    }
}

/// Spoken (Indonesian) description for a subject.
pub fn narration(subject: Subject) -> &'static str {
    match subject {
        Subject::Asteroid => "Ini asteroid. Potongan batu atau logam yang mengorbit Matahari.",
        Subject::Body(id) => match id {
            BodyId::Sun => "Ini Matahari. Bintang panas pusat tata surya kita.",
            BodyId::Mercury => {
                "Ini Merkurius. Planet kecil yang sangat panas karena dekat dengan Matahari."
            }
            BodyId::Venus => "Ini Venus. Planet dengan awan tebal dan sangat panas.",
            BodyId::Earth => "Ini Bumi. Tempat tinggal kita yang berwarna biru.",
            BodyId::Mars => "Ini Mars. Planet merah yang penuh debu.",
            BodyId::Jupiter => "Ini Jupiter. Planet terbesar dengan bintik merah besar.",
            BodyId::Saturn => "Ini Saturnus. Dikenal karena cincinnya yang indah.",
            BodyId::Uranus => "Ini Uranus. Planet biru yang berputar miring.",
            BodyId::Neptune => "Ini Neptunus. Planet biru yang sangat jauh dan dingin.",
            BodyId::Pluto => "Ini Pluto. Planet kerdil yang jauh dari Matahari.",
        },
    }
}

/// Caption title shown while the welcome line plays.
pub const WELCOME_TITLE: &str = "Selamat Datang";

/// Spoken when the tour starts.
pub const WELCOME_TEXT: &str = "Selamat datang! Mari kita mulai menjelajahi tata surya. Klik pada planet untuk mendengar deskripsinya.";
