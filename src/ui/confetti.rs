//! Falling-star confetti for correct quiz answers.
//!
//! A burst spawns a star every [`SPAWN_INTERVAL_SECS`] for its duration. Each
//! star falls from the top edge to somewhere near the bottom over two to three
//! seconds, spinning as it goes. A burst's stars are cleared
//! [`LINGER_SECS`] after it stops spawning. Positions are in screen fractions
//! so the simulation runs without a window.

use std::f32::consts::TAU;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::TickSet;

/// Default burst length.
pub const BURST_SECS: f32 = 3.0;
pub const SPAWN_INTERVAL_SECS: f32 = 0.08;
/// How long a finished burst's stars stay on screen.
pub const LINGER_SECS: f32 = 1.5;

const FALL_SECS: std::ops::Range<f32> = 2.0..3.0;
const LANDING_Y: std::ops::Range<f32> = 0.8..1.1;
const OPACITY: std::ops::RangeInclusive<f32> = 0.7..=1.0;
const FINAL_OPACITY: f32 = 0.9;
const STAR_SIZE: f32 = 14.0;
const STAR_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 215, 90);

/// Request a confetti burst.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct ConfettiBurst {
    pub duration_secs: f32,
}

impl Default for ConfettiBurst {
    fn default() -> Self {
        Self {
            duration_secs: BURST_SECS,
        }
    }
}

/// One falling star.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    /// Horizontal position as a fraction of the screen width.
    pub x: f32,
    pub landing_y: f32,
    pub fall_secs: f32,
    pub age: f32,
    pub start_opacity: f32,
    pub start_angle: f32,
    pub end_angle: f32,
}

impl Star {
    fn spawn(rng: &mut impl Rng) -> Self {
        let start_angle = rng.random_range(0.0..TAU);
        Self {
            x: rng.random_range(0.0..1.0),
            landing_y: rng.random_range(LANDING_Y),
            fall_secs: rng.random_range(FALL_SECS),
            age: 0.0,
            start_opacity: rng.random_range(OPACITY),
            start_angle,
            end_angle: start_angle + rng.random_range(0.0..2.0 * TAU),
        }
    }

    pub fn progress(&self) -> f32 {
        (self.age / self.fall_secs).clamp(0.0, 1.0)
    }

    /// Vertical position as a fraction of the screen height.
    pub fn y(&self) -> f32 {
        self.landing_y * self.progress()
    }

    pub fn angle(&self) -> f32 {
        self.start_angle + (self.end_angle - self.start_angle) * self.progress()
    }

    pub fn opacity(&self) -> f32 {
        self.start_opacity + (FINAL_OPACITY - self.start_opacity) * self.progress()
    }
}

#[derive(Clone, Debug)]
struct Burst {
    /// Spawning time left; lingering once it reaches zero.
    remaining: f32,
    linger: f32,
    since_spawn: f32,
    stars: Vec<Star>,
}

impl Burst {
    fn new(duration: f32) -> Self {
        Self {
            remaining: duration.max(0.0),
            linger: LINGER_SECS,
            since_spawn: 0.0,
            stars: Vec::new(),
        }
    }

    /// Advance by `dt`. Returns false once the burst should be dropped.
    fn advance(&mut self, dt: f32, rng: &mut impl Rng) -> bool {
        for star in &mut self.stars {
            star.age += dt;
        }

        if self.remaining > 0.0 {
            let active = dt.min(self.remaining);
            self.remaining -= dt;
            self.since_spawn += active;
            while self.since_spawn >= SPAWN_INTERVAL_SECS {
                self.since_spawn -= SPAWN_INTERVAL_SECS;
                self.stars.push(Star::spawn(rng));
            }
            if self.remaining > 0.0 {
                return true;
            }
            // Time past the end of spawning counts toward lingering.
            self.linger += self.remaining;
            self.remaining = 0.0;
            return self.linger > 0.0;
        }

        self.linger -= dt;
        self.linger > 0.0
    }
}

/// Bursts in progress.
#[derive(Resource)]
pub struct ConfettiState {
    bursts: Vec<Burst>,
    rng: ChaCha8Rng,
}

impl Default for ConfettiState {
    fn default() -> Self {
        Self::with_rng(ChaCha8Rng::from_rng(&mut rand::rng()))
    }
}

impl ConfettiState {
    pub fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            bursts: Vec::new(),
            rng,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn start(&mut self, duration_secs: f32) {
        self.bursts.push(Burst::new(duration_secs));
    }

    pub fn advance(&mut self, dt: f32) {
        let rng = &mut self.rng;
        self.bursts.retain_mut(|burst| burst.advance(dt, rng));
    }

    pub fn is_active(&self) -> bool {
        !self.bursts.is_empty()
    }

    pub fn stars(&self) -> impl Iterator<Item = &Star> {
        self.bursts.iter().flat_map(|b| b.stars.iter())
    }
}

/// Headless confetti simulation. Drawing is added by the UI plugin.
pub struct ConfettiPlugin;

impl Plugin for ConfettiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ConfettiState>()
            .add_message::<ConfettiBurst>()
            .add_systems(Update, update_confetti.in_set(TickSet::Effects));
    }
}

fn update_confetti(
    time: Res<Time>,
    mut requests: MessageReader<ConfettiBurst>,
    mut state: ResMut<ConfettiState>,
) {
    for burst in requests.read() {
        state.start(burst.duration_secs);
    }
    if state.is_active() {
        state.advance(time.delta_secs());
    }
}

/// Paint every star on the foreground layer.
pub fn confetti_system(mut contexts: EguiContexts, state: Res<ConfettiState>) {
    if !state.is_active() {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let rect = ctx.viewport_rect();
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("confetti"),
    ));

    for star in state.stars() {
        let center = egui::pos2(
            rect.left() + star.x * rect.width(),
            rect.top() + star.y() * rect.height(),
        );
        let color = STAR_COLOR.gamma_multiply(star.opacity());
        // A spinning rhombus reads as a twinkling star at this size.
        let points: Vec<egui::Pos2> = (0..4)
            .map(|i| {
                let r = if i % 2 == 0 { STAR_SIZE / 2.0 } else { STAR_SIZE / 5.0 };
                let a = star.angle() + i as f32 * TAU / 4.0;
                center + egui::vec2(a.cos(), a.sin()) * r
            })
            .collect();
        painter.add(egui::Shape::convex_polygon(points, color, egui::Stroke::NONE));
    }
}
