//! Exploration progress and narration.
//!
//! Two paths lead to a narration: clicking a body (see `input`) and flying
//! close to one in first-person mode (see [`proximity`]). Both end up as a
//! [`NarrationTrigger`] handled by one system, which shows the caption bubble,
//! speaks the description, and records the visit. Only the proximity path is
//! debounced.
//!
//! Once every quiz target has been visited the quiz is scheduled exactly once.

pub mod proximity;

use std::collections::HashSet;

use bevy::prelude::*;

use crate::camera::CameraMode;
use crate::identity::{Identity, IdentityIndex};
use crate::registry::{narration, BodyId, Subject, QUIZ_TARGETS};
use crate::schedule::{DeferredEffect, EffectDue, Pending};
use crate::speech::{Speak, Utterance};
use crate::types::TickSet;

pub use proximity::{trigger_distance, PROXIMITY_MARGIN};

/// How long a caption bubble stays up.
pub const BUBBLE_SECS: f32 = 6.0;

/// Delay between the last required visit and the quiz opening.
pub const QUIZ_START_DELAY_SECS: f32 = 0.8;

/// Which path produced a narration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NarrationSource {
    Click,
    Proximity,
}

/// Request to narrate a resolved entity.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct NarrationTrigger {
    pub identity: Identity,
    /// Where to anchor the bubble. `None` uses the default placement.
    pub world_pos: Option<Vec3>,
    pub focus_offset: f32,
    pub source: NarrationSource,
}

/// Exploration progress for the whole session.
#[derive(Resource, Debug)]
pub struct ExplorationState {
    pub visited: HashSet<BodyId>,
    pub camera_mode: CameraMode,
    /// False only while the quiz is open.
    pub movement_enabled: bool,
    /// Debounce marker for proximity narration.
    pub last_proximity: Option<BodyId>,
    /// Subject whose narration is playing.
    pub speaking: Option<Subject>,
    /// Set once the quiz has been scheduled; it never is again.
    pub quiz_unlocked: bool,
}

impl Default for ExplorationState {
    fn default() -> Self {
        Self {
            visited: HashSet::new(),
            camera_mode: CameraMode::default(),
            movement_enabled: true,
            last_proximity: None,
            speaking: None,
            quiz_unlocked: false,
        }
    }
}

impl ExplorationState {
    /// Record a visit. Returns true when this visit completes the quiz target
    /// list for the first time.
    pub fn mark_visited(&mut self, subject: Subject) -> bool {
        let Subject::Body(id) = subject else {
            return false;
        };
        if !QUIZ_TARGETS.contains(&id) {
            return false;
        }
        self.visited.insert(id);
        if !self.quiz_unlocked && self.visited_count() == QUIZ_TARGETS.len() {
            self.quiz_unlocked = true;
            return true;
        }
        false
    }

    pub fn visited_count(&self) -> usize {
        QUIZ_TARGETS
            .iter()
            .filter(|id| self.visited.contains(id))
            .count()
    }

    pub fn has_visited(&self, id: BodyId) -> bool {
        self.visited.contains(&id)
    }

    /// HUD readout, e.g. `Kunjungan: 3/10`.
    pub fn visit_label(&self) -> String {
        format!("Kunjungan: {}/{}", self.visited_count(), QUIZ_TARGETS.len())
    }
}

/// Caption bubble anchored near the narrated body.
#[derive(Resource, Default, Clone, Debug, PartialEq)]
pub struct BubbleState {
    pub visible: bool,
    pub title: String,
    pub text: String,
    /// World position to project the bubble from.
    pub anchor: Option<Vec3>,
    /// Bumped on every show so stale hide timers are ignored.
    pub generation: u64,
}

impl BubbleState {
    /// Show a bubble and return its generation.
    pub fn show(&mut self, title: &str, text: &str, anchor: Option<Vec3>) -> u64 {
        self.generation += 1;
        self.visible = true;
        self.title = title.to_string();
        self.text = text.to_string();
        self.anchor = anchor;
        self.generation
    }

    /// Hide the bubble if it is still the one shown at `generation`.
    pub fn hide(&mut self, generation: u64) -> bool {
        if self.visible && self.generation == generation {
            self.visible = false;
            return true;
        }
        false
    }
}

/// Body or asteroid last clicked, shown in the info card.
#[derive(Resource, Default, Clone, Debug, PartialEq)]
pub struct Selection {
    pub subject: Option<Subject>,
    /// Primitive that stands for the selection.
    pub entity: Option<Entity>,
    pub focus_offset: f32,
}

impl Selection {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Plugin providing exploration state and narration.
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ExplorationState>()
            .init_resource::<BubbleState>()
            .init_resource::<Selection>()
            .add_message::<NarrationTrigger>()
            .add_systems(
                Update,
                (proximity::check_proximity, narrate, hide_bubbles)
                    .chain()
                    .in_set(TickSet::Interact),
            );
    }
}

/// Show, speak and record every narration requested this tick.
pub fn narrate(
    mut triggers: MessageReader<NarrationTrigger>,
    index: Res<IdentityIndex>,
    mut state: ResMut<ExplorationState>,
    mut bubble: ResMut<BubbleState>,
    mut selection: ResMut<Selection>,
    mut pending: ResMut<Pending>,
    mut speak: MessageWriter<Speak>,
) {
    for trigger in triggers.read() {
        let subject = trigger.identity.subject();
        let title = subject.name();
        let text = narration(subject);

        let generation = bubble.show(title, text, trigger.world_pos);
        pending.after(BUBBLE_SECS, DeferredEffect::HideBubble { generation });
        speak.write(Speak(Utterance::captioned(title, text, Some(subject))));

        if trigger.source == NarrationSource::Click {
            *selection = Selection {
                subject: Some(subject),
                entity: match trigger.identity {
                    Identity::Asteroid(entity) => Some(entity),
                    Identity::Body(id) => index.body_mesh(id),
                },
                focus_offset: trigger.focus_offset,
            };
        }

        if state.mark_visited(subject) {
            info!("All {} bodies visited, quiz unlocked", QUIZ_TARGETS.len());
            pending.after(QUIZ_START_DELAY_SECS, DeferredEffect::StartQuiz);
        }
        debug!("Narrated {title} ({:?}), {}", trigger.source, state.visit_label());
    }
}

fn hide_bubbles(mut due: MessageReader<EffectDue>, mut bubble: ResMut<BubbleState>) {
    for EffectDue(effect) in due.read() {
        if let DeferredEffect::HideBubble { generation } = effect {
            bubble.hide(*generation);
        }
    }
}
