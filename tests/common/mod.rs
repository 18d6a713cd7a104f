//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use solar_tour::animation::AnimationPlugin;
use solar_tour::audio::AudioFeedbackPlugin;
use solar_tour::camera::CameraPlugin;
use solar_tour::identity::{Identity, IdentityIndex};
use solar_tour::interaction::{InteractionPlugin, NarrationSource, NarrationTrigger};
use solar_tour::quiz::QuizPlugin;
use solar_tour::registry::{BodyId, Subject};
use solar_tour::schedule::SchedulePlugin;
use solar_tour::speech::{Narrator, SpeechEngine, SpeechError, SpeechPlugin, VoiceSettings};
use solar_tour::ui::ConfettiPlugin;

/// Fixed frame time for every headless app.
pub const TICK: Duration = Duration::from_millis(50);

/// Speech engine that records what it was asked to say and finishes after
/// a fixed time.
#[derive(Clone, Default)]
pub struct RecordingSpeech {
    pub spoken: Arc<Mutex<Vec<String>>>,
    ends_at: Option<Duration>,
}

impl RecordingSpeech {
    const LENGTH: Duration = Duration::from_secs(2);

    pub fn log(&self) -> Vec<String> {
        self.spoken.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<String> {
        self.log().last().cloned()
    }
}

impl SpeechEngine for RecordingSpeech {
    fn speak(&mut self, text: &str, _: &VoiceSettings, now: Duration) -> Result<(), SpeechError> {
        self.spoken
            .lock()
            .map_err(|e| SpeechError::Rejected(e.to_string()))?
            .push(text.to_string());
        self.ends_at = Some(now + Self::LENGTH);
        Ok(())
    }

    fn cancel(&mut self) {
        self.ends_at = None;
    }

    fn is_speaking(&mut self, now: Duration) -> bool {
        self.ends_at.is_some_and(|end| now < end)
    }
}

/// Headless app running every plugin that does not need a window, with a
/// recording speech engine. Returns the app and a handle on the recording.
pub fn tour_app() -> (App, RecordingSpeech) {
    let speech = RecordingSpeech::default();
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(TICK))
        .insert_resource(Narrator::new(speech.clone()))
        .init_resource::<IdentityIndex>()
        .add_plugins((
            SchedulePlugin,
            SpeechPlugin,
            AudioFeedbackPlugin,
            ConfettiPlugin,
            InteractionPlugin,
            QuizPlugin,
            AnimationPlugin,
            CameraPlugin,
        ));
    // Startup, and a first tick with zero delta.
    app.update();
    (app, speech)
}

/// Run enough ticks for `secs` seconds to elapse.
pub fn advance(app: &mut App, secs: f32) {
    let ticks = (secs / TICK.as_secs_f32()).ceil() as usize + 1;
    for _ in 0..ticks {
        app.update();
    }
}

/// Queue a click narration for `id`.
pub fn click(app: &mut App, id: BodyId) {
    app.world_mut().write_message(NarrationTrigger {
        identity: Identity::Body(id),
        world_pos: None,
        focus_offset: Subject::Body(id).focus_offset(),
        source: NarrationSource::Click,
    });
}

/// Click every body once, one tick apart.
pub fn visit_all(app: &mut App) {
    for id in BodyId::ALL {
        click(app, id);
        app.update();
    }
}
