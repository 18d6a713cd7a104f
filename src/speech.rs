//! Spoken narration.
//!
//! Text-to-speech lives behind the [`SpeechEngine`] trait. The [`Narrator`]
//! owns one engine and plays at most one utterance at a time: a new request
//! cancels whatever is in flight. Start and end are reported as
//! [`SpeechSignal`] messages, which drive the caption overlay.
//!
//! When the engine refuses an utterance the narrator falls back to
//! [`PacedCaptions`], so the caption is still shown for a reading-paced
//! interval.

use std::time::Duration;

use bevy::prelude::*;
use thiserror::Error;

use crate::interaction::ExplorationState;
use crate::registry::Subject;
use crate::types::TickSet;

/// Words per second at rate 1.0 for the paced fallback.
const WORDS_PER_SEC: f32 = 2.5;

/// Shortest time a caption stays up.
const MIN_CAPTION_SECS: f32 = 1.5;

/// Errors reported by a speech engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpeechError {
    #[error("speech engine unavailable")]
    Unavailable,
    #[error("utterance rejected: {0}")]
    Rejected(String),
}

/// Voice parameters applied to every utterance.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct VoiceSettings {
    pub locale: String,
    pub rate: f32,
    pub pitch: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            locale: "id-ID".to_string(),
            rate: 1.0,
            pitch: 1.0,
        }
    }
}

/// A text-to-speech backend.
///
/// Engines are polled once per tick. `speak` replaces anything in flight.
pub trait SpeechEngine: Send + Sync + 'static {
    fn speak(&mut self, text: &str, voice: &VoiceSettings, now: Duration) -> Result<(), SpeechError>;

    fn cancel(&mut self);

    /// Whether the last utterance is still playing at `now`.
    fn is_speaking(&mut self, now: Duration) -> bool;
}

/// Silent engine that "speaks" for as long as the text takes to read.
#[derive(Default, Clone, Debug)]
pub struct PacedCaptions {
    ends_at: Option<Duration>,
}

impl PacedCaptions {
    /// Reading time for `text` at the given rate.
    pub fn reading_time(text: &str, rate: f32) -> Duration {
        let words = text.split_whitespace().count() as f32;
        let secs = words / (WORDS_PER_SEC * rate.max(0.1));
        Duration::from_secs_f32(secs.max(MIN_CAPTION_SECS))
    }
}

impl SpeechEngine for PacedCaptions {
    fn speak(&mut self, text: &str, voice: &VoiceSettings, now: Duration) -> Result<(), SpeechError> {
        self.ends_at = Some(now + Self::reading_time(text, voice.rate));
        Ok(())
    }

    fn cancel(&mut self) {
        self.ends_at = None;
    }

    fn is_speaking(&mut self, now: Duration) -> bool {
        self.ends_at.is_some_and(|end| now < end)
    }
}

/// One request to speak.
#[derive(Clone, Debug, PartialEq)]
pub struct Utterance {
    pub text: String,
    /// Caption title. Utterances without one are spoken without an overlay.
    pub title: Option<String>,
    /// The body or asteroid being described, if any.
    pub subject: Option<Subject>,
}

impl Utterance {
    /// Narration with a caption overlay.
    pub fn captioned(title: impl Into<String>, text: impl Into<String>, subject: Option<Subject>) -> Self {
        Self {
            text: text.into(),
            title: Some(title.into()),
            subject,
        }
    }

    /// Speech with no overlay.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: None,
            subject: None,
        }
    }
}

/// Request to speak, cancelling anything in flight.
#[derive(Message, Clone, Debug)]
pub struct Speak(pub Utterance);

/// Start and end of an utterance.
#[derive(Message, Clone, Debug, PartialEq)]
pub enum SpeechSignal {
    Started { id: u64, utterance: Utterance },
    Ended { id: u64, utterance: Utterance },
}

/// Caption overlay contents.
#[derive(Resource, Default, Clone, Debug, PartialEq)]
pub struct CaptionState {
    /// Utterance currently captioned.
    pub owner: Option<u64>,
    pub title: String,
    pub text: String,
}

impl CaptionState {
    pub fn is_visible(&self) -> bool {
        self.owner.is_some()
    }
}

struct Playing {
    id: u64,
    utterance: Utterance,
    fallback: bool,
}

/// Owns the speech engine and the utterance in flight.
#[derive(Resource)]
pub struct Narrator {
    engine: Box<dyn SpeechEngine>,
    fallback: PacedCaptions,
    playing: Option<Playing>,
    next_id: u64,
}

impl Default for Narrator {
    fn default() -> Self {
        Self::new(PacedCaptions::default())
    }
}

impl Narrator {
    pub fn new(engine: impl SpeechEngine) -> Self {
        Self {
            engine: Box::new(engine),
            fallback: PacedCaptions::default(),
            playing: None,
            next_id: 1,
        }
    }

    pub fn is_speaking(&self) -> bool {
        self.playing.is_some()
    }

    /// Start `utterance`, cancelling the one in flight. Returns the signals to emit.
    pub fn speak(&mut self, utterance: Utterance, voice: &VoiceSettings, now: Duration) -> Vec<SpeechSignal> {
        let mut signals = Vec::new();
        if let Some(old) = self.playing.take() {
            self.engine.cancel();
            self.fallback.cancel();
            signals.push(SpeechSignal::Ended {
                id: old.id,
                utterance: old.utterance,
            });
        }

        let fallback = match self.engine.speak(&utterance.text, voice, now) {
            Ok(()) => false,
            Err(err) => {
                warn!("Speech failed, showing caption only: {err}");
                // Paced captions never fail.
                let _ = self.fallback.speak(&utterance.text, voice, now);
                true
            }
        };

        let id = self.next_id;
        self.next_id += 1;
        signals.push(SpeechSignal::Started {
            id,
            utterance: utterance.clone(),
        });
        self.playing = Some(Playing {
            id,
            utterance,
            fallback,
        });
        signals
    }

    /// Check whether the utterance in flight has ended.
    pub fn poll(&mut self, now: Duration) -> Option<SpeechSignal> {
        let playing = self.playing.as_ref()?;
        let still = if playing.fallback {
            self.fallback.is_speaking(now)
        } else {
            self.engine.is_speaking(now)
        };
        if still {
            return None;
        }
        self.playing.take().map(|p| SpeechSignal::Ended {
            id: p.id,
            utterance: p.utterance,
        })
    }
}

/// Plugin providing narration and captions.
pub struct SpeechPlugin;

impl Plugin for SpeechPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VoiceSettings>()
            .init_resource::<CaptionState>()
            .init_resource::<Narrator>()
            .add_message::<Speak>()
            .add_message::<SpeechSignal>()
            .add_systems(
                Update,
                (drive_narrator, apply_speech_signals)
                    .chain()
                    .in_set(TickSet::Effects),
            );
    }
}

fn drive_narrator(
    time: Res<Time>,
    voice: Res<VoiceSettings>,
    mut narrator: ResMut<Narrator>,
    mut requests: MessageReader<Speak>,
    mut signals: MessageWriter<SpeechSignal>,
) {
    let now = time.elapsed();
    for Speak(utterance) in requests.read() {
        signals.write_batch(narrator.speak(utterance.clone(), &voice, now));
    }
    if let Some(ended) = narrator.poll(now) {
        signals.write(ended);
    }
}

/// Start shows the caption and marks the subject as speaking; end undoes both.
fn apply_speech_signals(
    mut signals: MessageReader<SpeechSignal>,
    mut caption: ResMut<CaptionState>,
    mut state: ResMut<ExplorationState>,
) {
    for signal in signals.read() {
        match signal {
            SpeechSignal::Started { id, utterance } => {
                if let Some(title) = &utterance.title {
                    *caption = CaptionState {
                        owner: Some(*id),
                        title: title.clone(),
                        text: utterance.text.clone(),
                    };
                }
                if utterance.subject.is_some() {
                    state.speaking = utterance.subject;
                }
            }
            SpeechSignal::Ended { id, utterance } => {
                if caption.owner == Some(*id) {
                    *caption = CaptionState::default();
                }
                if utterance.subject.is_some() && state.speaking == utterance.subject {
                    state.speaking = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::BodyId;

    struct Broken;

    impl SpeechEngine for Broken {
        fn speak(&mut self, _: &str, _: &VoiceSettings, _: Duration) -> Result<(), SpeechError> {
            Err(SpeechError::Unavailable)
        }
        fn cancel(&mut self) {}
        fn is_speaking(&mut self, _: Duration) -> bool {
            true
        }
    }

    #[test]
    fn test_reading_time_has_floor() {
        assert_eq!(
            PacedCaptions::reading_time("Halo", 1.0),
            Duration::from_secs_f32(MIN_CAPTION_SECS)
        );
        let long = "kata ".repeat(25);
        assert_eq!(PacedCaptions::reading_time(&long, 1.0), Duration::from_secs(10));
        assert_eq!(PacedCaptions::reading_time(&long, 2.0), Duration::from_secs(5));
    }

    #[test]
    fn test_new_utterance_ends_previous() {
        let mut narrator = Narrator::default();
        let voice = VoiceSettings::default();
        let first = Utterance::captioned("Mars", "Ini Mars.", Some(Subject::Body(BodyId::Mars)));
        let second = Utterance::plain("Salah, coba lagi.");

        narrator.speak(first.clone(), &voice, Duration::ZERO);
        let signals = narrator.speak(second.clone(), &voice, Duration::from_millis(200));

        assert_eq!(signals.len(), 2);
        assert_eq!(signals[0], SpeechSignal::Ended { id: 1, utterance: first });
        assert_eq!(signals[1], SpeechSignal::Started { id: 2, utterance: second });
    }

    #[test]
    fn test_poll_ends_after_reading_time() {
        let mut narrator = Narrator::default();
        narrator.speak(Utterance::plain("Halo"), &VoiceSettings::default(), Duration::ZERO);
        assert!(narrator.poll(Duration::from_secs(1)).is_none());
        assert!(matches!(
            narrator.poll(Duration::from_secs(2)),
            Some(SpeechSignal::Ended { id: 1, .. })
        ));
        assert!(!narrator.is_speaking());
    }

    #[test]
    fn test_failed_engine_falls_back_to_paced_caption() {
        let mut narrator = Narrator::new(Broken);
        let signals = narrator.speak(
            Utterance::captioned("Bumi", "Ini Bumi.", None),
            &VoiceSettings::default(),
            Duration::ZERO,
        );
        assert!(matches!(signals[..], [SpeechSignal::Started { .. }]));
        // Broken engine claims to speak forever, but the fallback governs.
        assert!(narrator.poll(Duration::from_secs(3)).is_some());
    }
}
