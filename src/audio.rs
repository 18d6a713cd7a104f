//! Feedback tones for quiz answers.

use std::time::Duration;

use bevy::audio::{PlaybackSettings, Volume};
use bevy::prelude::*;

use crate::types::TickSet;

/// Kind of feedback tone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// Short high ping.
    Positive,
    /// Longer low buzz.
    Negative,
}

impl Tone {
    pub fn frequency(self) -> f32 {
        match self {
            Tone::Positive => 880.0,
            Tone::Negative => 220.0,
        }
    }

    pub fn duration(self) -> Duration {
        match self {
            Tone::Positive => Duration::from_millis(200),
            Tone::Negative => Duration::from_millis(380),
        }
    }

    pub fn volume(self) -> f32 {
        match self {
            Tone::Positive => 0.12,
            Tone::Negative => 0.08,
        }
    }
}

/// Request to play a tone.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayTone(pub Tone);

pub struct AudioFeedbackPlugin;

impl Plugin for AudioFeedbackPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlayTone>()
            .add_systems(Update, play_tones.in_set(TickSet::Effects));
    }
}

/// Spawn a self-despawning audio player per requested tone.
///
/// Without an audio backend the `Pitch` asset store is missing and tones are
/// skipped.
fn play_tones(
    mut commands: Commands,
    mut requests: MessageReader<PlayTone>,
    pitches: Option<ResMut<Assets<Pitch>>>,
) {
    let Some(mut pitches) = pitches else {
        if !requests.is_empty() {
            debug!("No audio output, skipping {} tone(s)", requests.len());
            requests.clear();
        }
        return;
    };

    for PlayTone(tone) in requests.read() {
        let handle = pitches.add(Pitch::new(tone.frequency(), tone.duration()));
        commands.spawn((
            AudioPlayer(handle),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(tone.volume())),
        ));
    }
}
