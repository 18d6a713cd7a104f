//! End-of-tour quiz.
//!
//! The quiz opens once every body has been visited. Each question has one
//! correct option. A correct answer plays a positive tone, bursts confetti and
//! moves on after a short pause; a wrong one plays a negative tone and asks
//! again. Movement is disabled while the quiz is open and restored when it
//! finishes or is dismissed.

use bevy::prelude::*;

use crate::audio::{PlayTone, Tone};
use crate::interaction::ExplorationState;
use crate::schedule::{DeferredEffect, EffectDue, Pending};
use crate::speech::{Speak, Utterance};
use crate::types::TickSet;
use crate::ui::ConfettiBurst;

/// Pause between a correct answer and the next question.
pub const ADVANCE_DELAY_SECS: f32 = 0.9;

pub const RETRY_PROMPT: &str = "Salah, coba lagi.";
pub const COMPLETION_TEXT: &str = "Selamat! Anda telah menyelesaikan kuis.";

/// A multiple-choice question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    /// Index into `options` of the correct answer.
    pub answer: usize,
}

pub const QUESTIONS: [Question; 3] = [
    Question {
        prompt: "Planet apa yang dijuluki Planet Merah?",
        options: &["Bumi", "Mars", "Jupiter"],
        answer: 1,
    },
    Question {
        prompt: "Di mana tempat tinggal manusia?",
        options: &["Matahari", "Saturnus", "Bumi"],
        answer: 2,
    },
    Question {
        prompt: "Pusat tata surya kita adalah?",
        options: &["Matahari", "Bulan", "Bintang"],
        answer: 0,
    },
];

/// Result of submitting an answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Correct; the next question follows after a pause.
    Advance { next: usize },
    /// Correct on the last question.
    Finished,
    /// Wrong; the same question stays up.
    Retry,
    /// Submitted while waiting for the next question.
    Ignored,
}

/// An open quiz. Removed when it finishes or is dismissed.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct QuizSession {
    questions: &'static [Question],
    index: usize,
    awaiting_next: bool,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(&QUESTIONS)
    }
}

impl QuizSession {
    pub fn new(questions: &'static [Question]) -> Self {
        Self {
            questions,
            index: 0,
            awaiting_next: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current(&self) -> Option<&'static Question> {
        self.questions.get(self.index)
    }

    /// True between a correct answer and the next question appearing.
    pub fn is_awaiting_next(&self) -> bool {
        self.awaiting_next
    }

    /// Modal title, e.g. `Pertanyaan 1 dari 3`.
    pub fn title(&self) -> String {
        format!("Pertanyaan {} dari {}", self.index + 1, self.len())
    }

    pub fn answer(&mut self, choice: usize) -> AnswerOutcome {
        if self.awaiting_next {
            return AnswerOutcome::Ignored;
        }
        let Some(question) = self.current() else {
            return AnswerOutcome::Ignored;
        };
        if choice != question.answer {
            return AnswerOutcome::Retry;
        }
        let next = self.index + 1;
        if next < self.len() {
            self.awaiting_next = true;
            AnswerOutcome::Advance { next }
        } else {
            AnswerOutcome::Finished
        }
    }

    /// Display the question at `index`.
    pub fn show(&mut self, index: usize) {
        if index < self.len() {
            self.index = index;
            self.awaiting_next = false;
        }
    }
}

/// The player picked option `.0` of the current question.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizAnswer(pub usize);

/// The player dismissed the quiz.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloseQuiz;

pub struct QuizPlugin;

impl Plugin for QuizPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<QuizAnswer>()
            .add_message::<CloseQuiz>()
            .add_systems(
                Update,
                (handle_quiz_effects, answer_quiz, close_quiz)
                    .chain()
                    .in_set(TickSet::Interact),
            );
    }
}

fn speak_question(speak: &mut MessageWriter<Speak>, session: &QuizSession) {
    if let Some(question) = session.current() {
        speak.write(Speak(Utterance::plain(question.prompt)));
    }
}

/// Open the quiz and move to the next question when their timers fire.
fn handle_quiz_effects(
    mut commands: Commands,
    mut due: MessageReader<EffectDue>,
    mut session: Option<ResMut<QuizSession>>,
    mut state: ResMut<ExplorationState>,
    mut speak: MessageWriter<Speak>,
) {
    for EffectDue(effect) in due.read() {
        match effect {
            DeferredEffect::StartQuiz => {
                if session.is_some() {
                    continue;
                }
                let fresh = QuizSession::default();
                state.movement_enabled = false;
                speak_question(&mut speak, &fresh);
                info!("Quiz started ({} questions)", fresh.len());
                commands.insert_resource(fresh);
            }
            DeferredEffect::ShowQuestion(index) => {
                // A dismissed quiz leaves nothing to advance.
                let Some(session) = session.as_mut() else {
                    continue;
                };
                session.show(*index);
                speak_question(&mut speak, session);
            }
            DeferredEffect::HideBubble { .. } => {}
        }
    }
}

fn answer_quiz(
    mut commands: Commands,
    mut answers: MessageReader<QuizAnswer>,
    session: Option<ResMut<QuizSession>>,
    mut state: ResMut<ExplorationState>,
    mut pending: ResMut<Pending>,
    mut speak: MessageWriter<Speak>,
    mut tones: MessageWriter<PlayTone>,
    mut confetti: MessageWriter<ConfettiBurst>,
) {
    let Some(mut session) = session else {
        answers.clear();
        return;
    };

    for QuizAnswer(choice) in answers.read() {
        match session.answer(*choice) {
            AnswerOutcome::Advance { next } => {
                tones.write(PlayTone(Tone::Positive));
                confetti.write(ConfettiBurst::default());
                pending.after(ADVANCE_DELAY_SECS, DeferredEffect::ShowQuestion(next));
            }
            AnswerOutcome::Finished => {
                tones.write(PlayTone(Tone::Positive));
                confetti.write(ConfettiBurst::default());
                state.movement_enabled = true;
                speak.write(Speak(Utterance::plain(COMPLETION_TEXT)));
                commands.remove_resource::<QuizSession>();
                info!("Quiz completed");
                break;
            }
            AnswerOutcome::Retry => {
                tones.write(PlayTone(Tone::Negative));
                speak.write(Speak(Utterance::plain(RETRY_PROMPT)));
            }
            AnswerOutcome::Ignored => {}
        }
    }
}

/// Dismissal always restores movement and drops any pending question.
fn close_quiz(
    mut commands: Commands,
    mut closes: MessageReader<CloseQuiz>,
    mut state: ResMut<ExplorationState>,
    mut pending: ResMut<Pending>,
) {
    if closes.read().count() == 0 {
        return;
    }
    commands.remove_resource::<QuizSession>();
    pending.cancel(|e| matches!(e, DeferredEffect::ShowQuestion(_)));
    state.movement_enabled = true;
    info!("Quiz dismissed");
}
