//! Fire-once delayed effects.
//!
//! Anything that should happen "a little later" (hiding a bubble, starting the
//! quiz, showing the next question) is queued here with a delay. Each tick the
//! timers advance and every expired entry is emitted as an [`EffectDue`]
//! message. Entries are independent: no ordering is promised between effects
//! that expire on the same tick.

use bevy::prelude::*;

use crate::types::TickSet;

/// Something to do once a timer expires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferredEffect {
    /// Hide the caption bubble, unless a newer one replaced it.
    HideBubble { generation: u64 },
    /// Open the quiz.
    StartQuiz,
    /// Show the question at this index.
    ShowQuestion(usize),
}

/// An effect whose delay has elapsed.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectDue(pub DeferredEffect);

/// Queue of pending effects.
#[derive(Resource, Default)]
pub struct Pending {
    entries: Vec<(Timer, DeferredEffect)>,
}

impl Pending {
    /// Queue `effect` to fire after `secs` seconds.
    pub fn after(&mut self, secs: f32, effect: DeferredEffect) {
        self.entries
            .push((Timer::from_seconds(secs, TimerMode::Once), effect));
    }

    /// Drop every pending entry matching `predicate`.
    pub fn cancel(&mut self, predicate: impl Fn(&DeferredEffect) -> bool) {
        self.entries.retain(|(_, effect)| !predicate(effect));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, effect: &DeferredEffect) -> bool {
        self.entries.iter().any(|(_, e)| e == effect)
    }

    /// Advance every timer by `delta` and remove the ones that finished.
    pub fn advance(&mut self, delta: std::time::Duration) -> Vec<DeferredEffect> {
        let mut due = Vec::new();
        self.entries.retain_mut(|(timer, effect)| {
            timer.tick(delta);
            if timer.is_finished() {
                due.push(*effect);
                false
            } else {
                true
            }
        });
        due
    }
}

/// Plugin providing delayed effects and the per-tick system ordering.
pub struct SchedulePlugin;

impl Plugin for SchedulePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Pending>()
            .add_message::<EffectDue>()
            .configure_sets(
                Update,
                (
                    TickSet::Input,
                    TickSet::Animate,
                    TickSet::Camera,
                    TickSet::Interact,
                    TickSet::Effects,
                )
                    .chain(),
            )
            .add_systems(Update, fire_due_effects.in_set(TickSet::Input));
    }
}

fn fire_due_effects(
    time: Res<Time>,
    mut pending: ResMut<Pending>,
    mut due: MessageWriter<EffectDue>,
) {
    if pending.is_empty() {
        return;
    }
    for effect in pending.advance(time.delta()) {
        debug!("Deferred effect due: {effect:?}");
        due.write(EffectDue(effect));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_effect_fires_once_after_delay() {
        let mut pending = Pending::default();
        pending.after(0.8, DeferredEffect::StartQuiz);

        assert!(pending.advance(Duration::from_millis(500)).is_empty());
        assert_eq!(
            pending.advance(Duration::from_millis(400)),
            vec![DeferredEffect::StartQuiz]
        );
        assert!(pending.is_empty());
        assert!(pending.advance(Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn test_cancel_removes_matching_only() {
        let mut pending = Pending::default();
        pending.after(0.9, DeferredEffect::ShowQuestion(1));
        pending.after(6.0, DeferredEffect::HideBubble { generation: 3 });

        pending.cancel(|e| matches!(e, DeferredEffect::ShowQuestion(_)));

        assert_eq!(pending.len(), 1);
        assert!(pending.contains(&DeferredEffect::HideBubble { generation: 3 }));
    }

    #[test]
    fn test_independent_timers() {
        let mut pending = Pending::default();
        pending.after(6.0, DeferredEffect::HideBubble { generation: 1 });
        pending.after(1.0, DeferredEffect::HideBubble { generation: 2 });

        let due = pending.advance(Duration::from_secs(2));
        assert_eq!(due, vec![DeferredEffect::HideBubble { generation: 2 }]);
        assert_eq!(pending.len(), 1);
    }
}
