//! UI logic tests for confetti, notices, the caption bubble and the start overlay.
//!
//! Tests the state behind the egui systems, which runs without a window.

mod common;

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use common::{advance, tour_app};
use solar_tour::interaction::BubbleState;
use solar_tour::registry::facts::{WELCOME_TEXT, WELCOME_TITLE};
use solar_tour::speech::{CaptionState, Speak};
use solar_tour::ui::confetti::{BURST_SECS, LINGER_SECS, SPAWN_INTERVAL_SECS};
use solar_tour::ui::{start_exploring, ConfettiBurst, ConfettiState, Notices, StartOverlay};

// ============================================================================
// Confetti
// ============================================================================

#[test]
fn test_same_seed_same_stars() {
    let mut a = ConfettiState::with_seed(42);
    let mut b = ConfettiState::with_seed(42);
    a.start(BURST_SECS);
    b.start(BURST_SECS);
    for _ in 0..30 {
        a.advance(0.05);
        b.advance(0.05);
    }
    assert!(a.stars().eq(b.stars()));
}

#[test]
fn test_star_parameters_in_range() {
    let mut state = ConfettiState::with_seed(7);
    state.start(BURST_SECS);
    state.advance(BURST_SECS);

    let stars: Vec<_> = state.stars().cloned().collect();
    let expected = (BURST_SECS / SPAWN_INTERVAL_SECS) as usize;
    assert!(stars.len().abs_diff(expected) <= 1, "{} stars", stars.len());
    for star in &stars {
        assert!((0.0..1.0).contains(&star.x));
        assert!((0.8..1.1).contains(&star.landing_y));
        assert!((2.0..3.0).contains(&star.fall_secs));
        assert!((0.7..=1.0).contains(&star.start_opacity));
        assert!((0.0..=1.0).contains(&star.progress()));
    }
}

#[test]
fn test_burst_message_runs_to_completion() {
    let (mut app, _) = tour_app();
    app.world_mut().write_message(ConfettiBurst::default());
    app.update();
    assert!(app.world().resource::<ConfettiState>().is_active());

    advance(&mut app, BURST_SECS + LINGER_SECS + 0.2);
    let state = app.world().resource::<ConfettiState>();
    assert!(!state.is_active());
    assert_eq!(state.stars().count(), 0);
}

// ============================================================================
// Notices
// ============================================================================

#[test]
fn test_notices_keep_arrival_order() {
    let mut notices = Notices::default();
    notices.push("asteroid pack asteroids/asteroidPack.glb contains no meshes");
    notices.advance(3.0);
    notices.push("moon model images/mars/phobos.glb failed to load: missing");

    let texts: Vec<_> = notices.iter().collect();
    assert_eq!(texts.len(), 2);
    assert!(texts[0].starts_with("asteroid pack"));

    // The older notice expires first.
    notices.advance(5.5);
    assert_eq!(notices.len(), 1);
    assert!(notices.iter().all(|t| t.starts_with("moon model")));
}

// ============================================================================
// Bubble
// ============================================================================

#[test]
fn test_bubble_generation_increments() {
    let mut bubble = BubbleState::default();
    assert!(!bubble.visible);
    let g1 = bubble.show("Merkurius", "Planet terdekat.", None);
    let g2 = bubble.show("Venus", "Planet terpanas.", None);
    assert_eq!(g2, g1 + 1);
    assert_eq!(bubble.anchor, None);
    assert!(!bubble.hide(g1));
    assert!(bubble.hide(g2));
    assert!(!bubble.hide(g2), "hiding twice is a no-op");
}

// ============================================================================
// Start overlay
// ============================================================================

fn press_start(app: &mut App) {
    let _ = app.world_mut().run_system_once(
        |mut overlay: ResMut<StartOverlay>, mut speak: MessageWriter<Speak>| {
            start_exploring(&mut overlay, &mut speak);
        },
    );
}

#[test]
fn test_start_hides_overlay_and_welcomes() {
    let (mut app, speech) = tour_app();
    app.init_resource::<StartOverlay>();
    assert!(app.world().resource::<StartOverlay>().visible);

    press_start(&mut app);
    app.update();

    assert!(!app.world().resource::<StartOverlay>().visible);
    let caption = app.world().resource::<CaptionState>();
    assert_eq!(caption.title, WELCOME_TITLE);
    assert_eq!(caption.text, WELCOME_TEXT);
    assert_eq!(speech.log(), vec![WELCOME_TEXT.to_string()]);

    // Pressing again does nothing.
    press_start(&mut app);
    app.update();
    assert_eq!(speech.log().len(), 1);
}
