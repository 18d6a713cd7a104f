//! Solar Tour - interactive solar-system explorer
//!
//! Fly through a small model of the solar system, listen to each body's
//! description, and take a quiz once every body has been visited.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use solar_tour::animation::AnimationPlugin;
use solar_tour::audio::AudioFeedbackPlugin;
use solar_tour::camera::CameraPlugin;
use solar_tour::input::InputPlugin;
use solar_tour::interaction::InteractionPlugin;
use solar_tour::quiz::QuizPlugin;
use solar_tour::scene::ScenePlugin;
use solar_tour::schedule::SchedulePlugin;
use solar_tour::speech::SpeechPlugin;
use solar_tour::ui::{ConfettiPlugin, UiPlugin};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Solar Tour".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .insert_resource(ClearColor(Color::BLACK))
        // Core state first, then everything that reads it
        .add_plugins((SchedulePlugin, SpeechPlugin, AudioFeedbackPlugin, ConfettiPlugin))
        .add_plugins((InteractionPlugin, QuizPlugin, AnimationPlugin))
        .add_plugins((ScenePlugin, CameraPlugin, InputPlugin, UiPlugin))
        .run();
}
