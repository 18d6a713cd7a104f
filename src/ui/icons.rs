//! Phosphor icon glyphs for the UI.
//!
//! Fonts are installed once by [`setup_fonts`]; every other UI system waits
//! for it.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::registry::{BodyId, Subject};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// Install the Phosphor icon font.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

/// Icon text at `size` tinted with `color`.
pub fn icon_colored(icon: &str, size: f32, color: egui::Color32) -> egui::RichText {
    egui::RichText::new(icon).size(size).color(color)
}

// Browse all icons at https://phosphoricons.com/

pub const SUN: &str = egui_phosphor::regular::SUN;
pub const PLANET: &str = egui_phosphor::regular::GLOBE_HEMISPHERE_WEST;
pub const RINGED: &str = egui_phosphor::regular::PLANET;
pub const DWARF: &str = egui_phosphor::regular::CIRCLE;
pub const ASTEROID: &str = egui_phosphor::regular::ASTERISK;

pub const CLOSE: &str = egui_phosphor::regular::X;
pub const SETTINGS: &str = egui_phosphor::regular::GEAR;
pub const SPEAKING: &str = egui_phosphor::regular::SPEAKER_HIGH;
pub const VISITS: &str = egui_phosphor::regular::MAP_PIN;
pub const CAMERA: &str = egui_phosphor::regular::VIDEO_CAMERA;
pub const FOCUS: &str = egui_phosphor::regular::CROSSHAIR;
pub const START: &str = egui_phosphor::regular::ROCKET_LAUNCH;
pub const QUIZ: &str = egui_phosphor::regular::QUESTION;
pub const SUCCESS: &str = egui_phosphor::regular::CHECK_CIRCLE;
pub const WARNING: &str = egui_phosphor::regular::WARNING;

/// Icon for a narrated subject.
pub fn subject_icon(subject: Subject) -> &'static str {
    match subject {
        Subject::Asteroid => ASTEROID,
        Subject::Body(BodyId::Sun) => SUN,
        Subject::Body(BodyId::Saturn | BodyId::Uranus) => RINGED,
        Subject::Body(BodyId::Pluto) => DWARF,
        Subject::Body(_) => PLANET,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ringed_planets_share_icon() {
        assert_eq!(subject_icon(Subject::Body(BodyId::Saturn)), RINGED);
        assert_eq!(subject_icon(Subject::Body(BodyId::Uranus)), RINGED);
        assert_eq!(subject_icon(Subject::Body(BodyId::Earth)), PLANET);
        assert_eq!(subject_icon(Subject::Asteroid), ASTEROID);
    }
}
