//! UI module providing the egui-based surface.
//!
//! UI state lives in resources owned by the core plugins; the systems here
//! only draw it and turn clicks into messages.

pub mod confetti;
mod hud;
pub mod icons;
mod info_card;
mod narration;
mod quiz_modal;
mod settings_panel;
mod start_overlay;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use confetti::{ConfettiBurst, ConfettiPlugin, ConfettiState};
pub use hud::Notices;
pub use settings_panel::SettingsPanelState;
pub use start_overlay::{start_exploring, StartOverlay};

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            .init_resource::<Notices>()
            .init_resource::<SettingsPanelState>()
            .init_resource::<StartOverlay>()
            .add_systems(Update, hud::collect_notices)
            // Font initialization must run before any UI system that uses icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    hud::hud_system,
                    settings_panel::settings_panel_system,
                    info_card::info_card_system,
                    narration::bubble_system,
                    narration::caption_system,
                    quiz_modal::quiz_modal_system,
                    confetti::confetti_system,
                    start_overlay::start_overlay_system,
                )
                    .chain()
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}
