//! Settings panel in the top-right corner.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::scene::OrbitGuideSettings;
use crate::speech::VoiceSettings;
use crate::types::{Settings, ORBIT_SPEED_RANGE, SPIN_SPEED_RANGE, SUN_INTENSITY_RANGE};

use super::icons;

/// Whether the panel is expanded.
#[derive(Resource, Default)]
pub struct SettingsPanelState {
    pub open: bool,
}

pub fn settings_panel_system(
    mut contexts: EguiContexts,
    mut panel: ResMut<SettingsPanelState>,
    mut settings: ResMut<Settings>,
    mut guides: ResMut<OrbitGuideSettings>,
    mut voice: ResMut<VoiceSettings>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    // Edit copies so change detection only fires on real edits.
    let mut edited = settings.clone();
    let mut show_guides = guides.visible;
    let mut rate = voice.rate;

    egui::Area::new(egui::Id::new("settings_toggle"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .show(ctx, |ui| {
            if ui
                .button(egui::RichText::new(icons::SETTINGS).size(18.0))
                .on_hover_text("Pengaturan")
                .clicked()
            {
                panel.open = !panel.open;
            }
        });

    if !panel.open {
        return;
    }

    egui::Window::new("Pengaturan")
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 52.0))
        .show(ctx, |ui| {
            egui::Grid::new("settings_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Kecepatan orbit");
                    ui.add(egui::Slider::new(&mut edited.orbit_speed, ORBIT_SPEED_RANGE).step_by(0.1));
                    ui.end_row();

                    ui.label("Kecepatan rotasi");
                    ui.add(egui::Slider::new(&mut edited.spin_speed, SPIN_SPEED_RANGE).step_by(0.1));
                    ui.end_row();

                    ui.label("Intensitas Matahari");
                    ui.add(
                        egui::Slider::new(&mut edited.sun_intensity, SUN_INTENSITY_RANGE).step_by(0.1),
                    );
                    ui.end_row();

                    ui.label("Kecepatan suara");
                    ui.add(egui::Slider::new(&mut rate, 0.5..=2.0).step_by(0.1));
                    ui.end_row();

                    ui.label("Jalur orbit");
                    ui.checkbox(&mut show_guides, "");
                    ui.end_row();
                });
        });

    edited.clamp();
    if edited != *settings {
        *settings = edited;
    }
    if show_guides != guides.visible {
        guides.visible = show_guides;
    }
    if rate != voice.rate {
        voice.rate = rate;
    }
}
