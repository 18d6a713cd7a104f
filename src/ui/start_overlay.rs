//! Welcome screen shown until the player starts exploring.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::registry::facts::{WELCOME_TEXT, WELCOME_TITLE};
use crate::speech::{Speak, Utterance};

use super::icons;

const BACKDROP: egui::Color32 = egui::Color32::from_rgba_premultiplied(5, 5, 15, 230);

#[derive(Resource)]
pub struct StartOverlay {
    pub visible: bool,
}

impl Default for StartOverlay {
    fn default() -> Self {
        Self { visible: true }
    }
}

/// Hide the overlay and play the welcome line.
pub fn start_exploring(overlay: &mut StartOverlay, speak: &mut MessageWriter<Speak>) {
    if !overlay.visible {
        return;
    }
    overlay.visible = false;
    speak.write(Speak(Utterance::captioned(WELCOME_TITLE, WELCOME_TEXT, None)));
    info!("Exploration started");
}

pub fn start_overlay_system(
    mut contexts: EguiContexts,
    mut overlay: ResMut<StartOverlay>,
    mut speak: MessageWriter<Speak>,
) {
    if !overlay.visible {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut clicked = false;
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(BACKDROP))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.35);
                ui.label(
                    egui::RichText::new("Jelajah Tata Surya")
                        .strong()
                        .size(32.0)
                        .color(egui::Color32::WHITE),
                );
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("W A S D untuk terbang, klik kanan untuk melihat, C untuk kamera atas")
                        .weak()
                        .size(14.0),
                );
                ui.add_space(24.0);
                let button = egui::Button::new(
                    egui::RichText::new(format!("{} Mulai Menjelajah", icons::START))
                        .size(18.0)
                        .color(egui::Color32::WHITE),
                )
                .fill(egui::Color32::from_rgb(85, 153, 221))
                .min_size(egui::vec2(220.0, 44.0));
                clicked = ui.add(button).clicked();
            });
        });

    if clicked {
        start_exploring(&mut overlay, &mut speak);
    }
}
