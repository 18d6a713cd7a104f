//! Top-left readout: visit count, camera mode, and load warnings.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::interaction::ExplorationState;
use crate::scene::{AssetLoadFailed, AsteroidField};

use super::icons;

/// Warnings older than this are dropped from the HUD.
const NOTICE_SECS: f32 = 8.0;

mod colors {
    use bevy_egui::egui::Color32;

    pub const HUD_BG: Color32 = Color32::from_rgba_premultiplied(20, 20, 30, 200);
    pub const WARNING: Color32 = Color32::from_rgb(224, 170, 85);
    pub const DONE: Color32 = Color32::from_rgb(85, 176, 85);
}

/// Asset failures to show for a while.
#[derive(Resource, Default, Debug)]
pub struct Notices {
    entries: Vec<(String, f32)>,
}

impl Notices {
    pub fn push(&mut self, text: impl Into<String>) {
        self.entries.push((text.into(), NOTICE_SECS));
    }

    pub fn advance(&mut self, dt: f32) {
        self.entries.retain_mut(|(_, left)| {
            *left -= dt;
            *left > 0.0
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(text, _)| text.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collect load failures into [`Notices`] and expire old ones.
pub fn collect_notices(
    time: Res<Time>,
    mut failures: MessageReader<AssetLoadFailed>,
    mut notices: ResMut<Notices>,
) {
    for AssetLoadFailed(err) in failures.read() {
        notices.push(err.to_string());
    }
    if !notices.is_empty() {
        notices.advance(time.delta_secs());
    }
}

fn asteroid_status(field: &AsteroidField) -> Option<String> {
    match field {
        AsteroidField::NotLoaded => None,
        AsteroidField::Loading(_) => Some("Memuat asteroid...".to_string()),
        AsteroidField::Loaded { count } => Some(format!("{count} asteroid")),
        AsteroidField::Failed(_) => None,
    }
}

pub fn hud_system(
    mut contexts: EguiContexts,
    state: Res<ExplorationState>,
    field: Res<AsteroidField>,
    notices: Res<Notices>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("hud"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(12.0, 12.0))
        .show(ctx, |ui| {
            egui::Frame::NONE
                .fill(colors::HUD_BG)
                .inner_margin(egui::Margin::symmetric(12, 8))
                .corner_radius(4.0)
                .show(ui, |ui| {
                    let complete = state.quiz_unlocked;
                    ui.horizontal(|ui| {
                        let color = if complete { colors::DONE } else { egui::Color32::WHITE };
                        let icon = if complete { icons::SUCCESS } else { icons::VISITS };
                        ui.label(icons::icon_colored(icon, 16.0, color));
                        ui.label(egui::RichText::new(state.visit_label()).strong().color(color));
                    });
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(icons::CAMERA).size(14.0));
                        ui.label(egui::RichText::new(state.camera_mode.label()).size(13.0))
                            .on_hover_text("C untuk mengganti kamera");
                    });
                    if let Some(status) = asteroid_status(&field) {
                        ui.label(egui::RichText::new(status).weak().size(12.0));
                    }
                    for notice in notices.iter() {
                        ui.horizontal(|ui| {
                            ui.label(icons::icon_colored(icons::WARNING, 14.0, colors::WARNING));
                            ui.label(egui::RichText::new(notice).size(12.0).color(colors::WARNING));
                        });
                    }
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_expire() {
        let mut notices = Notices::default();
        notices.push("moon model images/mars/phobos.glb failed to load: missing");
        notices.advance(NOTICE_SECS - 1.0);
        assert_eq!(notices.len(), 1);
        notices.advance(2.0);
        assert!(notices.is_empty());
    }

    #[test]
    fn test_asteroid_status() {
        assert_eq!(asteroid_status(&AsteroidField::Loaded { count: 4008 }).as_deref(), Some("4008 asteroid"));
        assert!(asteroid_status(&AsteroidField::NotLoaded).is_none());
    }
}
