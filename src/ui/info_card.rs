//! Info card - floating facts panel near the clicked body.
//!
//! Follows the selection on screen and offers a "fly closer" action that
//! hands the camera to [`CameraFocus`].

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::camera::{CameraFocus, CameraMode, MainCamera};
use crate::interaction::{ExplorationState, Selection};
use crate::registry::{facts, BodyFacts, Subject};

use super::icons;

mod colors {
    use bevy_egui::egui::Color32;

    pub const CARD_BG: Color32 = Color32::from_rgba_premultiplied(26, 26, 36, 230);
    pub const CARD_BORDER: Color32 = Color32::from_rgb(60, 60, 80);
    pub const ACCENT: Color32 = Color32::from_rgb(85, 153, 221);
}

/// Card dimensions for positioning calculations.
const CARD_WIDTH: f32 = 240.0;
const CARD_HEIGHT: f32 = 260.0;
const CARD_MARGIN: f32 = 20.0;

/// Place the card beside `screen_pos`, on whichever side has room, clamped
/// vertically to the viewport.
pub fn card_position(viewport: egui::Rect, screen_pos: Vec2) -> egui::Pos2 {
    let space_right = viewport.right() - screen_pos.x;
    let space_left = screen_pos.x - viewport.left();

    let offset_x = if space_right > CARD_WIDTH + CARD_MARGIN * 2.0 {
        CARD_MARGIN
    } else if space_left > CARD_WIDTH + CARD_MARGIN * 2.0 {
        -(CARD_WIDTH + CARD_MARGIN)
    } else {
        -CARD_WIDTH / 2.0
    };

    let top = viewport.top() + CARD_MARGIN;
    let bottom = viewport.bottom() - CARD_MARGIN - CARD_HEIGHT;
    let y = (screen_pos.y - CARD_HEIGHT / 2.0).min(bottom).max(top);

    egui::pos2(screen_pos.x + offset_x, y)
}

struct CardActions {
    close: bool,
    focus: bool,
}

pub fn info_card_system(
    mut contexts: EguiContexts,
    mut selection: ResMut<Selection>,
    mut focus: ResMut<CameraFocus>,
    state: Res<ExplorationState>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    targets: Query<&GlobalTransform>,
) {
    let Some(subject) = selection.subject else {
        return;
    };
    let Some(entity) = selection.entity else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Ok(target) = targets.get(entity) else {
        selection.clear();
        return;
    };
    // Off-screen or behind the camera: keep the selection, skip the card.
    let Ok(screen_pos) = camera.world_to_viewport(camera_transform, target.translation()) else {
        return;
    };

    let can_focus = state.camera_mode == CameraMode::FirstPerson && state.movement_enabled;
    let actions = render_card(ctx, subject, facts(subject), screen_pos, can_focus);

    if actions.focus {
        focus.target = Some(entity);
        focus.offset = selection.focus_offset;
        info!("Flying to {}", subject.name());
    }
    if actions.close {
        selection.clear();
    }
}

fn fact_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.label(egui::RichText::new(label).weak().size(12.0));
    ui.label(egui::RichText::new(value).size(13.0));
    ui.end_row();
}

fn render_card(
    ctx: &egui::Context,
    subject: Subject,
    facts: &BodyFacts,
    screen_pos: Vec2,
    can_focus: bool,
) -> CardActions {
    let mut actions = CardActions {
        close: false,
        focus: false,
    };

    egui::Window::new("info_card")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .fixed_pos(card_position(ctx.viewport_rect(), screen_pos))
        .frame(
            egui::Frame::NONE
                .fill(colors::CARD_BG)
                .inner_margin(egui::Margin::same(12))
                .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                .corner_radius(4.0),
        )
        .show(ctx, |ui| {
            ui.set_max_width(CARD_WIDTH - 24.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(icons::subject_icon(subject)).size(16.0));
                ui.label(egui::RichText::new(subject.name()).strong().size(16.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button(icons::CLOSE).clicked() {
                        actions.close = true;
                    }
                });
            });

            ui.separator();

            egui::Grid::new("info_card_facts")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    fact_row(ui, "Radius", facts.radius);
                    fact_row(ui, "Tilt", facts.tilt);
                    fact_row(ui, "Rotation", facts.rotation);
                    fact_row(ui, "Orbit", facts.orbit);
                    fact_row(ui, "Distance", facts.distance);
                    fact_row(ui, "Moons", facts.moons);
                });

            ui.add_space(4.0);
            ui.label(egui::RichText::new(facts.info).italics().size(13.0));

            if let Some(story) = facts.narratives.first() {
                ui.add_space(4.0);
                ui.label(egui::RichText::new(*story).weak().size(12.0));
            }

            if can_focus {
                ui.add_space(8.0);
                let button = egui::Button::new(
                    egui::RichText::new(format!("{} Dekati", icons::FOCUS))
                        .size(14.0)
                        .color(egui::Color32::WHITE),
                )
                .fill(colors::ACCENT)
                .min_size(egui::vec2(90.0, 28.0));
                if ui.add(button).clicked() {
                    actions.focus = true;
                }
            }
        });

    actions
}
