//! Quiz modal: question, options and a close button.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::quiz::{CloseQuiz, QuizAnswer, QuizSession};

use super::icons;

mod colors {
    use bevy_egui::egui::Color32;

    pub const MODAL_BG: Color32 = Color32::from_rgba_premultiplied(26, 26, 36, 245);
    pub const MODAL_BORDER: Color32 = Color32::from_rgb(85, 153, 221);
    pub const OPTION: Color32 = Color32::from_rgb(50, 70, 110);
    pub const DIM: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 140);
}

const MODAL_WIDTH: f32 = 360.0;

pub fn quiz_modal_system(
    mut contexts: EguiContexts,
    session: Option<Res<QuizSession>>,
    mut answers: MessageWriter<QuizAnswer>,
    mut closes: MessageWriter<CloseQuiz>,
) {
    let Some(session) = session else {
        return;
    };
    let Some(question) = session.current() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    // Dim the scene behind the modal.
    egui::Area::new(egui::Id::new("quiz_dim"))
        .fixed_pos(egui::Pos2::ZERO)
        .order(egui::Order::Middle)
        .show(ctx, |ui| {
            ui.painter()
                .rect_filled(ui.ctx().viewport_rect(), 0.0, colors::DIM);
        });

    egui::Window::new("quiz")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .order(egui::Order::Foreground)
        .frame(
            egui::Frame::NONE
                .fill(colors::MODAL_BG)
                .stroke(egui::Stroke::new(1.5, colors::MODAL_BORDER))
                .inner_margin(egui::Margin::same(18))
                .corner_radius(8.0),
        )
        .show(ctx, |ui| {
            ui.set_width(MODAL_WIDTH);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(icons::QUIZ).size(18.0));
                ui.label(egui::RichText::new(session.title()).strong().size(16.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(icons::CLOSE)
                        .on_hover_text("Tutup kuis")
                        .clicked()
                    {
                        closes.write(CloseQuiz);
                    }
                });
            });

            ui.separator();
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(question.prompt)
                    .size(18.0)
                    .color(egui::Color32::WHITE),
            );
            ui.add_space(10.0);

            let enabled = !session.is_awaiting_next();
            for (index, option) in question.options.iter().enumerate() {
                let button = egui::Button::new(
                    egui::RichText::new(*option)
                        .size(15.0)
                        .color(egui::Color32::WHITE),
                )
                .fill(colors::OPTION)
                .min_size(egui::vec2(MODAL_WIDTH, 34.0));

                if ui.add_enabled(enabled, button).clicked() {
                    answers.write(QuizAnswer(index));
                }
            }
        });
}
