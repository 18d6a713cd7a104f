//! Caption overlay and the speech bubble near the narrated body.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::camera::MainCamera;
use crate::interaction::BubbleState;
use crate::speech::CaptionState;

use super::icons;

mod colors {
    use bevy_egui::egui::Color32;

    pub const CAPTION_BG: Color32 = Color32::from_rgba_premultiplied(10, 10, 20, 220);
    pub const BUBBLE_BG: Color32 = Color32::from_rgba_premultiplied(245, 245, 250, 240);
    pub const BUBBLE_TEXT: Color32 = Color32::from_rgb(30, 30, 40);
    pub const BUBBLE_BORDER: Color32 = Color32::from_rgb(85, 153, 221);
}

const BUBBLE_WIDTH: f32 = 260.0;

/// Gap between the bubble's bottom edge and the body's screen position.
const BUBBLE_LIFT: f32 = 24.0;

/// Default placement when there is no anchor: centred, 6% above the bottom.
const DEFAULT_BOTTOM_FRACTION: f32 = 0.06;

/// Where the bubble's bottom-centre goes for an anchor projected to `screen`.
pub fn bubble_pivot(viewport: egui::Rect, screen: Option<Vec2>) -> (egui::Align2, egui::Pos2) {
    match screen {
        Some(p) => (
            egui::Align2::CENTER_BOTTOM,
            egui::pos2(p.x, p.y - BUBBLE_LIFT),
        ),
        None => (
            egui::Align2::CENTER_BOTTOM,
            egui::pos2(
                viewport.center().x,
                viewport.bottom() - viewport.height() * DEFAULT_BOTTOM_FRACTION,
            ),
        ),
    }
}

pub fn caption_system(mut contexts: EguiContexts, caption: Res<CaptionState>) {
    if !caption.is_visible() {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::bottom("caption")
        .frame(
            egui::Frame::NONE
                .fill(colors::CAPTION_BG)
                .inner_margin(egui::Margin::symmetric(20, 12)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(icons::SPEAKING).size(18.0));
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(&caption.title)
                            .strong()
                            .size(16.0)
                            .color(egui::Color32::WHITE),
                    );
                    ui.label(egui::RichText::new(&caption.text).size(14.0));
                });
            });
        });
}

pub fn bubble_system(
    mut contexts: EguiContexts,
    bubble: Res<BubbleState>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
) {
    if !bubble.visible {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    // An anchor behind the camera falls back to the default placement.
    let screen = bubble.anchor.and_then(|anchor| {
        let (camera, transform) = camera_query.single().ok()?;
        camera.world_to_viewport(transform, anchor).ok()
    });
    let (align, pos) = bubble_pivot(ctx.viewport_rect(), screen);

    egui::Area::new(egui::Id::new("bubble"))
        .pivot(align)
        .fixed_pos(pos)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::NONE
                .fill(colors::BUBBLE_BG)
                .stroke(egui::Stroke::new(1.5, colors::BUBBLE_BORDER))
                .inner_margin(egui::Margin::symmetric(14, 10))
                .corner_radius(10.0)
                .show(ui, |ui| {
                    ui.set_max_width(BUBBLE_WIDTH);
                    ui.label(
                        egui::RichText::new(&bubble.title)
                            .strong()
                            .size(15.0)
                            .color(colors::BUBBLE_TEXT),
                    );
                    ui.label(
                        egui::RichText::new(&bubble.text)
                            .size(13.0)
                            .color(colors::BUBBLE_TEXT),
                    );
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1000.0, 800.0))
    }

    #[test]
    fn test_bubble_sits_above_anchor() {
        let (_, pos) = bubble_pivot(viewport(), Some(Vec2::new(300.0, 400.0)));
        assert_eq!(pos, egui::pos2(300.0, 400.0 - BUBBLE_LIFT));
    }

    #[test]
    fn test_default_placement_near_bottom_centre() {
        let (_, pos) = bubble_pivot(viewport(), None);
        assert_eq!(pos.x, 500.0);
        assert!((pos.y - 752.0).abs() < 1e-3);
    }
}
