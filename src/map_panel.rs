use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::theme::{to_egui_color32, to_egui_color32_alpha, PlannerTheme};

/// Font size of the placeholder label.
const MAP_LABEL_SIZE: f32 = 48.0;

/// Central map area. Renders a placeholder label until a map layer exists,
/// with an accent rule along the edge shared with the sidebar.
pub fn render_map_panel(mut contexts: EguiContexts, theme: Res<PlannerTheme>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let frame = egui::Frame::default()
        .fill(to_egui_color32(theme.bg_map()))
        .inner_margin(egui::Margin::same(16));

    let panel = egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("Map")
                    .size(MAP_LABEL_SIZE)
                    .strong()
                    .color(to_egui_color32_alpha(theme.accent(), 217)),
            );
        });
    });

    let rect = panel.response.rect;
    ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        "map_rule".into(),
    ))
    .vline(
        rect.right(),
        rect.y_range(),
        egui::Stroke::new(2.0, to_egui_color32_alpha(theme.accent(), 140)),
    );
}
