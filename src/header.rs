use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::assets::UiImages;
use crate::constants;
use crate::drone::PlannerStatus;
use crate::telemetry::{LinkState, TelemetryInbox};
use crate::theme::{to_egui_color32, PlannerTheme};

/// Font size for the global status label.
const STATUS_FONT_SIZE: f32 = 18.0;
/// Font size for the link indicator text.
const LINK_FONT_SIZE: f32 = 11.0;

/// Render the header banner as an egui TopPanel: logo on the left, link
/// indicator and global status on the right, accent rule along the bottom.
///
/// Must run before the sidebar and map panels in EguiPrimaryContextPass.
pub fn render_header(
    mut contexts: EguiContexts,
    theme: Res<PlannerTheme>,
    status: Res<PlannerStatus>,
    inbox: Option<Res<TelemetryInbox>>,
    images: Res<UiImages>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let frame = egui::Frame::default()
        .fill(to_egui_color32(theme.bg_base()))
        .inner_margin(egui::Margin::symmetric(18, 10));

    let panel = egui::TopBottomPanel::top("header")
        .exact_height(constants::HEADER_HEIGHT)
        .frame(frame)
        .show_separator_line(false)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                match images.logo {
                    Some((texture, size)) => {
                        ui.image((texture, size));
                    }
                    None => {
                        ui.label(
                            egui::RichText::new("PROJECT\nMANAS")
                                .size(14.0)
                                .strong()
                                .color(to_egui_color32(theme.text_primary())),
                        );
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.spacing_mut().item_spacing.x = 6.0;

                    let live = status.global_live();
                    let label = if live { "Status: Live" } else { "Status: Offline" };
                    ui.label(
                        egui::RichText::new(label)
                            .size(STATUS_FONT_SIZE)
                            .strong()
                            .color(to_egui_color32(theme.live_color(live))),
                    );

                    ui.add_space(16.0);
                    render_link_section(ui, &inbox, &theme);
                });
            });
        });

    // Accent rule along the bottom edge of the banner.
    let rect = panel.response.rect;
    ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        "header_rule".into(),
    ))
    .hline(
        rect.x_range(),
        rect.bottom(),
        egui::Stroke::new(2.0, to_egui_color32(theme.accent())),
    );
}

/// Render the link indicator dot and label. Items appear right-to-left, so
/// the label is added before the dot.
fn render_link_section(
    ui: &mut egui::Ui,
    inbox: &Option<Res<TelemetryInbox>>,
    theme: &PlannerTheme,
) {
    let Some(inbox) = inbox else {
        let dim = to_egui_color32(theme.text_dim());
        ui.label(egui::RichText::new("No link").size(LINK_FONT_SIZE).color(dim));
        link_dot(ui, dim);
        return;
    };

    let (color, label) = match inbox.link_state() {
        LinkState::Connected => (to_egui_color32(theme.live()), "Link up"),
        LinkState::Connecting => (to_egui_color32(theme.accent()), "Connecting"),
        LinkState::Disconnected => (to_egui_color32(theme.offline()), "Link down"),
    };

    let text = match (inbox.link_state(), inbox.seconds_since_contact()) {
        (LinkState::Connected, Some(age)) => format!("{} ({}s)", label, age),
        _ => label.to_string(),
    };

    ui.label(egui::RichText::new(text).size(LINK_FONT_SIZE).color(color));
    link_dot(ui, color);
}

fn link_dot(ui: &mut egui::Ui, color: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), 4.0, color);
}
