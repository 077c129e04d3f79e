use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use egui_phosphor::regular;

use crate::assets::UiImages;
use crate::constants;
use crate::mission::MissionCommand;
use crate::theme::{to_egui_color32, to_egui_color32_alpha, PlannerTheme};

use super::card::{GpsSignal, StatusCard};
use super::identity::DroneId;
use super::planner::PlannerStatus;

/// Minimum height of the Start Mission button.
const START_BUTTON_HEIGHT: f32 = 56.0;
/// Minimum height of the per-drone kill buttons.
const KILL_BUTTON_HEIGHT: f32 = 40.0;

/// Render the right sidebar: one status card per drone, then the
/// mission-control buttons pinned to the bottom.
pub fn render_sidebar(
    mut contexts: EguiContexts,
    status: Res<PlannerStatus>,
    theme: Res<PlannerTheme>,
    images: Res<UiImages>,
    mut commands_out: MessageWriter<MissionCommand>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let frame = egui::Frame::default()
        .fill(to_egui_color32(theme.bg_base()))
        .inner_margin(egui::Margin::same(18));

    egui::SidePanel::right("sidebar")
        .exact_width(constants::SIDEBAR_WIDTH)
        .resizable(false)
        .frame(frame)
        .show_separator_line(false)
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = 18.0;

            for id in DroneId::ALL {
                render_drone_card(ui, status.card(id), images.drone(id), &theme);
            }

            // Buttons grow upward from the panel's bottom edge.
            ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);

                ui.horizontal(|ui| {
                    let width = (ui.available_width() - ui.spacing().item_spacing.x) / 2.0;
                    for id in DroneId::ALL {
                        let label = format!("{} Kill {}", regular::X, id.display_name());
                        if mission_button(ui, &theme, &label, 14.0, width, KILL_BUTTON_HEIGHT)
                            .clicked()
                        {
                            commands_out.write(MissionCommand::Kill(id));
                        }
                    }
                });

                let label = format!("{} Start Mission", regular::PLAY);
                if mission_button(
                    ui,
                    &theme,
                    &label,
                    16.0,
                    ui.available_width(),
                    START_BUTTON_HEIGHT,
                )
                .clicked()
                {
                    commands_out.write(MissionCommand::Start);
                }
            });
        });
}

/// One drone's card: name, image, status pill, 2x2 tile grid, GPS pill.
fn render_drone_card(
    ui: &mut egui::Ui,
    card: &StatusCard,
    image: Option<(egui::TextureId, egui::Vec2)>,
    theme: &PlannerTheme,
) {
    egui::Frame::default()
        .fill(to_egui_color32(theme.bg_card()))
        .stroke(egui::Stroke::new(2.0, to_egui_color32(theme.accent())))
        .corner_radius(14)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 8.0;

            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(card.name())
                        .size(20.0)
                        .strong()
                        .color(to_egui_color32(theme.text_primary())),
                );

                match image {
                    Some((texture, size)) => {
                        ui.image((texture, size));
                    }
                    None => {
                        ui.add_sized(
                            [ui.available_width(), constants::CARD_IMAGE_MIN_HEIGHT],
                            egui::Label::new(
                                egui::RichText::new("[drone]")
                                    .color(to_egui_color32(theme.text_primary())),
                            ),
                        );
                    }
                }

                let live_color = to_egui_color32(theme.live_color(card.live()));
                pill(ui, card.status_label(), 14.0, live_color);
            });

            let spacing = ui.spacing().item_spacing.x.max(10.0);
            let tile_width = (ui.available_width() - spacing) / 2.0;
            ui.horizontal(|ui| {
                kv_tile(ui, "Latitude", card.latitude(), tile_width, theme);
                kv_tile(ui, "Longitude", card.longitude(), tile_width, theme);
            });
            ui.horizontal(|ui| {
                kv_tile(ui, "Altitude", card.altitude(), tile_width, theme);
                kv_tile(ui, "Updated", card.updated(), tile_width, theme);
            });

            ui.vertical_centered(|ui| {
                let gps_color = match card.gps() {
                    GpsSignal::Unknown => to_egui_color32(theme.text_dim()),
                    GpsSignal::Active => to_egui_color32(theme.live()),
                    GpsSignal::Inactive => to_egui_color32(theme.offline()),
                };
                pill(ui, card.gps().label(), 12.0, gps_color);
            });
        });
}

/// Rounded badge with a 10% tint of its state color.
fn pill(ui: &mut egui::Ui, text: &str, font_size: f32, color: egui::Color32) {
    let bg = egui::Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 26);
    egui::Frame::default()
        .fill(bg)
        .stroke(egui::Stroke::new(1.0, color))
        .corner_radius(10)
        .inner_margin(egui::Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(font_size).color(color));
        });
}

/// One key/value tile of the card's info grid.
fn kv_tile(ui: &mut egui::Ui, key: &str, value: &str, width: f32, theme: &PlannerTheme) {
    egui::Frame::default()
        .fill(to_egui_color32(theme.bg_tile()))
        .stroke(egui::Stroke::new(1.0, to_egui_color32_alpha(theme.accent(), 56)))
        .corner_radius(10)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.set_width(width - 20.0);
            ui.spacing_mut().item_spacing.y = 2.0;
            ui.label(
                egui::RichText::new(key)
                    .size(11.0)
                    .strong()
                    .color(to_egui_color32_alpha(theme.accent(), 217)),
            );
            ui.label(
                egui::RichText::new(value)
                    .size(13.0)
                    .strong()
                    .color(to_egui_color32(theme.text_secondary())),
            );
        });
}

/// Accent-filled button; fill and hover colors come from the themed widget
/// visuals installed in `theme::apply_egui_style`.
fn mission_button(
    ui: &mut egui::Ui,
    theme: &PlannerTheme,
    label: &str,
    font_size: f32,
    width: f32,
    height: f32,
) -> egui::Response {
    ui.add(
        egui::Button::new(
            egui::RichText::new(label)
                .size(font_size)
                .strong()
                .color(to_egui_color32(theme.button_text())),
        )
        .min_size(egui::vec2(width, height)),
    )
}
