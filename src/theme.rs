use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

/// Central palette resource for the planner UI.
///
/// Near-black surfaces with orange accents; green and red are reserved for
/// live/offline and GPS signal states. Accessors return `bevy::color::Color`
/// and are converted at the egui call sites.
#[derive(Resource, Default)]
pub struct PlannerTheme;

fn hex(r: u8, g: u8, b: u8) -> Color {
    Color::srgb_u8(r, g, b)
}

impl PlannerTheme {
    // -- Background / surface colors --

    pub fn bg_base(&self) -> Color { hex(0x07, 0x07, 0x07) }
    pub fn bg_map(&self) -> Color { hex(0x0d, 0x0d, 0x0d) }
    pub fn bg_card(&self) -> Color { hex(0x0e, 0x0e, 0x0e) }
    pub fn bg_tile(&self) -> Color { hex(0x12, 0x12, 0x12) }
    pub fn bg_pill(&self) -> Color { hex(0x11, 0x11, 0x11) }

    // -- Accent --

    pub fn accent(&self) -> Color { hex(0xf4, 0x92, 0x21) }
    pub fn accent_hover(&self) -> Color { hex(0xff, 0xad, 0x55) }
    pub fn accent_pressed(&self) -> Color { hex(0xd9, 0x78, 0x13) }

    // -- Text colors --

    pub fn text_primary(&self) -> Color { hex(0xf4, 0xf4, 0xf4) }
    pub fn text_secondary(&self) -> Color { hex(0xe6, 0xe6, 0xe6) }
    pub fn text_dim(&self) -> Color { hex(0xbd, 0xbd, 0xbd) }
    /// Dark text used on top of accent-filled buttons.
    pub fn button_text(&self) -> Color { hex(0x0b, 0x0b, 0x0b) }

    // -- State colors --

    pub fn live(&self) -> Color { hex(0x69, 0xe3, 0x6b) }
    pub fn offline(&self) -> Color { hex(0xff, 0x5c, 0x5c) }

    /// Color for a live/offline flag, shared by the header and the cards.
    pub fn live_color(&self, live: bool) -> Color {
        if live {
            self.live()
        } else {
            self.offline()
        }
    }
}

/// Convert a `bevy::color::Color` to `egui::Color32`.
pub fn to_egui_color32(color: Color) -> egui::Color32 {
    let srgba = color.to_srgba();
    egui::Color32::from_rgba_unmultiplied(
        (srgba.red * 255.0) as u8,
        (srgba.green * 255.0) as u8,
        (srgba.blue * 255.0) as u8,
        (srgba.alpha * 255.0) as u8,
    )
}

/// Convert a `bevy::color::Color` to `egui::Color32` with a custom alpha.
pub fn to_egui_color32_alpha(color: Color, alpha: u8) -> egui::Color32 {
    let srgba = color.to_srgba();
    egui::Color32::from_rgba_unmultiplied(
        (srgba.red * 255.0) as u8,
        (srgba.green * 255.0) as u8,
        (srgba.blue * 255.0) as u8,
        alpha,
    )
}

/// Install fonts and widget visuals on the primary egui context. Runs in
/// `EguiPrimaryContextPass` and finishes on the first frame the context
/// exists; the palette never changes at runtime.
pub fn apply_egui_style(
    mut contexts: EguiContexts,
    theme: Res<PlannerTheme>,
    mut installed: Local<bool>,
) {
    if *installed {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);

    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = to_egui_color32(theme.bg_base());
    visuals.override_text_color = Some(to_egui_color32(theme.text_secondary()));
    visuals.widgets.noninteractive.bg_stroke =
        egui::Stroke::new(1.0, to_egui_color32_alpha(theme.accent(), 56));
    // Buttons render with the accent fill in all interaction states.
    visuals.widgets.inactive.weak_bg_fill = to_egui_color32(theme.accent());
    visuals.widgets.hovered.weak_bg_fill = to_egui_color32(theme.accent_hover());
    visuals.widgets.active.weak_bg_fill = to_egui_color32(theme.accent_pressed());
    visuals.widgets.inactive.corner_radius = 12.into();
    visuals.widgets.hovered.corner_radius = 12.into();
    visuals.widgets.active.corner_radius = 12.into();
    ctx.set_visuals(visuals);

    *installed = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_preserves_channels() {
        let red = to_egui_color32(Color::srgb(1.0, 0.0, 0.0));
        assert_eq!(red, egui::Color32::from_rgba_unmultiplied(255, 0, 0, 255));
        let faded = to_egui_color32_alpha(Color::srgb(1.0, 0.0, 0.0), 56);
        assert_eq!(faded.a(), 56);
    }

    #[test]
    fn live_color_tracks_flag() {
        let theme = PlannerTheme;
        assert_eq!(theme.live_color(true), theme.live());
        assert_eq!(theme.live_color(false), theme.offline());
    }
}
