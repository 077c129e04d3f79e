use bevy::prelude::*;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};

mod assets;
mod config;
mod drone;
mod header;
mod map_panel;
mod mission;
mod telemetry;
mod theme;

use drone::DronePlugin;
use telemetry::TelemetryPlugin;

/// Fixed layout values shared across the UI modules.
pub mod constants {
    /// Header banner height in pixels.
    pub const HEADER_HEIGHT: f32 = 70.0;
    /// Sidebar width in pixels.
    pub const SIDEBAR_WIDTH: f32 = 280.0;
    /// Height drone card images are scaled to.
    pub const CARD_IMAGE_HEIGHT: f32 = 78.0;
    /// Height reserved for a card image slot, so cards stay aligned when an
    /// image file is missing.
    pub const CARD_IMAGE_MIN_HEIGHT: f32 = 86.0;
    /// Logo height in the header.
    pub const LOGO_HEIGHT: f32 = 50.0;

    /// Default window size, overridable through config.toml.
    pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
    pub const DEFAULT_WINDOW_HEIGHT: f32 = 700.0;

    /// Seconds the feed thread sleeps before retrying after a failed poll.
    pub const FEED_RETRY_SECS: u64 = 5;
}

fn main() {
    let app_config = config::load_config();

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Manas Planner".to_string(),
                    resolution: (app_config.window.width, app_config.window.height).into(),
                    ..default()
                }),
                ..default()
            }),
            EguiPlugin::default(),
        ))
        .insert_resource(app_config)
        .init_resource::<theme::PlannerTheme>()
        .add_plugins((TelemetryPlugin, DronePlugin))
        .add_systems(Startup, (setup_camera, assets::setup_ui_images))
        .add_systems(
            EguiPrimaryContextPass,
            (
                theme::apply_egui_style,
                header::render_header,
                drone::render_sidebar,
                map_panel::render_map_panel,
            )
                .chain(),
        )
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
