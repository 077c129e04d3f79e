pub mod feed;
pub mod sync;

pub use feed::*;
pub use sync::*;

use bevy::prelude::*;

pub struct TelemetryPlugin;

impl Plugin for TelemetryPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, start_feed)
            .add_systems(Update, drain_telemetry);
    }
}
