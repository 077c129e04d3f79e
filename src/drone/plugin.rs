use bevy::prelude::*;

use crate::mission::{log_mission_commands, MissionCommand};

use super::planner::PlannerStatus;

pub struct DronePlugin;

impl Plugin for DronePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlannerStatus>()
            .add_message::<MissionCommand>()
            .add_systems(Update, log_mission_commands);
    }
}
