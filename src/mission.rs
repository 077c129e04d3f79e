use bevy::prelude::*;

use crate::drone::DroneId;

/// Commands emitted by the sidebar's mission-control buttons.
///
/// Nothing in this repo carries them to an airframe; the flight-control
/// link is an external collaborator and would subscribe here.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionCommand {
    Start,
    Kill(DroneId),
}

impl MissionCommand {
    pub fn describe(&self) -> String {
        match self {
            MissionCommand::Start => "start mission".to_string(),
            MissionCommand::Kill(id) => format!("kill {}", id.display_name()),
        }
    }
}

/// Drain and log mission commands until a real uplink consumes them.
pub fn log_mission_commands(mut commands: MessageReader<MissionCommand>) {
    for command in commands.read() {
        info!("Mission command issued: {}", command.describe());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptions_name_the_drone() {
        assert_eq!(MissionCommand::Start.describe(), "start mission");
        assert_eq!(
            MissionCommand::Kill(DroneId::Cleo).describe(),
            "kill Cleo"
        );
    }
}
