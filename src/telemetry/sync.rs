use bevy::prelude::*;

use crate::drone::{DroneId, PlannerStatus, Position};

use super::feed::{TelemetryInbox, TelemetryUpdate};

/// Drain the feed channel and apply each update to the planner state.
///
/// This is the identity boundary: names are resolved here, once, and
/// updates addressed outside the closed set are dropped without touching
/// any state. Runs on the UI schedule, so the planner resource is only
/// ever mutated on the thread that renders it.
pub fn drain_telemetry(inbox: Option<Res<TelemetryInbox>>, mut status: ResMut<PlannerStatus>) {
    let Some(inbox) = inbox else {
        return;
    };

    for update in inbox.updates.try_iter() {
        apply_update(&mut status, update);
    }
}

pub(crate) fn apply_update(status: &mut PlannerStatus, update: TelemetryUpdate) {
    match update {
        TelemetryUpdate::GlobalLive(live) => status.set_global_live(live),
        TelemetryUpdate::DroneLive { name, live } => {
            if let Some(id) = resolve(&name) {
                status.set_drone_live(id, live);
            }
        }
        TelemetryUpdate::GpsActive { name, active } => {
            if let Some(id) = resolve(&name) {
                status.set_drone_gps_active(id, active);
            }
        }
        TelemetryUpdate::Position {
            name,
            latitude,
            longitude,
            altitude_m,
            updated,
        } => {
            if let Some(id) = resolve(&name) {
                status.update_drone_position(
                    id,
                    Position {
                        latitude,
                        longitude,
                        altitude_m,
                    },
                    updated.as_deref(),
                );
            }
        }
    }
}

fn resolve(name: &str) -> Option<DroneId> {
    let id = DroneId::parse(name);
    if id.is_none() {
        debug!("Dropping update for unknown drone {:?}", name);
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(name: &str, latitude: f64, longitude: f64, altitude_m: f64) -> TelemetryUpdate {
        TelemetryUpdate::Position {
            name: name.to_string(),
            latitude,
            longitude,
            altitude_m,
            updated: None,
        }
    }

    #[test]
    fn position_stays_dashed_until_gps_goes_active() {
        let mut status = PlannerStatus::new();

        apply_update(&mut status, position("Freyja", 12.9716, 77.5946, 45.333));
        assert_eq!(status.card(DroneId::Freyja).latitude(), "--");

        apply_update(
            &mut status,
            TelemetryUpdate::GpsActive {
                name: "freyja".to_string(),
                active: true,
            },
        );
        apply_update(&mut status, position("freyja", 12.9716, 77.5946, 45.333));

        let card = status.card(DroneId::Freyja);
        assert_eq!(card.latitude(), "12.971600");
        assert_eq!(card.altitude(), "45.3 m");
    }

    #[test]
    fn unknown_names_change_nothing() {
        let mut status = PlannerStatus::new();
        let before = format!("{:?}", status);

        apply_update(&mut status, position("odin", 1.0, 2.0, 3.0));
        apply_update(
            &mut status,
            TelemetryUpdate::DroneLive {
                name: "valkyrie".to_string(),
                live: true,
            },
        );
        apply_update(
            &mut status,
            TelemetryUpdate::GpsActive {
                name: " ".to_string(),
                active: true,
            },
        );

        assert_eq!(format!("{:?}", status), before);
    }

    #[test]
    fn cache_fills_even_while_gated() {
        let mut status = PlannerStatus::new();
        apply_update(&mut status, position("  CLEO ", 1.5, 2.5, 3.5));
        assert_eq!(
            status.last_position(DroneId::Cleo),
            Some(Position {
                latitude: 1.5,
                longitude: 2.5,
                altitude_m: 3.5,
            })
        );
        assert_eq!(status.card(DroneId::Cleo).latitude(), "--");
    }

    #[test]
    fn updated_text_flows_through_to_the_card() {
        let mut status = PlannerStatus::new();
        apply_update(
            &mut status,
            TelemetryUpdate::GpsActive {
                name: "cleo".to_string(),
                active: true,
            },
        );
        apply_update(
            &mut status,
            TelemetryUpdate::Position {
                name: "cleo".to_string(),
                latitude: 1.0,
                longitude: 2.0,
                altitude_m: 3.0,
                updated: Some("10:30:00".to_string()),
            },
        );
        assert_eq!(status.card(DroneId::Cleo).updated(), "10:30:00");
    }

    #[test]
    fn global_live_applies_without_a_name() {
        let mut status = PlannerStatus::new();
        apply_update(&mut status, TelemetryUpdate::GlobalLive(true));
        assert!(status.global_live());
    }
}
