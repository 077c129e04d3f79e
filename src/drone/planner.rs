use bevy::prelude::*;

use super::card::StatusCard;
use super::identity::DroneId;

/// A position report as it arrives from the telemetry boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude_m: f64,
}

/// Window-side bookkeeping for one drone.
#[derive(Debug, Clone)]
struct DroneSlot {
    card: StatusCard,
    /// Gate for position updates. Coordinates reach the card's tiles only
    /// while this is true. Starts false, which intentionally diverges from
    /// the card's own three-valued indicator starting at "GPS: --".
    gps_active: bool,
    /// Last report received, cached on every update regardless of the gate.
    /// Never rendered.
    last_position: Option<Position>,
}

impl DroneSlot {
    fn new(id: DroneId) -> Self {
        Self {
            card: StatusCard::new(id),
            gps_active: false,
            last_position: None,
        }
    }
}

/// Global status plus one slot per drone; the only component with
/// cross-cutting logic (per-update gating and dispatch).
///
/// The drone set is closed, so slots live in a fixed enum-indexed array
/// rather than a keyed map.
#[derive(Resource, Debug, Clone)]
pub struct PlannerStatus {
    global_live: bool,
    slots: [DroneSlot; 2],
}

impl Default for PlannerStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl PlannerStatus {
    pub fn new() -> Self {
        Self {
            global_live: false,
            slots: [DroneSlot::new(DroneId::Freyja), DroneSlot::new(DroneId::Cleo)],
        }
    }

    fn slot(&self, id: DroneId) -> &DroneSlot {
        &self.slots[id.index()]
    }

    fn slot_mut(&mut self, id: DroneId) -> &mut DroneSlot {
        &mut self.slots[id.index()]
    }

    /// Header flag only; nothing derives it from the per-drone flags.
    pub fn set_global_live(&mut self, live: bool) {
        self.global_live = live;
    }

    pub fn global_live(&self) -> bool {
        self.global_live
    }

    pub fn set_drone_live(&mut self, id: DroneId, live: bool) {
        self.slot_mut(id).card.set_live(live);
    }

    /// Record the gate and mirror it onto the card's indicator. The card's
    /// label never returns to "GPS: --" once this has been called.
    pub fn set_drone_gps_active(&mut self, id: DroneId, active: bool) {
        let slot = self.slot_mut(id);
        slot.gps_active = active;
        slot.card.set_gps_active(Some(active));
    }

    /// Cache the report unconditionally, then let it through to the card's
    /// tiles only while the drone's GPS gate is up. While the gate is down
    /// the tiles keep whatever they showed before, stale or not.
    pub fn update_drone_position(
        &mut self,
        id: DroneId,
        position: Position,
        updated_text: Option<&str>,
    ) {
        let slot = self.slot_mut(id);
        if slot.gps_active {
            slot.card.set_position(
                Some(position.latitude),
                Some(position.longitude),
                Some(position.altitude_m),
                updated_text,
            );
        }
        slot.last_position = Some(position);
    }

    pub fn card(&self, id: DroneId) -> &StatusCard {
        &self.slot(id).card
    }

    pub fn gps_active(&self, id: DroneId) -> bool {
        self.slot(id).gps_active
    }

    pub fn last_position(&self, id: DroneId) -> Option<Position> {
        self.slot(id).last_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drone::GpsSignal;

    const POS: Position = Position {
        latitude: 12.9716,
        longitude: 77.5946,
        altitude_m: 45.333,
    };

    #[test]
    fn fresh_state_is_offline_and_ungated() {
        let status = PlannerStatus::new();
        assert!(!status.global_live());
        for id in DroneId::ALL {
            assert!(!status.gps_active(id));
            assert!(status.last_position(id).is_none());
            assert!(!status.card(id).live());
        }
    }

    #[test]
    fn gated_update_leaves_tiles_but_fills_cache() {
        let mut status = PlannerStatus::new();
        status.update_drone_position(DroneId::Freyja, POS, None);
        assert_eq!(status.card(DroneId::Freyja).latitude(), "--");
        assert_eq!(status.card(DroneId::Freyja).altitude(), "--");
        assert_eq!(status.last_position(DroneId::Freyja), Some(POS));
    }

    #[test]
    fn open_gate_lets_position_through() {
        let mut status = PlannerStatus::new();
        status.update_drone_position(DroneId::Freyja, POS, None);
        status.set_drone_gps_active(DroneId::Freyja, true);
        status.update_drone_position(DroneId::Freyja, POS, None);
        let card = status.card(DroneId::Freyja);
        assert_eq!(card.latitude(), "12.971600");
        assert_eq!(card.longitude(), "77.594600");
        assert_eq!(card.altitude(), "45.3 m");
        assert_eq!(card.updated(), "--");
    }

    #[test]
    fn closing_the_gate_keeps_stale_tiles() {
        let mut status = PlannerStatus::new();
        status.set_drone_gps_active(DroneId::Cleo, true);
        status.update_drone_position(DroneId::Cleo, POS, Some("10:30:00"));
        status.set_drone_gps_active(DroneId::Cleo, false);
        let newer = Position {
            latitude: 13.0,
            longitude: 78.0,
            altitude_m: 50.0,
        };
        status.update_drone_position(DroneId::Cleo, newer, Some("10:31:00"));
        let card = status.card(DroneId::Cleo);
        assert_eq!(card.latitude(), "12.971600");
        assert_eq!(card.updated(), "10:30:00");
        assert_eq!(status.last_position(DroneId::Cleo), Some(newer));
    }

    #[test]
    fn updates_never_leak_across_drones() {
        let mut status = PlannerStatus::new();
        status.set_drone_gps_active(DroneId::Freyja, true);
        status.update_drone_position(DroneId::Freyja, POS, None);
        status.set_drone_live(DroneId::Freyja, true);
        let cleo = status.card(DroneId::Cleo);
        assert_eq!(cleo.latitude(), "--");
        assert!(!cleo.live());
        assert_eq!(cleo.gps(), GpsSignal::Unknown);
        assert!(status.last_position(DroneId::Cleo).is_none());
    }

    #[test]
    fn gate_default_diverges_from_card_indicator() {
        let mut status = PlannerStatus::new();
        // Window-level gate starts false while the card still shows "--".
        assert!(!status.gps_active(DroneId::Cleo));
        assert_eq!(status.card(DroneId::Cleo).gps().label(), "GPS: --");
        status.set_drone_gps_active(DroneId::Cleo, false);
        assert_eq!(status.card(DroneId::Cleo).gps().label(), "GPS: Inactive");
    }

    #[test]
    fn global_live_is_independent_of_drone_flags() {
        let mut status = PlannerStatus::new();
        status.set_drone_live(DroneId::Freyja, true);
        status.set_drone_live(DroneId::Cleo, true);
        assert!(!status.global_live());
        status.set_global_live(true);
        status.set_global_live(true);
        assert!(status.global_live());
    }
}
