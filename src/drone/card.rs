use super::identity::DroneId;

/// Placeholder shown by tiles that have never received a value.
const EMPTY_TILE: &str = "--";

/// Three-valued GPS signal indicator on a card.
///
/// A card starts at `Unknown` and only leaves it through an explicit
/// `set_gps_active` call; there is no transition back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GpsSignal {
    #[default]
    Unknown,
    Active,
    Inactive,
}

impl GpsSignal {
    pub fn from_flag(active: Option<bool>) -> Self {
        match active {
            None => GpsSignal::Unknown,
            Some(true) => GpsSignal::Active,
            Some(false) => GpsSignal::Inactive,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GpsSignal::Unknown => "GPS: --",
            GpsSignal::Active => "GPS: Active",
            GpsSignal::Inactive => "GPS: Inactive",
        }
    }
}

/// Display state for one drone's sidebar card: live flag, GPS indicator,
/// and the four key/value tiles (Latitude, Longitude, Altitude, Updated).
///
/// The card holds exactly the strings it renders and never rejects a value.
/// Whether a position report is allowed to reach `set_position` is decided
/// one level up, in [`PlannerStatus`](super::PlannerStatus).
#[derive(Debug, Clone)]
pub struct StatusCard {
    id: DroneId,
    live: bool,
    gps: GpsSignal,
    latitude: String,
    longitude: String,
    altitude: String,
    updated: String,
}

impl StatusCard {
    pub fn new(id: DroneId) -> Self {
        Self {
            id,
            live: false,
            gps: GpsSignal::Unknown,
            latitude: EMPTY_TILE.to_string(),
            longitude: EMPTY_TILE.to_string(),
            altitude: EMPTY_TILE.to_string(),
            updated: EMPTY_TILE.to_string(),
        }
    }

    /// Overwrite the tiles whose argument carries a value; absent arguments
    /// leave their tile untouched. There is no clear operation, so a tile
    /// never reverts to `"--"` once set. Values are rendered verbatim with
    /// no range checks.
    pub fn set_position(
        &mut self,
        latitude: Option<f64>,
        longitude: Option<f64>,
        altitude_m: Option<f64>,
        updated_text: Option<&str>,
    ) {
        if let Some(lat) = latitude {
            self.latitude = format!("{:.6}", lat);
        }
        if let Some(lon) = longitude {
            self.longitude = format!("{:.6}", lon);
        }
        if let Some(alt) = altitude_m {
            self.altitude = format!("{:.1} m", alt);
        }
        if let Some(text) = updated_text {
            self.updated = text.to_string();
        }
    }

    /// Cosmetic only: moves the indicator, never gates `set_position`.
    pub fn set_gps_active(&mut self, active: Option<bool>) {
        self.gps = GpsSignal::from_flag(active);
    }

    pub fn set_live(&mut self, live: bool) {
        self.live = live;
    }

    pub fn id(&self) -> DroneId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.id.display_name()
    }

    pub fn live(&self) -> bool {
        self.live
    }

    pub fn status_label(&self) -> &'static str {
        if self.live {
            "Status: Live"
        } else {
            "Status: Offline"
        }
    }

    pub fn gps(&self) -> GpsSignal {
        self.gps
    }

    pub fn latitude(&self) -> &str {
        &self.latitude
    }

    pub fn longitude(&self) -> &str {
        &self.longitude
    }

    pub fn altitude(&self) -> &str {
        &self.altitude
    }

    pub fn updated(&self) -> &str {
        &self.updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_card_shows_placeholders() {
        let card = StatusCard::new(DroneId::Freyja);
        assert_eq!(card.latitude(), "--");
        assert_eq!(card.longitude(), "--");
        assert_eq!(card.altitude(), "--");
        assert_eq!(card.updated(), "--");
        assert_eq!(card.status_label(), "Status: Offline");
        assert_eq!(card.gps().label(), "GPS: --");
    }

    #[test]
    fn position_tiles_format_to_fixed_precision() {
        let mut card = StatusCard::new(DroneId::Freyja);
        card.set_position(Some(12.9716), Some(77.5946), Some(45.333), None);
        assert_eq!(card.latitude(), "12.971600");
        assert_eq!(card.longitude(), "77.594600");
        assert_eq!(card.altitude(), "45.3 m");
        assert_eq!(card.updated(), "--");
    }

    #[test]
    fn absent_arguments_leave_tiles_untouched() {
        let mut card = StatusCard::new(DroneId::Cleo);
        card.set_position(Some(1.0), Some(2.0), Some(3.0), Some("12:00:00"));
        card.set_position(None, Some(-4.5), None, None);
        assert_eq!(card.latitude(), "1.000000");
        assert_eq!(card.longitude(), "-4.500000");
        assert_eq!(card.altitude(), "3.0 m");
        assert_eq!(card.updated(), "12:00:00");
    }

    #[test]
    fn out_of_range_values_render_verbatim() {
        let mut card = StatusCard::new(DroneId::Cleo);
        card.set_position(Some(123.456789), Some(-200.0), Some(-12.05), None);
        assert_eq!(card.latitude(), "123.456789");
        assert_eq!(card.longitude(), "-200.000000");
        assert_eq!(card.altitude(), "-12.1 m");
    }

    #[test]
    fn gps_indicator_is_three_valued() {
        let mut card = StatusCard::new(DroneId::Freyja);
        card.set_gps_active(Some(true));
        assert_eq!(card.gps().label(), "GPS: Active");
        card.set_gps_active(Some(false));
        assert_eq!(card.gps().label(), "GPS: Inactive");
        card.set_gps_active(None);
        assert_eq!(card.gps().label(), "GPS: --");
    }

    #[test]
    fn set_live_is_idempotent() {
        let mut card = StatusCard::new(DroneId::Freyja);
        card.set_live(true);
        let once = card.clone();
        card.set_live(true);
        assert_eq!(card.live(), once.live());
        assert_eq!(card.status_label(), "Status: Live");
        card.set_live(false);
        assert_eq!(card.status_label(), "Status: Offline");
    }
}
