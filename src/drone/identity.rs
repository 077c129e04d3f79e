/// The closed set of airframes this planner controls.
///
/// Identity resolution happens once, at the telemetry boundary; everything
/// behind that boundary works with the enum and can be matched exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DroneId {
    Freyja,
    Cleo,
}

impl DroneId {
    pub const ALL: [DroneId; 2] = [DroneId::Freyja, DroneId::Cleo];

    /// Resolve an externally supplied drone name. Matching is
    /// whitespace-trimmed and case-insensitive; anything outside the closed
    /// set yields `None` and the caller drops the update.
    pub fn parse(name: &str) -> Option<DroneId> {
        match name.trim().to_ascii_lowercase().as_str() {
            "freyja" => Some(DroneId::Freyja),
            "cleo" => Some(DroneId::Cleo),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DroneId::Freyja => "Freyja",
            DroneId::Cleo => "Cleo",
        }
    }

    /// Stable index into the fixed per-drone slot arrays.
    pub(crate) fn index(self) -> usize {
        match self {
            DroneId::Freyja => 0,
            DroneId::Cleo => 1,
        }
    }

    /// Dedicated image file looked up under `assets/`.
    pub fn image_file(&self) -> &'static str {
        match self {
            DroneId::Freyja => "Freyja.png",
            DroneId::Cleo => "Cleo.png",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive_and_trimmed() {
        assert_eq!(DroneId::parse("Freyja"), Some(DroneId::Freyja));
        assert_eq!(DroneId::parse("  freyja  "), Some(DroneId::Freyja));
        assert_eq!(DroneId::parse("CLEO"), Some(DroneId::Cleo));
        assert_eq!(DroneId::parse("\tcleo\n"), Some(DroneId::Cleo));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(DroneId::parse(""), None);
        assert_eq!(DroneId::parse("odin"), None);
        assert_eq!(DroneId::parse("freyja2"), None);
        assert_eq!(DroneId::parse("frey ja"), None);
    }

    #[test]
    fn indices_cover_all_slots() {
        let mut seen = [false; 2];
        for id in DroneId::ALL {
            seen[id.index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
