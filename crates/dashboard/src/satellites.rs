use serde::Serialize;

/// Operational status of one satellite feed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SatelliteStatus {
    Active,
    Maintenance,
}

/// One entry in the satellite network panel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Satellite {
    pub name: &'static str,
    pub status: SatelliteStatus,
    /// Display figure for the feed volume, e.g. "450K".
    pub data_points: &'static str,
}

/// The fixed satellite fleet, in panel order.
pub static FLEET: [Satellite; 5] = [
    Satellite {
        name: "GOES-16",
        status: SatelliteStatus::Active,
        data_points: "450K",
    },
    Satellite {
        name: "NOAA-20",
        status: SatelliteStatus::Active,
        data_points: "380K",
    },
    Satellite {
        name: "Aqua",
        status: SatelliteStatus::Active,
        data_points: "290K",
    },
    Satellite {
        name: "Terra",
        status: SatelliteStatus::Maintenance,
        data_points: "0K",
    },
    Satellite {
        name: "Sentinel-3A",
        status: SatelliteStatus::Active,
        data_points: "520K",
    },
];

/// Number of satellites currently reporting.
pub fn active_count() -> usize {
    FLEET
        .iter()
        .filter(|s| s.status == SatelliteStatus::Active)
        .count()
}

#[cfg(test)]
mod tests {
    use super::{FLEET, SatelliteStatus, active_count};

    #[test]
    fn fleet_order_is_stable() {
        let names: Vec<&str> = FLEET.iter().map(|s| s.name).collect();
        assert_eq!(names, ["GOES-16", "NOAA-20", "Aqua", "Terra", "Sentinel-3A"]);
    }

    #[test]
    fn only_terra_is_down() {
        assert_eq!(active_count(), 4);
        let terra = FLEET.iter().find(|s| s.name == "Terra").unwrap();
        assert_eq!(terra.status, SatelliteStatus::Maintenance);
        assert_eq!(terra.data_points, "0K");
    }
}
