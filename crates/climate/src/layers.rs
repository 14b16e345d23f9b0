use serde::{Deserialize, Serialize};

/// The six fixed data layers, in panel declaration order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataLayer {
    Temperature,
    Precipitation,
    Wind,
    Clouds,
    Ocean,
    Vegetation,
}

/// Direction of the headline change for one layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Global headline figures for one data layer, as shown in the data
/// panel. The figures are fixed display copy, not measurements.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct LayerSummary {
    pub title: &'static str,
    pub unit: &'static str,
    pub current: &'static str,
    pub change: &'static str,
    pub trend: Trend,
    pub description: &'static str,
}

impl DataLayer {
    pub const ALL: [DataLayer; 6] = [
        DataLayer::Temperature,
        DataLayer::Precipitation,
        DataLayer::Wind,
        DataLayer::Clouds,
        DataLayer::Ocean,
        DataLayer::Vegetation,
    ];

    /// Stable id: the readings-map key and the profile lookup key.
    pub fn id(self) -> &'static str {
        match self {
            DataLayer::Temperature => "temperature",
            DataLayer::Precipitation => "precipitation",
            DataLayer::Wind => "wind",
            DataLayer::Clouds => "clouds",
            DataLayer::Ocean => "ocean",
            DataLayer::Vegetation => "vegetation",
        }
    }

    pub fn from_id(id: &str) -> Option<DataLayer> {
        DataLayer::ALL.into_iter().find(|layer| layer.id() == id)
    }

    pub fn name(self) -> &'static str {
        match self {
            DataLayer::Temperature => "Temperature",
            DataLayer::Precipitation => "Precipitation",
            DataLayer::Wind => "Wind Patterns",
            DataLayer::Clouds => "Cloud Coverage",
            DataLayer::Ocean => "Ocean Currents",
            DataLayer::Vegetation => "Vegetation",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DataLayer::Temperature => "Global surface temperature patterns",
            DataLayer::Precipitation => "Rainfall and snow patterns",
            DataLayer::Wind => "Atmospheric wind currents",
            DataLayer::Clouds => "Global cloud formations",
            DataLayer::Ocean => "Ocean temperature and currents",
            DataLayer::Vegetation => "Plant life and biomass",
        }
    }

    /// Headline figures for the data panel.
    pub fn summary(self) -> LayerSummary {
        match self {
            DataLayer::Temperature => LayerSummary {
                title: "Global Temperature",
                unit: "°C",
                current: "14.2",
                change: "+0.8",
                trend: Trend::Up,
                description: "Global average surface temperature",
            },
            DataLayer::Precipitation => LayerSummary {
                title: "Precipitation",
                unit: "mm/day",
                current: "2.7",
                change: "-0.3",
                trend: Trend::Down,
                description: "Daily precipitation average",
            },
            DataLayer::Wind => LayerSummary {
                title: "Wind Speed",
                unit: "m/s",
                current: "7.4",
                change: "+1.2",
                trend: Trend::Up,
                description: "Average wind velocity",
            },
            DataLayer::Clouds => LayerSummary {
                title: "Cloud Cover",
                unit: "%",
                current: "67",
                change: "0",
                trend: Trend::Stable,
                description: "Global cloud coverage percentage",
            },
            DataLayer::Ocean => LayerSummary {
                title: "Sea Temperature",
                unit: "°C",
                current: "16.8",
                change: "+0.4",
                trend: Trend::Up,
                description: "Ocean surface temperature",
            },
            DataLayer::Vegetation => LayerSummary {
                title: "Vegetation Index",
                unit: "NDVI",
                current: "0.52",
                change: "+0.02",
                trend: Trend::Up,
                description: "Normalized vegetation health",
            },
        }
    }
}
