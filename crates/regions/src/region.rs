use serde::{Deserialize, Serialize};

/// Granularity of a classified region.
///
/// `City` is reserved for a finer future tier; no current table produces
/// it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    Continent,
    Country,
    State,
    City,
}

/// A classified geographic region.
///
/// Invariants:
/// - `State` populates both `country` and `state`; `continent` is the
///   country's declared continent.
/// - `Country` populates `country` and leaves `state` empty.
/// - `Continent` leaves both empty.
///
/// A `Region` is built fresh per classification and owned by the caller;
/// nothing here is cached or shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub kind: RegionKind,
    pub continent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl Region {
    pub fn continent(name: &str) -> Self {
        Region {
            name: name.to_string(),
            kind: RegionKind::Continent,
            continent: name.to_string(),
            country: None,
            state: None,
        }
    }

    pub fn country(name: &str, continent: &str) -> Self {
        Region {
            name: name.to_string(),
            kind: RegionKind::Country,
            continent: continent.to_string(),
            country: Some(name.to_string()),
            state: None,
        }
    }

    /// Display name is `"{state}, {country}"`.
    pub fn state(state: &str, country: &str, continent: &str) -> Self {
        Region {
            name: format!("{state}, {country}"),
            kind: RegionKind::State,
            continent: continent.to_string(),
            country: Some(country.to_string()),
            state: Some(state.to_string()),
        }
    }
}
