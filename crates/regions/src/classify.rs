use foundation::angles::normalize_lon;

use crate::region::{Region, RegionKind};
use crate::tables::{CONTINENTS, COUNTRIES, PROVINCES};

/// Resolve a globe pick to the first matching region.
///
/// Ordering contract:
/// - Tiers are consulted finest first: sub-national, national,
///   continental, then the ocean fallback.
/// - Within a tier, boxes are tested in declaration order and the first
///   inclusive containment wins, even when a later box is smaller or
///   nested inside an earlier one. A point on a shared edge resolves to
///   whichever box is declared first.
///
/// Latitude is taken as-is (no clamping or validation); longitude is
/// normalized into [-180, 180) exactly once before any comparison.
/// Non-finite inputs fail every containment test and fall through to the
/// ocean fallback, where a NaN latitude fails the strict `lat > 0` test
/// and reports the southern hemisphere.
pub fn classify(lat: f64, lon: f64) -> Region {
    let lon = normalize_lon(lon);

    for p in &PROVINCES {
        if p.bounds.contains(lat, lon) {
            return Region::state(p.name, p.country, p.continent);
        }
    }

    for c in &COUNTRIES {
        if c.bounds.contains(lat, lon) {
            return Region::country(c.name, c.continent);
        }
    }

    for c in &CONTINENTS {
        if c.bounds.contains(lat, lon) {
            return Region::continent(c.name);
        }
    }

    ocean_fallback(lat)
}

/// Hemisphere split is strict: the equator itself reads as southern.
fn ocean_fallback(lat: f64) -> Region {
    let name = if lat > 0.0 {
        "Northern Ocean"
    } else {
        "Southern Ocean"
    };
    Region {
        name: name.to_string(),
        kind: RegionKind::Continent,
        continent: "Ocean".to_string(),
        country: None,
        state: None,
    }
}
