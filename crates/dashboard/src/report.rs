use std::collections::BTreeMap;

use climate::{DataLayer, reading_with};
use rand::Rng;
use regions::{Region, classify};
use serde::Serialize;

/// Everything the info panel needs for one globe pick.
///
/// `readings` carries one synthesized value per registry layer, keyed by
/// layer id. Reports are rebuilt from scratch on every pick; two
/// captures of the same point produce different readings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionReport {
    pub lat: f64,
    pub lon: f64,
    pub region: Region,
    pub readings: BTreeMap<String, String>,
}

impl RegionReport {
    /// Classify `(lat, lon)` and synthesize one reading per layer with
    /// the thread-local generator.
    pub fn capture(lat: f64, lon: f64) -> Self {
        Self::capture_with(&mut rand::rng(), lat, lon)
    }

    pub fn capture_with<R: Rng + ?Sized>(rng: &mut R, lat: f64, lon: f64) -> Self {
        let region = classify(lat, lon);
        let mut readings = BTreeMap::new();
        for layer in DataLayer::ALL {
            readings.insert(
                layer.id().to_string(),
                reading_with(rng, &region, layer.id()),
            );
        }
        RegionReport {
            lat,
            lon,
            region,
            readings,
        }
    }
}
