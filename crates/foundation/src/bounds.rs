/// Inclusive latitude/longitude rectangle, in degrees.
///
/// Longitude edges live in [-180, 180] and never wrap the antimeridian:
/// `lon_min <= lon_max` holds for every table entry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoBounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl GeoBounds {
    pub const fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Self {
        GeoBounds {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        }
    }

    /// Inclusive containment on both axes.
    ///
    /// `lon` must already be normalized into [-180, 180); see
    /// [`crate::angles::normalize_lon`]. Non-finite inputs never match.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.lat_min && lat <= self.lat_max && lon >= self.lon_min && lon <= self.lon_max
    }
}
