//! Synthetic per-region readings.
//!
//! Values are drawn from a per-continent base/variance profile and are
//! deliberately non-deterministic: repeated calls with identical inputs
//! return different values inside the profile's band. Nothing here is
//! cached between calls.

use rand::Rng;
use regions::Region;

/// Base/variance pair for one continent row.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Profile {
    pub base: f64,
    pub variance: f64,
}

impl Profile {
    pub const fn new(base: f64, variance: f64) -> Self {
        Profile { base, variance }
    }

    /// Inclusive band a synthesized value can land in.
    pub fn band(self) -> (f64, f64) {
        (
            self.base - self.variance / 2.0,
            self.base + self.variance / 2.0,
        )
    }
}

/// Per-continent rows for one data type.
///
/// `ocean` doubles as the row for any continent the match does not name,
/// which also covers the `Ocean` fallback continent itself.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProfileTable {
    pub north_america: Profile,
    pub south_america: Profile,
    pub europe: Profile,
    pub africa: Profile,
    pub asia: Profile,
    pub australia: Profile,
    pub antarctica: Profile,
    pub ocean: Profile,
}

impl ProfileTable {
    pub fn row(&self, continent: &str) -> Profile {
        match continent {
            "North America" => self.north_america,
            "South America" => self.south_america,
            "Europe" => self.europe,
            "Africa" => self.africa,
            "Asia" => self.asia,
            "Australia" => self.australia,
            "Antarctica" => self.antarctica,
            _ => self.ocean,
        }
    }
}

pub static TEMPERATURE: ProfileTable = ProfileTable {
    north_america: Profile::new(8.0, 25.0),
    south_america: Profile::new(22.0, 15.0),
    europe: Profile::new(6.0, 20.0),
    africa: Profile::new(28.0, 12.0),
    asia: Profile::new(12.0, 30.0),
    australia: Profile::new(20.0, 18.0),
    antarctica: Profile::new(-40.0, 20.0),
    ocean: Profile::new(15.0, 10.0),
};

pub static PRECIPITATION: ProfileTable = ProfileTable {
    north_america: Profile::new(50.0, 40.0),
    south_america: Profile::new(80.0, 60.0),
    europe: Profile::new(45.0, 30.0),
    africa: Profile::new(30.0, 50.0),
    asia: Profile::new(60.0, 70.0),
    australia: Profile::new(25.0, 35.0),
    antarctica: Profile::new(5.0, 10.0),
    ocean: Profile::new(0.0, 5.0),
};

pub static WIND: ProfileTable = ProfileTable {
    north_america: Profile::new(15.0, 20.0),
    south_america: Profile::new(12.0, 15.0),
    europe: Profile::new(18.0, 25.0),
    africa: Profile::new(10.0, 18.0),
    asia: Profile::new(14.0, 22.0),
    australia: Profile::new(16.0, 20.0),
    antarctica: Profile::new(25.0, 30.0),
    ocean: Profile::new(20.0, 25.0),
};

/// Table for a data-type key. Only `temperature`, `precipitation`, and
/// `wind` have their own tables; every other key (including the clouds,
/// ocean, and vegetation layers) reads the temperature table.
pub fn table_for(data_type: &str) -> &'static ProfileTable {
    match data_type {
        "precipitation" => &PRECIPITATION,
        "wind" => &WIND,
        _ => &TEMPERATURE,
    }
}

/// Synthesize one reading for `region` and `data_type` from `rng`.
///
/// The value is `base + (u - 0.5) * variance` with `u` uniform in
/// [0, 1), formatted to one fractional digit (`{:.1}`,
/// round-half-to-even). Pure in everything but the generator.
pub fn reading_with<R: Rng + ?Sized>(rng: &mut R, region: &Region, data_type: &str) -> String {
    let profile = table_for(data_type).row(&region.continent);
    let value = profile.base + (rng.random::<f64>() - 0.5) * profile.variance;
    format!("{value:.1}")
}

/// Synthesize one reading with the thread-local generator.
pub fn reading(region: &Region, data_type: &str) -> String {
    reading_with(&mut rand::rng(), region, data_type)
}
