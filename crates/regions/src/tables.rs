//! Static region tables.
//!
//! Three tiers, consulted finest first by the classifier. All boxes are
//! coarse rectangular approximations; overlaps are expected and resolve
//! by declaration order, so the order of entries below is part of the
//! observable contract and must not be reshuffled.

use foundation::bounds::GeoBounds;

/// One continental box.
#[derive(Debug, Copy, Clone)]
pub struct ContinentBox {
    pub name: &'static str,
    pub bounds: GeoBounds,
}

/// One national box, scoped to its declared continent.
#[derive(Debug, Copy, Clone)]
pub struct CountryBox {
    pub name: &'static str,
    pub continent: &'static str,
    pub bounds: GeoBounds,
}

/// One sub-national box, scoped to its country.
#[derive(Debug, Copy, Clone)]
pub struct ProvinceBox {
    pub name: &'static str,
    pub country: &'static str,
    pub continent: &'static str,
    pub bounds: GeoBounds,
}

const fn continent(name: &'static str, bounds: GeoBounds) -> ContinentBox {
    ContinentBox { name, bounds }
}

const fn country(name: &'static str, continent: &'static str, bounds: GeoBounds) -> CountryBox {
    CountryBox {
        name,
        continent,
        bounds,
    }
}

const fn province(
    name: &'static str,
    country: &'static str,
    continent: &'static str,
    bounds: GeoBounds,
) -> ProvinceBox {
    ProvinceBox {
        name,
        country,
        continent,
        bounds,
    }
}

/// Sub-national tier, grouped by country in this fixed order: United
/// States, Canada, Brazil, Russia, United Kingdom, Germany, France,
/// South Africa, India, China, Australia. Within a country, entries run
/// in declaration order; where boxes of one country overlap (Scotland
/// against the wider England band), the more specific box comes first.
pub static PROVINCES: [ProvinceBox; 37] = [
    // United States
    province("California", "United States", "North America", GeoBounds::new(32.0, 42.0, -124.0, -114.0)),
    province("Texas", "United States", "North America", GeoBounds::new(25.0, 37.0, -107.0, -93.0)),
    province("Florida", "United States", "North America", GeoBounds::new(24.0, 31.0, -87.0, -80.0)),
    province("New York", "United States", "North America", GeoBounds::new(40.0, 45.0, -80.0, -71.0)),
    province("Alaska", "United States", "North America", GeoBounds::new(54.0, 71.0, -180.0, -129.0)),
    // Canada
    province("British Columbia", "Canada", "North America", GeoBounds::new(48.0, 60.0, -139.0, -114.0)),
    province("Alberta", "Canada", "North America", GeoBounds::new(49.0, 60.0, -120.0, -110.0)),
    province("Ontario", "Canada", "North America", GeoBounds::new(42.0, 57.0, -95.0, -74.0)),
    province("Quebec", "Canada", "North America", GeoBounds::new(45.0, 62.0, -79.0, -57.0)),
    // Brazil
    province("Amazonas", "Brazil", "South America", GeoBounds::new(-10.0, 2.0, -74.0, -56.0)),
    province("Bahia", "Brazil", "South America", GeoBounds::new(-18.0, -8.0, -46.0, -37.0)),
    province("São Paulo", "Brazil", "South America", GeoBounds::new(-25.0, -19.0, -53.0, -44.0)),
    // Russia
    province("Moscow Oblast", "Russia", "Asia", GeoBounds::new(54.0, 57.0, 35.0, 41.0)),
    province("Krasnoyarsk Krai", "Russia", "Asia", GeoBounds::new(51.0, 77.0, 76.0, 113.0)),
    province("Sakha Republic", "Russia", "Asia", GeoBounds::new(56.0, 77.0, 105.0, 163.0)),
    // United Kingdom
    province("Scotland", "United Kingdom", "Europe", GeoBounds::new(55.0, 61.0, -8.0, 0.0)),
    province("Northern Ireland", "United Kingdom", "Europe", GeoBounds::new(54.0, 55.5, -8.2, -5.3)),
    province("Wales", "United Kingdom", "Europe", GeoBounds::new(51.3, 53.5, -5.4, -2.6)),
    province("England", "United Kingdom", "Europe", GeoBounds::new(49.0, 56.0, -6.0, 2.0)),
    // Germany
    province("Bavaria", "Germany", "Europe", GeoBounds::new(47.2, 50.6, 8.9, 13.9)),
    province("North Rhine-Westphalia", "Germany", "Europe", GeoBounds::new(50.3, 52.6, 5.8, 9.5)),
    province("Berlin", "Germany", "Europe", GeoBounds::new(52.3, 52.7, 13.0, 13.8)),
    // France
    province("Île-de-France", "France", "Europe", GeoBounds::new(48.1, 49.3, 1.4, 3.6)),
    province("Provence-Alpes-Côte d'Azur", "France", "Europe", GeoBounds::new(43.0, 45.1, 4.2, 7.7)),
    province("Brittany", "France", "Europe", GeoBounds::new(47.2, 48.9, -5.2, -1.0)),
    // South Africa
    province("Western Cape", "South Africa", "Africa", GeoBounds::new(-34.9, -31.0, 17.8, 24.2)),
    province("Gauteng", "South Africa", "Africa", GeoBounds::new(-26.9, -25.1, 27.1, 29.1)),
    province("KwaZulu-Natal", "South Africa", "Africa", GeoBounds::new(-31.1, -26.8, 28.9, 32.9)),
    // India
    province("Maharashtra", "India", "Asia", GeoBounds::new(15.6, 22.1, 72.6, 80.9)),
    province("Uttar Pradesh", "India", "Asia", GeoBounds::new(23.8, 30.4, 77.0, 84.7)),
    province("Kerala", "India", "Asia", GeoBounds::new(8.2, 12.8, 74.8, 77.4)),
    // China
    province("Guangdong", "China", "Asia", GeoBounds::new(20.2, 25.5, 109.7, 117.3)),
    province("Sichuan", "China", "Asia", GeoBounds::new(26.0, 34.3, 97.3, 108.6)),
    province("Xinjiang", "China", "Asia", GeoBounds::new(34.3, 49.2, 73.4, 96.4)),
    // Australia
    province("New South Wales", "Australia", "Australia", GeoBounds::new(-37.5, -28.2, 141.0, 153.6)),
    province("Queensland", "Australia", "Australia", GeoBounds::new(-29.0, -10.7, 138.0, 153.6)),
    province("Western Australia", "Australia", "Australia", GeoBounds::new(-35.1, -13.7, 112.9, 129.0)),
];

/// National tier, in fixed declaration order.
pub static COUNTRIES: [CountryBox; 12] = [
    country("United States", "North America", GeoBounds::new(24.0, 49.0, -125.0, -66.0)),
    country("Canada", "North America", GeoBounds::new(42.0, 83.0, -141.0, -52.0)),
    country("Brazil", "South America", GeoBounds::new(-34.0, 5.0, -74.0, -35.0)),
    country("Russia", "Asia", GeoBounds::new(41.0, 82.0, 19.0, 180.0)),
    country("China", "Asia", GeoBounds::new(18.0, 54.0, 73.0, 135.0)),
    country("India", "Asia", GeoBounds::new(6.0, 37.0, 68.0, 97.0)),
    country("Australia", "Australia", GeoBounds::new(-44.0, -10.0, 113.0, 154.0)),
    country("United Kingdom", "Europe", GeoBounds::new(49.0, 61.0, -8.0, 2.0)),
    country("France", "Europe", GeoBounds::new(41.0, 51.0, -5.0, 10.0)),
    country("Germany", "Europe", GeoBounds::new(47.0, 55.0, 6.0, 15.0)),
    country("Egypt", "Africa", GeoBounds::new(22.0, 32.0, 25.0, 35.0)),
    country("South Africa", "Africa", GeoBounds::new(-35.0, -22.0, 16.0, 33.0)),
];

/// Continental tier, in fixed declaration order.
pub static CONTINENTS: [ContinentBox; 7] = [
    continent("North America", GeoBounds::new(15.0, 71.0, -168.0, -52.0)),
    continent("South America", GeoBounds::new(-55.0, 13.0, -81.0, -35.0)),
    continent("Europe", GeoBounds::new(35.0, 71.0, -10.0, 40.0)),
    continent("Africa", GeoBounds::new(-35.0, 37.0, -18.0, 51.0)),
    continent("Asia", GeoBounds::new(-10.0, 77.0, 26.0, 180.0)),
    continent("Australia", GeoBounds::new(-44.0, -10.0, 113.0, 154.0)),
    continent("Antarctica", GeoBounds::new(-90.0, -60.0, -180.0, 180.0)),
];

#[cfg(test)]
mod tests {
    use super::{CONTINENTS, COUNTRIES, PROVINCES};

    #[test]
    fn boxes_are_well_formed() {
        let all = PROVINCES
            .iter()
            .map(|p| p.bounds)
            .chain(COUNTRIES.iter().map(|c| c.bounds))
            .chain(CONTINENTS.iter().map(|c| c.bounds));

        for b in all {
            assert!(b.lat_min <= b.lat_max, "{b:?}");
            // No antimeridian wrap; edges stay in [-180, 180].
            assert!(b.lon_min <= b.lon_max, "{b:?}");
            assert!(b.lon_min >= -180.0 && b.lon_max <= 180.0, "{b:?}");
        }
    }

    #[test]
    fn province_parents_agree_with_country_tier() {
        for p in &PROVINCES {
            let parent = COUNTRIES
                .iter()
                .find(|c| c.name == p.country)
                .unwrap_or_else(|| panic!("{} has no national entry", p.country));
            assert_eq!(
                p.continent, parent.continent,
                "{} disagrees with {}",
                p.name, parent.name
            );
        }
    }

    #[test]
    fn continent_names_are_unique() {
        for (i, a) in CONTINENTS.iter().enumerate() {
            for b in &CONTINENTS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
