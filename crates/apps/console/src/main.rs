use climate::DataLayer;
use dashboard::DashboardState;
use dashboard::satellites;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Demo picks: one per tier, plus an open-ocean miss.
const PICKS: [(f64, f64); 5] = [
    (37.0, -122.0),  // California
    (51.5, -0.1),    // London
    (-14.0, -60.0),  // Brazilian interior
    (63.0, 15.0),    // central Sweden
    (10.0, -140.0),  // mid-Pacific
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut state = DashboardState::new();
    info!(
        layer = state.active_layer().id(),
        playing = state.is_playing(),
        "dashboard ready"
    );

    for sat in &satellites::FLEET {
        info!(
            name = sat.name,
            status = ?sat.status,
            feed = sat.data_points,
            "satellite"
        );
    }

    for (lat, lon) in PICKS {
        let report = state.select(lat, lon);
        info!(
            lat,
            lon,
            region = %report.region.name,
            continent = %report.region.continent,
            "pick classified"
        );
        for layer in DataLayer::ALL {
            if let Some(value) = report.readings.get(layer.id()) {
                info!(
                    layer = layer.id(),
                    unit = layer.summary().unit,
                    value = %value,
                    "reading"
                );
            }
        }
    }

    // Leave the last pick selected and emit it the way the info panel
    // would consume it.
    if let Some(report) = state.selected() {
        match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{json}"),
            Err(e) => error!("serialize report: {e}"),
        }
    }
}
