use climate::DataLayer;
use rand::Rng;

use crate::report::RegionReport;

/// Time-speed multiplier limits for the playback controls.
pub const MIN_TIME_SPEED: f64 = 0.25;
pub const MAX_TIME_SPEED: f64 = 8.0;

/// Reasons a dashboard command is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    UnknownLayer(String),
}

impl std::fmt::Display for DashboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardError::UnknownLayer(id) => write!(f, "unknown data layer id: {id}"),
        }
    }
}

impl std::error::Error for DashboardError {}

/// Top-level dashboard state.
///
/// Owns what the panels would otherwise keep as scattered view state:
/// the active data layer, the playback flag, the time-speed multiplier,
/// and the currently selected region report. The embedder holds exactly
/// one of these and passes it down; there are no globals and nothing is
/// persisted across sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    active_layer: DataLayer,
    playing: bool,
    time_speed: f64,
    selected: Option<RegionReport>,
}

impl Default for DashboardState {
    fn default() -> Self {
        DashboardState {
            active_layer: DataLayer::Temperature,
            playing: true,
            time_speed: 1.0,
            selected: None,
        }
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_layer(&self) -> DataLayer {
        self.active_layer
    }

    /// Switch the active layer by id. An unknown id is an error and
    /// leaves the state untouched.
    pub fn set_active_layer(&mut self, id: &str) -> Result<DataLayer, DashboardError> {
        let Some(layer) = DataLayer::from_id(id) else {
            return Err(DashboardError::UnknownLayer(id.to_string()));
        };
        self.active_layer = layer;
        Ok(layer)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Flip the playback flag and return the new value.
    pub fn toggle_playback(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    pub fn time_speed(&self) -> f64 {
        self.time_speed
    }

    /// Clamp into [`MIN_TIME_SPEED`, `MAX_TIME_SPEED`]. Non-finite
    /// inputs are ignored.
    pub fn set_time_speed(&mut self, speed: f64) {
        if !speed.is_finite() {
            return;
        }
        self.time_speed = speed.clamp(MIN_TIME_SPEED, MAX_TIME_SPEED);
    }

    pub fn selected(&self) -> Option<&RegionReport> {
        self.selected.as_ref()
    }

    /// Capture a fresh report for a globe pick and select it.
    pub fn select(&mut self, lat: f64, lon: f64) -> &RegionReport {
        self.select_with(&mut rand::rng(), lat, lon)
    }

    pub fn select_with<R: Rng + ?Sized>(&mut self, rng: &mut R, lat: f64, lon: f64) -> &RegionReport {
        self.selected.insert(RegionReport::capture_with(rng, lat, lon))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use climate::DataLayer;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::{DashboardError, DashboardState, MAX_TIME_SPEED, MIN_TIME_SPEED};

    #[test]
    fn defaults_match_the_initial_panel_state() {
        let state = DashboardState::new();
        assert_eq!(state.active_layer(), DataLayer::Temperature);
        assert!(state.is_playing());
        assert_eq!(state.time_speed(), 1.0);
        assert!(state.selected().is_none());
    }

    #[test]
    fn set_active_layer_by_id() {
        let mut state = DashboardState::new();
        assert_eq!(state.set_active_layer("wind"), Ok(DataLayer::Wind));
        assert_eq!(state.active_layer(), DataLayer::Wind);
    }

    #[test]
    fn unknown_layer_id_is_rejected_without_side_effects() {
        let mut state = DashboardState::new();
        state.set_active_layer("clouds").unwrap();

        let err = state.set_active_layer("aurora").unwrap_err();
        assert_eq!(err, DashboardError::UnknownLayer("aurora".to_string()));
        assert_eq!(err.to_string(), "unknown data layer id: aurora");
        assert_eq!(state.active_layer(), DataLayer::Clouds);
    }

    #[test]
    fn toggle_playback_flips_and_reports() {
        let mut state = DashboardState::new();
        assert!(!state.toggle_playback());
        assert!(!state.is_playing());
        assert!(state.toggle_playback());
    }

    #[test]
    fn time_speed_clamps_and_ignores_non_finite() {
        let mut state = DashboardState::new();

        state.set_time_speed(100.0);
        assert_eq!(state.time_speed(), MAX_TIME_SPEED);

        state.set_time_speed(0.0);
        assert_eq!(state.time_speed(), MIN_TIME_SPEED);

        state.set_time_speed(2.0);
        state.set_time_speed(f64::NAN);
        state.set_time_speed(f64::INFINITY);
        assert_eq!(state.time_speed(), 2.0);
    }

    #[test]
    fn select_then_clear() {
        let mut state = DashboardState::new();
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let report = state.select_with(&mut rng, 51.5, -0.1);
        assert_eq!(report.region.state.as_deref(), Some("England"));
        assert!(state.selected().is_some());

        state.clear_selection();
        assert!(state.selected().is_none());
    }

    #[test]
    fn reselecting_replaces_the_previous_report() {
        let mut state = DashboardState::new();
        let mut rng = ChaCha8Rng::seed_from_u64(6);

        state.select_with(&mut rng, 37.0, -122.0);
        state.select_with(&mut rng, 26.0, 30.0);

        let report = state.selected().unwrap();
        assert_eq!(report.region.name, "Egypt");
    }
}
