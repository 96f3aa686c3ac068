//! Local state and derived views for the live-monitoring panel.

use shared_types::{OfficerRecord, OfficerStatus, StatusFilter};

/// Officers passing `filter`, in fixture order.
pub fn filter_officers(officers: &[OfficerRecord], filter: StatusFilter) -> Vec<&OfficerRecord> {
    officers
        .iter()
        .filter(|officer| filter.matches(officer.status))
        .collect()
}

/// Per-status totals over an officer collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub active: usize,
    pub issue: usize,
    pub offline: usize,
}

impl StatusCounts {
    pub fn of(officers: &[OfficerRecord]) -> Self {
        officers
            .iter()
            .fold(StatusCounts::default(), |mut counts, officer| {
                match officer.status {
                    OfficerStatus::Active => counts.active += 1,
                    OfficerStatus::Issue => counts.issue += 1,
                    OfficerStatus::Offline => counts.offline += 1,
                }
                counts
            })
    }

    pub fn total(&self) -> usize {
        self.active + self.issue + self.offline
    }
}

/// Where a marker sits on the illustrative map, in percent of the map box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerPosition {
    pub left_pct: usize,
    pub top_pct: usize,
}

impl MarkerPosition {
    pub fn style(&self) -> String {
        format!("left: {}%; top: {}%;", self.left_pct, self.top_pct)
    }
}

/// Layout of the marker at `index` in the filtered list.
///
/// The map is illustrative: this ignores the officer's real location.
pub fn marker_position(index: usize) -> MarkerPosition {
    MarkerPosition {
        left_pct: 20 + index * 15,
        top_pct: 30 + (index % 3) * 20,
    }
}

/// Battery level bands used for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryLevel {
    /// Below 20%.
    Critical,
    /// 20% up to 50%.
    Low,
    Healthy,
}

impl BatteryLevel {
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            0..=19 => BatteryLevel::Critical,
            20..=49 => BatteryLevel::Low,
            _ => BatteryLevel::Healthy,
        }
    }
}

/// Filter dropdown value and the highlighted officer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonitoringState {
    pub status_filter: StatusFilter,
    pub selected_officer: Option<String>,
}

impl MonitoringState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        tracing::debug!(filter = filter.as_str(), "monitoring filter changed");
        self.status_filter = filter;
    }

    /// Highlight an officer. Selecting the same officer again keeps it selected.
    pub fn select_officer(&mut self, id: impl Into<String>) {
        self.selected_officer = Some(id.into());
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_officer.as_deref() == Some(id)
    }

    pub fn visible<'a>(&self, officers: &'a [OfficerRecord]) -> Vec<&'a OfficerRecord> {
        filter_officers(officers, self.status_filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{FixtureRepository, StaticFixtures};
    use pretty_assertions::assert_eq;

    fn names(officers: &[&OfficerRecord]) -> Vec<String> {
        officers.iter().map(|o| o.name.clone()).collect()
    }

    #[test]
    fn all_filter_is_identity_in_order() {
        let fixtures = StaticFixtures::new();
        let visible = filter_officers(fixtures.officers(), StatusFilter::All);
        let expected: Vec<&OfficerRecord> = fixtures.officers().iter().collect();
        assert_eq!(visible, expected);
    }

    #[test]
    fn offline_filter_yields_sunil_yadav() {
        let fixtures = StaticFixtures::new();
        let visible = filter_officers(fixtures.officers(), StatusFilter::Offline);
        assert_eq!(names(&visible), ["Sunil Yadav"]);
    }

    #[test]
    fn active_filter_preserves_relative_order() {
        let fixtures = StaticFixtures::new();
        let visible = filter_officers(fixtures.officers(), StatusFilter::Active);
        assert_eq!(names(&visible), ["Raj Kumar", "Amit Singh", "Deepak Verma"]);
    }

    #[test]
    fn issue_filter() {
        let fixtures = StaticFixtures::new();
        let visible = filter_officers(fixtures.officers(), StatusFilter::Issue);
        assert_eq!(names(&visible), ["Priya Sharma"]);
    }

    #[test]
    fn status_counts_over_fixtures() {
        let fixtures = StaticFixtures::new();
        let counts = StatusCounts::of(fixtures.officers());
        assert_eq!(
            counts,
            StatusCounts {
                active: 3,
                issue: 1,
                offline: 1
            }
        );
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn marker_layout_is_index_based() {
        assert_eq!(marker_position(0), MarkerPosition { left_pct: 20, top_pct: 30 });
        assert_eq!(marker_position(1), MarkerPosition { left_pct: 35, top_pct: 50 });
        assert_eq!(marker_position(2), MarkerPosition { left_pct: 50, top_pct: 70 });
        assert_eq!(marker_position(3), MarkerPosition { left_pct: 65, top_pct: 30 });
        assert_eq!(marker_position(4).style(), "left: 80%; top: 50%;");
    }

    #[test]
    fn battery_bands() {
        assert_eq!(BatteryLevel::from_percent(0), BatteryLevel::Critical);
        assert_eq!(BatteryLevel::from_percent(19), BatteryLevel::Critical);
        assert_eq!(BatteryLevel::from_percent(20), BatteryLevel::Low);
        assert_eq!(BatteryLevel::from_percent(49), BatteryLevel::Low);
        assert_eq!(BatteryLevel::from_percent(50), BatteryLevel::Healthy);
        assert_eq!(BatteryLevel::from_percent(100), BatteryLevel::Healthy);
    }

    #[test]
    fn selecting_same_officer_twice_keeps_selection() {
        let mut state = MonitoringState::new();
        state.select_officer("3");
        state.select_officer("3");
        assert!(state.is_selected("3"));
        state.select_officer("4");
        assert!(!state.is_selected("3"));
        assert!(state.is_selected("4"));
    }

    #[test]
    fn state_defaults_and_visible() {
        let fixtures = StaticFixtures::new();
        let mut state = MonitoringState::new();
        assert_eq!(state.status_filter, StatusFilter::All);
        assert_eq!(state.selected_officer, None);
        assert_eq!(state.visible(fixtures.officers()).len(), 5);

        state.set_filter(StatusFilter::Issue);
        assert_eq!(names(&state.visible(fixtures.officers())), ["Priya Sharma"]);
    }
}
