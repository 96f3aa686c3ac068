use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, OfficerRecord, StatusFilter, ALL_STATUS_FILTERS};
use station::monitoring::{filter_officers, marker_position, StatusCounts};
use station::{FixtureRepository, MonitoringState, StaticFixtures};

fn names(officers: Vec<&OfficerRecord>) -> Vec<&str> {
    officers.into_iter().map(|o| o.name.as_str()).collect()
}

#[test]
fn test_all_filter_is_identity() {
    let fixtures = StaticFixtures::new();
    let all = filter_officers(fixtures.officers(), StatusFilter::All);
    let expected: Vec<&OfficerRecord> = fixtures.officers().iter().collect();
    assert_eq!(all, expected);
}

#[test]
fn test_offline_filter_yields_sunil_only() {
    let fixtures = StaticFixtures::new();
    assert_eq!(
        names(filter_officers(fixtures.officers(), StatusFilter::Offline)),
        ["Sunil Yadav"]
    );
}

#[test]
fn test_each_filter_matches_status_in_order() {
    let fixtures = StaticFixtures::new();
    for &filter in ALL_STATUS_FILTERS {
        let visible = filter_officers(fixtures.officers(), filter);
        assert!(visible.iter().all(|o| filter.matches(o.status)));
        let positions: Vec<usize> = visible
            .iter()
            .map(|v| fixtures.officers().iter().position(|o| o.id == v.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{filter:?} reordered");
    }
}

#[test]
fn test_filter_keys_round_trip_from_dropdown() {
    for &filter in ALL_STATUS_FILTERS {
        assert_eq!(StatusFilter::from_key(filter.as_str()).unwrap(), filter);
    }
    let err = StatusFilter::from_key("suspended").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[test]
fn test_counts_cover_unfiltered_roster() {
    let fixtures = StaticFixtures::new();
    let counts = StatusCounts::of(fixtures.officers());
    assert_eq!((counts.active, counts.issue, counts.offline), (3, 1, 1));
    assert_eq!(counts.total(), fixtures.officers().len());
}

#[test]
fn test_selection_survives_filter_change() {
    let fixtures = StaticFixtures::new();
    let mut state = MonitoringState::new();
    state.select_officer("3");
    state.select_officer("3");
    assert!(state.is_selected("3"));

    state.set_filter(StatusFilter::Active);
    assert!(state.is_selected("3"));
    assert!(state.visible(fixtures.officers()).iter().all(|o| o.id != "3"));
}

#[test]
fn test_marker_layout_wraps_every_three_rows() {
    let tops: Vec<usize> = (0..5).map(|i| marker_position(i).top_pct).collect();
    let lefts: Vec<usize> = (0..5).map(|i| marker_position(i).left_pct).collect();
    assert_eq!(tops, [30, 50, 70, 30, 50]);
    assert_eq!(lefts, [20, 35, 50, 65, 80]);
}
