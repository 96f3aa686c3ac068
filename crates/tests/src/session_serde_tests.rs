use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{Session, UserRole};

use crate::common;

#[tokio::test]
async fn test_signed_in_session_round_trips_through_json() {
    let store = common::signed_in_store("john.doe@pd.gov").await;
    let session = store.session().expect("signed in").clone();

    let value = serde_json::to_value(&session).unwrap();
    assert_eq!(value["role"], "field_officer");

    let back: Session = serde_json::from_value(value).unwrap();
    assert_eq!(back, session);
}

#[test]
fn test_station_master_with_badge_is_rejected() {
    let value = json!({
        "id": "user_1",
        "email": "station.master@pd.gov",
        "display_name": "Station Master",
        "role": "station_master",
        "badge": "BADGE-1234"
    });
    assert!(serde_json::from_value::<Session>(value).is_err());
}

#[test]
fn test_field_officer_without_badge_is_rejected() {
    let value = json!({
        "id": "user_2",
        "email": "john.doe@pd.gov",
        "display_name": "Officer john.doe",
        "role": "field_officer"
    });
    assert!(serde_json::from_value::<Session>(value).is_err());
}

#[test]
fn test_station_master_without_badge_is_accepted() {
    let value = json!({
        "id": "user_1",
        "email": "station.master@pd.gov",
        "display_name": "Station Master",
        "role": "station_master"
    });
    let session: Session = serde_json::from_value(value).unwrap();
    assert_eq!(session.role(), UserRole::StationMaster);
    assert_eq!(session.initial(), "S");
}
