use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, UserRole};
use station::{Authenticator, ViewState};

use crate::common;

#[tokio::test]
async fn test_station_master_email_opens_station_view() {
    let store = common::signed_in_store("station.master@pd.gov").await;

    let ViewState::StationMaster(session) = store.view() else {
        panic!("expected station master view, got {:?}", store.view());
    };
    assert_eq!(session.role(), UserRole::StationMaster);
    assert_eq!(session.display_name(), "Station Master");
    assert_eq!(session.email(), "station.master@pd.gov");
    assert_eq!(session.badge(), None);
    assert!(!store.is_login_in_flight());
}

#[tokio::test]
async fn test_role_keywords_are_case_insensitive() {
    for email in ["MASTER@pd.gov", "Desk.Station@pd.gov", "webmaster@example.com"] {
        let store = common::signed_in_store(email).await;
        assert!(
            matches!(store.view(), ViewState::StationMaster(_)),
            "{email} should open the station view"
        );
    }
}

#[tokio::test]
async fn test_other_email_opens_field_officer_view() {
    let store = common::signed_in_store("john.doe@pd.gov").await;

    let ViewState::FieldOfficer(session) = store.view() else {
        panic!("expected field officer view, got {:?}", store.view());
    };
    assert_eq!(session.role(), UserRole::FieldOfficer);
    assert_eq!(session.display_name(), "Officer john.doe");
    let badge = session.badge().expect("field officers carry a badge");
    assert!(common::is_valid_badge(badge), "bad badge {badge}");
}

#[tokio::test]
async fn test_email_without_at_sign_uses_whole_string() {
    let store = common::signed_in_store("patrol7").await;
    let session = store.session().expect("signed in");
    assert_eq!(session.display_name(), "Officer patrol7");
}

#[tokio::test]
async fn test_session_id_is_timestamp_based() {
    let store = common::signed_in_store("john.doe@pd.gov").await;
    let id = store.session().expect("signed in").id();
    let millis = id.strip_prefix("user_").expect("user_ prefix");
    assert!(millis.parse::<i64>().is_ok(), "non-numeric id {id}");
}

#[tokio::test]
async fn test_password_is_ignored() {
    let authenticator = common::instant_authenticator();
    let with = authenticator.login("john.doe@pd.gov", "hunter2").await.unwrap();
    let without = authenticator.login("john.doe@pd.gov", "").await.unwrap();
    assert_eq!(with.role(), without.role());
    assert_eq!(with.display_name(), without.display_name());
}

#[tokio::test]
async fn test_second_submission_while_in_flight_is_rejected() {
    let mut store = station::SessionStore::new();
    store.begin_login().unwrap();

    let err = common::sign_in(&mut store, &common::instant_authenticator(), "a@b.c", "x")
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert!(store.is_login_in_flight());
    assert_eq!(store.view(), &ViewState::Unauthenticated);
}

#[tokio::test]
async fn test_login_while_signed_in_keeps_session() {
    let mut store = common::signed_in_store("station.master@pd.gov").await;
    let before = store.session().cloned();

    let result = common::sign_in(&mut store, &common::instant_authenticator(), "john.doe@pd.gov", "x").await;

    assert!(result.is_err());
    assert_eq!(store.session().cloned(), before);
}

#[tokio::test]
async fn test_rejected_credentials_surface_error() {
    let mut store = station::SessionStore::new();
    let authenticator = common::RejectingAuthenticator::default();

    common::sign_in(&mut store, &authenticator, "john.doe@pd.gov", "wrong")
        .await
        .unwrap();

    assert_eq!(authenticator.attempts.get(), 1);
    assert!(!store.is_authenticated());
    assert!(!store.is_login_in_flight());
    let err = store.last_error().expect("failure recorded");
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.friendly_message(), "Invalid email or password");
}

#[tokio::test]
async fn test_retry_after_rejection_clears_error() {
    let mut store = station::SessionStore::new();
    common::sign_in(&mut store, &common::RejectingAuthenticator::default(), "x@y.z", "bad")
        .await
        .unwrap();
    assert!(store.last_error().is_some());

    common::sign_in(&mut store, &common::instant_authenticator(), "x@y.z", "good")
        .await
        .unwrap();
    assert!(store.last_error().is_none());
    assert!(store.is_authenticated());
}
