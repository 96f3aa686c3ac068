use pretty_assertions::assert_eq;
use station::{SessionStore, ViewState};

use crate::common;

#[tokio::test]
async fn test_logout_from_station_view() {
    let mut store = common::signed_in_store("station.master@pd.gov").await;
    store.logout();
    assert_eq!(store.view(), &ViewState::Unauthenticated);
    assert!(store.session().is_none());
}

#[tokio::test]
async fn test_logout_from_field_officer_view() {
    let mut store = common::signed_in_store("john.doe@pd.gov").await;
    store.logout();
    assert_eq!(store.view(), &ViewState::Unauthenticated);
}

#[test]
fn test_logout_when_signed_out_is_harmless() {
    let mut store = SessionStore::new();
    store.logout();
    assert_eq!(store.view(), &ViewState::Unauthenticated);
    assert!(!store.is_login_in_flight());
}

#[tokio::test]
async fn test_sign_in_again_after_logout() {
    let mut store = common::signed_in_store("john.doe@pd.gov").await;
    store.logout();

    common::sign_in(&mut store, &common::instant_authenticator(), "station@pd.gov", "x")
        .await
        .unwrap();
    assert!(matches!(store.view(), ViewState::StationMaster(_)));
}
