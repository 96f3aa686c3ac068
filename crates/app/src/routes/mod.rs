pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod officer_app;

use dioxus::prelude::*;
use station::ViewState;

use crate::auth::use_auth;
use dashboard::DashboardShell;
use login::Login;
use not_found::NotFound;
use officer_app::OfficerApp;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Picks the login page or a role's view set from the session state.
#[component]
fn Home() -> Element {
    let auth = use_auth();

    match auth.view() {
        ViewState::Unauthenticated => rsx! { Login {} },
        ViewState::StationMaster(session) => rsx! { DashboardShell { session } },
        ViewState::FieldOfficer(session) => rsx! { OfficerApp { session } },
    }
}
