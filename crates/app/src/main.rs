use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::DashboardConfig;
use station::{DemoAuthenticator, FixtureRepository, StaticFixtures};

mod auth;
mod components;
mod format_helpers;
mod routes;
use auth::{AuthService, AuthState};
use routes::Route;

/// Read-only data and branding shared by every dashboard view.
#[derive(Clone)]
pub struct StationContext {
    pub fixtures: Rc<dyn FixtureRepository>,
    pub dashboard: DashboardConfig,
}

impl StationContext {
    pub fn new(fixtures: Rc<dyn FixtureRepository>, dashboard: DashboardConfig) -> Self {
        Self {
            fixtures,
            dashboard,
        }
    }
}

/// Hook to access the station context.
pub fn use_station() -> StationContext {
    use_context::<StationContext>()
}

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    let config = station::config::load_config();

    if let Err(err) = dioxus::logger::init(station::config::log_level(config)) {
        eprintln!("logger already initialized: {err}");
    }
    tracing::info!(brand = %config.dashboard.brand_name, "starting dashboard");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AuthState::new);

    use_context_provider(|| {
        let config = station::config::load_config();
        AuthService::new(Rc::new(DemoAuthenticator::from_config(&config.auth)))
    });

    use_context_provider(|| {
        StationContext::new(
            Rc::new(StaticFixtures::new()),
            station::config::load_config().dashboard.clone(),
        )
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
