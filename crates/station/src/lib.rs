//! UI-free core of the CopMap dashboard: who is signed in, which view set
//! they get, and the local state behind the station-master shell.

pub mod auth;
pub mod config;
pub mod delay;
pub mod fixtures;
pub mod monitoring;
pub mod router;
pub mod session;
pub mod shell;

pub use auth::{Authenticator, DemoAuthenticator};
pub use fixtures::{FixtureRepository, StaticFixtures};
pub use monitoring::MonitoringState;
pub use router::ViewState;
pub use session::SessionStore;
pub use shell::{ActiveView, ShellState};
