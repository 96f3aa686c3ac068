//! Sign-in for the demo dashboard.
//!
//! There is no credential store. [`DemoAuthenticator`] waits a fixed
//! latency and then derives the role from the email address. This is a
//! demo convenience and must not be treated as an authentication
//! mechanism.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use shared_types::{AppError, AuthConfig, Session};

/// Substrings that mark an email as belonging to the station master.
const STATION_MASTER_KEYWORDS: &[&str] = &["station", "master"];

const STATION_MASTER_NAME: &str = "Station Master";

/// Produces a [`Session`] from submitted credentials.
///
/// A real implementation would return [`AppError::unauthorized`] on
/// rejected credentials.
#[async_trait(?Send)]
pub trait Authenticator {
    async fn login(&self, email: &str, password: &str) -> Result<Session, AppError>;
}

/// Stub authenticator: fixed latency, role by naming heuristic, never fails.
#[derive(Debug, Clone)]
pub struct DemoAuthenticator {
    latency: Duration,
}

impl DemoAuthenticator {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(Duration::from_millis(config.simulated_latency_ms))
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for DemoAuthenticator {
    fn default() -> Self {
        Self::from_config(&AuthConfig::default())
    }
}

#[async_trait(?Send)]
impl Authenticator for DemoAuthenticator {
    async fn login(&self, email: &str, _password: &str) -> Result<Session, AppError> {
        tracing::debug!(latency_ms = self.latency.as_millis() as u64, "simulating sign-in");
        crate::delay::sleep(self.latency).await;

        let id = session_id_at(chrono::Utc::now().timestamp_millis());
        let session = derive_session(email, id, &mut rand::thread_rng());
        tracing::info!(
            role = session.role().as_str(),
            user_id = session.id(),
            "signed in"
        );
        Ok(session)
    }
}

/// Case-insensitive check for "station" or "master" anywhere in the email.
pub fn is_station_master_email(email: &str) -> bool {
    let lowered = email.to_lowercase();
    STATION_MASTER_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

/// Everything before the first `@`, or the whole string when there is none.
pub fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// `BADGE-` followed by a uniform 4-digit number in 1000..=9999.
pub fn synthesize_badge<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("BADGE-{}", rng.gen_range(1000..=9999))
}

pub fn session_id_at(unix_millis: i64) -> String {
    format!("user_{unix_millis}")
}

/// Apply the role heuristic to `email` and build the resulting session.
pub fn derive_session<R: Rng + ?Sized>(email: &str, id: String, rng: &mut R) -> Session {
    if is_station_master_email(email) {
        Session::station_master(id, email, STATION_MASTER_NAME)
    } else {
        let display_name = format!("Officer {}", local_part(email));
        Session::field_officer(id, email, display_name, synthesize_badge(rng))
    }
}
