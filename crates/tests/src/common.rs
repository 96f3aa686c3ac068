use std::cell::Cell;
use std::time::Duration;

use async_trait::async_trait;
use shared_types::{AppError, Session};
use station::{Authenticator, DemoAuthenticator, SessionStore};

/// Demo authenticator with the simulated latency removed.
pub fn instant_authenticator() -> DemoAuthenticator {
    DemoAuthenticator::new(Duration::ZERO)
}

/// Authenticator that turns every attempt away and counts them.
#[derive(Default)]
pub struct RejectingAuthenticator {
    pub attempts: Cell<usize>,
}

#[async_trait(?Send)]
impl Authenticator for RejectingAuthenticator {
    async fn login(&self, _email: &str, _password: &str) -> Result<Session, AppError> {
        self.attempts.set(self.attempts.get() + 1);
        Err(AppError::unauthorized("Invalid email or password"))
    }
}

/// Drive one sign-in through the store the way the login form does.
pub async fn sign_in(
    store: &mut SessionStore,
    authenticator: &dyn Authenticator,
    email: &str,
    password: &str,
) -> Result<(), AppError> {
    store.begin_login()?;
    match authenticator.login(email, password).await {
        Ok(session) => store.complete_login(session),
        Err(err) => store.fail_login(err),
    }
    Ok(())
}

/// A store already signed in as `email`.
pub async fn signed_in_store(email: &str) -> SessionStore {
    let mut store = SessionStore::new();
    sign_in(&mut store, &instant_authenticator(), email, "secret")
        .await
        .expect("fresh store accepts a sign-in");
    store
}

/// True for `BADGE-` followed by exactly four digits in 1000..=9999.
pub fn is_valid_badge(badge: &str) -> bool {
    badge
        .strip_prefix("BADGE-")
        .filter(|digits| digits.len() == 4)
        .and_then(|digits| digits.parse::<u32>().ok())
        .is_some_and(|n| (1000..=9999).contains(&n))
}
