use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::Session;
use station::{Authenticator, SessionStore, ViewState};

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub store: Signal<SessionStore>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            store: Signal::new(SessionStore::new()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.read().is_authenticated()
    }

    pub fn view(&self) -> ViewState {
        self.store.read().view().clone()
    }

    pub fn session(&self) -> Option<Session> {
        self.store.read().session().cloned()
    }

    pub fn is_login_in_flight(&self) -> bool {
        self.store.read().is_login_in_flight()
    }

    /// Friendly text for the last failed sign-in, if any.
    pub fn error_message(&self) -> Option<String> {
        self.store.read().last_error().map(|e| e.friendly_message())
    }

    pub fn logout(&mut self) {
        self.store.write().logout();
    }
}

/// The authenticator the login form submits to.
#[derive(Clone)]
pub struct AuthService {
    authenticator: Rc<dyn Authenticator>,
}

impl AuthService {
    pub fn new(authenticator: Rc<dyn Authenticator>) -> Self {
        Self { authenticator }
    }

    /// Run one sign-in against the session store.
    ///
    /// A submission while another is in flight, or while already signed
    /// in, is dropped.
    pub async fn sign_in(&self, mut auth: AuthState, email: String, password: String) {
        if let Err(err) = auth.store.write().begin_login() {
            tracing::debug!(%err, "sign-in ignored");
            return;
        }

        match self.authenticator.login(&email, &password).await {
            Ok(session) => auth.store.write().complete_login(session),
            Err(err) => auth.store.write().fail_login(err),
        }
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook to access the authenticator.
pub fn use_auth_service() -> AuthService {
    use_context::<AuthService>()
}
