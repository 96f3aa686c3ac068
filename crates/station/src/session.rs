use shared_types::{AppError, Session};

use crate::router::ViewState;

/// The single piece of cross-screen state: the view state plus the
/// in-flight flag that gates the login form.
///
/// Created empty, filled by a completed sign-in, cleared by logout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionStore {
    view: ViewState,
    login_in_flight: bool,
    last_error: Option<AppError>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn session(&self) -> Option<&Session> {
        self.view.session()
    }

    pub fn is_authenticated(&self) -> bool {
        self.view.is_authenticated()
    }

    pub fn is_login_in_flight(&self) -> bool {
        self.login_in_flight
    }

    pub fn last_error(&self) -> Option<&AppError> {
        self.last_error.as_ref()
    }

    /// Mark a sign-in as started.
    ///
    /// Best-effort re-entrancy guard: a second submission while one is in
    /// flight is rejected, as is a submission with a session already held.
    pub fn begin_login(&mut self) -> Result<(), AppError> {
        if self.login_in_flight {
            return Err(AppError::bad_request("Sign-in already in progress"));
        }
        if self.view.is_authenticated() {
            return Err(AppError::bad_request("Already signed in"));
        }
        self.login_in_flight = true;
        self.last_error = None;
        Ok(())
    }

    pub fn complete_login(&mut self, session: Session) {
        self.login_in_flight = false;
        self.view = std::mem::take(&mut self.view).login(session);
    }

    pub fn fail_login(&mut self, error: AppError) {
        tracing::warn!(error = %error, "sign-in failed");
        self.login_in_flight = false;
        self.last_error = Some(error);
    }

    /// Clear the session unconditionally.
    pub fn logout(&mut self) {
        self.view = std::mem::take(&mut self.view).logout();
        self.last_error = None;
    }
}
