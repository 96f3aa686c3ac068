use shared_types::{Session, UserRole};

/// Which top-level experience is rendered.
///
/// `Unauthenticated` moves to a role view only through [`ViewState::login`],
/// and every state returns to `Unauthenticated` only through
/// [`ViewState::logout`]. A sign-in in flight is not a state of its own.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Unauthenticated,
    StationMaster(Session),
    FieldOfficer(Session),
}

impl ViewState {
    /// The role view a fresh session lands on.
    pub fn for_session(session: Session) -> Self {
        match session.role() {
            UserRole::StationMaster => ViewState::StationMaster(session),
            UserRole::FieldOfficer => ViewState::FieldOfficer(session),
        }
    }

    /// Apply a successful sign-in. Ignored when someone is already signed in.
    pub fn login(self, session: Session) -> Self {
        match self {
            ViewState::Unauthenticated => ViewState::for_session(session),
            current => {
                tracing::warn!(
                    current = current.name(),
                    "ignoring sign-in while a session is active"
                );
                current
            }
        }
    }

    pub fn logout(self) -> Self {
        if let Some(session) = self.session() {
            tracing::info!(user_id = session.id(), "signed out");
        }
        ViewState::Unauthenticated
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            ViewState::Unauthenticated => None,
            ViewState::StationMaster(session) | ViewState::FieldOfficer(session) => Some(session),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, ViewState::Unauthenticated)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Unauthenticated => "unauthenticated",
            ViewState::StationMaster(_) => "station_master_view",
            ViewState::FieldOfficer(_) => "field_officer_view",
        }
    }
}
