use serde::{Deserialize, Serialize};

use crate::AppError;

/// The two roles a signed-in user can hold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Fixed command view over the whole station.
    StationMaster,
    /// Officer-facing app for a single badge holder.
    FieldOfficer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::StationMaster => "station_master",
            UserRole::FieldOfficer => "field_officer",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::StationMaster => "Station Master",
            UserRole::FieldOfficer => "Field Officer",
        }
    }
}

/// The identity held for the lifetime of a browsing session.
///
/// A station master never carries a badge; a field officer always does.
/// The constructors are the only way to build one, and deserialization
/// goes through the same check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "SessionRecord")]
pub struct Session {
    id: String,
    email: String,
    display_name: String,
    role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    badge: Option<String>,
}

/// Unchecked wire shape of a [`Session`].
#[derive(Deserialize)]
struct SessionRecord {
    id: String,
    email: String,
    display_name: String,
    role: UserRole,
    #[serde(default)]
    badge: Option<String>,
}

impl TryFrom<SessionRecord> for Session {
    type Error = AppError;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        match (record.role, record.badge) {
            (UserRole::StationMaster, None) => Ok(Session::station_master(
                record.id,
                record.email,
                record.display_name,
            )),
            (UserRole::FieldOfficer, Some(badge)) => Ok(Session::field_officer(
                record.id,
                record.email,
                record.display_name,
                badge,
            )),
            (UserRole::StationMaster, Some(_)) => Err(AppError::bad_request(
                "station master session must not carry a badge",
            )),
            (UserRole::FieldOfficer, None) => Err(AppError::bad_request(
                "field officer session requires a badge",
            )),
        }
    }
}

impl Session {
    pub fn station_master(
        id: impl Into<String>,
        email: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            display_name: display_name.into(),
            role: UserRole::StationMaster,
            badge: None,
        }
    }

    pub fn field_officer(
        id: impl Into<String>,
        email: impl Into<String>,
        display_name: impl Into<String>,
        badge: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            display_name: display_name.into(),
            role: UserRole::FieldOfficer,
            badge: Some(badge.into()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn badge(&self) -> Option<&str> {
        self.badge.as_deref()
    }

    /// First character of the display name, uppercased, for avatars.
    pub fn initial(&self) -> String {
        self.display_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}
