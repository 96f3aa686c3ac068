use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// Credentials were rejected. The demo authenticator never produces this.
    Unauthorized,
    /// A view, filter, or record key did not match anything known.
    NotFound,
    BadRequest,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured application error shared by the core and the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::BadRequest, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InternalError, message)
    }

    /// Message suitable for showing in the login card.
    ///
    /// Internal errors are replaced by a generic message.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::InternalError => "Something went wrong. Please try again.".to_string(),
            _ => self.message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_error_has_correct_kind() {
        let err = AppError::not_found("unknown view 'reports'");
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "unknown view 'reports'");
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::unauthorized("bad credentials");
        assert_eq!(format!("{}", err), "Unauthorized: bad credentials");
    }

    #[test]
    fn friendly_message_hides_internal_details() {
        assert_eq!(
            AppError::internal("timer dropped").friendly_message(),
            "Something went wrong. Please try again."
        );
        assert_eq!(
            AppError::bad_request("Sign-in already in progress").friendly_message(),
            "Sign-in already in progress"
        );
    }

    #[test]
    fn kind_serializes_as_variant_name() {
        let json = serde_json::to_string(&AppError::not_found("x")).unwrap();
        assert_eq!(json, r#"{"kind":"NotFound","message":"x"}"#);
    }
}
