//! Error types for the activities service.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Unknown activity, or a participant who is not enrolled.
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    DuplicateRegistration(String),

    /// Malformed email rejected at the boundary.
    #[error("{0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn activity_not_found() -> Self {
        Self::NotFound("Activity not found".to_string())
    }

    pub fn participant_not_found() -> Self {
        Self::NotFound("Student is not signed up for this activity".to_string())
    }

    pub fn already_signed_up() -> Self {
        Self::DuplicateRegistration("Student already signed up for this activity".to_string())
    }

    /// True for errors caused by the caller's request rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::DuplicateRegistration(_) | Self::Validation(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_caller_facing() {
        assert_eq!(Error::activity_not_found().to_string(), "Activity not found");
        assert_eq!(
            Error::already_signed_up().to_string(),
            "Student already signed up for this activity"
        );
    }

    #[test]
    fn test_client_error_classification() {
        assert!(Error::participant_not_found().is_client_error());
        assert!(Error::Validation("bad".into()).is_client_error());
        assert!(!Error::Config("bad port".into()).is_client_error());
    }
}
