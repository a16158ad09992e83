use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid notification kind: {value} {location}")]
    InvalidNotificationKind {
        value: String,
        location: ErrorLocation,
    },

    #[error("Cannot {action} while {state} {location}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
        location: ErrorLocation,
    },

    #[error("Confirmation phrase does not match {location}")]
    ConfirmationMismatch { location: ErrorLocation },

    #[error("Another request is already in flight {location}")]
    Busy { location: ErrorLocation },

    #[error("Response is missing field '{field}' {location}")]
    MissingField {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Response decode error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Creates InvalidTransition error at caller location.
    #[track_caller]
    pub fn invalid_transition(action: &'static str, state: &'static str) -> Self {
        Self::InvalidTransition {
            action,
            state,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates ConfirmationMismatch error at caller location.
    #[track_caller]
    pub fn confirmation_mismatch() -> Self {
        Self::ConfirmationMismatch {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Busy error at caller location.
    #[track_caller]
    pub fn busy() -> Self {
        Self::Busy {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates MissingField error at caller location.
    #[track_caller]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField {
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
