use acct_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";
const NETWORK_MESSAGE: &str = "Could not reach the server. Check your connection and try again.";
const UNAUTHORIZED_MESSAGE: &str = "Your session has expired. Please log in again.";
const CONFIRMATION_MESSAGE: &str = "The confirmation text does not match.";
const BUSY_MESSAGE: &str = "Please wait for the current request to finish.";
const KEY_EXISTS_MESSAGE: &str = "An API key already exists. Use regenerate to replace it.";
const NO_KEY_MESSAGE: &str = "There is no API key yet. Generate one first.";
const UNAVAILABLE_MESSAGE: &str = "That action is not available right now.";
const INCOMPLETE_RESPONSE_MESSAGE: &str =
    "The server response was incomplete. Please try again.";

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unauthorized: session ended {location}")]
    Unauthorized { location: ErrorLocation },

    #[error("API error (status {status}): {} {location}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("{source} {location}")]
    Core {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn unauthorized() -> Self {
        ClientError::Unauthorized {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error(status: u16, message: Option<String>) -> Self {
        ClientError::Api {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Text for the banner shown to the user.
    ///
    /// Prefers the server's own message when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { .. } => NETWORK_MESSAGE.to_string(),
            Self::Unauthorized { .. } => UNAUTHORIZED_MESSAGE.to_string(),
            Self::Api {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Core {
                source: CoreError::ConfirmationMismatch { .. },
                ..
            } => CONFIRMATION_MESSAGE.to_string(),
            Self::Core {
                source: CoreError::Busy { .. },
                ..
            } => BUSY_MESSAGE.to_string(),
            Self::Core {
                source: CoreError::InvalidTransition { action, state, .. },
                ..
            } => transition_message(action, state).to_string(),
            Self::Core {
                source: CoreError::MissingField { .. },
                ..
            } => INCOMPLETE_RESPONSE_MESSAGE.to_string(),
            Self::Api { message: None, .. } | Self::Json { .. } | Self::Core { .. } => {
                GENERIC_MESSAGE.to_string()
            }
        }
    }
}

fn transition_message(action: &str, state: &str) -> &'static str {
    match (action, state) {
        ("generate a key", _) => KEY_EXISTS_MESSAGE,
        ("request regeneration" | "regenerate the key", "no-key") => NO_KEY_MESSAGE,
        _ => UNAVAILABLE_MESSAGE,
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<CoreError> for ClientError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        ClientError::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
