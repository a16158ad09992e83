use acct_client::ClientError;
use acct_config::ConfigError;
use acct_core::CoreError;

use crate::session_store::SessionStoreError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Client {
        #[source]
        source: ClientError,
    },

    #[error("Session store error: {source} {location}")]
    SessionStore {
        #[source]
        source: SessionStoreError,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to read image {path}: {source} {location}")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to serialize output: {source} {location}")]
    Output {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn image_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::ImageRead {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message printed to stderr for the user
    pub fn user_message(&self) -> String {
        match self {
            Self::Client { source } => source.user_message(),
            Self::SessionStore { source, .. } => source.recovery_hint().to_string(),
            Self::ImageRead { path, source, .. } => {
                format!("Could not read {}: {source}", path.display())
            }
            Self::Config { source, .. } => source.to_string(),
            Self::Logger { message, .. } => message.clone(),
            Self::Output { .. } => "Could not format the server response.".to_string(),
        }
    }
}

impl From<ClientError> for CliError {
    fn from(source: ClientError) -> Self {
        Self::Client { source }
    }
}

impl From<CoreError> for CliError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Client {
            source: ClientError::from(source),
        }
    }
}

impl From<ConfigError> for CliError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<SessionStoreError> for CliError {
    #[track_caller]
    fn from(source: SessionStoreError) -> Self {
        Self::SessionStore {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Output {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
