use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid auth settings: {message} {location}")]
    Auth {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid server settings: {message} {location}")]
    Server {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid database settings: {message} {location}")]
    Database {
        message: String,
        location: ErrorLocation,
    },

    /// The environment the configuration is resolved against is unusable.
    #[error("Configuration unavailable: {message} {location}")]
    Environment {
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Environment {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = std::result::Result<T, ConfigError>;
