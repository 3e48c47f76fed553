use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response.
    #[error("Request failed: {source} {location}")]
    Http {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    /// The server answered with a non-success status.
    #[error("{code} ({status}): {message} {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Response is not valid JSON: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Build an `Api` error from a `{"error": {"code", "message"}}` body.
    /// Missing parts fall back to `UNKNOWN` and the status text.
    #[track_caller]
    pub fn from_error_body(status: StatusCode, body: &Value) -> Self {
        let field = |name: &str| {
            body.pointer(&format!("/error/{}", name))
                .and_then(Value::as_str)
                .map(String::from)
        };

        ClientError::Api {
            status: status.as_u16(),
            code: field("code").unwrap_or_else(|| "UNKNOWN".to_string()),
            message: field("message").unwrap_or_else(|| status.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Machine-readable code of an API error
    pub fn code(&self) -> Option<&str> {
        match self {
            ClientError::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        ClientError::Http {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        ClientError::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
