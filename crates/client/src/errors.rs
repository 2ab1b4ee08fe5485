//! Client Errors

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Default, Deserialize)]
struct WireError {
    #[serde(default)]
    error: Option<String>,

    #[serde(default)]
    errors: Option<Vec<String>>,
}

/// Failure of a catalog API call.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server rejected one or more product fields.
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// The server rejected the listing parameters.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// No product exists with the requested id.
    #[error("not found: {0}")]
    NotFound(String),

    /// The server failed while handling the request.
    #[error("server error: {0}")]
    Server(String),

    /// A status the API contract does not define.
    #[error("unexpected status {status}")]
    UnexpectedStatus { status: StatusCode },

    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    pub(crate) fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let wire: WireError = serde_json::from_slice(body).unwrap_or_default();

        match status {
            StatusCode::BAD_REQUEST => match wire.errors {
                Some(errors) => Self::Validation(errors),
                None => Self::BadRequest(wire.error.unwrap_or_default()),
            },
            StatusCode::NOT_FOUND => {
                Self::NotFound(wire.error.unwrap_or_else(|| "not found".to_string()))
            }
            StatusCode::INTERNAL_SERVER_ERROR => Self::Server(wire.error.unwrap_or_default()),
            other => Self::UnexpectedStatus { status: other },
        }
    }
}
