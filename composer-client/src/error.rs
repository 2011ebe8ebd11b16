//! Client error types.

use composer_model::ServiceErrorProps;
use thiserror::Error;

/// Result type for remote composer operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur when talking to the composer service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-success response whose body parses as the service error payload.
    /// The payload is a failure even when its `errors` list is empty.
    #[error("service error: {0}")]
    Service(ServiceErrorProps),

    /// Non-success response with no parseable error payload.
    #[error("API request failed: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Returns true if this error means the resource is absent rather than
    /// the call being broken.
    pub fn is_not_found(&self) -> bool {
        match self {
            ClientError::NotFound(_) => true,
            ClientError::Service(props) => props.status == 404,
            _ => false,
        }
    }

    /// Returns the HTTP status behind this error, when one is known.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Service(props) => Some(props.status),
            ClientError::NotFound(_) => Some(404),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
