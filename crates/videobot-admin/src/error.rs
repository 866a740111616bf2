//! Error types for the admin panel API client

use thiserror::Error;

/// Everything that can go wrong between a click and a rendered result.
///
/// None of these are fatal: the controller logs them and turns them into
/// an error toast.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiClientError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API Error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error("invalid input: {0}")]
    Invalid(String),
}

impl ApiClientError {
    /// Message a user should see, if the server (or validation) supplied one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected(message) | Self::Invalid(message) if !message.is_empty() => {
                Some(message)
            }
            _ => None,
        }
    }
}

impl From<gloo_net::Error> for ApiClientError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiClientError>;
