//! Error types for Grist tool operations

use thiserror::Error;

/// Errors that can occur while translating a tool call into a Grist API call
#[derive(Error, Debug)]
pub enum GristError {
    /// Missing or unusable configuration (API key, config file)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network level failure (DNS, connection refused, timeout)
    ///
    /// `message` spells out the whole cause chain; the reqwest error is kept
    /// as the source when there is one.
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Grist answered with a non-2xx status
    #[error("Grist API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Caller-supplied arguments are malformed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Response JSON does not have the expected entity shape
    #[error("Invalid response from Grist: {0}")]
    InvalidResponse(String),

    /// Response body is not JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GristError {
    /// Create an API error
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a transport error without an underlying reqwest error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// HTTP status carried by an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the error was caused by the caller's arguments
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<reqwest::Error> for GristError {
    fn from(err: reqwest::Error) -> Self {
        let mut message = if err.is_timeout() {
            format!("request timed out: {}", err)
        } else {
            err.to_string()
        };

        let mut cause = std::error::Error::source(&err);
        while let Some(inner) = cause {
            message.push_str(": ");
            message.push_str(&inner.to_string());
            cause = std::error::Error::source(inner);
        }

        Self::Transport {
            message,
            source: Some(err),
        }
    }
}

pub type GristResult<T> = Result<T, GristError>;
