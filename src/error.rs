//! Error types for the ConfluxScan client.

use thiserror::Error;

/// Input rejected locally, before any request is issued.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid implementation address: {0}")]
    InvalidImplementationAddress(String),

    /// `context` reads as the tail of the message, e.g. "checking verification status".
    #[error("GUID is required for {0}")]
    MissingGuid(&'static str),

    #[error("Invalid {name}: '{value}'")]
    InvalidParameter { name: &'static str, value: String },

    #[error("minTimestamp ({min}) must not be greater than maxTimestamp ({max})")]
    InvalidTimestampRange { min: i64, max: i64 },

    /// Positional lists that the explorer pairs index by index.
    #[error("{contracts} contracts cannot pair with {inputs} inputs")]
    MismatchedLengths { contracts: usize, inputs: usize },
}

/// A raw amount that could not be scaled into display units.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid integer amount: '{0}'")]
    InvalidAmount(String),

    #[error("Negative amount: '{0}'")]
    NegativeAmount(String),

    #[error("Unsupported decimals: {0}")]
    InvalidDecimals(u32),
}

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The transport answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    Transport { status: u16, status_text: String },

    /// The envelope reported failure, or `data` was missing where it is required.
    #[error("API error: {message}")]
    Api { code: Option<i64>, message: String },

    #[cfg(feature = "client")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("No HTTP transport configured")]
    MissingTransport,
}

impl Error {
    pub(crate) fn api(message: impl Into<String>) -> Self {
        Self::Api {
            code: None,
            message: message.into(),
        }
    }

    /// Returns `true` if the error was raised before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// HTTP status carried by a transport failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;
