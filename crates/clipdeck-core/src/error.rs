//! Error types for Clipdeck Core

use thiserror::Error;

/// Result type alias for player operations
pub type Result<T> = std::result::Result<T, Error>;

/// Player error types
#[derive(Error, Debug)]
pub enum Error {
    // Catalog errors
    #[error("Catalog contains no videos")]
    EmptyCatalog,

    #[error("Duplicate video id in catalog: {id}")]
    DuplicateId { id: u32 },

    #[error("Invalid locator '{locator}': {reason}")]
    InvalidLocator { locator: String, reason: String },

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Control errors
    #[error("Index {index} out of range for playlist of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unsupported playback speed: {0}")]
    InvalidSpeed(String),

    #[error("Malformed drag payload: {0:?}")]
    MalformedPayload(String),

    // Platform errors
    #[error("Surface operation '{operation}' rejected: {reason}")]
    Surface { operation: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a surface rejection error
    pub fn surface(operation: &'static str, reason: impl Into<String>) -> Self {
        Error::Surface {
            operation,
            reason: reason.into(),
        }
    }

    /// Returns true if further user interaction can recover from this error.
    ///
    /// Catalog and configuration problems happen before a player exists, so
    /// they are the only ones that are not.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::IndexOutOfRange { .. }
                | Error::InvalidSpeed(_)
                | Error::MalformedPayload(_)
                | Error::Surface { .. }
        )
    }

    /// Returns the error code for diagnostics
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::EmptyCatalog => "EMPTY_CATALOG",
            Error::DuplicateId { .. } => "DUPLICATE_ID",
            Error::InvalidLocator { .. } => "INVALID_LOCATOR",
            Error::Parse(_) => "PARSE",
            Error::InvalidConfig(_) => "INVALID_CONFIG",
            Error::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            Error::InvalidSpeed(_) => "INVALID_SPEED",
            Error::MalformedPayload(_) => "MALFORMED_PAYLOAD",
            Error::Surface { .. } => "SURFACE_REJECTED",
            Error::Io(_) => "IO",
        }
    }
}
