//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Rejected request input.
///
/// Every variant is a client error and renders as a sentence suitable for
/// the `statusText` field of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required query parameter was absent.
    #[error("Missing required query parameter {0}.")]
    MissingParameter(&'static str),

    /// The amount could not be parsed as a finite number.
    #[error("Invalid amount {0}.")]
    InvalidAmount(String),

    /// The currency code is not in the rate table.
    #[error("Invalid currency {0}.")]
    InvalidCurrency(String),
}

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration could not be loaded or is inconsistent.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Configuration(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(ValidationError::MissingParameter(_)) => "MISSING_PARAMETER",
            Self::Validation(ValidationError::InvalidAmount(_)) => "INVALID_AMOUNT",
            Self::Validation(ValidationError::InvalidCurrency(_)) => "INVALID_CURRENCY",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true if the caller is at fault.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
