//! Error types for stormer.
//!
//! All fallible operations return `Result<T, SimError>` instead of
//! panicking. Soft numerical conditions (degenerate oscillation amplitude,
//! zero gravitational separation) are handled locally by the components
//! that encounter them and never surface here.

use thiserror::Error;

/// Result type alias for stormer operations.
pub type SimResult<T> = Result<T, SimError>;

/// Unified error type for all stormer operations.
#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid time-grid parameter: `dt` or `t_max` non-positive or
    /// non-finite. Raised before any trajectory storage is allocated.
    #[error("invalid step parameter: {name} = {value} (must be positive and finite)")]
    InvalidStep {
        /// Name of the offending parameter.
        name: &'static str,
        /// Value that failed validation.
        value: f64,
    },

    /// Invalid configuration parameter.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid-step error for a named parameter.
    #[must_use]
    pub const fn invalid_step(name: &'static str, value: f64) -> Self {
        Self::InvalidStep { name, value }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}
