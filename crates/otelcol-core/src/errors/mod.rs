use std::error::Error;
use std::path::PathBuf;

use crate::args::ArgumentError;

/// Base trait for all launcher errors
pub trait OtelcolError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether the failure was caused by how the launcher was invoked
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Failures while resolving runtime parameters.
///
/// Every variant is fatal: the collector service is never started with a
/// partially resolved configuration.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Expected a number in {name} but got '{value}'")]
    InvalidNumericValue { name: &'static str, value: String },

    #[error("Expected a number of at least {minimum} for {name} but got '{value}'")]
    BelowThreshold {
        name: &'static str,
        minimum: u64,
        value: String,
    },

    #[error("Both {first} and {second} were specified, but only one is allowed")]
    ConflictingSources {
        first: &'static str,
        second: &'static str,
    },

    #[error(
        "Unable to find the default configuration file, ensure {env_var} environment variable is set properly"
    )]
    MissingConfig { env_var: &'static str },

    #[error(
        "Unable to find the configuration file ({}), ensure {env_var} environment variable is set properly",
        path.display()
    )]
    FileNotFound {
        path: PathBuf,
        env_var: &'static str,
    },

    #[error(
        "Missing required environment variable {name} with default config path {}",
        path.display()
    )]
    MissingRequiredVar { name: &'static str, path: PathBuf },

    #[error(
        "Memory limit ({limit_mib}) is less than 2x ballast ({ballast_mib}). Increase memory limit or decrease ballast size."
    )]
    BallastExceedsLimit { limit_mib: u64, ballast_mib: u64 },

    #[error(transparent)]
    Argument(#[from] ArgumentError),
}

impl OtelcolError for ResolveError {
    fn error_code(&self) -> &'static str {
        match self {
            ResolveError::InvalidNumericValue { .. } => "RESOLVE_INVALID_NUMERIC_VALUE",
            ResolveError::BelowThreshold { .. } => "RESOLVE_BELOW_THRESHOLD",
            ResolveError::ConflictingSources { .. } => "RESOLVE_CONFLICTING_SOURCES",
            ResolveError::MissingConfig { .. } => "RESOLVE_MISSING_CONFIG",
            ResolveError::FileNotFound { .. } => "RESOLVE_FILE_NOT_FOUND",
            ResolveError::MissingRequiredVar { .. } => "RESOLVE_MISSING_REQUIRED_VAR",
            ResolveError::BallastExceedsLimit { .. } => "RESOLVE_BALLAST_EXCEEDS_LIMIT",
            ResolveError::Argument(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
