use crate::components::RegistryError;
use crate::errors::{OtelcolError, ResolveError};

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("failed to construct the application: {message}")]
    ConstructFailed { message: String },

    #[error("application run finished with error: {message}")]
    RunFailed { message: String },
}

impl OtelcolError for ServiceError {
    fn error_code(&self) -> &'static str {
        match self {
            ServiceError::ConstructFailed { .. } => "SERVICE_CONSTRUCT_FAILED",
            ServiceError::RunFailed { .. } => "SERVICE_RUN_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ServiceError::ConstructFailed { .. })
    }
}

/// Any failure between process start and the collector service exiting.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl OtelcolError for LaunchError {
    fn error_code(&self) -> &'static str {
        match self {
            LaunchError::Resolve(e) => e.error_code(),
            LaunchError::Registry(e) => e.error_code(),
            LaunchError::Service(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            LaunchError::Resolve(e) => e.is_user_error(),
            LaunchError::Registry(e) => e.is_user_error(),
            LaunchError::Service(e) => e.is_user_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_display() {
        let error = ServiceError::ConstructFailed {
            message: "executable 'otelcol-service' not found".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "failed to construct the application: executable 'otelcol-service' not found"
        );
        assert_eq!(error.error_code(), "SERVICE_CONSTRUCT_FAILED");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_launch_error_is_transparent() {
        let error: LaunchError = ResolveError::MissingConfig {
            env_var: "SPLUNK_CONFIG",
        }
        .into();
        assert!(error.to_string().starts_with("Unable to find the default configuration file"));
        assert_eq!(error.error_code(), "RESOLVE_MISSING_CONFIG");
    }
}
