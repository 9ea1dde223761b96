use tracing::{error, info};

use crate::args::ArgumentVector;
use crate::errors::{OtelcolError, ResolveError};
use crate::runtime::errors::ServiceError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_error(error: &dyn OtelcolError) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_code = error.error_code(),
        user_error = error.is_user_error(),
    );
}

/// Help was requested, so the service gets the arguments unresolved.
pub fn log_help_passthrough(args: &ArgumentVector) {
    info!(
        event = "core.runtime.resolve_skipped",
        reason = "help requested",
        args = ?args.as_slice(),
    );
}

/// A resolver rejected the runtime parameters; the service is not started.
pub fn log_resolution_failed(error: &ResolveError) {
    error!(
        event = "core.runtime.resolve_failed",
        error = %error,
        error_code = error.error_code(),
        user_error = error.is_user_error(),
    );
}

pub fn log_service_failed(error: &ServiceError) {
    error!(
        event = "core.runtime.service_failed",
        error = %error,
        error_code = error.error_code(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_resolution_failure_carries_error_code() {
        let output = capture(|| {
            log_resolution_failed(&ResolveError::MissingConfig {
                env_var: "SPLUNK_CONFIG",
            })
        });

        assert!(output.contains(r#""event":"core.runtime.resolve_failed""#));
        assert!(output.contains(r#""error_code":"RESOLVE_MISSING_CONFIG""#));
        assert!(output.contains(r#""user_error":true"#));
    }

    #[test]
    fn test_service_failure_event() {
        let output = capture(|| {
            log_service_failed(&ServiceError::RunFailed {
                message: "exit by signal".to_string(),
            })
        });

        assert!(output.contains(r#""event":"core.runtime.service_failed""#));
        assert!(output.contains("exit by signal"));
    }

    #[test]
    fn test_help_passthrough_lists_args() {
        let args: ArgumentVector = ["--help"].into_iter().collect();
        let output = capture(|| log_help_passthrough(&args));

        assert!(output.contains(r#""reason":"help requested""#));
        assert!(output.contains("--help"));
    }

    #[test]
    fn test_app_startup_does_not_panic() {
        log_app_startup();
    }
}
