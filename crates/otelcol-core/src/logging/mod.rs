use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Target prefix shared by the launcher crates (`otelcol`, `otelcol_core`).
const LAUNCHER_TARGET: &str = "otelcol";

/// Directive applied on top of `RUST_LOG` for the launcher's own events.
pub fn log_directive(quiet: bool) -> Directive {
    let level = if quiet { "error" } else { "info" };
    format!("{}={}", LAUNCHER_TARGET, level)
        .parse()
        .expect("launcher log directive is well formed")
}

/// Initialize logging with optional quiet mode.
///
/// Events are written as JSON lines to stderr so stdout stays with the
/// collector service. When `quiet` is true, only error-level events are
/// emitted.
pub fn init_logging(quiet: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(EnvFilter::from_default_env().add_directive(log_directive(quiet)))
        .init();
}
