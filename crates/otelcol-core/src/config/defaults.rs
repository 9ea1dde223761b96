//! Well-known names, paths and default values.
//!
//! Environment variable and flag names here are the public interface of
//! the launcher and are shared with the collector service.

use crate::config::types::{DefaultConfigPaths, LauncherConfig};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "SPLUNK_CONFIG";
pub const CONFIG_YAML_ENV_VAR: &str = "SPLUNK_CONFIG_YAML";
pub const REALM_ENV_VAR: &str = "SPLUNK_REALM";
pub const TOKEN_ENV_VAR: &str = "SPLUNK_ACCESS_TOKEN";

pub const CONFIG_FLAG: &str = "--config";

pub const DOCKER_GATEWAY_CONFIG: &str = "/etc/otel/collector/gateway_config.yaml";
pub const DOCKER_OTLP_CONFIG: &str = "/etc/otel/collector/otlp_config_linux.yaml";
pub const LOCAL_GATEWAY_CONFIG: &str = "cmd/otelcol/config/collector/gateway_config.yaml";
pub const LOCAL_OTLP_CONFIG: &str = "cmd/otelcol/config/collector/otlp_config_linux.yaml";

/// Executable started when `OTELCOL_SERVICE_BIN` is not set.
pub const DEFAULT_SERVICE_BIN: &str = "otelcol-service";

impl Default for DefaultConfigPaths {
    fn default() -> Self {
        Self {
            docker_gateway: PathBuf::from(DOCKER_GATEWAY_CONFIG),
            docker_otlp: PathBuf::from(DOCKER_OTLP_CONFIG),
            local_gateway: PathBuf::from(LOCAL_GATEWAY_CONFIG),
            local_otlp: PathBuf::from(LOCAL_OTLP_CONFIG),
        }
    }
}

impl DefaultConfigPaths {
    /// Candidates tried when no configuration was given, highest priority first.
    ///
    /// Only the gateway profile is a fallback. A local checkout wins over the
    /// container image path when both exist.
    pub fn fallback_order(&self) -> [&Path; 2] {
        [self.local_gateway.as_path(), self.docker_gateway.as_path()]
    }

    /// Whether `path` is one of the bundled profiles, which need credentials.
    pub fn is_default(&self, path: &Path) -> bool {
        [
            &self.docker_gateway,
            &self.docker_otlp,
            &self.local_gateway,
            &self.local_otlp,
        ]
        .iter()
        .any(|candidate| candidate.as_path() == path)
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            service_bin: std::env::var("OTELCOL_SERVICE_BIN")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_SERVICE_BIN.to_string()),
            quiet: parse_quiet(),
        }
    }
}

/// Parse OTELCOL_LOG_QUIET, warning on values that are not a boolean.
fn parse_quiet() -> bool {
    let Ok(val) = std::env::var("OTELCOL_LOG_QUIET") else {
        return false;
    };

    match val.to_lowercase().as_str() {
        "1" | "true" | "yes" => true,
        "" | "0" | "false" | "no" => false,
        _ => {
            eprintln!(
                "Warning: Invalid OTELCOL_LOG_QUIET '{}', using default false",
                val
            );
            false
        }
    }
}
