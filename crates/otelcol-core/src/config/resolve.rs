//! Configuration source resolution.
//!
//! # Precedence
//!
//! 1. `--config` flag (overrides both environment variables, with a warning)
//! 2. `SPLUNK_CONFIG_YAML` inline payload, when no flag was given
//! 3. `SPLUNK_CONFIG` path
//! 4. Bundled gateway profile, see [`DefaultConfigPaths::fallback_order`]
//!
//! Setting both `SPLUNK_CONFIG` and `SPLUNK_CONFIG_YAML` is rejected even
//! when a flag would override them.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::args::ArgumentVector;
use crate::config::defaults::{
    CONFIG_ENV_VAR, CONFIG_FLAG, CONFIG_YAML_ENV_VAR, REALM_ENV_VAR, TOKEN_ENV_VAR,
};
use crate::config::types::{DefaultConfigPaths, ResolvedConfigSource};
use crate::env::EnvMap;
use crate::errors::ResolveError;
use crate::probe::FileProbe;

/// Program name shown in the credentials usage hint.
const USAGE_PROGRAM: &str = "otelcol";

/// Determine the single configuration source the collector starts with.
///
/// On success `SPLUNK_CONFIG` holds the resolved path (when a file was
/// chosen) and `--config=<path>` is appended to `args` unless the caller
/// already passed `--config`.
///
/// # Errors
///
/// - [`ResolveError::ConflictingSources`] if both config env vars are set
/// - [`ResolveError::MissingConfig`] if nothing was given and no bundled
///   profile exists
/// - [`ResolveError::FileNotFound`] if the given path does not exist
/// - [`ResolveError::MissingRequiredVar`] if a bundled profile is used
///   without realm and access token
pub fn resolve_config_source(
    args: &mut ArgumentVector,
    env: &mut EnvMap,
    probe: &dyn FileProbe,
    defaults: &DefaultConfigPaths,
) -> Result<ResolvedConfigSource, ResolveError> {
    let path_flag = args
        .value_of(CONFIG_FLAG)?
        .filter(|v| !v.is_empty())
        .map(str::to_string);
    let path_var = env.get(CONFIG_ENV_VAR).map(str::to_string);
    let yaml_var = env.get(CONFIG_YAML_ENV_VAR).map(str::to_string);

    if path_var.is_some() && yaml_var.is_some() {
        return Err(ResolveError::ConflictingSources {
            first: CONFIG_ENV_VAR,
            second: CONFIG_YAML_ENV_VAR,
        });
    }

    let path_var = match (path_flag, yaml_var) {
        (None, Some(yaml)) => {
            info!(
                event = "core.config.inline_selected",
                env_var = CONFIG_YAML_ENV_VAR
            );
            return Ok(ResolvedConfigSource::Inline(yaml));
        }
        (Some(flag), yaml_var) => {
            if yaml_var.is_some() {
                warn!(
                    event = "core.config.inline_overridden",
                    env_var = CONFIG_YAML_ENV_VAR,
                    flag_value = %flag,
                );
            }
            if let Some(previous) = path_var.as_deref()
                && previous != flag
            {
                warn!(
                    event = "core.config.path_overridden",
                    env_var = CONFIG_ENV_VAR,
                    env_value = previous,
                    flag_value = %flag,
                );
            }
            env.set(CONFIG_ENV_VAR, flag.as_str());
            Some(flag)
        }
        (None, None) => path_var,
    };

    let path = match path_var {
        Some(path) => {
            let path = PathBuf::from(path);
            if !probe.exists(&path) {
                return Err(ResolveError::FileNotFound {
                    path,
                    env_var: CONFIG_ENV_VAR,
                });
            }
            path
        }
        None => defaults
            .fallback_order()
            .into_iter()
            .find(|candidate| probe.exists(candidate))
            .map(|found| found.to_path_buf())
            .ok_or(ResolveError::MissingConfig {
                env_var: CONFIG_ENV_VAR,
            })?,
    };

    if defaults.is_default(&path) {
        require_credentials(env, &path)?;
    }

    if !args.has_flag(CONFIG_FLAG) {
        args.push_flag(CONFIG_FLAG, path.display());
    }

    info!(
        event = "core.config.source_resolved",
        path = %path.display()
    );

    Ok(ResolvedConfigSource::File(path))
}

/// Bundled profiles send data to the vendor backend and cannot start without
/// a realm and access token.
fn require_credentials(env: &EnvMap, path: &std::path::Path) -> Result<(), ResolveError> {
    for name in [REALM_ENV_VAR, TOKEN_ENV_VAR] {
        if !env.is_set(name) {
            warn!(
                event = "core.config.credentials_missing",
                usage = %format!(
                    "Usage: {}=12345 {}=us0 {}",
                    TOKEN_ENV_VAR, REALM_ENV_VAR, USAGE_PROGRAM
                ),
            );
            return Err(ResolveError::MissingRequiredVar {
                name,
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}
