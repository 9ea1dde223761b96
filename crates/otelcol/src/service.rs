//! Collector service started as a child process.

use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, info};

use otelcol_core::components::ComponentKind;
use otelcol_core::config::defaults::{CONFIG_FLAG, CONFIG_YAML_ENV_VAR};
use otelcol_core::{ConfigProvider, ServiceError, ServiceRuntime, ServiceSettings};

const BUILD_COMMAND_ENV_VAR: &str = "OTELCOL_BUILD_COMMAND";
const BUILD_VERSION_ENV_VAR: &str = "OTELCOL_BUILD_VERSION";

/// Runs the collector service executable with the resolved arguments and
/// environment, inheriting stdio.
pub struct ProcessRuntime {
    service_bin: String,
}

impl ProcessRuntime {
    pub fn new(service_bin: &str) -> Self {
        Self {
            service_bin: service_bin.to_string(),
        }
    }

    fn locate(&self) -> Result<PathBuf, ServiceError> {
        which::which(&self.service_bin).map_err(|e| ServiceError::ConstructFailed {
            message: format!("collector service '{}' not found: {}", self.service_bin, e),
        })
    }
}

/// Argument list for the child: resolved arguments, plus a pointer at the
/// inline payload when the configuration came from the environment.
///
/// An empty config flag (`--config=` or `--config ""`) is replaced by that
/// pointer so the service sees a single config flag.
fn service_args(settings: &ServiceSettings) -> Vec<String> {
    let resolved = settings.args.as_slice();
    if !matches!(settings.config_provider, ConfigProvider::InMemory(_)) {
        return resolved.to_vec();
    }

    let empty_flag = format!("{}=", CONFIG_FLAG);
    let mut args = Vec::with_capacity(resolved.len() + 1);
    let mut iter = resolved.iter().peekable();
    while let Some(arg) = iter.next() {
        if *arg == empty_flag {
            continue;
        }
        if arg == CONFIG_FLAG && iter.peek().is_some_and(|next| next.is_empty()) {
            iter.next();
            continue;
        }
        args.push(arg.clone());
    }
    args.push(format!("{}=env:{}", CONFIG_FLAG, CONFIG_YAML_ENV_VAR));
    args
}

fn component_env_var(kind: ComponentKind) -> String {
    format!("OTELCOL_{}S", kind.as_str().to_uppercase())
}

/// Variables layered over the inherited environment: every resolved entry,
/// the build identity, and one comma-separated list per component kind.
fn service_env(settings: &ServiceSettings) -> Vec<(String, String)> {
    let mut vars: Vec<(String, String)> = settings
        .env
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    vars.push((
        BUILD_COMMAND_ENV_VAR.to_string(),
        settings.build_info.command.clone(),
    ));
    vars.push((
        BUILD_VERSION_ENV_VAR.to_string(),
        settings.build_info.version.clone(),
    ));
    for kind in ComponentKind::all() {
        vars.push((
            component_env_var(*kind),
            settings.factories.names(*kind).join(","),
        ));
    }
    vars
}

impl ServiceRuntime for ProcessRuntime {
    fn run(&self, settings: ServiceSettings) -> Result<i32, ServiceError> {
        let program = self.locate()?;
        let args = service_args(&settings);

        debug!(
            event = "cli.service.spawn_started",
            program = %program.display(),
            version = %settings.build_info.version,
            args = ?args,
        );

        // The child inherits the launcher's environment, including entries
        // that are not valid UTF-8, with the resolved values on top.
        let status = Command::new(&program)
            .args(&args)
            .envs(service_env(&settings))
            .status()
            .map_err(|e| ServiceError::ConstructFailed {
                message: format!("failed to start '{}': {}", program.display(), e),
            })?;

        info!(event = "cli.service.exited", status = %status);

        status.code().ok_or_else(|| ServiceError::RunFailed {
            message: format!("collector service terminated by signal ({})", status),
        })
    }
}
