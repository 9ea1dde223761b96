//! Values passed from the launcher to the collector service.

use crate::args::ArgumentVector;
use crate::components::ComponentRegistry;
use crate::config::ResolvedConfigSource;
use crate::config::defaults::{CONFIG_ENV_VAR, CONFIG_YAML_ENV_VAR};
use crate::env::EnvMap;
use crate::memory::MemoryPlan;

/// Identity the collector service reports about itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub command: String,
    pub version: String,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            command: "otelcol".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// How the collector service obtains its configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigProvider {
    /// Read the file named by the `--config` flag.
    Default,
    /// Parse this payload directly.
    InMemory(String),
}

impl ConfigProvider {
    /// The inline payload is used only when no config path is set.
    ///
    /// After a `--config` flag has been resolved, `SPLUNK_CONFIG` carries
    /// the flag's path, so the flag always wins over inline YAML.
    pub fn select(env: &EnvMap) -> Self {
        match env.get(CONFIG_YAML_ENV_VAR) {
            Some(yaml) if !env.is_set(CONFIG_ENV_VAR) => ConfigProvider::InMemory(yaml.to_string()),
            _ => ConfigProvider::Default,
        }
    }
}

/// Runtime parameters after every resolver succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRuntimeConfig {
    pub args: ArgumentVector,
    pub env: EnvMap,
    pub source: ResolvedConfigSource,
    pub memory: MemoryPlan,
}

/// Outcome of [`resolve_runtime_config`](crate::runtime::handler::resolve_runtime_config).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// `-h`/`--help` was given; arguments and environment are untouched.
    HelpRequested { args: ArgumentVector, env: EnvMap },
    Resolved(ResolvedRuntimeConfig),
}

impl Resolution {
    pub fn into_parts(self) -> (ArgumentVector, EnvMap) {
        match self {
            Resolution::HelpRequested { args, env } => (args, env),
            Resolution::Resolved(resolved) => (resolved.args, resolved.env),
        }
    }
}

/// Everything the collector service needs to start.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub build_info: BuildInfo,
    pub factories: ComponentRegistry,
    pub config_provider: ConfigProvider,
    /// Arguments for the service, including any flags appended during resolution
    pub args: ArgumentVector,
    /// Environment for the service, including resolved values
    pub env: EnvMap,
}
