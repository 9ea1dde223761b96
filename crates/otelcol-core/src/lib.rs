//! otelcol-core: Runtime parameter resolution for the otelcol launcher
//!
//! This library decides which configuration source, memory ballast and
//! memory limit the collector service starts with. Process state is taken
//! as explicit input (argument vector, environment snapshot, filesystem
//! probe) so every rule can be exercised without touching the real process.
//!
//! # Main Entry Points
//!
//! - [`runtime`] - Resolve everything and hand off to a [`ServiceRuntime`]
//! - [`config`] - Configuration source resolution
//! - [`memory`] - Ballast and memory limit resolution
//! - [`args`] - Flag lookups over the raw argument vector

pub mod args;
pub mod components;
pub mod config;
pub mod env;
pub mod errors;
pub mod events;
pub mod logging;
pub mod memory;
pub mod probe;
pub mod runtime;

// Re-export commonly used types at crate root for convenience
pub use args::ArgumentVector;
pub use components::ComponentRegistry;
pub use config::{DefaultConfigPaths, LauncherConfig, ResolvedConfigSource};
pub use env::EnvMap;
pub use errors::{OtelcolError, ResolveError};
pub use memory::MemoryPlan;
pub use probe::{FileProbe, FsProbe};
pub use runtime::{
    BuildInfo, ConfigProvider, LaunchError, Resolution, ResolvedRuntimeConfig, ServiceError,
    ServiceRuntime, ServiceSettings,
};

pub use runtime::handler as runtime_ops;

// Re-export logging initialization
pub use logging::init_logging;
