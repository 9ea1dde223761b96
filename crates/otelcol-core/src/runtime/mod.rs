//! Orchestration: resolve runtime parameters, then hand off to the
//! collector service.

pub mod errors;
pub mod handler;
pub mod traits;
pub mod types;

pub use errors::{LaunchError, ServiceError};
pub use handler::{build_service_settings, launch, resolve_runtime_config};
pub use traits::ServiceRuntime;
pub use types::{
    BuildInfo, ConfigProvider, Resolution, ResolvedRuntimeConfig, ServiceSettings,
};
