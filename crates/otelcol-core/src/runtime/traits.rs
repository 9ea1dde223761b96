//! Service runtime trait definition.

use crate::runtime::errors::ServiceError;
use crate::runtime::types::ServiceSettings;

/// The collector service the launcher prepares parameters for.
///
/// Implementations own pipeline construction and execution. `run` blocks
/// until the service stops and returns its exit code.
pub trait ServiceRuntime {
    fn run(&self, settings: ServiceSettings) -> Result<i32, ServiceError>;
}
