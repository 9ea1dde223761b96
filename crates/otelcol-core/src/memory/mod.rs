//! Memory ballast and memory limit resolution.
//!
//! All values are MiB. Resolution runs in order: total memory, ballast,
//! limit. The limit check needs the final ballast, so the three steps share
//! one argument vector and environment.

pub mod ballast;
pub mod limit;
pub mod types;

pub use ballast::{resolve_ballast, resolve_total_memory};
pub use limit::{derive_limit, resolve_limit};
pub use types::MemoryPlan;

use crate::args::ArgumentVector;
use crate::env::EnvMap;
use crate::errors::ResolveError;

pub const BALLAST_ENV_VAR: &str = "SPLUNK_BALLAST_SIZE_MIB";
pub const LIMIT_ENV_VAR: &str = "SPLUNK_MEMORY_LIMIT_MIB";
pub const TOTAL_ENV_VAR: &str = "SPLUNK_MEMORY_TOTAL_MIB";

pub const BALLAST_FLAG: &str = "--mem-ballast-size-mib";

pub const DEFAULT_TOTAL_MIB: u64 = 512;
pub const DEFAULT_BALLAST_PERCENTAGE: u64 = 33;
pub const DEFAULT_LIMIT_PERCENTAGE: u64 = 90;
/// Upper bound on memory kept outside the limit for non-heap overhead.
pub const MAX_RESERVED_MIB: u64 = 2048;

pub const MIN_TOTAL_MIB: u64 = 100;
pub const MIN_BALLAST_MIB: u64 = 33;

/// Resolve total memory, ballast and limit in one pass.
pub fn resolve_memory_plan(
    args: &mut ArgumentVector,
    env: &mut EnvMap,
) -> Result<MemoryPlan, ResolveError> {
    let total_mib = resolve_total_memory(env)?;
    let ballast_mib = resolve_ballast(total_mib, args, env)?;
    let limit_mib = resolve_limit(total_mib, ballast_mib, args, env)?;

    Ok(MemoryPlan {
        total_mib,
        ballast_mib,
        limit_mib,
    })
}

fn parse_mib(name: &'static str, raw: &str) -> Result<u64, ResolveError> {
    raw.parse::<u64>()
        .map_err(|_| ResolveError::InvalidNumericValue {
            name,
            value: raw.to_string(),
        })
}

/// `value * percentage / 100`, truncating, without overflowing.
fn percent_of(value: u64, percentage: u64) -> u64 {
    (u128::from(value) * u128::from(percentage) / 100) as u64
}
