//! Memory limit and its cross-check against the ballast.

use tracing::info;

use crate::args::ArgumentVector;
use crate::env::EnvMap;
use crate::errors::ResolveError;
use crate::memory::{
    BALLAST_FLAG, DEFAULT_LIMIT_PERCENTAGE, LIMIT_ENV_VAR, MAX_RESERVED_MIB, parse_mib,
    percent_of,
};

/// Limit derived from total memory: 90% of it, unless that would reserve
/// more than 2048 MiB, in which case the limit itself is 2048 MiB.
pub fn derive_limit(total_mib: u64) -> u64 {
    let limit = percent_of(total_mib, DEFAULT_LIMIT_PERCENTAGE);
    if total_mib - limit > MAX_RESERVED_MIB {
        MAX_RESERVED_MIB
    } else {
        limit
    }
}

/// Resolve the memory limit and check it leaves room for twice the ballast.
///
/// The ballast is read back from the `--mem-ballast-size-mib` flag, which is
/// what the collector service will see. `resolved_ballast_mib` is used when
/// the flag carries no value. The limit is written to
/// `SPLUNK_MEMORY_LIMIT_MIB`.
pub fn resolve_limit(
    total_mib: u64,
    resolved_ballast_mib: u64,
    args: &ArgumentVector,
    env: &mut EnvMap,
) -> Result<u64, ResolveError> {
    let limit_mib = match env.get(LIMIT_ENV_VAR) {
        Some(raw) => parse_mib(LIMIT_ENV_VAR, raw)?,
        None => derive_limit(total_mib),
    };

    let ballast_mib = match args.value_of(BALLAST_FLAG)?.filter(|v| !v.is_empty()) {
        Some(raw) => parse_mib(BALLAST_FLAG, raw)?,
        None => resolved_ballast_mib,
    };

    if ballast_mib.saturating_mul(2) > limit_mib {
        return Err(ResolveError::BallastExceedsLimit {
            limit_mib,
            ballast_mib,
        });
    }

    env.set(LIMIT_ENV_VAR, limit_mib.to_string());
    info!(event = "core.memory.limit_resolved", limit_mib = limit_mib);

    Ok(limit_mib)
}
