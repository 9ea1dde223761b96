//! Total memory and memory ballast.

use tracing::info;

use crate::args::ArgumentVector;
use crate::env::EnvMap;
use crate::errors::ResolveError;
use crate::memory::{
    BALLAST_ENV_VAR, BALLAST_FLAG, DEFAULT_BALLAST_PERCENTAGE, DEFAULT_TOTAL_MIB,
    MIN_BALLAST_MIB, MIN_TOTAL_MIB, TOTAL_ENV_VAR, parse_mib, percent_of,
};

/// Total memory available to the collector.
///
/// Taken from `SPLUNK_MEMORY_TOTAL_MIB` when set, otherwise 512 MiB.
pub fn resolve_total_memory(env: &EnvMap) -> Result<u64, ResolveError> {
    let Some(raw) = env.get(TOTAL_ENV_VAR) else {
        return Ok(DEFAULT_TOTAL_MIB);
    };

    let total = parse_mib(TOTAL_ENV_VAR, raw)?;
    if total < MIN_TOTAL_MIB {
        return Err(ResolveError::BelowThreshold {
            name: TOTAL_ENV_VAR,
            minimum: MIN_TOTAL_MIB,
            value: raw.to_string(),
        });
    }
    Ok(total)
}

/// Reconcile the ballast flag with `SPLUNK_BALLAST_SIZE_MIB`.
///
/// The flag is copied into the environment; giving both is rejected. With
/// neither, the ballast is 33% of `total_mib`. The resolved value is always
/// left in the environment, and appended as `--mem-ballast-size-mib=<n>`
/// unless the flag was already on the command line.
pub fn resolve_ballast(
    total_mib: u64,
    args: &mut ArgumentVector,
    env: &mut EnvMap,
) -> Result<u64, ResolveError> {
    if let Some(flag) = args.value_of(BALLAST_FLAG)?.filter(|v| !v.is_empty()) {
        if env.is_set(BALLAST_ENV_VAR) {
            return Err(ResolveError::ConflictingSources {
                first: BALLAST_ENV_VAR,
                second: BALLAST_FLAG,
            });
        }
        env.set(BALLAST_ENV_VAR, flag);
    }

    let ballast_mib = match env.get(BALLAST_ENV_VAR) {
        Some(raw) => {
            let ballast = parse_mib(BALLAST_ENV_VAR, raw)?;
            if ballast < MIN_BALLAST_MIB {
                return Err(ResolveError::BelowThreshold {
                    name: BALLAST_ENV_VAR,
                    minimum: MIN_BALLAST_MIB,
                    value: raw.to_string(),
                });
            }
            ballast
        }
        None => {
            let derived = percent_of(total_mib, DEFAULT_BALLAST_PERCENTAGE);
            env.set(BALLAST_ENV_VAR, derived.to_string());
            derived
        }
    };

    if !args.has_flag(BALLAST_FLAG) {
        args.push_flag(BALLAST_FLAG, ballast_mib);
    }

    info!(event = "core.memory.ballast_resolved", ballast_mib = ballast_mib);

    Ok(ballast_mib)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_defaults_to_512() {
        assert_eq!(resolve_total_memory(&EnvMap::new()).unwrap(), 512);
    }

    #[test]
    fn test_total_from_env() {
        let env: EnvMap = [(TOTAL_ENV_VAR, "4096")].into_iter().collect();
        assert_eq!(resolve_total_memory(&env).unwrap(), 4096);
    }

    #[test]
    fn test_total_must_be_numeric() {
        let env: EnvMap = [(TOTAL_ENV_VAR, "4G")].into_iter().collect();
        let err = resolve_total_memory(&env).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidNumericValue { name, .. } if name == TOTAL_ENV_VAR));
        assert!(err.to_string().contains("'4G'"));
    }

    #[test]
    fn test_total_threshold_boundary() {
        let env: EnvMap = [(TOTAL_ENV_VAR, "99")].into_iter().collect();
        assert!(matches!(
            resolve_total_memory(&env),
            Err(ResolveError::BelowThreshold { minimum: 100, .. })
        ));

        let env: EnvMap = [(TOTAL_ENV_VAR, "100")].into_iter().collect();
        assert_eq!(resolve_total_memory(&env).unwrap(), 100);
    }

    #[test]
    fn test_ballast_derived_from_total() {
        let mut args = ArgumentVector::default();
        let mut env = EnvMap::new();

        assert_eq!(resolve_ballast(512, &mut args, &mut env).unwrap(), 168);
        assert_eq!(env.get(BALLAST_ENV_VAR), Some("168"));
        assert_eq!(args.as_slice(), ["--mem-ballast-size-mib=168".to_string()]);
    }

    #[test]
    fn test_ballast_derivation_truncates() {
        let mut env = EnvMap::new();
        // 1001 * 33 / 100 = 330.33
        assert_eq!(
            resolve_ballast(1001, &mut ArgumentVector::default(), &mut env).unwrap(),
            330
        );
    }

    #[test]
    fn test_ballast_from_env() {
        let mut args = ArgumentVector::default();
        let mut env: EnvMap = [(BALLAST_ENV_VAR, "256")].into_iter().collect();

        assert_eq!(resolve_ballast(512, &mut args, &mut env).unwrap(), 256);
        assert_eq!(args.as_slice(), ["--mem-ballast-size-mib=256".to_string()]);
    }

    #[test]
    fn test_ballast_flag_copied_to_env_and_not_appended() {
        let mut args: ArgumentVector = ["--mem-ballast-size-mib", "64"].into_iter().collect();
        let mut env = EnvMap::new();

        assert_eq!(resolve_ballast(512, &mut args, &mut env).unwrap(), 64);
        assert_eq!(env.get(BALLAST_ENV_VAR), Some("64"));
        assert_eq!(args.as_slice().len(), 2);
    }

    #[test]
    fn test_ballast_flag_and_env_conflict() {
        let mut args: ArgumentVector = ["--mem-ballast-size-mib=64"].into_iter().collect();
        let mut env: EnvMap = [(BALLAST_ENV_VAR, "64")].into_iter().collect();

        let err = resolve_ballast(512, &mut args, &mut env).unwrap_err();
        assert!(matches!(err, ResolveError::ConflictingSources { .. }));
        assert_eq!(
            err.to_string(),
            "Both SPLUNK_BALLAST_SIZE_MIB and --mem-ballast-size-mib were specified, but only one is allowed"
        );
    }

    #[test]
    fn test_ballast_threshold_boundary() {
        let mut env: EnvMap = [(BALLAST_ENV_VAR, "32")].into_iter().collect();
        assert!(matches!(
            resolve_ballast(512, &mut ArgumentVector::default(), &mut env),
            Err(ResolveError::BelowThreshold { minimum: 33, .. })
        ));

        let mut env: EnvMap = [(BALLAST_ENV_VAR, "33")].into_iter().collect();
        assert_eq!(
            resolve_ballast(512, &mut ArgumentVector::default(), &mut env).unwrap(),
            33
        );
    }

    #[test]
    fn test_ballast_flag_must_be_numeric() {
        let mut args: ArgumentVector = ["--mem-ballast-size-mib=lots"].into_iter().collect();
        let mut env = EnvMap::new();

        let err = resolve_ballast(512, &mut args, &mut env).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidNumericValue { .. }));
    }
}
