use tracing::info;

use crate::args::ArgumentVector;
use crate::components::ComponentRegistry;
use crate::config::{DefaultConfigPaths, resolve_config_source};
use crate::env::EnvMap;
use crate::errors::ResolveError;
use crate::events;
use crate::memory::resolve_memory_plan;
use crate::probe::FileProbe;
use crate::runtime::errors::LaunchError;
use crate::runtime::traits::ServiceRuntime;
use crate::runtime::types::{
    BuildInfo, ConfigProvider, Resolution, ResolvedRuntimeConfig, ServiceSettings,
};

const HELP_FLAGS: [&str; 2] = ["-h", "--help"];

pub fn is_help_requested(args: &ArgumentVector) -> bool {
    HELP_FLAGS.iter().any(|flag| args.has_flag(flag))
}

/// Resolve configuration source, ballast and memory limit.
///
/// Runs the resolvers in order and stops at the first failure. When help
/// was requested nothing is resolved, so help output works without a
/// configuration.
pub fn resolve_runtime_config(
    mut args: ArgumentVector,
    mut env: EnvMap,
    probe: &dyn FileProbe,
    defaults: &DefaultConfigPaths,
) -> Result<Resolution, ResolveError> {
    if is_help_requested(&args) {
        events::log_help_passthrough(&args);
        return Ok(Resolution::HelpRequested { args, env });
    }

    info!(event = "core.runtime.resolve_started");

    let source = resolve_config_source(&mut args, &mut env, probe, defaults)?;
    let memory = resolve_memory_plan(&mut args, &mut env)?;

    info!(
        event = "core.runtime.resolve_completed",
        total_mib = memory.total_mib,
        ballast_mib = memory.ballast_mib,
        limit_mib = memory.limit_mib,
    );

    Ok(Resolution::Resolved(ResolvedRuntimeConfig {
        args,
        env,
        source,
        memory,
    }))
}

/// Assemble the collector service settings from a resolution.
pub fn build_service_settings(resolution: Resolution) -> Result<ServiceSettings, LaunchError> {
    let factories = ComponentRegistry::distribution()?;
    let (args, env) = resolution.into_parts();
    let config_provider = ConfigProvider::select(&env);

    Ok(ServiceSettings {
        build_info: BuildInfo::current(),
        factories,
        config_provider,
        args,
        env,
    })
}

/// Resolve runtime parameters and run the collector service.
///
/// Returns the service's exit code unchanged. Nothing is started when
/// resolution fails.
pub fn launch(
    args: ArgumentVector,
    env: EnvMap,
    probe: &dyn FileProbe,
    defaults: &DefaultConfigPaths,
    runtime: &dyn ServiceRuntime,
) -> Result<i32, LaunchError> {
    let resolution = resolve_runtime_config(args, env, probe, defaults)
        .inspect_err(events::log_resolution_failed)?;

    let settings = build_service_settings(resolution)?;

    info!(
        event = "core.runtime.service_starting",
        command = %settings.build_info.command,
        version = %settings.build_info.version,
        components = settings.factories.len(),
    );

    let code = runtime
        .run(settings)
        .inspect_err(events::log_service_failed)?;

    info!(event = "core.runtime.service_exited", exit_code = code);
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::{
        CONFIG_ENV_VAR, CONFIG_YAML_ENV_VAR, REALM_ENV_VAR, TOKEN_ENV_VAR,
    };
    use crate::memory::{BALLAST_ENV_VAR, LIMIT_ENV_VAR, TOTAL_ENV_VAR};
    use crate::probe::FsProbe;
    use crate::runtime::errors::ServiceError;
    use std::cell::RefCell;
    use std::path::Path;

    #[derive(Default)]
    struct RecordingRuntime {
        seen: RefCell<Option<ServiceSettings>>,
        exit_code: i32,
    }

    impl ServiceRuntime for RecordingRuntime {
        fn run(&self, settings: ServiceSettings) -> Result<i32, ServiceError> {
            *self.seen.borrow_mut() = Some(settings);
            Ok(self.exit_code)
        }
    }

    fn config_file(dir: &tempfile::TempDir) -> String {
        let path = dir.path().join("agent_config.yaml");
        std::fs::write(&path, "receivers:\n  otlp: {}\n").unwrap();
        path.display().to_string()
    }

    fn local_defaults(dir: &tempfile::TempDir) -> DefaultConfigPaths {
        DefaultConfigPaths {
            docker_gateway: dir.path().join("docker/gateway_config.yaml"),
            docker_otlp: dir.path().join("docker/otlp_config_linux.yaml"),
            local_gateway: dir.path().join("local/gateway_config.yaml"),
            local_otlp: dir.path().join("local/otlp_config_linux.yaml"),
        }
    }

    #[test]
    fn test_help_skips_resolution() {
        for flag in ["-h", "--help"] {
            let args: ArgumentVector = [flag].into_iter().collect();
            let env: EnvMap = [
                (CONFIG_ENV_VAR, "/does/not/exist.yaml"),
                (CONFIG_YAML_ENV_VAR, "receivers: {}"),
            ]
            .into_iter()
            .collect();

            let resolution = resolve_runtime_config(
                args.clone(),
                env.clone(),
                &FsProbe,
                &DefaultConfigPaths::default(),
            )
            .unwrap();
            assert_eq!(resolution, Resolution::HelpRequested { args, env });
        }
    }

    #[test]
    fn test_resolves_full_plan_for_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_file(&dir);
        let args: ArgumentVector = ["--log-level", "debug"].into_iter().collect();
        let env: EnvMap = [(CONFIG_ENV_VAR, path.as_str())].into_iter().collect();

        let Resolution::Resolved(resolved) =
            resolve_runtime_config(args, env, &FsProbe, &local_defaults(&dir)).unwrap()
        else {
            panic!("expected a resolved config");
        };

        assert_eq!(resolved.source.path(), Some(Path::new(&path)));
        assert_eq!(resolved.memory.limit_mib, 460);
        assert_eq!(
            resolved.args.as_slice(),
            [
                "--log-level".to_string(),
                "debug".to_string(),
                format!("--config={}", path),
                "--mem-ballast-size-mib=168".to_string(),
            ]
        );
        assert_eq!(resolved.env.get(BALLAST_ENV_VAR), Some("168"));
        assert_eq!(resolved.env.get(LIMIT_ENV_VAR), Some("460"));
    }

    #[test]
    fn test_config_failure_stops_before_memory() {
        let args = ArgumentVector::default();
        let env: EnvMap = [(CONFIG_ENV_VAR, "/does/not/exist.yaml"), (TOTAL_ENV_VAR, "abc")]
            .into_iter()
            .collect();

        let err =
            resolve_runtime_config(args, env, &FsProbe, &DefaultConfigPaths::default()).unwrap_err();
        assert!(matches!(err, ResolveError::FileNotFound { .. }));
    }

    #[test]
    fn test_local_default_profile_with_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let defaults = local_defaults(&dir);
        std::fs::create_dir_all(defaults.local_gateway.parent().unwrap()).unwrap();
        std::fs::write(&defaults.local_gateway, "exporters: {}\n").unwrap();

        let env: EnvMap = [(REALM_ENV_VAR, "us0"), (TOKEN_ENV_VAR, "12345")]
            .into_iter()
            .collect();

        let Resolution::Resolved(resolved) =
            resolve_runtime_config(ArgumentVector::default(), env, &FsProbe, &defaults).unwrap()
        else {
            panic!("expected a resolved config");
        };
        assert_eq!(resolved.source.path(), Some(defaults.local_gateway.as_path()));
    }

    #[test]
    fn test_launch_passes_resolved_settings_and_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_file(&dir);
        let args: ArgumentVector = [format!("--config={}", path)].into_iter().collect();
        let runtime = RecordingRuntime {
            exit_code: 3,
            ..Default::default()
        };

        let code = launch(args, EnvMap::new(), &FsProbe, &local_defaults(&dir), &runtime).unwrap();

        assert_eq!(code, 3);
        let seen = runtime.seen.borrow();
        let settings = seen.as_ref().unwrap();
        assert_eq!(settings.config_provider, ConfigProvider::Default);
        assert_eq!(settings.env.get(CONFIG_ENV_VAR), Some(path.as_str()));
        assert!(settings.args.has_flag("--mem-ballast-size-mib"));
        assert!(!settings.factories.is_empty());
    }

    #[test]
    fn test_launch_inline_payload_uses_in_memory_provider() {
        let runtime = RecordingRuntime::default();
        let env: EnvMap = [(CONFIG_YAML_ENV_VAR, "receivers: {}")].into_iter().collect();

        launch(
            ArgumentVector::default(),
            env,
            &FsProbe,
            &DefaultConfigPaths::default(),
            &runtime,
        )
        .unwrap();

        let seen = runtime.seen.borrow();
        let settings = seen.as_ref().unwrap();
        assert_eq!(
            settings.config_provider,
            ConfigProvider::InMemory("receivers: {}".to_string())
        );
        assert!(!settings.args.has_flag("--config"));
    }

    #[test]
    fn test_launch_does_not_run_service_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_file(&dir);
        let runtime = RecordingRuntime::default();
        let env: EnvMap = [(CONFIG_ENV_VAR, path.as_str()), (TOTAL_ENV_VAR, "100000")]
            .into_iter()
            .collect();

        let err = launch(
            ArgumentVector::default(),
            env,
            &FsProbe,
            &local_defaults(&dir),
            &runtime,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            LaunchError::Resolve(ResolveError::BallastExceedsLimit { .. })
        ));
        assert!(runtime.seen.borrow().is_none());
    }

    #[test]
    fn test_launch_help_runs_service_unresolved() {
        let runtime = RecordingRuntime::default();
        let args: ArgumentVector = ["--help"].into_iter().collect();

        launch(
            args,
            EnvMap::new(),
            &FsProbe,
            &DefaultConfigPaths::default(),
            &runtime,
        )
        .unwrap();

        let seen = runtime.seen.borrow();
        let settings = seen.as_ref().unwrap();
        assert_eq!(settings.args.as_slice(), ["--help".to_string()]);
        assert!(!settings.env.is_set(BALLAST_ENV_VAR));
    }
}
