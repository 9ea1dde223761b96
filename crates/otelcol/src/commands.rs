use clap::ArgMatches;
use tracing::info;

use otelcol_core::{
    ArgumentVector, DefaultConfigPaths, EnvMap, FsProbe, LaunchError, LauncherConfig, events,
    runtime_ops,
};

use crate::service::ProcessRuntime;

/// Resolve runtime parameters and run the collector service to completion.
///
/// Returns the service's exit code.
pub fn run_collector(matches: &ArgMatches, config: &LauncherConfig) -> Result<i32, LaunchError> {
    events::log_app_startup();

    let args: ArgumentVector = matches
        .get_many::<String>("service-args")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let env = EnvMap::from_process();

    info!(
        event = "cli.collector.launch_started",
        service_bin = %config.service_bin,
        arg_count = args.as_slice().len(),
    );

    let runtime = ProcessRuntime::new(&config.service_bin);
    runtime_ops::launch(
        args,
        env,
        &FsProbe,
        &DefaultConfigPaths::default(),
        &runtime,
    )
}
