use clap::{Arg, ArgAction, Command};

/// Every argument belongs to the collector service, including `--help`,
/// so clap only collects them verbatim.
pub fn build_cli() -> Command {
    Command::new("otelcol")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve runtime parameters and start the collector service")
        .long_about("Resolves the configuration source, memory ballast and memory limit from flags, SPLUNK_* environment variables and bundled defaults, then starts the collector service with a consistent set of parameters. All arguments are forwarded to the service.")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("service-args")
                .help("Arguments forwarded to the collector service")
                .num_args(0..)
                .action(ArgAction::Append)
                .allow_hyphen_values(true)
                .trailing_var_arg(true),
        )
}
