use otelcol_core::{LauncherConfig, events, init_logging};

mod app;
mod commands;
mod service;

fn main() {
    let config = LauncherConfig::new();
    init_logging(config.quiet);

    let matches = app::build_cli().get_matches();

    match commands::run_collector(&matches, &config) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            events::log_app_error(&e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
