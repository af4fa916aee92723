//! pisweep: parallel π integration benchmark.

use pisweep_lib::{app, config, errors};

fn main() {
    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    // Failures are already reported by the presenter
    if let Err(e) = app::run(&config) {
        std::process::exit(errors::exit_code(&e));
    }
}
