use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Init logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    // Startup banner at info level so something always prints at default verbosity
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "<unset>".to_string());
    let output = std::env::var("OPTIQUEUE_OUTPUT").unwrap_or_else(|_| "table".to_string());
    info!(
        target: "optiqueue",
        "Optiqueue starting: RUST_LOG='{}', output='{}'",
        rust_log, output
    );

    optiqueue::cli::Console::new().run()
}
