use anyhow::{Context, Result, bail};
use sentiment_form::{config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// `rust_log` (the `RUST_LOG` value) when it parses, otherwise `server.logs.level`.
fn log_filter(rust_log: Option<&str>, configured: &str) -> Result<EnvFilter> {
    if let Some(filter) = rust_log.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        return Ok(filter);
    }

    if configured.parse::<LevelFilter>().is_err() {
        bail!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            configured
        );
    }

    EnvFilter::try_new(configured).context("building log filter")
}

#[tokio::main]
async fn main() -> Result<()> {
    // Tracing is not up yet, so startup failures go to stderr.
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = match log_filter(rust_log.as_deref(), &config.server.logs.level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!(
        locale = %config.ui.locale,
        timeout_secs = config.api.timeout_secs,
        "Sentiment form starting"
    );

    server::run(config).await?;

    Ok(())
}
