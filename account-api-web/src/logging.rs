//! Tracing subscriber setup.

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;

const LOG_FILE_PREFIX: &str = "account-api.log";

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `config.level`. The returned guard flushes the
/// non-blocking writer on drop and must be held until shutdown.
pub fn init(config: &LogConfig) -> anyhow::Result<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("invalid log level {:?}", config.level))?;

    let (writer, guard) = match &config.directory {
        Some(dir) => {
            tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
        }
        None => tracing_appender::non_blocking(std::io::stdout()),
    };
    let ansi = config.directory.is_none();

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.json {
        registry
            .with(fmt::layer().json().with_writer(writer))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_ansi(ansi).with_target(true).with_writer(writer))
            .try_init()
    };
    installed.context("failed to install tracing subscriber")?;

    tracing::info!(
        level = %config.level,
        json = config.json,
        file = config.directory.is_some(),
        "Logging initialized"
    );
    Ok(guard)
}
