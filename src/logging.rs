use std::{env, fs::File, sync::Mutex};

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_LOG_FILTER, LOG_FILE_ENV};
use crate::error::Result;

/// Sends tracing output to the file named by `SNAKE_LOG`. The terminal is
/// busy drawing the game, so logs never go to stdout/stderr, and nothing is
/// written at all when the variable is unset.
pub fn init() -> Result<()> {
    let path = match env::var_os(LOG_FILE_ENV) {
        Some(path) if !path.is_empty() => path,
        _ => return Ok(()),
    };

    let file = File::create(&path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();

    info!(path = %path.to_string_lossy(), "logging started");
    Ok(())
}
