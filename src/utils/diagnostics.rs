//! Optional file-backed `tracing` output.
//!
//! The terminal belongs to the chat screen, so diagnostics only go to a file
//! chosen with `--debug-log`. Without it no subscriber is installed.

use std::error::Error;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

pub fn init_tracing(log_path: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let Some(path) = log_path else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Diagnostics enabled");
    Ok(())
}
