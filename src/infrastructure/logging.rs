//! File logging setup

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "confessor=debug";

/// Route `tracing` output to an append-only log file.
///
/// `RUST_LOG` overrides the default filter. Returns false when the log file
/// cannot be opened or a subscriber is already installed; the program then
/// runs without file logging.
pub fn init_file_logging(path: &Path) -> bool {
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok()
}
