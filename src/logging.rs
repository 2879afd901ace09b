//! Diagnostic logging.
//!
//! The library only emits `tracing` events. Binaries that want them call
//! [`init_logging`] once at startup.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::EnvConfig;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("I/O error while opening log file {path}: {source}")]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("a global tracing subscriber is already installed")]
    AlreadyInstalled,
}

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(config: &EnvConfig) -> &'static str {
    if config.debug {
        "form_kit=debug"
    } else {
        "form_kit=info"
    }
}

/// Install a fmt subscriber writing to the configured log file, or stderr.
pub fn init_logging(config: &EnvConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let installed = match config.log_file.as_ref() {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::OpenLogFile {
                    path: PathBuf::from(path),
                    source,
                })?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|_| LoggingError::AlreadyInstalled)
}
