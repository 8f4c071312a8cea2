//! Error types for sysgram operations.
//!
//! Extraction itself never fails; errors come from caller input (an
//! unknown output format, invalid configuration values) or from I/O done
//! on behalf of the caller.

use std::io;

use thiserror::Error;

/// The main error type for sysgram operations.
#[derive(Debug, Error)]
pub enum SysgramError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Unsupported output format '{0}', expected 'svg' or 'html'")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
