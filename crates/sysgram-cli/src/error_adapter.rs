//! Error adapter for converting SysgramError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use sysgram::SysgramError;

/// Adapter giving a [`SysgramError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a SysgramError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            SysgramError::Io(_) => "sysgram::io",
            SysgramError::UnsupportedFormat(_) => "sysgram::format",
            SysgramError::Config(_) => "sysgram::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            SysgramError::Io(_) => return None,
            SysgramError::UnsupportedFormat(_) => "pass --format svg or --format html",
            SysgramError::Config(_) => "check the configuration file passed with --config",
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    fn code(err: &SysgramError) -> Option<String> {
        ErrorAdapter(err).code().map(|code| code.to_string())
    }

    #[test]
    fn test_codes_per_variant() {
        let io_err = SysgramError::Io(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(code(&io_err).as_deref(), Some("sysgram::io"));
        assert!(ErrorAdapter(&io_err).help().is_none());

        let format_err = SysgramError::UnsupportedFormat("png".to_string());
        assert_eq!(code(&format_err).as_deref(), Some("sysgram::format"));
        assert!(ErrorAdapter(&format_err).help().is_some());

        let config_err = SysgramError::Config("bad".to_string());
        assert_eq!(code(&config_err).as_deref(), Some("sysgram::config"));
    }

    #[test]
    fn test_display_matches_error() {
        let err = SysgramError::UnsupportedFormat("png".to_string());
        assert_eq!(ErrorAdapter(&err).to_string(), err.to_string());
    }
}
