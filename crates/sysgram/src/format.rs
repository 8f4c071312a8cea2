//! Output formats produced by the renderer.

use std::{fmt, str::FromStr};

use crate::SysgramError;

/// Target markup for a rendered diagram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// A standalone SVG document, or a bare `<svg>` element when inline.
    Svg,
    /// The inline SVG wrapped in a `<figure>` for embedding in HTML pages.
    #[default]
    Html,
}

impl OutputFormat {
    /// File extension conventionally used for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Html => "html",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = SysgramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "html" => Ok(Self::Html),
            _ => Err(SysgramError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
