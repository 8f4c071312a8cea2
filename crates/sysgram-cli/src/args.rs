//! Command-line argument definitions for the sysgram CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the inputs, where and in which format
//! output is written, configuration file selection and logging verbosity.

use clap::Parser;

/// Command-line arguments for the sysgram diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// SysML model files or markdown pages (`.md`) to render
    #[arg(required = true, help = "Paths to the input files")]
    pub inputs: Vec<String>,

    /// Directory receiving the rendered files
    #[arg(short, long, default_value = "site")]
    pub out_dir: String,

    /// Output format (svg, html)
    #[arg(short, long, default_value = "html")]
    pub format: String,

    /// Title for every diagram, overriding the configured title source
    #[arg(short, long)]
    pub title: Option<String>,

    /// Omit the XML declaration from standalone SVG files
    #[arg(long)]
    pub inline: bool,

    /// Render even when an output is newer than its input
    #[arg(long)]
    pub force: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
