//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).
//! The file holds the library's `[layout]` and `[style]` sections plus a
//! `[markdown]` section used for page rendering.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use sysgram::{SysgramError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for SysgramError {
    fn from(err: ConfigError) -> Self {
        SysgramError::Config(err.to_string())
    }
}

/// Full CLI configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliConfig {
    #[serde(flatten)]
    app: AppConfig,

    /// Markdown page rendering section.
    #[serde(default)]
    markdown: MarkdownConfig,
}

impl CliConfig {
    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    pub fn markdown(&self) -> &MarkdownConfig {
        &self.markdown
    }
}

/// Where the default title of a markdown diagram comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleSource {
    /// The page's first `# ` heading, falling back to the file path.
    #[default]
    Page,
    /// The file path.
    File,
    /// A fixed generic title.
    None,
}

/// Settings for fenced diagram blocks in markdown pages.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    fences: Vec<String>,
    title_source: TitleSource,
    strict: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            fences: vec!["sysml".to_string(), "sysmlv2".to_string()],
            title_source: TitleSource::default(),
            strict: false,
        }
    }
}

impl MarkdownConfig {
    /// Whether a fence language (already lower-cased) holds a diagram.
    ///
    /// An empty fence list behaves like `["sysml"]`.
    pub fn is_diagram_fence(&self, language: &str) -> bool {
        let mut fences = self
            .fences
            .iter()
            .map(|fence| fence.trim())
            .filter(|fence| !fence.is_empty())
            .peekable();

        if fences.peek().is_none() {
            return language == "sysml";
        }
        fences.any(|fence| fence.eq_ignore_ascii_case(language))
    }

    pub fn title_source(&self) -> TitleSource {
        self.title_source
    }

    /// Whether a failing block fails the whole page.
    pub fn strict(&self) -> bool {
        self.strict
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (sysgram/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path to config file
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<CliConfig, SysgramError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("sysgram/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "sysgram", "sysgram") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(CliConfig::default())
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file doesn't exist, cannot be read, or is not
/// valid TOML for [`CliConfig`].
fn load_config_file(path: impl AsRef<Path>) -> Result<CliConfig, SysgramError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: CliConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}
