//! Sysgram - SysML v2 text to SVG diagrams.
//!
//! Extraction of packages, elements and relations from SysML v2 textual
//! notation, and rendering of the resulting graph as a column-by-package
//! card diagram in SVG or embeddable HTML.

pub mod config;

mod error;
mod export;
mod format;
mod layout;

pub use sysgram_core::{color, geometry, model};

pub use error::SysgramError;
pub use export::svg::DEFAULT_TITLE;
pub use format::OutputFormat;

use log::{debug, info, trace};

use config::AppConfig;
use export::{Exporter, html::Html, svg::SvgBuilder};
use layout::Layout;
use model::Model;

/// Builder for extracting and rendering SysML diagrams.
///
/// # Examples
///
/// ```
/// use sysgram::{DiagramBuilder, config::AppConfig};
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Extract the graph model
/// let model = builder.parse("package P { part A : B; connect A to C; }", None);
///
/// // Render it as a standalone SVG document
/// let svg = builder.render(&model, "svg", "Vehicle", false)
///     .expect("Failed to render");
/// assert!(svg.starts_with("<?xml"));
///
/// // Or use default config
/// let builder = DiagramBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Extract a graph model from SysML v2 text.
    ///
    /// Never fails: lines that cannot be classified are skipped.
    ///
    /// # Arguments
    ///
    /// * `source` - SysML v2 text
    /// * `provenance` - Optional label (such as a file path) stored on the model
    pub fn parse(&self, source: &str, provenance: Option<&str>) -> Model {
        info!(provenance = provenance.unwrap_or("<inline>"); "Parsing model");
        let model = sysgram_parser::parse(source, provenance);
        trace!(model:?; "Parsed model");
        model
    }

    /// Render a model in the format named by `format` (`"svg"` or `"html"`).
    ///
    /// # Arguments
    ///
    /// * `model` - A finalized model, as returned by [`DiagramBuilder::parse`]
    /// * `format` - Output format name, case-insensitive
    /// * `title` - Diagram title; blank titles fall back to [`DEFAULT_TITLE`]
    /// * `inline` - Omit the XML declaration from SVG output
    ///
    /// # Errors
    ///
    /// Returns [`SysgramError::UnsupportedFormat`] for any other format name,
    /// before anything is rendered, and [`SysgramError::Config`] if the style
    /// configuration holds an invalid color.
    pub fn render(
        &self,
        model: &Model,
        format: &str,
        title: &str,
        inline: bool,
    ) -> Result<String, SysgramError> {
        let format: OutputFormat = format.parse()?;
        self.render_as(model, format, title, inline)
    }

    /// Render a model in the given [`OutputFormat`].
    ///
    /// HTML output is always inline SVG wrapped in a `<figure>`.
    ///
    /// # Errors
    ///
    /// Returns [`SysgramError::Config`] if the style configuration holds an
    /// invalid color.
    pub fn render_as(
        &self,
        model: &Model,
        format: OutputFormat,
        title: &str,
        inline: bool,
    ) -> Result<String, SysgramError> {
        info!(format:%, inline; "Rendering diagram");

        let layout = Layout::compute(model, self.config.layout());
        debug!(columns = layout.columns().len(); "Layout calculated");

        let svg = SvgBuilder::new()
            .with_style(self.config.style())
            .with_title(title)
            .with_inline(inline || format == OutputFormat::Html)
            .build()?;

        let exporter: Box<dyn Exporter> = match format {
            OutputFormat::Svg => Box::new(svg),
            OutputFormat::Html => Box::new(Html::new(svg)),
        };

        Ok(exporter.export(model, &layout))
    }

    /// Render a model as a standalone SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`SysgramError::Config`] if the style configuration holds an
    /// invalid color.
    pub fn render_svg(&self, model: &Model, title: &str) -> Result<String, SysgramError> {
        self.render_as(model, OutputFormat::Svg, title, false)
    }
}
