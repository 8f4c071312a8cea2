//! Configuration types for sysgram diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are laid out and styled. All types implement [`serde::Deserialize`] so
//! they can be loaded from TOML files; every field has a default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Card size, canvas margins and gaps between cards.
//! - [`StyleConfig`] - Colors, fonts and the dash pattern of external cards.
//!
//! # Example
//!
//! ```
//! # use sysgram::config::AppConfig;
//! let config: AppConfig = toml::from_str(
//!     r##"
//!     [layout]
//!     node_width = 260
//!
//!     [style]
//!     edge_color = "#ff8800"
//!     "##,
//! )
//! .unwrap();
//! assert_eq!(config.layout().node_width(), 260.0);
//! assert_eq!(config.layout().node_height(), 88.0);
//! assert!(config.style().edge_color().is_ok());
//! ```

use serde::Deserialize;

use sysgram_core::{
    color::Color,
    geometry::{Insets, Size},
};

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    ///
    /// # Arguments
    ///
    /// * `layout` - Card dimensions and spacing.
    /// * `style` - Visual styling options.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Dimensions of the column layout, in SVG user units.
///
/// Every element card has the same size; columns are `gap_x` apart and
/// cards in a column are `gap_y` apart.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    node_width: f32,
    node_height: f32,
    margin_x: f32,
    margin_y: f32,
    gap_x: f32,
    gap_y: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 220.0,
            node_height: 88.0,
            margin_x: 36.0,
            margin_y: 64.0,
            gap_x: 48.0,
            gap_y: 32.0,
        }
    }
}

impl LayoutConfig {
    pub fn node_width(&self) -> f32 {
        self.node_width
    }

    pub fn node_height(&self) -> f32 {
        self.node_height
    }

    /// Size of one element card.
    pub fn node_size(&self) -> Size {
        Size::new(self.node_width, self.node_height)
    }

    /// Canvas margins: `margin_x` left and right, `margin_y` top and bottom.
    pub fn margins(&self) -> Insets {
        Insets::symmetric(self.margin_x, self.margin_y)
    }

    pub fn gap_x(&self) -> f32 {
        self.gap_x
    }

    pub fn gap_y(&self) -> f32 {
        self.gap_y
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Colors are CSS color strings and are validated when a renderer is built.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    canvas_fill: String,
    canvas_stroke: String,
    node_fill: String,
    node_stroke: String,
    external_stroke: String,
    external_dash: String,
    title_color: String,
    text_color: String,
    package_color: String,
    edge_color: String,
    edge_label_color: String,
    font_family: String,
    mono_font_family: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            canvas_fill: "#0f111a".to_string(),
            canvas_stroke: "#1f2334".to_string(),
            node_fill: "#1f2334".to_string(),
            node_stroke: "#5c6bc0".to_string(),
            external_stroke: "#999fbf".to_string(),
            external_dash: "6 4".to_string(),
            title_color: "#f4f6ff".to_string(),
            text_color: "#aeb8d9".to_string(),
            package_color: "#cdd9ff".to_string(),
            edge_color: "#7f91ff".to_string(),
            edge_label_color: "#9fb0ff".to_string(),
            font_family: "Inter, Segoe UI, sans-serif".to_string(),
            mono_font_family: "SFMono-Regular, Consolas, monospace".to_string(),
        }
    }
}

impl StyleConfig {
    /// Background fill of the canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid CSS color.
    pub fn canvas_fill(&self) -> Result<Color, String> {
        parse_color("canvas_fill", &self.canvas_fill)
    }

    pub fn canvas_stroke(&self) -> Result<Color, String> {
        parse_color("canvas_stroke", &self.canvas_stroke)
    }

    pub fn node_fill(&self) -> Result<Color, String> {
        parse_color("node_fill", &self.node_fill)
    }

    pub fn node_stroke(&self) -> Result<Color, String> {
        parse_color("node_stroke", &self.node_stroke)
    }

    /// Border color of cards for elements that were only referenced.
    pub fn external_stroke(&self) -> Result<Color, String> {
        parse_color("external_stroke", &self.external_stroke)
    }

    /// SVG `stroke-dasharray` value for external cards.
    pub fn external_dash(&self) -> &str {
        &self.external_dash
    }

    pub fn title_color(&self) -> Result<Color, String> {
        parse_color("title_color", &self.title_color)
    }

    /// Color of the meta and detail lines on cards.
    pub fn text_color(&self) -> Result<Color, String> {
        parse_color("text_color", &self.text_color)
    }

    /// Color of the column headers.
    pub fn package_color(&self) -> Result<Color, String> {
        parse_color("package_color", &self.package_color)
    }

    pub fn edge_color(&self) -> Result<Color, String> {
        parse_color("edge_color", &self.edge_color)
    }

    pub fn edge_label_color(&self) -> Result<Color, String> {
        parse_color("edge_label_color", &self.edge_label_color)
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Font family of the column headers.
    pub fn mono_font_family(&self) -> &str {
        &self.mono_font_family
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, String> {
    Color::new(value).map_err(|err| format!("Invalid {field} in style config: {err}"))
}
