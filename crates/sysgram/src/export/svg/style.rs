//! Resolved colors and the embedded stylesheet.

use sysgram_core::color::Color;

use crate::config::StyleConfig;

/// CSS class names shared by the stylesheet and the emitted elements.
pub(super) mod class {
    pub const CANVAS: &str = "sysml-canvas";
    pub const PACKAGE: &str = "sysml-package";
    pub const NODE: &str = "sysml-node";
    pub const NODE_EXTERNAL: &str = "sysml-node--external";
    pub const NODE_TITLE: &str = "sysml-node__title";
    pub const NODE_META: &str = "sysml-node__meta";
    pub const NODE_DETAIL: &str = "sysml-node__detail";
    pub const RELATION: &str = "sysml-relation";
    pub const EDGE: &str = "sysml-edge";
    pub const EDGE_LABEL: &str = "sysml-edge-label";
    pub const EMPTY: &str = "sysml-empty";
}

/// Style settings with every color parsed.
#[derive(Debug, Clone)]
pub(super) struct Theme {
    canvas_fill: Color,
    canvas_stroke: Color,
    node_fill: Color,
    node_stroke: Color,
    external_stroke: Color,
    external_dash: String,
    title_color: Color,
    text_color: Color,
    package_color: Color,
    edge_color: Color,
    edge_label_color: Color,
    font_family: String,
    mono_font_family: String,
}

impl Theme {
    /// Parse every color of `style`.
    ///
    /// # Errors
    ///
    /// Returns the message of the first invalid color.
    pub(super) fn from_config(style: &StyleConfig) -> Result<Self, String> {
        Ok(Self {
            canvas_fill: style.canvas_fill()?,
            canvas_stroke: style.canvas_stroke()?,
            node_fill: style.node_fill()?,
            node_stroke: style.node_stroke()?,
            external_stroke: style.external_stroke()?,
            external_dash: style.external_dash().to_string(),
            title_color: style.title_color()?,
            text_color: style.text_color()?,
            package_color: style.package_color()?,
            edge_color: style.edge_color()?,
            edge_label_color: style.edge_label_color()?,
            font_family: style.font_family().to_string(),
            mono_font_family: style.mono_font_family().to_string(),
        })
    }

    pub(super) fn edge_color(&self) -> &Color {
        &self.edge_color
    }

    /// Contents of the `<style>` element.
    pub(super) fn stylesheet(&self) -> String {
        let font = &self.font_family;
        let mono = &self.mono_font_family;

        [
            format!(
                ".{} {{ fill: {}; stroke: {}; stroke-width: 1; }}",
                class::CANVAS,
                self.canvas_fill,
                self.canvas_stroke
            ),
            format!(
                ".{} {{ font: 700 14px {mono}; fill: {}; text-anchor: middle; }}",
                class::PACKAGE,
                self.package_color
            ),
            format!(
                ".{} rect {{ fill: {}; stroke: {}; stroke-width: 1.4; }}",
                class::NODE,
                self.node_fill,
                self.node_stroke
            ),
            format!(
                ".{} rect {{ stroke: {}; stroke-dasharray: {}; }}",
                class::NODE_EXTERNAL,
                self.external_stroke,
                self.external_dash
            ),
            format!(
                ".{} {{ font: 600 16px {font}; fill: {}; }}",
                class::NODE_TITLE,
                self.title_color
            ),
            format!(
                ".{}, .{} {{ font: 500 12px {font}; fill: {}; }}",
                class::NODE_META,
                class::NODE_DETAIL,
                self.text_color
            ),
            format!(
                ".{} {{ stroke: {}; stroke-width: 1.5; fill: none; }}",
                class::EDGE,
                self.edge_color
            ),
            format!(
                ".{} {{ font: 600 12px {font}; fill: {}; text-anchor: middle; }}",
                class::EDGE_LABEL,
                self.edge_label_color
            ),
            format!(
                ".{} {{ font: 600 16px {font}; fill: {}; text-anchor: middle; }}",
                class::EMPTY,
                self.text_color
            ),
        ]
        .join("\n")
    }
}
