//! HTML figure backend.

use sysgram_core::model::Model;

use super::{Exporter, svg::Svg};
use crate::layout::Layout;

/// CSS class of the `<figure>` wrapping an embedded diagram.
pub const FIGURE_CLASS: &str = "sysml-diagram";

/// Wraps inline SVG output in `<figure class="sysml-diagram">`.
#[derive(Debug)]
pub struct Html {
    svg: Svg,
}

impl Html {
    /// Create an HTML backend around an SVG backend.
    ///
    /// The SVG backend should be built with inline output, since an XML
    /// declaration is not valid inside an HTML body.
    pub fn new(svg: Svg) -> Self {
        Self { svg }
    }
}

impl Exporter for Html {
    fn export(&self, model: &Model, layout: &Layout) -> String {
        format!(
            "<figure class=\"{FIGURE_CLASS}\">{}</figure>",
            self.svg.export(model, layout)
        )
    }
}
