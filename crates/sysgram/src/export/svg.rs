//! SVG backend.
//!
//! Emits, in order: title, stylesheet, arrow marker, canvas background,
//! column headers, relation edges and element cards. Edges come before
//! cards so cards are painted on top of line ends.

mod card;
mod edge;
mod style;

use log::{debug, info};
use svg::{
    Document, Node,
    node::{self, element as svg_element},
};

use sysgram_core::{geometry::Size, model::Model};

use super::Exporter;
use crate::{
    SysgramError,
    config::StyleConfig,
    layout::{Layout, renderable_elements},
};

use style::{Theme, class};

/// Id of the arrowhead marker referenced by every edge.
pub const ARROW_MARKER_ID: &str = "sysml-arrow";

/// Title used when the caller gives none.
pub const DEFAULT_TITLE: &str = "SysML model";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const EMPTY_CANVAS: Size = Size::new(480.0, 200.0);
const EMPTY_NOTICE: &str = "No SysML elements detected";
const EMPTY_DESCRIPTION: &str = "No elements found";
const CANVAS_RADIUS: f32 = 8.0;

/// Builder for [`Svg`].
#[derive(Debug, Default)]
pub struct SvgBuilder {
    style: StyleConfig,
    title: Option<String>,
    inline: bool,
}

impl SvgBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: &StyleConfig) -> Self {
        self.style = style.clone();
        self
    }

    /// Set the document title. Blank titles fall back to [`DEFAULT_TITLE`].
    pub fn with_title(mut self, title: &str) -> Self {
        let title = title.trim();
        self.title = (!title.is_empty()).then(|| title.to_string());
        self
    }

    /// Omit the XML declaration so the output can be embedded in a page.
    pub fn with_inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    /// Build the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`SysgramError::Config`] if a style color is invalid.
    pub fn build(self) -> Result<Svg, SysgramError> {
        let theme = Theme::from_config(&self.style).map_err(SysgramError::Config)?;
        Ok(Svg {
            theme,
            title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            inline: self.inline,
        })
    }
}

/// SVG exporter with resolved styling.
#[derive(Debug)]
pub struct Svg {
    theme: Theme,
    title: String,
    inline: bool,
}

impl Svg {
    /// Render a laid-out model to an SVG document.
    ///
    /// Relations whose endpoints were not placed are skipped. A relation
    /// from an element to itself is drawn as a loop on its card.
    pub fn render_document(&self, model: &Model, layout: &Layout) -> Document {
        if layout.is_empty() {
            return self.render_empty(model);
        }

        let mut doc = self.create_document(layout.canvas_size());

        for column in layout.columns() {
            let anchor = layout.header_anchor(column);
            let mut header = svg_element::Text::new(column.key().label())
                .set("class", class::PACKAGE)
                .set("x", anchor.x())
                .set("y", anchor.y());
            if let Some(description) = column
                .key()
                .package()
                .and_then(|name| model.package(name))
                .and_then(|package| package.description())
            {
                header = header.add(text_element("title", description));
            }
            doc = doc.add(header);
        }

        let mut edges = 0;
        for relation in model.relations() {
            let (Some(from), Some(to)) = (
                layout.placement(relation.source()),
                layout.placement(relation.target()),
            ) else {
                debug!(
                    source = relation.source(),
                    target = relation.target();
                    "Skipping relation with an unplaced endpoint"
                );
                continue;
            };
            let group = if relation.source() == relation.target() {
                edge::render_self_edge(relation, from)
            } else {
                edge::render_edge(relation, from, to)
            };
            doc = doc.add(group);
            edges += 1;
        }

        let mut cards = 0;
        for element in renderable_elements(model) {
            if let Some(bounds) = layout.placement(element.name()) {
                doc = doc.add(card::render_card(element, bounds));
                cards += 1;
            }
        }

        if let Some(source) = model.source() {
            doc = doc.add(text_element("desc", &format!("Source: {source}")));
        }

        info!(cards, edges; "SVG rendered");
        doc
    }

    /// Fixed-size canvas with a notice, for models without renderable elements.
    fn render_empty(&self, model: &Model) -> Document {
        let center_x = EMPTY_CANVAS.width() / 2.0;
        let center_y = EMPTY_CANVAS.height() / 2.0;

        info!("Rendering empty diagram");
        self.create_document(EMPTY_CANVAS)
            .add(
                svg_element::Text::new(EMPTY_NOTICE)
                    .set("class", class::EMPTY)
                    .set("x", center_x)
                    .set("y", center_y),
            )
            .add(text_element("desc", model.source().unwrap_or(EMPTY_DESCRIPTION)))
    }

    /// Root element with title, stylesheet, arrow marker and canvas background.
    fn create_document(&self, size: Size) -> Document {
        Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("width", size.width())
            .set("height", size.height())
            .set(
                "viewBox",
                format!("0 0 {} {}", size.width(), size.height()),
            )
            .set("role", "img")
            .add(text_element("title", &self.title))
            .add(svg_element::Style::new(self.theme.stylesheet()))
            .add(self.create_marker_definitions())
            .add(
                svg_element::Rectangle::new()
                    .set("class", class::CANVAS)
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", size.width())
                    .set("height", size.height())
                    .set("rx", CANVAS_RADIUS)
                    .set("ry", CANVAS_RADIUS),
            )
    }

    fn create_marker_definitions(&self) -> svg_element::Definitions {
        let arrow = svg_element::Marker::new()
            .set("id", ARROW_MARKER_ID)
            .set("viewBox", "0 0 10 10")
            .set("refX", 10)
            .set("refY", 5)
            .set("markerUnits", "strokeWidth")
            .set("markerWidth", 10)
            .set("markerHeight", 7)
            .set("orient", "auto")
            .add(
                svg_element::Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", self.theme.edge_color()),
            );

        svg_element::Definitions::new().add(arrow)
    }
}

impl Exporter for Svg {
    fn export(&self, model: &Model, layout: &Layout) -> String {
        let doc = self.render_document(model, layout);
        if self.inline {
            doc.to_string()
        } else {
            format!("{XML_DECLARATION}\n{doc}")
        }
    }
}

/// An element of type `name` whose only child is `text`.
fn text_element(name: &str, text: &str) -> svg_element::Element {
    let mut element = svg_element::Element::new(name);
    element.append(node::Text::new(text));
    element
}

#[cfg(test)]
mod tests {
    use sysgram_core::model::{Element, ElementKind, Relation, RelationKind};

    use super::*;
    use crate::config::LayoutConfig;

    fn export(model: &Model, inline: bool) -> String {
        let svg = SvgBuilder::new()
            .with_title("Test")
            .with_inline(inline)
            .build()
            .unwrap();
        let layout = Layout::compute(model, &LayoutConfig::default());
        svg.export(model, &layout)
    }

    #[test]
    fn test_empty_model() {
        let output = export(&Model::new(Some("empty.sysml".to_string())), false);
        assert!(output.starts_with(XML_DECLARATION));
        assert!(output.contains(r#"width="480""#));
        assert!(output.contains(r#"height="200""#));
        assert!(output.contains(EMPTY_NOTICE));
        assert!(output.contains("empty.sysml"));
    }

    #[test]
    fn test_empty_model_without_source() {
        let output = export(&Model::default(), true);
        assert!(!output.contains("<?xml"));
        assert!(output.contains(EMPTY_DESCRIPTION));
    }

    #[test]
    fn test_self_relation_is_drawn_as_loop() {
        let mut model = Model::default();
        model.add_element(Element::new("loop", ElementKind::State));
        model.add_relation(Relation::new("loop", "loop", RelationKind::Flows, "flows"));
        model.finalize_relation_endpoints();

        let output = export(&model, true);
        assert_eq!(output.matches(r#"class="sysml-edge""#).count(), 1);
        assert!(output.contains(" C "));
        assert!(output.contains(">flows<"));
        assert_eq!(output.matches(r#"class="sysml-node""#).count(), 1);
    }

    #[test]
    fn test_package_description_becomes_header_tooltip() {
        let mut model = Model::default();
        model.add_package("P");
        model.set_package_description("P", "Vehicle parts");
        model.add_element(Element::new("a", ElementKind::Part).with_package(Some("P".to_string())));

        let output = export(&model, true);
        assert!(output.contains("Vehicle parts"));
        assert!(output.contains(">P"));
    }

    #[test]
    fn test_blank_title_uses_default() {
        let svg = SvgBuilder::new().with_title("   ").build().unwrap();
        assert_eq!(svg.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_invalid_style_fails_to_build() {
        let style: StyleConfig = toml::from_str(r#"canvas_fill = "bogus""#).unwrap();
        let err = SvgBuilder::new().with_style(&style).build().unwrap_err();
        assert!(matches!(err, SysgramError::Config(_)));
    }
}
