//! Element cards.

use svg::node::element as svg_element;

use sysgram_core::{geometry::Bounds, model::Element};

use super::style::class;

const TEXT_INSET: f32 = 16.0;
const TITLE_BASELINE: f32 = 28.0;
const META_BASELINE: f32 = 48.0;
const DETAIL_BASELINE: f32 = 64.0;
const CORNER_RADIUS: f32 = 8.0;

const META_SEPARATOR: &str = " · ";
const SPECIALIZES_PREFIX: &str = "⇢ ";
const TYPE_OF_PREFIX: &str = "↦ ";

/// Render the card of `element` at `bounds`.
///
/// The card shows the name, a meta line with kind, flavor and modifiers,
/// and one detail line each for specialization parents and type-of targets.
pub(super) fn render_card(element: &Element, bounds: Bounds) -> svg_element::Group {
    let mut classes = class::NODE.to_string();
    if element.is_external() {
        classes.push(' ');
        classes.push_str(class::NODE_EXTERNAL);
    }

    let mut group = svg_element::Group::new()
        .set("class", classes)
        .set(
            "transform",
            format!("translate({}, {})", bounds.min_x(), bounds.min_y()),
        )
        .add(
            svg_element::Rectangle::new()
                .set("width", bounds.width())
                .set("height", bounds.height())
                .set("rx", CORNER_RADIUS)
                .set("ry", CORNER_RADIUS),
        )
        .add(
            svg_element::Text::new(element.name())
                .set("class", class::NODE_TITLE)
                .set("x", TEXT_INSET)
                .set("y", TITLE_BASELINE),
        )
        .add(
            svg_element::Text::new(meta_line(element))
                .set("class", class::NODE_META)
                .set("x", TEXT_INSET)
                .set("y", META_BASELINE),
        );

    let details = detail_lines(element);
    if !details.is_empty() {
        let text = details.into_iter().fold(
            svg_element::Text::new("")
                .set("class", class::NODE_DETAIL)
                .set("x", TEXT_INSET)
                .set("y", DETAIL_BASELINE),
            |text, line| {
                text.add(
                    svg_element::TSpan::new(line)
                        .set("x", TEXT_INSET)
                        .set("dy", "1.2em"),
                )
            },
        );
        group = group.add(text);
    }

    group
}

/// Kind, flavor and modifiers, in that order.
fn meta_line(element: &Element) -> String {
    let mut parts = vec![element.kind().as_str()];
    if let Some(flavor) = element.flavor() {
        parts.push(flavor.as_str());
    }
    parts.extend(element.modifiers().iter().map(String::as_str));
    parts.join(META_SEPARATOR)
}

fn detail_lines(element: &Element) -> Vec<String> {
    let mut lines = Vec::new();
    if !element.specializes().is_empty() {
        lines.push(format!(
            "{SPECIALIZES_PREFIX}{}",
            element.specializes().join(", ")
        ));
    }
    if !element.type_of().is_empty() {
        lines.push(format!("{TYPE_OF_PREFIX}{}", element.type_of().join(", ")));
    }
    lines
}
