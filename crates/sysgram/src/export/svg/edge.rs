//! Relation edges.

use svg::node::element as svg_element;

use sysgram_core::{
    geometry::{Bounds, Point},
    model::Relation,
};

use super::{ARROW_MARKER_ID, style::class};

/// Offset that lifts the label slightly above the line.
const LABEL_OFFSET_Y: f32 = -4.0;

/// How far the loop of a self-relation reaches beyond the card corner.
const LOOP_REACH: f32 = 32.0;

/// Distance of the loop ends from the top right corner.
const LOOP_INSET: f32 = 24.0;

/// Render `relation` as a straight arrow between two cards.
///
/// The line runs between the card centers and is clipped to both borders
/// so the arrowhead touches the target card. The label sits at the middle
/// of the visible segment.
pub(super) fn render_edge(relation: &Relation, from: Bounds, to: Bounds) -> svg_element::Group {
    let start = from.boundary_point_towards(to.center());
    let end = to.boundary_point_towards(from.center());
    let label_at = start.midpoint(end);

    create_edge_group(relation, create_path_data(start, end), label_at)
}

/// Render a relation from a card to itself as a loop over its top right
/// corner, leaving the top border and returning into the right border.
pub(super) fn render_self_edge(relation: &Relation, bounds: Bounds) -> svg_element::Group {
    let start = Point::new(bounds.max_x() - LOOP_INSET, bounds.min_y());
    let end = Point::new(bounds.max_x(), bounds.min_y() + LOOP_INSET);
    let label_at = Point::new(bounds.max_x(), bounds.min_y() - LOOP_REACH / 2.0);

    create_edge_group(relation, create_loop_data(start, end), label_at)
}

fn create_edge_group(relation: &Relation, path_data: String, label_at: Point) -> svg_element::Group {
    svg_element::Group::new()
        .set(
            "class",
            format!("{} {}--{}", class::RELATION, class::RELATION, relation.kind()),
        )
        .add(
            svg_element::Path::new()
                .set("class", class::EDGE)
                .set("d", path_data)
                .set("marker-end", format!("url(#{ARROW_MARKER_ID})")),
        )
        .add(
            svg_element::Text::new(relation.label())
                .set("class", class::EDGE_LABEL)
                .set("x", label_at.x())
                .set("y", label_at.y() + LABEL_OFFSET_Y),
        )
}

/// Path data of a straight segment.
fn create_path_data(start: Point, end: Point) -> String {
    format!("M {} {} L {} {}", start.x(), start.y(), end.x(), end.y())
}

/// Path data of a cubic loop from the top border to the right border.
fn create_loop_data(start: Point, end: Point) -> String {
    format!(
        "M {} {} C {} {} {} {} {} {}",
        start.x(),
        start.y(),
        start.x(),
        start.y() - LOOP_REACH,
        end.x() + LOOP_REACH,
        end.y(),
        end.x(),
        end.y()
    )
}

#[cfg(test)]
mod tests {
    use sysgram_core::{geometry::Size, model::RelationKind};

    use super::*;

    fn card(x: f32, y: f32) -> Bounds {
        Bounds::from_origin(Point::new(x, y), Size::new(220.0, 88.0))
    }

    #[test]
    fn test_horizontal_edge_is_clipped_to_borders() {
        let relation = Relation::new("a", "b", RelationKind::Connects, "connects");
        let markup = render_edge(&relation, card(0.0, 0.0), card(300.0, 0.0)).to_string();

        assert!(markup.contains("M 220 44 L 300 44"));
        assert!(markup.contains("url(#sysml-arrow)"));
        assert!(markup.contains("sysml-relation--connects"));
        assert!(markup.contains(">connects<"));
    }

    #[test]
    fn test_vertical_edge() {
        let relation = Relation::new("a", "b", RelationKind::Typed, "uses");
        let markup = render_edge(&relation, card(0.0, 0.0), card(0.0, 120.0)).to_string();
        assert!(markup.contains("M 110 88 L 110 120"));
    }

    #[test]
    fn test_self_edge_loops_over_the_corner() {
        let relation = Relation::new("a", "a", RelationKind::Flows, "flows");
        let markup = render_self_edge(&relation, card(0.0, 0.0)).to_string();

        assert!(markup.contains("M 196 0 C 196 -32 252 24 220 24"));
        assert!(markup.contains("url(#sysml-arrow)"));
        assert!(markup.contains("sysml-relation--flows"));
        assert!(markup.contains(r#"x="220""#));
        assert!(markup.contains(r#"y="-20""#));
        assert!(markup.contains(">flows<"));
    }

    #[test]
    fn test_path_data() {
        assert_eq!(
            create_path_data(Point::new(1.0, 2.0), Point::new(3.5, 4.0)),
            "M 1 2 L 3.5 4"
        );
    }
}
