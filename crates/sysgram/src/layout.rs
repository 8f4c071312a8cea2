//! Column-by-package layout.
//!
//! Every renderable element gets a fixed-size card. Cards are grouped into
//! one column per package and stacked top to bottom in model order. There
//! is no crossing minimization; edges are routed as straight lines by the
//! exporter.

use indexmap::IndexMap;
use log::{debug, trace};

use sysgram_core::{
    geometry::{Bounds, Point, Size},
    model::{Element, Model},
};

use crate::config::LayoutConfig;

/// Label of the column holding elements without a package.
pub const GLOBAL_COLUMN_LABEL: &str = "Global";

/// Identity of a layout column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    /// Elements owned by the named package.
    Package(String),
    /// Elements without a package.
    Global,
}

impl ColumnKey {
    fn for_element(element: &Element) -> Self {
        match element.package() {
            Some(package) => Self::Package(package.to_string()),
            None => Self::Global,
        }
    }

    /// Header text shown above the column.
    pub fn label(&self) -> &str {
        match self {
            Self::Package(name) => name,
            Self::Global => GLOBAL_COLUMN_LABEL,
        }
    }

    pub fn package(&self) -> Option<&str> {
        match self {
            Self::Package(name) => Some(name),
            Self::Global => None,
        }
    }
}

/// A positioned column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    key: ColumnKey,
    x: f32,
    rows: usize,
}

impl Column {
    pub fn key(&self) -> &ColumnKey {
        &self.key
    }

    /// Left edge of the column's cards.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Number of cards stacked in the column.
    pub fn rows(&self) -> usize {
        self.rows
    }
}

/// Placement of every renderable element of a model.
#[derive(Debug, Clone)]
pub struct Layout {
    columns: Vec<Column>,
    placements: IndexMap<String, Bounds>,
    canvas: Size,
    node_size: Size,
    header_y: f32,
}

impl Layout {
    /// Compute the layout of `model`.
    ///
    /// Package elements are not placed. A model without renderable elements
    /// yields an empty layout (no columns, zero-size canvas).
    pub fn compute(model: &Model, config: &LayoutConfig) -> Self {
        let node_size = config.node_size();
        let margins = config.margins();
        let nodes: Vec<&Element> = renderable_elements(model).collect();

        if nodes.is_empty() {
            debug!("No renderable elements, skipping column layout");
            return Self {
                columns: Vec::new(),
                placements: IndexMap::new(),
                canvas: Size::default(),
                node_size,
                header_y: margins.top() / 2.0,
            };
        }

        let keys = column_keys(model, &nodes);
        let column_pitch = node_size.width() + config.gap_x();
        let row_pitch = node_size.height() + config.gap_y();

        let mut columns: Vec<Column> = keys
            .into_iter()
            .enumerate()
            .map(|(idx, key)| Column {
                key,
                x: margins.left() + idx as f32 * column_pitch,
                rows: 0,
            })
            .collect();

        let mut placements = IndexMap::with_capacity(nodes.len());
        for node in &nodes {
            let key = ColumnKey::for_element(node);
            let Some(column) = columns.iter_mut().find(|column| column.key == key) else {
                continue;
            };
            let origin = Point::new(column.x, margins.top() + column.rows as f32 * row_pitch);
            column.rows += 1;

            trace!(
                element = node.name(),
                column = column.key.label(),
                x = origin.x(),
                y = origin.y();
                "Placed element"
            );
            placements.insert(node.name().to_string(), Bounds::from_origin(origin, node_size));
        }

        let column_count = columns.len().max(1) as f32;
        let row_count = columns.iter().map(Column::rows).max().unwrap_or(0).max(1) as f32;
        let content = Size::new(
            column_count * node_size.width() + (column_count - 1.0) * config.gap_x(),
            row_count * node_size.height() + (row_count - 1.0) * config.gap_y(),
        );
        let canvas = content.add_padding(margins);

        debug!(
            columns = columns.len(),
            placed = placements.len(),
            width = canvas.width(),
            height = canvas.height();
            "Layout computed"
        );

        Self {
            columns,
            placements,
            canvas,
            node_size,
            header_y: margins.top() / 2.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Card bounds of the named element, if it was placed.
    pub fn placement(&self, name: &str) -> Option<Bounds> {
        self.placements.get(name).copied()
    }

    pub fn canvas_size(&self) -> Size {
        self.canvas
    }

    /// Anchor point of a column header: horizontally centered over the
    /// column, halfway down the top margin.
    pub fn header_anchor(&self, column: &Column) -> Point {
        Point::new(column.x() + self.node_size.width() / 2.0, self.header_y)
    }
}

/// Elements that get a card: everything except package elements.
pub fn renderable_elements(model: &Model) -> impl Iterator<Item = &Element> {
    model.elements().filter(|element| !element.kind().is_package())
}

/// Column order: declared packages that own at least one element, then any
/// other column in order of first use.
fn column_keys(model: &Model, nodes: &[&Element]) -> Vec<ColumnKey> {
    let mut keys: Vec<ColumnKey> = model
        .packages()
        .filter(|package| nodes.iter().any(|node| node.package() == Some(package.name())))
        .map(|package| ColumnKey::Package(package.name().to_string()))
        .collect();

    for node in nodes {
        let key = ColumnKey::for_element(node);
        if !keys.contains(&key) {
            keys.push(key);
        }
    }

    if keys.is_empty() {
        keys.push(ColumnKey::Global);
    }
    keys
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use sysgram_core::model::ElementKind;

    use super::*;

    fn part(name: &str, package: Option<&str>) -> Element {
        Element::new(name, ElementKind::Part).with_package(package.map(str::to_string))
    }

    fn labels(layout: &Layout) -> Vec<&str> {
        layout.columns().iter().map(|c| c.key().label()).collect()
    }

    #[test]
    fn test_empty_model_has_no_columns() {
        let layout = Layout::compute(&Model::default(), &LayoutConfig::default());
        assert!(layout.is_empty());
        assert!(layout.columns().is_empty());
    }

    #[test]
    fn test_declared_packages_come_first() {
        let mut model = Model::default();
        model.add_package("Declared");
        model.add_package("Unused");
        model.add_element(part("loose", None));
        model.add_element(part("a", Some("Implicit")));
        model.add_element(part("b", Some("Declared")));

        let layout = Layout::compute(&model, &LayoutConfig::default());
        assert_eq!(labels(&layout), ["Declared", GLOBAL_COLUMN_LABEL, "Implicit"]);
    }

    #[test]
    fn test_global_column_is_distinct_from_package_named_global() {
        let mut model = Model::default();
        model.add_element(part("a", Some("Global")));
        model.add_element(part("b", None));

        let layout = Layout::compute(&model, &LayoutConfig::default());
        assert_eq!(layout.columns().len(), 2);
        assert_eq!(layout.columns()[0].key(), &ColumnKey::Package("Global".to_string()));
        assert_eq!(layout.columns()[1].key(), &ColumnKey::Global);
    }

    #[test]
    fn test_cards_stack_in_model_order() {
        let mut model = Model::default();
        model.add_element(part("first", Some("P")));
        model.add_element(part("other", Some("Q")));
        model.add_element(part("second", Some("P")));

        let layout = Layout::compute(&model, &LayoutConfig::default());
        let first = layout.placement("first").unwrap();
        let second = layout.placement("second").unwrap();
        let other = layout.placement("other").unwrap();

        assert!(approx_eq!(f32, first.min_x(), 36.0));
        assert!(approx_eq!(f32, first.min_y(), 64.0));
        assert!(approx_eq!(f32, second.min_x(), 36.0));
        assert!(approx_eq!(f32, second.min_y(), 64.0 + 88.0 + 32.0));
        assert!(approx_eq!(f32, other.min_x(), 36.0 + 220.0 + 48.0));
        assert!(approx_eq!(f32, other.width(), 220.0));
        assert!(approx_eq!(f32, other.height(), 88.0));

        let columns = layout.columns();
        assert!(approx_eq!(f32, columns[0].x(), 36.0));
        assert!(approx_eq!(f32, columns[1].x(), other.min_x()));
        assert_eq!(columns[0].rows(), 2);
    }

    #[test]
    fn test_canvas_size() {
        let mut model = Model::default();
        model.add_element(part("a", Some("P")));
        model.add_element(part("b", Some("P")));
        model.add_element(part("c", Some("P")));
        model.add_element(part("d", None));

        let layout = Layout::compute(&model, &LayoutConfig::default());
        let canvas = layout.canvas_size();
        assert!(approx_eq!(f32, canvas.width(), 2.0 * 36.0 + 2.0 * 220.0 + 48.0));
        assert!(approx_eq!(f32, canvas.height(), 2.0 * 64.0 + 3.0 * 88.0 + 2.0 * 32.0));
    }

    #[test]
    fn test_package_elements_are_not_placed() {
        let mut model = Model::default();
        model.add_element(Element::new("Pkg", ElementKind::Package));
        model.add_element(part("a", None));

        let layout = Layout::compute(&model, &LayoutConfig::default());
        assert!(layout.placement("Pkg").is_none());
        assert!(layout.placement("a").is_some());
    }

    #[test]
    fn test_header_anchor_is_centered() {
        let mut model = Model::default();
        model.add_element(part("a", None));

        let layout = Layout::compute(&model, &LayoutConfig::default());
        let anchor = layout.header_anchor(&layout.columns()[0]);
        assert!(approx_eq!(f32, anchor.x(), 36.0 + 110.0));
        assert!(approx_eq!(f32, anchor.y(), 32.0));
    }
}
