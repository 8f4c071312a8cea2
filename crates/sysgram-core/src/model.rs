//! The in-memory graph extracted from one document.
//!
//! A [`Model`] owns three insertion-ordered collections:
//!
//! - [`Package`]s, keyed by name, created on first reference
//! - [`Element`]s, keyed by name, merged on re-declaration
//! - [`Relation`]s, append-only, duplicates allowed
//!
//! # Example
//!
//! ```
//! use sysgram_core::model::{Element, ElementKind, Model, Relation, RelationKind};
//!
//! let mut model = Model::new(Some("vehicle.sysml".to_string()));
//! model.add_package("Vehicle");
//! model.add_element(Element::new("Engine", ElementKind::Part).with_package(Some("Vehicle".into())));
//! model.add_relation(Relation::new("Engine", "Motor", RelationKind::Typed, "uses"));
//! model.finalize_relation_endpoints();
//!
//! assert!(model.element("Motor").unwrap().is_external());
//! ```

mod element;
mod kind;
mod package;
mod relation;

pub use element::Element;
pub use kind::{ElementKind, Flavor};
pub use package::Package;
pub use relation::{Relation, RelationKind};

use std::mem;

use indexmap::{IndexMap, map::Entry};
use log::debug;

/// Packages, elements and relations of a single parsed document.
#[derive(Debug, Clone, Default)]
pub struct Model {
    source: Option<String>,
    packages: IndexMap<String, Package>,
    elements: IndexMap<String, Element>,
    relations: Vec<Relation>,
}

impl Model {
    /// Creates an empty model.
    ///
    /// # Arguments
    ///
    /// * `source` - Optional provenance label (for example a file path) used in diagnostics.
    pub fn new(source: Option<String>) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }

    /// Provenance label of the document, if any.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Register a package by name, returning the existing record if present.
    pub fn add_package(&mut self, name: &str) -> &Package {
        self.packages
            .entry(name.to_string())
            .or_insert_with(|| Package::new(name))
    }

    /// Record a description for a package unless it already has one.
    ///
    /// The package is created if it does not exist yet.
    pub fn set_package_description(&mut self, name: &str, description: &str) {
        self.packages
            .entry(name.to_string())
            .or_insert_with(|| Package::new(name))
            .backfill_description(description);
    }

    /// Insert an element, merging it into an existing record with the same name.
    ///
    /// Returns the canonical record after the merge.
    pub fn add_element(&mut self, element: Element) -> &Element {
        match self.elements.entry(element.name().to_string()) {
            Entry::Occupied(entry) => {
                let slot = entry.into_mut();
                let existing = mem::replace(slot, Element::external(String::new()));
                *slot = existing.merge(element);
                slot
            }
            Entry::Vacant(entry) => entry.insert(element),
        }
    }

    /// Append a relation. Endpoints are not checked until finalization.
    pub fn add_relation(&mut self, relation: Relation) {
        self.relations.push(relation);
    }

    /// Ensure every relation endpoint resolves to an element.
    ///
    /// Names that were never defined get an external stub. Relations are not
    /// touched, and calling this again after it has run adds nothing.
    pub fn finalize_relation_endpoints(&mut self) {
        let missing: Vec<String> = self
            .relations
            .iter()
            .flat_map(|relation| [relation.source(), relation.target()])
            .filter(|name| !self.elements.contains_key(*name))
            .map(str::to_string)
            .collect();

        let before = self.elements.len();
        for name in missing {
            self.add_element(Element::external(name));
        }

        debug!(
            synthesized = self.elements.len() - before;
            "Relation endpoints finalized"
        );
    }

    pub fn packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.values()
    }

    pub fn package(&self, name: &str) -> Option<&Package> {
        self.packages.get(name)
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    pub fn element(&self, name: &str) -> Option<&Element> {
        self.elements.get(name)
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Returns `true` when the model holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
