//! Elements of the graph model and their merge semantics.

use super::kind::{ElementKind, Flavor};

/// A named modeling construct.
///
/// Element identity is its name. Two records with the same name are combined
/// with [`Element::merge`] rather than stored twice.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    kind: ElementKind,
    flavor: Option<Flavor>,
    package: Option<String>,
    type_of: Vec<String>,
    specializes: Vec<String>,
    modifiers: Vec<String>,
    external: bool,
}

impl Element {
    /// Creates an explicitly defined element with no package and no references.
    pub fn new(name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            name: name.into(),
            kind,
            flavor: None,
            package: None,
            type_of: Vec::new(),
            specializes: Vec::new(),
            modifiers: Vec::new(),
            external: false,
        }
    }

    /// Creates a stub for a name that was referenced but never defined.
    pub fn external(name: impl Into<String>) -> Self {
        Self {
            external: true,
            ..Self::new(name, ElementKind::External)
        }
    }

    pub fn with_flavor(mut self, flavor: Option<Flavor>) -> Self {
        self.flavor = flavor;
        self
    }

    pub fn with_package(mut self, package: Option<String>) -> Self {
        self.package = package.filter(|name| !name.is_empty());
        self
    }

    /// Sets the type-of references, dropping empty and repeated names.
    pub fn with_type_of<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_of = union(Vec::new(), names.into_iter().map(Into::into));
        self
    }

    /// Sets the specialization parents, dropping empty and repeated names.
    pub fn with_specializes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specializes = union(Vec::new(), names.into_iter().map(Into::into));
        self
    }

    /// Sets the modifier tags, dropping empty and repeated tags.
    pub fn with_modifiers<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modifiers = union(Vec::new(), tags.into_iter().map(Into::into));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    pub fn flavor(&self) -> Option<Flavor> {
        self.flavor
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    pub fn type_of(&self) -> &[String] {
        &self.type_of
    }

    pub fn specializes(&self) -> &[String] {
        &self.specializes
    }

    pub fn modifiers(&self) -> &[String] {
        &self.modifiers
    }

    /// `true` when the element was only inferred from a reference.
    pub fn is_external(&self) -> bool {
        self.external
    }

    /// Combine two records describing the same name into one.
    ///
    /// - The package is taken from `incoming` only when `self` has none.
    /// - Reference lists and modifiers are unioned in first-seen order.
    /// - The result is external only when both records are external.
    /// - Kind and flavor stay with `self`, except that an explicit `incoming`
    ///   replaces those of an external stub.
    pub fn merge(self, incoming: Element) -> Element {
        let promote = self.external && !incoming.external;

        Element {
            kind: if promote { incoming.kind } else { self.kind },
            flavor: if promote {
                incoming.flavor
            } else {
                self.flavor.or(incoming.flavor)
            },
            package: self.package.or(incoming.package),
            type_of: union(self.type_of, incoming.type_of),
            specializes: union(self.specializes, incoming.specializes),
            modifiers: union(self.modifiers, incoming.modifiers),
            external: self.external && incoming.external,
            name: self.name,
        }
    }
}

/// Append `extra` to `base`, skipping empty strings and anything already present.
fn union(mut base: Vec<String>, extra: impl IntoIterator<Item = String>) -> Vec<String> {
    for value in extra {
        if !value.is_empty() && !base.contains(&value) {
            base.push(value);
        }
    }
    base
}
