//! Directed, labeled edges between element names.

use std::fmt;

/// What a relation expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// Generalization (`:>`, `:>>`).
    Specializes,
    /// Typing or role binding (`:`).
    Typed,
    /// `connect a to b`.
    Connects,
    /// `from a to b`.
    Flows,
}

impl RelationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Specializes => "specializes",
            Self::Typed => "typed",
            Self::Connects => "connects",
            Self::Flows => "flows",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An edge from `source` to `target`.
///
/// Endpoints are names, not references; they are resolved against the
/// element index after extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    source: String,
    target: String,
    kind: RelationKind,
    label: String,
}

impl Relation {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        kind: RelationKind,
        label: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
            label: label.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn kind(&self) -> RelationKind {
        self.kind
    }

    /// Display label, falling back to the kind when empty.
    pub fn label(&self) -> &str {
        if self.label.is_empty() {
            self.kind.as_str()
        } else {
            &self.label
        }
    }
}
