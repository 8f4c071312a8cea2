//! Element kind and flavor tags.

use std::{fmt, str::FromStr};

/// The modeling construct an element represents.
///
/// Known SysML keywords map onto dedicated variants; anything else is kept
/// verbatim (lower-cased) in [`ElementKind::Other`] so new keywords still
/// round-trip to the diagram.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Part,
    Attribute,
    Port,
    Item,
    Action,
    State,
    Requirement,
    Constraint,
    UseCase,
    ValueType,
    AnalysisCase,
    VerificationCase,
    Interface,
    Connection,
    Enum,
    Occurrence,
    Calc,
    Package,
    /// Sentinel for stubs synthesized from relation endpoints.
    External,
    Other(String),
}

impl ElementKind {
    /// Keyword text of this kind, as written in the source language.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Part => "part",
            Self::Attribute => "attribute",
            Self::Port => "port",
            Self::Item => "item",
            Self::Action => "action",
            Self::State => "state",
            Self::Requirement => "requirement",
            Self::Constraint => "constraint",
            Self::UseCase => "use case",
            Self::ValueType => "value type",
            Self::AnalysisCase => "analysis case",
            Self::VerificationCase => "verification case",
            Self::Interface => "interface",
            Self::Connection => "connection",
            Self::Enum => "enum",
            Self::Occurrence => "occurrence",
            Self::Calc => "calc",
            Self::Package => "package",
            Self::External => "external",
            Self::Other(keyword) => keyword,
        }
    }

    /// Returns `true` for package pseudo-elements, which render as columns only.
    pub fn is_package(&self) -> bool {
        matches!(self, Self::Package)
    }
}

impl From<&str> for ElementKind {
    fn from(keyword: &str) -> Self {
        let lowered = keyword.trim().to_lowercase();
        match lowered.as_str() {
            "part" => Self::Part,
            "attribute" => Self::Attribute,
            "port" => Self::Port,
            "item" => Self::Item,
            "action" => Self::Action,
            "state" => Self::State,
            "requirement" => Self::Requirement,
            "constraint" => Self::Constraint,
            "use case" => Self::UseCase,
            "value type" => Self::ValueType,
            "analysis case" => Self::AnalysisCase,
            "verification case" => Self::VerificationCase,
            "interface" => Self::Interface,
            "connection" => Self::Connection,
            "enum" => Self::Enum,
            "occurrence" => Self::Occurrence,
            "calc" => Self::Calc,
            "package" => Self::Package,
            "external" => Self::External,
            _ => Self::Other(lowered),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distinguishes a definition (`part def Engine`) from a usage (`part engine`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    Definition,
    Usage,
}

impl Flavor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Definition => "def",
            Self::Usage => "usage",
        }
    }
}

impl FromStr for Flavor {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "def" => Ok(Self::Definition),
            "usage" => Ok(Self::Usage),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
