//! Pattern-based relation extraction for lines that are not definitions.

use std::sync::LazyLock;

use log::trace;
use regex::Regex;
use sysgram_core::model::{Relation, RelationKind};

use crate::identifier::clean_identifier;

static CONNECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bconnect\s+(?P<src>\S+)\s+(?:to|with)\s+(?P<dst>[^\s;]+)")
        .expect("connect pattern is valid")
});

static FLOW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bfrom\s+(?P<src>\S+)\s+to\s+(?P<dst>[^\s;]+)").expect("flow pattern is valid")
});

static ROLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:subject|actor|item|port)\s+(?P<src>[\w\.]+)\s*:\s*(?P<dst>[^\s;]+)")
        .expect("role pattern is valid")
});

/// The three scans, with the relation each match produces.
fn patterns() -> [(&'static Regex, RelationKind, &'static str); 3] {
    [
        (&*CONNECT, RelationKind::Connects, "connects"),
        (&*FLOW, RelationKind::Flows, "flows"),
        (&*ROLE, RelationKind::Typed, "role"),
    ]
}

/// Scan `line` with every relation pattern.
///
/// Patterns are independent, so one line may yield relations of several
/// kinds. Matches whose source or target cleans to an empty name are dropped.
pub(crate) fn extract_relations(line: &str) -> Vec<Relation> {
    let mut relations = Vec::new();

    for (pattern, kind, label) in patterns() {
        for captures in pattern.captures_iter(line) {
            let source = captures
                .name("src")
                .map(|m| clean_identifier(m.as_str()))
                .unwrap_or_default();
            let target = captures
                .name("dst")
                .map(|m| clean_identifier(m.as_str()))
                .unwrap_or_default();
            if source.is_empty() || target.is_empty() {
                continue;
            }

            trace!(
                source = source.as_str(),
                target = target.as_str(),
                kind = kind.as_str();
                "Relation matched"
            );
            relations.push(Relation::new(source, target, kind, label));
        }
    }

    relations
}
