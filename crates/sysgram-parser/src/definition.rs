//! Recognition of element definitions and usages.
//!
//! A definition line has the shape
//!
//! ```text
//! [modifier...] kind [def|usage] name [classifier target, target...] [{]
//! ```
//!
//! where the classifier is `:` (typed by), `:>` or `:>>` (specializes), or one
//! of the keyword spellings `typed by`, `defined by`, `specializes`,
//! `subsets`, `redefines`.

use sysgram_core::model::{Element, ElementKind, Flavor, Relation, RelationKind};

use crate::identifier::clean_identifier;

/// Keywords consumed as modifier tags in front of the kind keyword.
const MODIFIER_KEYWORDS: &[&str] = &[
    "individual",
    "abstract",
    "variation",
    "ref",
    "in",
    "out",
    "inout",
    "end",
    "derived",
    "readonly",
    "private",
    "public",
    "protected",
];

/// Leading keywords of statements that never declare an element.
const STATEMENT_KEYWORDS: &[&str] = &[
    "connect",
    "flow",
    "message",
    "succession",
    "first",
    "then",
    "bind",
    "import",
    "alias",
    "doc",
    "comment",
    "dependency",
    "allocate",
    "expose",
    "from",
    "to",
    "and",
];

/// Tokens that end a classifier target list without being part of it.
const STOP_TOKENS: &[&str] = &[
    "{", "}", "connect", "from", "to", "and", "=", ":=", "default",
];

/// Which list a classifier symbol feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Classifier {
    TypeOf,
    Specializes,
}

/// Try to read `tokens` as an element definition.
///
/// Returns `None` when the tokens do not form a definition; the caller then
/// falls back to relation scanning.
pub(crate) fn parse_definition(tokens: &[String], package: Option<&str>) -> Option<Element> {
    let mut rest = tokens;
    let mut modifiers = Vec::new();

    // A modifier needs a kind and a name after it; in `end a : A` the
    // keyword itself is the kind.
    while let [first, _, name, ..] = rest {
        let lowered = first.to_lowercase();
        if !MODIFIER_KEYWORDS.contains(&lowered.as_str()) || is_classifier_symbol(name) {
            break;
        }
        modifiers.push(lowered);
        rest = &rest[1..];
    }

    let (kind_token, after_kind) = rest.split_first()?;
    let mut kind = kind_token.to_lowercase();
    rest = after_kind;

    if let Some(second) = rest.first().map(|token| token.to_lowercase()) {
        let combined = match (kind.as_str(), second.as_str()) {
            ("use" | "analysis" | "verification", "case") | ("value", "type") => {
                Some(format!("{kind} {second}"))
            }
            _ => None,
        };
        if let Some(combined) = combined {
            kind = combined;
            rest = &rest[1..];
        }
    }

    if kind == "package" || STATEMENT_KEYWORDS.contains(&kind.as_str()) || !is_keyword(&kind) {
        return None;
    }

    let flavor = rest.first().and_then(|token| token.parse::<Flavor>().ok());
    if flavor.is_some() {
        rest = &rest[1..];
    }

    let (name_token, after_name) = rest.split_first()?;
    let name = clean_identifier(name_token);
    if name.is_empty() || is_classifier_symbol(&name) {
        return None;
    }

    let mut type_of = Vec::new();
    let mut specializes = Vec::new();
    if let Some((classifier, targets)) = find_classifier(after_name) {
        let values = collect_identifiers(targets);
        match classifier {
            Classifier::TypeOf => type_of = values,
            Classifier::Specializes => specializes = values,
        }
    }

    Some(
        Element::new(name, ElementKind::from(kind.as_str()))
            .with_flavor(flavor)
            .with_package(package.map(str::to_string))
            .with_type_of(type_of)
            .with_specializes(specializes)
            .with_modifiers(modifiers),
    )
}

/// Relations implied by a parsed definition: one per specialization parent
/// and one per type-of target.
pub(crate) fn implied_relations(element: &Element) -> Vec<Relation> {
    let typed_label = if element.flavor() == Some(Flavor::Definition) {
        "typed by"
    } else {
        "uses"
    };

    let specializations = element.specializes().iter().map(|parent| {
        Relation::new(
            element.name(),
            parent.as_str(),
            RelationKind::Specializes,
            "specializes",
        )
    });
    let typings = element.type_of().iter().map(|target| {
        Relation::new(
            element.name(),
            target.as_str(),
            RelationKind::Typed,
            typed_label,
        )
    });

    specializations.chain(typings).collect()
}

fn is_classifier_symbol(token: &str) -> bool {
    matches!(token, ":" | ":>" | ":>>")
}

/// Kind keywords must start like an identifier.
fn is_keyword(kind: &str) -> bool {
    kind.chars()
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_')
}

/// Locate the first classifier and return the tokens following it.
fn find_classifier(tokens: &[String]) -> Option<(Classifier, &[String])> {
    for (idx, token) in tokens.iter().enumerate() {
        let lowered = token.to_lowercase();
        let classifier = match lowered.as_str() {
            ":" => Some((Classifier::TypeOf, idx + 1)),
            ":>" | ":>>" | "specializes" | "subsets" | "redefines" => {
                Some((Classifier::Specializes, idx + 1))
            }
            "typed" | "defined"
                if tokens
                    .get(idx + 1)
                    .is_some_and(|next| next.eq_ignore_ascii_case("by")) =>
            {
                Some((Classifier::TypeOf, idx + 2))
            }
            _ => None,
        };
        if let Some((classifier, start)) = classifier {
            return Some((classifier, &tokens[start..]));
        }
    }
    None
}

/// Clean every token up to the first stop token, skipping ones that clean to nothing.
fn collect_identifiers(tokens: &[String]) -> Vec<String> {
    let mut values = Vec::new();
    for token in tokens {
        if STOP_TOKENS.contains(&token.to_lowercase().as_str()) {
            break;
        }
        let cleaned = clean_identifier(token);
        if cleaned.is_empty() {
            continue;
        }
        if STOP_TOKENS.contains(&cleaned.as_str()) {
            break;
        }
        values.push(cleaned);
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn definition(line: &str) -> Option<Element> {
        let tokens = tokenize(line).expect("line should tokenize");
        parse_definition(&tokens, Some("P"))
    }

    #[test]
    fn test_part_usage_with_type() {
        let element = definition("part engine : Engine;").unwrap();
        assert_eq!(element.name(), "engine");
        assert_eq!(element.kind(), &ElementKind::Part);
        assert_eq!(element.flavor(), None);
        assert_eq!(element.package(), Some("P"));
        assert_eq!(element.type_of(), ["Engine"]);
    }

    #[test]
    fn test_definition_with_specialization_list() {
        let element = definition("part def Car :> Vehicle, Asset {").unwrap();
        assert_eq!(element.flavor(), Some(Flavor::Definition));
        assert_eq!(element.specializes(), ["Vehicle", "Asset"]);
        assert!(element.type_of().is_empty());
    }

    #[test]
    fn test_redefinition_counts_as_specialization() {
        let element = definition("attribute mass :>> Base::mass;").unwrap();
        assert_eq!(element.specializes(), ["Base::mass"]);
    }

    #[test]
    fn test_two_word_kinds() {
        assert_eq!(
            definition("use case def Drive;").unwrap().kind(),
            &ElementKind::UseCase
        );
        assert_eq!(
            definition("value type Speed;").unwrap().kind(),
            &ElementKind::ValueType
        );
    }

    #[test]
    fn test_individual_is_a_modifier() {
        let element = definition("individual part def MyCar :> Car;").unwrap();
        assert_eq!(element.kind(), &ElementKind::Part);
        assert_eq!(element.modifiers(), ["individual"]);
        assert_eq!(element.flavor(), Some(Flavor::Definition));
    }

    #[test]
    fn test_modifier_keyword_before_typed_name_is_the_kind() {
        let element = definition("end a : Port;").unwrap();
        assert_eq!(element.name(), "a");
        assert_eq!(element.kind().to_string(), "end");
        assert_eq!(element.type_of(), ["Port"]);
        assert!(element.modifiers().is_empty());

        let element = definition("in x :> Base").unwrap();
        assert_eq!(element.name(), "x");
        assert_eq!(element.kind().to_string(), "in");
        assert_eq!(element.specializes(), ["Base"]);

        let element = definition("ref y;").unwrap();
        assert_eq!(element.name(), "y");
        assert_eq!(element.kind().to_string(), "ref");
    }

    #[test]
    fn test_modifier_before_kind_is_still_a_modifier() {
        let element = definition("ref part wheel : Wheel").unwrap();
        assert_eq!(element.name(), "wheel");
        assert_eq!(element.kind(), &ElementKind::Part);
        assert_eq!(element.modifiers(), ["ref"]);

        let element = definition("in item fuel : Fuel").unwrap();
        assert_eq!(element.kind(), &ElementKind::Item);
        assert_eq!(element.modifiers(), ["in"]);
    }

    #[test]
    fn test_classifier_symbol_is_never_a_name() {
        assert!(definition("part : T").is_none());
        assert!(definition("part def :> T").is_none());
    }

    #[test]
    fn test_package_keyword_is_not_a_definition() {
        assert!(definition("package Vehicle").is_none());
    }

    #[test]
    fn test_statement_keywords_are_not_definitions() {
        assert!(definition("connect a to b").is_none());
        assert!(definition("flow from a to b").is_none());
        assert!(definition("import ISQ::*").is_none());
    }

    #[test]
    fn test_missing_or_empty_name() {
        assert!(definition("part").is_none());
        assert!(definition("part def {").is_none());
        assert!(definition("}").is_none());
    }

    #[test]
    fn test_collection_stops_at_structural_tokens() {
        let element = definition("part x : A, B { connect y to z").unwrap();
        assert_eq!(element.type_of(), ["A", "B"]);

        let element = definition("attribute m : Real = 100").unwrap();
        assert_eq!(element.type_of(), ["Real"]);
    }

    #[test]
    fn test_glued_classifier() {
        let element = definition("port p:Plug").unwrap();
        assert_eq!(element.name(), "p");
        assert_eq!(element.type_of(), ["Plug"]);
    }

    #[test]
    fn test_keyword_classifiers() {
        let element = definition("part def Car specializes Vehicle").unwrap();
        assert_eq!(element.specializes(), ["Vehicle"]);

        let element = definition("part car typed by Car").unwrap();
        assert_eq!(element.type_of(), ["Car"]);
    }

    #[test]
    fn test_unknown_kind_kept() {
        let element = definition("viewpoint def Safety;").unwrap();
        assert_eq!(element.kind().to_string(), "viewpoint");
    }

    #[test]
    fn test_implied_relation_labels() {
        let definition_element = definition("part def Car :> Vehicle").unwrap();
        let relations = implied_relations(&definition_element);
        assert_eq!(relations.len(), 1);
        assert_eq!(relations[0].kind(), RelationKind::Specializes);
        assert_eq!(relations[0].label(), "specializes");

        let typed_def = definition("port def Plug : Connector").unwrap();
        assert_eq!(implied_relations(&typed_def)[0].label(), "typed by");

        let usage = definition("part engine : Engine").unwrap();
        let relation = &implied_relations(&usage)[0];
        assert_eq!(relation.source(), "engine");
        assert_eq!(relation.target(), "Engine");
        assert_eq!(relation.kind(), RelationKind::Typed);
        assert_eq!(relation.label(), "uses");
    }
}
