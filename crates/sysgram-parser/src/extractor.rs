//! Line-oriented extraction pass.

use std::sync::LazyLock;

use log::{debug, info};
use regex::Regex;
use sysgram_core::model::Model;

use crate::{
    comment::{split_line_comment, strip_block_comments},
    definition::{implied_relations, parse_definition},
    identifier::clean_identifier,
    relation::extract_relations,
    scope::{ScopeStack, brace_delta},
    statement::split_statements,
    tokenizer::tokenize,
};

static PACKAGE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)^package\s+('[^']*'|"[^"]*"|[^\s{;]+)"#)
        .expect("package header pattern is valid")
});

/// Brace depth at which a `doc` statement documents the enclosing package.
const PACKAGE_BODY_DEPTH: i32 = 1;

/// Single-use state of one extraction pass.
pub(crate) struct Extractor {
    model: Model,
    scopes: ScopeStack,
}

impl Extractor {
    pub(crate) fn new(source: Option<&str>) -> Self {
        Self {
            model: Model::new(source.map(str::to_string)),
            scopes: ScopeStack::default(),
        }
    }

    /// Consume `text` and return the finalized model.
    pub(crate) fn run(mut self, text: &str) -> Model {
        let text = strip_block_comments(text);

        for line in text.lines() {
            let (code, comment) = split_line_comment(line);
            for statement in split_statements(code) {
                self.process_statement(statement.trim());
                self.scopes.apply_braces(statement);
            }
            // Braces in a trailing comment still count toward the line's balance.
            if let Some(comment) = comment {
                self.scopes.apply_delta(brace_delta(comment));
            }
        }

        self.model.finalize_relation_endpoints();

        info!(
            source = self.model.source().unwrap_or("<inline>"),
            packages = self.model.packages().count(),
            elements = self.model.elements().count(),
            relations = self.model.relations().len(),
            unclosed_scopes = self.scopes.len();
            "Extraction finished"
        );
        self.model
    }

    fn process_statement(&mut self, statement: &str) {
        if statement.is_empty() || statement == "{" || statement == "}" {
            return;
        }

        if let Some(package) = package_header(statement) {
            debug!(package = package.as_str(); "Package opened");
            self.model.add_package(&package);
            self.scopes.push(package);
            return;
        }

        let tokens = tokenize(statement);

        if let Some(tokens) = &tokens {
            if self.try_package_doc(tokens) {
                return;
            }
            if let Some(element) = parse_definition(tokens, self.scopes.current()) {
                debug!(
                    name = element.name(),
                    kind = element.kind().as_str(),
                    package = element.package().unwrap_or("");
                    "Definition recognized"
                );
                let relations = implied_relations(&element);
                self.model.add_element(element);
                for relation in relations {
                    self.model.add_relation(relation);
                }
                return;
            }
        }

        for relation in extract_relations(statement) {
            self.model.add_relation(relation);
        }
    }

    /// Handle `doc "..."` directly inside a package body.
    fn try_package_doc(&mut self, tokens: &[String]) -> bool {
        let Some((first, rest)) = tokens.split_first() else {
            return false;
        };
        if !first.eq_ignore_ascii_case("doc") {
            return false;
        }
        let Some(package) = self.scopes.current() else {
            return false;
        };
        if self.scopes.current_depth() != Some(PACKAGE_BODY_DEPTH) {
            return false;
        }

        let package = package.to_string();
        let description = clean_identifier(&rest.join(" "));
        self.model.set_package_description(&package, &description);
        true
    }
}

/// Name declared by a `package` header, if `statement` is one.
fn package_header(statement: &str) -> Option<String> {
    let captures = PACKAGE_HEADER.captures(statement)?;
    let name = clean_identifier(captures.get(1)?.as_str());
    (!name.is_empty()).then_some(name)
}
