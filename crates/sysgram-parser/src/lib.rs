//! # Sysgram Parser
//!
//! Heuristic extractor for SysML v2 textual notation. The grammar is only
//! approximated: lines are classified as package headers, element
//! definitions or usages, or relation statements, and anything else is
//! skipped. Extraction never fails on document content.
//!
//! ## Usage
//!
//! ```
//! use sysgram_parser::parse;
//!
//! let model = parse(
//!     "package Vehicle { part def Car :> Machine; }",
//!     Some("vehicle.sysml"),
//! );
//! assert_eq!(model.element("Car").unwrap().package(), Some("Vehicle"));
//! assert!(model.element("Machine").unwrap().is_external());
//! ```

mod comment;
mod definition;
mod extractor;
mod identifier;
mod relation;
mod scope;
mod statement;
mod tokenizer;

use sysgram_core::model::Model;

use extractor::Extractor;

/// Extract a graph model from SysML v2 text.
///
/// The pass is single-threaded and line oriented:
///
/// 1. **Strip** block comments
/// 2. **Split** each line into statements, tracking package scopes by brace depth
/// 3. **Classify** each statement as a package header, a definition or a relation
/// 4. **Finalize** relation endpoints, adding external stubs for unknown names
///
/// # Arguments
///
/// * `text` - The document text
/// * `source` - Optional provenance label stored on the model
///
/// # Returns
///
/// A finalized [`Model`]. Unrecognized lines leave no trace in it.
pub fn parse(text: &str, source: Option<&str>) -> Model {
    Extractor::new(source).run(text)
}
