//! Export of laid-out models to markup.
//!
//! # Pipeline Position
//!
//! ```text
//! SysML text
//!     ↓ parse (sysgram-parser)
//! Model
//!     ↓ layout
//! Layout (columns, card placements, canvas size)
//!     ↓ export (this module)
//! SVG / HTML markup
//! ```
//!
//! # Available Backends
//!
//! - [`svg::Svg`] - standalone or inline SVG
//! - [`html::Html`] - inline SVG wrapped in a `<figure>`

pub mod html;
pub mod svg;

use sysgram_core::model::Model;

use crate::layout::Layout;

/// Abstraction over diagram export backends.
pub trait Exporter {
    /// Render `model`, placed according to `layout`, to markup text.
    ///
    /// Rendering is deterministic: the same model and layout always give
    /// the same output.
    fn export(&self, model: &Model, layout: &Layout) -> String;
}
