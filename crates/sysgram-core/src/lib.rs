//! Sysgram Core Types
//!
//! This crate provides the foundational types shared by the sysgram
//! extractor and renderer:
//!
//! - **Model**: Packages, elements and relations of one document ([`model`] module)
//! - **Geometry**: Points, sizes and bounds used by layout ([`geometry`] module)
//! - **Colors**: CSS color parsing for styling ([`color::Color`])

pub mod color;
pub mod geometry;
pub mod model;
