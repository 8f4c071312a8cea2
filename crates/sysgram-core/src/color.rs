//! CSS color handling for diagram styling.

use std::{fmt, str::FromStr};

use color::{DynamicColor, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate.
///
/// Accepts any CSS color string such as `"#ff0000"`, `"rgb(255, 0, 0)"` or `"red"`.
#[derive(Clone, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Parse a CSS color string.
    ///
    /// # Errors
    ///
    /// Returns a human-readable message when the string is not a valid CSS color.
    pub fn new(color_str: &str) -> Result<Self, String> {
        DynamicColor::from_str(color_str)
            .map(|color| Self { color })
            .map_err(|err| format!("Invalid color '{color_str}': {err}"))
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Hex notation in sRGB, `#rrggbb`, or `#rrggbbaa` when not fully opaque.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        write!(f, "#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)?;
        if rgba.a != u8::MAX {
            write!(f, "{:02x}", rgba.a)?;
        }
        Ok(())
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        svg::node::Value::from(color.to_string())
    }
}
