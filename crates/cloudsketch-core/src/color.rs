//! Color handling for diagram elements.
//!
//! Colors are accepted as CSS color strings ("#ff0000", "rgb(255, 0, 0)",
//! "red", ...) and validated at construction. The original string is kept and
//! emitted verbatim, since Graphviz understands color names and hex triplets
//! but not CSS4 function syntax.

use std::str::FromStr;

use color::DynamicColor;
use thiserror::Error;

/// Error produced when a color string cannot be parsed.
#[derive(Debug, Error)]
#[error("invalid color '{input}': {reason}")]
pub struct ColorError {
    input: String,
    reason: String,
}

/// A validated color for nodes, edges, and cluster styling.
///
/// Parsing goes through the `DynamicColor` type from the color crate once,
/// in [`Color::new`]; the validated source string is what ends up in the
/// exported diagram.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Color {
    raw: String,
}

impl Color {
    /// Create a new `Color` from a CSS color string.
    pub fn new(color_str: &str) -> Result<Self, ColorError> {
        match DynamicColor::from_str(color_str) {
            Ok(_) => Ok(Color {
                raw: color_str.to_string(),
            }),
            Err(err) => Err(ColorError {
                input: color_str.to_string(),
                reason: err.to_string(),
            }),
        }
    }

    /// The validated source string, as passed to [`Color::new`].
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_and_hex_colors() {
        for input in ["red", "#2D3436", "rgb(255, 0, 0)"] {
            let color = Color::new(input).expect("should parse");
            assert_eq!(color.as_str(), input);
        }
    }

    #[test]
    fn rejects_garbage() {
        assert!(Color::new("not-a-color!!").is_err());
    }

    #[test]
    fn default_is_black() {
        assert_eq!(Color::default().as_str(), "black");
    }
}
