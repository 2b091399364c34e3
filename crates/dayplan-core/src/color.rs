//! Color handling for Dayplan drawings
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, so configuration can use any CSS color string.

use std::str::FromStr;

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use dayplan_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates a new color with the specified alpha (transparency) value.
    ///
    /// # Examples
    ///
    /// ```
    /// use dayplan_core::color::Color;
    ///
    /// let accent = Color::new("#4b6ea9").unwrap();
    /// let tint = accent.with_alpha(0.15);
    /// assert_eq!(tint.alpha(), 0.15);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

impl From<Color> for svg::node::Value {
    fn from(color: Color) -> Self {
        Self::from(&color)
    }
}
