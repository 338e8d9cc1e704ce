//! Color definitions - static palette data.
//!
//! `ColorDefinition` holds the immutable properties of a palette entry:
//! its lookup name and its RGB value. Definitions are created at startup
//! and never change afterwards; runtime values built from them (rounds,
//! swatches) live in the `rounds` module.

use serde::{Deserialize, Serialize};

/// An RGB color value with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB value.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Get the raw channel values.
    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Render as a lowercase CSS hex string.
    ///
    /// ```
    /// use mezcla::tables::Rgb;
    ///
    /// assert_eq!(Rgb::new(0, 0, 255).to_hex(), "#0000ff");
    /// ```
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Static color definition.
///
/// The name is the lookup key everywhere in the engine; mix rules,
/// rounds, and guesses all refer to colors by name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorDefinition {
    /// Lookup name for this color.
    pub name: String,

    /// Channel values for display.
    pub rgb: Rgb,
}

impl ColorDefinition {
    /// Create a new color definition.
    #[must_use]
    pub fn new(name: impl Into<String>, rgb: impl Into<Rgb>) -> Self {
        Self {
            name: name.into(),
            rgb: rgb.into(),
        }
    }
}
