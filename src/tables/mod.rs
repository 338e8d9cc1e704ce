//! Static lookup tables: the color palette and the mix rules.
//!
//! ## Key Types
//!
//! - `Rgb`: 8-bit channel color value with hex rendering
//! - `ColorDefinition`: immutable name + value palette entry
//! - `ColorRegistry`: name lookup for palette entries
//! - `MixRule`: ordered ingredient pair producing a result color
//! - `MixTable`: result lookup and the round-generation universe
//!
//! Both tables are built once at startup and read-only afterwards. The
//! consistency invariant between them - every name a mix rule mentions
//! resolves in the registry - is enforced by `MixTable::validate`, which
//! the round engine runs at construction.

pub mod color;
pub mod mixes;
pub mod registry;

pub use color::{ColorDefinition, Rgb};
pub use mixes::{MixRule, MixTable};
pub use registry::ColorRegistry;

/// Errors from table lookups.
///
/// Both kinds indicate an inconsistency in the static tables - a
/// configuration error caught at startup, not a recoverable runtime
/// condition. Guess evaluation never produces these: an unrecognized
/// guess is simply incorrect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableError {
    /// A color name is missing from the registry.
    UnknownColor(String),
    /// A result name is missing from the mix table.
    UnknownMix(String),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::UnknownColor(name) => write!(f, "unknown color {:?}", name),
            TableError::UnknownMix(name) => write!(f, "unknown mix result {:?}", name),
        }
    }
}

impl std::error::Error for TableError {}
