//! Color registry for palette lookup.
//!
//! The `ColorRegistry` stores every color a game can reference.
//! It provides fast lookup by name and supports iteration.

use rustc_hash::FxHashMap;

use super::color::{ColorDefinition, Rgb};
use super::TableError;

/// Registry of palette colors.
///
/// Games register their palette once at startup; afterwards the registry
/// is only read. The round engine takes ownership and exposes shared
/// access, so nothing can mutate it mid-session.
///
/// ## Example
///
/// ```
/// use mezcla::tables::{ColorRegistry, ColorDefinition, Rgb};
///
/// let mut registry = ColorRegistry::new();
/// registry.register(ColorDefinition::new("azul", Rgb::new(0, 0, 255)));
///
/// assert_eq!(registry.lookup("azul").unwrap().to_hex(), "#0000ff");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ColorRegistry {
    colors: FxHashMap<String, ColorDefinition>,
}

impl ColorRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a color definition.
    ///
    /// Panics if a color with the same name already exists.
    pub fn register(&mut self, color: ColorDefinition) {
        if self.colors.contains_key(&color.name) {
            panic!("Color {:?} already registered", color.name);
        }
        self.colors.insert(color.name.clone(), color);
    }

    /// Register a color from its name and channel values.
    pub fn register_rgb(&mut self, name: impl Into<String>, rgb: impl Into<Rgb>) {
        self.register(ColorDefinition::new(name, rgb));
    }

    /// Get a color definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ColorDefinition> {
        self.colors.get(name)
    }

    /// Get a color definition by name, panicking if not found.
    ///
    /// Use on paths that run after table validation.
    #[must_use]
    pub fn get_unchecked(&self, name: &str) -> &ColorDefinition {
        self.colors.get(name).expect("Color not found in registry")
    }

    /// Resolve a name to its channel values.
    ///
    /// Fails with [`TableError::UnknownColor`] if the name is absent.
    /// An absent name means the static tables were built wrong, not that
    /// a player did anything unusual.
    pub fn lookup(&self, name: &str) -> Result<Rgb, TableError> {
        self.colors
            .get(name)
            .map(|color| color.rgb)
            .ok_or_else(|| TableError::UnknownColor(name.to_string()))
    }

    /// Check if a color name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    /// Get the number of registered colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterate over all color definitions.
    pub fn iter(&self) -> impl Iterator<Item = &ColorDefinition> {
        self.colors.values()
    }

    /// Iterate over all registered names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }
}
