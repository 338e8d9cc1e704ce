//! Classic game tables and builder.

use crate::core::Session;
use crate::rounds::{RoundEngine, DEFAULT_OPTION_COUNT};
use crate::tables::{ColorRegistry, MixTable};

/// The classic palette: every color the game can display.
///
/// Channel values are kept exactly as shipped; "violeta" is the CSS
/// violet rather than a spectral one, and the tertiaries reuse CSS
/// named-color values (yellowgreen, gold, orangered, mediumvioletred,
/// blueviolet, darkturquoise).
#[must_use]
pub fn classic_registry() -> ColorRegistry {
    let mut registry = ColorRegistry::new();

    // Primaries
    registry.register_rgb("rojo", [255, 0, 0]);
    registry.register_rgb("azul", [0, 0, 255]);
    registry.register_rgb("amarillo", [255, 255, 0]);

    // Secondaries
    registry.register_rgb("verde", [0, 255, 0]);
    registry.register_rgb("naranja", [255, 165, 0]);
    registry.register_rgb("violeta", [238, 130, 238]);

    // Tertiaries
    registry.register_rgb("amarilloVerde", [154, 205, 50]);
    registry.register_rgb("amarilloNaranja", [255, 215, 0]);
    registry.register_rgb("rojoNaranja", [255, 69, 0]);
    registry.register_rgb("rojoVioleta", [199, 21, 133]);
    registry.register_rgb("azulVioleta", [138, 43, 226]);
    registry.register_rgb("azulVerde", [0, 206, 209]);

    registry
}

/// The classic mix rules: secondaries from primary pairs, tertiaries
/// from a primary and a neighboring secondary.
#[must_use]
pub fn classic_mix_table() -> MixTable {
    let mut table = MixTable::new();

    table.register_pair("verde", "amarillo", "azul");
    table.register_pair("naranja", "amarillo", "rojo");
    table.register_pair("violeta", "azul", "rojo");
    table.register_pair("amarilloVerde", "amarillo", "verde");
    table.register_pair("amarilloNaranja", "amarillo", "naranja");
    table.register_pair("rojoNaranja", "rojo", "naranja");
    table.register_pair("rojoVioleta", "rojo", "violeta");
    table.register_pair("azulVioleta", "azul", "violeta");
    table.register_pair("azulVerde", "azul", "verde");

    table
}

/// Builder for a classic game session.
pub struct ClassicGameBuilder {
    option_count: usize,
}

impl Default for ClassicGameBuilder {
    fn default() -> Self {
        Self {
            option_count: DEFAULT_OPTION_COUNT,
        }
    }
}

impl ClassicGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of choices shown per round.
    pub fn option_count(mut self, count: usize) -> Self {
        assert!((2..=9).contains(&count), "Option count must be 2-9");
        self.option_count = count;
        self
    }

    /// Build the engine and a fresh session.
    pub fn build(self, seed: u64) -> (RoundEngine, Session) {
        let engine =
            RoundEngine::with_option_count(classic_registry(), classic_mix_table(), self.option_count)
                .expect("Classic tables are consistent");

        (engine, Session::new(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_table_sizes() {
        assert_eq!(classic_registry().len(), 12);
        assert_eq!(classic_mix_table().len(), 9);
    }

    #[test]
    fn test_classic_tables_are_consistent() {
        assert!(classic_mix_table().validate(&classic_registry()).is_ok());
    }

    #[test]
    fn test_primaries_are_not_results() {
        let registry = classic_registry();
        let table = classic_mix_table();

        let mut primaries: Vec<_> = registry
            .names()
            .filter(|name| !table.contains(name))
            .collect();
        primaries.sort_unstable();

        assert_eq!(primaries, vec!["amarillo", "azul", "rojo"]);
    }

    #[test]
    fn test_builder_defaults() {
        let (engine, session) = ClassicGameBuilder::new().build(42);

        assert_eq!(engine.option_count(), 3);
        assert_eq!(session.score(), 0);
    }

    #[test]
    #[should_panic(expected = "Option count must be 2-9")]
    fn test_builder_rejects_oversized_option_count() {
        let _ = ClassicGameBuilder::new().option_count(10);
    }

    #[test]
    fn test_naranja_ingredients() {
        let table = classic_mix_table();
        let (a, b) = table.ingredients_of("naranja").unwrap();
        assert_eq!((a, b), ("amarillo", "rojo"));
    }
}
