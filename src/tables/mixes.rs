//! Mix rules: which pair of colors produces which result.
//!
//! The `MixTable` doubles as the sampling universe for round generation:
//! targets and distractors are both drawn from its result names.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::registry::ColorRegistry;
use super::TableError;

/// A single mix rule: two ingredient colors and the color they produce.
///
/// Ingredient order is significant for display (left and right source
/// swatch) and is preserved exactly as registered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixRule {
    /// Name of the resulting color.
    pub result: String,

    /// Names of the two source colors.
    pub ingredients: (String, String),
}

impl MixRule {
    /// Create a new mix rule.
    #[must_use]
    pub fn new(result: impl Into<String>, a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            result: result.into(),
            ingredients: (a.into(), b.into()),
        }
    }
}

/// Table of mix rules, keyed by result name.
///
/// Result names keep registration order so that target sampling under a
/// fixed seed yields a fixed round sequence; hash-map iteration order is
/// not part of any contract.
#[derive(Clone, Debug, Default)]
pub struct MixTable {
    rules: FxHashMap<String, MixRule>,
    order: Vec<String>,
}

impl MixTable {
    /// Create a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mix rule.
    ///
    /// Panics if a rule for the same result already exists.
    pub fn register(&mut self, rule: MixRule) {
        if self.rules.contains_key(&rule.result) {
            panic!("Mix rule for {:?} already registered", rule.result);
        }
        self.order.push(rule.result.clone());
        self.rules.insert(rule.result.clone(), rule);
    }

    /// Register a rule from its parts.
    pub fn register_pair(
        &mut self,
        result: impl Into<String>,
        a: impl Into<String>,
        b: impl Into<String>,
    ) {
        self.register(MixRule::new(result, a, b));
    }

    /// Get a mix rule by result name.
    #[must_use]
    pub fn get(&self, result: &str) -> Option<&MixRule> {
        self.rules.get(result)
    }

    /// Resolve a result name to its ingredient pair.
    ///
    /// Fails with [`TableError::UnknownMix`] if no rule produces `result`.
    pub fn ingredients_of(&self, result: &str) -> Result<(&str, &str), TableError> {
        self.rules
            .get(result)
            .map(|rule| (rule.ingredients.0.as_str(), rule.ingredients.1.as_str()))
            .ok_or_else(|| TableError::UnknownMix(result.to_string()))
    }

    /// Check if a result name has a rule.
    #[must_use]
    pub fn contains(&self, result: &str) -> bool {
        self.rules.contains_key(result)
    }

    /// Get the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// All result names, in registration order.
    ///
    /// This is the sampling universe for targets and distractors.
    #[must_use]
    pub fn result_names(&self) -> &[String] {
        &self.order
    }

    /// Iterate over all rules, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &MixRule> {
        self.order.iter().map(|name| &self.rules[name])
    }

    /// Check that every name this table mentions resolves in `registry`.
    ///
    /// Run once at startup. A failure means the static tables disagree
    /// and the game must not start; there is nothing to recover at
    /// runtime.
    pub fn validate(&self, registry: &ColorRegistry) -> Result<(), TableError> {
        for rule in self.iter() {
            registry.lookup(&rule.result)?;
            registry.lookup(&rule.ingredients.0)?;
            registry.lookup(&rule.ingredients.1)?;
        }
        Ok(())
    }
}
