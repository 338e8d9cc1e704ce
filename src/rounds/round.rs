//! Round data: the question the player is being asked.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::tables::Rgb;

/// A named color swatch, resolved and ready to render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    /// Registry name of the color.
    pub name: String,

    /// Channel values for display.
    pub rgb: Rgb,
}

impl Swatch {
    /// Create a new swatch.
    #[must_use]
    pub fn new(name: impl Into<String>, rgb: Rgb) -> Self {
        Self {
            name: name.into(),
            rgb,
        }
    }
}

/// One quiz round: two source colors, a hidden target, and the options.
///
/// Rounds are immutable; the engine replaces the whole value after every
/// reveal. The reveal-in-progress flag lives on the `Session`, not here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// The mixed color the player must name. Its RGB drives the reveal
    /// animation.
    pub target: Swatch,

    /// The two source colors shown to the player, in rule order.
    pub ingredients: [Swatch; 2],

    /// Option names in presentation order: the target plus distractors,
    /// all distinct. Sized for the default three choices.
    pub options: SmallVec<[String; 3]>,
}

impl Round {
    /// Name of the correct answer.
    #[must_use]
    pub fn target_name(&self) -> &str {
        &self.target.name
    }

    /// Whether `name` is one of this round's options.
    #[must_use]
    pub fn has_option(&self, name: &str) -> bool {
        self.options.iter().any(|option| option == name)
    }

    /// Number of options presented.
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}
