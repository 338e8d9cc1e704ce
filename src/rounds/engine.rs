//! The round engine: builds rounds and judges guesses.
//!
//! The engine owns the two validated tables. Construction runs the
//! table-consistency check, so every later lookup is infallible and
//! `start_round` cannot fail mid-session.

use smallvec::SmallVec;

use crate::core::{GuessRecord, Session};
use crate::tables::{ColorRegistry, MixTable, TableError};

use super::round::{Round, Swatch};

/// Default number of multiple-choice options per round.
pub const DEFAULT_OPTION_COUNT: usize = 3;

/// Outcome of a judged guess.
///
/// Both variants carry the true target name so the presentation layer
/// can show feedback either way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessResult {
    /// The guess named the target. Worth one point.
    Correct {
        /// The target that was guessed.
        target: String,
    },

    /// The guess named anything else, including names the tables have
    /// never heard of.
    Incorrect {
        /// The target that was missed.
        target: String,
    },
}

impl GuessResult {
    /// Whether the guess was correct.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, GuessResult::Correct { .. })
    }

    /// The true target name, for feedback display.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            GuessResult::Correct { target } | GuessResult::Incorrect { target } => target,
        }
    }
}

/// Round generator and guess judge over a validated palette.
#[derive(Clone, Debug)]
pub struct RoundEngine {
    registry: ColorRegistry,
    table: MixTable,
    option_count: usize,
}

impl RoundEngine {
    /// Create an engine over the given tables with the default option
    /// count.
    ///
    /// Runs the table-consistency check: every name the mix table
    /// mentions must resolve in the registry. A failure means the static
    /// tables were built wrong and the game must not start.
    ///
    /// Panics if the mix table has fewer results than the option count;
    /// with fewer there is no way to fill an option set with distinct
    /// names.
    pub fn new(registry: ColorRegistry, table: MixTable) -> Result<Self, TableError> {
        Self::with_option_count(registry, table, DEFAULT_OPTION_COUNT)
    }

    /// Create an engine presenting `option_count` choices per round.
    pub fn with_option_count(
        registry: ColorRegistry,
        table: MixTable,
        option_count: usize,
    ) -> Result<Self, TableError> {
        assert!(option_count >= 2, "Need at least 2 options per round");
        assert!(
            table.len() >= option_count,
            "Mix table has {} results but {} options are required",
            table.len(),
            option_count
        );

        table.validate(&registry)?;

        Ok(Self {
            registry,
            table,
            option_count,
        })
    }

    /// The color registry backing this engine.
    #[must_use]
    pub fn registry(&self) -> &ColorRegistry {
        &self.registry
    }

    /// The mix table backing this engine.
    #[must_use]
    pub fn table(&self) -> &MixTable {
        &self.table
    }

    /// Number of options presented per round.
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.option_count
    }

    /// Start a new round.
    ///
    /// Picks a uniform target from the mix results, resolves its
    /// ingredients, and samples distractors by shuffling the rest of the
    /// universe. The returned options are already in presentation order.
    ///
    /// Returns the session to `Idle`, so this both starts the next round
    /// after a reveal and re-rolls an unanswered round ("new colors"
    /// without guessing); the score is untouched either way.
    pub fn start_round(&self, session: &mut Session) -> Round {
        let universe = self.table.result_names();
        let rng = session.rng_mut();

        let target = rng
            .choose(universe)
            .expect("Mix table validated non-empty at construction")
            .clone();

        let mut pool: Vec<&String> = universe.iter().filter(|name| **name != target).collect();
        rng.shuffle(&mut pool);

        let mut options: SmallVec<[String; 3]> = SmallVec::with_capacity(self.option_count);
        options.push(target.clone());
        options.extend(pool.into_iter().take(self.option_count - 1).cloned());
        rng.shuffle(&mut options);

        let rule = self
            .table
            .get(&target)
            .expect("Target drawn from the table's own result names");
        let swatch = |name: &str| Swatch::new(name, self.registry.get_unchecked(name).rgb);

        session.begin_round();

        Round {
            target: swatch(&target),
            ingredients: [swatch(&rule.ingredients.0), swatch(&rule.ingredients.1)],
            options,
        }
    }

    /// Judge a guess against a round.
    ///
    /// Pure: touches neither the round nor any session. An unrecognized
    /// name is incorrect, never an error.
    #[must_use]
    pub fn evaluate(&self, round: &Round, guess: &str) -> GuessResult {
        let target = round.target.name.clone();
        if guess == round.target.name {
            GuessResult::Correct { target }
        } else {
            GuessResult::Incorrect { target }
        }
    }

    /// Submit a guess for the session's current round.
    ///
    /// Returns `None` while the session is `Revealing`: the guess is
    /// ignored, exactly like a click landing during the mix animation.
    /// Otherwise judges the guess, applies the score, records it in the
    /// history, and moves the session to `Revealing` until the next
    /// `start_round`.
    pub fn submit_guess(
        &self,
        session: &mut Session,
        round: &Round,
        guess: &str,
    ) -> Option<GuessResult> {
        if !session.phase().accepts_guesses() {
            return None;
        }

        let result = self.evaluate(round, guess);
        session.record_guess(GuessRecord {
            round: session.rounds_played(),
            guessed: guess.to_string(),
            target: result.target().to_string(),
            correct: result.is_correct(),
        });

        Some(result)
    }
}
