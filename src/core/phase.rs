//! Interaction phase: when guesses are accepted.

use serde::{Deserialize, Serialize};

/// Phase of the guess/reveal cycle.
///
/// The presentation layer drives the transitions: a submitted guess moves
/// the session to `Revealing` while the mix animation plays, and starting
/// the next round returns it to `Idle`. While `Revealing`, guesses are
/// ignored; with no other concurrency in a session, that gate is the only
/// thing needed to rule out a double-guess race.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Options are shown and guesses are accepted.
    #[default]
    Idle,

    /// A guess was submitted and the reveal is playing; further guesses
    /// are ignored until the next round starts.
    Revealing,
}

impl RoundPhase {
    /// Whether a guess submitted now would be accepted.
    #[must_use]
    pub fn accepts_guesses(self) -> bool {
        matches!(self, RoundPhase::Idle)
    }
}
