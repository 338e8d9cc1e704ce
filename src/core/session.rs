//! Session state: score, phase, history, and randomness.
//!
//! A `Session` is the explicit, caller-owned replacement for scattered
//! per-screen mutable state. The round engine borrows it mutably for each
//! operation; nothing is global and nothing outlives the session.
//!
//! Score and history are volatile: they start at zero and vanish with the
//! session. There is no save/load.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::phase::RoundPhase;
use super::rng::SessionRng;

/// A recorded guess with its outcome.
///
/// Kept in the session history for feedback display and end-of-session
/// recaps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    /// Round the guess belongs to (1-based, in play order).
    pub round: u32,

    /// The option the player picked.
    pub guessed: String,

    /// The true target for that round.
    pub target: String,

    /// Whether the guess matched the target.
    pub correct: bool,
}

/// Per-session quiz state.
///
/// Uses an `im` persistent vector for the history, so cloning a session
/// for a snapshot is O(1).
#[derive(Clone, Debug)]
pub struct Session {
    score: u32,
    rounds_played: u32,
    phase: RoundPhase,
    rng: SessionRng,
    history: Vector<GuessRecord>,
}

impl Session {
    /// Create a new session with the given RNG seed.
    ///
    /// Score starts at 0 and the session begins `Idle`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            score: 0,
            rounds_played: 0,
            phase: RoundPhase::Idle,
            rng: SessionRng::new(seed),
            history: Vector::new(),
        }
    }

    /// Current score: one point per correct guess.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of rounds started so far, re-rolls included.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Current interaction phase.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Every accepted guess, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<GuessRecord> {
        &self.history
    }

    /// The session's RNG.
    pub fn rng_mut(&mut self) -> &mut SessionRng {
        &mut self.rng
    }

    /// Read-only access to the RNG, for state capture.
    #[must_use]
    pub fn rng(&self) -> &SessionRng {
        &self.rng
    }

    /// Mark a new round as started.
    ///
    /// Returns the session to `Idle` and bumps the round counter. Called
    /// by `RoundEngine::start_round`; the score is untouched, which is
    /// what makes an unanswered re-roll free.
    pub fn begin_round(&mut self) {
        self.phase = RoundPhase::Idle;
        self.rounds_played += 1;
    }

    /// Apply an accepted guess.
    ///
    /// Adds the record to the history, scores it if correct, and moves
    /// the session to `Revealing` until the next round starts. Called by
    /// `RoundEngine::submit_guess` after the phase gate.
    pub fn record_guess(&mut self, record: GuessRecord) {
        if record.correct {
            self.score += 1;
        }
        self.history.push_back(record);
        self.phase = RoundPhase::Revealing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(correct: bool) -> GuessRecord {
        GuessRecord {
            round: 1,
            guessed: "verde".to_string(),
            target: if correct { "verde" } else { "naranja" }.to_string(),
            correct,
        }
    }

    #[test]
    fn test_new_session_is_zeroed() {
        let session = Session::new(42);

        assert_eq!(session.score(), 0);
        assert_eq!(session.rounds_played(), 0);
        assert_eq!(session.phase(), RoundPhase::Idle);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_correct_guess_scores_and_reveals() {
        let mut session = Session::new(42);
        session.begin_round();

        session.record_guess(record(true));

        assert_eq!(session.score(), 1);
        assert_eq!(session.phase(), RoundPhase::Revealing);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_incorrect_guess_leaves_score() {
        let mut session = Session::new(42);
        session.begin_round();

        session.record_guess(record(false));

        assert_eq!(session.score(), 0);
        assert_eq!(session.phase(), RoundPhase::Revealing);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_begin_round_returns_to_idle() {
        let mut session = Session::new(42);
        session.begin_round();
        session.record_guess(record(true));

        session.begin_round();

        assert_eq!(session.phase(), RoundPhase::Idle);
        assert_eq!(session.rounds_played(), 2);
        // History survives the new round
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_snapshot_clone_is_independent() {
        let mut session = Session::new(42);
        session.begin_round();

        let snapshot = session.clone();
        session.record_guess(record(true));

        assert_eq!(session.score(), 1);
        assert_eq!(snapshot.score(), 0);
        assert!(snapshot.history().is_empty());
    }
}
