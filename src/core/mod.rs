//! Core session types: phase, state, and RNG.
//!
//! This module contains the building blocks that are palette-agnostic.
//! Games configure their colors and rules in `tables`; everything here
//! works the same for any of them.

pub mod phase;
pub mod rng;
pub mod session;

pub use phase::RoundPhase;
pub use rng::{SessionRng, SessionRngState};
pub use session::{GuessRecord, Session};
