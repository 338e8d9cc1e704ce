//! # mezcla
//!
//! A color-mixing quiz engine for early-learner games.
//!
//! The question is always the same: two source colors are shown, and the
//! player names the color they make. This crate owns the domain logic
//! behind that loop; rendering, timers, and animation belong to the
//! embedding application.
//!
//! ## Design Principles
//!
//! 1. **Tables over code**: which colors exist and what they mix into is
//!    startup configuration, validated once at engine construction and
//!    read-only afterwards.
//!
//! 2. **Explicit sessions**: score, phase, and randomness live in a
//!    `Session` value owned by the caller. Nothing is global.
//!
//! 3. **Deterministic**: a session seed fully determines its rounds, so
//!    any sequence can be replayed in tests.
//!
//! ## Modules
//!
//! - `core`: session state, interaction phase, RNG
//! - `tables`: color registry and mix table
//! - `rounds`: round generation and guess judgment
//! - `games`: ready-made table sets (the classic 12-color palette)
//!
//! ## Example
//!
//! ```
//! use mezcla::games::classic::ClassicGameBuilder;
//!
//! let (engine, mut session) = ClassicGameBuilder::new().build(42);
//!
//! let round = engine.start_round(&mut session);
//! assert_eq!(round.option_count(), 3);
//!
//! // Guessing the target scores a point and starts the reveal.
//! let result = engine
//!     .submit_guess(&mut session, &round, round.target_name())
//!     .unwrap();
//! assert!(result.is_correct());
//! assert_eq!(session.score(), 1);
//!
//! // Clicks during the reveal are ignored.
//! assert!(engine.submit_guess(&mut session, &round, "rojo").is_none());
//!
//! // The next round reopens the session.
//! let next = engine.start_round(&mut session);
//! assert!(next.has_option(next.target_name()));
//! ```

pub mod core;
pub mod games;
pub mod rounds;
pub mod tables;

// Re-export commonly used types
pub use crate::core::{GuessRecord, RoundPhase, Session, SessionRng, SessionRngState};

pub use crate::tables::{ColorDefinition, ColorRegistry, MixRule, MixTable, Rgb, TableError};

pub use crate::rounds::{GuessResult, Round, RoundEngine, Swatch, DEFAULT_OPTION_COUNT};

pub use crate::games::classic::{classic_mix_table, classic_registry, ClassicGameBuilder};
