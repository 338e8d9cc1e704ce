//! Round generation and guess judgment.
//!
//! ## Key Types
//!
//! - `Round`: one question - target, ingredients, options
//! - `Swatch`: a resolved name + RGB pair, ready to render
//! - `RoundEngine`: builds rounds and judges guesses over validated tables
//! - `GuessResult`: correct/incorrect, always carrying the target name

pub mod engine;
pub mod round;

pub use engine::{GuessResult, RoundEngine, DEFAULT_OPTION_COUNT};
pub use round::{Round, Swatch};
