//! The classic color-mixing game.
//!
//! The palette and rules of the original quiz: 3 primaries, 3
//! secondaries, and 6 tertiaries under their Spanish names, connected by
//! the 9 mixes a player can be asked about. `ClassicGameBuilder` wires
//! them into a ready `(RoundEngine, Session)` pair.

mod game;

pub use game::{classic_mix_table, classic_registry, ClassicGameBuilder};
