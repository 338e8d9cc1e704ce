//! Ready-made games: concrete tables wired into the engine.
//!
//! The engine itself is palette-agnostic; modules here supply the actual
//! colors and rules a game ships with.

pub mod classic;
