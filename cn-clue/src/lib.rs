//! cn-clue: Clue scoring and per-turn clue selection for an automated
//! codemaster.

pub mod scorer;
pub mod selector;

pub use scorer::{score, ClueWeights};
pub use selector::{CandidateClue, Clue, ClueError, ClueSelector, SelectorConfig};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");


#[cfg(test)]
mod selector_tests;
