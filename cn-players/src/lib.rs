//! cn-players: Codemaster/Guesser capability traits, the static player
//! registry, and the built-in players.

pub mod registry;
pub mod replay_player;
pub mod vector;

pub use registry::{PlayerContext, Registry, RegistryError};
pub use replay_player::ReplayPlayer;
pub use vector::{VectorCodemaster, VectorGuesser};

use cn_clue::{Clue, ClueError};
use cn_core::{Board, Word};
use cn_replay::ReplayError;
use thiserror::Error;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error(transparent)]
    Clue(#[from] ClueError),
    #[error(transparent)]
    Replay(#[from] ReplayError),
    #[error("no embedding for clue word '{0}'")]
    UnknownClue(Word),
    #[error("no unrevealed board word has an embedding")]
    NoGuessableWord,
}

/// Gives a one-word hint plus a count, once per codemaster turn.
pub trait Codemaster {
    fn give_clue(&mut self, board: &Board) -> Result<Clue, PlayerError>;
}

/// Picks a board word in response to a clue.
pub trait Guesser {
    fn guess(&mut self, board: &Board, clue: &Clue) -> Result<Word, PlayerError>;
}
