//! Embedding-backed players.

use std::sync::Arc;

use cn_clue::{Clue, ClueSelector};
use cn_core::{Board, Team, Word};
use cn_embed::{cosine_distance, EmbeddingStore};

use crate::registry::PlayerContext;
use crate::{Codemaster, Guesser, PlayerError};

/// Automated codemaster driven by the clue selection engine.
pub struct VectorCodemaster {
    team: Team,
    selector: ClueSelector,
}

impl VectorCodemaster {
    pub fn new(ctx: &PlayerContext) -> Self {
        Self {
            team: ctx.team,
            selector: ClueSelector::new(Arc::clone(&ctx.store), ctx.selector.clone()),
        }
    }
}

impl Codemaster for VectorCodemaster {
    fn give_clue(&mut self, board: &Board) -> Result<Clue, PlayerError> {
        Ok(self.selector.get_clue(board, self.team)?)
    }
}

/// Automated guesser: picks the unrevealed board word nearest to the clue.
pub struct VectorGuesser {
    store: Arc<EmbeddingStore>,
}

impl VectorGuesser {
    pub fn new(ctx: &PlayerContext) -> Self {
        Self {
            store: Arc::clone(&ctx.store),
        }
    }
}

impl Guesser for VectorGuesser {
    fn guess(&mut self, board: &Board, clue: &Clue) -> Result<Word, PlayerError> {
        let clue_vec = self
            .store
            .lookup(&clue.word)
            .ok_or_else(|| PlayerError::UnknownClue(clue.word.clone()))?;

        // Nearest by cosine distance; words without embeddings drop out.
        // Ties break on word ascending so playback stays reproducible.
        let mut best: Option<(f32, &Word)> = None;
        for bw in board.unrevealed() {
            let Some(v) = self.store.lookup(&bw.word) else {
                continue;
            };
            let Some(d) = cosine_distance(clue_vec, v) else {
                continue;
            };
            let better = match best {
                None => true,
                Some((bd, bw_word)) => {
                    d.total_cmp(&bd).is_lt()
                        || (d.total_cmp(&bd).is_eq() && bw.word < *bw_word)
                }
            };
            if better {
                best = Some((d, &bw.word));
            }
        }

        best.map(|(_, w)| w.clone())
            .ok_or(PlayerError::NoGuessableWord)
    }
}
