//! Replay-backed player: serves a recorded session in place of live players.

use std::sync::{Arc, Mutex};

use cn_clue::Clue;
use cn_core::{Action, Board, Role, Team, Word};
use cn_replay::{ReplaySession, ReplayStore};

use crate::{Codemaster, Guesser, PlayerError};

/// Stands in for one side's codemaster and/or guesser. Both roles of a side
/// may share the same underlying session; per-role cursors keep their
/// streams independent.
#[derive(Debug)]
pub struct ReplayPlayer {
    session: Arc<Mutex<ReplaySession>>,
    team: Team,
}

impl ReplayPlayer {
    pub fn new(session: Arc<Mutex<ReplaySession>>, team: Team) -> Self {
        Self { session, team }
    }

    /// Open a persisted session and wrap it for playback.
    pub fn open(store: &ReplayStore, id: &str, team: Team) -> Result<Self, PlayerError> {
        let session = store.open(id)?;
        Ok(Self::new(Arc::new(Mutex::new(session)), team))
    }

    /// Shared handle, for handing the other role of this side the same
    /// session.
    pub fn session(&self) -> Arc<Mutex<ReplaySession>> {
        Arc::clone(&self.session)
    }
}

impl Codemaster for ReplayPlayer {
    fn give_clue(&mut self, _board: &Board) -> Result<Clue, PlayerError> {
        let mut session = self.session.lock().unwrap();
        match session.next_action(Role::codemaster(self.team))? {
            Action::Hint { hint, num, .. } => Ok(Clue {
                word: hint,
                count: num as usize,
            }),
            Action::Guess { .. } => {
                unreachable!("next_action only yields hints for codemaster roles")
            }
        }
    }
}

impl Guesser for ReplayPlayer {
    fn guess(&mut self, _board: &Board, _clue: &Clue) -> Result<Word, PlayerError> {
        let mut session = self.session.lock().unwrap();
        match session.next_action(Role::guesser(self.team))? {
            Action::Guess { word, .. } => Ok(word),
            Action::Hint { .. } => {
                unreachable!("next_action only yields guesses for guesser roles")
            }
        }
    }
}
