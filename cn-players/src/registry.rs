//! Static, name-keyed player registry.
//!
//! Interchangeable player implementations resolve once at startup through a
//! fixed name→factory map instead of any runtime module lookup. Replay-backed
//! players are constructed directly from an opened session, not through the
//! registry.

use std::sync::Arc;

use cn_clue::SelectorConfig;
use cn_core::Team;
use cn_embed::EmbeddingStore;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::vector::{VectorCodemaster, VectorGuesser};
use crate::{Codemaster, Guesser};

/// Everything a player factory needs, constructed explicitly by the engine
/// after loading: no ambient globals.
#[derive(Clone)]
pub struct PlayerContext {
    pub team: Team,
    pub store: Arc<EmbeddingStore>,
    pub selector: SelectorConfig,
}

pub type CodemasterFactory = fn(&PlayerContext) -> Box<dyn Codemaster>;
pub type GuesserFactory = fn(&PlayerContext) -> Box<dyn Guesser>;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("unknown codemaster '{0}'")]
    UnknownCodemaster(String),
    #[error("unknown guesser '{0}'")]
    UnknownGuesser(String),
}

pub struct Registry {
    codemasters: FxHashMap<&'static str, CodemasterFactory>,
    guessers: FxHashMap<&'static str, GuesserFactory>,
}

impl Registry {
    pub fn empty() -> Self {
        Self {
            codemasters: FxHashMap::default(),
            guessers: FxHashMap::default(),
        }
    }

    /// The built-in players.
    pub fn builtin() -> Self {
        let mut r = Self::empty();
        r.register_codemaster("vector", |ctx| Box::new(VectorCodemaster::new(ctx)));
        r.register_guesser("vector", |ctx| Box::new(VectorGuesser::new(ctx)));
        r
    }

    pub fn register_codemaster(&mut self, name: &'static str, f: CodemasterFactory) {
        self.codemasters.insert(name, f);
    }

    pub fn register_guesser(&mut self, name: &'static str, f: GuesserFactory) {
        self.guessers.insert(name, f);
    }

    pub fn codemaster(
        &self,
        name: &str,
        ctx: &PlayerContext,
    ) -> Result<Box<dyn Codemaster>, RegistryError> {
        let f = self
            .codemasters
            .get(name)
            .ok_or_else(|| RegistryError::UnknownCodemaster(name.to_string()))?;
        Ok(f(ctx))
    }

    pub fn guesser(
        &self,
        name: &str,
        ctx: &PlayerContext,
    ) -> Result<Box<dyn Guesser>, RegistryError> {
        let f = self
            .guessers
            .get(name)
            .ok_or_else(|| RegistryError::UnknownGuesser(name.to_string()))?;
        Ok(f(ctx))
    }

    pub fn codemaster_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.codemasters.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn guesser_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.guessers.keys().copied().collect();
        names.sort_unstable();
        names
    }
}
