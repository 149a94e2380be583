//! Embedding spaces and the ordered-fallback store.

use cn_core::Word;
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpaceError {
    #[error("vector for '{word}' has dimension {got}, space '{space}' expects {want}")]
    DimMismatch {
        space: String,
        word: Word,
        want: usize,
        got: usize,
    },
}

/// A named, immutable word→vector table of fixed dimension.
#[derive(Debug, Clone)]
pub struct EmbeddingSpace {
    name: String,
    dim: usize,
    table: FxHashMap<Word, Vec<f32>>,
    // Insertion order, so vocabulary iteration is deterministic.
    order: Vec<Word>,
}

impl EmbeddingSpace {
    /// Build a space from in-memory entries. A later entry for the same word
    /// replaces the earlier one. Fails on dimension mismatches.
    pub fn from_entries(
        name: impl Into<String>,
        dim: usize,
        entries: impl IntoIterator<Item = (Word, Vec<f32>)>,
    ) -> Result<Self, SpaceError> {
        let name = name.into();
        let mut table = FxHashMap::default();
        let mut order = Vec::new();
        for (word, vec) in entries {
            if vec.len() != dim {
                return Err(SpaceError::DimMismatch {
                    space: name,
                    word,
                    want: dim,
                    got: vec.len(),
                });
            }
            if table.insert(word.clone(), vec).is_none() {
                order.push(word);
            }
        }
        Ok(EmbeddingSpace {
            name,
            dim,
            table,
            order,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn lookup(&self, word: &Word) -> Option<&[f32]> {
        self.table.get(word).map(Vec::as_slice)
    }

    /// Words in insertion order.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.order.iter()
    }
}

/// One or more ordered embedding spaces; the first space containing a word
/// wins. Immutable after construction and shared across sessions.
#[derive(Debug, Clone, Default)]
pub struct EmbeddingStore {
    spaces: Vec<EmbeddingSpace>,
}

impl EmbeddingStore {
    pub fn new(spaces: Vec<EmbeddingSpace>) -> Self {
        EmbeddingStore { spaces }
    }

    pub fn single(space: EmbeddingSpace) -> Self {
        EmbeddingStore {
            spaces: vec![space],
        }
    }

    pub fn spaces(&self) -> &[EmbeddingSpace] {
        &self.spaces
    }

    /// First-space-wins lookup.
    pub fn lookup(&self, word: &Word) -> Option<&[f32]> {
        self.spaces.iter().find_map(|s| s.lookup(word))
    }

    /// Every word known to any space, deduplicated first-space-wins, in a
    /// deterministic order (space order, then insertion order within a
    /// space).
    pub fn vocabulary(&self) -> Vec<&Word> {
        let mut seen: FxHashSet<&Word> = FxHashSet::default();
        let mut out = Vec::new();
        for space in &self.spaces {
            for word in space.words() {
                if seen.insert(word) {
                    out.push(word);
                }
            }
        }
        out
    }
}
