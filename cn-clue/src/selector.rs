//! Per-turn clue selection over the candidate-word universe.

use std::sync::Arc;

use cn_core::config::ClueConfig;
use cn_core::{Board, Team, Word};
use cn_embed::EmbeddingStore;
use rayon::prelude::*;
use thiserror::Error;

use crate::scorer::{score, ClueWeights};

#[derive(Debug, Error)]
pub enum ClueError {
    /// Every scored candidate was filtered by the repetition-patience rule.
    /// Recoverable: the caller skips the turn or ends the game, never
    /// crashes.
    #[error("no candidate clue survived the repetition filter")]
    Exhausted,
}

/// A chosen clue: one word plus the number of team words it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    pub word: Word,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct SelectorConfig {
    pub max_words_per_clue: usize,
    pub same_clue_patience: usize,
    pub weights: ClueWeights,
}

impl SelectorConfig {
    pub fn new(max_words_per_clue: usize, same_clue_patience: usize) -> Self {
        Self {
            max_words_per_clue,
            same_clue_patience,
            weights: ClueWeights::for_max_words(max_words_per_clue as u32),
        }
    }

    pub fn from_config(cfg: &ClueConfig) -> Self {
        Self {
            max_words_per_clue: cfg.max_words_per_clue as usize,
            same_clue_patience: cfg.same_clue_patience as usize,
            weights: ClueWeights::from_config(cfg),
        }
    }
}

/// A candidate word with its best-scoring team subset.
#[derive(Debug, Clone)]
pub struct CandidateClue {
    pub word: Word,
    pub targets: Vec<Word>,
    pub score: f32,
}

/// One codemaster's clue selection state for one game.
///
/// `history` persists across turns and is exclusively owned; a selector is
/// never invoked concurrently by two callers.
pub struct ClueSelector {
    store: Arc<EmbeddingStore>,
    cfg: SelectorConfig,
    history: Vec<Word>,
}

impl ClueSelector {
    pub fn new(store: Arc<EmbeddingStore>, cfg: SelectorConfig) -> Self {
        Self {
            store,
            cfg,
            history: Vec::new(),
        }
    }

    /// Previously chosen clue words, oldest first.
    pub fn history(&self) -> &[Word] {
        &self.history
    }

    /// Pick the clue for the current turn.
    ///
    /// Walks the ranked candidates, skipping words already chosen more than
    /// `same_clue_patience` times; the first survivor is recorded in
    /// `history` and returned with its target count. Deterministic: the same
    /// store, weights, board, and history always yield the same clue.
    pub fn get_clue(&mut self, board: &Board, team: Team) -> Result<Clue, ClueError> {
        let ranked = self.rank_candidates(board, team);
        for cand in &ranked {
            let repeats = self.history.iter().filter(|w| **w == cand.word).count();
            if repeats > self.cfg.same_clue_patience {
                continue;
            }
            self.history.push(cand.word.clone());
            return Ok(Clue {
                word: cand.word.clone(),
                count: cand.targets.len(),
            });
        }
        Err(ClueError::Exhausted)
    }

    /// Rank every legal candidate word, each reduced to its best team
    /// subset.
    ///
    /// Ordering: score descending, ties prefer the larger subset (commit to
    /// more team words), remaining ties break on word ascending. The
    /// patience filter skips whole words, so keeping only each word's best
    /// (score, subset) pair never changes which clue is selected.
    pub fn rank_candidates(&self, board: &Board, team: Team) -> Vec<CandidateClue> {
        let part = board.partition(team);

        // Resolve category embeddings up front; words absent from every
        // space drop out of their category's distance list.
        let team_words: Vec<(&Word, &[f32])> = resolve(&self.store, &part.team);
        let enemy: Vec<&[f32]> = resolve_vecs(&self.store, &part.enemy);
        let civilian: Vec<&[f32]> = resolve_vecs(&self.store, &part.civilian);
        let assassin: Vec<&[f32]> = resolve_vecs(&self.store, &part.assassin);

        let subsets = subsets_up_to(team_words.len(), self.cfg.max_words_per_clue);
        if subsets.is_empty() {
            return Vec::new();
        }

        let weights = &self.cfg.weights;
        let mut ranked: Vec<CandidateClue> = self
            .store
            .vocabulary()
            .into_par_iter()
            .filter(|w| board.is_legal_clue_word(w))
            .filter_map(|word| {
                let candidate = self.store.lookup(word)?;
                // Off-subset contributions are subset-independent.
                let base = score(candidate, &[], &enemy, &civilian, &assassin, weights);

                let mut best: Option<(f32, &Vec<usize>)> = None;
                for subset in &subsets {
                    let target_vecs: Vec<&[f32]> =
                        subset.iter().map(|&i| team_words[i].1).collect();
                    let s = base + score(candidate, &target_vecs, &[], &[], &[], weights);
                    let better = match best {
                        None => true,
                        Some((bs, bsub)) => {
                            s.total_cmp(&bs).is_gt()
                                || (s.total_cmp(&bs).is_eq() && subset.len() > bsub.len())
                        }
                    };
                    if better {
                        best = Some((s, subset));
                    }
                }

                let (s, subset) = best?;
                Some(CandidateClue {
                    word: word.clone(),
                    targets: subset.iter().map(|&i| team_words[i].0.clone()).collect(),
                    score: s,
                })
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| b.targets.len().cmp(&a.targets.len()))
                .then_with(|| a.word.cmp(&b.word))
        });
        ranked
    }
}

fn resolve<'a>(store: &'a EmbeddingStore, words: &[&'a Word]) -> Vec<(&'a Word, &'a [f32])> {
    words
        .iter()
        .filter_map(|w| store.lookup(w).map(|v| (*w, v)))
        .collect()
}

fn resolve_vecs<'a>(store: &'a EmbeddingStore, words: &[&'a Word]) -> Vec<&'a [f32]> {
    words.iter().filter_map(|w| store.lookup(w)).collect()
}

/// Every index combination of size 1..=max_size over 0..n, sizes ascending,
/// lexicographic within a size.
pub(crate) fn subsets_up_to(n: usize, max_size: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    for k in 1..=max_size.min(n) {
        combinations_into(n, k, &mut out);
    }
    out
}

fn combinations_into(n: usize, k: usize, out: &mut Vec<Vec<usize>>) {
    debug_assert!(k >= 1 && k <= n);
    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        out.push(idx.clone());
        // Rightmost position that can still advance.
        let mut i = k;
        while i > 0 && idx[i - 1] == n - k + (i - 1) {
            i -= 1;
        }
        if i == 0 {
            return;
        }
        idx[i - 1] += 1;
        for j in i..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}
