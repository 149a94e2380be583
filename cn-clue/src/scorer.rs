//! Candidate scoring: weighted cosine closeness across the board partition.

use cn_core::config::ClueConfig;
use cn_embed::cosine_distance;

/// Per-word weights for the four board categories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClueWeights {
    pub team: f32,
    pub enemy: f32,
    pub civilian: f32,
    pub assassin: f32,
}

impl ClueWeights {
    /// Default weighting. The enemy penalty scales with the bundle cap so a
    /// large team subset cannot cheaply offset one enemy leak; the assassin
    /// penalty is large enough that any non-trivial closeness vetoes the
    /// candidate.
    pub fn for_max_words(max_words_per_clue: u32) -> Self {
        Self {
            team: 1.0,
            enemy: -(max_words_per_clue as f32),
            civilian: -2.0,
            assassin: -100.0,
        }
    }

    pub fn from_config(cfg: &ClueConfig) -> Self {
        Self {
            team: cfg.team_weight,
            enemy: cfg
                .enemy_weight
                .unwrap_or(-(cfg.max_words_per_clue as f32)),
            civilian: cfg.civilian_weight,
            assassin: cfg.assassin_weight,
        }
    }
}

/// Score one candidate vector against a proposed team subset and the rest of
/// the unrevealed board.
///
/// Each word contributes `weight × (1 − d)` where `d` is the cosine distance
/// to the candidate; an empty category contributes 0. Pure and
/// deterministic: identical inputs always produce the identical score, which
/// is what makes selection reproducible and replay valid. Pairs with no
/// computable distance are skipped, never defaulted.
pub fn score(
    candidate: &[f32],
    team_subset: &[&[f32]],
    enemy: &[&[f32]],
    civilian: &[&[f32]],
    assassin: &[&[f32]],
    w: &ClueWeights,
) -> f32 {
    category_sum(candidate, team_subset, w.team)
        + category_sum(candidate, enemy, w.enemy)
        + category_sum(candidate, civilian, w.civilian)
        + category_sum(candidate, assassin, w.assassin)
}

fn category_sum(candidate: &[f32], vecs: &[&[f32]], weight: f32) -> f32 {
    vecs.iter()
        .filter_map(|v| cosine_distance(candidate, v))
        .map(|d| weight * (1.0 - d))
        .sum()
}
