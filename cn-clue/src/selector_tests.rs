use std::sync::Arc;

use cn_core::{Board, BoardWord, KeyColor, Team, Word};
use cn_embed::{EmbeddingSpace, EmbeddingStore};

use crate::selector::{subsets_up_to, Clue, ClueError, ClueSelector, SelectorConfig};

fn w(s: &str) -> Word {
    Word::new(s)
}

/// Unit vector whose cosine similarity to [1, 0] is `cos_sim`.
fn toward(cos_sim: f32) -> Vec<f32> {
    vec![cos_sim, (1.0 - cos_sim * cos_sim).sqrt()]
}

/// Scenario-A geometry: "fruit" sits at cosine distance 0.10 from "apple"
/// (team), 0.85 from "dog" (enemy), 0.95 from "snake" (assassin); "bone" is
/// a decoy candidate close to both dog and snake.
fn fruit_store() -> Arc<EmbeddingStore> {
    let space = EmbeddingSpace::from_entries(
        "test",
        2,
        [
            (w("fruit"), toward(1.0)),
            (w("apple"), toward(0.90)),
            (w("dog"), toward(0.15)),
            (w("snake"), toward(0.05)),
            (w("bone"), toward(0.26)),
        ],
    )
    .unwrap();
    Arc::new(EmbeddingStore::single(space))
}

fn fruit_board() -> Board {
    Board::new(vec![
        BoardWord::hidden("apple", KeyColor::Red),
        BoardWord::hidden("dog", KeyColor::Blue),
        BoardWord::hidden("snake", KeyColor::Assassin),
    ])
}

#[test]
fn subset_enumeration_counts() {
    // Boundary: max_words_per_clue = 1 considers exactly k singletons.
    assert_eq!(subsets_up_to(4, 1).len(), 4);
    // C(4,1) + C(4,2) + C(4,3) = 4 + 6 + 4.
    assert_eq!(subsets_up_to(4, 3).len(), 14);
    // Cap larger than the team: all non-empty subsets.
    assert_eq!(subsets_up_to(3, 5).len(), 7);
    // No team words, no subsets.
    assert!(subsets_up_to(0, 3).is_empty());
}

#[test]
fn scenario_a_fruit_beats_the_decoy() {
    let mut sel = ClueSelector::new(fruit_store(), SelectorConfig::new(3, 1));
    let board = fruit_board();

    let ranked = sel.rank_candidates(&board, Team::Red);
    // Board words are excluded from the candidate universe.
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].word, w("fruit"));
    assert_eq!(ranked[1].word, w("bone"));
    assert!(ranked[0].score > ranked[1].score);

    let clue = sel.get_clue(&board, Team::Red).unwrap();
    assert_eq!(
        clue,
        Clue {
            word: w("fruit"),
            count: 1
        }
    );
    assert_eq!(sel.history(), &[w("fruit")]);
}

#[test]
fn scenario_b_patience_skips_an_over_repeated_top_word() {
    let mut sel = ClueSelector::new(fruit_store(), SelectorConfig::new(3, 1));
    let board = fruit_board();

    // patience=1 tolerates one repeat; the third turn must skip "fruit"
    // even though it is still the top-scoring candidate.
    assert_eq!(sel.get_clue(&board, Team::Red).unwrap().word, w("fruit"));
    assert_eq!(sel.get_clue(&board, Team::Red).unwrap().word, w("fruit"));
    assert_eq!(sel.get_clue(&board, Team::Red).unwrap().word, w("bone"));
}

#[test]
fn exhausted_when_every_candidate_is_filtered() {
    let mut sel = ClueSelector::new(fruit_store(), SelectorConfig::new(3, 0));
    let board = fruit_board();

    // patience=0: each word may be chosen once.
    assert_eq!(sel.get_clue(&board, Team::Red).unwrap().word, w("fruit"));
    assert_eq!(sel.get_clue(&board, Team::Red).unwrap().word, w("bone"));
    let err = sel.get_clue(&board, Team::Red).unwrap_err();
    assert!(matches!(err, ClueError::Exhausted));
}

#[test]
fn selection_is_deterministic_across_instances() {
    let board = fruit_board();

    let mut a = ClueSelector::new(fruit_store(), SelectorConfig::new(3, 1));
    let mut b = ClueSelector::new(fruit_store(), SelectorConfig::new(3, 1));
    for _ in 0..2 {
        assert_eq!(
            a.get_clue(&board, Team::Red).unwrap(),
            b.get_clue(&board, Team::Red).unwrap()
        );
    }

    let r1: Vec<Word> = a
        .rank_candidates(&board, Team::Red)
        .into_iter()
        .map(|c| c.word)
        .collect();
    let r2: Vec<Word> = a
        .rank_candidates(&board, Team::Red)
        .into_iter()
        .map(|c| c.word)
        .collect();
    assert_eq!(r1, r2);
}

#[test]
fn equal_scores_prefer_the_larger_subset() {
    // "pear" is orthogonal to the candidate, so {apple} and {apple, pear}
    // score identically; the tie must commit to more team words.
    let space = EmbeddingSpace::from_entries(
        "test",
        2,
        [
            (w("fruit"), toward(1.0)),
            (w("apple"), toward(0.9)),
            (w("pear"), vec![0.0, 1.0]),
        ],
    )
    .unwrap();
    let store = Arc::new(EmbeddingStore::single(space));
    let board = Board::new(vec![
        BoardWord::hidden("apple", KeyColor::Red),
        BoardWord::hidden("pear", KeyColor::Red),
    ]);

    let mut sel = ClueSelector::new(store, SelectorConfig::new(2, 1));
    let clue = sel.get_clue(&board, Team::Red).unwrap();
    assert_eq!(clue.word, w("fruit"));
    assert_eq!(clue.count, 2);
}

#[test]
fn candidate_universe_excludes_substring_collisions() {
    let space = EmbeddingSpace::from_entries(
        "test",
        2,
        [
            (w("dog"), toward(0.9)),
            (w("dogma"), toward(0.8)),
            (w("do"), toward(0.7)),
            (w("cat"), toward(0.6)),
            (w("apple"), toward(0.5)),
        ],
    )
    .unwrap();
    let store = Arc::new(EmbeddingStore::single(space));
    let board = Board::new(vec![
        BoardWord::hidden("apple", KeyColor::Red),
        BoardWord::hidden("dog", KeyColor::Blue),
    ]);

    let sel = ClueSelector::new(store, SelectorConfig::new(1, 1));
    let words: Vec<Word> = sel
        .rank_candidates(&board, Team::Red)
        .into_iter()
        .map(|c| c.word)
        .collect();
    // "dog" and "apple" are board words; "dogma" contains "dog"; "do" is
    // contained by "dog". Only "cat" survives.
    assert_eq!(words, vec![w("cat")]);
}

#[test]
fn team_words_without_embeddings_drop_out_of_subsets() {
    let space = EmbeddingSpace::from_entries(
        "test",
        2,
        [(w("fruit"), toward(1.0)), (w("apple"), toward(0.9))],
    )
    .unwrap();
    let store = Arc::new(EmbeddingStore::single(space));
    let board = Board::new(vec![
        BoardWord::hidden("apple", KeyColor::Red),
        // No embedding for this one anywhere.
        BoardWord::hidden("zeppelin", KeyColor::Red),
    ]);

    let sel = ClueSelector::new(store, SelectorConfig::new(3, 1));
    let ranked = sel.rank_candidates(&board, Team::Red);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].targets, vec![w("apple")]);
}

#[test]
fn no_unrevealed_team_words_means_exhausted() {
    let mut sel = ClueSelector::new(fruit_store(), SelectorConfig::new(3, 1));
    let mut board = fruit_board();
    board.reveal(&w("apple"));

    let err = sel.get_clue(&board, Team::Red).unwrap_err();
    assert!(matches!(err, ClueError::Exhausted));
    assert!(sel.history().is_empty());
}
