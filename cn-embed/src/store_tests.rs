use cn_core::Word;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::store::{EmbeddingSpace, EmbeddingStore, SpaceError};

fn w(s: &str) -> Word {
    Word::new(s)
}

#[test]
fn from_entries_rejects_dimension_mismatch() {
    let err = EmbeddingSpace::from_entries(
        "bad",
        3,
        [(w("ok"), vec![1.0, 0.0, 0.0]), (w("short"), vec![1.0])],
    )
    .unwrap_err();
    match err {
        SpaceError::DimMismatch { want, got, .. } => {
            assert_eq!(want, 3);
            assert_eq!(got, 1);
        }
    }
}

#[test]
fn first_space_wins_on_lookup() {
    let primary =
        EmbeddingSpace::from_entries("primary", 2, [(w("shared"), vec![1.0, 0.0])]).unwrap();
    let fallback = EmbeddingSpace::from_entries(
        "fallback",
        2,
        [(w("shared"), vec![0.0, 1.0]), (w("only"), vec![0.5, 0.5])],
    )
    .unwrap();
    let store = EmbeddingStore::new(vec![primary, fallback]);

    assert_eq!(store.lookup(&w("shared")), Some(&[1.0, 0.0][..]));
    assert_eq!(store.lookup(&w("only")), Some(&[0.5, 0.5][..]));
    assert_eq!(store.lookup(&w("absent")), None);
}

#[test]
fn vocabulary_dedups_across_spaces_in_order() {
    let primary = EmbeddingSpace::from_entries(
        "primary",
        2,
        [(w("alpha"), vec![1.0, 0.0]), (w("beta"), vec![0.0, 1.0])],
    )
    .unwrap();
    let fallback = EmbeddingSpace::from_entries(
        "fallback",
        2,
        [(w("beta"), vec![1.0, 1.0]), (w("gamma"), vec![1.0, 2.0])],
    )
    .unwrap();
    let store = EmbeddingStore::new(vec![primary, fallback]);

    let vocab = store.vocabulary();
    assert_eq!(vocab, vec![&w("alpha"), &w("beta"), &w("gamma")]);
}

#[test]
fn later_entry_for_same_word_replaces_earlier() {
    let space = EmbeddingSpace::from_entries(
        "s",
        2,
        [(w("dup"), vec![1.0, 0.0]), (w("dup"), vec![0.0, 1.0])],
    )
    .unwrap();
    assert_eq!(space.len(), 1);
    assert_eq!(space.lookup(&w("dup")), Some(&[0.0, 1.0][..]));
}

#[test]
fn vocabulary_order_is_stable_for_random_tables() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let entries: Vec<(Word, Vec<f32>)> = (0..100)
        .map(|i| {
            let v: Vec<f32> = (0..8).map(|_| rng.gen_range(-1.0..1.0)).collect();
            (w(&format!("word{i}")), v)
        })
        .collect();

    let a = EmbeddingStore::single(EmbeddingSpace::from_entries("s", 8, entries.clone()).unwrap());
    let b = EmbeddingStore::single(EmbeddingSpace::from_entries("s", 8, entries).unwrap());
    assert_eq!(a.vocabulary(), b.vocabulary());
}
