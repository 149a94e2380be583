//! Cosine distance between embedding vectors.

/// Cosine distance in [0, 2]; 0 means identical direction.
///
/// Returns `None` when the vectors have different dimensions (a cross-space
/// pair) or either norm is zero. Callers treat `None` as an embedding miss
/// and exclude the pair; a zero-distance default would silently make such
/// words look maximally similar.
pub fn cosine_distance(a: &[f32], b: &[f32]) -> Option<f32> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }

    // Clamp: rounding can push the similarity a hair outside [-1, 1].
    Some((1.0 - dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_direction_is_zero() {
        let d = cosine_distance(&[1.0, 0.0], &[2.0, 0.0]).unwrap();
        assert!(d.abs() < 1e-6);
    }

    #[test]
    fn opposite_direction_is_two() {
        let d = cosine_distance(&[1.0, 0.0], &[-3.0, 0.0]).unwrap();
        assert!((d - 2.0).abs() < 1e-6);
    }

    #[test]
    fn orthogonal_is_one() {
        let d = cosine_distance(&[1.0, 0.0], &[0.0, 5.0]).unwrap();
        assert!((d - 1.0).abs() < 1e-6);
    }

    #[test]
    fn dimension_mismatch_is_a_miss() {
        assert_eq!(cosine_distance(&[1.0, 0.0], &[1.0, 0.0, 0.0]), None);
    }

    #[test]
    fn zero_norm_is_a_miss() {
        assert_eq!(cosine_distance(&[0.0, 0.0], &[1.0, 0.0]), None);
        assert_eq!(cosine_distance(&[1.0, 0.0], &[0.0, 0.0]), None);
    }
}
