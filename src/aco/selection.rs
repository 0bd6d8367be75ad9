//! Probability-weighted random selection.

use rand::Rng;

/// Selects an index with probability proportional to its weight.
///
/// Weights need not sum to 1; they are normalized internally. The caller
/// must supply a non-empty slice of finite non-negative weights with a
/// strictly positive sum.
///
/// The draw walks the normalized weights in order, subtracting each from
/// a uniform sample in `[0, 1)` until the remainder drops to zero or
/// below. If floating-point drift leaves a positive remainder after the
/// last weight, the last index is returned; the primitive always yields a
/// valid index rather than failing.
///
/// # Panics
/// Panics if `weights` is empty.
pub fn weighted_choice<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    assert!(!weights.is_empty(), "cannot choose from empty weights");

    let total: f64 = weights.iter().sum();
    let mut remainder = rng.random_range(0.0..1.0);

    for (i, w) in weights.iter().enumerate() {
        remainder -= w / total;
        if remainder <= 0.0 {
            return i;
        }
    }
    weights.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_single_weight() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(weighted_choice(&[3.5], &mut rng), 0);
        }
    }

    #[test]
    fn test_zero_weight_never_chosen() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..200 {
            let idx = weighted_choice(&[0.0, 1.0, 0.0, 2.0], &mut rng);
            assert!(idx == 1 || idx == 3, "picked zero-weight index {idx}");
        }
    }

    #[test]
    fn test_dominant_weight_wins_mostly() {
        let mut rng = StdRng::seed_from_u64(3);
        let n = 1000;
        let hits = (0..n)
            .filter(|_| weighted_choice(&[1.0, 999.0], &mut rng) == 1)
            .count();
        // P(index 1) = 0.999; even a loose bound catches inverted logic.
        assert!(hits > n * 9 / 10, "dominant weight hit only {hits}/{n}");
    }

    #[test]
    fn test_unnormalized_equals_normalized() {
        // Scaling all weights must not change the outcome for the same
        // random stream.
        let weights = [2.0, 5.0, 3.0];
        let scaled: Vec<f64> = weights.iter().map(|w| w * 123.456).collect();
        let mut rng_a = StdRng::seed_from_u64(4);
        let mut rng_b = StdRng::seed_from_u64(4);
        for _ in 0..100 {
            assert_eq!(
                weighted_choice(&weights, &mut rng_a),
                weighted_choice(&scaled, &mut rng_b)
            );
        }
    }

    #[test]
    fn test_always_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let weights = [0.1, 0.2, 0.3, 0.4];
        for _ in 0..1000 {
            assert!(weighted_choice(&weights, &mut rng) < weights.len());
        }
    }

    #[test]
    #[should_panic(expected = "empty weights")]
    fn test_empty_panics() {
        let mut rng = StdRng::seed_from_u64(6);
        weighted_choice(&[], &mut rng);
    }
}
