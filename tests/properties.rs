//! Property-based tests for the entropy engine and classifier.
//!
//! These tests use proptest to check the measurement bounds and
//! invariants over randomized inputs.

use entropy_classifier::{
    block_entropies, shannon_entropy, standard_deviation, BlockSize, Classification,
    EntropyClassifier, MemorySource,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn entropy_within_bounds(data in prop::collection::vec(any::<u8>(), 0..4096)) {
        let e = shannon_entropy(&data);
        prop_assert!((0.0..=8.0).contains(&e), "entropy {} out of range", e);
    }

    #[test]
    fn identical_bytes_have_zero_entropy(byte in any::<u8>(), len in 1usize..5000) {
        prop_assert_eq!(shannon_entropy(&vec![byte; len]), 0.0);
    }

    #[test]
    fn uniform_distribution_has_max_entropy(repeats in 1usize..16, rotate in 0usize..256) {
        let mut data: Vec<u8> = (0..=255u8).cycle().take(256 * repeats).collect();
        data.rotate_left(rotate);
        prop_assert!((shannon_entropy(&data) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn entropy_is_order_independent(
        data in prop::collection::vec(any::<u8>(), 1..2048),
        seed in any::<u64>(),
    ) {
        let mut shuffled = data.clone();
        // Deterministic Fisher-Yates driven by a simple LCG.
        let mut state = seed;
        for i in (1..shuffled.len()).rev() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let j = (state >> 33) as usize % (i + 1);
            shuffled.swap(i, j);
        }
        prop_assert_eq!(shannon_entropy(&data), shannon_entropy(&shuffled));

        let mut sorted = data.clone();
        sorted.sort_unstable();
        prop_assert_eq!(shannon_entropy(&data), shannon_entropy(&sorted));
    }
}

proptest! {
    #[test]
    fn block_count_is_floor_of_length(
        data in prop::collection::vec(any::<u8>(), 0..4096),
        size in 1usize..600,
    ) {
        let block_size = BlockSize::new(size).unwrap();
        let entropies = block_entropies(&data, block_size);

        prop_assert_eq!(entropies.len(), data.len() / size);
        if data.len() < size {
            prop_assert!(entropies.is_empty());
        }
        for e in entropies {
            prop_assert!((0.0..=8.0).contains(&e));
        }
    }

    #[test]
    fn singleton_has_zero_deviation(x in -1e6f64..1e6) {
        prop_assert_eq!(standard_deviation(&[x]), 0.0);
    }

    #[test]
    fn distinct_values_have_positive_deviation(
        values in prop::collection::vec(0.0f64..8.0, 2..64),
        delta in 0.001f64..8.0,
    ) {
        let mut values = values;
        values[0] = values[1] + delta;
        prop_assert!(standard_deviation(&values) > 0.0);
    }
}

proptest! {
    #[test]
    fn classification_is_consistent(data in prop::collection::vec(any::<u8>(), 0..4096)) {
        let classifier = EntropyClassifier::default();
        let source = MemorySource::new(data.clone());

        let first = classifier.analyze(&source);
        let second = classifier.analyze(&source);
        prop_assert_eq!(first, second);

        match first.classification {
            Classification::Normal => {
                prop_assert!(first.entropy <= 7.69);
                prop_assert_eq!(first.standard_deviation, 0.0);
            }
            Classification::Compressed => {
                prop_assert!(first.entropy > 7.69);
                prop_assert!(first.standard_deviation > 0.06);
            }
            Classification::Encrypted => {
                prop_assert!(first.entropy > 7.69);
                prop_assert!(first.standard_deviation <= 0.06);
            }
        }
    }
}
