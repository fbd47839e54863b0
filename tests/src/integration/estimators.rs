//! Cardinality, false positive rate and deniability estimates

use bloom_filters::{BloomFilter, FilterConfig, FilterError};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use super::populated_filter;

#[test]
fn test_estimator_accuracy_on_sized_filters() {
    for n in [100usize, 500, 2000] {
        let config = FilterConfig::for_expected_elements(n, 0.01).unwrap();
        let filter = populated_filter(config.capacity, config.hash_function_count, "user", n);

        let estimate = filter.number_of_items().unwrap() as f64;
        let error = (estimate - n as f64).abs() / n as f64;
        assert!(
            error < 0.10,
            "Estimate {} for {} items (m={}, k={})",
            estimate,
            n,
            config.capacity,
            config.hash_function_count
        );
    }
}

#[test]
fn test_estimator_accuracy_random_items() {
    let mut rng = StdRng::seed_from_u64(0xB100_F11E);
    let mut filter = BloomFilter::new(4000, 4).unwrap();

    for _ in 0..300 {
        let mut item = [0u8; 16];
        rng.fill_bytes(&mut item);
        filter.add(&item);
    }

    let estimate = filter.number_of_items().unwrap();
    assert!(
        (270..=330).contains(&estimate),
        "Expected ~300 items, got {}",
        estimate
    );
}

#[test]
fn test_false_positive_rate_tracks_observed_rate() {
    let filter = populated_filter(2000, 4, "member", 300);

    let estimated = filter.false_positive_rate().unwrap();
    let observed = (0..50_000)
        .filter(|i| filter.contains(format!("probe-{}", i).as_bytes()))
        .count() as f64
        / 50_000.0;

    assert!((0.0..=1.0).contains(&estimated));
    assert!(
        (observed - estimated).abs() < 0.02,
        "Observed FPR {} vs estimated {}",
        observed,
        estimated
    );
}

#[test]
fn test_saturated_filter_errors_propagate() {
    let filter = populated_filter(16, 3, "flood", 1000);
    let empty = BloomFilter::new(16, 3).unwrap();

    let saturated = FilterError::SaturatedFilter { capacity: 16 };
    assert_eq!(filter.number_of_items(), Err(saturated.clone()));
    assert_eq!(filter.false_positive_rate(), Err(saturated.clone()));
    assert_eq!(filter.gamma_deniability(), Err(saturated.clone()));
    assert_eq!(filter.jaccard_index(&empty), Err(saturated));
}

#[test]
fn test_gamma_deniability_finite_and_bounded() {
    let empty = BloomFilter::new(1000, 5).unwrap();
    assert!(empty.gamma_deniability().unwrap().is_finite());

    for count in [1usize, 50, 400] {
        let filter = populated_filter(1000, 5, "g", count);
        let gamma = filter.gamma_deniability().unwrap();
        assert!(
            (0.0..=1.0).contains(&gamma),
            "gamma {} out of range for {} items",
            gamma,
            count
        );
        assert!(filter.alternate_matches().unwrap() > 0.0);
    }
}
