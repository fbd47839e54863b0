//! Optimal Bloom filter sizing
//!
//! Formulas:
//! - m = -n*ln(fpr) / (ln(2)^2)  -- optimal bits
//! - k = (m/n) * ln(2)           -- optimal hash functions

use std::f64::consts::LN_2;

use super::estimators::false_positive_rate;

/// Upper bound on the derived hash count
pub const MAX_HASH_FUNCTIONS: usize = 32;

/// Largest bit count a filter can address
pub const MAX_CAPACITY: usize = usize::MAX >> 3;

/// Filter dimensions chosen for a workload
#[derive(Clone, Debug, PartialEq)]
pub struct FilterParams {
    /// Number of bits in the filter (m)
    pub capacity: usize,
    /// Number of hash functions (k)
    pub hash_function_count: usize,
    /// False positive rate expected once `n` items are inserted
    pub expected_fpr: f64,
}

/// Calculate optimal filter parameters for `num_elements` at `target_fpr`
///
/// `num_elements == 0` degenerates to a 1-bit, 1-hash filter. `target_fpr`
/// must lie in `(0, 1)`; callers validate it (see `FilterConfig`).
pub fn calculate_optimal_parameters(num_elements: usize, target_fpr: f64) -> FilterParams {
    if num_elements == 0 {
        return FilterParams {
            capacity: 1,
            hash_function_count: 1,
            expected_fpr: 1.0,
        };
    }

    let m = minimum_bits(num_elements, target_fpr).max(1);
    let k = optimal_k(m, num_elements);

    FilterParams {
        capacity: m,
        hash_function_count: k,
        expected_fpr: false_positive_rate(num_elements as u64, m, k),
    }
}

/// Calculate optimal k for given m and n
pub fn optimal_k(m: usize, n: usize) -> usize {
    if n == 0 {
        return 1;
    }
    (((m as f64 / n as f64) * LN_2).round() as usize).clamp(1, MAX_HASH_FUNCTIONS)
}

/// Calculate minimum m for given n and target FPR, capped at `MAX_CAPACITY`
pub fn minimum_bits(n: usize, target_fpr: f64) -> usize {
    let ln2_squared = LN_2 * LN_2;
    let bits = (-(n as f64) * target_fpr.ln() / ln2_squared).ceil();
    if bits >= MAX_CAPACITY as f64 {
        return MAX_CAPACITY;
    }
    bits as usize
}
