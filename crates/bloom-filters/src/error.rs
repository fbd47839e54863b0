//! Error types for Bloom filter operations

use thiserror::Error;

/// Errors that can occur when building or querying a Bloom filter
///
/// All variants are deterministic domain errors. None of them are transient,
/// so callers should not retry the failing operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("Invalid filter configuration: capacity={capacity}, hash_function_count={hash_function_count} (both must be > 0, capacity within bit-vector limits)")]
    InvalidConfiguration {
        capacity: usize,
        hash_function_count: usize,
    },

    #[error("Invalid false positive rate: {fpr} (must be finite and in (0, 1))")]
    InvalidFalsePositiveRate { fpr: f64 },

    #[error(
        "Incompatible filters: (m={left_capacity}, k={left_hash_count}) vs (m={right_capacity}, k={right_hash_count})"
    )]
    IncompatibleFilters {
        left_capacity: usize,
        left_hash_count: usize,
        right_capacity: usize,
        right_hash_count: usize,
    },

    #[error("Filter is saturated: all {capacity} bits are set, cardinality is undefined")]
    SaturatedFilter { capacity: usize },

    #[error("Ratio is undefined: union of the filters is empty")]
    UndefinedRatio,
}
