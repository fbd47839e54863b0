//! Filter configuration and validation
//!
//! # Example
//!
//! ```
//! use bloom_filters::domain::FilterConfigBuilder;
//!
//! let config = FilterConfigBuilder::new()
//!     .expected_elements(500)
//!     .target_fpr(0.01)
//!     .build()
//!     .expect("Valid config");
//! assert!(config.capacity > 0);
//! ```

use serde::{Deserialize, Serialize};

use super::parameters::{calculate_optimal_parameters, MAX_CAPACITY};
use crate::error::FilterError;

/// Default workload size when sizing from a target FPR
pub const DEFAULT_EXPECTED_ELEMENTS: usize = 1000;

/// Default false positive rate when sizing from a workload
pub const DEFAULT_TARGET_FPR: f64 = 0.01;

/// Bloom filter dimensions
///
/// Both fields must be non-zero and `capacity` at most `MAX_CAPACITY`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Number of bits (m)
    pub capacity: usize,
    /// Number of hash probes per operation (k)
    pub hash_function_count: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        let params = calculate_optimal_parameters(DEFAULT_EXPECTED_ELEMENTS, DEFAULT_TARGET_FPR);
        Self {
            capacity: params.capacity,
            hash_function_count: params.hash_function_count,
        }
    }
}

impl FilterConfig {
    /// Create a new configuration with validation
    pub fn new(capacity: usize, hash_function_count: usize) -> Result<Self, FilterError> {
        let config = Self {
            capacity,
            hash_function_count,
        };
        config.validate()?;
        Ok(config)
    }

    /// Size a filter for `expected_elements` items at `target_fpr`
    ///
    /// `target_fpr` must be finite and strictly between 0 and 1.
    pub fn for_expected_elements(
        expected_elements: usize,
        target_fpr: f64,
    ) -> Result<Self, FilterError> {
        validate_target_fpr(target_fpr)?;
        let params = calculate_optimal_parameters(expected_elements, target_fpr);
        Self::new(params.capacity, params.hash_function_count)
    }

    /// Reject zero or oversized capacity and zero hash count
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.capacity == 0 || self.capacity > MAX_CAPACITY || self.hash_function_count == 0 {
            return Err(FilterError::InvalidConfiguration {
                capacity: self.capacity,
                hash_function_count: self.hash_function_count,
            });
        }
        Ok(())
    }
}

/// Reject a target FPR outside `(0, 1)`, including NaN and infinities
pub fn validate_target_fpr(fpr: f64) -> Result<(), FilterError> {
    if fpr.is_finite() && fpr > 0.0 && fpr < 1.0 {
        return Ok(());
    }
    Err(FilterError::InvalidFalsePositiveRate { fpr })
}

/// Builder for FilterConfig with validation
///
/// Explicit capacity and hash count take precedence. Whatever is left unset
/// is derived from the expected element count and target FPR.
#[derive(Default)]
pub struct FilterConfigBuilder {
    capacity: Option<usize>,
    hash_function_count: Option<usize>,
    expected_elements: Option<usize>,
    target_fpr: Option<f64>,
}

impl FilterConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter size in bits
    pub fn capacity(mut self, bits: usize) -> Self {
        self.capacity = Some(bits);
        self
    }

    /// Set the number of hash probes
    pub fn hash_function_count(mut self, k: usize) -> Self {
        self.hash_function_count = Some(k);
        self
    }

    /// Set the workload size used for derived dimensions
    pub fn expected_elements(mut self, n: usize) -> Self {
        self.expected_elements = Some(n);
        self
    }

    /// Set the target false positive rate used for derived dimensions
    pub fn target_fpr(mut self, fpr: f64) -> Self {
        self.target_fpr = Some(fpr);
        self
    }

    /// Build the FilterConfig, validating the result
    pub fn build(self) -> Result<FilterConfig, FilterError> {
        let sized = FilterConfig::for_expected_elements(
            self.expected_elements.unwrap_or(DEFAULT_EXPECTED_ELEMENTS),
            self.target_fpr.unwrap_or(DEFAULT_TARGET_FPR),
        )?;

        FilterConfig::new(
            self.capacity.unwrap_or(sized.capacity),
            self.hash_function_count
                .unwrap_or(sized.hash_function_count),
        )
    }
}
