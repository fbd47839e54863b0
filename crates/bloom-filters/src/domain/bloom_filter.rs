//! Core Bloom filter implementation
//!
//! INVARIANTS:
//! - capacity > 0 and hash_function_count > 0
//! - the bit array holds exactly `capacity` bits
//! - no false negatives: after `add(x)`, `contains(x)` is true
//! - cached counts exist only in `FilterMode::Derived`

use tracing::{trace, warn};

use super::bit_array::BitArray;
use super::config::FilterConfig;
use super::estimators::{
    alternate_matches, estimate_cardinality, false_positive_rate, gamma_deniability,
    inclusion_exclusion,
};
use super::hash_functions::{bit_index, compute_hash_positions, Murmur3Hasher, SeededHasher};
use crate::error::FilterError;
use crate::metrics::FilterMetrics;

/// Cardinality estimates captured when an intersection is built
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DerivedCounts {
    /// Estimated items in the left operand
    pub left: u64,
    /// Estimated items in the right operand
    pub right: u64,
    /// Estimated items in the union of both operands
    pub union: u64,
}

/// How a filter answers `number_of_items`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterMode {
    /// Count from bit occupancy
    Direct,
    /// Count by inclusion-exclusion over cached estimates
    Derived(DerivedCounts),
}

/// Bloom filter for probabilistic membership testing
///
/// `contains` may report items that were never added, but never misses an
/// item that was. Mutation needs `&mut self`; wrap the filter in a lock to
/// share it between writers.
#[derive(Clone, Debug)]
pub struct BloomFilter<H: SeededHasher = Murmur3Hasher> {
    bits: BitArray,
    /// Number of hash functions (k)
    k: usize,
    mode: FilterMode,
    hasher: H,
}

impl BloomFilter<Murmur3Hasher> {
    /// Create an empty filter of `capacity` bits probed `hash_function_count` times
    pub fn new(capacity: usize, hash_function_count: usize) -> Result<Self, FilterError> {
        Self::with_hasher(capacity, hash_function_count, Murmur3Hasher)
    }

    /// Create an empty filter from a validated configuration
    pub fn from_config(config: &FilterConfig) -> Result<Self, FilterError> {
        Self::new(config.capacity, config.hash_function_count)
    }
}

impl<H: SeededHasher> BloomFilter<H> {
    /// Create an empty filter using a specific hash family
    pub fn with_hasher(
        capacity: usize,
        hash_function_count: usize,
        hasher: H,
    ) -> Result<Self, FilterError> {
        FilterConfig::new(capacity, hash_function_count)?;
        Ok(Self {
            bits: BitArray::new(capacity),
            k: hash_function_count,
            mode: FilterMode::Direct,
            hasher,
        })
    }

    /// Wrap an already-combined bit array, keeping this filter's dimensions
    pub(crate) fn with_bits(&self, bits: BitArray, mode: FilterMode) -> Self {
        debug_assert_eq!(bits.len(), self.capacity());
        Self {
            bits,
            k: self.k,
            mode,
            hasher: self.hasher.clone(),
        }
    }

    /// Insert an item
    ///
    /// Sets all k probed bits. Adding the same item again changes nothing.
    pub fn add(&mut self, item: &[u8]) {
        let m = self.capacity();
        for seed in 0..self.k {
            let pos = bit_index(&self.hasher, item, seed as u32, m);
            self.bits.set(pos);
        }
        trace!(capacity = m, k = self.k, "Added item");
    }

    /// Test if an item might be in the filter
    ///
    /// Returns:
    /// - `true` if the item might be in the set (could be a false positive)
    /// - `false` if the item is definitely NOT in the set
    pub fn contains(&self, item: &[u8]) -> bool {
        let m = self.capacity();
        (0..self.k).all(|seed| self.bits.get(bit_index(&self.hasher, item, seed as u32, m)))
    }

    /// The k bit positions probed for `item`
    pub fn hash_positions(&self, item: &[u8]) -> Vec<usize> {
        compute_hash_positions(&self.hasher, item, self.k, self.capacity())
    }

    /// Estimate how many distinct items the filter holds
    ///
    /// Direct filters count from bit occupancy and fail with
    /// `SaturatedFilter` when every bit is set. Derived filters return the
    /// inclusion-exclusion of their cached counts.
    pub fn number_of_items(&self) -> Result<u64, FilterError> {
        match self.mode {
            FilterMode::Direct => {
                estimate_cardinality(self.bits.count_ones(), self.capacity(), self.k)
            }
            FilterMode::Derived(counts) => Ok(inclusion_exclusion(
                counts.left,
                counts.right,
                counts.union,
            )),
        }
    }

    /// Current false positive rate: `(1 - e^(-kn/m))^k`, in `[0, 1]`
    ///
    /// The exponent is negative on purpose: with `e^(+kn/m)` the clamped
    /// base would be 0 for every non-empty filter.
    pub fn false_positive_rate(&self) -> Result<f64, FilterError> {
        let n = self.number_of_items()?;
        Ok(false_positive_rate(n, self.capacity(), self.k))
    }

    /// Expected count of items from a 2^48 universe that would match this filter
    pub fn alternate_matches(&self) -> Result<f64, FilterError> {
        let n = self.number_of_items()?;
        Ok(alternate_matches(n, self.capacity(), self.k))
    }

    /// Gamma-deniability of the current bit pattern
    pub fn gamma_deniability(&self) -> Result<f64, FilterError> {
        let n = self.number_of_items()?;
        Ok(gamma_deniability(n, self.capacity(), self.k))
    }

    /// Reset all bits to zero
    ///
    /// Dimensions and mode are kept. A derived filter keeps its cached counts,
    /// which no longer describe the (now empty) bit array.
    pub fn clear(&mut self) {
        if let FilterMode::Derived(counts) = self.mode {
            warn!(
                left = counts.left,
                right = counts.right,
                union = counts.union,
                "Clearing a derived filter, cached counts are now stale"
            );
        }
        self.bits.clear_all();
    }

    /// Whether `other` shares this filter's capacity and hash count
    pub fn is_compatible(&self, other: &BloomFilter<H>) -> bool {
        self.capacity() == other.capacity() && self.k == other.k
    }

    /// Filter size in bits (m)
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Number of hash probes (k)
    pub fn hash_function_count(&self) -> usize {
        self.k
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn is_derived(&self) -> bool {
        matches!(self.mode, FilterMode::Derived(_))
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of bits set
    pub fn load_factor(&self) -> f64 {
        self.bits_set() as f64 / self.capacity() as f64
    }

    /// True when no bit is set
    pub fn is_empty(&self) -> bool {
        self.bits_set() == 0
    }

    pub fn bits(&self) -> &BitArray {
        &self.bits
    }

    /// Point-in-time snapshot for logging or export
    pub fn metrics(&self) -> FilterMetrics {
        FilterMetrics {
            capacity: self.capacity(),
            hash_function_count: self.k,
            bits_set: self.bits_set(),
            load_factor: self.load_factor(),
            derived: self.is_derived(),
            estimated_items: self.number_of_items().ok(),
        }
    }
}
