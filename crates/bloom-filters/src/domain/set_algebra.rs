//! Union, intersection and Jaccard similarity between filters
//!
//! Operands must share capacity and hash count (and, by type, hash family).
//! Union keeps the direct occupancy estimator. Intersection switches to
//! inclusion-exclusion, with the three counts it needs captured eagerly.

use tracing::debug;

use super::bloom_filter::{BloomFilter, DerivedCounts, FilterMode};
use super::hash_functions::SeededHasher;
use crate::error::FilterError;

impl<H: SeededHasher> BloomFilter<H> {
    /// Filter whose bits are `self OR other`
    ///
    /// Every item present in either operand is present in the result.
    pub fn union(&self, other: &BloomFilter<H>) -> Result<BloomFilter<H>, FilterError> {
        self.ensure_compatible(other)?;

        let bits = self.bits().bitwise_or(other.bits());
        let union = self.with_bits(bits, FilterMode::Direct);

        debug!(
            capacity = union.capacity(),
            bits_set = union.bits_set(),
            "Built union filter"
        );
        Ok(union)
    }

    /// Filter whose bits are `self AND other`, in derived mode
    ///
    /// The cardinality of both operands and of their union is estimated now
    /// and cached; the result counts items as `left + right - union`. Fails
    /// if any of those estimates does (e.g. a saturated operand).
    pub fn intersection(&self, other: &BloomFilter<H>) -> Result<BloomFilter<H>, FilterError> {
        self.ensure_compatible(other)?;

        let counts = DerivedCounts {
            left: self.number_of_items()?,
            right: other.number_of_items()?,
            union: self.union(other)?.number_of_items()?,
        };

        let bits = self.bits().bitwise_and(other.bits());
        let intersection = self.with_bits(bits, FilterMode::Derived(counts));

        debug!(
            capacity = intersection.capacity(),
            left = counts.left,
            right = counts.right,
            union = counts.union,
            "Built derived intersection filter"
        );
        Ok(intersection)
    }

    /// Estimated Jaccard similarity `|A ∩ B| / |A ∪ B|`
    ///
    /// Fails with `UndefinedRatio` when the union is estimated empty.
    pub fn jaccard_index(&self, other: &BloomFilter<H>) -> Result<f64, FilterError> {
        let union_items = self.union(other)?.number_of_items()?;
        if union_items == 0 {
            return Err(FilterError::UndefinedRatio);
        }

        let intersection_items = self.intersection(other)?.number_of_items()?;
        Ok(intersection_items as f64 / union_items as f64)
    }

    fn ensure_compatible(&self, other: &BloomFilter<H>) -> Result<(), FilterError> {
        if self.is_compatible(other) {
            return Ok(());
        }
        Err(FilterError::IncompatibleFilters {
            left_capacity: self.capacity(),
            left_hash_count: self.hash_function_count(),
            right_capacity: other.capacity(),
            right_hash_count: other.hash_function_count(),
        })
    }
}
