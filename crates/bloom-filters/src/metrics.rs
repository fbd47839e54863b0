//! Point-in-time filter metrics
//!
//! A `FilterMetrics` snapshot is plain data: it can be logged through
//! `tracing` fields or serialized to whatever metrics pipeline the caller runs.
//!
//! ## Usage
//!
//! ```
//! use bloom_filters::BloomFilter;
//!
//! let mut filter = BloomFilter::new(1000, 5).unwrap();
//! filter.add(b"item");
//!
//! let snapshot = filter.metrics();
//! assert_eq!(snapshot.capacity, 1000);
//! assert!(snapshot.load_factor > 0.0);
//! ```

use serde::{Deserialize, Serialize};

/// Snapshot of a filter's occupancy and estimates
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterMetrics {
    /// Filter size in bits (m)
    pub capacity: usize,
    /// Number of hash probes (k)
    pub hash_function_count: usize,
    /// Bits currently set to 1
    pub bits_set: usize,
    /// `bits_set / capacity`
    pub load_factor: f64,
    /// Whether the filter counts items from cached intersection estimates
    pub derived: bool,
    /// Estimated item count, `None` when the filter is saturated
    pub estimated_items: Option<u64>,
}
