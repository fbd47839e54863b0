//! # Bloom Filters
//!
//! Probabilistic set membership with cardinality estimation, set algebra,
//! Jaccard similarity and a deniability score for privacy analysis.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `BitArray`: fixed-length bit vector
//!   - `SeededHasher`: `hash(bytes, seed)` family (`Murmur3Hasher`, `SipHasher`)
//!   - `BloomFilter`: membership, insertion, estimators, set algebra
//!   - `FilterConfig` / `FilterConfigBuilder`: dimensions with validation
//!
//! - **Errors** (`error`): `FilterError`
//! - **Metrics** (`metrics`): `FilterMetrics` snapshots
//!
//! ## Invariants
//!
//! - **No false negatives**: after `add(x)`, `contains(x)` MUST return true
//! - capacity and hash count are positive and fixed for the filter's life
//! - intersections are derived filters: they count items by
//!   inclusion-exclusion over estimates cached at construction
//!
//! ## Concurrency
//!
//! Filters carry no locks. Shared reads are fine; concurrent writers must
//! serialize through a `Mutex` or a single-writer discipline.
//!
//! ## Usage Example
//!
//! ```
//! use bloom_filters::{BloomFilter, FilterError};
//!
//! let mut left = BloomFilter::new(2000, 4)?;
//! let mut right = BloomFilter::new(2000, 4)?;
//! left.add(b"alice");
//! left.add(b"bob");
//! right.add(b"bob");
//!
//! assert!(left.contains(b"alice"));
//!
//! let union = left.union(&right)?;
//! assert!(union.contains(b"bob"));
//!
//! let similarity = left.jaccard_index(&right)?;
//! assert!((0.0..=1.0).contains(&similarity));
//! # Ok::<(), FilterError>(())
//! ```

pub mod domain;
pub mod error;
pub mod metrics;

// Re-exports for convenience
pub use domain::{
    BitArray, BloomFilter, DerivedCounts, FilterConfig, FilterConfigBuilder, FilterMode,
    Murmur3Hasher, SeededHasher, SipHasher,
};
pub use error::FilterError;
pub use metrics::FilterMetrics;
