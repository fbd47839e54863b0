//! Domain Layer - the filter and its estimators
//!
//! This layer contains:
//! - Bit array store
//! - Seeded hash families
//! - Core Bloom filter (membership, insertion, clear)
//! - Cardinality, FPR and deniability estimators
//! - Set algebra (union, intersection, Jaccard)
//! - Parameter sizing and configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - No internal synchronization

pub mod bit_array;
pub mod bloom_filter;
pub mod config;
pub mod estimators;
pub mod hash_functions;
pub mod parameters;
pub mod set_algebra;

pub use bit_array::BitArray;
pub use bloom_filter::{BloomFilter, DerivedCounts, FilterMode};
pub use config::{FilterConfig, FilterConfigBuilder};
pub use hash_functions::{Murmur3Hasher, SeededHasher, SipHasher};
pub use parameters::{calculate_optimal_parameters, FilterParams};
