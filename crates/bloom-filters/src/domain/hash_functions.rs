//! Hash indexer for Bloom filters
//!
//! One hash family reseeded k times stands in for k independent hash
//! functions: probe `i` hashes the item with seed `i` and reduces the result
//! modulo the filter capacity.
//!
//! The estimators assume those k probes are independent and uniform over
//! `[0, m)`. A weak family does not fail loudly, it just skews every
//! cardinality and FPR estimate.

use std::hash::Hasher;
use std::io::Cursor;

use siphasher::sip::SipHasher13;

/// Seeded hash family: `hash(bytes, seed) -> integer`
///
/// Swapping the implementation changes bit positions but nothing else in the
/// filter. Filters built with different families are not comparable even
/// when their `(m, k)` match.
pub trait SeededHasher: Clone {
    /// Hash `item` under `seed`
    fn hash(&self, item: &[u8], seed: u32) -> u64;
}

/// MurmurHash3 x86 32-bit, seeded directly with the probe number
///
/// This is the default family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Murmur3Hasher;

impl SeededHasher for Murmur3Hasher {
    fn hash(&self, item: &[u8], seed: u32) -> u64 {
        let mut cursor = Cursor::new(item);
        // Reading from an in-memory cursor cannot fail.
        murmur3::murmur3_32(&mut cursor, seed).unwrap_or(0) as u64
    }
}

/// SipHash-1-3 keyed by the probe number
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SipHasher {
    /// Second key half, lets callers rotate the whole family
    pub key: u64,
}

impl SipHasher {
    pub fn with_key(key: u64) -> Self {
        Self { key }
    }
}

impl SeededHasher for SipHasher {
    fn hash(&self, item: &[u8], seed: u32) -> u64 {
        let mut hasher = SipHasher13::new_with_keys(seed as u64, self.key);
        hasher.write(item);
        hasher.finish()
    }
}

/// Compute the k bit positions for `item` in a filter of `m` bits
pub fn compute_hash_positions<H: SeededHasher>(
    hasher: &H,
    item: &[u8],
    k: usize,
    m: usize,
) -> Vec<usize> {
    (0..k)
        .map(|i| bit_index(hasher, item, i as u32, m))
        .collect()
}

/// Position probed by seed `seed`
pub fn bit_index<H: SeededHasher>(hasher: &H, item: &[u8], seed: u32, m: usize) -> usize {
    (hasher.hash(item, seed) % m as u64) as usize
}
