//! Fixed-length bit vector backing every filter
//!
//! The length is fixed at construction. Combining two arrays with
//! `bitwise_or`/`bitwise_and` requires equal lengths; a mismatch is a
//! caller bug and panics.

use bitvec::prelude::*;

/// Bit array indexed over `[0, len)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitArray {
    bits: BitVec<u8, Lsb0>,
}

impl BitArray {
    /// Create an all-zero array of `len` bits
    pub fn new(len: usize) -> Self {
        Self {
            bits: bitvec![u8, Lsb0; 0; len],
        }
    }

    /// Number of bits in the array
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Read bit `index`
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn get(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Set bit `index` to 1
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn set(&mut self, index: usize) {
        self.bits.set(index, true);
    }

    /// Reset every bit to 0
    pub fn clear_all(&mut self) {
        self.bits.fill(false);
    }

    /// Count of bits currently set to 1
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Bitwise OR into a new array of the same length
    ///
    /// Works on the underlying bytes, O(len/8).
    ///
    /// # Panics
    /// Panics if the lengths differ.
    pub fn bitwise_or(&self, other: &BitArray) -> BitArray {
        self.combine(other, |a, b| a | b)
    }

    /// Bitwise AND into a new array of the same length
    ///
    /// # Panics
    /// Panics if the lengths differ.
    pub fn bitwise_and(&self, other: &BitArray) -> BitArray {
        self.combine(other, |a, b| a & b)
    }

    fn combine(&self, other: &BitArray, op: impl Fn(u8, u8) -> u8) -> BitArray {
        assert_eq!(
            self.len(),
            other.len(),
            "Cannot combine bit arrays of different lengths"
        );

        let mut out = self.clone();
        // Padding bits past `len` are zero in both inputs, so they stay zero.
        for (s, o) in out
            .bits
            .as_raw_mut_slice()
            .iter_mut()
            .zip(other.bits.as_raw_slice())
        {
            *s = op(*s, *o);
        }
        out
    }
}
