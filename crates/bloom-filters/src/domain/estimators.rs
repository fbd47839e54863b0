//! Cardinality, false-positive-rate and deniability estimators
//!
//! Pure functions over `(m, k, X)` or `(m, k, n)`:
//! - n     = ceil(-(m/k) * ln(1 - X/m))       -- bit-occupancy cardinality
//! - n     = n1 + n2 - n_union                -- inclusion-exclusion (derived)
//! - FPR   = (1 - e^(-kn/m))^k
//! - v     = (2^48 - n) * (1 - e^(-kn/m))^k
//! - gamma = (1 - e^(-(v*k) / (m * (1 - e^(-kn/m)))))^k
//!
//! The occupancy formula only holds for arrays populated by inserts (or ORs
//! of such arrays). An AND of two arrays keeps bits set by distinct items of
//! each side, so intersections go through inclusion-exclusion instead.

use tracing::warn;

use crate::error::FilterError;

/// Size of the alternate item universe assumed by the deniability score
pub const DENIABILITY_UNIVERSE: f64 = 281_474_976_710_656.0; // 2^48

/// Estimate the number of inserted items from the count of set bits
///
/// Fails with `SaturatedFilter` when every bit is set: `ln(0)` diverges.
pub fn estimate_cardinality(bits_set: usize, m: usize, k: usize) -> Result<u64, FilterError> {
    if bits_set >= m {
        warn!(capacity = m, "Cardinality requested on a saturated filter");
        return Err(FilterError::SaturatedFilter { capacity: m });
    }

    let scale = -(m as f64) / (k as f64);
    let occupancy = bits_set as f64 / m as f64;
    let n = (scale * (-occupancy).ln_1p()).ceil();

    Ok(n.max(0.0) as u64)
}

/// Inclusion-exclusion over two cardinality estimates and their union
///
/// Estimator noise can make the raw difference negative; it floors at 0.
pub fn inclusion_exclusion(left: u64, right: u64, union: u64) -> u64 {
    (left + right).saturating_sub(union)
}

/// Probability that a never-inserted item tests present
///
/// The base is clamped into `[0, 1]` before raising it to the k-th power.
pub fn false_positive_rate(n: u64, m: usize, k: usize) -> f64 {
    fill_probability(n, m, k).powi(k as i32)
}

/// Probability a given bit is set after `n` inserts: `1 - e^(-kn/m)`
pub fn fill_probability(n: u64, m: usize, k: usize) -> f64 {
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (-exponent.exp_m1()).clamp(0.0, 1.0)
}

/// Expected number of items from a 2^48 universe matching the filter
///
/// First stage of the deniability score.
pub fn alternate_matches(n: u64, m: usize, k: usize) -> f64 {
    (DENIABILITY_UNIVERSE - n as f64) * fill_probability(n, m, k).powi(k as i32)
}

/// Gamma-deniability score for a filter holding `n` items
///
/// At n == 0 the second stage would divide 0 by 0. It is evaluated through
/// the equivalent form `v / p = (2^48 - n) * p^(k-1)`, which is finite there.
pub fn gamma_deniability(n: u64, m: usize, k: usize) -> f64 {
    let kf = k as f64;
    let mf = m as f64;
    let p = fill_probability(n, m, k);

    let ratio = if p > 0.0 {
        alternate_matches(n, m, k) / p
    } else {
        (DENIABILITY_UNIVERSE - n as f64) * p.powi(k as i32 - 1)
    };

    let inner = -(-(ratio * kf) / mf).exp_m1();
    inner.powi(k as i32)
}
