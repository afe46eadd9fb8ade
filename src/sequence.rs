//! Fast-forward evaluation of the cubing sequence.
//!
//! The dataset generator walks the sequence `x₀, x₁ = x₀³, x₂ = x₁³, …`
//! over the prime field of order [`SAFE_PRIME`].  Applying the cube k
//! times raises the seed to the `3^k`-th power, and exponents of group
//! elements are only meaningful modulo the group order `p − 1`, so the
//! n-th iterate is `x₀^(3^n mod (p−1)) mod p`.  That observation turns an
//! O(n) walk into one modular exponentiation:
//!
//! * [`reduce_exponent`] collapses "cube n times" into a single 32-bit
//!   exponent `3^n mod (p−1)` by repeated squaring.
//! * [`PowerTable`] caches `x₀^(2^i) mod p` for i in 0..32, one squaring
//!   per entry.
//! * [`PowerTable::quick_eval`] multiplies together the cached entries
//!   selected by the set bits of the reduced exponent.
//!
//! Building a table costs 31 modular squarings; afterwards any iterate up
//! to index `2^32 − 1` is reachable in at most 64 multiplications.  Every
//! participant deriving entries from the same seed obtains bit-identical
//! values regardless of evaluation order, which is what makes sharded
//! dataset generation reproducible across independent workers.

use crate::field::{FIELD, SAFE_PRIME};

/// Order of the multiplicative group modulo [`SAFE_PRIME`].
pub const SAFE_PRIME_TOTIENT: u32 = SAFE_PRIME - 1;

/// Number of cached squarings; covers every 32-bit exponent.
const TABLE_ENTRIES: usize = 32;

/// Computes `3^k mod (SAFE_PRIME − 1)` by repeated squaring.
///
/// This is the exponent carried by the k-th iterate of the cubing
/// sequence.  The totient is even, so this is plain modular arithmetic
/// rather than a [`PrimeField`](crate::PrimeField) operation; all
/// intermediates stay within 64 bits.
pub fn reduce_exponent(k: u32) -> u32 {
    let modulus = SAFE_PRIME_TOTIENT as u64;
    let mut result = 1u64;
    let mut base = 3u64;
    let mut e = k;
    while e > 0 {
        if e & 1 == 1 {
            result = result * base % modulus;
        }
        base = base * base % modulus;
        e >>= 1;
    }
    result as u32
}

/// Precomputed squarings of a sequence seed.
///
/// Entry i holds `seed^(2^i) mod SAFE_PRIME`; entry 0 is the reduced seed
/// itself.  A table is immutable once built and carries no other state,
/// so it may be shared freely across concurrent readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerTable {
    entries: [u32; TABLE_ENTRIES],
}

impl PowerTable {
    /// Builds the table for `seed`.
    ///
    /// Seeds at or above the modulus are reduced first; the base
    /// invariant is `table.base() == seed % SAFE_PRIME`.
    pub fn new(seed: u32) -> Self {
        let mut entries = [0u32; TABLE_ENTRIES];
        entries[0] = seed % SAFE_PRIME;
        for i in 1..TABLE_ENTRIES {
            entries[i] = FIELD.mul(entries[i - 1], entries[i - 1]);
        }
        PowerTable { entries }
    }

    /// Returns the reduced seed, i.e. the 0th iterate of the sequence.
    #[inline]
    pub fn base(&self) -> u32 {
        self.entries[0]
    }

    /// Returns the cached squarings in order.
    #[inline]
    pub fn entries(&self) -> &[u32; TABLE_ENTRIES] {
        &self.entries
    }

    /// Returns the n-th iterate of the cubing sequence in O(log n).
    ///
    /// Decomposes the reduced exponent `3^n mod (p−1)` into its binary
    /// digits and multiplies the cached squarings selected by the set
    /// bits.  `quick_eval(0)` is the seed itself, and
    /// `quick_eval(n + 1) == cube(quick_eval(n))` for every n.
    pub fn quick_eval(&self, n: u32) -> u32 {
        let mut exponent = reduce_exponent(n);
        let mut result = 1u32;
        let mut i = 0;
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = FIELD.mul(result, self.entries[i]);
            }
            exponent >>= 1;
            i += 1;
        }
        result
    }

    /// Evaluates a batch of indices, preserving order.
    ///
    /// Large batches are spread across the rayon pool; results are
    /// bit-identical to the sequential map no matter how the work is
    /// partitioned, so shards computed by different workers agree.
    pub fn eval_batch(&self, indices: &[u32]) -> Vec<u32> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use rayon::prelude::*;

            const PARALLEL_THRESHOLD: usize = 1 << 12;
            if indices.len() >= PARALLEL_THRESHOLD && rayon::current_num_threads() > 1 {
                return indices.par_iter().map(|&n| self.quick_eval(n)).collect();
            }
        }
        indices.iter().map(|&n| self.quick_eval(n)).collect()
    }
}
