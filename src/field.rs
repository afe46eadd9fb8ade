//! Safe-prime field arithmetic for the cubing permutation.
//!
//! This module provides arithmetic in the two fixed prime fields used by
//! the kernel.  The [`PrimeField`] type encapsulates a 32-bit prime
//! modulus and exposes multiplication, exponentiation and the cubing map
//! `x ↦ x³ mod p`.  Every multiplication widens its operands to 64 bits
//! and reduces before the next step, so no intermediate product can
//! silently truncate.
//!
//! Both moduli are *safe primes* in the sense required by the sequence
//! generator: 3 does not divide `p − 1`, which makes cubing a total
//! bijection on `[0, p)`.  The condition is checked once, at compile
//! time, where the constants are defined.

/// Primary modulus of the cubing permutation.
pub const SAFE_PRIME: u32 = 4_294_967_087;

/// Modulus of the secondary, independently parameterized permutation.
pub const SAFE_PRIME2: u32 = 4_294_965_887;

// Cubing is a bijection mod p only when 3 does not divide p - 1.
const _: () = assert!((SAFE_PRIME - 1) % 3 != 0);
const _: () = assert!((SAFE_PRIME2 - 1) % 3 != 0);

pub(crate) const FIELD: PrimeField = PrimeField::new(SAFE_PRIME);
pub(crate) const FIELD2: PrimeField = PrimeField::new(SAFE_PRIME2);

/// A finite field defined by a 32-bit odd prime modulus.
///
/// The `PrimeField` type stores the modulus `p` and provides elementary
/// arithmetic over the integers modulo `p`.  It does not perform
/// primality testing; it is the caller's responsibility to supply an odd
/// prime.  The two moduli used by the kernel are exposed as the
/// [`SAFE_PRIME`] and [`SAFE_PRIME2`] constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeField {
    p: u32,
}

impl PrimeField {
    /// Creates a new finite field with the given modulus.
    ///
    /// # Panics
    ///
    /// Panics if the modulus is less than 3 or even.  Only odd primes are
    /// supported.
    pub const fn new(p: u32) -> Self {
        assert!(p >= 3 && p % 2 == 1, "p must be an odd prime >= 3");
        PrimeField { p }
    }

    /// Returns the modulus of the field.
    #[inline]
    pub fn modulus(&self) -> u32 {
        self.p
    }

    /// Multiplies two field elements.
    #[inline]
    pub fn mul(&self, a: u32, b: u32) -> u32 {
        let a = a % self.p;
        let b = b % self.p;
        ((a as u64 * b as u64) % self.p as u64) as u32
    }

    /// Cubes a field element.
    ///
    /// Reduces after the intermediate square so the running product never
    /// exceeds 64 bits.
    #[inline]
    pub fn cube(&self, x: u32) -> u32 {
        self.mul(self.mul(x, x), x)
    }

    /// Exponentiates `a` by `e` modulo `p` via repeated squaring.
    #[inline]
    pub fn pow(&self, mut a: u32, mut e: u32) -> u32 {
        a %= self.p;
        let mut result = 1u32;
        while e > 0 {
            if e & 1 == 1 {
                result = self.mul(result, a);
            }
            a = self.mul(a, a);
            e >>= 1;
        }
        result
    }
}

/// Applies the primary cubing permutation `x ↦ x³ mod SAFE_PRIME`.
#[inline]
pub fn cube(x: u32) -> u32 {
    FIELD.cube(x)
}

/// Applies the secondary cubing permutation `x ↦ x³ mod SAFE_PRIME2`.
#[inline]
pub fn cube2(x: u32) -> u32 {
    FIELD2.cube(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_matches_reference_value() {
        // (-10)^3 = -1000 mod SAFE_PRIME
        assert_eq!(cube(4_294_967_077), 4_294_966_087);
    }

    #[test]
    fn cube2_matches_reference_value() {
        // (-900)^3 = -729000000 mod SAFE_PRIME2
        assert_eq!(cube2(4_294_964_987), 3_565_965_887);
    }

    #[test]
    fn cube_reduces_large_inputs() {
        assert_eq!(cube(SAFE_PRIME), 0);
        assert_eq!(cube(SAFE_PRIME + 1), 1);
        assert_eq!(cube(0), 0);
        assert_eq!(cube(1), 1);
    }

    #[test]
    fn pow_agrees_with_repeated_multiplication() {
        let field = PrimeField::new(SAFE_PRIME);
        let base = 2_685_204_534u32;
        let mut acc = 1u32;
        for e in 0..64u32 {
            assert_eq!(field.pow(base, e), acc);
            acc = field.mul(acc, base);
        }
    }

    #[test]
    fn cube_is_injective_on_a_sample() {
        // A bijection cannot collide; spot-check a contiguous window.
        let mut seen = std::collections::HashSet::new();
        for x in 0..10_000u32 {
            assert!(seen.insert(cube(x)), "collision at {x}");
        }
    }

    #[test]
    fn widening_near_the_modulus() {
        // The largest residues stress the 64-bit intermediates.
        let field = PrimeField::new(SAFE_PRIME);
        let max = SAFE_PRIME - 1;
        assert_eq!(field.mul(max, max), 1);
        assert_eq!(field.cube(max), max);
    }
}
