#![deny(missing_docs)]

//! # dagger_house
//!
//! **Dagger-House** is the deterministic numeric and hashing kernel behind a
//! memory-hard, ASIC-resistant proof-of-work dataset.  It provides exactly
//! the primitives a miner or verifier needs to derive any single dataset
//! entry from a seed, in logarithmic time, with bit-identical results on
//! every node.  Dataset assembly, storage and the outer mix function belong
//! to the surrounding driver.
//!
//! ## Features
//!
//! * **Keccak-256 primitives** via the [`hashing`](hashing/index.html)
//!   module: a plain 32-byte rehash, the DAG-node word view, and a
//!   nonce-mixing variant for candidate search.
//! * **Safe-prime cubing permutations** via the [`field`](field/index.html)
//!   module: two fixed 32-bit prime fields on which `x ↦ x³` is a total
//!   bijection, with all intermediates widened before reduction.
//! * **Fast-forward sequence evaluation** via the
//!   [`sequence`](sequence/index.html) module: a 32-entry power table that
//!   reaches the n-th iterate of the cubing sequence in O(log n) instead of
//!   O(n), for any 32-bit index.
//! * **Fixed byte/word codecs** via the [`codec`](codec/index.html) module:
//!   one crate-wide big-endian convention for nonces, digest words and hex
//!   fixtures.
//!
//! ## Usage
//!
//! The fast path and the naive definition agree on every index:
//!
//! ```rust
//! use dagger_house::{cube, PowerTable};
//!
//! let table = PowerTable::new(1_799_198_831);
//! assert_eq!(table.quick_eval(0), table.base());
//! assert_eq!(table.quick_eval(1), cube(table.base()));
//! assert_eq!(table.quick_eval(1), 2_685_204_534);
//! ```
//!
//! Every function in the crate is a pure computation over its explicit
//! inputs; the only derived state, [`PowerTable`], is immutable after
//! construction and safe to query from any number of threads.

pub mod codec;
pub mod field;
pub mod hashing;
pub mod sequence;

/// A fixed 256-bit value: 32 bytes, equivalently four 64-bit words.
pub type NodeDigest = [u8; 32];

pub use codec::{
    decode_nonce, digest_from_hex, digest_to_hex, digest_to_words, encode_nonce, words_to_digest,
};
pub use field::{cube, cube2, PrimeField, SAFE_PRIME, SAFE_PRIME2};
pub use hashing::{dag_hash, hash, rand_hash};
pub use sequence::{reduce_exponent, PowerTable, SAFE_PRIME_TOTIENT};
