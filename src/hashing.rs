//! Keccak-256 primitives for dataset derivation.
//!
//! Three fixed-arity digests over 32-byte values: a plain rehash, a
//! DAG-node variant exposing the digest as four 64-bit words for numeric
//! mixing, and a nonce-mixing variant that absorbs an 8-byte nonce after
//! the input.  All three are pure and deterministic; there are no error
//! paths because every input is fixed-size by construction.

use sha3::{Digest, Keccak256};

use crate::codec::{digest_to_words, encode_nonce};
use crate::NodeDigest;

fn finalize(hasher: Keccak256) -> NodeDigest {
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Applies one Keccak-256 permutation to a 32-byte value.
pub fn hash(input: &NodeDigest) -> NodeDigest {
    let mut hasher = Keccak256::new();
    hasher.update(input);
    finalize(hasher)
}

/// Hashes a 32-byte value into the four-word form used for DAG nodes.
///
/// Semantically the same digest as [`hash`], returned as big-endian
/// 64-bit words.
pub fn dag_hash(input: &NodeDigest) -> [u64; 4] {
    digest_to_words(&hash(input))
}

/// Hashes a 32-byte value together with a 64-bit nonce.
///
/// The nonce's 8-byte encoding is absorbed after the input, so distinct
/// nonces over the same header yield independent candidate digests
/// without touching the dataset itself.
pub fn rand_hash(input: &NodeDigest, nonce: u64) -> [u64; 4] {
    let mut hasher = Keccak256::new();
    hasher.update(input);
    hasher.update(encode_nonce(nonce));
    digest_to_words(&finalize(hasher))
}
