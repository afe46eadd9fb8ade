//! Fixed-width byte and word codecs for dataset material.
//!
//! Every multi-byte quantity in the kernel uses one global convention:
//! big-endian.  The routines in this module convert 64-bit nonces to and
//! from their 8-byte wire form, expose 32-byte digests as four 64-bit
//! words (and back), and provide hex helpers for logging and test
//! fixtures.  All conversions are total and lossless.

use crate::NodeDigest;

/// Encodes a 64-bit nonce as its fixed 8-byte big-endian representation.
#[inline]
pub fn encode_nonce(value: u64) -> [u8; 8] {
    value.to_be_bytes()
}

/// Decodes an 8-byte big-endian representation back into a 64-bit nonce.
///
/// Inverse of [`encode_nonce`]: `decode_nonce(&encode_nonce(v)) == v` for
/// every `v`.
#[inline]
pub fn decode_nonce(bytes: &[u8; 8]) -> u64 {
    u64::from_be_bytes(*bytes)
}

/// Reinterprets a 32-byte digest as four big-endian 64-bit words.
// TODO: cross-check the byte order against a vector with a non-palindromic
// fill before relying on wire compatibility with other implementations.
#[inline]
pub fn digest_to_words(digest: &NodeDigest) -> [u64; 4] {
    let mut words = [0u64; 4];
    for (i, word) in words.iter_mut().enumerate() {
        let mut chunk = [0u8; 8];
        chunk.copy_from_slice(&digest[8 * i..8 * i + 8]);
        *word = u64::from_be_bytes(chunk);
    }
    words
}

/// Reassembles a 32-byte digest from four big-endian 64-bit words.
///
/// Inverse of [`digest_to_words`]; the two views always denote the same
/// bit pattern.
#[inline]
pub fn words_to_digest(words: &[u64; 4]) -> NodeDigest {
    let mut digest = [0u8; 32];
    for (i, word) in words.iter().enumerate() {
        digest[8 * i..8 * i + 8].copy_from_slice(&word.to_be_bytes());
    }
    digest
}

/// Renders a digest as a lowercase hex string.
pub fn digest_to_hex(digest: &NodeDigest) -> String {
    hex::encode(digest)
}

/// Parses a 64-character hex string into a digest.
pub fn digest_from_hex(input: &str) -> Result<NodeDigest, String> {
    let bytes = hex::decode(input).map_err(|err| format!("invalid digest hex: {err}"))?;
    if bytes.len() != 32 {
        return Err(format!("expected 32 digest bytes, found {}", bytes.len()));
    }
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&bytes);
    Ok(digest)
}
