//! SHA-256 Hash Functions
//!
//! All tree nodes and the deposit-data hash-tree-root use SHA-256, matching
//! the beacon chain's object hashing convention. Off-chain indexers that
//! reconstruct the deposit list recompute the exact same hashes, so nothing
//! here may deviate from `H(a || b)` over raw bytes.
//!
//! SHA-256 is available as a Solana syscall via `solana_program::hash`.

use solana_program::hash::hashv;

/// Hash two 32-byte values for Merkle tree internal nodes.
///
/// # Returns
/// Parent node hash: SHA256(left || right)
pub fn hash_two_to_one(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    hashv(&[left, right]).to_bytes()
}

/// Hash the concatenation of an arbitrary list of byte slices.
///
/// Used where a hash input is assembled from padded fields rather than
/// two tree nodes.
pub fn hash_concat(parts: &[&[u8]]) -> [u8; 32] {
    hashv(parts).to_bytes()
}

/// Encode a u64 as 8 little-endian bytes.
///
/// Byte `i` carries `(value >> (8 * i)) & 0xFF`. This is the encoding used
/// for the deposit amount, the deposit index, and the count mixed into the
/// tree root.
#[inline]
pub fn little_endian_64(value: u64) -> [u8; 8] {
    value.to_le_bytes()
}
