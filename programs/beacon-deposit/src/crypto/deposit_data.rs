//! Deposit Data Hash-Tree-Root
//!
//! Derives the 32-byte leaf value ("deposit data root") committing to one
//! deposit's fields. The derivation is a fixed 4-level binary Merkle hash
//! over (pubkey, withdrawal_credentials, amount, signature), each field
//! padded to a 32-byte boundary before hashing.
//!
//! This must agree bit-for-bit with the beacon chain's hash-tree-root of the
//! same record; validators and off-chain trackers compute it independently.

use crate::crypto::sha256::{hash_concat, hash_two_to_one, little_endian_64};

/// BLS public key length in bytes.
pub const PUBKEY_LENGTH: usize = 48;

/// Withdrawal credentials length in bytes.
pub const WITHDRAWAL_CREDENTIALS_LENGTH: usize = 32;

/// BLS signature length in bytes.
pub const SIGNATURE_LENGTH: usize = 96;

/// Compute the deposit data root for one deposit.
///
/// # Arguments
/// * `pubkey` - 48-byte BLS public key
/// * `withdrawal_credentials` - 32-byte withdrawal credentials
/// * `amount` - deposit amount in units (gwei denomination)
/// * `signature` - 96-byte BLS signature (hashed only, never verified)
///
/// # Layout
/// ```text
/// pubkey_root    = H(pubkey || [0; 16])
/// signature_root = H(H(signature[0..64]) || H(signature[64..96] || [0; 32]))
/// node           = H(H(pubkey_root || withdrawal_credentials)
///                 || H(le64(amount) || [0; 24] || signature_root))
/// ```
pub fn hash_tree_root(
    pubkey: &[u8; PUBKEY_LENGTH],
    withdrawal_credentials: &[u8; WITHDRAWAL_CREDENTIALS_LENGTH],
    amount: u64,
    signature: &[u8; SIGNATURE_LENGTH],
) -> [u8; 32] {
    // 48-byte pubkey padded to one 64-byte hash block
    let pubkey_root = hash_concat(&[pubkey, &[0u8; 16]]);

    // Signature split at byte 64; the 32-byte tail is padded back to 64
    let signature_root = hash_two_to_one(
        &hash_concat(&[&signature[..64]]),
        &hash_concat(&[&signature[64..], &[0u8; 32]]),
    );

    hash_two_to_one(
        &hash_concat(&[&pubkey_root, withdrawal_credentials]),
        &hash_concat(&[&little_endian_64(amount), &[0u8; 24], &signature_root]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_tree_root_deterministic() {
        let pubkey = [0x11u8; PUBKEY_LENGTH];
        let credentials = [0x22u8; WITHDRAWAL_CREDENTIALS_LENGTH];
        let signature = [0x33u8; SIGNATURE_LENGTH];

        let a = hash_tree_root(&pubkey, &credentials, 32_000_000_000, &signature);
        let b = hash_tree_root(&pubkey, &credentials, 32_000_000_000, &signature);
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_field_binds_the_root() {
        let pubkey = [0x11u8; PUBKEY_LENGTH];
        let credentials = [0x22u8; WITHDRAWAL_CREDENTIALS_LENGTH];
        let signature = [0x33u8; SIGNATURE_LENGTH];
        let base = hash_tree_root(&pubkey, &credentials, 1, &signature);

        let mut other_pubkey = pubkey;
        other_pubkey[47] ^= 1;
        assert_ne!(base, hash_tree_root(&other_pubkey, &credentials, 1, &signature));

        let mut other_credentials = credentials;
        other_credentials[0] ^= 1;
        assert_ne!(base, hash_tree_root(&pubkey, &other_credentials, 1, &signature));

        assert_ne!(base, hash_tree_root(&pubkey, &credentials, 2, &signature));

        // Flip one bit in each signature half; both halves must be committed
        let mut head = signature;
        head[0] ^= 1;
        assert_ne!(base, hash_tree_root(&pubkey, &credentials, 1, &head));

        let mut tail = signature;
        tail[95] ^= 1;
        assert_ne!(base, hash_tree_root(&pubkey, &credentials, 1, &tail));
    }
}
