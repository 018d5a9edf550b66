//! Incremental Merkle Tree over deposit data roots
//!
//! Append-only, fixed-depth (32 levels), sparse. The account stores only the
//! per-level `branch` of retained left-sibling hashes plus the leaf count;
//! unfilled subtrees are represented by precomputed zero hashes. Insertion
//! and root computation both cost O(depth) hashes, so the full tree of up to
//! 2^32 - 1 leaves is never materialized.

use anchor_lang::prelude::*;

use crate::crypto::sha256::{hash_concat, hash_two_to_one, little_endian_64};
use crate::error::DepositError;

/// Tree depth. Fixed; a structural invariant, not a parameter.
pub const DEPOSIT_TREE_DEPTH: usize = 32;

/// Maximum number of deposits the tree can ever hold (2^32 - 1).
///
/// One less than 2^32 so the post-increment count always leaves a zero bit
/// within the 32 levels walked by `insert`.
pub const MAX_DEPOSIT_COUNT: u64 = 4_294_967_295;

/// Deposit tree state account.
///
/// PDA Seeds: `[b"deposit_tree"]`
#[account]
pub struct DepositTree {
    /// Retained left-sibling hash per level. `branch[h]` is meaningful only
    /// while bit `h` of `deposit_count` is set.
    pub branch: [[u8; 32]; DEPOSIT_TREE_DEPTH],

    /// Number of leaves ever inserted. Monotonically increasing, bounded by
    /// `MAX_DEPOSIT_COUNT`.
    pub deposit_count: u64,

    /// Root of an empty subtree of height `h`, per level. Computed once at
    /// initialization, immutable afterwards.
    pub zero_hashes: [[u8; 32]; DEPOSIT_TREE_DEPTH],

    /// PDA bump seed
    pub bump: u8,
}

impl DepositTree {
    /// Seed prefix for PDA derivation
    pub const SEED_PREFIX: &'static [u8] = b"deposit_tree";

    /// Account space calculation
    pub const LEN: usize = 8                       // discriminator
        + 32 * DEPOSIT_TREE_DEPTH                  // branch
        + 8                                        // deposit_count
        + 32 * DEPOSIT_TREE_DEPTH                  // zero_hashes
        + 1;                                       // bump

    /// Initialize the tree with empty state.
    ///
    /// Zeroes `branch` and `deposit_count` and fills the zero-hash table:
    /// `zero_hashes[0] = [0; 32]`, `zero_hashes[h] = H(zh[h-1] || zh[h-1])`.
    pub fn initialize(&mut self, bump: u8) {
        self.branch = [[0u8; 32]; DEPOSIT_TREE_DEPTH];
        self.deposit_count = 0;
        self.zero_hashes = [[0u8; 32]; DEPOSIT_TREE_DEPTH];
        for height in 0..DEPOSIT_TREE_DEPTH - 1 {
            self.zero_hashes[height + 1] =
                hash_two_to_one(&self.zero_hashes[height], &self.zero_hashes[height]);
        }
        self.bump = bump;
    }

    /// Compute the current deposit root.
    ///
    /// Walks all 32 levels, combining `branch[h]` where bit `h` of the count
    /// is set and the zero hash where it is not, then mixes the count into
    /// the final hash so the root commits to how many leaves were inserted.
    ///
    /// Read-only; valid at any count, including 0 and at capacity.
    pub fn deposit_root(&self) -> [u8; 32] {
        let mut node = [0u8; 32];
        let mut size = self.deposit_count;

        for height in 0..DEPOSIT_TREE_DEPTH {
            if size & 1 == 1 {
                node = hash_two_to_one(&self.branch[height], &node);
            } else {
                node = hash_two_to_one(&node, &self.zero_hashes[height]);
            }
            size >>= 1;
        }

        hash_concat(&[&node, &little_endian_64(self.deposit_count), &[0u8; 24]])
    }

    /// Insert a new deposit data root as the next leaf.
    ///
    /// Finds the lowest level whose count bit just flipped from 0 to 1 and
    /// stores the accumulated subtree hash there, combining with previously
    /// retained left siblings on the way up. Amortized O(1) hashes per
    /// insertion over a sequence of deposits.
    ///
    /// # Errors
    /// * `TreeFull` if `deposit_count` has reached `MAX_DEPOSIT_COUNT`
    pub fn insert(&mut self, leaf: [u8; 32]) -> Result<()> {
        require!(self.deposit_count < MAX_DEPOSIT_COUNT, DepositError::TreeFull);

        self.deposit_count += 1;
        let mut node = leaf;
        let mut size = self.deposit_count;

        for height in 0..DEPOSIT_TREE_DEPTH {
            if size & 1 == 1 {
                self.branch[height] = node;
                return Ok(());
            }
            node = hash_two_to_one(&self.branch[height], &node);
            size >>= 1;
        }

        // Unreachable while deposit_count <= MAX_DEPOSIT_COUNT: a count
        // below 2^32 always has a zero bit within 32 levels.
        err!(DepositError::TreeFull)
    }

    /// Check if the tree has reached capacity.
    ///
    /// Permanent once true; no space is ever freed.
    pub fn is_full(&self) -> bool {
        self.deposit_count >= MAX_DEPOSIT_COUNT
    }

    /// Deposit count as 8 little-endian bytes, the external query encoding.
    pub fn deposit_count_le(&self) -> [u8; 8] {
        little_endian_64(self.deposit_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_space() {
        assert_eq!(DepositTree::LEN, 8 + 1024 + 8 + 1024 + 1);
    }

    #[test]
    fn test_zero_hashes_deterministic() {
        let mut a = DepositTree {
            branch: [[0u8; 32]; DEPOSIT_TREE_DEPTH],
            deposit_count: 0,
            zero_hashes: [[0u8; 32]; DEPOSIT_TREE_DEPTH],
            bump: 0,
        };
        let mut b = DepositTree {
            branch: [[0u8; 32]; DEPOSIT_TREE_DEPTH],
            deposit_count: 0,
            zero_hashes: [[0u8; 32]; DEPOSIT_TREE_DEPTH],
            bump: 0,
        };
        a.initialize(255);
        b.initialize(255);
        assert_eq!(a.zero_hashes, b.zero_hashes);
        assert_eq!(a.zero_hashes[0], [0u8; 32]);
        for height in 1..DEPOSIT_TREE_DEPTH {
            assert_eq!(
                a.zero_hashes[height],
                hash_two_to_one(&a.zero_hashes[height - 1], &a.zero_hashes[height - 1])
            );
        }
    }
}
