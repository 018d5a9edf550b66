//! Events for the deposit registry

use anchor_lang::prelude::*;

#[event]
pub struct TreeInitialized {
    pub deposit_tree: Pubkey,
    pub authority: Pubkey,
    pub timestamp: i64,
}

/// Emitted on every successful deposit.
///
/// This is the primary integration contract with off-chain indexers: the
/// account state never exposes individual leaves, so trackers reconstruct
/// the deposit list from these events and recompute the root independently.
/// `amount` and `index` are 8 little-endian bytes; `index` is the position
/// at insertion time, i.e. the count before the counter incremented.
#[event]
pub struct DepositEvent {
    pub pubkey: [u8; 48],
    pub withdrawal_credentials: [u8; 32],
    pub amount: [u8; 8],
    pub signature: [u8; 96],
    pub index: [u8; 8],
}
