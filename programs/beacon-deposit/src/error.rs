//! Unified error types for the deposit registry
//!
//! Every failure aborts the whole operation with no state mutation and is
//! reported verbatim to the caller; nothing is retried or masked. Error
//! codes are stable across versions for client compatibility.

use anchor_lang::prelude::*;

#[error_code]
pub enum DepositError {
    // ========== Tree Errors ==========

    /// Merkle tree has reached maximum capacity (2^32 - 1 deposits).
    /// Permanent; no space is ever freed.
    #[msg("Deposit tree is full")]
    TreeFull, // 6000

    // ========== Value Errors ==========

    /// Deposit value below the one-unit minimum
    #[msg("Deposit value below minimum: at least 1 unit (10^9 sub-units) required")]
    ValueTooLow, // 6001

    /// Deposit value not an exact multiple of the base unit
    #[msg("Deposit value must be a multiple of 10^9 sub-units")]
    ValueNotMultipleOfUnit, // 6002

    /// Unit-denominated amount does not fit in 64 bits
    #[msg("Deposit value too high: unit amount must fit in 64 bits")]
    ValueTooHigh, // 6003

    // ========== Field Length Errors ==========

    /// Public key is not exactly 48 bytes
    #[msg("Invalid pubkey length: expected 48 bytes")]
    InvalidPubkeyLength, // 6004

    /// Withdrawal credentials are not exactly 32 bytes
    #[msg("Invalid withdrawal credentials length: expected 32 bytes")]
    InvalidWithdrawalCredentialsLength, // 6005

    /// Signature is not exactly 96 bytes
    #[msg("Invalid signature length: expected 96 bytes")]
    InvalidSignatureLength, // 6006

    // ========== Root Errors ==========

    /// Caller-supplied deposit data root disagrees with the registry's own
    /// derivation. Signals a client-side computation bug, not a tree problem.
    #[msg("Reconstructed deposit data root does not match supplied root")]
    RootMismatch, // 6007
}
