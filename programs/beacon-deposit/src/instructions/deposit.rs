//! Deposit Instruction
//!
//! Validates a deposit, derives its deposit data root, checks it against the
//! caller's precomputed root, and appends it to the Merkle tree.
//!
//! Validation is all-or-nothing: the first failing check aborts the whole
//! instruction before any state is touched, so a failed deposit leaves the
//! tree byte-identical and emits no event.
//!
//! The caller supplies `expected_root`, its own off-chain computation of the
//! deposit data root. The registry's derivation is ground truth; the match
//! only fails fast on client-side bugs. The BLS signature is hashed into the
//! leaf but never cryptographically verified here — the beacon chain does
//! that when it processes the deposit.

use anchor_lang::prelude::*;

use crate::crypto::deposit_data::{
    hash_tree_root, PUBKEY_LENGTH, SIGNATURE_LENGTH, WITHDRAWAL_CREDENTIALS_LENGTH,
};
use crate::crypto::sha256::little_endian_64;
use crate::error::DepositError;
use crate::events::DepositEvent;
use crate::state::DepositTree;

/// Base sub-units per deposit unit (gwei denomination).
pub const SUB_UNITS_PER_UNIT: u128 = 1_000_000_000;

/// Smallest accepted deposit value: one unit, in base sub-units.
pub const MIN_DEPOSIT_VALUE: u128 = SUB_UNITS_PER_UNIT;

/// Accounts for deposit instruction.
#[derive(Accounts)]
pub struct Deposit<'info> {
    /// Deposit tree state.
    #[account(
        mut,
        seeds = [DepositTree::SEED_PREFIX],
        bump = deposit_tree.bump,
    )]
    pub deposit_tree: Account<'info, DepositTree>,

    /// Depositor (signs transaction).
    pub depositor: Signer<'info>,
}

/// Handler for deposit instruction.
///
/// # Arguments
/// * `pubkey` - BLS public key, must be exactly 48 bytes
/// * `withdrawal_credentials` - must be exactly 32 bytes
/// * `signature` - BLS signature, must be exactly 96 bytes
/// * `value` - deposited value in base sub-units; at least one unit and an
///   exact multiple of 10^9
/// * `expected_root` - caller's precomputed deposit data root
pub fn handler(
    ctx: Context<Deposit>,
    pubkey: Vec<u8>,
    withdrawal_credentials: Vec<u8>,
    signature: Vec<u8>,
    value: u128,
    expected_root: [u8; 32],
) -> Result<()> {
    let deposit_tree = &mut ctx.accounts.deposit_tree;

    let event = apply_deposit(
        deposit_tree,
        &pubkey,
        &withdrawal_credentials,
        &signature,
        value,
        expected_root,
    )?;

    let index = u64::from_le_bytes(event.index);
    let amount = u64::from_le_bytes(event.amount);
    emit!(event);

    msg!("Deposit accepted");
    msg!("Index: {}", index);
    msg!("Amount: {} units", amount);

    Ok(())
}

/// Validate one deposit and append its leaf to the tree.
///
/// Checks run in a fixed order: capacity, value rules, field lengths, root
/// match. Any failure returns before the tree is touched. On success the
/// leaf is inserted and the `DepositEvent` to emit is returned, carrying the
/// pre-increment deposit index.
pub fn apply_deposit(
    deposit_tree: &mut DepositTree,
    pubkey: &[u8],
    withdrawal_credentials: &[u8],
    signature: &[u8],
    value: u128,
    expected_root: [u8; 32],
) -> Result<DepositEvent> {
    require!(!deposit_tree.is_full(), DepositError::TreeFull);

    let amount = unit_amount(value)?;

    let pubkey: [u8; PUBKEY_LENGTH] = pubkey
        .try_into()
        .map_err(|_| error!(DepositError::InvalidPubkeyLength))?;
    let withdrawal_credentials: [u8; WITHDRAWAL_CREDENTIALS_LENGTH] = withdrawal_credentials
        .try_into()
        .map_err(|_| error!(DepositError::InvalidWithdrawalCredentialsLength))?;
    let signature: [u8; SIGNATURE_LENGTH] = signature
        .try_into()
        .map_err(|_| error!(DepositError::InvalidSignatureLength))?;

    let node = hash_tree_root(&pubkey, &withdrawal_credentials, amount, &signature);
    require!(node == expected_root, DepositError::RootMismatch);

    // Index logged before the counter increments
    let event = DepositEvent {
        pubkey,
        withdrawal_credentials,
        amount: little_endian_64(amount),
        signature,
        index: little_endian_64(deposit_tree.deposit_count),
    };

    deposit_tree.insert(node)?;

    Ok(event)
}

/// Convert a raw value in base sub-units to its unit-denominated amount.
///
/// # Errors
/// * `ValueTooLow` if below one unit
/// * `ValueNotMultipleOfUnit` if not an exact multiple of 10^9
/// * `ValueTooHigh` if the unit amount does not fit in 64 bits
pub fn unit_amount(value: u128) -> Result<u64> {
    require!(value >= MIN_DEPOSIT_VALUE, DepositError::ValueTooLow);
    require!(
        value % SUB_UNITS_PER_UNIT == 0,
        DepositError::ValueNotMultipleOfUnit
    );

    let amount = value / SUB_UNITS_PER_UNIT;
    require!(amount <= u64::MAX as u128, DepositError::ValueTooHigh);

    Ok(amount as u64)
}
