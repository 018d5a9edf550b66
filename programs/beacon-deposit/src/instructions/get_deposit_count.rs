//! Get Deposit Count Instruction
//!
//! Read-only query returning the deposit count as 8 little-endian bytes.

use anchor_lang::prelude::*;

use crate::state::DepositTree;

#[derive(Accounts)]
pub struct GetDepositCount<'info> {
    #[account(
        seeds = [DepositTree::SEED_PREFIX],
        bump = deposit_tree.bump,
    )]
    pub deposit_tree: Account<'info, DepositTree>,
}

pub fn handler(ctx: Context<GetDepositCount>) -> Result<[u8; 8]> {
    Ok(ctx.accounts.deposit_tree.deposit_count_le())
}
