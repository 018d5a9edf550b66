//! Get Deposit Root Instruction
//!
//! Read-only query returning the current deposit root via Anchor return
//! data. Callable unconditionally, including on an empty or full tree.

use anchor_lang::prelude::*;

use crate::state::DepositTree;

#[derive(Accounts)]
pub struct GetDepositRoot<'info> {
    #[account(
        seeds = [DepositTree::SEED_PREFIX],
        bump = deposit_tree.bump,
    )]
    pub deposit_tree: Account<'info, DepositTree>,
}

pub fn handler(ctx: Context<GetDepositRoot>) -> Result<[u8; 32]> {
    Ok(ctx.accounts.deposit_tree.deposit_root())
}
