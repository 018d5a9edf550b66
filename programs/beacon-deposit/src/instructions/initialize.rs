//! Initialize Instruction
//!
//! Creates the singleton deposit tree account, precomputes the zero-hash
//! table and zeroes the branch and counter. Runs exactly once; the `init`
//! constraint rejects any second attempt.

use anchor_lang::prelude::*;

use crate::events::TreeInitialized;
use crate::state::DepositTree;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = DepositTree::LEN,
        seeds = [DepositTree::SEED_PREFIX],
        bump
    )]
    pub deposit_tree: Box<Account<'info, DepositTree>>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let deposit_tree = &mut ctx.accounts.deposit_tree;

    deposit_tree.initialize(ctx.bumps.deposit_tree);

    emit!(TreeInitialized {
        deposit_tree: deposit_tree.key(),
        authority: ctx.accounts.authority.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Deposit tree initialized");
    Ok(())
}
