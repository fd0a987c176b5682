use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount};

use crate::constants::PRIVATE_OFFERING_SEED;
use crate::error::DistributionError;
use crate::state::PrivateOfferingLedger;
use crate::utils::token::require_ata;

/// Burns the unassigned bucket: the implicit zero-key stake's share of every release plus
/// floor remainders. Never reaches a participant.
pub fn burn_unassigned(ctx: Context<BurnUnassigned>) -> Result<()> {
    let ledger_ai = ctx.accounts.private_offering.to_account_info();
    let ledger_key = ledger_ai.key();
    let owner = ctx.accounts.owner.key();

    let ledger = &mut ctx.accounts.private_offering;
    require!(ledger.initialized, DistributionError::NotInitialized);
    require_keys_eq!(
        ctx.accounts.mint.key(),
        ledger.mint,
        DistributionError::InvalidTokenMint
    );
    require_ata(&ctx.accounts.ledger_vault, &ledger_key, &ledger.mint)?;

    let amount = ledger.take_unassigned(owner)?;
    require!(
        ctx.accounts.ledger_vault.amount >= amount,
        DistributionError::InsufficientVaultBalance
    );

    let bump = [ledger.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[PRIVATE_OFFERING_SEED, &bump]];
    token::burn(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.mint.to_account_info(),
                from: ctx.accounts.ledger_vault.to_account_info(),
                authority: ledger_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(UnassignedBurned {
        amount,
        total_burned: ledger.unassigned_burned,
        caller: owner,
    });

    msg!("burned {} unassigned", amount);
    Ok(())
}

#[derive(Accounts)]
pub struct BurnUnassigned<'info> {
    #[account(
        mut,
        seeds = [PRIVATE_OFFERING_SEED],
        bump = private_offering.bump
    )]
    pub private_offering: Box<Account<'info, PrivateOfferingLedger>>,

    /// ATA of the private offering ledger.
    #[account(mut)]
    pub ledger_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub mint: Account<'info, Mint>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct UnassignedBurned {
    pub amount: u64,
    pub total_burned: u64,
    pub caller: Pubkey,
}
