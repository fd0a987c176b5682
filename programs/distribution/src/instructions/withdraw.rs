use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::PRIVATE_OFFERING_SEED;
use crate::error::DistributionError;
use crate::state::PrivateOfferingLedger;
use crate::utils::token::{require_ata, transfer_signed};

/// Transfers everything credited to the signing participant and not yet withdrawn.
pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
    let ledger_ai = ctx.accounts.private_offering.to_account_info();
    let ledger_key = ledger_ai.key();
    let participant = ctx.accounts.participant.key();

    let ledger = &mut ctx.accounts.private_offering;
    require!(ledger.initialized, DistributionError::NotInitialized);
    let mint = ledger.mint;
    require_ata(&ctx.accounts.ledger_vault, &ledger_key, &mint)?;
    require_ata(&ctx.accounts.participant_token_account, &participant, &mint)?;

    let amount = ledger.withdrawable(&participant)?;
    require!(amount > 0, DistributionError::NothingToWithdraw);
    require!(
        ctx.accounts.ledger_vault.amount >= amount,
        DistributionError::InsufficientVaultBalance
    );

    let bump = [ledger.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[PRIVATE_OFFERING_SEED, &bump]];
    transfer_signed(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.ledger_vault.to_account_info(),
        ctx.accounts.participant_token_account.to_account_info(),
        ledger_ai,
        signer_seeds,
        amount,
    )?;
    ledger.record_withdrawal(&participant)?;

    emit!(ParticipantWithdrawn {
        participant,
        amount,
    });

    msg!("participant {} withdrew {}", participant, amount);
    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
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
    pub participant_token_account: Account<'info, TokenAccount>,

    pub participant: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct ParticipantWithdrawn {
    pub participant: Pubkey,
    pub amount: u64,
}
