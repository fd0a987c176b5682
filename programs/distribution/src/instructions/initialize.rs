use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{DISTRIBUTION_SEED, TOKEN_DECIMALS, TOTAL_SUPPLY};
use crate::error::DistributionError;
use crate::instructions::unlock::{PoolReleased, PrivateOfferingReleaseReceived};
use crate::state::{DistributionState, Pool, PrivateOfferingLedger};
use crate::utils::token::{load_mint, require_ata, transfer_signed};

/// Binds the mint, fixes the distribution start, pays the immediate pools and forwards
/// the private offering prerelease to the ledger.
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    // Capture AccountInfos/keys before taking mutable borrows.
    let state_ai = ctx.accounts.distribution_state.to_account_info();
    let state_key = state_ai.key();
    let token_program_ai = ctx.accounts.token_program.to_account_info();
    let caller = ctx.accounts.owner.key();

    let st = &mut ctx.accounts.distribution_state;
    st.authorize_begin(caller)?;

    let mint_ai = ctx.accounts.mint.to_account_info();
    let mint_account = load_mint(&mint_ai)?;
    require!(
        mint_account.decimals == TOKEN_DECIMALS,
        DistributionError::InvalidTokenMint
    );
    let mint = mint_ai.key();

    let vault = &ctx.accounts.vault;
    require_ata(vault, &state_key, &mint)?;
    require!(vault.amount == TOTAL_SUPPLY, DistributionError::BalanceMismatch);

    require_ata(
        &ctx.accounts.public_offering_account,
        &st.pool_address(Pool::PublicOffering),
        &mint,
    )?;
    require_ata(
        &ctx.accounts.exchange_account,
        &st.pool_address(Pool::ExchangeRelatedActivities),
        &mint,
    )?;

    let ledger = &mut ctx.accounts.private_offering;
    require_keys_eq!(
        ledger.key(),
        st.private_offering(),
        DistributionError::WrongAddress
    );
    require_ata(&ctx.accounts.private_offering_vault, &ledger.key(), &mint)?;

    let now = Clock::get()?.unix_timestamp;
    let owed = st.begin(caller, mint, now)?;
    ledger.bind_token(state_key, mint)?;

    emit!(DistributionInitialized {
        mint,
        caller,
        start_ts: now,
    });
    emit!(PrivateOfferingInitialized {
        mint,
        caller: state_key,
    });

    let bump = [st.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[DISTRIBUTION_SEED, &bump]];
    for (pool, amount) in owed {
        let destination = match pool {
            Pool::PublicOffering => ctx.accounts.public_offering_account.to_account_info(),
            Pool::ExchangeRelatedActivities => ctx.accounts.exchange_account.to_account_info(),
            Pool::PrivateOffering => ctx.accounts.private_offering_vault.to_account_info(),
            _ => return Err(DistributionError::WrongPool.into()),
        };
        transfer_signed(
            token_program_ai.clone(),
            ctx.accounts.vault.to_account_info(),
            destination,
            state_ai.clone(),
            signer_seeds,
            amount,
        )?;
        let released_total = st.record_release(pool, amount)?;

        emit!(PoolReleased {
            pool,
            destination: st.pool_address(pool),
            amount,
            released_total,
            caller,
        });

        if pool == Pool::PrivateOffering {
            let credited = ledger.receive_release(state_key, amount)?;
            emit!(PrivateOfferingReleaseReceived {
                amount,
                credited,
                unassigned: amount - credited,
            });
        }
    }

    msg!("distribution started at {}", now);
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut, seeds = [DISTRIBUTION_SEED], bump = distribution_state.bump)]
    pub distribution_state: Box<Account<'info, DistributionState>>,

    #[account(mut)]
    pub private_offering: Box<Account<'info, PrivateOfferingLedger>>,

    /// CHECK: Validated as an SPL mint in-handler (`InvalidLedger` otherwise).
    pub mint: UncheckedAccount<'info>,

    /// ATA of the distribution state; must hold exactly the total supply.
    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub public_offering_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub exchange_account: Account<'info, TokenAccount>,

    /// ATA of the private offering ledger.
    #[account(mut)]
    pub private_offering_vault: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct DistributionInitialized {
    pub mint: Pubkey,
    pub caller: Pubkey,
    pub start_ts: i64,
}

#[event]
pub struct PrivateOfferingInitialized {
    pub mint: Pubkey,
    /// Distribution state that bound the ledger.
    pub caller: Pubkey,
}
