use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::DISTRIBUTION_SEED;
use crate::error::DistributionError;
use crate::state::{DistributionState, Pool, PrivateOfferingLedger};
use crate::utils::token::{require_ata, transfer_signed};

/// Permissionless: moves whatever vested since the last release of `pool` to its current
/// address. Private offering releases land in the ledger and are credited to participants.
/// The staking reward pool is rejected with `WrongPool`; it goes through
/// `unlock_reward_for_staking`.
pub fn unlock(ctx: Context<Unlock>, pool: Pool) -> Result<()> {
    require!(pool != Pool::RewardForStaking, DistributionError::WrongPool);

    // Keys and AccountInfos are captured before the state is borrowed mutably.
    let state_ai = ctx.accounts.distribution_state.to_account_info();
    let state_key = state_ai.key();
    let caller = ctx.accounts.caller.key();

    let st = &mut ctx.accounts.distribution_state;
    let now = Clock::get()?.unix_timestamp;
    let amount = st.pending_release(pool, now)?;

    let mint = st.mint;
    let destination_owner = st.pool_address(pool);
    require_ata(&ctx.accounts.vault, &state_key, &mint)?;
    require_ata(&ctx.accounts.destination, &destination_owner, &mint)?;
    require!(
        ctx.accounts.vault.amount >= amount,
        DistributionError::InsufficientVaultBalance
    );

    if pool == Pool::PrivateOffering {
        let ledger = ctx
            .accounts
            .private_offering
            .as_ref()
            .ok_or(DistributionError::MissingPrivateOffering)?;
        require_keys_eq!(
            ledger.key(),
            destination_owner,
            DistributionError::WrongAddress
        );
    }

    let bump = [st.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[DISTRIBUTION_SEED, &bump]];
    transfer_signed(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.destination.to_account_info(),
        state_ai,
        signer_seeds,
        amount,
    )?;

    let released_total = st.record_release(pool, amount)?;

    emit!(PoolReleased {
        pool,
        destination: destination_owner,
        amount,
        released_total,
        caller,
    });

    if let Some(ledger) = ctx.accounts.private_offering.as_mut() {
        if pool == Pool::PrivateOffering {
            let credited = ledger.receive_release(state_key, amount)?;
            emit!(PrivateOfferingReleaseReceived {
                amount,
                credited,
                unassigned: amount - credited,
            });
        }
    }

    msg!("unlocked {} from pool {:?}", amount, pool);
    Ok(())
}

#[derive(Accounts)]
pub struct Unlock<'info> {
    #[account(mut, seeds = [DISTRIBUTION_SEED], bump = distribution_state.bump)]
    pub distribution_state: Box<Account<'info, DistributionState>>,

    /// ATA of the distribution state.
    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    /// ATA of the pool's current address (the ledger for the private offering).
    #[account(mut)]
    pub destination: Account<'info, TokenAccount>,

    /// Required for the private offering pool only.
    #[account(mut)]
    pub private_offering: Option<Account<'info, PrivateOfferingLedger>>,

    pub caller: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct PoolReleased {
    pub pool: Pool,
    /// Pool address at release time (owner of the credited ATA).
    pub destination: Pubkey,
    pub amount: u64,
    pub released_total: u64,
    pub caller: Pubkey,
}

#[event]
pub struct PrivateOfferingReleaseReceived {
    pub amount: u64,
    pub credited: u64,
    pub unassigned: u64,
}
