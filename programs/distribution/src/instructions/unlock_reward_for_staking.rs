use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::DISTRIBUTION_SEED;
use crate::error::DistributionError;
use crate::state::{DistributionState, Pool};
use crate::utils::token::{require_ata, require_pool_approval, transfer_signed};

/// Permissionless, once after the cliff: pays the whole staking reward stake to the pool
/// address and pulls it on to the bridge. The pool ATA must have approved the
/// distribution state as delegate for at least the stake.
pub fn unlock_reward_for_staking(ctx: Context<UnlockRewardForStaking>) -> Result<()> {
    let state_ai = ctx.accounts.distribution_state.to_account_info();
    let state_key = state_ai.key();
    let token_program_ai = ctx.accounts.token_program.to_account_info();
    let caller = ctx.accounts.caller.key();

    let st = &mut ctx.accounts.distribution_state;
    let now = Clock::get()?.unix_timestamp;
    let amount = st.pending_release(Pool::RewardForStaking, now)?;
    let bridge = st.bridge()?;

    let mint = st.mint;
    let pool_address = st.pool_address(Pool::RewardForStaking);
    require_ata(&ctx.accounts.vault, &state_key, &mint)?;
    require_ata(&ctx.accounts.pool_token_account, &pool_address, &mint)?;
    require_ata(&ctx.accounts.bridge_token_account, &bridge, &mint)?;
    require!(
        ctx.accounts.vault.amount >= amount,
        DistributionError::InsufficientVaultBalance
    );

    let pool_account = &ctx.accounts.pool_token_account;
    require_pool_approval(
        pool_account.delegate,
        pool_account.delegated_amount,
        &state_key,
        amount,
    )?;

    let bump = [st.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[DISTRIBUTION_SEED, &bump]];
    transfer_signed(
        token_program_ai.clone(),
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.pool_token_account.to_account_info(),
        state_ai.clone(),
        signer_seeds,
        amount,
    )?;
    // Pull leg: the distribution state acts as the pool ATA's delegate.
    transfer_signed(
        token_program_ai,
        ctx.accounts.pool_token_account.to_account_info(),
        ctx.accounts.bridge_token_account.to_account_info(),
        state_ai,
        signer_seeds,
        amount,
    )?;

    st.record_release(Pool::RewardForStaking, amount)?;

    emit!(RewardForStakingUnlocked {
        bridge,
        pool_address,
        amount,
        caller,
    });

    msg!("staking reward {} bridged to {}", amount, bridge);
    Ok(())
}

#[derive(Accounts)]
pub struct UnlockRewardForStaking<'info> {
    #[account(mut, seeds = [DISTRIBUTION_SEED], bump = distribution_state.bump)]
    pub distribution_state: Box<Account<'info, DistributionState>>,

    /// ATA of the distribution state.
    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    /// ATA of the staking reward pool address, delegated to the distribution state.
    #[account(mut)]
    pub pool_token_account: Account<'info, TokenAccount>,

    /// ATA of the bridge program.
    #[account(mut)]
    pub bridge_token_account: Account<'info, TokenAccount>,

    pub caller: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct RewardForStakingUnlocked {
    pub bridge: Pubkey,
    pub pool_address: Pubkey,
    pub amount: u64,
    pub caller: Pubkey,
}
