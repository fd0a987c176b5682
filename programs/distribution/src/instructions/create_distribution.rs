use anchor_lang::prelude::*;

use crate::constants::DISTRIBUTION_SEED;
use crate::state::{DistributionState, PoolAddresses};

pub fn create_distribution(
    ctx: Context<CreateDistribution>,
    epoch_duration: i64,
    addresses: PoolAddresses,
) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let st = &mut ctx.accounts.distribution_state;
    st.configure(owner, epoch_duration, &addresses, ctx.bumps.distribution_state)?;

    emit!(DistributionCreated {
        owner,
        epoch_duration,
        addresses,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateDistribution<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + DistributionState::SIZE,
        seeds = [DISTRIBUTION_SEED],
        bump
    )]
    pub distribution_state: Account<'info, DistributionState>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct DistributionCreated {
    pub owner: Pubkey,
    pub epoch_duration: i64,
    pub addresses: PoolAddresses,
}
