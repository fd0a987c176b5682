use anchor_lang::prelude::*;

use crate::constants::DISTRIBUTION_SEED;
use crate::state::{DistributionState, Pool};

pub fn change_pool_address(
    ctx: Context<ChangePoolAddress>,
    pool: Pool,
    new_address: Pubkey,
) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let st = &mut ctx.accounts.distribution_state;
    let old_address = st.change_pool_address(pool, caller, new_address)?;

    emit!(PoolAddressChanged {
        pool,
        old_address,
        new_address,
        caller,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ChangePoolAddress<'info> {
    #[account(mut, seeds = [DISTRIBUTION_SEED], bump = distribution_state.bump)]
    pub distribution_state: Box<Account<'info, DistributionState>>,

    /// Current address of the pool.
    pub caller: Signer<'info>,
}

#[event]
pub struct PoolAddressChanged {
    pub pool: Pool,
    pub old_address: Pubkey,
    pub new_address: Pubkey,
    pub caller: Pubkey,
}
