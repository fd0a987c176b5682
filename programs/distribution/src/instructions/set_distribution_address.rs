use anchor_lang::prelude::*;

use crate::constants::PRIVATE_OFFERING_SEED;
use crate::state::{DistributionState, PrivateOfferingLedger};

/// One-shot handshake: the ledger accepts a distribution only if that distribution
/// already names this ledger as its private offering pool address.
pub fn set_distribution_address(ctx: Context<SetDistributionAddress>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let distribution = ctx.accounts.distribution_state.key();
    let registered = ctx.accounts.distribution_state.private_offering();
    let this_ledger = ctx.accounts.private_offering.key();

    let ledger = &mut ctx.accounts.private_offering;
    ledger.set_distribution(owner, distribution, registered, this_ledger)?;

    emit!(DistributionAddressSet {
        distribution,
        caller: owner,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetDistributionAddress<'info> {
    #[account(
        mut,
        seeds = [PRIVATE_OFFERING_SEED],
        bump = private_offering.bump
    )]
    pub private_offering: Box<Account<'info, PrivateOfferingLedger>>,

    pub distribution_state: Box<Account<'info, DistributionState>>,

    pub owner: Signer<'info>,
}

#[event]
pub struct DistributionAddressSet {
    pub distribution: Pubkey,
    pub caller: Pubkey,
}
