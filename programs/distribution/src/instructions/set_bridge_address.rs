use anchor_lang::prelude::*;

use crate::constants::DISTRIBUTION_SEED;
use crate::state::DistributionState;

pub fn set_bridge_address(ctx: Context<SetBridgeAddress>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let bridge = ctx.accounts.bridge.key();
    let executable = ctx.accounts.bridge.executable;

    let st = &mut ctx.accounts.distribution_state;
    let old_bridge = st.set_bridge(owner, bridge, executable)?;

    emit!(BridgeAddressSet {
        old_bridge,
        bridge,
        caller: owner,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetBridgeAddress<'info> {
    #[account(mut, seeds = [DISTRIBUTION_SEED], bump = distribution_state.bump)]
    pub distribution_state: Box<Account<'info, DistributionState>>,

    /// CHECK: Only its key and `executable` flag are read.
    pub bridge: UncheckedAccount<'info>,

    pub owner: Signer<'info>,
}

#[event]
pub struct BridgeAddressSet {
    pub old_bridge: Pubkey,
    pub bridge: Pubkey,
    pub caller: Pubkey,
}
