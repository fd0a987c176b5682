use anchor_lang::prelude::*;

use crate::constants::{MAX_PARTICIPANTS, PRIVATE_OFFERING_SEED};
use crate::state::PrivateOfferingLedger;

pub fn create_private_offering(ctx: Context<CreatePrivateOffering>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let ledger = &mut ctx.accounts.private_offering;
    ledger.init(owner, ctx.bumps.private_offering);

    emit!(PrivateOfferingCreated {
        owner,
        ledger: ledger.key(),
    });
    Ok(())
}

#[derive(Accounts)]
pub struct CreatePrivateOffering<'info> {
    #[account(
        init,
        payer = owner,
        space = PrivateOfferingLedger::space(MAX_PARTICIPANTS),
        seeds = [PRIVATE_OFFERING_SEED],
        bump
    )]
    pub private_offering: Box<Account<'info, PrivateOfferingLedger>>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct PrivateOfferingCreated {
    pub owner: Pubkey,
    pub ledger: Pubkey,
}
