use anchor_lang::prelude::*;

use crate::constants::PRIVATE_OFFERING_SEED;
use crate::state::PrivateOfferingLedger;

pub fn add_participants(
    ctx: Context<AddParticipants>,
    wallets: Vec<Pubkey>,
    stakes: Vec<u64>,
    seal: bool,
) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let ledger = &mut ctx.accounts.private_offering;
    ledger.add_participants(owner, &wallets, &stakes, seal)?;

    emit!(ParticipantsAdded {
        count_added: wallets.len() as u8,
        new_total: ledger.participants.len() as u8,
        total_stake: ledger.total_stake,
        unassigned_stake: ledger.unassigned_stake(),
        sealed: ledger.sealed,
        stake_table_hash: ledger.stake_table_hash,
    });

    if ledger.sealed {
        msg!("participant table sealed with {} entries", ledger.participants.len());
    }
    Ok(())
}

#[derive(Accounts)]
pub struct AddParticipants<'info> {
    #[account(
        mut,
        seeds = [PRIVATE_OFFERING_SEED],
        bump = private_offering.bump
    )]
    pub private_offering: Box<Account<'info, PrivateOfferingLedger>>,

    pub owner: Signer<'info>,
}

#[event]
pub struct ParticipantsAdded {
    pub count_added: u8,
    pub new_total: u8,
    pub total_stake: u64,
    pub unassigned_stake: u64,
    pub sealed: bool,
    /// Zero until sealed.
    pub stake_table_hash: [u8; 32],
}
