use anchor_lang::prelude::*;

use crate::constants::DISTRIBUTION_SEED;
use crate::state::{DistributionState, Pool};

/// Emits what `unlock` would move for `pool` right now, without moving anything.
pub fn emit_unlock_quote(ctx: Context<EmitUnlockQuote>, pool: Pool) -> Result<()> {
    let st = &ctx.accounts.distribution_state;
    let now = Clock::get()?.unix_timestamp;
    let releasable = st.releasable(pool, now)?;
    let unlockable = st.unlockable(pool, now)?;

    emit!(UnlockQuote {
        pool,
        now_ts: now,
        releasable,
        released: st.released(pool),
        unlockable,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitUnlockQuote<'info> {
    #[account(seeds = [DISTRIBUTION_SEED], bump = distribution_state.bump)]
    pub distribution_state: Box<Account<'info, DistributionState>>,
}

#[event]
pub struct UnlockQuote {
    pub pool: Pool,
    pub now_ts: i64,
    pub releasable: u64,
    pub released: u64,
    pub unlockable: u64,
}
