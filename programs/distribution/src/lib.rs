use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::{Pool, PoolAddresses};

declare_id!("9bazgAckFCTn4kKTnphFDNA8NUXnLEZnUXS9eEEWwW63");

#[program]
pub mod distribution {
    use super::*;

    pub fn create_distribution(
        ctx: Context<CreateDistribution>,
        epoch_duration: i64,
        addresses: PoolAddresses,
    ) -> Result<()> {
        instructions::create_distribution::create_distribution(ctx, epoch_duration, addresses)
    }

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::initialize(ctx)
    }

    pub fn unlock(ctx: Context<Unlock>, pool: Pool) -> Result<()> {
        instructions::unlock::unlock(ctx, pool)
    }

    pub fn unlock_reward_for_staking(ctx: Context<UnlockRewardForStaking>) -> Result<()> {
        instructions::unlock_reward_for_staking::unlock_reward_for_staking(ctx)
    }

    pub fn change_pool_address(
        ctx: Context<ChangePoolAddress>,
        pool: Pool,
        new_address: Pubkey,
    ) -> Result<()> {
        instructions::change_pool_address::change_pool_address(ctx, pool, new_address)
    }

    pub fn set_bridge_address(ctx: Context<SetBridgeAddress>) -> Result<()> {
        instructions::set_bridge_address::set_bridge_address(ctx)
    }

    pub fn emit_unlock_quote(ctx: Context<EmitUnlockQuote>, pool: Pool) -> Result<()> {
        instructions::emit_unlock_quote::emit_unlock_quote(ctx, pool)
    }

    pub fn create_private_offering(ctx: Context<CreatePrivateOffering>) -> Result<()> {
        instructions::create_private_offering::create_private_offering(ctx)
    }

    pub fn add_participants(
        ctx: Context<AddParticipants>,
        wallets: Vec<Pubkey>,
        stakes: Vec<u64>,
        seal: bool,
    ) -> Result<()> {
        instructions::add_participants::add_participants(ctx, wallets, stakes, seal)
    }

    pub fn set_distribution_address(ctx: Context<SetDistributionAddress>) -> Result<()> {
        instructions::set_distribution_address::set_distribution_address(ctx)
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw::withdraw(ctx)
    }

    pub fn burn_unassigned(ctx: Context<BurnUnassigned>) -> Result<()> {
        instructions::burn_unassigned::burn_unassigned(ctx)
    }
}
