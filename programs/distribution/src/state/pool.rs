use anchor_lang::prelude::*;

use crate::constants::*;
use crate::utils::schedule::ReleaseShape;

/// The closed set of pools the total supply is split into.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Pool {
    RewardForStaking,
    EcosystemFund,
    PublicOffering,
    PrivateOffering,
    FoundationReward,
    ExchangeRelatedActivities,
}

impl Pool {
    pub const ALL: [Pool; POOL_COUNT] = [
        Pool::RewardForStaking,
        Pool::EcosystemFund,
        Pool::PublicOffering,
        Pool::PrivateOffering,
        Pool::FoundationReward,
        Pool::ExchangeRelatedActivities,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Fixed share of the total supply.
    pub const fn stake(self) -> u64 {
        match self {
            Pool::RewardForStaking => REWARD_FOR_STAKING_STAKE,
            Pool::EcosystemFund => ECOSYSTEM_FUND_STAKE,
            Pool::PublicOffering => PUBLIC_OFFERING_STAKE,
            Pool::PrivateOffering => PRIVATE_OFFERING_STAKE,
            Pool::FoundationReward => FOUNDATION_REWARD_STAKE,
            Pool::ExchangeRelatedActivities => EXCHANGE_RELATED_ACTIVITIES_STAKE,
        }
    }

    pub const fn shape(self) -> ReleaseShape {
        match self {
            Pool::RewardForStaking => ReleaseShape::Bridged {
                cliff_epochs: REWARD_FOR_STAKING_CLIFF_EPOCHS,
            },
            Pool::EcosystemFund => ReleaseShape::Installments {
                prerelease_percent: 0,
                cliff_epochs: ECOSYSTEM_FUND_CLIFF_EPOCHS,
                percent_at_cliff: ECOSYSTEM_FUND_PERCENT_AT_CLIFF,
                installment_count: ECOSYSTEM_FUND_INSTALLMENTS,
                installment_epochs: 1,
            },
            Pool::PrivateOffering => ReleaseShape::Installments {
                prerelease_percent: PRIVATE_OFFERING_PRERELEASE_PERCENT,
                cliff_epochs: PRIVATE_OFFERING_CLIFF_EPOCHS,
                percent_at_cliff: PRIVATE_OFFERING_PERCENT_AT_CLIFF,
                installment_count: PRIVATE_OFFERING_INSTALLMENTS,
                installment_epochs: 1,
            },
            Pool::FoundationReward => ReleaseShape::Installments {
                prerelease_percent: 0,
                cliff_epochs: FOUNDATION_REWARD_CLIFF_EPOCHS,
                percent_at_cliff: FOUNDATION_REWARD_PERCENT_AT_CLIFF,
                installment_count: FOUNDATION_REWARD_INSTALLMENTS,
                installment_epochs: 1,
            },
            Pool::PublicOffering | Pool::ExchangeRelatedActivities => ReleaseShape::Immediate,
        }
    }

    /// Pools whose address the current holder may hand over.
    pub const fn is_governable(self) -> bool {
        matches!(self, Pool::EcosystemFund | Pool::FoundationReward)
    }
}

/// Per-pool mutable state kept by the distribution.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolRecord {
    /// Current payout destination (wallet owning the destination ATA).
    pub address: Pubkey,
    /// Cumulative amount paid out; never above the pool stake.
    pub released: u64,
}

impl PoolRecord {
    pub const SIZE: usize = 32 + 8;
}

/// Construction input: one address per pool. `private_offering` is the ledger account.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolAddresses {
    pub reward_for_staking: Pubkey,
    pub ecosystem_fund: Pubkey,
    pub public_offering: Pubkey,
    pub private_offering: Pubkey,
    pub foundation_reward: Pubkey,
    pub exchange_related_activities: Pubkey,
}

impl PoolAddresses {
    pub fn get(&self, pool: Pool) -> Pubkey {
        match pool {
            Pool::RewardForStaking => self.reward_for_staking,
            Pool::EcosystemFund => self.ecosystem_fund,
            Pool::PublicOffering => self.public_offering,
            Pool::PrivateOffering => self.private_offering,
            Pool::FoundationReward => self.foundation_reward,
            Pool::ExchangeRelatedActivities => self.exchange_related_activities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stakes_sum_to_total_supply() {
        let sum: u128 = Pool::ALL.iter().map(|p| p.stake() as u128).sum();
        assert_eq!(sum, TOTAL_SUPPLY as u128);
    }

    #[test]
    fn indices_follow_declaration_order() {
        for (i, pool) in Pool::ALL.iter().enumerate() {
            assert_eq!(pool.index(), i);
        }
    }

    #[test]
    fn only_ecosystem_and_foundation_are_governable() {
        let governable: Vec<Pool> = Pool::ALL
            .iter()
            .copied()
            .filter(|p| p.is_governable())
            .collect();
        assert_eq!(governable, vec![Pool::EcosystemFund, Pool::FoundationReward]);
    }
}
