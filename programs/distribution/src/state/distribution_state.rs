use anchor_lang::prelude::*;

use crate::constants::POOL_COUNT;
use crate::error::DistributionError;
use crate::state::pool::{Pool, PoolAddresses, PoolRecord};
use crate::utils::schedule::elapsed_since;

/// Distribution state PDA: pool ledger, schedule anchor and governance pointers.
#[account]
pub struct DistributionState {
    /// Owner authority (initializes and sets the bridge).
    pub owner: Pubkey,
    /// Token mint bound at initialization.
    pub mint: Pubkey,
    /// Bridge receiving the staking reward unlock; default until set.
    pub bridge: Pubkey,
    /// Staking epoch duration in seconds.
    pub epoch_duration: i64,
    /// Distribution start (Unix seconds); fixed at initialization.
    pub start_ts: i64,
    pub initialized: bool,
    pub bump: u8,
    /// Indexed by `Pool::index()`.
    pub pools: [PoolRecord; POOL_COUNT],
}

impl DistributionState {
    pub const SIZE: usize =
        32 + // owner
        32 + // mint
        32 + // bridge
        8 +  // epoch_duration
        8 +  // start_ts
        1 +  // initialized
        1 +  // bump
        PoolRecord::SIZE * POOL_COUNT;

    /// Validates construction inputs and lays out the pool ledger.
    pub fn configure(
        &mut self,
        owner: Pubkey,
        epoch_duration: i64,
        addresses: &PoolAddresses,
        bump: u8,
    ) -> Result<()> {
        require!(epoch_duration > 0, DistributionError::InvalidEpochDuration);
        for pool in Pool::ALL {
            require!(
                addresses.get(pool) != Pubkey::default(),
                DistributionError::InvalidPubkey
            );
        }

        self.owner = owner;
        self.mint = Pubkey::default();
        self.bridge = Pubkey::default();
        self.epoch_duration = epoch_duration;
        self.start_ts = 0;
        self.initialized = false;
        self.bump = bump;
        for pool in Pool::ALL {
            self.pools[pool.index()] = PoolRecord {
                address: addresses.get(pool),
                released: 0,
            };
        }
        Ok(())
    }

    pub fn pool_address(&self, pool: Pool) -> Pubkey {
        self.pools[pool.index()].address
    }

    pub fn released(&self, pool: Pool) -> u64 {
        self.pools[pool.index()].released
    }

    /// The ledger account standing in for the private offering pool.
    pub fn private_offering(&self) -> Pubkey {
        self.pool_address(Pool::PrivateOffering)
    }

    /// A repeat call fails `AlreadyInitialized` whoever signs it; only then is the owner checked.
    pub fn authorize_begin(&self, caller: Pubkey) -> Result<()> {
        require!(!self.initialized, DistributionError::AlreadyInitialized);
        require_keys_eq!(caller, self.owner, DistributionError::UnauthorizedOwner);
        Ok(())
    }

    /// Fixes the start timestamp and the mint, returning the releases owed right away
    /// (immediate pools and the private offering prerelease). Callers transfer these and
    /// then `record_release` each one.
    pub fn begin(&mut self, caller: Pubkey, mint: Pubkey, now_ts: i64) -> Result<Vec<(Pool, u64)>> {
        self.authorize_begin(caller)?;
        require!(mint != Pubkey::default(), DistributionError::InvalidPubkey);

        let mut owed = Vec::with_capacity(3);
        for pool in [
            Pool::PublicOffering,
            Pool::ExchangeRelatedActivities,
            Pool::PrivateOffering,
        ] {
            let amount = pool.shape().upfront(pool.stake())?;
            if amount > 0 {
                owed.push((pool, amount));
            }
        }

        self.mint = mint;
        self.start_ts = now_ts;
        self.initialized = true;
        Ok(owed)
    }

    /// Cumulative amount that should have been released for `pool` by `now_ts`.
    pub fn releasable(&self, pool: Pool, now_ts: i64) -> Result<u64> {
        require!(self.initialized, DistributionError::NotInitialized);
        let elapsed = elapsed_since(self.start_ts, now_ts);
        Ok(pool
            .shape()
            .vested_at(pool.stake(), self.epoch_duration, elapsed)?)
    }

    /// Amount `unlock` would move now; zero before a cliff or when nothing new vested.
    pub fn unlockable(&self, pool: Pool, now_ts: i64) -> Result<u64> {
        let vested = self.releasable(pool, now_ts)?;
        Ok(vested.saturating_sub(self.released(pool)))
    }

    /// Same as `unlockable`, but a zero delta is an error.
    pub fn pending_release(&self, pool: Pool, now_ts: i64) -> Result<u64> {
        let delta = self.unlockable(pool, now_ts)?;
        require!(delta > 0, DistributionError::InstallmentsNotActive);
        Ok(delta)
    }

    /// Adds `amount` to the pool's released total, returning the new total.
    pub fn record_release(&mut self, pool: Pool, amount: u64) -> Result<u64> {
        let record = &mut self.pools[pool.index()];
        let released = record
            .released
            .checked_add(amount)
            .ok_or(DistributionError::MathOverflow)?;
        require!(
            released <= pool.stake(),
            DistributionError::ReleaseExceedsStake
        );
        record.released = released;
        Ok(released)
    }

    /// Hands a governable pool over to `new_address`; returns the previous address.
    pub fn change_pool_address(
        &mut self,
        pool: Pool,
        caller: Pubkey,
        new_address: Pubkey,
    ) -> Result<Pubkey> {
        require!(self.initialized, DistributionError::NotInitialized);
        require!(pool.is_governable(), DistributionError::WrongPool);
        let record = &mut self.pools[pool.index()];
        require_keys_eq!(caller, record.address, DistributionError::NotAuthorized);
        require!(
            new_address != Pubkey::default(),
            DistributionError::InvalidPubkey
        );

        let old = record.address;
        record.address = new_address;
        Ok(old)
    }

    /// Owner-only; the bridge must be a program (executable account). Returns the
    /// previous bridge, default if none was set.
    pub fn set_bridge(&mut self, caller: Pubkey, bridge: Pubkey, executable: bool) -> Result<Pubkey> {
        require_keys_eq!(caller, self.owner, DistributionError::UnauthorizedOwner);
        require!(executable, DistributionError::NotAContract);
        let old = self.bridge;
        self.bridge = bridge;
        Ok(old)
    }

    pub fn bridge(&self) -> Result<Pubkey> {
        require!(
            self.bridge != Pubkey::default(),
            DistributionError::BridgeNotSet
        );
        Ok(self.bridge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::error::ErrorClass;
    use crate::utils::math::percentage_of;
    use crate::utils::token::expected_ata_address;
    use anchor_lang::error::Error;

    const DAY: i64 = 86_400;
    const START: i64 = 1_700_000_000;

    fn err(e: DistributionError) -> Error {
        e.into()
    }

    fn addresses() -> PoolAddresses {
        PoolAddresses {
            reward_for_staking: Pubkey::new_unique(),
            ecosystem_fund: Pubkey::new_unique(),
            public_offering: Pubkey::new_unique(),
            private_offering: Pubkey::new_unique(),
            foundation_reward: Pubkey::new_unique(),
            exchange_related_activities: Pubkey::new_unique(),
        }
    }

    fn blank() -> DistributionState {
        DistributionState {
            owner: Pubkey::default(),
            mint: Pubkey::default(),
            bridge: Pubkey::default(),
            epoch_duration: 0,
            start_ts: 0,
            initialized: false,
            bump: 0,
            pools: [PoolRecord::default(); POOL_COUNT],
        }
    }

    fn configured() -> (DistributionState, PoolAddresses, Pubkey) {
        let owner = Pubkey::new_unique();
        let addrs = addresses();
        let mut st = blank();
        st.configure(owner, DAY, &addrs, 255).unwrap();
        (st, addrs, owner)
    }

    /// Mirrors the initialize handler: begin, then record every owed release.
    fn initialized() -> (DistributionState, PoolAddresses, Pubkey) {
        let (mut st, addrs, owner) = configured();
        for (pool, amount) in st.begin(owner, Pubkey::new_unique(), START).unwrap() {
            st.record_release(pool, amount).unwrap();
        }
        (st, addrs, owner)
    }

    /// Mirrors the unlock handler.
    fn unlock(st: &mut DistributionState, pool: Pool, now: i64) -> Result<u64> {
        let amount = st.pending_release(pool, now)?;
        st.record_release(pool, amount)?;
        Ok(amount)
    }

    #[test]
    fn configure_rejects_bad_inputs() {
        let mut st = blank();
        assert_eq!(
            st.configure(Pubkey::new_unique(), 0, &addresses(), 0)
                .unwrap_err(),
            err(DistributionError::InvalidEpochDuration)
        );
        for pool in Pool::ALL {
            let mut addrs = addresses();
            match pool {
                Pool::RewardForStaking => addrs.reward_for_staking = Pubkey::default(),
                Pool::EcosystemFund => addrs.ecosystem_fund = Pubkey::default(),
                Pool::PublicOffering => addrs.public_offering = Pubkey::default(),
                Pool::PrivateOffering => addrs.private_offering = Pubkey::default(),
                Pool::FoundationReward => addrs.foundation_reward = Pubkey::default(),
                Pool::ExchangeRelatedActivities => {
                    addrs.exchange_related_activities = Pubkey::default()
                }
            }
            assert_eq!(
                st.configure(Pubkey::new_unique(), DAY, &addrs, 0)
                    .unwrap_err(),
                err(DistributionError::InvalidPubkey)
            );
        }
    }

    #[test]
    fn initialization_pays_immediate_pools_and_prerelease() {
        let (mut st, _, owner) = configured();
        let owed = st.begin(owner, Pubkey::new_unique(), START).unwrap();
        let prerelease = percentage_of(PRIVATE_OFFERING_STAKE, 5).unwrap();
        assert_eq!(
            owed,
            vec![
                (Pool::PublicOffering, PUBLIC_OFFERING_STAKE),
                (Pool::ExchangeRelatedActivities, EXCHANGE_RELATED_ACTIVITIES_STAKE),
                (Pool::PrivateOffering, prerelease),
            ]
        );
        for (pool, amount) in owed {
            st.record_release(pool, amount).unwrap();
        }
        assert_eq!(st.start_ts, START);
        assert_eq!(st.released(Pool::PublicOffering), PUBLIC_OFFERING_STAKE);
        assert_eq!(st.released(Pool::PrivateOffering), 450_000 * UNIT);
        assert_eq!(st.released(Pool::EcosystemFund), 0);
        assert_eq!(st.released(Pool::FoundationReward), 0);
        assert_eq!(st.released(Pool::RewardForStaking), 0);
    }

    #[test]
    fn initialization_happens_once() {
        let (mut st, _, owner) = initialized();
        let e = st.begin(owner, Pubkey::new_unique(), START + DAY).unwrap_err();
        assert_eq!(e, err(DistributionError::AlreadyInitialized));
        // Any other signer gets the same state failure, not an authorization one.
        let stranger = Pubkey::new_unique();
        let e = st.begin(stranger, Pubkey::new_unique(), START + DAY).unwrap_err();
        assert_eq!(e, err(DistributionError::AlreadyInitialized));
        assert_eq!(st.authorize_begin(stranger).unwrap_err(), err(DistributionError::AlreadyInitialized));
        assert_eq!(DistributionError::AlreadyInitialized.class(), ErrorClass::State);
        assert_eq!(st.start_ts, START);
    }

    #[test]
    fn only_owner_initializes() {
        let (mut st, _, owner) = configured();
        let e = st.begin(Pubkey::new_unique(), Pubkey::new_unique(), START).unwrap_err();
        assert_eq!(e, err(DistributionError::UnauthorizedOwner));
        assert!(!st.initialized);
        st.begin(owner, Pubkey::new_unique(), START).unwrap();
        assert!(st.initialized);
    }

    #[test]
    fn nothing_unlocks_before_initialization() {
        let (st, _, _) = configured();
        assert_eq!(
            st.pending_release(Pool::EcosystemFund, START).unwrap_err(),
            err(DistributionError::NotInitialized)
        );
    }

    #[test]
    fn unlock_before_cliff_fails_without_changing_state() {
        let (mut st, _, _) = initialized();
        let before = st.pools;
        for pool in [Pool::EcosystemFund, Pool::FoundationReward, Pool::RewardForStaking] {
            let e = unlock(&mut st, pool, START + DAY).unwrap_err();
            assert_eq!(e, err(DistributionError::InstallmentsNotActive));
        }
        // Private offering prerelease is already paid; nothing new before its cliff.
        let e = unlock(&mut st, Pool::PrivateOffering, START + 4 * DAY - 1).unwrap_err();
        assert_eq!(e, err(DistributionError::InstallmentsNotActive));
        assert_eq!(st.pools, before);
    }

    #[test]
    fn immediate_pools_have_nothing_left() {
        let (mut st, _, _) = initialized();
        let e = unlock(&mut st, Pool::PublicOffering, START + 1_000 * DAY).unwrap_err();
        assert_eq!(e, err(DistributionError::InstallmentsNotActive));
    }

    #[test]
    fn unlock_is_idempotent_per_instant() {
        let (mut st, _, _) = initialized();
        let at_cliff = START + 48 * DAY;
        let tranche = unlock(&mut st, Pool::EcosystemFund, at_cliff).unwrap();
        assert_eq!(tranche, percentage_of(ECOSYSTEM_FUND_STAKE, 10).unwrap());
        let e = unlock(&mut st, Pool::EcosystemFund, at_cliff).unwrap_err();
        assert_eq!(e, err(DistributionError::InstallmentsNotActive));
        assert_eq!(st.released(Pool::EcosystemFund), tranche);
    }

    #[test]
    fn quote_matches_eventual_unlock() {
        let (mut st, _, _) = initialized();
        let now = START + 20 * DAY + 7;
        let quoted = st.unlockable(Pool::FoundationReward, now).unwrap();
        assert_eq!(unlock(&mut st, Pool::FoundationReward, now).unwrap(), quoted);
        assert_eq!(st.unlockable(Pool::FoundationReward, now).unwrap(), 0);
    }

    #[test]
    fn installments_accumulate_to_full_stake() {
        let (mut st, _, _) = initialized();
        let mut total = 0;
        for day in 0..=200 {
            if let Ok(amount) = unlock(&mut st, Pool::EcosystemFund, START + day * DAY) {
                total += amount;
            }
        }
        assert_eq!(total, ECOSYSTEM_FUND_STAKE);
        assert_eq!(st.released(Pool::EcosystemFund), ECOSYSTEM_FUND_STAKE);
        assert_eq!(
            st.releasable(Pool::EcosystemFund, START + 48 * DAY + 96 * DAY)
                .unwrap(),
            ECOSYSTEM_FUND_STAKE
        );
    }

    #[test]
    fn catching_up_late_pays_the_same_total() {
        let (mut st, _, _) = initialized();
        let late = START + 1_000 * DAY;
        let prerelease = st.released(Pool::PrivateOffering);
        let amount = unlock(&mut st, Pool::PrivateOffering, late).unwrap();
        assert_eq!(amount + prerelease, PRIVATE_OFFERING_STAKE);
    }

    #[test]
    fn staking_reward_releases_whole_stake_at_cliff() {
        let (mut st, _, _) = initialized();
        let e = unlock(&mut st, Pool::RewardForStaking, START + 47 * DAY).unwrap_err();
        assert_eq!(e, err(DistributionError::InstallmentsNotActive));
        let amount = unlock(&mut st, Pool::RewardForStaking, START + 48 * DAY).unwrap();
        assert_eq!(amount, REWARD_FOR_STAKING_STAKE);
        let e = unlock(&mut st, Pool::RewardForStaking, START + 49 * DAY).unwrap_err();
        assert_eq!(e, err(DistributionError::InstallmentsNotActive));
    }

    #[test]
    fn release_never_exceeds_stake() {
        let (mut st, _, _) = initialized();
        let e = st.record_release(Pool::EcosystemFund, ECOSYSTEM_FUND_STAKE + 1).unwrap_err();
        assert_eq!(e, err(DistributionError::ReleaseExceedsStake));
        assert_eq!(st.released(Pool::EcosystemFund), 0);
    }

    #[test]
    fn pool_address_change_rules() {
        let (mut st, addrs, owner) = initialized();
        let next = Pubkey::new_unique();

        assert_eq!(
            st.change_pool_address(Pool::PublicOffering, addrs.public_offering, next)
                .unwrap_err(),
            err(DistributionError::WrongPool)
        );
        assert_eq!(
            st.change_pool_address(Pool::RewardForStaking, owner, next)
                .unwrap_err(),
            err(DistributionError::WrongPool)
        );
        assert_eq!(
            st.change_pool_address(Pool::EcosystemFund, owner, next)
                .unwrap_err(),
            err(DistributionError::NotAuthorized)
        );
        assert_eq!(
            st.change_pool_address(Pool::EcosystemFund, addrs.ecosystem_fund, Pubkey::default())
                .unwrap_err(),
            err(DistributionError::InvalidPubkey)
        );

        let old = st
            .change_pool_address(Pool::EcosystemFund, addrs.ecosystem_fund, next)
            .unwrap();
        assert_eq!(old, addrs.ecosystem_fund);
        assert_eq!(st.pool_address(Pool::EcosystemFund), next);

        // The previous holder lost control.
        assert_eq!(
            st.change_pool_address(Pool::EcosystemFund, addrs.ecosystem_fund, old)
                .unwrap_err(),
            err(DistributionError::NotAuthorized)
        );

        let foundation_next = Pubkey::new_unique();
        st.change_pool_address(Pool::FoundationReward, addrs.foundation_reward, foundation_next)
            .unwrap();
        assert_eq!(st.pool_address(Pool::FoundationReward), foundation_next);
    }

    #[test]
    fn unlock_after_handover_pays_the_new_holder() {
        let (mut st, addrs, _) = initialized();
        let next = Pubkey::new_unique();
        let mint = st.mint;
        let first = unlock(&mut st, Pool::EcosystemFund, START + 48 * DAY).unwrap();

        st.change_pool_address(Pool::EcosystemFund, addrs.ecosystem_fund, next)
            .unwrap();
        let destination = expected_ata_address(&st.pool_address(Pool::EcosystemFund), &mint);
        assert_eq!(destination, expected_ata_address(&next, &mint));
        assert_ne!(destination, expected_ata_address(&addrs.ecosystem_fund, &mint));

        // Released progress carries over to the new holder.
        let second = unlock(&mut st, Pool::EcosystemFund, START + 49 * DAY).unwrap();
        assert_eq!(st.released(Pool::EcosystemFund), first + second);
        assert!(second > 0);
    }

    #[test]
    fn pool_address_change_requires_initialization() {
        let (mut st, addrs, _) = configured();
        assert_eq!(
            st.change_pool_address(Pool::EcosystemFund, addrs.ecosystem_fund, Pubkey::new_unique())
                .unwrap_err(),
            err(DistributionError::NotInitialized)
        );
    }

    #[test]
    fn bridge_is_owner_set_and_resettable() {
        let (mut st, _, owner) = initialized();
        assert_eq!(st.bridge().unwrap_err(), err(DistributionError::BridgeNotSet));

        let bridge = Pubkey::new_unique();
        assert_eq!(
            st.set_bridge(Pubkey::new_unique(), bridge, true).unwrap_err(),
            err(DistributionError::UnauthorizedOwner)
        );
        assert_eq!(
            st.set_bridge(owner, bridge, false).unwrap_err(),
            err(DistributionError::NotAContract)
        );
        assert_eq!(st.set_bridge(owner, bridge, true).unwrap(), Pubkey::default());
        assert_eq!(st.bridge().unwrap(), bridge);

        let replacement = Pubkey::new_unique();
        assert_eq!(st.set_bridge(owner, replacement, true).unwrap(), bridge);
        assert_eq!(st.bridge().unwrap(), replacement);
    }
}
