//! Program-wide constants: supply split, pool schedules, seeds and capacity limits.

/// Decimals of the distributed mint.
pub const TOKEN_DECIMALS: u8 = 9;

/// Base units per whole token.
pub const UNIT: u64 = 1_000_000_000;

/// Fixed total supply held by the distribution vault before initialization.
pub const TOTAL_SUPPLY: u64 = 100_000_000 * UNIT;

pub const REWARD_FOR_STAKING_STAKE: u64 = 32_500_000 * UNIT;
pub const ECOSYSTEM_FUND_STAKE: u64 = 23_500_000 * UNIT;
pub const PUBLIC_OFFERING_STAKE: u64 = 10_000_000 * UNIT;
pub const PRIVATE_OFFERING_STAKE: u64 = 9_000_000 * UNIT;
pub const FOUNDATION_REWARD_STAKE: u64 = 15_000_000 * UNIT;
pub const EXCHANGE_RELATED_ACTIVITIES_STAKE: u64 = 10_000_000 * UNIT;

const _: () = assert!(
    REWARD_FOR_STAKING_STAKE
        + ECOSYSTEM_FUND_STAKE
        + PUBLIC_OFFERING_STAKE
        + PRIVATE_OFFERING_STAKE
        + FOUNDATION_REWARD_STAKE
        + EXCHANGE_RELATED_ACTIVITIES_STAKE
        == TOTAL_SUPPLY
);

/// Number of pools the supply is split into.
pub const POOL_COUNT: usize = 6;

// Schedule parameters, in staking epochs. Every installment period is one epoch.
pub const REWARD_FOR_STAKING_CLIFF_EPOCHS: u64 = 48;

pub const ECOSYSTEM_FUND_CLIFF_EPOCHS: u64 = 48;
pub const ECOSYSTEM_FUND_PERCENT_AT_CLIFF: u8 = 10;
pub const ECOSYSTEM_FUND_INSTALLMENTS: u64 = 96;

pub const PRIVATE_OFFERING_PRERELEASE_PERCENT: u8 = 5;
pub const PRIVATE_OFFERING_CLIFF_EPOCHS: u64 = 4;
pub const PRIVATE_OFFERING_PERCENT_AT_CLIFF: u8 = 10;
pub const PRIVATE_OFFERING_INSTALLMENTS: u64 = 36;

pub const FOUNDATION_REWARD_CLIFF_EPOCHS: u64 = 12;
pub const FOUNDATION_REWARD_PERCENT_AT_CLIFF: u8 = 20;
pub const FOUNDATION_REWARD_INSTALLMENTS: u64 = 48;

/// Seed of the distribution state PDA (also the vault authority).
pub const DISTRIBUTION_SEED: &[u8] = b"distribution";

/// Seed of the private offering ledger PDA.
pub const PRIVATE_OFFERING_SEED: &[u8] = b"private_offering";

/// Max participants stored in the private offering ledger.
pub const MAX_PARTICIPANTS: usize = 100;

/// Max participants accepted per `add_participants` call.
pub const MAX_PARTICIPANTS_PER_BATCH: usize = 20;
