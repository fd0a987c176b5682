//! Epoch-based release schedules (no calendar math; everything is relative to the
//! distribution start).
//! - before the cliff: only the prerelease (if any) is vested
//! - at the cliff: prerelease + cliff tranche
//! - after the cliff: installments_elapsed = clamp(1 + (t - cliff) / period, 0, count)
//! - vested(t) is monotonic and equals the full stake once every installment elapsed

use crate::error::DistributionError;
use crate::utils::math::{percentage_of, pro_rata};

/// Shape of a pool's release schedule. Durations are in epochs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseShape {
    /// Whole stake paid out at initialization.
    Immediate,
    /// Prerelease at initialization, cliff tranche, then equal installments.
    Installments {
        prerelease_percent: u8,
        cliff_epochs: u64,
        percent_at_cliff: u8,
        installment_count: u64,
        installment_epochs: u64,
    },
    /// Whole stake becomes unlockable at once after the cliff, through the bridge.
    Bridged { cliff_epochs: u64 },
}

impl ReleaseShape {
    /// Amount owed at initialization, before any cliff.
    pub fn upfront(&self, total_stake: u64) -> Result<u64, DistributionError> {
        match *self {
            ReleaseShape::Immediate => Ok(total_stake),
            ReleaseShape::Installments {
                prerelease_percent, ..
            } => percentage_of(total_stake, prerelease_percent),
            ReleaseShape::Bridged { .. } => Ok(0),
        }
    }

    /// Cliff length in seconds, `None` for immediate pools.
    pub fn cliff_seconds(&self, epoch_duration: i64) -> Result<Option<i64>, DistributionError> {
        let epochs = match *self {
            ReleaseShape::Immediate => return Ok(None),
            ReleaseShape::Installments { cliff_epochs, .. } => cliff_epochs,
            ReleaseShape::Bridged { cliff_epochs } => cliff_epochs,
        };
        epochs_to_seconds(epochs, epoch_duration).map(Some)
    }

    /// Cumulative amount that should have been released `elapsed` seconds after start.
    pub fn vested_at(
        &self,
        total_stake: u64,
        epoch_duration: i64,
        elapsed: i64,
    ) -> Result<u64, DistributionError> {
        match *self {
            ReleaseShape::Immediate => Ok(total_stake),
            ReleaseShape::Bridged { cliff_epochs } => {
                let cliff = epochs_to_seconds(cliff_epochs, epoch_duration)?;
                if elapsed < cliff {
                    Ok(0)
                } else {
                    Ok(total_stake)
                }
            }
            ReleaseShape::Installments {
                prerelease_percent,
                cliff_epochs,
                percent_at_cliff,
                installment_count,
                installment_epochs,
            } => {
                let prerelease = percentage_of(total_stake, prerelease_percent)?;
                let cliff = epochs_to_seconds(cliff_epochs, epoch_duration)?;
                if elapsed < cliff {
                    return Ok(prerelease);
                }

                let cliff_tranche = percentage_of(total_stake, percent_at_cliff)?;
                let at_cliff = prerelease
                    .checked_add(cliff_tranche)
                    .ok_or(DistributionError::MathOverflow)?;
                let rest = total_stake
                    .checked_sub(at_cliff)
                    .ok_or(DistributionError::MathOverflow)?;
                if installment_count == 0 {
                    return Ok(total_stake);
                }

                let period = epochs_to_seconds(installment_epochs, epoch_duration)?;
                let elapsed_installments =
                    installments_elapsed(elapsed - cliff, period, installment_count)?;
                let installments = pro_rata(rest, elapsed_installments, installment_count)?;
                at_cliff
                    .checked_add(installments)
                    .ok_or(DistributionError::MathOverflow)
            }
        }
    }
}

/// Number of installments elapsed `since_cliff` seconds past the cliff (0 exactly at the
/// cliff, 1 immediately after it), capped at `count`.
pub fn installments_elapsed(
    since_cliff: i64,
    period: i64,
    count: u64,
) -> Result<u64, DistributionError> {
    if since_cliff <= 0 {
        return Ok(0);
    }
    if period <= 0 {
        return Err(DistributionError::InvalidEpochDuration);
    }
    let full_periods = (since_cliff / period) as u64;
    Ok(full_periods.saturating_add(1).min(count))
}

/// Seconds elapsed since `start_ts`; zero if `now_ts` is earlier.
pub fn elapsed_since(start_ts: i64, now_ts: i64) -> i64 {
    now_ts.saturating_sub(start_ts).max(0)
}

pub fn epochs_to_seconds(epochs: u64, epoch_duration: i64) -> Result<i64, DistributionError> {
    if epoch_duration <= 0 {
        return Err(DistributionError::InvalidEpochDuration);
    }
    let epochs = i64::try_from(epochs).map_err(|_| DistributionError::MathOverflow)?;
    epochs
        .checked_mul(epoch_duration)
        .ok_or(DistributionError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 86_400;

    fn ecosystem() -> ReleaseShape {
        ReleaseShape::Installments {
            prerelease_percent: 0,
            cliff_epochs: 48,
            percent_at_cliff: 10,
            installment_count: 96,
            installment_epochs: 1,
        }
    }

    #[test]
    fn nothing_vests_before_cliff() {
        let s = ecosystem();
        assert_eq!(s.vested_at(1_000_000, DAY, 0).unwrap(), 0);
        assert_eq!(s.vested_at(1_000_000, DAY, 48 * DAY - 1).unwrap(), 0);
    }

    #[test]
    fn cliff_tranche_exactly_at_cliff() {
        let s = ecosystem();
        assert_eq!(s.vested_at(1_000_000, DAY, 48 * DAY).unwrap(), 100_000);
    }

    #[test]
    fn first_installment_right_after_cliff() {
        let s = ecosystem();
        // 900_000 * 1 / 96 = 9_375
        assert_eq!(s.vested_at(1_000_000, DAY, 48 * DAY + 1).unwrap(), 109_375);
        assert_eq!(s.vested_at(1_000_000, DAY, 49 * DAY - 1).unwrap(), 109_375);
        assert_eq!(s.vested_at(1_000_000, DAY, 49 * DAY).unwrap(), 118_750);
    }

    #[test]
    fn full_stake_after_last_installment() {
        let s = ecosystem();
        let end = 48 * DAY + 96 * DAY;
        assert_eq!(s.vested_at(1_000_001, DAY, end).unwrap(), 1_000_001);
        assert_eq!(s.vested_at(1_000_001, DAY, end * 10).unwrap(), 1_000_001);
    }

    #[test]
    fn vesting_is_monotonic() {
        let s = ecosystem();
        let mut last = 0;
        for day in 0..200 {
            for offset in [0, 1, DAY / 2] {
                let v = s.vested_at(987_654_321, DAY, day * DAY + offset).unwrap();
                assert!(v >= last);
                last = v;
            }
        }
        assert_eq!(last, 987_654_321);
    }

    #[test]
    fn prerelease_vests_from_start() {
        let s = ReleaseShape::Installments {
            prerelease_percent: 5,
            cliff_epochs: 4,
            percent_at_cliff: 10,
            installment_count: 36,
            installment_epochs: 1,
        };
        assert_eq!(s.upfront(9_000_000).unwrap(), 450_000);
        assert_eq!(s.vested_at(9_000_000, DAY, 0).unwrap(), 450_000);
        assert_eq!(s.vested_at(9_000_000, DAY, 4 * DAY).unwrap(), 1_350_000);
        // (9_000_000 - 1_350_000) / 36 = 212_500
        assert_eq!(s.vested_at(9_000_000, DAY, 4 * DAY + 1).unwrap(), 1_562_500);
        assert_eq!(s.vested_at(9_000_000, DAY, 40 * DAY).unwrap(), 9_000_000);
    }

    #[test]
    fn bridged_unlocks_everything_at_cliff() {
        let s = ReleaseShape::Bridged { cliff_epochs: 48 };
        let stake = 32_500_000;
        assert_eq!(s.vested_at(stake, DAY, 47 * DAY).unwrap(), 0);
        assert_eq!(s.vested_at(stake, DAY, 48 * DAY - 1).unwrap(), 0);
        assert_eq!(s.vested_at(stake, DAY, 48 * DAY).unwrap(), stake);
        assert_eq!(s.upfront(stake).unwrap(), 0);
    }

    #[test]
    fn zero_installments_release_rest_at_cliff() {
        let s = ReleaseShape::Installments {
            prerelease_percent: 0,
            cliff_epochs: 2,
            percent_at_cliff: 30,
            installment_count: 0,
            installment_epochs: 1,
        };
        assert_eq!(s.vested_at(1_000, DAY, 2 * DAY).unwrap(), 1_000);
    }

    #[test]
    fn installments_elapsed_is_clamped() {
        assert_eq!(installments_elapsed(0, DAY, 10).unwrap(), 0);
        assert_eq!(installments_elapsed(1, DAY, 10).unwrap(), 1);
        assert_eq!(installments_elapsed(DAY, DAY, 10).unwrap(), 2);
        assert_eq!(installments_elapsed(1_000 * DAY, DAY, 10).unwrap(), 10);
    }

    #[test]
    fn rejects_bad_epoch_and_overflowing_cliff() {
        assert!(matches!(
            epochs_to_seconds(1, 0),
            Err(DistributionError::InvalidEpochDuration)
        ));
        assert!(matches!(
            epochs_to_seconds(u64::MAX, DAY),
            Err(DistributionError::MathOverflow)
        ));
    }

    #[test]
    fn elapsed_never_negative() {
        assert_eq!(elapsed_since(100, 50), 0);
        assert_eq!(elapsed_since(100, 150), 50);
    }
}
