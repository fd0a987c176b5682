//! Exact integer percentage and pro-rata helpers.
//! Every pool and participant split goes through these so rounding is identical everywhere:
//! truncating division, and an explicit `MathOverflow` instead of wrapping.

use crate::error::DistributionError;

/// `amount * percent / 100`, truncated. Fails if the product overflows `u64`.
pub fn percentage_of(amount: u64, percent: u8) -> Result<u64, DistributionError> {
    if percent > 100 {
        return Err(DistributionError::InvalidPercentage);
    }
    let product = amount
        .checked_mul(percent as u64)
        .ok_or(DistributionError::MathOverflow)?;
    Ok(product / 100)
}

/// `amount * part / whole`, floored, computed in `u128`.
pub fn pro_rata(amount: u64, part: u64, whole: u64) -> Result<u64, DistributionError> {
    if whole == 0 {
        return Err(DistributionError::MathOverflow);
    }
    let v = (amount as u128)
        .checked_mul(part as u128)
        .ok_or(DistributionError::MathOverflow)?
        / (whole as u128);
    u64::try_from(v).map_err(|_| DistributionError::MathOverflow)
}
