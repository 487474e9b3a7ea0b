//! Overflow-safe arithmetic for principal and interest.
//!
//! Every helper uses checked arithmetic and reports `VaultError::Overflow`
//! instead of wrapping or panicking.

use crate::errors::VaultError;
use crate::types::{PERCENT_DENOMINATOR, SECONDS_PER_YEAR};

/// Checked `i128` addition.
#[inline]
pub fn add_i128(a: i128, b: i128) -> Result<i128, VaultError> {
    a.checked_add(b).ok_or(VaultError::Overflow)
}

/// Checked `i128` subtraction.
#[inline]
pub fn sub_i128(a: i128, b: i128) -> Result<i128, VaultError> {
    a.checked_sub(b).ok_or(VaultError::Overflow)
}

/// Checked `i128` multiplication.
#[inline]
pub fn mul_i128(a: i128, b: i128) -> Result<i128, VaultError> {
    a.checked_mul(b).ok_or(VaultError::Overflow)
}

/// Linear simple interest on `amount` held for `elapsed_secs` at
/// `rate_percent` per year:
///
/// `amount * rate_percent * elapsed_secs / (100 * SECONDS_PER_YEAR)`
///
/// The division truncates toward zero, so dust below one unit is never paid.
pub fn accrued_interest(
    amount: i128,
    rate_percent: u32,
    elapsed_secs: u64,
) -> Result<i128, VaultError> {
    if amount <= 0 || rate_percent == 0 || elapsed_secs == 0 {
        return Ok(0);
    }
    let numerator = mul_i128(
        mul_i128(amount, rate_percent as i128)?,
        elapsed_secs as i128,
    )?;
    let denominator = (PERCENT_DENOMINATOR as i128) * (SECONDS_PER_YEAR as i128);
    Ok(numerator / denominator)
}
