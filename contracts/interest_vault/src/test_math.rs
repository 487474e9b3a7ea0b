//! Tests for overflow-safe arithmetic helpers.

#![cfg(test)]

use crate::errors::VaultError;
use crate::math;

#[test]
fn test_interest_one_year_at_five_percent() {
    assert_eq!(math::accrued_interest(1_000_000, 5, 31_536_000), Ok(50_000));
}

#[test]
fn test_interest_floors_fractional_units() {
    // 1_000 * 5 * 61 = 305_000, far below 3_153_600_000.
    assert_eq!(math::accrued_interest(1_000, 5, 61), Ok(0));
    // 10^18 * 5 * 61 / 3_153_600_000 = 96_714_865_550.48...
    assert_eq!(
        math::accrued_interest(1_000_000_000_000_000_000, 5, 61),
        Ok(96_714_865_550)
    );
}

#[test]
fn test_interest_zero_inputs() {
    assert_eq!(math::accrued_interest(0, 5, 1_000), Ok(0));
    assert_eq!(math::accrued_interest(1_000, 0, 1_000), Ok(0));
    assert_eq!(math::accrued_interest(1_000, 5, 0), Ok(0));
}

#[test]
fn test_interest_overflow_reported() {
    assert_eq!(
        math::accrued_interest(i128::MAX, 100, 31_536_000),
        Err(VaultError::Overflow)
    );
}

#[test]
fn test_add_overflow_reported() {
    assert_eq!(math::add_i128(i128::MAX, 1), Err(VaultError::Overflow));
    assert_eq!(math::add_i128(2, 3), Ok(5));
}

#[test]
fn test_sub_underflow_reported() {
    assert_eq!(math::sub_i128(i128::MIN, 1), Err(VaultError::Overflow));
    assert_eq!(math::sub_i128(5, 3), Ok(2));
}

#[test]
fn test_mul_overflow_reported() {
    assert_eq!(math::mul_i128(i128::MAX, 2), Err(VaultError::Overflow));
}
