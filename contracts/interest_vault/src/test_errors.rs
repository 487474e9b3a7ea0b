#![cfg(test)]

extern crate std;

use crate::{ErrorCategory, ErrorExt, VaultError};
use std::vec::Vec;

fn all_variants() -> Vec<VaultError> {
    std::vec![
        VaultError::NotOwner,
        VaultError::InvalidAmount,
        VaultError::LockNotElapsed,
        VaultError::InsufficientBalance,
        VaultError::ReentrancyDetected,
        VaultError::InsufficientCustody,
        VaultError::RateTooHigh,
        VaultError::Overflow,
    ]
}

// --- Wire code tests ---

#[test]
fn test_codes_are_stable() {
    assert_eq!(VaultError::NotOwner as u32, 100);
    assert_eq!(VaultError::InvalidAmount as u32, 200);
    assert_eq!(VaultError::LockNotElapsed as u32, 201);
    assert_eq!(VaultError::InsufficientBalance as u32, 202);
    assert_eq!(VaultError::ReentrancyDetected as u32, 203);
    assert_eq!(VaultError::InsufficientCustody as u32, 300);
    assert_eq!(VaultError::RateTooHigh as u32, 400);
    assert_eq!(VaultError::Overflow as u32, 700);
}

#[test]
fn test_codes_are_unique() {
    let mut codes: Vec<u32> = all_variants().iter().map(|v| *v as u32).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), all_variants().len());
}

// --- Category tests ---

#[test]
fn test_category_matches_code_block() {
    for variant in all_variants() {
        let expected = match variant as u32 {
            100..=199 => ErrorCategory::Authorization,
            200..=299 => ErrorCategory::Position,
            300..=399 => ErrorCategory::Custody,
            400..=499 => ErrorCategory::Configuration,
            700..=799 => ErrorCategory::Arithmetic,
            other => panic!("code {other} outside every category block"),
        };
        assert_eq!(variant.category(), expected, "{variant:?}");
    }
}

// --- Description tests ---

#[test]
fn test_descriptions_non_empty_and_distinct() {
    let descriptions: Vec<&str> = all_variants().iter().map(|v| v.description()).collect();
    for d in &descriptions {
        assert!(!d.is_empty());
    }
    let mut sorted = descriptions.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), descriptions.len());
}
