//! Interest Vault Contract
//!
//! Custodies a single asset (native XLM through its Stellar Asset Contract).
//! Each account's deposit is locked for `LOCK_PERIOD_SECS`; once unlocked it
//! can be withdrawn together with linear interest at the owner-set annual
//! rate. Interest is paid out of a reserve funded with `fund_reserve`.
//!
//! ## Key design decisions
//!
//! - **Top-up restarts the lock**: every deposit moves the lock anchor to
//!   `now` for the whole principal.
//! - **Partial withdrawal keeps the anchor**: the remaining principal stays
//!   unlocked and keeps accruing from its original deposit time.
//! - **Rate at withdrawal time**: interest is `amount * rate * elapsed /
//!   (100 * SECONDS_PER_YEAR)`, floored, using the rate in force when the
//!   withdrawal executes over the whole elapsed period.
//! - **Checks-Effects-Interactions**: positions and totals are written
//!   *before* any token transfer, and every mutating call runs under a
//!   re-entrancy guard.
//! - **All-or-nothing failures**: every error is returned as a `VaultError`,
//!   which rolls back the whole call.

#![no_std]

mod errors;
mod events;
mod math;
mod storage;
mod types;

pub use errors::{ErrorCategory, ErrorExt, VaultError};
pub use types::{
    Position, VaultConfig, DEFAULT_INTEREST_RATE_PERCENT, LOCK_PERIOD_SECS,
    MAX_INTEREST_RATE_PERCENT, SECONDS_PER_YEAR,
};

use soroban_sdk::{contract, contractimpl, log, Address, Env};



#[cfg(test)]
mod test_events;

#[cfg(test)]
mod test_errors;

#[cfg(test)]
mod test_math;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn require_owner(e: &Env, caller: &Address) -> Result<(), VaultError> {
    caller.require_auth();
    if storage::get_owner(e) != *caller {
        return Err(VaultError::NotOwner);
    }
    Ok(())
}

fn with_reentrancy_guard<T, F>(e: &Env, f: F) -> Result<T, VaultError>
where
    F: FnOnce() -> Result<T, VaultError>,
{
    if storage::is_locked(e) {
        return Err(VaultError::ReentrancyDetected);
    }
    storage::set_locked(e, true);
    let result = f();
    storage::set_locked(e, false);
    result
}

fn elapsed_since(e: &Env, position: &Position) -> u64 {
    e.ledger().timestamp().saturating_sub(position.deposited_at)
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct InterestVault;

#[contractimpl]
impl InterestVault {
    // ── Deployment ─────────────────────────────────────────────────────────

    /// Runs once at deployment. `owner` becomes the only address allowed to
    /// change the interest rate; `token` is the custody asset.
    pub fn __constructor(e: Env, owner: Address, token: Address) {
        storage::set_owner(&e, &owner);
        storage::set_token(&e, &token);
        storage::set_interest_rate(&e, DEFAULT_INTEREST_RATE_PERCENT);
        storage::set_total_principal(&e, 0);
    }

    // ── Staking ────────────────────────────────────────────────────────────

    /// Lock `amount` tokens from `caller` in the vault.
    ///
    /// Adds to any existing principal and restarts the lock period for the
    /// whole position. Emits `staked(account, amount, timestamp)`.
    ///
    /// # Errors
    /// * `InvalidAmount` if `amount <= 0`
    /// * `Overflow` if the principal or vault total would overflow
    pub fn deposit(e: Env, caller: Address, amount: i128) -> Result<Position, VaultError> {
        caller.require_auth();
        if amount <= 0 {
            return Err(VaultError::InvalidAmount);
        }

        with_reentrancy_guard(&e, || {
            let now = e.ledger().timestamp();
            let principal = storage::load_position(&e, &caller).map_or(0, |p| p.principal);

            let position = Position {
                principal: math::add_i128(principal, amount)?,
                deposited_at: now,
            };
            let total = math::add_i128(storage::get_total_principal(&e), amount)?;

            // CEI: record the stake before pulling funds.
            storage::save_position(&e, &caller, &position);
            storage::set_total_principal(&e, total);
            storage::bump_instance(&e);
            events::emit_staked(&e, &caller, amount, now);

            storage::token_client(&e).transfer(&caller, &e.current_contract_address(), &amount);

            Ok(position)
        })
    }

    /// Withdraw `amount` of `caller`'s principal plus the interest it earned.
    ///
    /// Returns the interest paid. Emits `withdrawn(account, amount, interest)`.
    ///
    /// # Errors (checked in this order)
    /// * `LockNotElapsed` if fewer than `LOCK_PERIOD_SECS` seconds have passed
    ///   since the last deposit
    /// * `InvalidAmount` if `amount <= 0`
    /// * `InsufficientBalance` if `amount` exceeds the principal
    /// * `InsufficientCustody` if the interest exceeds the reserve held on top
    ///   of all outstanding principal
    pub fn withdraw(e: Env, caller: Address, amount: i128) -> Result<i128, VaultError> {
        caller.require_auth();

        with_reentrancy_guard(&e, || {
            let stored = storage::load_position(&e, &caller);
            let elapsed = stored.as_ref().map_or(0, |p| elapsed_since(&e, p));

            if stored.is_some() && elapsed < LOCK_PERIOD_SECS {
                log!(&e, "lock not elapsed", caller, LOCK_PERIOD_SECS - elapsed);
                return Err(VaultError::LockNotElapsed);
            }
            if amount <= 0 {
                return Err(VaultError::InvalidAmount);
            }
            let mut position = match stored {
                Some(position) if amount <= position.principal => position,
                _ => return Err(VaultError::InsufficientBalance),
            };

            let rate = storage::get_interest_rate(&e);
            let interest = math::accrued_interest(amount, rate, elapsed)?;
            let payout = math::add_i128(amount, interest)?;

            // Interest comes only out of the surplus over outstanding principal;
            // other accounts' stakes are never touched.
            let vault = e.current_contract_address();
            let token = storage::token_client(&e);
            let custody = token.balance(&vault);
            let total = storage::get_total_principal(&e);
            let reserve = math::sub_i128(custody, total)?;
            if interest > reserve {
                log!(&e, "insufficient custody", custody, total, payout);
                return Err(VaultError::InsufficientCustody);
            }

            // CEI: settle the position before paying out.
            position.principal = math::sub_i128(position.principal, amount)?;
            storage::save_position(&e, &caller, &position);
            storage::set_total_principal(&e, math::sub_i128(total, amount)?);
            storage::bump_instance(&e);
            events::emit_withdrawn(&e, &caller, amount, interest);

            token.transfer(&vault, &caller, &payout);

            Ok(interest)
        })
    }

    /// Add `amount` tokens to the interest reserve. Any address may fund it;
    /// the funder gets no position in return.
    pub fn fund_reserve(e: Env, funder: Address, amount: i128) -> Result<(), VaultError> {
        funder.require_auth();
        if amount <= 0 {
            return Err(VaultError::InvalidAmount);
        }

        with_reentrancy_guard(&e, || {
            events::emit_reserve_funded(&e, &funder, amount);
            storage::token_client(&e).transfer(&funder, &e.current_contract_address(), &amount);
            Ok(())
        })
    }

    // ── Owner ──────────────────────────────────────────────────────────────

    /// Set the annual interest rate, in percent. Owner only.
    ///
    /// The new rate applies to every later withdrawal over its whole elapsed
    /// period; earlier periods are not checkpointed.
    pub fn set_interest_rate(e: Env, caller: Address, rate: u32) -> Result<(), VaultError> {
        require_owner(&e, &caller)?;
        if rate > MAX_INTEREST_RATE_PERCENT {
            return Err(VaultError::RateTooHigh);
        }
        let old_rate = storage::get_interest_rate(&e);
        storage::set_interest_rate(&e, rate);
        events::emit_rate_updated(&e, old_rate, rate);
        Ok(())
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Principal currently staked by `account` (0 if none).
    pub fn get_staked_amount(e: Env, account: Address) -> i128 {
        storage::load_position(&e, &account).map_or(0, |p| p.principal)
    }

    /// Full position for `account`, or `None` when nothing is staked.
    pub fn get_position(e: Env, account: Address) -> Option<Position> {
        storage::load_position(&e, &account)
    }

    /// Interest a full withdrawal by `account` would pay at the current
    /// ledger time and rate. Ignores the lock.
    pub fn quote_interest(e: Env, account: Address) -> Result<i128, VaultError> {
        match storage::load_position(&e, &account) {
            Some(position) => math::accrued_interest(
                position.principal,
                storage::get_interest_rate(&e),
                elapsed_since(&e, &position),
            ),
            None => Ok(0),
        }
    }

    /// Seconds until `account` may withdraw. 0 if unlocked or empty.
    pub fn time_until_unlock(e: Env, account: Address) -> u64 {
        match storage::load_position(&e, &account) {
            Some(position) => position
                .deposited_at
                .saturating_add(LOCK_PERIOD_SECS)
                .saturating_sub(e.ledger().timestamp()),
            None => 0,
        }
    }

    /// Address allowed to change the interest rate.
    pub fn owner(e: Env) -> Address {
        storage::get_owner(&e)
    }

    /// Current annual interest rate, in percent.
    pub fn interest_rate(e: Env) -> u32 {
        storage::get_interest_rate(&e)
    }

    /// Seconds a deposit stays locked before it can be withdrawn.
    pub fn lock_period(_e: Env) -> u64 {
        LOCK_PERIOD_SECS
    }

    /// Tokens held by the vault: all principal plus the interest reserve.
    pub fn custody_balance(e: Env) -> i128 {
        storage::token_client(&e).balance(&e.current_contract_address())
    }

    /// Sum of every account's outstanding principal.
    pub fn total_principal(e: Env) -> i128 {
        storage::get_total_principal(&e)
    }

    /// Custody in excess of outstanding principal, available for interest.
    pub fn reserve_balance(e: Env) -> i128 {
        let custody = storage::token_client(&e).balance(&e.current_contract_address());
        custody.saturating_sub(storage::get_total_principal(&e))
    }

    /// Snapshot of owner, token, current rate and the fixed limits.
    pub fn get_config(e: Env) -> VaultConfig {
        VaultConfig {
            owner: storage::get_owner(&e),
            token: storage::get_token(&e),
            interest_rate_percent: storage::get_interest_rate(&e),
            lock_period_secs: LOCK_PERIOD_SECS,
            max_interest_rate_percent: MAX_INTEREST_RATE_PERCENT,
        }
    }

    /// `true` only while a deposit, withdrawal or reserve funding is in flight.
    pub fn is_locked(e: Env) -> bool {
        storage::is_locked(&e)
    }
}
