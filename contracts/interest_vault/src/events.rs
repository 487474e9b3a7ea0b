use soroban_sdk::{Address, Env, Symbol};

/// Emitted when a deposit is recorded.
///
/// # Topics
/// * `Symbol` - "staked"
/// * `Address` - The depositing account
///
/// # Data
/// * `i128` - The amount deposited
/// * `u64` - The ledger timestamp, which becomes the new lock anchor
pub fn emit_staked(e: &Env, account: &Address, amount: i128, timestamp: u64) {
    let topics = (Symbol::new(e, "staked"), account.clone());
    let data = (amount, timestamp);
    e.events().publish(topics, data);
}

/// Emitted when a withdrawal is settled.
///
/// # Topics
/// * `Symbol` - "withdrawn"
/// * `Address` - The withdrawing account
///
/// # Data
/// * `i128` - The principal withdrawn
/// * `i128` - The interest paid on top of it
pub fn emit_withdrawn(e: &Env, account: &Address, amount: i128, interest: i128) {
    let topics = (Symbol::new(e, "withdrawn"), account.clone());
    let data = (amount, interest);
    e.events().publish(topics, data);
}

/// Emitted when the owner changes the annual interest rate.
pub fn emit_rate_updated(e: &Env, old_rate: u32, new_rate: u32) {
    e.events()
        .publish((Symbol::new(e, "rate_updated"),), (old_rate, new_rate));
}

/// Emitted when the interest reserve is topped up.
pub fn emit_reserve_funded(e: &Env, funder: &Address, amount: i128) {
    e.events().publish(
        (Symbol::new(e, "reserve_funded"), funder.clone()),
        amount,
    );
}
