//! Storage access for vault state.
//!
//! | Key                          | Tier           | Lifecycle           |
//! |------------------------------|----------------|---------------------|
//! | `Owner`, `Token`             | `instance()`   | Set once at deploy  |
//! | `InterestRate`               | `instance()`   | Owner-mutable       |
//! | `TotalPrincipal`, `Locked`   | `instance()`   | Every deposit/withdraw |
//! | `Position(account)`          | `persistent()` | While principal > 0 |

use crate::types::{DataKey, Position, BUMP_TARGET, BUMP_THRESHOLD};
use soroban_sdk::{token::TokenClient, Address, Env};

pub fn get_owner(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .unwrap_or_else(|| panic!("owner not set"))
}

pub fn set_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .unwrap_or_else(|| panic!("token not set"))
}

pub fn set_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::Token, token);
}

pub fn token_client(e: &Env) -> TokenClient<'_> {
    TokenClient::new(e, &get_token(e))
}

pub fn get_interest_rate(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::InterestRate)
        .unwrap_or(0)
}

pub fn set_interest_rate(e: &Env, rate: u32) {
    e.storage().instance().set(&DataKey::InterestRate, &rate);
}

pub fn get_total_principal(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalPrincipal)
        .unwrap_or(0)
}

pub fn set_total_principal(e: &Env, total: i128) {
    e.storage().instance().set(&DataKey::TotalPrincipal, &total);
}

/// Read a position and bump its TTL. `None` means zero principal.
pub fn load_position(e: &Env, account: &Address) -> Option<Position> {
    let key = DataKey::Position(account.clone());
    let storage = e.storage().persistent();
    let position: Position = storage.get(&key)?;
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
    Some(position)
}

/// Persist a position, or drop the entry once its principal reaches zero.
pub fn save_position(e: &Env, account: &Address, position: &Position) {
    let key = DataKey::Position(account.clone());
    let storage = e.storage().persistent();
    if position.principal == 0 {
        storage.remove(&key);
        return;
    }
    storage.set(&key, position);
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

pub fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_TARGET);
}

pub fn is_locked(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::Locked)
        .unwrap_or(false)
}

pub fn set_locked(e: &Env, locked: bool) {
    e.storage().instance().set(&DataKey::Locked, &locked);
}
