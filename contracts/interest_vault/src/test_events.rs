#![cfg(test)]

use crate::test_helpers::*;
use crate::LOCK_PERIOD_SECS;
use soroban_sdk::testutils::Events;
use soroban_sdk::{Address, Env, FromVal, Symbol, Val, Vec};

/// Last event published by the vault itself (token transfer events ignored).
fn last_vault_event(e: &Env, contract_id: &Address) -> (Vec<Val>, Val) {
    let events = e.events().all();
    let event = events
        .into_iter()
        .rev()
        .find(|ev| ev.0 == *contract_id)
        .unwrap();
    (event.1, event.2)
}

#[test]
fn test_deposit_emits_staked() {
    let e = Env::default();
    let s = setup(&e);

    s.client.deposit(&s.user, &STAKE);

    let (topics, data) = last_vault_event(&e, &s.contract_id);
    let topic_name = Symbol::from_val(&e, &topics.get(0).unwrap());
    let topic_account = Address::from_val(&e, &topics.get(1).unwrap());

    assert_eq!(topic_name, Symbol::new(&e, "staked"));
    assert_eq!(topic_account, s.user);
    assert_eq!(<(i128, u64)>::from_val(&e, &data), (STAKE, START_TIME));
}

#[test]
fn test_withdraw_emits_withdrawn_with_interest() {
    let e = Env::default();
    let s = setup_funded(&e, RESERVE_MINT);

    s.client.deposit(&s.user, &STAKE);
    advance(&e, LOCK_PERIOD_SECS + 1);
    let interest = s.client.withdraw(&s.user, &STAKE);

    let (topics, data) = last_vault_event(&e, &s.contract_id);
    let topic_name = Symbol::from_val(&e, &topics.get(0).unwrap());
    let topic_account = Address::from_val(&e, &topics.get(1).unwrap());

    assert_eq!(topic_name, Symbol::new(&e, "withdrawn"));
    assert_eq!(topic_account, s.user);
    assert_eq!(<(i128, i128)>::from_val(&e, &data), (STAKE, interest));
}

#[test]
fn test_set_rate_emits_rate_updated() {
    let e = Env::default();
    let s = setup(&e);

    s.client.set_interest_rate(&s.owner, &9_u32);

    let (topics, data) = last_vault_event(&e, &s.contract_id);
    let topic_name = Symbol::from_val(&e, &topics.get(0).unwrap());

    assert_eq!(topic_name, Symbol::new(&e, "rate_updated"));
    assert_eq!(<(u32, u32)>::from_val(&e, &data), (5, 9));
}

#[test]
fn test_fund_reserve_emits_reserve_funded() {
    let e = Env::default();
    let s = setup(&e);

    s.client.fund_reserve(&s.owner, &42_i128);

    let (topics, data) = last_vault_event(&e, &s.contract_id);
    let topic_name = Symbol::from_val(&e, &topics.get(0).unwrap());
    let topic_funder = Address::from_val(&e, &topics.get(1).unwrap());

    assert_eq!(topic_name, Symbol::new(&e, "reserve_funded"));
    assert_eq!(topic_funder, s.owner);
    assert_eq!(i128::from_val(&e, &data), 42);
}
