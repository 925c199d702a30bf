#![cfg(test)]

use crate::test_helpers::*;
use soroban_sdk::{
    testutils::{Address as _, Events},
    Address, Env, FromVal, Symbol, Val, Vec,
};

/// Topics and data of the most recent event published by the contract.
fn last_contract_event(e: &Env, contract_id: &Address) -> (Vec<Val>, Val) {
    let event = e
        .events()
        .all()
        .into_iter()
        .rev()
        .find(|ev| ev.0 == *contract_id)
        .unwrap();
    (event.1, event.2)
}

#[test]
fn test_account_opened_event() {
    let e = Env::default();
    let t = setup(&e);

    t.client.deposit(&t.owner, &100, &ENTRY_FEE);

    let (topics, data) = last_contract_event(&e, &t.contract_id);
    let topic_name = Symbol::from_val(&e, &topics.get(0).unwrap());
    let topic_ident = Address::from_val(&e, &topics.get(1).unwrap());
    assert_eq!(topic_name, Symbol::new(&e, "account_opened"));
    assert_eq!(topic_ident, t.owner);
    assert_eq!(<(i128, i128)>::from_val(&e, &data), (100, ENTRY_FEE));
}

#[test]
fn test_round_claimed_event() {
    let e = Env::default();
    let t = setup(&e);
    t.client.deposit(&t.owner, &100, &ENTRY_FEE);

    t.client.claim(&t.owner);

    let (topics, data) = last_contract_event(&e, &t.contract_id);
    assert_eq!(
        Symbol::from_val(&e, &topics.get(0).unwrap()),
        Symbol::new(&e, "round_claimed")
    );
    assert_eq!(Address::from_val(&e, &topics.get(1).unwrap()), t.owner);
    assert_eq!(<(u32, i128)>::from_val(&e, &data), (0, 5));
}

#[test]
fn test_terminal_claim_emits_account_closed() {
    let e = Env::default();
    let t = setup(&e);
    t.client.deposit(&t.owner, &100, &ENTRY_FEE);
    for _ in 0..=ROUND_COUNT {
        t.client.claim(&t.owner);
    }

    let (topics, data) = last_contract_event(&e, &t.contract_id);
    assert_eq!(
        Symbol::from_val(&e, &topics.get(0).unwrap()),
        Symbol::new(&e, "account_closed")
    );
    assert_eq!(i128::from_val(&e, &data), 103);
}

#[test]
fn test_recovered_event() {
    let e = Env::default();
    let t = setup(&e);
    let recipient = Address::generate(&e);

    t.client.recover(&t.admin, &t.asset.address, &250, &recipient);

    let (topics, data) = last_contract_event(&e, &t.contract_id);
    assert_eq!(
        Symbol::from_val(&e, &topics.get(0).unwrap()),
        Symbol::new(&e, "recovered")
    );
    assert_eq!(Address::from_val(&e, &topics.get(1).unwrap()), t.asset.address);
    assert_eq!(
        <(Address, i128)>::from_val(&e, &data),
        (recipient, 250)
    );
}
