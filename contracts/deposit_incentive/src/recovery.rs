//! Admin sweep of token balances held by the contract.
//!
//! Bypasses per-account accounting entirely: no `UserAccount` and no stake
//! total is read or written. Sweeping the live staked asset can leave open
//! accounts underfunded.

use crate::errors::Error;
use crate::{events, storage, token};
use soroban_sdk::{log, Address, Env};

pub fn sweep(
    e: &Env,
    caller: &Address,
    token_id: &Address,
    amount: i128,
    recipient: &Address,
) -> Result<(), Error> {
    let cfg = storage::load_config(e)?;
    if *caller != cfg.admin {
        log!(e, "recovery by non-admin", caller.clone());
        return Err(Error::NotAuthorized);
    }
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    token::push_transfer(e, token_id, recipient, amount)?;

    events::emit_recovered(e, token_id, recipient, amount);
    Ok(())
}
