//! Token ledger integration.
//!
//! Every outbound call goes through a `try_*` client method so a rejected
//! transfer surfaces as `Error::TransferFailed` and the caller's whole
//! invocation rolls back.

use crate::errors::Error;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{log, Address, Env};

/// Balance of `owner` on `token`.
pub fn balance_of(e: &Env, token: &Address, owner: &Address) -> i128 {
    TokenClient::new(e, token).balance(owner)
}

/// Pull `amount` of `token` from `from` into this contract.
/// Requires `from` to have approved the contract as spender.
pub fn pull_transfer(e: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), Error> {
    let contract = e.current_contract_address();
    match TokenClient::new(e, token).try_transfer_from(&contract, from, &contract, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(e, "pull transfer rejected", token.clone(), from.clone(), amount);
            Err(Error::TransferFailed)
        }
    }
}

/// Push `amount` of `token` held by this contract to `to`.
pub fn push_transfer(e: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }
    let contract = e.current_contract_address();
    match TokenClient::new(e, token).try_transfer(&contract, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(e, "push transfer rejected", token.clone(), to.clone(), amount);
            Err(Error::TransferFailed)
        }
    }
}

/// Move `amount` of `token` directly between two third-party addresses.
/// `from` must already have authorized the invocation.
pub fn forward_transfer(
    e: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    match TokenClient::new(e, token).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(e, "fee transfer rejected", token.clone(), from.clone(), amount);
            Err(Error::TransferFailed)
        }
    }
}
