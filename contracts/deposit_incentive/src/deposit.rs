//! Deposit gate: validates a deposit and opens a new cycle.

use crate::errors::Error;
use crate::types::{ContractConfig, UserAccount};
use crate::{events, storage, token};
use soroban_sdk::{log, Address, Env};

/// Check `amount` and `fee_paid` against the configured bounds.
pub fn validate(cfg: &ContractConfig, amount: i128, fee_paid: i128) -> Result<(), Error> {
    if amount < cfg.min_deposit || amount > cfg.max_deposit {
        return Err(Error::InvalidAmount);
    }
    if fee_paid != cfg.entry_fee {
        return Err(Error::InsufficientFee);
    }
    Ok(())
}

/// Open a cycle for `identity`. Caller auth is checked by the entry point.
///
/// Both token movements happen before the account is written; the account
/// write is the last state change of the call.
pub fn open_account(
    e: &Env,
    identity: &Address,
    amount: i128,
    fee_paid: i128,
) -> Result<UserAccount, Error> {
    let cfg = storage::load_config(e)?;

    if let Err(err) = validate(&cfg, amount, fee_paid) {
        log!(e, "deposit rejected", identity.clone(), amount, fee_paid);
        return Err(err);
    }

    // Checked before the token calls below. A token can't call back into
    // this contract mid-deposit because the host rejects contract re-entry.
    if storage::load_account(e, identity).open {
        log!(e, "cycle cannot be renewed while active", identity.clone());
        return Err(Error::AccountAlreadyOpen);
    }

    token::pull_transfer(e, &cfg.asset, identity, amount)?;
    if fee_paid > 0 {
        token::forward_transfer(e, &cfg.fee_token, identity, &cfg.admin, fee_paid)?;
    }

    let account = UserAccount {
        balance: amount,
        rounds_claimed: 0,
        last_claim_time: e.ledger().timestamp(),
        open: true,
    };
    storage::adjust_total_staked(e, amount)?;
    storage::save_account(e, identity, &account);

    events::emit_account_opened(e, identity, amount, fee_paid);
    Ok(account)
}
