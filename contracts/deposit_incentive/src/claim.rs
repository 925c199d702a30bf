//! Claim state machine.
//!
//! `process_claim` is the only place a round is paid. Both the named
//! `claim` entry point and the bare-transfer `receive` router call it.

use crate::errors::{Error, ERR_ROUND_PAST_TERMINAL};
use crate::math::{self, Round};
use crate::types::{ClaimReceipt, ContractConfig, UserAccount};
use crate::{events, storage, token};
use soroban_sdk::{log, Address, Env};

/// Compute the post-claim account and its receipt without touching storage.
///
/// Does not check the cooldown. Panics if an open account is already past
/// its terminal round.
pub fn advance(
    cfg: &ContractConfig,
    account: &UserAccount,
    now: u64,
) -> Result<(UserAccount, ClaimReceipt), Error> {
    if !account.open {
        return Err(Error::NoActiveAccount);
    }
    let round = Round::for_claim(account.rounds_claimed, cfg.round_count)
        .unwrap_or_else(|| panic!("{}", ERR_ROUND_PAST_TERMINAL));
    let payout = math::payout(round, account.balance, cfg.bonus_rate, cfg.interest_rate)?;

    let mut next = account.clone();
    next.rounds_claimed = account
        .rounds_claimed
        .checked_add(1)
        .ok_or(Error::Overflow)?;
    next.last_claim_time = now;

    let closed = round == Round::Terminal;
    if closed {
        next.balance = 0;
        next.open = false;
    }

    let receipt = ClaimReceipt {
        round: account.rounds_claimed,
        payout,
        closed,
    };
    Ok((next, receipt))
}

/// Pay the next round for `identity`. Caller auth is checked by the entry point.
pub fn process_claim(e: &Env, identity: &Address) -> Result<ClaimReceipt, Error> {
    let cfg = storage::load_config(e)?;
    let account = storage::load_account(e, identity);

    if !account.open {
        log!(e, "claim without open account", identity.clone());
        return Err(Error::NoActiveAccount);
    }

    let now = e.ledger().timestamp();
    if math::is_too_early(now, account.last_claim_time, cfg.claim_cooldown) {
        log!(e, "claim before cooldown", identity.clone(), account.last_claim_time, now);
        return Err(Error::ClaimTooEarly);
    }

    let (next, receipt) = advance(&cfg, &account, now)?;

    // CEI: account reflects the post-claim state before the payout leaves.
    storage::save_account(e, identity, &next);
    if receipt.closed {
        storage::adjust_total_staked(e, -account.balance)?;
    }

    token::push_transfer(e, &cfg.asset, identity, receipt.payout)?;

    events::emit_round_claimed(e, identity, receipt.round, receipt.payout);
    if receipt.closed {
        events::emit_account_closed(e, identity, receipt.payout);
    }

    Ok(receipt)
}
