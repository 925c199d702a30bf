//! Deposit Incentive Contract
//!
//! Any address may lock a token amount behind a fixed entry fee and then
//! claim staged payouts: a bonus on the first claim, interest on each
//! following claim, and interest plus principal on the terminal claim,
//! which closes the account so a new cycle can start.
//!
//! ## Key design decisions
//!
//! - **One open cycle per identity**: a second deposit is rejected until the terminal claim.
//! - **Checks-Effects-Interactions**: claim state is stored *before* the payout transfer.
//! - **One claim implementation**: `claim` and the bare-transfer `receive` router share it.
//! - **Errors roll back**: every failure is an `Err(Error)`, reverting the whole invocation.
//! - **Admin sweep**: `recover` moves any token balance out, ignoring account records.

#![no_std]

mod claim;
mod deposit;
mod errors;
mod events;
mod math;
mod recovery;
mod storage;
mod token;
mod types;

pub use errors::Error;
pub use types::{ClaimReceipt, ContractConfig, UserAccount};

use soroban_sdk::{contract, contractimpl, Address, Bytes, Env};

#[cfg(test)]
mod test_helpers;


#[cfg(test)]
mod test_events;

fn validate_config(cfg: &ContractConfig) -> Result<(), Error> {
    if cfg.min_deposit <= 0 || cfg.min_deposit > cfg.max_deposit {
        return Err(Error::InvalidConfig);
    }
    if cfg.entry_fee < 0 || cfg.round_count == 0 {
        return Err(Error::InvalidConfig);
    }
    // Payouts grow with the balance, so the largest deposit must pay out
    // every round without overflowing.
    for round in [math::Round::Bonus, math::Round::Terminal] {
        math::payout(round, cfg.max_deposit, cfg.bonus_rate, cfg.interest_rate)
            .map_err(|_| Error::InvalidConfig)?;
    }
    Ok(())
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct DepositIncentive;

#[contractimpl]
impl DepositIncentive {
    // ── Setup ──────────────────────────────────────────────────────────────

    /// One-time initialization. Stores `config`; immutable afterwards.
    ///
    /// # Errors
    /// * `AlreadyInitialized`: a config is already stored
    /// * `InvalidConfig`: bad deposit bounds, negative fee, zero rounds, or a
    ///   `max_deposit` whose payouts would overflow
    pub fn initialize(e: Env, config: ContractConfig) -> Result<(), Error> {
        config.admin.require_auth();
        if storage::has_config(&e) {
            return Err(Error::AlreadyInitialized);
        }
        validate_config(&config)?;

        storage::save_config(&e, &config);
        storage::adjust_total_staked(&e, 0)?;

        events::emit_initialized(&e, &config.admin, &config.asset, config.round_count);
        Ok(())
    }

    // ── Account lifecycle ──────────────────────────────────────────────────

    /// Stake `amount` of the asset, paying exactly `fee_paid` of the fee token.
    ///
    /// The caller must have approved this contract to spend `amount`.
    ///
    /// # Errors
    /// * `InvalidAmount`: outside `[min_deposit, max_deposit]`
    /// * `InsufficientFee`: `fee_paid != entry_fee`
    /// * `AccountAlreadyOpen`: a cycle is active for `identity`
    /// * `TransferFailed`: the asset pull or fee transfer was rejected
    pub fn deposit(
        e: Env,
        identity: Address,
        amount: i128,
        fee_paid: i128,
    ) -> Result<UserAccount, Error> {
        identity.require_auth();
        deposit::open_account(&e, &identity, amount, fee_paid)
    }

    /// Claim the next round for `identity`.
    ///
    /// # Errors
    /// * `NoActiveAccount`: no open cycle
    /// * `ClaimTooEarly`: the cooldown has not elapsed
    /// * `TransferFailed`: the payout transfer was rejected
    pub fn claim(e: Env, identity: Address) -> Result<ClaimReceipt, Error> {
        identity.require_auth();
        claim::process_claim(&e, &identity)
    }

    /// Bare-transfer router: a zero-value call with an empty payload is a claim.
    ///
    /// # Errors
    /// * `UnexpectedValue`: `value != 0`
    /// * `UnsupportedPayload`: `payload` is not empty
    /// * any error of `claim`
    pub fn receive(
        e: Env,
        from: Address,
        value: i128,
        payload: Bytes,
    ) -> Result<ClaimReceipt, Error> {
        from.require_auth();
        if value != 0 {
            return Err(Error::UnexpectedValue);
        }
        if !payload.is_empty() {
            return Err(Error::UnsupportedPayload);
        }
        claim::process_claim(&e, &from)
    }

    // ── Admin ──────────────────────────────────────────────────────────────

    /// Sweep `amount` of `token` held by the contract to `recipient`.
    ///
    /// # Errors
    /// * `NotAuthorized`: `caller` is not the admin
    /// * `InvalidAmount`: `amount <= 0`
    /// * `TransferFailed`: the contract does not hold enough of `token`
    pub fn recover(
        e: Env,
        caller: Address,
        token: Address,
        amount: i128,
        recipient: Address,
    ) -> Result<(), Error> {
        caller.require_auth();
        recovery::sweep(&e, &caller, &token, amount, &recipient)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Account record for `identity`; the zero record if it never deposited.
    pub fn get_account(e: Env, identity: Address) -> UserAccount {
        storage::load_account(&e, &identity)
    }

    /// The receipt the next claim would produce, ignoring the cooldown.
    pub fn preview_claim(e: Env, identity: Address) -> Result<ClaimReceipt, Error> {
        let cfg = storage::load_config(&e)?;
        let account = storage::load_account(&e, &identity);
        let (_, receipt) = claim::advance(&cfg, &account, e.ledger().timestamp())?;
        Ok(receipt)
    }

    /// Earliest timestamp at which the next claim passes the cooldown.
    pub fn next_claim_at(e: Env, identity: Address) -> Result<u64, Error> {
        let cfg = storage::load_config(&e)?;
        let account = storage::load_account(&e, &identity);
        if !account.open {
            return Err(Error::NoActiveAccount);
        }
        Ok(account.last_claim_time.saturating_add(cfg.claim_cooldown))
    }

    /// Sum of balances over all open accounts.
    pub fn total_staked(e: Env) -> i128 {
        storage::total_staked(&e)
    }

    /// Amount of the staked asset actually held by the contract.
    pub fn held_balance(e: Env) -> Result<i128, Error> {
        let cfg = storage::load_config(&e)?;
        Ok(token::balance_of(&e, &cfg.asset, &e.current_contract_address()))
    }

    // ── Config queries ─────────────────────────────────────────────────────

    /// Full configuration as stored at initialization.
    pub fn get_config(e: Env) -> Result<ContractConfig, Error> {
        storage::load_config(&e)
    }

    /// Token being staked.
    pub fn asset(e: Env) -> Result<Address, Error> {
        Ok(storage::load_config(&e)?.asset)
    }

    /// Token the entry fee is paid in.
    pub fn fee_token(e: Env) -> Result<Address, Error> {
        Ok(storage::load_config(&e)?.fee_token)
    }

    /// Exact fee required per deposit.
    pub fn entry_fee(e: Env) -> Result<i128, Error> {
        Ok(storage::load_config(&e)?.entry_fee)
    }

    /// Inclusive lower deposit bound.
    pub fn min_deposit(e: Env) -> Result<i128, Error> {
        Ok(storage::load_config(&e)?.min_deposit)
    }

    /// Inclusive upper deposit bound.
    pub fn max_deposit(e: Env) -> Result<i128, Error> {
        Ok(storage::load_config(&e)?.max_deposit)
    }

    /// Per-mille rate paid on interest and terminal rounds.
    pub fn interest_rate(e: Env) -> Result<u32, Error> {
        Ok(storage::load_config(&e)?.interest_rate)
    }

    /// Per-mille rate paid on the bonus round.
    pub fn bonus_rate(e: Env) -> Result<u32, Error> {
        Ok(storage::load_config(&e)?.bonus_rate)
    }

    /// Index of the terminal round.
    pub fn round_count(e: Env) -> Result<u32, Error> {
        Ok(storage::load_config(&e)?.round_count)
    }

    /// Minimum seconds between successive claims.
    pub fn claim_cooldown(e: Env) -> Result<u64, Error> {
        Ok(storage::load_config(&e)?.claim_cooldown)
    }

    /// Recovery authority and entry-fee beneficiary.
    pub fn admin(e: Env) -> Result<Address, Error> {
        Ok(storage::load_config(&e)?.admin)
    }
}
