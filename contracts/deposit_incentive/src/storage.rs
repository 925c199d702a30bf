//! Storage access for configuration and the account registry.
//!
//! | Key                     | Tier           | Lifecycle        |
//! |-------------------------|----------------|------------------|
//! | `DataKey::Config`       | `instance()`   | Entire contract  |
//! | `DataKey::TotalStaked`  | `instance()`   | Entire contract  |
//! | `DataKey::Account(id)`  | `persistent()` | Per identity     |

use crate::errors::Error;
use crate::types::{ContractConfig, DataKey, UserAccount};
use soroban_sdk::{Address, Env};

/// Minimum ledger sequence TTL before a bump is requested (~1 day at 5 s/ledger).
const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
const BUMP_TARGET: u32 = 518_400;

// ─── Config ────────────────────────────────────────────────────────────────

pub fn has_config(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Config)
}

pub fn load_config(e: &Env) -> Result<ContractConfig, Error> {
    let cfg = e
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)?;
    e.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_TARGET);
    Ok(cfg)
}

pub fn save_config(e: &Env, cfg: &ContractConfig) {
    e.storage().instance().set(&DataKey::Config, cfg);
    e.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_TARGET);
}

// ─── Total staked ──────────────────────────────────────────────────────────

pub fn total_staked(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalStaked)
        .unwrap_or(0)
}

/// Add `delta` (which may be negative) to the running stake total.
pub fn adjust_total_staked(e: &Env, delta: i128) -> Result<i128, Error> {
    let total = total_staked(e)
        .checked_add(delta)
        .ok_or(Error::Overflow)?;
    e.storage().instance().set(&DataKey::TotalStaked, &total);
    Ok(total)
}

// ─── Accounts ──────────────────────────────────────────────────────────────

/// Read the account for `identity`, or the zero record if none was ever written.
pub fn load_account(e: &Env, identity: &Address) -> UserAccount {
    let key = DataKey::Account(identity.clone());
    let storage = e.storage().persistent();
    match storage.get::<_, UserAccount>(&key) {
        Some(account) => {
            storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
            account
        }
        None => UserAccount::default(),
    }
}

pub fn save_account(e: &Env, identity: &Address, account: &UserAccount) {
    let key = DataKey::Account(identity.clone());
    let storage = e.storage().persistent();
    storage.set(&key, account);
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}
