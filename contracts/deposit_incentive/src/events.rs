use soroban_sdk::{Address, Env, Symbol};

/// Emitted once when the configuration is stored.
///
/// # Topics
/// * `Symbol` - "initialized"
/// * `Address` - The admin
///
/// # Data
/// * `Address` - The staked asset
/// * `u32` - The round count
pub fn emit_initialized(e: &Env, admin: &Address, asset: &Address, round_count: u32) {
    let topics = (Symbol::new(e, "initialized"), admin.clone());
    e.events().publish(topics, (asset.clone(), round_count));
}

/// Emitted when a deposit opens a new cycle.
///
/// # Topics
/// * `Symbol` - "account_opened"
/// * `Address` - The depositor
///
/// # Data
/// * `i128` - The staked amount
/// * `i128` - The entry fee paid
pub fn emit_account_opened(e: &Env, identity: &Address, amount: i128, fee_paid: i128) {
    let topics = (Symbol::new(e, "account_opened"), identity.clone());
    e.events().publish(topics, (amount, fee_paid));
}

/// Emitted for every paid claim, terminal included.
///
/// # Topics
/// * `Symbol` - "round_claimed"
/// * `Address` - The claimant
///
/// # Data
/// * `u32` - The round index paid
/// * `i128` - The payout
pub fn emit_round_claimed(e: &Env, identity: &Address, round: u32, payout: i128) {
    let topics = (Symbol::new(e, "round_claimed"), identity.clone());
    e.events().publish(topics, (round, payout));
}

/// Emitted after the terminal claim closes a cycle.
pub fn emit_account_closed(e: &Env, identity: &Address, payout: i128) {
    let topics = (Symbol::new(e, "account_closed"), identity.clone());
    e.events().publish(topics, payout);
}

/// Emitted when the admin sweeps a token balance out of the contract.
///
/// # Topics
/// * `Symbol` - "recovered"
/// * `Address` - The swept token
///
/// # Data
/// * `Address` - The recipient
/// * `i128` - The amount swept
pub fn emit_recovered(e: &Env, token: &Address, recipient: &Address, amount: i128) {
    let topics = (Symbol::new(e, "recovered"), token.clone());
    e.events().publish(topics, (recipient.clone(), amount));
}
