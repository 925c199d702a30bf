use soroban_sdk::{contracttype, Address};

// ─── Configuration ─────────────────────────────────────────────────────────

/// Parameters fixed once at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractConfig {
    /// Token being staked.
    pub asset: Address,
    /// Token the entry fee is paid in (the native asset in production).
    pub fee_token: Address,
    /// Exact fee required per deposit, in `fee_token` units.
    pub entry_fee: i128,
    /// Inclusive lower deposit bound.
    pub min_deposit: i128,
    /// Inclusive upper deposit bound.
    pub max_deposit: i128,
    /// Per-mille rate paid on interest and terminal rounds.
    pub interest_rate: u32,
    /// Per-mille rate paid on the bonus round.
    pub bonus_rate: u32,
    /// Index of the terminal round. Rounds `1..round_count` pay interest.
    pub round_count: u32,
    /// Minimum seconds between successive claims.
    pub claim_cooldown: u64,
    /// Recovery authority and entry-fee beneficiary.
    pub admin: Address,
}

// ─── Account state ─────────────────────────────────────────────────────────

/// Per-identity subscription record.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UserAccount {
    /// Amount currently staked; zero once the cycle closes.
    pub balance: i128,
    /// Claims already paid out for the current cycle.
    pub rounds_claimed: u32,
    /// Timestamp of the latest claim, or of the deposit before the first claim.
    pub last_claim_time: u64,
    /// false before the first deposit and after the terminal claim.
    pub open: bool,
}

/// Outcome of one claim step.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimReceipt {
    /// Round index that was paid (0 = bonus).
    pub round: u32,
    /// Amount pushed to the claimant.
    pub payout: i128,
    /// true when this claim was the terminal round.
    pub closed: bool,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
pub enum DataKey {
    /// ContractConfig, write-once.
    Config,
    /// Sum of balances over all open accounts.
    TotalStaked,
    /// Per-identity UserAccount.
    Account(Address),
}
