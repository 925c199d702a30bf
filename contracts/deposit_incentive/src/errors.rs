use soroban_sdk::contracterror;

/// Rejection reasons returned by every fallible entry point.
///
/// Codes are wire-stable. Append new variants at the end of their block.
///
/// Error Code Layout:
///   1   -  99 : Initialization
///   100 - 199 : Deposit
///   200 - 299 : Claim
///   300 - 399 : Authorization
///   400 - 499 : Token ledger
///   500 - 599 : Arithmetic
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Initialization (1-99) ---
    /// A configuration is already stored.
    AlreadyInitialized = 1,
    /// No configuration has been stored yet.
    NotInitialized = 2,
    /// Deposit bounds or round count are inconsistent.
    InvalidConfig = 3,

    // --- Deposit (100-199) ---
    /// Amount outside `[min_deposit, max_deposit]`, or a non-positive recovery amount.
    InvalidAmount = 100,
    /// `fee_paid` differs from the configured entry fee.
    InsufficientFee = 101,
    /// Cycle cannot be renewed while active.
    AccountAlreadyOpen = 102,

    // --- Claim (200-299) ---
    /// No open cycle for this identity.
    NoActiveAccount = 200,
    /// The claim cooldown has not elapsed since the last claim.
    ClaimTooEarly = 201,
    /// A bare-transfer claim carried a non-zero value.
    UnexpectedValue = 202,
    /// A bare-transfer claim carried a payload.
    UnsupportedPayload = 203,

    // --- Authorization (300-399) ---
    /// Caller is not the configured admin.
    NotAuthorized = 300,

    // --- Token ledger (400-499) ---
    /// The token contract rejected a transfer.
    TransferFailed = 400,

    // --- Arithmetic (500-599) ---
    /// Checked arithmetic overflowed.
    Overflow = 500,
}

/// Panic message for a round index past the terminal round on an open account.
///
/// The terminal claim always closes the account, so hitting this is a
/// bookkeeping bug rather than a caller error.
pub const ERR_ROUND_PAST_TERMINAL: &str = "round index past terminal round on open account";
