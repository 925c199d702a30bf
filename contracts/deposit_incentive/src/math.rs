//! Round selection and payout arithmetic.
//!
//! Rates are per-mille. Division truncates toward zero, so every payout
//! rounds in the ledger's favor.

use crate::errors::Error;

/// Denominator for per-mille rates.
pub const PERMILLE: i128 = 1_000;

/// Which payout formula a claim uses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Round {
    /// First claim of a cycle, paid at the bonus rate.
    Bonus,
    /// Intermediate claims, paid at the interest rate.
    Interest,
    /// Final claim: interest plus principal, closes the account.
    Terminal,
}

impl Round {
    /// Classify the next claim from the number of claims already paid.
    ///
    /// Returns `None` past the terminal round, which an open account can
    /// never legitimately reach.
    #[must_use]
    pub fn for_claim(rounds_claimed: u32, round_count: u32) -> Option<Round> {
        if rounds_claimed > round_count {
            None
        } else if rounds_claimed == round_count {
            Some(Round::Terminal)
        } else if rounds_claimed == 0 {
            Some(Round::Bonus)
        } else {
            Some(Round::Interest)
        }
    }
}

/// `floor(amount * rate / 1000)` with checked intermediate multiplication.
pub fn permille(amount: i128, rate: u32) -> Result<i128, Error> {
    amount
        .checked_mul(rate as i128)
        .ok_or(Error::Overflow)?
        .checked_div(PERMILLE)
        .ok_or(Error::Overflow)
}

/// Amount owed for `round` on a stake of `balance`.
pub fn payout(
    round: Round,
    balance: i128,
    bonus_rate: u32,
    interest_rate: u32,
) -> Result<i128, Error> {
    match round {
        Round::Bonus => permille(balance, bonus_rate),
        Round::Interest => permille(balance, interest_rate),
        Round::Terminal => permille(balance, interest_rate)?
            .checked_add(balance)
            .ok_or(Error::Overflow),
    }
}

/// `true` while fewer than `cooldown` seconds have passed since `last`.
#[must_use]
pub fn is_too_early(now: u64, last: u64, cooldown: u64) -> bool {
    now.saturating_sub(last) < cooldown
}
