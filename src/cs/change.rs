pub mod compare;
pub mod config;
pub mod denominations;
pub mod multiset;


pub use compare::{compare, compare_many, Comparison};
pub use config::{ChangeConfig, DEFAULT_MAX_AMOUNT};
pub use denominations::{DenominationSet, STANDARD_DENOMINATIONS};
pub use multiset::CoinMultiset;

use crate::cs::approx::greedy_change::{greedy_change, GreedyChange};
use crate::cs::dynamic::coin_change::min_coin_change;
use crate::error::{Error, Result};

fn validate_amount(amount: i64) -> Result<u64> {
    u64::try_from(amount).map_err(|_| Error::InvalidAmount(amount))
}

/// Greedy change for raw inputs.
///
/// Fails only on invalid input. A non-exact greedy result is still `Ok`; check
/// [`GreedyChange::is_exact`].
///
/// # Examples
///
/// ```
/// use coinchange::greedy;
///
/// let change = greedy(1001, &[50, 25, 10, 5, 2, 1]).unwrap();
/// assert_eq!(change.coins.to_string(), "{50: 20, 1: 1}");
/// assert!(greedy(-1, &[1]).is_err());
/// ```
pub fn greedy(amount: i64, denominations: &[i64]) -> Result<GreedyChange> {
    let amount = validate_amount(amount)?;
    let set = DenominationSet::new(denominations)?;
    Ok(greedy_change(amount, &set))
}

/// Minimum-coin change for raw inputs.
///
/// # Errors
///
/// [`Error::InvalidAmount`] or [`Error::InvalidDenominations`] before any
/// work is done, otherwise the errors of [`min_coin_change`].
///
/// # Examples
///
/// ```
/// use coinchange::dp;
///
/// let coins = dp(6, &[4, 3]).unwrap();
/// assert_eq!(coins.to_string(), "{3: 2}");
/// ```
pub fn dp(amount: i64, denominations: &[i64]) -> Result<CoinMultiset> {
    let amount = validate_amount(amount)?;
    let set = DenominationSet::new(denominations)?;
    min_coin_change(amount, &set)
}
