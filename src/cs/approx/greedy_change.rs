use log::debug;
use num_integer::Integer;

use crate::cs::change::{CoinMultiset, DenominationSet};
use crate::error::{Error, Result};

/// Outcome of the greedy selector: the coins it took and whatever it could
/// not cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreedyChange {
    pub coins: CoinMultiset,
    pub remainder: u64,
}

impl GreedyChange {
    /// True when the coins sum exactly to the requested amount.
    pub fn is_exact(&self) -> bool {
        self.remainder == 0
    }

    pub fn coins(&self) -> &CoinMultiset {
        &self.coins
    }

    pub fn remainder(&self) -> u64 {
        self.remainder
    }

    /// Returns the coins if the decomposition is exact.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unreachable`] when the greedy pass left a remainder.
    pub fn into_exact(self) -> Result<CoinMultiset> {
        if self.is_exact() {
            Ok(self.coins)
        } else {
            let amount = self
                .coins
                .value()
                .unwrap_or(u64::MAX)
                .saturating_add(self.remainder);
            Err(Error::Unreachable { amount })
        }
    }
}

/// Makes change for `amount` by repeatedly taking the largest coin that fits.
///
/// One pass over the denominations, largest first: take `remaining / d` coins
/// of each `d` and carry `remaining % d` forward. The result is minimal only
/// for canonical coin systems such as {50, 25, 10, 5, 2, 1}. For other sets it
/// may use more coins than necessary, or stop with a nonzero
/// [`remainder`](GreedyChange::remainder) even though an exact decomposition
/// exists: with {4, 3} and amount 6 it takes one 4 and leaves 2 uncovered.
/// Such results are returned as-is; check [`GreedyChange::is_exact`].
///
/// # Examples
///
/// ```
/// use coinchange::{greedy_change, DenominationSet};
///
/// let change = greedy_change(113, &DenominationSet::standard());
/// assert!(change.is_exact());
/// assert_eq!(change.coins.to_string(), "{50: 2, 10: 1, 2: 1, 1: 1}");
///
/// let partial = greedy_change(6, &DenominationSet::new(&[4, 3]).unwrap());
/// assert_eq!(partial.remainder, 2);
/// ```
pub fn greedy_change(amount: u64, denominations: &DenominationSet) -> GreedyChange {
    let mut coins = CoinMultiset::new();
    let mut remaining = amount;

    for coin in denominations {
        if remaining == 0 {
            break;
        }
        let (count, rest) = remaining.div_rem(&coin);
        coins.add(coin, count);
        remaining = rest;
    }

    if remaining != 0 {
        debug!(
            "greedy change for {} left remainder {} over {} denominations",
            amount,
            remaining,
            denominations.len()
        );
    }

    GreedyChange {
        coins,
        remainder: remaining,
    }
}
