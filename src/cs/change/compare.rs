use rayon::prelude::*;

use crate::cs::approx::greedy_change::{greedy_change, GreedyChange};
use crate::cs::change::{CoinMultiset, DenominationSet};
use crate::cs::dynamic::coin_change::min_coin_change;
use crate::error::Result;

/// Greedy and optimal change for the same amount, side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub amount: u64,
    pub greedy: GreedyChange,
    pub optimal: CoinMultiset,
}

impl Comparison {
    /// True when greedy produced an exact decomposition with the optimal
    /// number of coins.
    pub fn greedy_is_optimal(&self) -> bool {
        self.greedy.is_exact() && self.greedy.coins.total_coins() == self.optimal.total_coins()
    }

    /// How many more coins greedy used than the optimum, or `None` if greedy
    /// did not reach the amount at all.
    pub fn extra_coins(&self) -> Option<u64> {
        self.greedy
            .is_exact()
            .then(|| self.greedy.coins.total_coins() - self.optimal.total_coins())
    }
}

/// Runs both selectors on `amount`.
///
/// # Errors
///
/// Propagates the DP solver's errors; greedy never fails.
pub fn compare(amount: u64, denominations: &DenominationSet) -> Result<Comparison> {
    let optimal = min_coin_change(amount, denominations)?;
    let greedy = greedy_change(amount, denominations);
    Ok(Comparison {
        amount,
        greedy,
        optimal,
    })
}

/// Compares every amount in parallel. Results keep the order of `amounts`.
pub fn compare_many(amounts: &[u64], denominations: &DenominationSet) -> Vec<Result<Comparison>> {
    amounts
        .par_iter()
        .map(|&amount| compare(amount, denominations))
        .collect()
}
