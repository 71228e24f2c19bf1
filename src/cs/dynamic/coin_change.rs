use log::{debug, trace};

use crate::cs::change::{ChangeConfig, CoinMultiset, DenominationSet};
use crate::error::{Error, Result};

// Sentinel for sub-amounts no combination of coins has reached yet.
const UNREACHABLE: usize = usize::MAX;

/// Finds a minimum-cardinality multiset of coins summing exactly to `amount`.
///
/// This is the unbounded variant: each denomination may be used any number of
/// times. Uses the default [`ChangeConfig`]; see
/// [`min_coin_change_with_config`] for details.
///
/// # Examples
///
/// ```
/// use coinchange::{min_coin_change, DenominationSet};
///
/// let set = DenominationSet::new(&[4, 3]).unwrap();
/// let coins = min_coin_change(6, &set).unwrap();
/// assert_eq!(coins.count(3), 2);
/// assert_eq!(coins.total_coins(), 2);
///
/// // 5 cannot be made from 4s and 3s
/// assert!(min_coin_change(5, &set).is_err());
/// ```
pub fn min_coin_change(amount: u64, denominations: &DenominationSet) -> Result<CoinMultiset> {
    min_coin_change_with_config(amount, denominations, &ChangeConfig::default())
}

/// Finds a minimum-cardinality multiset of coins summing exactly to `amount`.
///
/// `count[x]` holds the fewest coins summing to `x` and `parent[x]` the coin
/// last used to reach that count. Denominations are processed largest first
/// and sub-amounts ascending; an entry is only replaced on a strict
/// improvement, so for each sub-amount the first denomination pass to reach
/// the minimal count keeps it and later passes with an equal count do not.
/// This biases ties toward larger coins and makes the output deterministic
/// for a given set. The multiset is rebuilt once at the end by walking
/// `x -> x - parent[x]` from `amount` down to zero.
///
/// Runs in O(amount × |denominations|) time and O(amount) space.
///
/// # Errors
///
/// * [`Error::AmountTooLarge`] if `amount` exceeds `config.max_amount`.
/// * [`Error::Unreachable`] if no combination of the denominations sums to
///   `amount`.
pub fn min_coin_change_with_config(
    amount: u64,
    denominations: &DenominationSet,
    config: &ChangeConfig,
) -> Result<CoinMultiset> {
    let target = table_len(amount, config)?;
    debug!(
        "solving change for {} over {} denominations",
        amount,
        denominations.len()
    );

    let mut count = vec![UNREACHABLE; target + 1];
    let mut parent = vec![0u64; target + 1];
    count[0] = 0;

    for coin in denominations {
        if coin > amount {
            continue;
        }
        let step = coin as usize;
        for x in step..=target {
            let prev = count[x - step];
            if prev != UNREACHABLE && prev + 1 < count[x] {
                count[x] = prev + 1;
                parent[x] = coin;
            }
        }
    }
    trace!("change table for {} filled", amount);

    if count[target] == UNREACHABLE {
        debug!("amount {} is unreachable", amount);
        return Err(Error::Unreachable { amount });
    }

    Ok(reconstruct(&parent, target))
}

/// Tallies the coins on the back-pointer path from `target` to zero.
///
/// Precondition: `target` is reachable, so every `parent[x]` on the path is
/// a nonzero coin no larger than `x`.
fn reconstruct(parent: &[u64], target: usize) -> CoinMultiset {
    let mut coins = CoinMultiset::new();
    let mut x = target;
    while x > 0 {
        let coin = parent[x];
        coins.add(coin, 1);
        x -= coin as usize;
    }
    coins
}

/// Computes only the minimum number of coins needed to form `amount`.
///
/// Same table as [`min_coin_change`] without the back-pointers.
///
/// # Examples
///
/// ```
/// use coinchange::{min_coin_count, DenominationSet};
///
/// // Minimum 3 coins: 6 + 6 + 6 = 18
/// let set = DenominationSet::new(&[1, 6, 10]).unwrap();
/// assert_eq!(min_coin_count(18, &set), Ok(3));
/// ```
pub fn min_coin_count(amount: u64, denominations: &DenominationSet) -> Result<usize> {
    let target = table_len(amount, &ChangeConfig::default())?;

    let mut count = vec![UNREACHABLE; target + 1];
    count[0] = 0;

    for coin in denominations {
        if coin > amount {
            continue;
        }
        let step = coin as usize;
        for x in step..=target {
            if count[x - step] != UNREACHABLE {
                count[x] = count[x].min(count[x - step] + 1);
            }
        }
    }

    match count[target] {
        UNREACHABLE => Err(Error::Unreachable { amount }),
        n => Ok(n),
    }
}

fn table_len(amount: u64, config: &ChangeConfig) -> Result<usize> {
    if amount > config.max_amount {
        return Err(Error::AmountTooLarge {
            amount,
            max: config.max_amount,
        });
    }
    usize::try_from(amount).map_err(|_| Error::AmountTooLarge {
        amount,
        max: usize::MAX as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multiset(pairs: &[(u64, u64)]) -> CoinMultiset {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_zero_amount() {
        let coins = min_coin_change(0, &DenominationSet::standard()).unwrap();
        assert!(coins.is_empty());
        assert_eq!(min_coin_count(0, &DenominationSet::standard()), Ok(0));
    }

    #[test]
    fn test_standard_scenarios() {
        let set = DenominationSet::standard();
        assert_eq!(
            min_coin_change(1001, &set).unwrap(),
            multiset(&[(50, 20), (1, 1)])
        );
        assert_eq!(
            min_coin_change(113, &set).unwrap(),
            multiset(&[(50, 2), (10, 1), (2, 1), (1, 1)])
        );
    }

    #[test]
    fn test_non_canonical_optimal() {
        let set = DenominationSet::new(&[4, 3]).unwrap();
        assert_eq!(min_coin_change(6, &set).unwrap(), multiset(&[(3, 2)]));
        assert_eq!(min_coin_count(6, &set), Ok(2));
    }

    #[test]
    fn test_unreachable() {
        let set = DenominationSet::new(&[4, 3]).unwrap();
        for amount in [1, 2, 5] {
            assert_eq!(
                min_coin_change(amount, &set),
                Err(Error::Unreachable { amount })
            );
            assert_eq!(
                min_coin_count(amount, &set),
                Err(Error::Unreachable { amount })
            );
        }
        let evens = DenominationSet::new(&[2, 4]).unwrap();
        assert_eq!(
            min_coin_count(7, &evens),
            Err(Error::Unreachable { amount: 7 })
        );
    }

    #[test]
    fn test_coin_larger_than_amount() {
        let set = DenominationSet::new(&[100, 7]).unwrap();
        assert_eq!(min_coin_change(14, &set).unwrap(), multiset(&[(7, 2)]));
    }

    #[test]
    fn test_first_minimal_wins() {
        // 6 = 3 + 3 = 5 + 1. The 3s pass reaches 6 in two coins before the
        // 1s pass does, and the later equal count does not replace it.
        let set = DenominationSet::new(&[1, 3, 5]).unwrap();
        assert_eq!(min_coin_change(6, &set).unwrap(), multiset(&[(3, 2)]));

        // 10 = 5 + 5 = 6 + 4. The 6 + 4 path only closes during the 4s pass,
        // after the 5s pass already stored two coins.
        let set = DenominationSet::new(&[4, 5, 6]).unwrap();
        assert_eq!(min_coin_change(10, &set).unwrap(), multiset(&[(5, 2)]));
    }

    #[test]
    fn test_tie_break_ignores_input_order() {
        let a = DenominationSet::new(&[1, 3, 5]).unwrap();
        let b = DenominationSet::new(&[5, 1, 3]).unwrap();
        for amount in 0..50 {
            assert_eq!(min_coin_change(amount, &a), min_coin_change(amount, &b));
        }
    }

    #[test]
    fn test_counts_match_reconstruction() {
        let set = DenominationSet::new(&[1, 6, 10]).unwrap();
        assert_eq!(min_coin_count(18, &set), Ok(3));
        let coins = min_coin_change(18, &set).unwrap();
        assert_eq!(coins, multiset(&[(6, 3)]));
    }

    #[test]
    fn test_amount_ceiling() {
        let config = ChangeConfig { max_amount: 100 };
        let set = DenominationSet::standard();
        assert!(min_coin_change_with_config(100, &set, &config).is_ok());
        assert_eq!(
            min_coin_change_with_config(101, &set, &config),
            Err(Error::AmountTooLarge {
                amount: 101,
                max: 100
            })
        );
    }
}
