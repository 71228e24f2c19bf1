use std::collections::BTreeMap;
use std::fmt;

/// How many coins of each denomination make up an amount.
///
/// Denominations with a zero count are never stored, so two multisets are
/// equal exactly when they use the same coins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CoinMultiset {
    counts: BTreeMap<u64, u64>,
}

impl CoinMultiset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `n` coins of value `coin`. Adding zero coins is a no-op.
    pub fn add(&mut self, coin: u64, n: u64) {
        if n > 0 {
            *self.counts.entry(coin).or_insert(0) += n;
        }
    }

    pub fn count(&self, coin: u64) -> u64 {
        self.counts.get(&coin).copied().unwrap_or(0)
    }

    /// Total number of coins.
    pub fn total_coins(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Sum of `coin * count`, or `None` on overflow.
    pub fn value(&self) -> Option<u64> {
        self.counts
            .iter()
            .try_fold(0u64, |acc, (&coin, &n)| acc.checked_add(coin.checked_mul(n)?))
    }

    /// `(denomination, count)` pairs, largest denomination first.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.counts.iter().rev().map(|(&coin, &n)| (coin, n))
    }

    pub fn denominations(&self) -> impl Iterator<Item = u64> + '_ {
        self.counts.keys().rev().copied()
    }

    /// Number of distinct denominations used.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl FromIterator<(u64, u64)> for CoinMultiset {
    fn from_iter<I: IntoIterator<Item = (u64, u64)>>(iter: I) -> Self {
        let mut multiset = Self::new();
        for (coin, n) in iter {
            multiset.add(coin, n);
        }
        multiset
    }
}

/// Renders as `{50: 20, 1: 1}`, largest denomination first.
impl fmt::Display for CoinMultiset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (coin, n)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{coin}: {n}")?;
        }
        write!(f, "}}")
    }
}
