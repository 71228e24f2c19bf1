use std::collections::BTreeSet;

use crate::error::{Error, Result};

/// The coin values used by the original till: 50, 25, 10, 5, 2 and 1.
pub const STANDARD_DENOMINATIONS: [u64; 6] = [50, 25, 10, 5, 2, 1];

/// A validated set of coin values, each available in unlimited supply.
///
/// Values are stored strictly descending regardless of the order they were
/// supplied in. Both selectors walk the set in this order, so the greedy rule
/// always tries the largest coin first and the DP tie-break is fixed by the
/// set itself rather than by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DenominationSet {
    values: Vec<u64>,
}

impl DenominationSet {
    /// Validates `values` and builds a descending denomination set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDenominations`] if `values` is empty, contains
    /// a value `<= 0`, or contains the same value twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use coinchange::DenominationSet;
    ///
    /// let set = DenominationSet::new(&[1, 5, 2]).unwrap();
    /// assert_eq!(set.as_slice(), &[5, 2, 1]);
    /// assert!(DenominationSet::new(&[]).is_err());
    /// assert!(DenominationSet::new(&[3, 0]).is_err());
    /// assert!(DenominationSet::new(&[2, 2]).is_err());
    /// ```
    pub fn new(values: &[i64]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::InvalidDenominations(
                "denomination set is empty".to_string(),
            ));
        }

        let mut seen = BTreeSet::new();
        for &value in values {
            if value <= 0 {
                return Err(Error::InvalidDenominations(format!(
                    "denomination {value} is not positive"
                )));
            }
            if !seen.insert(value as u64) {
                return Err(Error::InvalidDenominations(format!(
                    "denomination {value} appears more than once"
                )));
            }
        }

        Ok(Self {
            values: seen.into_iter().rev().collect(),
        })
    }

    /// The standard set {50, 25, 10, 5, 2, 1}. It is canonical, so the greedy
    /// selector is optimal for every amount.
    pub fn standard() -> Self {
        Self {
            values: STANDARD_DENOMINATIONS.to_vec(),
        }
    }

    /// Denominations, largest first.
    pub fn as_slice(&self) -> &[u64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed set; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn largest(&self) -> u64 {
        self.values[0]
    }

    pub fn smallest(&self) -> u64 {
        self.values[self.values.len() - 1]
    }

    pub fn contains(&self, coin: u64) -> bool {
        self.values.binary_search_by(|v| coin.cmp(v)).is_ok()
    }

    /// Whether the unit coin is present, which makes every amount reachable.
    pub fn has_unit(&self) -> bool {
        self.smallest() == 1
    }
}

impl<'a> IntoIterator for &'a DenominationSet {
    type Item = u64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter().copied()
    }
}
