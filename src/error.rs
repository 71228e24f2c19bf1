use thiserror::Error;

/// Errors produced while validating coin change inputs or solving for change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The target amount was negative.
    #[error("invalid amount {0}: amount must be non-negative")]
    InvalidAmount(i64),

    /// The denomination set was empty, or held a non-positive or repeated value.
    #[error("invalid denominations: {0}")]
    InvalidDenominations(String),

    /// No combination of the given denominations sums exactly to the amount.
    #[error("amount {amount} cannot be formed from the given denominations")]
    Unreachable { amount: u64 },

    /// The amount exceeds the configured ceiling for the DP table.
    #[error("amount {amount} exceeds the configured maximum of {max}")]
    AmountTooLarge { amount: u64, max: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::InvalidAmount(-1).to_string(),
            "invalid amount -1: amount must be non-negative"
        );
        assert_eq!(
            Error::Unreachable { amount: 7 }.to_string(),
            "amount 7 cannot be formed from the given denominations"
        );
        assert_eq!(
            Error::AmountTooLarge { amount: 11, max: 10 }.to_string(),
            "amount 11 exceeds the configured maximum of 10"
        );
    }
}
