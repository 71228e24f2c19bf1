/// Default ceiling on the amount the DP solver will tabulate.
pub const DEFAULT_MAX_AMOUNT: u64 = 10_000_000;

/// Configuration options for the change solvers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeConfig {
    /// Largest amount the DP solver accepts. The count and back-pointer
    /// tables grow linearly with the amount, so this bounds their memory.
    pub max_amount: u64,
}

impl Default for ChangeConfig {
    fn default() -> Self {
        Self {
            max_amount: DEFAULT_MAX_AMOUNT,
        }
    }
}
