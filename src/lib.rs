pub mod cs;
pub mod error;

pub use cs::approx::{greedy_change, GreedyChange};
pub use cs::change::{
    compare, compare_many, dp, greedy, ChangeConfig, CoinMultiset, Comparison, DenominationSet,
    DEFAULT_MAX_AMOUNT, STANDARD_DENOMINATIONS,
};
pub use cs::dynamic::{min_coin_change, min_coin_change_with_config, min_coin_count};
pub use error::{Error, Result};
