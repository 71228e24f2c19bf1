pub mod coin_change;

// Re-export dynamic programming algorithms with descriptive names
pub use coin_change::{min_coin_change, min_coin_change_with_config, min_coin_count};
