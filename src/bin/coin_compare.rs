use std::process::ExitCode;
use std::time::{Duration, Instant};

use coinchange::{greedy_change, min_coin_change, DenominationSet};

const DEFAULT_AMOUNTS: [u64; 6] = [10, 55, 113, 207, 505, 1001];
const NUM_RUNS: u32 = 1000;

fn time_runs<T>(mut f: impl FnMut() -> T) -> Duration {
    let start = Instant::now();
    for _ in 0..NUM_RUNS {
        std::hint::black_box(f());
    }
    start.elapsed()
}

fn main() -> ExitCode {
    let mut amounts = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.parse::<u64>() {
            Ok(amount) => amounts.push(amount),
            Err(e) => {
                eprintln!("invalid amount {arg:?}: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
    if amounts.is_empty() {
        amounts.extend(DEFAULT_AMOUNTS);
    }

    let set = DenominationSet::standard();

    println!("\nPerformance Comparison ({NUM_RUNS} runs):");
    println!("{}", "-".repeat(43));
    println!(" Amount | Greedy Time (s)| DP Time (s)");
    println!("{}", "-".repeat(43));
    for &amount in &amounts {
        let greedy_time = time_runs(|| greedy_change(amount, &set));
        let dp_time = time_runs(|| min_coin_change(amount, &set));
        println!(
            "{:>6} | {:>15.8} | {:>10.8}",
            amount,
            greedy_time.as_secs_f64(),
            dp_time.as_secs_f64()
        );
    }
    println!("{}", "-".repeat(43));

    let sample = amounts[amounts.len() - 1];
    println!("\nCoin Counts for Amount {sample}:");
    println!("  Greedy Result: {}", greedy_change(sample, &set).coins);
    match min_coin_change(sample, &set) {
        Ok(coins) => println!("  DP Result:     {coins}"),
        Err(e) => {
            eprintln!("  DP failed: {e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
