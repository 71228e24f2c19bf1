use coinchange::{greedy_change, min_coin_change, DenominationSet};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const AMOUNTS: [u64; 6] = [10, 55, 113, 207, 505, 1001];

fn bench_coin_change(c: &mut Criterion) {
    let set = DenominationSet::standard();
    let mut group = c.benchmark_group("coin_change");

    for amount in AMOUNTS {
        group.bench_with_input(BenchmarkId::new("greedy", amount), &amount, |b, &amount| {
            b.iter(|| greedy_change(black_box(amount), &set))
        });
        group.bench_with_input(BenchmarkId::new("dp", amount), &amount, |b, &amount| {
            b.iter(|| min_coin_change(black_box(amount), &set))
        });
    }

    group.finish();
}

fn bench_large_amounts(c: &mut Criterion) {
    let set = DenominationSet::standard();
    let mut group = c.benchmark_group("coin_change_large");
    group.sample_size(20);

    for amount in [10_000u64, 100_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::new("dp", amount), &amount, |b, &amount| {
            b.iter(|| min_coin_change(black_box(amount), &set))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_coin_change, bench_large_amounts);
criterion_main!(benches);
