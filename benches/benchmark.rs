extern crate criterion;

use self::criterion::*;
use std::collections::HashMap;

use huffwpl::{build_tree, calculate_wpl, generate_codes};

const ALPHABET_SIZES: &[u64] = &[16, 256, 1024, 4096];

/// skewed counts, symbol i occurs i*i+1 times
fn gen_frequencies(num_symbols: u64) -> HashMap<u64, u64> {
    (0..num_symbols)
        .map(|symbol| (symbol, symbol * symbol + 1))
        .collect()
}

fn tree_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_building");
    for num_symbols in ALPHABET_SIZES.iter() {
        group.throughput(Throughput::Elements(*num_symbols));
        group.bench_with_input(
            BenchmarkId::new("build_tree", num_symbols),
            num_symbols,
            |b, n| {
                let frequencies = gen_frequencies(*n);
                b.iter(|| build_tree(&frequencies).unwrap());
            },
        );
    }
    group.finish();
}

fn traversals(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversals");
    for num_symbols in ALPHABET_SIZES.iter() {
        group.throughput(Throughput::Elements(*num_symbols));
        group.bench_with_input(
            BenchmarkId::new("generate_codes", num_symbols),
            num_symbols,
            |b, n| {
                let tree = build_tree(&gen_frequencies(*n)).unwrap();
                b.iter(|| generate_codes(Some(&tree)).unwrap());
            },
        );
        group.bench_with_input(
            BenchmarkId::new("calculate_wpl", num_symbols),
            num_symbols,
            |b, n| {
                let tree = build_tree(&gen_frequencies(*n)).unwrap();
                b.iter(|| calculate_wpl(Some(&tree), 0));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, tree_building, traversals);
criterion_main!(benches);
