//! Benchmarks for BK-tree build and radius search.
//!
//! Corpora are random lowercase words with normally distributed lengths,
//! roughly the shape of a spell-checker dictionary. The linear scan runs
//! as the no-pruning baseline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_distr::Normal;

use bktree::{BkTree, Distance, Levenshtein, LinearScan, Within};

fn random_words(n: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let lengths = Normal::new(8.0f64, 2.5).unwrap();
    (0..n)
        .map(|_| {
            let len = lengths.sample(&mut rng).round().clamp(2.0, 20.0) as usize;
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [1_000, 10_000] {
        let words = random_words(size, 42);

        group.bench_with_input(BenchmarkId::new("bktree", size), &words, |bench, words| {
            bench.iter(|| {
                let tree: BkTree<Levenshtein> =
                    words.iter().map(|w| Levenshtein::new(w.clone())).collect();
                black_box(tree.len())
            })
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    let size = 10_000;
    let words = random_words(size, 42);
    let tree: BkTree<Levenshtein> = words.iter().map(|w| Levenshtein::new(w.clone())).collect();

    let mut rng = StdRng::seed_from_u64(7);
    let queries: Vec<Levenshtein> = (0..64)
        .map(|_| Levenshtein::new(words[rng.gen_range(0..size)].clone()))
        .collect();

    for radius in [0u32, 1, 2, 4] {
        group.bench_with_input(
            BenchmarkId::new("bktree", radius),
            &radius,
            |bench, &radius| {
                let mut next = queries.iter().cycle();
                bench.iter(|| {
                    let query = next.next().unwrap();
                    black_box(tree.within(black_box(query), Distance::new(radius)).len())
                })
            },
        );
    }

    group.finish();
}

fn bench_search_vs_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_vs_scan");

    let size = 10_000;
    let words = random_words(size, 42);
    let tree: BkTree<Levenshtein> = words.iter().map(|w| Levenshtein::new(w.clone())).collect();
    let scan: LinearScan<Levenshtein> =
        words.iter().map(|w| Levenshtein::new(w.clone())).collect();
    let query = Levenshtein::new(words[size / 2].clone());

    group.bench_function("bktree_radius2", |bench| {
        bench.iter(|| black_box(tree.within(black_box(&query), Distance::new(2)).len()))
    });
    group.bench_function("scan_radius2", |bench| {
        bench.iter(|| black_box(scan.within(black_box(&query), Distance::new(2)).len()))
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_search, bench_search_vs_scan);
criterion_main!(benches);
