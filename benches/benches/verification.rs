//! Benchmarks for folding and batch verification

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ipa_benches::{batch_fixture, fold_fixture};
use ipa_verifier::{BatchConfig, BatchVerifier, FoldingVerifier, RandomChallenges};
use rand::thread_rng;

fn bench_fold_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("fold_verification");
    group.sample_size(10);

    for n in [64, 256, 1024] {
        group.throughput(Throughput::Elements(n as u64));
        let (statement, w) = fold_fixture(n, n as u64);

        group.bench_with_input(BenchmarkId::new("verify", n), &n, |b, _| {
            let mut verifier = FoldingVerifier::new(RandomChallenges::new(thread_rng()));
            b.iter(|| {
                let accepted = verifier.verify(black_box(&statement), &w).unwrap();
                black_box(accepted)
            });
        });
    }

    group.finish();
}

fn bench_batch_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_verification");
    group.sample_size(10);

    for m in [10, 64] {
        group.throughput(Throughput::Elements(m as u64));
        let (statements, w) = batch_fixture(m, 1024, m as u64);

        for (label, config) in [
            ("sequential", BatchConfig::sequential()),
            ("parallel", BatchConfig::default()),
        ] {
            group.bench_with_input(BenchmarkId::new(label, m), &m, |b, _| {
                let mut verifier =
                    BatchVerifier::with_config(config.clone(), RandomChallenges::new(thread_rng()));
                b.iter(|| {
                    let accepted = verifier.verify(black_box(&statements), &w).unwrap();
                    black_box(accepted)
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_fold_verification, bench_batch_verification);
criterion_main!(benches);
