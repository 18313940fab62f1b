use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dfa_suffix::prelude::*;
use dfa_suffix::random::{generate_random_dfa_seeded, generate_random_words};

fn bench_suffix_acceptance(c: &mut Criterion) {
    let mut group = c.benchmark_group("accepts_as_suffix");
    for size in [16, 128, 1024] {
        let dfa = generate_random_dfa_seeded(size as u64, 3, size, 0.8);
        let words = generate_random_words(&CharAlphabet::of_size(3), 1, 12, 32);
        group.bench_with_input(BenchmarkId::from_parameter(size), &dfa, |b, dfa| {
            b.iter(|| {
                words
                    .iter()
                    .filter(|w| accepts_as_suffix(black_box(w), dfa))
                    .count()
            });
        });
    }
    group.finish();
}

fn bench_reachability(c: &mut Criterion) {
    let mut group = c.benchmark_group("can_reach_final");
    for size in [16, 128, 1024] {
        let dfa = generate_random_dfa_seeded(size as u64, 2, size, 0.5);
        group.bench_with_input(BenchmarkId::from_parameter(size), &dfa, |b, dfa| {
            b.iter(|| {
                (0..dfa.state_count())
                    .filter(|&q| can_reach_final(dfa, black_box(q)))
                    .count()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_suffix_acceptance, bench_reachability);
criterion_main!(benches);
