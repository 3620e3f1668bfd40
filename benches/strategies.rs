use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use eight_puzzle_bench::engine::State;
use eight_puzzle_bench::frontier::MinFrontier;
use eight_puzzle_bench::heuristics::{manhattan, misplaced_tiles};
use eight_puzzle_bench::solver::{SearchConfig, Strategy};

// ---------------------------------------------------------------------------
// Strategies on seeded scrambles of increasing length
// ---------------------------------------------------------------------------

fn bench_strategies(c: &mut Criterion) {
    let config = SearchConfig::default();
    for strategy in Strategy::ALL {
        let mut group = c.benchmark_group(format!("search_{}", strategy.label()));
        for &scramble in &[4usize, 8, 12] {
            let initial = State::scrambled(1, scramble);
            group.bench_with_input(BenchmarkId::from_parameter(scramble), &initial, |b, &s| {
                b.iter(|| black_box(strategy.run(s, &config)));
            });
        }
        group.finish();
    }
}

// ---------------------------------------------------------------------------
// Heuristics
// ---------------------------------------------------------------------------

fn bench_heuristics(c: &mut Criterion) {
    let boards: Vec<State> = (0..64).map(|seed| State::scrambled(seed, 30)).collect();
    c.bench_function("heuristic_manhattan", |b| {
        b.iter(|| boards.iter().map(|s| manhattan(black_box(s))).sum::<u32>())
    });
    c.bench_function("heuristic_misplaced", |b| {
        b.iter(|| boards.iter().map(|s| misplaced_tiles(black_box(s))).sum::<u32>())
    });
}

// ---------------------------------------------------------------------------
// Frontier push/pop
// ---------------------------------------------------------------------------

fn bench_frontier(c: &mut Criterion) {
    let mut group = c.benchmark_group("frontier_push_pop");
    for &size in &[10u64, 100, 1000] {
        let boards: Vec<State> = (0..size).map(|seed| State::scrambled(seed, 25)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &boards, |b, boards| {
            b.iter(|| {
                let mut frontier = MinFrontier::new();
                for s in boards {
                    frontier.push(manhattan(s), *s);
                }
                while let Some(entry) = frontier.pop() {
                    black_box(entry);
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strategies, bench_heuristics, bench_frontier);
criterion_main!(benches);
