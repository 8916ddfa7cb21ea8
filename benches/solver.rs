use criterion::{black_box, criterion_group, criterion_main, Criterion};
use queens::solve;

fn solve_small(c: &mut Criterion) {
    c.bench_function("solve 8 queens", |b| b.iter(|| solve(black_box(8))));
}

fn solve_medium(c: &mut Criterion) {
    c.bench_function("solve 12 queens", |b| b.iter(|| solve(black_box(12))));
}

fn solve_not_solvable(c: &mut Criterion) {
    c.bench_function("solve not-solvable", |b| b.iter(|| solve(black_box(3))));
}

criterion_group!(benches, solve_small, solve_medium, solve_not_solvable);
criterion_main!(benches);
