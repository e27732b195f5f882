use criterion::{criterion_group, criterion_main, Criterion};
use labs_core::RngHandle;
use labs_search::{SolveRequest, Solver};

fn bench_solver(c: &mut Criterion) {
    let solver = Solver::default();
    let baseline = SolveRequest::new(20, false, false);
    let seeded = SolveRequest::new(20, false, true);

    c.bench_function("solve_baseline_n20", |b| {
        let mut rng = RngHandle::from_seed(42);
        b.iter(|| solver.run_with_rng(&baseline, &mut rng).unwrap())
    });
    c.bench_function("solve_seeded_n20", |b| {
        let mut rng = RngHandle::from_seed(42);
        b.iter(|| solver.run_with_rng(&seeded, &mut rng).unwrap())
    });
}

criterion_group!(benches, bench_solver);
criterion_main!(benches);
