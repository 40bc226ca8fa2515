//! Criterion view of the same operations at a size small enough to
//! iterate on. The wall-clock binary is the number that gets reported;
//! this is for spotting regressions between ndarray versions.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use matbench::config::RegressionShape;
use matbench::fixture::{OperandMatrices, RegressionFixture, seeded_rng};
use matbench::ops::{add, divide, dot, logistic_cost, sigmoid};

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");

    for size in [64, 256] {
        let operands = OperandMatrices::random(size, &mut seeded_rng(Some(1))).unwrap();
        let (a, b) = (&operands.a, &operands.b);

        group.bench_with_input(BenchmarkId::new("dot", size), &size, |bench, _| {
            bench.iter(|| black_box(dot(a, b).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("divide", size), &size, |bench, _| {
            bench.iter(|| black_box(divide(a, b).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("add", size), &size, |bench, _| {
            bench.iter(|| black_box(add(a, b).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("sigmoid", size), &size, |bench, _| {
            bench.iter(|| black_box(sigmoid(a)))
        });
    }

    group.finish();
}

fn bench_logistic_cost(c: &mut Criterion) {
    let shape = RegressionShape {
        samples: 500,
        features: 41,
        lambda: 1.0,
    };
    let fixture = RegressionFixture::generate(&shape, &mut seeded_rng(Some(1))).unwrap();

    c.bench_function("logistic_cost 500x41", |bench| {
        bench.iter(|| {
            black_box(
                logistic_cost(&fixture.theta, &fixture.x, &fixture.y, fixture.lambda).unwrap(),
            )
        })
    });
}

criterion_group!(benches, bench_primitives, bench_logistic_cost);
criterion_main!(benches);
