use criterion::BatchSize;
use criterion::Criterion;
use criterion::{criterion_group, criterion_main};
use mcpi::estimator::Estimator;
use mcpi::geom::Square;

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("Estimator step");
    for cap in [100, 1337, 10_000] {
        group.bench_function(format!("run to cap = {}", cap), |b| {
            b.iter_batched_ref(
                || {
                    (
                        Estimator::new(Square::default(), cap),
                        rand::thread_rng(),
                    )
                },
                |(estimator, rng)| estimator.run(rng),
                BatchSize::SmallInput,
            )
        });
    }
}

fn bench_draw(c: &mut Criterion) {
    let square = Square::default();
    c.bench_function("Square draw", |b| {
        b.iter_batched_ref(
            rand::thread_rng,
            |rng| {
                let _point = square.draw(rng);
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(estimator_benches, bench_step, bench_draw,);
criterion_main!(estimator_benches);
