use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use exphys::running::{purdy, riegel};
use exphys::Catalogue;

/// Cost of direct calls against catalogue dispatch, and of batch evaluation

fn bench_direct_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("Direct Calls");

    group.bench_function("riegel_predict_time", |b| {
        b.iter(|| riegel::predict_time(black_box(1200.0), black_box(5000.0), black_box(10000.0)))
    });

    group.bench_function("purdy_points", |b| {
        b.iter(|| purdy::purdy_points(black_box(1609.34), black_box(240.0)))
    });

    group.finish();
}

fn bench_catalogue_dispatch(c: &mut Criterion) {
    let catalogue = Catalogue::global();
    let mut group = c.benchmark_group("Catalogue Dispatch");

    group.bench_function("qualified_id", |b| {
        b.iter(|| catalogue.evaluate(black_box("riegel.predict_time"), black_box(&[1200.0, 5000.0, 10000.0])))
    });

    group.bench_function("bare_name", |b| {
        b.iter(|| catalogue.evaluate(black_box("mosteller"), black_box(&[175.0, 70.0])))
    });

    group.finish();
}

fn bench_evaluate_many(c: &mut Criterion) {
    let catalogue = Catalogue::global();
    let mut group = c.benchmark_group("Batch Evaluation");

    for &size in &[100, 1_000, 10_000] {
        let rows: Vec<Vec<f64>> = (0..size)
            .map(|i| vec![400.0 + i as f64, 60.0 + (i % 600) as f64])
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("purdy_points", size), &rows, |b, rows| {
            b.iter(|| catalogue.evaluate_many("purdy.points", rows))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_direct_calls, bench_catalogue_dispatch, bench_evaluate_many);
criterion_main!(benches);
