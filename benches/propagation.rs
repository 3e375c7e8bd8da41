//! Benchmarks for the forward and backward pass

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sigmanet::backend::ndarray::NdArray;
use sigmanet::Network;

fn benchmark_train_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("train_step");

    for hidden in [vec![], vec![200], vec![200, 100, 50]].iter() {
        let mut network = Network::<NdArray>::with_seed(784, hidden.clone(), 10, 0.1, 42).unwrap();
        let input = vec![0.5f32; 784];
        let mut target = vec![0.01f32; 10];
        target[3] = 0.99;

        group.bench_with_input(
            BenchmarkId::new("hidden_layers", hidden.len()),
            hidden,
            |b, _| {
                b.iter(|| network.train(black_box(&input), black_box(&target)).unwrap());
            },
        );
    }

    group.finish();
}

fn benchmark_query(c: &mut Criterion) {
    let network = Network::<NdArray>::with_seed(784, vec![200], 10, 0.1, 42).unwrap();
    let input = vec![0.5f32; 784];

    c.bench_function("query_784_200_10", |b| {
        b.iter(|| network.query(black_box(&input)).unwrap())
    });
}

criterion_group!(benches, benchmark_train_step, benchmark_query);
criterion_main!(benches);
