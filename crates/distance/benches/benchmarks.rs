use emd_core::*;
use emd_distance::*;
use emd_transport::*;
use rand::Rng;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        computing_emd_simplex,
        computing_emd_linear,
        computing_emd_with_flow,
        computing_emd_samples_auto,
        computing_emd_samples_stone,
}

const BINS: usize = 32;

fn histogram(n: usize) -> Vec<Energy> {
    let ref mut rng = rand::rng();
    (0..n).map(|_| rng.random_range(0.0..1.0)).collect()
}

fn samples(n: usize) -> Vec<Energy> {
    let ref mut rng = rand::rng();
    (0..n).map(|_| rng.random_range(-3.0..3.0)).collect()
}

fn line(n: usize) -> Metric {
    Metric::euclidean(&(0..n).map(|i| i as Energy).collect::<Vec<_>>())
}

fn computing_emd_simplex(c: &mut criterion::Criterion) {
    let ref metric = line(BINS);
    let ref first = histogram(BINS);
    let ref second = histogram(BINS);
    c.bench_function("compute EMD between 32-bin histograms (simplex)", |b| {
        b.iter(|| emd(first, second, metric, Penalty::default(), Backend::Simplex))
    });
}

fn computing_emd_linear(c: &mut criterion::Criterion) {
    let ref metric = line(BINS);
    let ref first = histogram(BINS);
    let ref second = histogram(BINS);
    c.bench_function("compute EMD between 32-bin histograms (linear)", |b| {
        b.iter(|| emd(first, second, metric, Penalty::default(), Backend::Linear))
    });
}

fn computing_emd_with_flow(c: &mut criterion::Criterion) {
    let ref metric = line(BINS);
    let ref first = histogram(BINS);
    let ref second = histogram(BINS);
    c.bench_function("compute EMD and flow between 32-bin histograms", |b| {
        b.iter(|| emd_with_flow(first, second, metric, Penalty::default(), Backend::Simplex))
    });
}

fn computing_emd_samples_auto(c: &mut criterion::Criterion) {
    let ref first = samples(1000);
    let ref second = samples(1000);
    let ref options = Options::default();
    c.bench_function("compute EMD between 1000-sample collections (auto bins)", |b| {
        b.iter(|| emd_samples(first.as_slice(), second.as_slice(), options))
    });
}

fn computing_emd_samples_stone(c: &mut criterion::Criterion) {
    let ref first = samples(200);
    let ref second = samples(200);
    let ref options = Options::default().bins(emd_histogram::Bins::Stone);
    c.bench_function("compute EMD between 200-sample collections (stone bins)", |b| {
        b.iter(|| emd_samples(first.as_slice(), second.as_slice(), options))
    });
}
