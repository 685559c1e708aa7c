use std::hint::black_box;

use criterion::{criterion_group, AxisScale, BenchmarkId, Criterion, PlotConfiguration};
use randgraph::{build_graph, ChainFlowerRandom, GraphOptions, RandomSource, SamplingMode};

// -----------------------------------------------------------------------------
// Benchmark functions
// -----------------------------------------------------------------------------

/// A connected simple graph on `size` vertices using `density` of all pairs.
fn simple_graph(size: usize, density: f64, sampling: SamplingMode) -> impl FnMut() {
    let mut source = RandomSource::seed_from_u64(size as u64);
    let pairs = size * (size - 1) / 2;
    let m = ((pairs as f64 * density) as usize).max(size - 1);
    let options = GraphOptions::default().with_sampling(sampling);
    move || {
        let edges =
            build_graph(size, m, ChainFlowerRandom::default(), options, &mut source).unwrap();
        black_box(edges);
    }
}

// -----------------------------------------------------------------------------
// Criterion definitions
// -----------------------------------------------------------------------------

fn criterion_sparse(c: &mut Criterion) {
    let mut g = c.benchmark_group("build a sparse graph");
    g.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in [100, 1_000] {
        let mut f = simple_graph(size, 0.01, SamplingMode::Auto);
        g.bench_with_input(BenchmarkId::new("sparse", size), &size, |b, _| {
            b.iter(&mut f)
        });
    }
    g.finish();
}

fn criterion_saturated(c: &mut Criterion) {
    let mut g = c.benchmark_group("build a near-complete graph");

    for size in [50, 200] {
        let mut f = simple_graph(size, 0.95, SamplingMode::Rejection);
        g.bench_with_input(BenchmarkId::new("rejection", size), &size, |b, _| {
            b.iter(&mut f)
        });
        let mut f = simple_graph(size, 0.95, SamplingMode::Complement);
        g.bench_with_input(BenchmarkId::new("complement", size), &size, |b, _| {
            b.iter(&mut f)
        });
    }
    g.finish();
}

criterion_group! {
    name = criterion_group;
    config = Criterion::default();
    targets =
        criterion_sparse,
        criterion_saturated,
}
