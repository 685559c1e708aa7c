use std::hint::black_box;

use criterion::{criterion_group, AxisScale, BenchmarkId, Criterion, PlotConfiguration};
use randgraph::{build_tree, strategy::TreeStrategy, Prufer, RandomSource, TreeOptions};

// -----------------------------------------------------------------------------
// Benchmark functions
// -----------------------------------------------------------------------------

fn mixed_tree(size: usize, shuffle: bool) -> impl FnMut() {
    let mut source = RandomSource::seed_from_u64(size as u64);
    let options = TreeOptions::default().with_shuffle(shuffle);
    move || {
        let tree = build_tree(size, 0.3, 0.3, options, &mut source).unwrap();
        black_box(tree);
    }
}

fn prufer_tree(size: usize) -> impl FnMut() {
    let mut source = RandomSource::seed_from_u64(size as u64);
    move || {
        let tree = Prufer.generate(size, &mut source).unwrap();
        black_box(tree);
    }
}

// -----------------------------------------------------------------------------
// Criterion definitions
// -----------------------------------------------------------------------------

fn criterion_trees(c: &mut Criterion) {
    let mut g = c.benchmark_group("build a spanning tree");
    g.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in [100, 1_000, 10_000] {
        let mut f = mixed_tree(size, false);
        g.bench_with_input(BenchmarkId::new("chain_flower_random", size), &size, |b, _| {
            b.iter(&mut f)
        });
        let mut f = mixed_tree(size, true);
        g.bench_with_input(BenchmarkId::new("chain_flower_random_shuffled", size), &size, |b, _| {
            b.iter(&mut f)
        });
        let mut f = prufer_tree(size);
        g.bench_with_input(BenchmarkId::new("prufer", size), &size, |b, _| {
            b.iter(&mut f)
        });
    }
    g.finish();
}

criterion_group! {
    name = criterion_group;
    config = Criterion::default();
    targets =
        criterion_trees,
}
