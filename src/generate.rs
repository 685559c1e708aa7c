//! Entry points composing tree building, extension and relabeling.
//!
//! Every builder validates its parameters before drawing a single random
//! number, so a failed call leaves the source untouched.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rand::Rng;
use tracing::instrument;

use crate::extend::{extend, EdgePolicy, SamplingMode};
use crate::relabel::relabel;
use crate::strategy::{validate_tree, TreeStrategy};
use crate::weights::unit_weights;
use crate::{ChainFlowerRandom, Edge, EdgeSequence, GenError, RandomSource, WeightedEdgeSequence};

/// Options for [`build_tree`] and [`build_weighted_tree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct TreeOptions {
    /// Randomly relabel the result.
    pub shuffle: bool,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self { shuffle: true }
    }
}

impl TreeOptions {
    /// Sets whether the result is relabeled.
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }
}

/// Options for [`build_graph`] and [`build_weighted_graph`].
///
/// The default produces a connected simple graph without self-loops, randomly
/// relabeled, with the extender in [`SamplingMode::Auto`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct GraphOptions {
    /// Constraints on the generated edges.
    pub policy: EdgePolicy,
    /// Randomly relabel the result.
    pub shuffle: bool,
    /// How extension edges are sampled.
    pub sampling: SamplingMode,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            policy: EdgePolicy::default(),
            shuffle: true,
            sampling: SamplingMode::default(),
        }
    }
}

impl GraphOptions {
    /// Allows repeated unordered pairs.
    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.policy.repeat = repeat;
        self
    }

    /// Allows self-loops.
    pub fn with_self_loop(mut self, self_loop: bool) -> Self {
        self.policy.self_loop = self_loop;
        self
    }

    /// Requires a spanning tree.
    pub fn with_connected(mut self, connected: bool) -> Self {
        self.policy.connected = connected;
        self
    }

    /// Sets whether the result is relabeled.
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Sets the sampling mode of the extender.
    pub fn with_sampling(mut self, sampling: SamplingMode) -> Self {
        self.sampling = sampling;
        self
    }
}

/// Generates a random spanning tree on the vertices `1..=n`.
///
/// The tree mixes a chain, a flower and random-parent attachments as
/// described by [`ChainFlowerRandom`]. Without shuffling, edges come in
/// construction order with the parent as `start`.
///
/// # Example
///
/// ```
/// # use randgraph::{build_tree, Edge, RandomSource, TreeOptions};
/// let mut source = RandomSource::seed_from_u64(0);
/// let options = TreeOptions::default().with_shuffle(false);
/// let star = build_tree(4, 0.0, 1.0, options, &mut source).unwrap();
/// assert_eq!(star, [Edge::new(1, 2), Edge::new(1, 3), Edge::new(1, 4)]);
/// ```
#[instrument(level = "debug", err(level = "debug"), skip(source))]
pub fn build_tree<R: Rng>(
    n: usize,
    chain_p: f64,
    flower_p: f64,
    options: TreeOptions,
    source: &mut RandomSource<R>,
) -> Result<EdgeSequence, GenError> {
    build_weighted_tree(n, unit_weights::<R>(), chain_p, flower_p, options, source)
}

/// Generates a random spanning tree whose edges carry weights.
///
/// `weights` is called once per edge in construction order.
#[instrument(level = "debug", err(level = "debug"), skip(weights, source))]
pub fn build_weighted_tree<R, W>(
    n: usize,
    mut weights: impl FnMut(&mut RandomSource<R>) -> Result<W, GenError>,
    chain_p: f64,
    flower_p: f64,
    options: TreeOptions,
    source: &mut RandomSource<R>,
) -> Result<WeightedEdgeSequence<W>, GenError>
where
    R: Rng,
{
    let shape = ChainFlowerRandom::new(chain_p, flower_p)?;
    let tree = shape.build(n, source)?;
    let mut edges = attach_weights(tree, &mut weights, source)?;
    if options.shuffle {
        relabel(n, &mut edges, source)?;
    }
    Ok(edges)
}

/// Generates a random graph with `n` vertices and `m` edges.
///
/// When the policy asks for a connected graph, the first `n - 1` edges
/// (before shuffling) are a spanning tree produced by `tree`. The remaining
/// edges are added by the [extender](crate::extend).
///
/// Fails with [`GenError::InfeasibleEdgeCount`] if `m` edges cannot satisfy
/// the policy, and with [`GenError::MalformedTree`],
/// [`GenError::CyclicTree`] or [`GenError::VertexOutOfRange`] if `tree` does
/// not return a spanning tree.
///
/// # Example
///
/// ```
/// # use randgraph::{build_graph, ChainFlowerRandom, GenError, GraphOptions, RandomSource};
/// let mut source = RandomSource::seed_from_u64(0);
/// let options = GraphOptions::default();
/// let res = build_graph(3, 10, ChainFlowerRandom::default(), options, &mut source);
/// assert!(matches!(res, Err(GenError::InfeasibleEdgeCount { .. })));
/// ```
#[instrument(level = "debug", err(level = "debug"), skip(tree, source))]
pub fn build_graph<R: Rng>(
    n: usize,
    m: usize,
    tree: impl TreeStrategy<R>,
    options: GraphOptions,
    source: &mut RandomSource<R>,
) -> Result<EdgeSequence, GenError> {
    build_weighted_graph(n, m, unit_weights::<R>(), tree, options, source)
}

/// Generates a random graph whose edges carry weights.
///
/// Weights are drawn for the tree edges in construction order, then for each
/// extension edge as it is accepted.
#[instrument(level = "debug", err(level = "debug"), skip(weights, tree, source))]
pub fn build_weighted_graph<R, W>(
    n: usize,
    m: usize,
    mut weights: impl FnMut(&mut RandomSource<R>) -> Result<W, GenError>,
    mut tree: impl TreeStrategy<R>,
    options: GraphOptions,
    source: &mut RandomSource<R>,
) -> Result<WeightedEdgeSequence<W>, GenError>
where
    R: Rng,
{
    if n == 0 {
        return Err(GenError::NoVertices);
    }
    let policy = options.policy;
    policy.check_feasible(n, m)?;

    let mut edges = if policy.connected {
        let base = tree.generate(n, source)?;
        validate_tree(n, &base)?;
        attach_weights(base, &mut weights, source)?
    } else {
        Vec::new()
    };
    extend(
        n,
        m,
        &mut edges,
        &policy,
        options.sampling,
        &mut weights,
        source,
    )?;

    if options.shuffle {
        relabel(n, &mut edges, source)?;
    }
    Ok(edges)
}

fn attach_weights<R, W>(
    edges: Vec<Edge>,
    weights: &mut impl FnMut(&mut RandomSource<R>) -> Result<W, GenError>,
    source: &mut RandomSource<R>,
) -> Result<Vec<Edge<W>>, GenError>
where
    R: Rng,
{
    edges
        .into_iter()
        .map(|e| weights(source).map(|w| e.with_weight(w)))
        .collect()
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::*;
    use crate::proptest::{gen_graph_params, gen_tree_shape};
    use crate::tree::test::assert_spanning_tree;
    use crate::weights::uniform_real_weights;
    use crate::{CallerSupplied, Prufer};
    use itertools::Itertools;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn source() -> RandomSource {
        RandomSource::seed_from_u64(0x5eed)
    }

    fn unshuffled() -> GraphOptions {
        GraphOptions::default().with_shuffle(false)
    }

    fn assert_policy<W>(n: usize, edges: &[Edge<W>], options: &GraphOptions) {
        let policy = options.policy;
        assert!(edges
            .iter()
            .all(|e| (1..=n).contains(&e.start) && (1..=n).contains(&e.end)));
        if !policy.self_loop {
            assert!(edges.iter().all(|e| !e.is_self_loop()));
        }
        if !policy.repeat {
            assert_eq!(edges.iter().map(Edge::key).unique().count(), edges.len());
        }
    }

    #[rstest]
    fn chain_tree(mut source: RandomSource) {
        let options = TreeOptions::default().with_shuffle(false);
        let tree = build_tree(4, 1.0, 0.0, options, &mut source).unwrap();
        assert_eq!(tree, [Edge::new(1, 2), Edge::new(2, 3), Edge::new(3, 4)]);
    }

    #[rstest]
    fn flower_tree(mut source: RandomSource) {
        let options = TreeOptions::default().with_shuffle(false);
        let tree = build_tree(7, 0.0, 1.0, options, &mut source).unwrap();
        assert!(tree.iter().all(|e| e.start == 1));
        assert_eq!(tree.iter().map(|e| e.end).collect_vec(), [2, 3, 4, 5, 6, 7]);
    }

    #[rstest]
    fn shuffled_tree_still_spans(mut source: RandomSource) {
        for n in [1, 2, 5, 64] {
            let tree = build_tree(n, 0.25, 0.25, TreeOptions::default(), &mut source).unwrap();
            assert_spanning_tree(n, &tree);
        }
    }

    #[rstest]
    #[case(0.5, 0.6)]
    #[case(-1.0, 0.0)]
    fn tree_parameters_checked(
        mut source: RandomSource,
        #[case] chain_p: f64,
        #[case] flower_p: f64,
    ) {
        let res = build_tree(5, chain_p, flower_p, TreeOptions::default(), &mut source);
        assert_eq!(res, Err(GenError::InvalidParameter { chain_p, flower_p }));
    }

    #[rstest]
    fn weighted_tree(mut source: RandomSource) {
        let mut order = 0u32;
        let tree = build_weighted_tree(
            6,
            |_: &mut RandomSource| {
                order += 1;
                Ok(order)
            },
            1.0,
            0.0,
            TreeOptions::default().with_shuffle(false),
            &mut source,
        )
        .unwrap();
        let expected = (2..=6)
            .map(|v| Edge::weighted(v - 1, v, v as u32 - 1))
            .collect_vec();
        assert_eq!(tree, expected);
    }

    #[rstest]
    fn tree_sized_graph(mut source: RandomSource) {
        let edges =
            build_graph(5, 4, ChainFlowerRandom::chain(), unshuffled(), &mut source).unwrap();
        assert_eq!(
            edges,
            [
                Edge::new(1, 2),
                Edge::new(2, 3),
                Edge::new(3, 4),
                Edge::new(4, 5)
            ]
        );
    }

    #[rstest]
    fn too_many_simple_edges(mut source: RandomSource) {
        let res = build_graph(
            3,
            10,
            ChainFlowerRandom::default(),
            GraphOptions::default(),
            &mut source,
        );
        assert_eq!(
            res,
            Err(GenError::InfeasibleEdgeCount {
                n: 3,
                m: 10,
                lower: 2,
                upper: 3
            })
        );
    }

    #[rstest]
    #[case(6, 4, false)]
    #[case(6, 16, false)]
    #[case(6, 22, true)]
    #[case(1, 2, true)]
    fn connected_bounds(
        mut source: RandomSource,
        #[case] n: usize,
        #[case] m: usize,
        #[case] self_loop: bool,
    ) {
        let options = GraphOptions::default().with_self_loop(self_loop);
        let res = build_graph(n, m, Prufer, options, &mut source);
        assert!(matches!(res, Err(GenError::InfeasibleEdgeCount { .. })));
    }

    #[rstest]
    fn no_vertices(mut source: RandomSource) {
        let res = build_graph(0, 0, Prufer, GraphOptions::default(), &mut source);
        assert_eq!(res, Err(GenError::NoVertices));
    }

    #[rstest]
    fn single_vertex_without_loops(mut source: RandomSource) {
        let options = GraphOptions::default().with_repeat(true).with_connected(false);
        assert!(build_graph(1, 0, Prufer, options, &mut source).unwrap().is_empty());
        assert!(build_graph(1, 1, Prufer, options, &mut source).is_err());
    }

    #[rstest]
    fn connected_prefix_is_tree(mut source: RandomSource) {
        let n = 20;
        let edges =
            build_graph(n, 45, ChainFlowerRandom::default(), unshuffled(), &mut source).unwrap();
        assert_spanning_tree(n, &edges[..n - 1]);
        assert_policy(n, &edges, &unshuffled());
    }

    #[rstest]
    fn unconnected_graph(mut source: RandomSource) {
        let options = GraphOptions::default().with_connected(false);
        let edges = build_graph(10, 3, Prufer, options, &mut source).unwrap();
        assert_eq!(edges.len(), 3);
        assert_policy(10, &edges, &options);
    }

    #[rstest]
    fn complete_graph(mut source: RandomSource) {
        let n = 9;
        let edges = build_graph(n, 36, Prufer, GraphOptions::default(), &mut source).unwrap();
        let pairs: HashSet<_> = edges.iter().map(Edge::key).collect();
        let expected: HashSet<_> = (1..=n).tuple_combinations::<(_, _)>().collect();
        assert_eq!(pairs, expected);
    }

    #[rstest]
    fn multigraph_with_loops(mut source: RandomSource) {
        let options = GraphOptions::default().with_repeat(true).with_self_loop(true);
        let edges = build_graph(3, 50, Prufer, options, &mut source).unwrap();
        assert_eq!(edges.len(), 50);
        assert!(edges.iter().map(Edge::key).unique().count() <= 6);
    }

    #[rstest]
    fn malformed_strategies(mut source: RandomSource) {
        let short = CallerSupplied(
            |_: usize, _: &mut RandomSource| -> Result<EdgeSequence, GenError> {
                Ok(vec![Edge::new(1, 2)])
            },
        );
        assert_eq!(
            build_graph(4, 5, short, GraphOptions::default(), &mut source),
            Err(GenError::MalformedTree {
                n: 4,
                expected: 3,
                found: 1
            })
        );

        let cyclic = CallerSupplied(
            |_: usize, _: &mut RandomSource| -> Result<EdgeSequence, GenError> {
                Ok(vec![Edge::new(1, 2), Edge::new(2, 3), Edge::new(3, 1)])
            },
        );
        assert_eq!(
            build_graph(4, 5, cyclic, GraphOptions::default(), &mut source),
            Err(GenError::CyclicTree { start: 3, end: 1 })
        );
    }

    #[rstest]
    fn strategy_reused_by_ref(mut source: RandomSource) {
        let mut calls = 0;
        let mut path = CallerSupplied(
            |n: usize, _: &mut RandomSource| -> Result<EdgeSequence, GenError> {
                calls += 1;
                Ok((2..=n).map(|v| Edge::new(v - 1, v)).collect())
            },
        );
        for _ in 0..3 {
            build_graph(6, 8, &mut path, GraphOptions::default(), &mut source).unwrap();
        }
        drop(path);
        assert_eq!(calls, 3);
    }

    #[rstest]
    fn weighted_graph(mut source: RandomSource) {
        let edges = build_weighted_graph(
            15,
            40,
            uniform_real_weights(-1.0f64, 1.0),
            ChainFlowerRandom::new(0.5, 0.2).unwrap(),
            GraphOptions::default(),
            &mut source,
        )
        .unwrap();
        assert_eq!(edges.len(), 40);
        assert!(edges.iter().all(|e| (-1.0..=1.0).contains(&e.weight)));
        assert_policy(15, &edges, &GraphOptions::default());
    }

    #[test]
    fn seeded_runs_repeat() {
        let run = |seed| {
            let mut source = RandomSource::seed_from_u64(seed);
            build_graph(30, 60, Prufer, GraphOptions::default(), &mut source).unwrap()
        };
        assert_eq!(run(17), run(17));
    }

    #[rstest]
    fn failures_do_not_advance_source(mut source: RandomSource) {
        let mut pristine = source.clone();
        assert!(build_graph(3, 10, Prufer, GraphOptions::default(), &mut source).is_err());
        assert_eq!(
            source.sample_int(0u64, u64::MAX),
            pristine.sample_int(0u64, u64::MAX)
        );
    }

    proptest! {
        #[test]
        fn trees_span(
            (n, shape, shuffle) in (1usize..60, gen_tree_shape(), any::<bool>()),
            seed in any::<u64>(),
        ) {
            let mut source = RandomSource::seed_from_u64(seed);
            let options = TreeOptions::default().with_shuffle(shuffle);
            let tree = build_tree(n, shape.chain_p(), shape.flower_p(), options, &mut source)
                .unwrap();
            assert_spanning_tree(n, &tree);
        }

        #[test]
        fn graphs_respect_policy(params in gen_graph_params(12, 30), seed in any::<u64>()) {
            let mut source = RandomSource::seed_from_u64(seed);
            let edges = build_graph(params.n, params.m, Prufer, params.options, &mut source)
                .unwrap();
            prop_assert_eq!(edges.len(), params.m);
            assert_policy(params.n, &edges, &params.options);
            if params.options.policy.connected && !params.options.shuffle {
                assert_spanning_tree(params.n, &edges[..params.n - 1]);
            }
        }
    }
}
