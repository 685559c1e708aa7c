//! Strategies producing valid generator parameters for property tests.
use crate::{ChainFlowerRandom, EdgePolicy, GraphOptions, SamplingMode};
use proptest::prelude::*;

/// Parameters for a feasible [`build_graph`](crate::build_graph) call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphParams {
    /// Number of vertices, at least one.
    pub n: usize,
    /// Number of edges, within the feasible range for `n` and the policy.
    pub m: usize,
    /// Options of the call.
    pub options: GraphOptions,
}

/// A random chain/flower mixture.
pub fn gen_tree_shape() -> impl Strategy<Value = ChainFlowerRandom> {
    (0.0..=1.0f64)
        .prop_flat_map(|chain_p| (Just(chain_p), 0.0..=(1.0 - chain_p)))
        .prop_filter_map("fractions sum past one", |(chain_p, flower_p)| {
            ChainFlowerRandom::new(chain_p, flower_p).ok()
        })
}

/// A random edge policy.
pub fn gen_policy() -> impl Strategy<Value = EdgePolicy> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(repeat, self_loop, connected)| {
        EdgePolicy {
            repeat,
            self_loop,
            connected,
        }
    })
}

/// A random sampling mode.
pub fn gen_sampling() -> impl Strategy<Value = SamplingMode> {
    prop_oneof![
        Just(SamplingMode::Auto),
        Just(SamplingMode::Rejection),
        Just(SamplingMode::Complement),
    ]
}

prop_compose! {
    /// Random feasible graph parameters.
    ///
    ///  - `max_n` is the maximum number of vertices
    ///  - `max_extra` bounds how many edges exceed the policy's lower bound
    pub fn gen_graph_params(max_n: usize, max_extra: usize)(
        n in 1..=max_n.max(1),
        policy in gen_policy(),
    )(
        m in {
            let (lower, upper) = policy.edge_bounds(n);
            lower..=upper.min(lower.saturating_add(max_extra))
        },
        n in Just(n),
        policy in Just(policy),
        shuffle in any::<bool>(),
        sampling in gen_sampling(),
    ) -> GraphParams {
        GraphParams {
            n,
            m,
            options: GraphOptions {
                policy,
                shuffle,
                sampling,
            },
        }
    }
}
