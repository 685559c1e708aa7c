//! Error type shared by all generators.

use thiserror::Error;

/// Errors raised while generating a random structure.
///
/// Every error is a precondition violation detected before the generator
/// returns; no partial output is ever produced alongside one.
#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum GenError {
    /// The chain or flower fraction is outside `[0, 1]`, or their sum exceeds one.
    #[error("chain fraction {chain_p} and flower fraction {flower_p} must lie in [0, 1] and sum to at most 1")]
    InvalidParameter {
        /// Requested chain fraction.
        chain_p: f64,
        /// Requested flower fraction.
        flower_p: f64,
    },
    /// The requested edge count cannot be realised under the edge policy.
    #[error("cannot place {m} edges on {n} vertices, the feasible range is [{lower}, {upper}]")]
    InfeasibleEdgeCount {
        /// Number of vertices.
        n: usize,
        /// Requested number of edges.
        m: usize,
        /// Smallest admissible edge count.
        lower: usize,
        /// Largest admissible edge count.
        upper: usize,
    },
    /// A sampling range was empty or not representable.
    #[error("invalid sampling range [{low}, {high}]")]
    InvalidRange {
        /// Lower bound, as passed by the caller.
        low: String,
        /// Upper bound, as passed by the caller.
        high: String,
    },
    /// A structure was requested on zero vertices.
    #[error("a graph needs at least one vertex")]
    NoVertices,
    /// A tree strategy returned the wrong number of edges.
    #[error("a spanning tree on {n} vertices has {expected} edges, the strategy returned {found}")]
    MalformedTree {
        /// Number of vertices.
        n: usize,
        /// Expected edge count, `n - 1`.
        expected: usize,
        /// Edge count actually returned.
        found: usize,
    },
    /// A tree strategy returned an edge joining two already connected vertices.
    #[error("tree edge ({start}, {end}) closes a cycle")]
    CyclicTree {
        /// First endpoint of the offending edge.
        start: usize,
        /// Second endpoint of the offending edge.
        end: usize,
    },
    /// An edge endpoint lies outside `[1, n]`.
    #[error("vertex {vertex} is outside the range [1, {n}]")]
    VertexOutOfRange {
        /// The offending vertex.
        vertex: usize,
        /// Number of vertices.
        n: usize,
    },
    /// The images passed to [`Permutation::from_images`] are not a bijection.
    ///
    /// [`Permutation::from_images`]: crate::relabel::Permutation::from_images
    #[error("the given images are not a permutation of [1, n]")]
    NotAPermutation,
}

impl GenError {
    /// Builds an [`GenError::InvalidRange`] from any printable bounds.
    pub(crate) fn invalid_range(low: impl std::fmt::Display, high: impl std::fmt::Display) -> Self {
        GenError::InvalidRange {
            low: low.to_string(),
            high: high.to_string(),
        }
    }
}
