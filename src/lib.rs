#![warn(missing_docs)]
//! `randgraph` generates random graphs and trees under structural constraints,
//! for use as test inputs.
//!
//! Vertices are the integers `1..=n`. Every generator returns a plain
//! sequence of [`Edge`]s. A generated graph is built in three stages:
//!
//! 1. a spanning tree, produced by a pluggable [`TreeStrategy`] such as the
//!    chain/flower/random-parent mixture [`ChainFlowerRandom`] or the
//!    uniform [`Prufer`] strategy,
//! 2. the [extender](extend) which adds edges up to the requested count while
//!    honouring the multi-edge and self-loop policy,
//! 3. the [relabeler](relabel) which randomly permutes vertex labels, edge
//!    orientation and edge order.
//!
//! All randomness flows through a caller-owned [`RandomSource`], so a fixed
//! seed always reproduces the same output.
//!
//! # Example
//!
//! ```
//! use randgraph::{build_graph, ChainFlowerRandom, GraphOptions, RandomSource};
//!
//! let mut source = RandomSource::seed_from_u64(2024);
//! let edges = build_graph(
//!     6,
//!     9,
//!     ChainFlowerRandom::default(),
//!     GraphOptions::default(),
//!     &mut source,
//! )
//! .unwrap();
//!
//! assert_eq!(edges.len(), 9);
//! assert!(edges.iter().all(|e| !e.is_self_loop()));
//! ```
//!
//! # Features
//!
//! - `serde` derives serialization for edges, options and tree shapes.
//! - `petgraph` enables conversion of edge sequences into petgraph graphs.
//! - `proptest` exposes parameter strategies for property testing.
//!
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod error;
pub mod extend;
pub mod generate;
pub mod random;
pub mod relabel;
pub mod strategy;
pub mod tree;
pub mod weights;

#[cfg(feature = "petgraph")]
pub mod convert;

#[cfg(any(test, feature = "proptest"))]
pub mod proptest;

#[doc(inline)]
pub use crate::error::GenError;
#[doc(inline)]
pub use crate::extend::{EdgePolicy, SamplingMode};
#[doc(inline)]
pub use crate::generate::{
    build_graph, build_tree, build_weighted_graph, build_weighted_tree, GraphOptions, TreeOptions,
};
#[doc(inline)]
pub use crate::random::RandomSource;
#[doc(inline)]
pub use crate::relabel::Permutation;
#[doc(inline)]
pub use crate::strategy::{CallerSupplied, Prufer, TreeStrategy};
#[doc(inline)]
pub use crate::tree::ChainFlowerRandom;

/// An unweighted edge sequence.
pub type EdgeSequence = Vec<Edge>;

/// A weighted edge sequence.
pub type WeightedEdgeSequence<W> = Vec<Edge<W>>;

/// An undirected edge between two vertices, carrying a weight.
///
/// Unweighted edges use the unit weight `()`. The order of `start` and `end`
/// carries no meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Edge<W = ()> {
    /// First endpoint.
    pub start: usize,
    /// Second endpoint.
    pub end: usize,
    /// Weight attached to the edge.
    pub weight: W,
}

impl Edge {
    /// Creates an unweighted edge.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            weight: (),
        }
    }
}

impl<W> Edge<W> {
    /// Creates a weighted edge.
    #[inline]
    pub const fn weighted(start: usize, end: usize, weight: W) -> Self {
        Self { start, end, weight }
    }

    /// The endpoints as an unordered pair, smaller vertex first.
    #[inline]
    pub fn key(&self) -> (usize, usize) {
        unordered(self.start, self.end)
    }

    /// Returns `true` if both endpoints are the same vertex.
    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.start == self.end
    }

    /// Swaps the endpoints.
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            weight: self.weight,
        }
    }

    /// Replaces the weight.
    #[inline]
    pub fn with_weight<V>(self, weight: V) -> Edge<V> {
        Edge::weighted(self.start, self.end, weight)
    }

    /// Maps the weight through `f`.
    #[inline]
    pub fn map_weight<V>(self, f: impl FnOnce(W) -> V) -> Edge<V> {
        Edge::weighted(self.start, self.end, f(self.weight))
    }

    /// Checks that both endpoints lie in `[1, n]`.
    pub(crate) fn check_range(&self, n: usize) -> Result<(), GenError> {
        for vertex in [self.start, self.end] {
            if vertex == 0 || vertex > n {
                return Err(GenError::VertexOutOfRange { vertex, n });
            }
        }
        Ok(())
    }
}

impl From<(usize, usize)> for Edge {
    fn from((start, end): (usize, usize)) -> Self {
        Edge::new(start, end)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.start, self.end)
    }
}

/// An unordered vertex pair, smaller vertex first.
#[inline]
pub(crate) fn unordered(u: usize, v: usize) -> (usize, usize) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}
