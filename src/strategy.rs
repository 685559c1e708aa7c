//! Pluggable spanning-tree generators.
//!
//! The graph builders only see the [`TreeStrategy`] trait, so any tree
//! generator can be substituted without touching extension or relabeling.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rand::Rng;

use crate::{ChainFlowerRandom, Edge, GenError, RandomSource};

/// A generator of spanning trees on the vertices `1..=n`.
///
/// Implementations must return exactly `n - 1` edges forming a tree.
/// [`build_graph`](crate::build_graph) rejects anything else.
pub trait TreeStrategy<R: Rng> {
    /// Generates a spanning tree on `n` vertices.
    fn generate(&mut self, n: usize, source: &mut RandomSource<R>) -> Result<Vec<Edge>, GenError>;
}

impl<R: Rng, S: TreeStrategy<R> + ?Sized> TreeStrategy<R> for &mut S {
    #[inline]
    fn generate(&mut self, n: usize, source: &mut RandomSource<R>) -> Result<Vec<Edge>, GenError> {
        (**self).generate(n, source)
    }
}

impl<R: Rng> TreeStrategy<R> for ChainFlowerRandom {
    #[inline]
    fn generate(&mut self, n: usize, source: &mut RandomSource<R>) -> Result<Vec<Edge>, GenError> {
        self.build(n, source)
    }
}

/// A tree strategy given by a closure.
///
/// # Example
///
/// ```
/// # use randgraph::{build_graph, CallerSupplied, Edge, GenError, GraphOptions, RandomSource};
/// // A star centred on the last vertex.
/// let star = CallerSupplied(|n: usize, _: &mut RandomSource| -> Result<Vec<Edge>, GenError> {
///     Ok((1..n).map(|v| Edge::new(v, n)).collect())
/// });
/// let mut source = RandomSource::seed_from_u64(1);
/// let options = GraphOptions::default().with_shuffle(false);
/// let edges = build_graph(4, 3, star, options, &mut source).unwrap();
/// assert_eq!(edges, [Edge::new(1, 4), Edge::new(2, 4), Edge::new(3, 4)]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CallerSupplied<F>(pub F);

impl<R, F> TreeStrategy<R> for CallerSupplied<F>
where
    R: Rng,
    F: FnMut(usize, &mut RandomSource<R>) -> Result<Vec<Edge>, GenError>,
{
    #[inline]
    fn generate(&mut self, n: usize, source: &mut RandomSource<R>) -> Result<Vec<Edge>, GenError> {
        (self.0)(n, source)
    }
}

/// Uniformly random labeled trees, decoded from a random Prüfer sequence.
///
/// Each of the `n^(n-2)` labeled trees on `n` vertices is equally likely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Prufer;

impl Prufer {
    /// Decodes a Prüfer sequence over `[1, n]` into the `n - 1` edges of its
    /// tree, where `n = sequence.len() + 2`.
    ///
    /// Each edge is written `(leaf, neighbour)` and the last edge always ends
    /// at vertex `n`.
    pub fn decode(sequence: &[usize]) -> Result<Vec<Edge>, GenError> {
        let n = sequence.len() + 2;
        let mut degree = vec![1usize; n + 1];
        for &v in sequence {
            if v == 0 || v > n {
                return Err(GenError::VertexOutOfRange { vertex: v, n });
            }
            degree[v] += 1;
        }

        let next_leaf = |degree: &[usize], from: usize| {
            (from..=n).find(|&v| degree[v] == 1).unwrap_or(n)
        };

        let mut edges = Vec::with_capacity(n - 1);
        let mut ptr = next_leaf(&degree, 1);
        let mut leaf = ptr;
        for &v in sequence {
            edges.push(Edge::new(leaf, v));
            degree[v] -= 1;
            if degree[v] == 1 && v < ptr {
                leaf = v;
            } else {
                ptr = next_leaf(&degree, ptr + 1);
                leaf = ptr;
            }
        }
        edges.push(Edge::new(leaf, n));
        Ok(edges)
    }
}

impl<R: Rng> TreeStrategy<R> for Prufer {
    fn generate(&mut self, n: usize, source: &mut RandomSource<R>) -> Result<Vec<Edge>, GenError> {
        match n {
            0 => Err(GenError::NoVertices),
            1 => Ok(Vec::new()),
            _ => {
                let sequence = (0..n - 2)
                    .map(|_| source.sample_int(1, n))
                    .collect::<Result<Vec<_>, _>>()?;
                Self::decode(&sequence)
            }
        }
    }
}

/// Checks that `edges` is a spanning tree of the vertices `1..=n`.
///
/// `n - 1` edges without a cycle always connect all `n` vertices.
pub(crate) fn validate_tree<W>(n: usize, edges: &[Edge<W>]) -> Result<(), GenError> {
    let expected = n.saturating_sub(1);
    if edges.len() != expected {
        return Err(GenError::MalformedTree {
            n,
            expected,
            found: edges.len(),
        });
    }

    let mut parent: Vec<usize> = (0..=n).collect();
    for e in edges {
        e.check_range(n)?;
        let (a, b) = (root(&mut parent, e.start), root(&mut parent, e.end));
        if a == b {
            return Err(GenError::CyclicTree {
                start: e.start,
                end: e.end,
            });
        }
        parent[a] = b;
    }
    Ok(())
}

/// Union-find root lookup with path halving.
fn root(parent: &mut [usize], mut v: usize) -> usize {
    while parent[v] != v {
        parent[v] = parent[parent[v]];
        v = parent[v];
    }
    v
}
