//! Spanning trees built from a chain, a flower and random-parent attachments.
//!
//! Vertex `v` (for `v` in `2..=n`) is attached to the tree by exactly one
//! edge, chosen by the segment it falls into:
//!
//! ```text
//! chain     v in [2, chain + 1]                  edge (v - 1, v)
//! flower    v in [chain + 2, chain + flower + 1] edge (1, v)
//! random    v in [chain + flower + 2, n]         edge (p, v), p uniform in [1, v - 1]
//! ```
//!
//! Every vertex attaches to an earlier one, so the result is always a tree.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rand::Rng;

use crate::{Edge, GenError, RandomSource};

/// Tree shape mixing a chain, a flower (star around vertex 1) and a random
/// recursive tree.
///
/// The fractions select how many of the `n - 1` tree edges go to the chain
/// and flower segments; the rest attach to uniformly random earlier vertices.
///
/// # Example
///
/// ```
/// # use randgraph::{ChainFlowerRandom, Edge, RandomSource};
/// let mut source = RandomSource::seed_from_u64(0);
/// let path = ChainFlowerRandom::chain().build(4, &mut source).unwrap();
/// assert_eq!(path, [Edge::new(1, 2), Edge::new(2, 3), Edge::new(3, 4)]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct ChainFlowerRandom {
    chain_p: f64,
    flower_p: f64,
}

/// Sizes of the three segments of a [`ChainFlowerRandom`] tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Segments {
    /// Number of chain edges.
    pub chain: usize,
    /// Number of flower edges.
    pub flower: usize,
    /// Number of random-parent edges.
    pub random: usize,
}

impl ChainFlowerRandom {
    /// Creates a shape with the given chain and flower fractions.
    ///
    /// Fails with [`GenError::InvalidParameter`] unless both fractions lie in
    /// `[0, 1]` and sum to at most one.
    pub fn new(chain_p: f64, flower_p: f64) -> Result<Self, GenError> {
        let shape = Self { chain_p, flower_p };
        shape.validate()?;
        Ok(shape)
    }

    /// A simple path `1 - 2 - ... - n`.
    pub const fn chain() -> Self {
        Self {
            chain_p: 1.0,
            flower_p: 0.0,
        }
    }

    /// A star centred on vertex 1.
    pub const fn flower() -> Self {
        Self {
            chain_p: 0.0,
            flower_p: 1.0,
        }
    }

    /// A random recursive tree.
    pub const fn random() -> Self {
        Self {
            chain_p: 0.0,
            flower_p: 0.0,
        }
    }

    /// Fraction of tree edges forming the chain.
    pub fn chain_p(&self) -> f64 {
        self.chain_p
    }

    /// Fraction of tree edges forming the flower.
    pub fn flower_p(&self) -> f64 {
        self.flower_p
    }

    fn validate(&self) -> Result<(), GenError> {
        let unit = 0.0..=1.0;
        if !unit.contains(&self.chain_p)
            || !unit.contains(&self.flower_p)
            || self.chain_p + self.flower_p > 1.0
        {
            return Err(GenError::InvalidParameter {
                chain_p: self.chain_p,
                flower_p: self.flower_p,
            });
        }
        Ok(())
    }

    /// Segment sizes for a tree on `n` vertices.
    ///
    /// Both sizes are truncated from `(n - 1) * fraction`. If they overflow
    /// `n - 1`, the chain is shortened.
    pub fn segments(&self, n: usize) -> Result<Segments, GenError> {
        self.validate()?;
        if n == 0 {
            return Err(GenError::NoVertices);
        }
        let span = n - 1;
        let flower = ((span as f64) * self.flower_p) as usize;
        let mut chain = ((span as f64) * self.chain_p) as usize;
        if chain + flower > span {
            chain = span - flower;
        }
        Ok(Segments {
            chain,
            flower,
            random: span - chain - flower,
        })
    }

    /// Builds a spanning tree on the vertices `1..=n`, in construction order.
    pub fn build<R: Rng>(
        &self,
        n: usize,
        source: &mut RandomSource<R>,
    ) -> Result<Vec<Edge>, GenError> {
        let Segments { chain, flower, .. } = self.segments(n)?;
        let mut tree = Vec::with_capacity(n - 1);

        tree.extend((2..=chain + 1).map(|v| Edge::new(v - 1, v)));
        tree.extend((chain + 2..=chain + flower + 1).map(|v| Edge::new(1, v)));
        for v in chain + flower + 2..=n {
            let parent = source.sample_int(1, v - 1)?;
            tree.push(Edge::new(parent, v));
        }

        Ok(tree)
    }
}
