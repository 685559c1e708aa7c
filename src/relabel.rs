//! Random relabeling of generated edge sets.
//!
//! Construction order leaves traces in a generated graph: low labels sit near
//! the root of the tree, the parent tends to be the `start` of its edge, and
//! tree edges come before extension edges. [`relabel`] removes all three by
//! permuting vertex labels, flipping edge orientations and shuffling the edge
//! sequence.

use bitvec::prelude::BitVec;
use itertools::Itertools;
use rand::Rng;

use crate::{Edge, GenError, RandomSource};

/// A bijection of the vertices `1..=n` onto themselves.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Permutation {
    /// `images[v - 1]` is the image of vertex `v`.
    images: Vec<usize>,
}

impl Permutation {
    /// The identity on `n` vertices.
    pub fn identity(n: usize) -> Self {
        Self {
            images: (1..=n).collect(),
        }
    }

    /// A uniformly random permutation of `n` vertices.
    ///
    /// Every vertex is moved at random, vertex 1 included.
    pub fn random<R: Rng>(n: usize, source: &mut RandomSource<R>) -> Self {
        let mut images = (1..=n).collect_vec();
        source.shuffle(&mut images);
        Self { images }
    }

    /// Creates a permutation from the images of `1, 2, ..., n` in order.
    ///
    /// Fails with [`GenError::NotAPermutation`] unless `images` contains every
    /// vertex of `1..=n` exactly once.
    ///
    /// # Example
    ///
    /// ```
    /// # use randgraph::Permutation;
    /// let p = Permutation::from_images(vec![2, 3, 1]).unwrap();
    /// assert_eq!(p.apply(3), Ok(1));
    /// assert!(Permutation::from_images(vec![1, 1, 2]).is_err());
    /// ```
    pub fn from_images(images: Vec<usize>) -> Result<Self, GenError> {
        let mut seen = BitVec::<usize>::repeat(false, images.len());
        for &v in &images {
            if v == 0 || v > images.len() || seen[v - 1] {
                return Err(GenError::NotAPermutation);
            }
            seen.set(v - 1, true);
        }
        Ok(Self { images })
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns `true` for the permutation of zero vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// The images of `1, 2, ..., n` in order.
    #[inline]
    pub fn images(&self) -> &[usize] {
        &self.images
    }

    /// The image of vertex `v`.
    pub fn apply(&self, v: usize) -> Result<usize, GenError> {
        v.checked_sub(1)
            .and_then(|i| self.images.get(i))
            .copied()
            .ok_or(GenError::VertexOutOfRange { vertex: v, n: self.len() })
    }

    /// The inverse permutation.
    pub fn inverse(&self) -> Self {
        let mut images = vec![0; self.len()];
        for (i, &v) in self.images.iter().enumerate() {
            images[v - 1] = i + 1;
        }
        Self { images }
    }

    /// Maps both endpoints of `edge`.
    pub fn apply_edge<W>(&self, edge: Edge<W>) -> Result<Edge<W>, GenError> {
        Ok(Edge::weighted(
            self.apply(edge.start)?,
            self.apply(edge.end)?,
            edge.weight,
        ))
    }
}

/// Randomly relabels an edge set on the vertices `1..=n` in place.
///
/// Draws a random [`Permutation`] and maps every endpoint through it, then
/// flips the orientation of every edge on a fair coin, and finally shuffles
/// the edge order. Weights stay with their edges. Returns the permutation
/// that was applied.
///
/// Fails with [`GenError::VertexOutOfRange`], leaving `edges` untouched, if an
/// endpoint lies outside `[1, n]`.
pub fn relabel<R, W>(
    n: usize,
    edges: &mut [Edge<W>],
    source: &mut RandomSource<R>,
) -> Result<Permutation, GenError>
where
    R: Rng,
{
    edges.iter().try_for_each(|e| e.check_range(n))?;

    let permutation = Permutation::random(n, source);
    for e in edges.iter_mut() {
        e.start = permutation.images[e.start - 1];
        e.end = permutation.images[e.end - 1];
        if source.coin() {
            std::mem::swap(&mut e.start, &mut e.end);
        }
    }
    source.shuffle(edges);

    Ok(permutation)
}
