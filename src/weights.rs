//! Ready-made edge weight generators.
//!
//! A weight generator is any `FnMut(&mut RandomSource<R>) -> Result<W, GenError>`.
//! It is called once per edge, in the order edges are created, and draws its
//! randomness from the same source as the structure itself.

use std::fmt::Display;

use num_traits::{Float, PrimInt};
use rand::distr::uniform::SampleUniform;
use rand::Rng;

use crate::{GenError, RandomSource};

/// Unit weights, for unweighted edges.
pub fn unit_weights<R: Rng>() -> impl FnMut(&mut RandomSource<R>) -> Result<(), GenError> {
    |_| Ok(())
}

/// Integer weights drawn uniformly from `[low, high]`.
///
/// # Example
///
/// ```
/// # use randgraph::{build_weighted_tree, weights, RandomSource, TreeOptions};
/// let mut source = RandomSource::seed_from_u64(3);
/// let tree = build_weighted_tree(
///     5,
///     weights::uniform_int_weights(1u32, 9),
///     0.0,
///     0.0,
///     TreeOptions::default(),
///     &mut source,
/// )
/// .unwrap();
/// assert!(tree.iter().all(|e| (1..=9).contains(&e.weight)));
/// ```
pub fn uniform_int_weights<R, T>(
    low: T,
    high: T,
) -> impl FnMut(&mut RandomSource<R>) -> Result<T, GenError>
where
    R: Rng,
    T: PrimInt + SampleUniform + Display,
{
    move |source| source.sample_int(low, high)
}

/// Real weights drawn uniformly from `[low, high]`.
pub fn uniform_real_weights<R, T>(
    low: T,
    high: T,
) -> impl FnMut(&mut RandomSource<R>) -> Result<T, GenError>
where
    R: Rng,
    T: Float + SampleUniform + Display,
{
    move |source| source.sample_real(low, high)
}
