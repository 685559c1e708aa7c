//! Uniform sampling over a caller-owned random engine.
//!
//! [`RandomSource`] is the only place where the crate touches an engine. All
//! generators take it by mutable reference, so a fixed seed reproduces the
//! exact same output.

use std::fmt::Display;

use num_traits::{Float, PrimInt};
use rand::distr::uniform::SampleUniform;
use rand::distr::{Distribution, Uniform};
use rand::rngs::{StdRng, ThreadRng};
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};

use crate::GenError;

/// Uniform sampling service wrapping a seeded engine.
///
/// The source does no locking. Generation on several threads needs one source
/// per thread.
///
/// # Example
///
/// ```
/// # use randgraph::RandomSource;
/// let mut source = RandomSource::seed_from_u64(7);
/// let die = source.sample_int(1, 6).unwrap();
/// assert!((1..=6).contains(&die));
/// ```
#[derive(Debug, Clone)]
pub struct RandomSource<R = StdRng> {
    rng: R,
}

impl RandomSource<StdRng> {
    /// Creates a source over a [`StdRng`] seeded from `seed`.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a source over a [`StdRng`] seeded by the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource<R> {
    /// Wraps an existing engine.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Mutable access to the underlying engine.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Returns the underlying engine.
    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Samples an integer uniformly from `[low, high]`.
    ///
    /// Fails with [`GenError::InvalidRange`] if `low > high`.
    pub fn sample_int<T>(&mut self, low: T, high: T) -> Result<T, GenError>
    where
        T: PrimInt + SampleUniform + Display,
    {
        self.sample_uniform(low, high)
    }

    /// Samples a real number uniformly from `[low, high]`.
    ///
    /// Fails with [`GenError::InvalidRange`] if `low > high` or either bound
    /// is not finite.
    pub fn sample_real<T>(&mut self, low: T, high: T) -> Result<T, GenError>
    where
        T: Float + SampleUniform + Display,
    {
        self.sample_uniform(low, high)
    }

    fn sample_uniform<T>(&mut self, low: T, high: T) -> Result<T, GenError>
    where
        T: SampleUniform + Display + Copy,
    {
        let dist =
            Uniform::new_inclusive(low, high).map_err(|_| GenError::invalid_range(low, high))?;
        Ok(dist.sample(&mut self.rng))
    }

    /// Flips a fair coin.
    #[inline]
    pub fn coin(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    /// Shuffles `items` uniformly in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Picks `amount` distinct indices from `0..len`, returned in random order.
    ///
    /// Fails with [`GenError::InvalidRange`] if `amount > len`.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Result<Vec<usize>, GenError> {
        if amount > len {
            return Err(GenError::invalid_range(amount, len));
        }
        Ok(index::sample(&mut self.rng, len, amount).into_vec())
    }
}

/// Runs `f` with a source backed by the thread-local engine of [`rand::rng`].
///
/// Meant for drivers and quick experiments; library code always receives its
/// source from the caller.
///
/// # Example
///
/// ```
/// # use randgraph::random::with_thread_source;
/// let x: f64 = with_thread_source(|source| source.sample_real(0.0, 1.0)).unwrap();
/// assert!((0.0..=1.0).contains(&x));
/// ```
pub fn with_thread_source<T>(f: impl FnOnce(&mut RandomSource<ThreadRng>) -> T) -> T {
    let mut source = RandomSource::new(rand::rng());
    f(&mut source)
}
