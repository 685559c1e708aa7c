//! Growing an edge set up to a target size.
//!
//! [`extend`] appends random edges to a base edge set (usually a spanning
//! tree) until it holds `m` edges. Candidates are vertex pairs drawn uniformly
//! from `[1, n]²`; a pair is accepted if it respects the [`EdgePolicy`].
//!
//! Feasibility is checked before anything is sampled. With `repeat` disabled
//! the extender keeps a set of the unordered pairs used so far. Since the
//! requested size never exceeds the number of admissible pairs, at least one
//! unused admissible pair exists while the set is incomplete, so rejection
//! sampling terminates with probability one. Its expected running time grows
//! as the free pairs run out; [`SamplingMode::Complement`] avoids this by
//! sampling directly among the free pairs.

use std::collections::HashSet;

use itertools::Itertools;
use rand::Rng;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{unordered, Edge, GenError, RandomSource};

/// Constraints on the edges of a generated graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct EdgePolicy {
    /// Allow the same unordered pair to appear more than once.
    pub repeat: bool,
    /// Allow edges whose endpoints coincide.
    pub self_loop: bool,
    /// Require the graph to contain a spanning tree.
    pub connected: bool,
}

impl Default for EdgePolicy {
    fn default() -> Self {
        Self {
            repeat: false,
            self_loop: false,
            connected: true,
        }
    }
}

impl EdgePolicy {
    /// Number of distinct unordered pairs an edge may use on `n` vertices.
    pub fn admissible_pairs(&self, n: usize) -> usize {
        let links = if n % 2 == 0 {
            (n / 2).saturating_mul(n.saturating_sub(1))
        } else {
            n.saturating_mul((n - 1) / 2)
        };
        if self.self_loop {
            links.saturating_add(n)
        } else {
            links
        }
    }

    /// The inclusive range `[lower, upper]` of edge counts realisable on `n`
    /// vertices.
    ///
    /// Without `repeat` the upper bound is the number of admissible pairs. With
    /// `repeat` it is unbounded, unless there is no admissible pair at all.
    pub fn edge_bounds(&self, n: usize) -> (usize, usize) {
        let lower = if self.connected {
            n.saturating_sub(1)
        } else {
            0
        };
        let pairs = self.admissible_pairs(n);
        let upper = if self.repeat && pairs > 0 {
            usize::MAX
        } else {
            pairs
        };
        (lower, upper)
    }

    /// Fails with [`GenError::InfeasibleEdgeCount`] unless `m` edges fit on
    /// `n` vertices.
    pub fn check_feasible(&self, n: usize, m: usize) -> Result<(), GenError> {
        let (lower, upper) = self.edge_bounds(n);
        if m < lower || m > upper {
            return Err(GenError::InfeasibleEdgeCount { n, m, lower, upper });
        }
        Ok(())
    }

    #[inline]
    fn admits(&self, u: usize, v: usize) -> bool {
        self.self_loop || u != v
    }
}

/// How the extender picks new edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum SamplingMode {
    /// Use [`Complement`](Self::Complement) when the request would consume
    /// more than half of the free pairs, [`Rejection`](Self::Rejection)
    /// otherwise.
    #[default]
    Auto,
    /// Draw pairs from `[1, n]²` until one is admissible.
    Rejection,
    /// List every free admissible pair and pick among them.
    ///
    /// Only meaningful without `repeat`; with `repeat` the extender always
    /// samples by rejection.
    Complement,
}

/// Appends random edges to `edges` until it holds `m` of them.
///
/// `weights` is invoked once per appended edge. The base edges must have
/// endpoints in `[1, n]`; they count towards `m` and, without `repeat`,
/// their pairs are never reused.
///
/// # Example
///
/// ```
/// # use randgraph::{extend::extend, Edge, EdgePolicy, RandomSource, SamplingMode};
/// let mut source = RandomSource::seed_from_u64(5);
/// let mut edges = vec![Edge::new(1, 2), Edge::new(2, 3)];
/// let policy = EdgePolicy::default();
/// extend(3, 3, &mut edges, &policy, SamplingMode::Auto, |_| Ok(()), &mut source).unwrap();
/// assert_eq!(edges.last().unwrap().key(), (1, 3));
/// ```
pub fn extend<R, W>(
    n: usize,
    m: usize,
    edges: &mut Vec<Edge<W>>,
    policy: &EdgePolicy,
    mode: SamplingMode,
    mut weights: impl FnMut(&mut RandomSource<R>) -> Result<W, GenError>,
    source: &mut RandomSource<R>,
) -> Result<(), GenError>
where
    R: Rng,
{
    policy.check_feasible(n, m)?;
    let Some(missing) = m.checked_sub(edges.len()) else {
        let (lower, upper) = policy.edge_bounds(n);
        return Err(GenError::InfeasibleEdgeCount { n, m, lower, upper });
    };
    edges.iter().try_for_each(|e| e.check_range(n))?;
    if missing == 0 {
        return Ok(());
    }

    let mut used: HashSet<(usize, usize)> = HashSet::new();
    if !policy.repeat {
        used.extend(edges.iter().map(Edge::key));
    }

    let mode = match mode {
        _ if policy.repeat => SamplingMode::Rejection,
        SamplingMode::Auto => {
            let taken = used.iter().filter(|&&(u, v)| policy.admits(u, v)).count();
            let free = policy.admissible_pairs(n).saturating_sub(taken);
            if missing.saturating_mul(2) > free {
                SamplingMode::Complement
            } else {
                SamplingMode::Rejection
            }
        }
        mode => mode,
    };

    let base = edges.len();
    edges.reserve(missing.min(RESERVE_LIMIT));
    let rejected = match append_random(n, m, edges, policy, mode, used, &mut weights, source) {
        Ok(rejected) => rejected,
        Err(err) => {
            edges.truncate(base);
            return Err(err);
        }
    };

    debug!(n, m, added = missing, rejected, ?mode, "extended edge set");
    Ok(())
}

/// Upper bound on the capacity reserved up front. With `repeat` the target
/// size is unbounded.
const RESERVE_LIMIT: usize = 1 << 20;

/// Pushes random edges until `edges` holds `m` of them, returning the number
/// of rejected draws. Edges pushed before an error are left in place.
#[allow(clippy::too_many_arguments)]
fn append_random<R, W>(
    n: usize,
    m: usize,
    edges: &mut Vec<Edge<W>>,
    policy: &EdgePolicy,
    mode: SamplingMode,
    mut used: HashSet<(usize, usize)>,
    weights: &mut impl FnMut(&mut RandomSource<R>) -> Result<W, GenError>,
    source: &mut RandomSource<R>,
) -> Result<usize, GenError>
where
    R: Rng,
{
    let mut rejected = 0usize;
    match mode {
        SamplingMode::Complement => {
            let mut free = (1..=n).tuple_combinations::<(_, _)>().collect_vec();
            if policy.self_loop {
                free.extend((1..=n).map(|v| (v, v)));
            }
            free.retain(|pair| !used.contains(pair));
            for i in source.sample_indices(free.len(), m - edges.len())? {
                let (u, v) = free[i];
                let (u, v) = if source.coin() { (v, u) } else { (u, v) };
                let weight = weights(source)?;
                edges.push(Edge::weighted(u, v, weight));
            }
        }
        _ => {
            while edges.len() < m {
                let u = source.sample_int(1, n)?;
                let v = source.sample_int(1, n)?;
                if !policy.admits(u, v) || (!policy.repeat && !used.insert(unordered(u, v))) {
                    rejected += 1;
                    continue;
                }
                let weight = weights(source)?;
                edges.push(Edge::weighted(u, v, weight));
            }
        }
    }
    Ok(rejected)
}
