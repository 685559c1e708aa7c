//! Conversion of generated edge sequences into [`petgraph`] graphs.

use petgraph::graph::{NodeIndex, UnGraph};

use crate::{Edge, GenError};

/// Builds an undirected petgraph graph on `n` nodes from `edges`.
///
/// Node `i` of the result carries the vertex label `i + 1`, and edges keep
/// their order and weights.
///
/// # Example
///
/// ```
/// # use randgraph::{build_graph, convert::to_ungraph, GraphOptions, Prufer, RandomSource};
/// let mut source = RandomSource::seed_from_u64(8);
/// let edges = build_graph(10, 14, Prufer, GraphOptions::default(), &mut source).unwrap();
/// let graph = to_ungraph(10, edges).unwrap();
/// assert_eq!(graph.node_count(), 10);
/// assert_eq!(graph.edge_count(), 14);
/// assert_eq!(petgraph::algo::connected_components(&graph), 1);
/// ```
pub fn to_ungraph<W>(
    n: usize,
    edges: impl IntoIterator<Item = Edge<W>>,
) -> Result<UnGraph<usize, W>, GenError> {
    let edges = edges.into_iter();
    let mut graph = UnGraph::with_capacity(n, edges.size_hint().0);
    for v in 1..=n {
        graph.add_node(v);
    }
    for e in edges {
        e.check_range(n)?;
        graph.add_edge(NodeIndex::new(e.start - 1), NodeIndex::new(e.end - 1), e.weight);
    }
    Ok(graph)
}
