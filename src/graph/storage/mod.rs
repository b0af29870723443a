//! Storage representations for the directed graph
//!
//! [`GraphStorage`] is the narrow capability interface the graph layer
//! dispatches into. A representation is chosen at construction time via the
//! type parameter on [`DirectedGraph`](crate::graph::DirectedGraph); the
//! dense adjacency matrix is the only representation shipped here.

mod adjacency_matrix;

pub use adjacency_matrix::AdjacencyMatrix;

use std::fmt;

use super::types::VertexId;

/// Capability interface for a graph storage representation.
///
/// Implementations own edge bookkeeping only. Vertex-count bookkeeping and
/// index validation live in the owning graph, which guarantees vertices are
/// added one at a time with monotonically increasing indices starting at 0,
/// and that [`grow`](GraphStorage::grow) is called before each new index is
/// used. Out-of-range indices are caller errors and fault immediately; no
/// defensive validation happens at this layer.
///
/// The `Display` bound provides the diagnostic rendering of the underlying
/// storage for debugging and logging.
pub trait GraphStorage: fmt::Display {
    /// Ensure the storage can accept vertex index `vertex_count`, growing
    /// the allocation if it would not fit. Existing contents are preserved.
    fn grow(&mut self, vertex_count: usize);

    /// Record one directed edge `v -> w`. Repeated calls accumulate
    /// multiplicity; `v == w` records a self-loop.
    fn add_edge(&mut self, v: VertexId, w: VertexId);

    /// Out-neighbors of `v` among the first `vertex_count` vertices, in
    /// ascending order, one entry per parallel edge.
    fn out_neighbors(&self, v: VertexId, vertex_count: usize) -> Vec<VertexId>;

    /// In-neighbors of `v` among the first `vertex_count` vertices, in
    /// ascending order, one entry per parallel edge.
    fn in_neighbors(&self, v: VertexId, vertex_count: usize) -> Vec<VertexId>;

    /// Vertices reachable from `v` by exactly two directed edges, in
    /// ascending order, one entry per distinct length-2 walk.
    fn two_hop_reachable(&self, v: VertexId) -> Vec<VertexId>;

    /// Currently allocated capacity (number of vertex slots).
    fn capacity(&self) -> usize;
}
