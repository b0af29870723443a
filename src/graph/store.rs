//! Directed multigraph front over a storage representation
//!
//! [`DirectedGraph`] owns vertex-count bookkeeping, optional string vertex
//! labels, and endpoint validation, and dispatches edge storage and queries
//! into a [`GraphStorage`] representation chosen at construction time.

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tracing::trace;

use super::storage::{AdjacencyMatrix, GraphStorage};
use super::types::{Multiplicity, VertexId};

/// Errors that can occur during graph operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {0} not found")]
    VertexNotFound(VertexId),

    #[error("matrix is not square: {rows} rows but a row with {cols} columns")]
    NotSquare { rows: usize, cols: usize },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Directed multigraph over dense integer vertices.
///
/// Vertices are added one at a time and receive monotonically increasing
/// indices starting at 0. All query operations validate indices before
/// dispatching into storage; the storage layer itself performs no checks.
#[derive(Debug, Clone)]
pub struct DirectedGraph<S: GraphStorage = AdjacencyMatrix> {
    storage: S,
    vertex_count: usize,
    edge_count: usize,
    /// Optional string labels, keyed by vertex index.
    labels: HashMap<VertexId, String>,
}

impl DirectedGraph<AdjacencyMatrix> {
    /// Create an empty graph backed by a default-capacity adjacency matrix.
    pub fn new() -> Self {
        Self::with_storage(AdjacencyMatrix::new())
    }

    /// Create a graph directly from an explicit square adjacency matrix.
    /// Every row/column index of the matrix becomes a valid vertex.
    pub fn from_rows(rows: Vec<Vec<Multiplicity>>) -> GraphResult<Self> {
        let storage = AdjacencyMatrix::from_rows(rows)?;
        let vertex_count = storage.capacity();
        let edge_count = (0..vertex_count)
            .map(|v| storage.out_neighbors(v, vertex_count).len())
            .sum();
        Ok(DirectedGraph {
            storage,
            vertex_count,
            edge_count,
            labels: HashMap::new(),
        })
    }
}

impl Default for DirectedGraph<AdjacencyMatrix> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GraphStorage> DirectedGraph<S> {
    /// Create an empty graph over any storage representation.
    pub fn with_storage(storage: S) -> Self {
        DirectedGraph {
            storage,
            vertex_count: 0,
            edge_count: 0,
            labels: HashMap::new(),
        }
    }

    /// Add a vertex and return its index. Storage grows before the new index
    /// is handed out, so the index is always within capacity.
    pub fn add_vertex(&mut self) -> VertexId {
        self.storage.grow(self.vertex_count);
        let v = self.vertex_count;
        self.vertex_count += 1;
        v
    }

    /// Add a vertex with a string label.
    pub fn add_vertex_labeled(&mut self, label: impl Into<String>) -> VertexId {
        let v = self.add_vertex();
        self.labels.insert(v, label.into());
        v
    }

    /// Record a directed edge `v -> w`. Self-loops are allowed and repeated
    /// calls accumulate parallel edges.
    pub fn add_edge(&mut self, v: VertexId, w: VertexId) -> GraphResult<()> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;
        self.storage.add_edge(v, w);
        self.edge_count += 1;
        trace!(v, w, "edge recorded");
        Ok(())
    }

    /// Out-neighbors of `v` in ascending order, one entry per parallel edge.
    pub fn out_neighbors(&self, v: VertexId) -> GraphResult<Vec<VertexId>> {
        self.check_vertex(v)?;
        Ok(self.storage.out_neighbors(v, self.vertex_count))
    }

    /// In-neighbors of `v` in ascending order, one entry per parallel edge.
    pub fn in_neighbors(&self, v: VertexId) -> GraphResult<Vec<VertexId>> {
        self.check_vertex(v)?;
        Ok(self.storage.in_neighbors(v, self.vertex_count))
    }

    /// Vertices reachable from `v` by exactly two directed edges, in
    /// ascending order, one entry per distinct length-2 walk.
    pub fn two_hop_reachable(&self, v: VertexId) -> GraphResult<Vec<VertexId>> {
        self.check_vertex(v)?;
        Ok(self.storage.two_hop_reachable(v))
    }

    /// Label of vertex `v`, if one was assigned.
    pub fn label(&self, v: VertexId) -> Option<&str> {
        self.labels.get(&v).map(String::as_str)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Read-only access to the underlying storage representation.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn check_vertex(&self, v: VertexId) -> GraphResult<()> {
        if v >= self.vertex_count {
            return Err(GraphError::VertexNotFound(v));
        }
        Ok(())
    }
}

impl<S: GraphStorage> fmt::Display for DirectedGraph<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph with {} vertices and {} edges.",
            self.vertex_count, self.edge_count
        )?;
        write!(f, "{}", self.storage)
    }
}
