//! Dense adjacency-matrix directed graph
//!
//! A directed multigraph over integer-labeled vertices `0..n-1`, backed by a
//! growable square matrix of edge multiplicities. Self-loops and parallel
//! edges are supported; two-hop reachability is computed by squaring the
//! adjacency matrix.
//!
//! The crate is split into two layers:
//! - [`graph::storage`]: the [`GraphStorage`] capability interface and the
//!   dense [`AdjacencyMatrix`] representation behind it
//! - [`graph::store`]: [`DirectedGraph`], which owns vertex-count
//!   bookkeeping, optional string vertex labels, and endpoint validation,
//!   and dispatches into the storage layer

pub mod graph;

pub use graph::{
    AdjacencyMatrix, DirectedGraph, GraphError, GraphResult, GraphStorage, Multiplicity, VertexId,
};
