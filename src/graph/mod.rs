//! Core directed graph implementation
//!
//! This module implements the dense multigraph data model:
//! - Vertices as dense integer indices `0..n-1`
//! - Directed edges with multiplicity (parallel edges and self-loops)
//! - Storage representations behind the [`GraphStorage`] interface

pub mod storage;
pub mod store;
pub mod types;

pub use storage::{AdjacencyMatrix, GraphStorage};
pub use store::{DirectedGraph, GraphError, GraphResult};
pub use types::{Multiplicity, VertexId, DEFAULT_CAPACITY};
