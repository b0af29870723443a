//! Core type definitions for the dense directed graph

/// Dense vertex index. Vertices are integers `0..n-1` and have no identity
/// beyond this index space.
pub type VertexId = usize;

/// Number of parallel directed edges between an ordered pair of vertices.
pub type Multiplicity = u32;

/// Initial side length of a freshly constructed adjacency matrix. Capacity
/// doubles from here and never shrinks, so it can never reach zero.
pub const DEFAULT_CAPACITY: usize = 5;
