//! Dense adjacency-matrix storage
//!
//! A single row-major buffer of edge multiplicities: cell `(v, w)` holds the
//! number of directed edges `v -> w`. Self-loops sit on the diagonal and
//! parallel edges accumulate as counts above one. The matrix side length
//! doubles whenever the vertex count would outgrow it, keeping vertex
//! insertion amortized O(1) while two-hop queries stay a plain matrix
//! product over the allocation.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::GraphStorage;
use crate::graph::store::{GraphError, GraphResult};
use crate::graph::types::{Multiplicity, VertexId, DEFAULT_CAPACITY};

/// Growable square matrix of edge multiplicities.
///
/// The valid region is the top-left `vertex_count x vertex_count` submatrix
/// as tracked by the owning graph; slack cells beyond it are always zero, so
/// the two-hop matrix product can safely run over the whole allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyMatrix {
    /// Row-major multiplicity buffer, `side * side` cells.
    cells: Vec<Multiplicity>,
    /// Allocated side length; always >= the owning graph's vertex count.
    side: usize,
}

impl AdjacencyMatrix {
    /// Create an empty matrix with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty matrix with an explicit side length.
    pub fn with_capacity(side: usize) -> Self {
        AdjacencyMatrix {
            cells: vec![0; side * side],
            side,
        }
    }

    /// Initialize the matrix directly from explicit rows, bypassing the
    /// default sizing. Rows must form a square matrix.
    pub fn from_rows(rows: Vec<Vec<Multiplicity>>) -> GraphResult<Self> {
        let side = rows.len();
        let mut cells = Vec::with_capacity(side * side);
        for row in &rows {
            if row.len() != side {
                return Err(GraphError::NotSquare {
                    rows: side,
                    cols: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(AdjacencyMatrix { cells, side })
    }

    /// Multiplicity of the edge `v -> w`.
    pub fn multiplicity(&self, v: VertexId, w: VertexId) -> Multiplicity {
        self.cells[self.idx(v, w)]
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.side && col < self.side);
        row * self.side + col
    }

    /// Square the matrix over the full allocation: `M2[v][w]` counts
    /// length-2 directed walks `v -> w`. Slack cells are zero and contribute
    /// nothing. Accumulates in u64 so large multiplicities cannot overflow
    /// the product.
    fn squared(&self) -> Vec<u64> {
        let n = self.side;
        let mut product = vec![0u64; n * n];
        for i in 0..n {
            for k in 0..n {
                let a = u64::from(self.cells[i * n + k]);
                if a == 0 {
                    continue;
                }
                for j in 0..n {
                    product[i * n + j] += a * u64::from(self.cells[k * n + j]);
                }
            }
        }
        product
    }
}

impl Default for AdjacencyMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphStorage for AdjacencyMatrix {
    fn grow(&mut self, vertex_count: usize) {
        if vertex_count < self.side {
            return;
        }
        // Doubling amortizes the O(side^2) copy to O(1) per vertex. The max
        // guard keeps a zero-sided matrix (possible via from_rows) from
        // staying stuck at zero.
        let new_side = (vertex_count * 2).max(DEFAULT_CAPACITY);
        let mut cells = vec![0; new_side * new_side];
        for row in 0..self.side {
            let src = row * self.side..(row + 1) * self.side;
            let dst = row * new_side..row * new_side + self.side;
            cells[dst].copy_from_slice(&self.cells[src]);
        }
        debug!(old_side = self.side, new_side, "adjacency matrix grown");
        self.cells = cells;
        self.side = new_side;
    }

    fn add_edge(&mut self, v: VertexId, w: VertexId) {
        let idx = self.idx(v, w);
        self.cells[idx] += 1;
    }

    fn out_neighbors(&self, v: VertexId, vertex_count: usize) -> Vec<VertexId> {
        let mut neighbors = Vec::new();
        for w in 0..vertex_count {
            for _ in 0..self.cells[self.idx(v, w)] {
                neighbors.push(w);
            }
        }
        neighbors
    }

    fn in_neighbors(&self, v: VertexId, vertex_count: usize) -> Vec<VertexId> {
        let mut neighbors = Vec::new();
        for i in 0..vertex_count {
            for _ in 0..self.cells[self.idx(i, v)] {
                neighbors.push(i);
            }
        }
        neighbors
    }

    fn two_hop_reachable(&self, v: VertexId) -> Vec<VertexId> {
        let product = self.squared();
        let mut reachable = Vec::new();
        for w in 0..self.side {
            for _ in 0..product[v * self.side + w] {
                reachable.push(w);
            }
        }
        reachable
    }

    fn capacity(&self) -> usize {
        self.side
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Adjacency matrix (size {}x{} = {} integers):",
            self.side,
            self.side,
            self.side * self.side
        )?;
        for row in 0..self.side {
            write!(f, "\n\t{}: ", row)?;
            for col in 0..self.side {
                write!(f, "{}, ", self.cells[self.idx(row, col)])?;
            }
        }
        Ok(())
    }
}
