//! All-pairs shortest paths by Floyd-Warshall.
//!
//! Input is an `n×n` matrix where `Some(w)` is an edge of weight `w` and
//! `None` is no edge. The output starts as a copy of the input; `None` acts
//! as +∞ in every comparison.
//!
//! # Relaxation
//!
//! For each intermediate `k` in increasing order and every `(i, j)`:
//!
//! - [`Relaxation::BaseEdges`] ([`floyd_warshall`]): relax only when the
//!   *input* matrix has edges `i → k` and `k → j`, adding the accumulated
//!   `D[i][k] + D[k][j]`. Only paths whose every split point is a direct
//!   two-edge detour are found, so it agrees with BFS on graphs whose
//!   shortest paths are at most two hops and can miss longer ones.
//! - [`Relaxation::Accumulated`] ([`floyd_warshall_closure`]): the textbook
//!   form, relaxing whenever `D[i][k]` and `D[k][j]` are both present. This
//!   is the full shortest-path closure.

use std::ops::Add;

use tracing::instrument;

use crate::error::GraphError;

/// Which matrix decides whether `i → k → j` is a candidate path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relaxation {
    /// Existence is read from the input matrix.
    BaseEdges,
    /// Existence is read from the matrix being accumulated.
    Accumulated,
}

/// Floyd-Warshall with the existence test read from the input matrix.
///
/// # Errors
///
/// Returns [`GraphError::NonSquareMatrix`] if any row length differs from
/// the row count.
pub fn floyd_warshall<W>(matrix: &[Vec<Option<W>>]) -> Result<Vec<Vec<Option<W>>>, GraphError>
where
    W: Copy + PartialOrd + Add<Output = W>,
{
    relax_all(matrix, Relaxation::BaseEdges)
}

/// Textbook Floyd-Warshall: the shortest-path closure of `matrix`.
///
/// # Errors
///
/// Returns [`GraphError::NonSquareMatrix`] if any row length differs from
/// the row count.
pub fn floyd_warshall_closure<W>(
    matrix: &[Vec<Option<W>>],
) -> Result<Vec<Vec<Option<W>>>, GraphError>
where
    W: Copy + PartialOrd + Add<Output = W>,
{
    relax_all(matrix, Relaxation::Accumulated)
}

/// Shared core of [`floyd_warshall`] and [`floyd_warshall_closure`].
///
/// # Errors
///
/// Returns [`GraphError::NonSquareMatrix`] if any row length differs from
/// the row count.
#[instrument(skip(matrix), fields(n = matrix.len()))]
pub fn relax_all<W>(
    matrix: &[Vec<Option<W>>],
    relaxation: Relaxation,
) -> Result<Vec<Vec<Option<W>>>, GraphError>
where
    W: Copy + PartialOrd + Add<Output = W>,
{
    let n = matrix.len();
    if let Some((row, len)) = matrix
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != n)
    {
        return Err(GraphError::NonSquareMatrix { rows: n, row, len });
    }

    let mut dist = matrix.to_vec();
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let candidate = match relaxation {
                    Relaxation::BaseEdges if matrix[i][k].is_none() || matrix[k][j].is_none() => {
                        continue;
                    }
                    Relaxation::BaseEdges | Relaxation::Accumulated => {
                        match (dist[i][k], dist[k][j]) {
                            (Some(a), Some(b)) => a + b,
                            _ => continue,
                        }
                    }
                };
                if dist[i][j].is_none_or(|current| candidate < current) {
                    dist[i][j] = Some(candidate);
                }
            }
        }
    }

    Ok(dist)
}
