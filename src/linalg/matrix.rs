//! Dense transition matrix
//!
//! Entry `(i, j)` is the probability of stepping from node `j` to node `i`,
//! so each column holds the outgoing distribution of one node. Storage is
//! row-major, which keeps the matrix-vector product a sequence of
//! contiguous dot products.

use serde::{Deserialize, Serialize};

use super::vector::dot;
use crate::error::{PageRankError, Result};

/// A square, validated N×N transition matrix
///
/// Construction rejects empty, ragged or non-square input and any entry that
/// is negative or non-finite. Column stochasticity is not enforced; see
/// [`TransitionMatrix::is_column_stochastic`] and
/// [`TransitionMatrix::with_uniform_dangling`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct TransitionMatrix {
    /// Number of nodes (rows and columns)
    n: usize,
    /// Row-major entries, `n * n` long
    data: Vec<f64>,
}

impl TransitionMatrix {
    /// Build from a list of rows
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(PageRankError::invalid("matrix has no rows"));
        }

        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(PageRankError::invalid(format!(
                    "matrix is not square: row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            data.extend(row);
        }

        Self::from_row_major(n, data)
    }

    /// Build from `n * n` row-major entries
    pub fn from_row_major(n: usize, data: Vec<f64>) -> Result<Self> {
        if n == 0 {
            return Err(PageRankError::invalid("matrix must have at least one node"));
        }
        let expected = n.checked_mul(n).ok_or_else(|| {
            PageRankError::invalid(format!("matrix size {} overflows", n))
        })?;
        if data.len() != expected {
            return Err(PageRankError::invalid(format!(
                "matrix is not square: {} entries for {} nodes, expected {}",
                data.len(),
                n,
                expected
            )));
        }

        if let Some(pos) = data.iter().position(|v| !v.is_finite() || *v < 0.0) {
            return Err(PageRankError::invalid(format!(
                "entry ({}, {}) is {}, expected a finite non-negative value",
                pos / n,
                pos % n,
                data[pos]
            )));
        }

        Ok(Self { n, data })
    }

    /// Parse a JSON array of rows
    pub fn from_json(json: &str) -> Result<Self> {
        let rows: Vec<Vec<f64>> = serde_json::from_str(json)?;
        Self::from_rows(rows)
    }

    /// Number of nodes
    pub fn size(&self) -> usize {
        self.n
    }

    /// Entry at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.n + col]
    }

    /// Borrow one row
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.n)
    }

    /// Compute `out := self * x`
    pub fn mat_vec_into(&self, x: &[f64], out: &mut [f64]) {
        debug_assert_eq!(x.len(), self.n);
        debug_assert_eq!(out.len(), self.n);
        for (o, row) in out.iter_mut().zip(self.rows()) {
            *o = dot(row, x);
        }
    }

    /// Sum of each column (the outgoing mass of each node)
    pub fn column_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.n];
        for row in self.rows() {
            for (s, v) in sums.iter_mut().zip(row.iter()) {
                *s += v;
            }
        }
        sums
    }

    /// Find dangling nodes (columns with no outgoing mass)
    pub fn dangling_nodes(&self) -> Vec<usize> {
        self.column_sums()
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s == 0.0)
            .map(|(j, _)| j)
            .collect()
    }

    /// Check that every column sums to 1 within `eps`
    pub fn is_column_stochastic(&self, eps: f64) -> bool {
        self.column_sums().iter().all(|s| (s - 1.0).abs() <= eps)
    }

    /// Copy of this matrix with every dangling column replaced by a uniform
    /// `1/N` column
    pub fn with_uniform_dangling(&self) -> Self {
        let dangling = self.dangling_nodes();
        let mut data = self.data.clone();
        let uniform = 1.0 / self.n as f64;
        for row in data.chunks_exact_mut(self.n) {
            for &j in &dangling {
                row[j] = uniform;
            }
        }
        Self { n: self.n, data }
    }
}

impl TryFrom<Vec<Vec<f64>>> for TransitionMatrix {
    type Error = PageRankError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<TransitionMatrix> for Vec<Vec<f64>> {
    fn from(matrix: TransitionMatrix) -> Self {
        matrix.rows().map(|r| r.to_vec()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_node() -> TransitionMatrix {
        TransitionMatrix::from_rows(vec![
            vec![0.0, 0.5, 0.0, 0.0],
            vec![1.0 / 3.0, 0.0, 0.0, 0.5],
            vec![1.0 / 3.0, 0.0, 1.0, 0.5],
            vec![1.0 / 3.0, 0.5, 0.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_from_rows() {
        let m = four_node();
        assert_eq!(m.size(), 4);
        assert_eq!(m.get(0, 1), 0.5);
        assert_eq!(m.get(2, 2), 1.0);
        assert_eq!(m.row(3).to_vec(), vec![1.0 / 3.0, 0.5, 0.0, 0.0]);
    }

    #[test]
    fn test_rejects_non_square() {
        let err = TransitionMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert!(err.is_invalid_input());

        let err = TransitionMatrix::from_rows(vec![vec![0.5, 0.5, 0.0], vec![0.5, 0.5, 1.0]])
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(TransitionMatrix::from_rows(vec![]).unwrap_err().is_invalid_input());
        assert!(TransitionMatrix::from_row_major(0, vec![])
            .unwrap_err()
            .is_invalid_input());
    }

    #[test]
    fn test_rejects_bad_values() {
        let nan = TransitionMatrix::from_rows(vec![vec![f64::NAN]]).unwrap_err();
        assert!(nan.is_invalid_input());

        let inf = TransitionMatrix::from_row_major(2, vec![0.0, 1.0, f64::INFINITY, 0.0]);
        assert!(inf.unwrap_err().is_invalid_input());

        let negative = TransitionMatrix::from_row_major(1, vec![-1.0]);
        assert!(negative.unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_mat_vec() {
        let m = four_node();
        let mut out = vec![0.0; 4];
        m.mat_vec_into(&[1.0, 1.0, 1.0, 1.0], &mut out);
        assert!((out[0] - 0.5).abs() < 1e-12);
        assert!((out[1] - (1.0 / 3.0 + 0.5)).abs() < 1e-12);
        assert!((out[2] - (1.0 / 3.0 + 1.5)).abs() < 1e-12);
        assert!((out[3] - (1.0 / 3.0 + 0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_column_stochastic() {
        let m = four_node();
        assert!(m.is_column_stochastic(1e-12));
        assert!(m.dangling_nodes().is_empty());
    }

    #[test]
    fn test_dangling_nodes() {
        // Node 1 has no outgoing edges
        let m = TransitionMatrix::from_rows(vec![vec![0.0, 0.0], vec![1.0, 0.0]]).unwrap();
        assert_eq!(m.dangling_nodes(), vec![1]);
        assert!(!m.is_column_stochastic(1e-9));

        let fixed = m.with_uniform_dangling();
        assert!(fixed.dangling_nodes().is_empty());
        assert!(fixed.is_column_stochastic(1e-12));
        assert_eq!(fixed.get(0, 1), 0.5);
        assert_eq!(fixed.get(1, 0), 1.0);
    }

    #[test]
    fn test_json_rows() {
        let m = TransitionMatrix::from_json("[[0, 1], [1, 0]]").unwrap();
        assert_eq!(m.size(), 2);

        let value = serde_json::to_value(&m).unwrap();
        assert_eq!(value, serde_json::json!([[0.0, 1.0], [1.0, 0.0]]));

        let err = TransitionMatrix::from_json("[[0, 1, 2], [1, 0]]").unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let parsed: std::result::Result<TransitionMatrix, _> =
            serde_json::from_str("[[1.0], [1.0]]");
        assert!(parsed.is_err());
    }
}
