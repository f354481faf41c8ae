//! PageRank by power iteration
//!
//! This module provides the solver, its configuration, and the result type.

pub mod config;
pub mod observer;
pub mod power;

use std::time::Duration;

use serde::Serialize;

pub use config::PowerIterationConfig;
pub use observer::{DeltaRecorder, IterationObserver, NoopObserver, SolverState};
pub use power::PowerIterationSolver;

/// Result of a PageRank computation
#[derive(Debug, Clone, Serialize)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta
    pub delta: f64,
    /// Whether the algorithm converged; always `true` for results returned
    /// by [`PowerIterationSolver`], which reports every other outcome as an
    /// error
    pub converged: bool,
    /// Wall-clock time spent solving
    #[serde(serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(
        scores: Vec<f64>,
        iterations: usize,
        delta: f64,
        converged: bool,
        elapsed: Duration,
    ) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
            elapsed,
        }
    }

    /// Number of nodes ranked
    pub fn node_count(&self) -> usize {
        self.scores.len()
    }

    /// Get top N nodes by score, highest first; ties keep node order
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        let mut indexed: Vec<_> = self.scores.iter().copied().enumerate().collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1));
        indexed.truncate(n);
        indexed
    }

    /// Get the score for a specific node
    pub fn score(&self, node: usize) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }

    /// Split into the node count and the rank vector
    pub fn into_parts(self) -> (usize, Vec<f64>) {
        (self.scores.len(), self.scores)
    }
}

fn serialize_secs<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}
