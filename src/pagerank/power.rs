//! Power iteration solver
//!
//! Refines a rank vector with `p := d * S * p + (1 - d) / N` until the L1
//! distance between successive iterates is within tolerance.
//!
//! The first `current` vector is all ones rather than a distribution, so the
//! very first update always runs. The returned vector is not renormalized.

use std::time::Instant;

use rayon::prelude::*;

use super::config::PowerIterationConfig;
use super::observer::{IterationObserver, NoopObserver, SolverState};
use super::PageRankResult;
use crate::error::{PageRankError, Result};
use crate::linalg::vector::{l1_distance, scale_and_shift};
use crate::linalg::TransitionMatrix;

/// Enter a tracing span for one solve (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_solve {
    ($n:expr, $config:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!(
            "power_iteration",
            n = $n,
            damping = $config.damping,
            tolerance = $config.tolerance
        )
        .entered();
    };
}

/// Power iteration PageRank solver
#[derive(Debug, Clone, Default)]
pub struct PowerIterationSolver {
    config: PowerIterationConfig,
}

impl PowerIterationSolver {
    /// Create a solver with the given configuration
    pub fn new(config: PowerIterationConfig) -> Self {
        Self { config }
    }

    /// Get the solver configuration
    pub fn config(&self) -> &PowerIterationConfig {
        &self.config
    }

    /// Run PageRank on a transition matrix
    pub fn solve(&self, matrix: &TransitionMatrix) -> Result<PageRankResult> {
        self.solve_with_observer(matrix, &mut NoopObserver)
    }

    /// Run PageRank, reporting every iteration to `observer`
    ///
    /// Fails with [`PageRankError::DidNotConverge`] when the iteration cap is
    /// reached or the iterates stop being finite, and with
    /// [`PageRankError::DeadlineExceeded`] when the configured time limit
    /// runs out. A partially converged vector is never returned.
    pub fn solve_with_observer(
        &self,
        matrix: &TransitionMatrix,
        observer: &mut impl IterationObserver,
    ) -> Result<PageRankResult> {
        self.config.validate()?;

        let n = matrix.size();
        trace_solve!(n, self.config);

        let clock = Instant::now();
        let deadline = self.config.max_duration();
        let damping = self.config.damping;
        let teleport = (1.0 - damping) / n as f64;

        let mut previous = vec![1.0 / n as f64; n];
        let mut current = vec![1.0; n];
        let mut delta = l1_distance(&current, &previous);
        let mut iterations = 0;

        loop {
            if iterations >= self.config.max_iterations {
                #[cfg(feature = "tracing")]
                tracing::warn!(iterations, delta, "iteration cap reached");
                observer.on_finish(SolverState::Iterating, iterations);
                return Err(PageRankError::DidNotConverge { iterations, delta });
            }
            if let Some(limit) = deadline {
                if clock.elapsed() >= limit {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(iterations, delta, "time limit reached");
                    observer.on_finish(SolverState::Iterating, iterations);
                    return Err(PageRankError::DeadlineExceeded { iterations, delta });
                }
            }

            iterations += 1;

            std::mem::swap(&mut previous, &mut current);
            matrix.mat_vec_into(&previous, &mut current);
            scale_and_shift(&mut current, damping, teleport);

            delta = l1_distance(&current, &previous);
            observer.on_iteration(iterations, delta);

            #[cfg(feature = "tracing")]
            tracing::trace!(iteration = iterations, delta, "power iteration step");

            if !delta.is_finite() {
                #[cfg(feature = "tracing")]
                tracing::warn!(iterations, "iterates diverged");
                observer.on_finish(SolverState::Iterating, iterations);
                return Err(PageRankError::DidNotConverge { iterations, delta });
            }
            if delta <= self.config.tolerance {
                break;
            }
        }

        observer.on_finish(SolverState::Converged, iterations);

        #[cfg(feature = "tracing")]
        tracing::debug!(iterations, delta, "converged");

        Ok(PageRankResult::new(
            current,
            iterations,
            delta,
            true,
            clock.elapsed(),
        ))
    }

    /// Solve independent matrices in parallel; results keep input order
    pub fn solve_many(&self, matrices: &[TransitionMatrix]) -> Vec<Result<PageRankResult>> {
        matrices.par_iter().map(|m| self.solve(m)).collect()
    }
}

/// Run PageRank with default settings, returning the node count and the
/// rank vector
pub fn pagerank(matrix: &TransitionMatrix) -> Result<(usize, Vec<f64>)> {
    PowerIterationSolver::default()
        .solve(matrix)
        .map(PageRankResult::into_parts)
}
