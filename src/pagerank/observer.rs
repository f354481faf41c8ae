//! Iteration observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive a callback after every power-iteration step and once
//! when the solver stops, without coupling to the solver loop.

/// Solver state machine: `Iterating` until the L1 test passes, then
/// `Converged`. A run that stops early ends in `Iterating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    Iterating,
    Converged,
}

/// Callbacks invoked by [`super::PowerIterationSolver`].
///
/// Both methods default to no-ops.
pub trait IterationObserver {
    /// Called after iteration `iteration` (1-based) with its L1 delta.
    fn on_iteration(&mut self, _iteration: usize, _delta: f64) {}

    /// Called once when the solver stops.
    fn on_finish(&mut self, _state: SolverState, _iterations: usize) {}
}

/// Observer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl IterationObserver for NoopObserver {}

/// Records the delta of every iteration and the terminal state.
#[derive(Debug, Clone, Default)]
pub struct DeltaRecorder {
    /// L1 delta of each iteration, in order
    pub deltas: Vec<f64>,
    /// State the solver stopped in, once finished
    pub final_state: Option<SolverState>,
}

impl DeltaRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }
}

impl IterationObserver for DeltaRecorder {
    fn on_iteration(&mut self, _iteration: usize, delta: f64) {
        self.deltas.push(delta);
    }

    fn on_finish(&mut self, state: SolverState, _iterations: usize) {
        self.final_state = Some(state);
    }
}
