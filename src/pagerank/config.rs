//! Solver configuration.
//!
//! A [`PowerIterationConfig`] carries the damping factor, the convergence
//! tolerance and the fail-fast guards. Every field has a default, so any
//! subset may be given in JSON.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "damping": 0.85,
//!   "tolerance": 1e-6,
//!   "max_iterations": 1000,
//!   "max_duration_ms": 250
//! }
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PageRankError, Result};

/// Default damping factor
pub const DEFAULT_DAMPING: f64 = 0.85;
/// Default L1 convergence tolerance
pub const DEFAULT_TOLERANCE: f64 = 1e-6;
/// Default iteration cap
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Power iteration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PowerIterationConfig {
    /// Probability of following a link rather than teleporting, in (0, 1)
    pub damping: f64,
    /// Convergence threshold on the L1 distance between successive iterates
    pub tolerance: f64,
    /// Iteration cap; reaching it without convergence is an error
    pub max_iterations: usize,
    /// Optional wall-clock limit, checked once per iteration
    pub max_duration_ms: Option<u64>,
}

impl Default for PowerIterationConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_duration_ms: None,
        }
    }
}

impl PowerIterationConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the convergence tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the wall-clock limit
    pub fn with_max_duration(mut self, limit: Duration) -> Self {
        self.max_duration_ms = Some(limit.as_millis().min(u64::MAX as u128) as u64);
        self
    }

    /// Get the wall-clock limit, if any
    pub fn max_duration(&self) -> Option<Duration> {
        self.max_duration_ms.map(Duration::from_millis)
    }

    /// Check that every parameter is in range
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(PageRankError::invalid(format!(
                "damping must be in (0, 1), got {}",
                self.damping
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(PageRankError::invalid(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(PageRankError::invalid("max_iterations must be at least 1"));
        }
        Ok(())
    }
}
