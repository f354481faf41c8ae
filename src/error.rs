//! Error types for matrix construction, configuration and solving.

use thiserror::Error;

/// Errors surfaced by the solver and its collaborators.
#[derive(Debug, Error)]
pub enum PageRankError {
    /// Malformed matrix shape or values, or an out-of-range configuration value.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input
        reason: String,
    },

    /// The iteration cap was reached, or the iterates diverged, before the
    /// L1 delta met the tolerance.
    #[error("power iteration did not converge after {iterations} iterations (delta: {delta})")]
    DidNotConverge {
        /// Number of iterations performed
        iterations: usize,
        /// L1 delta of the last iteration
        delta: f64,
    },

    /// The configured time limit elapsed before convergence.
    #[error("power iteration exceeded its time limit after {iterations} iterations (delta: {delta})")]
    DeadlineExceeded {
        /// Number of iterations performed
        iterations: usize,
        /// L1 delta of the last iteration
        delta: f64,
    },

    /// Configuration or matrix JSON could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Writing a report failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl PageRankError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Returns `true` for failures caused by the input rather than by the
    /// iteration itself.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, PageRankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = PageRankError::invalid("matrix is not square");
        assert_eq!(err.to_string(), "invalid input: matrix is not square");

        let err = PageRankError::DidNotConverge {
            iterations: 1000,
            delta: 0.5,
        };
        assert!(err.to_string().contains("1000 iterations"));
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_from_serde_json() {
        let parse: std::result::Result<Vec<f64>, _> = serde_json::from_str("[1.0,");
        let err: PageRankError = parse.unwrap_err().into();
        assert!(matches!(err, PageRankError::Config(_)));
    }
}
