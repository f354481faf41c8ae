//! # power-pagerank
//!
//! PageRank centrality by power iteration over a dense, column-stochastic
//! transition matrix.
//!
//! ```rust
//! use power_pagerank::{PowerIterationConfig, PowerIterationSolver, TransitionMatrix};
//!
//! let matrix = TransitionMatrix::from_rows(vec![
//!     vec![0.0, 0.5, 0.0, 0.0],
//!     vec![1.0 / 3.0, 0.0, 0.0, 0.5],
//!     vec![1.0 / 3.0, 0.0, 1.0, 0.5],
//!     vec![1.0 / 3.0, 0.5, 0.0, 0.0],
//! ])?;
//!
//! let solver = PowerIterationSolver::new(PowerIterationConfig::default());
//! let (n, p) = solver.solve(&matrix)?.into_parts();
//! assert_eq!(n, 4);
//! assert!(p[2] > p[0]);
//! # Ok::<(), power_pagerank::PageRankError>(())
//! ```

pub mod error;
pub mod linalg;
pub mod pagerank;
pub mod report;

pub use error::{PageRankError, Result};
pub use linalg::TransitionMatrix;
pub use pagerank::power::pagerank;
pub use pagerank::{
    DeltaRecorder, IterationObserver, NoopObserver, PageRankResult, PowerIterationConfig,
    PowerIterationSolver, SolverState,
};
