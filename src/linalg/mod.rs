//! Dense matrix and vector algebra
//!
//! This module provides the dense transition matrix and the handful of
//! vector primitives the power iteration needs.

pub mod matrix;
pub mod vector;

pub use matrix::TransitionMatrix;
