//! Dense LU solver with scaled partial pivoting.
//!
//! Solves A·x = b for square A by Gaussian elimination with row-scaled
//! partial pivoting, generic over the scalar type and over the matrix
//! storage layout. The decomposer overwrites the matrix in place with the
//! combined L/U factors and returns a row permutation; the substitution
//! step reads the factored matrix through that permutation. Physical rows
//! are never moved.
//!
//! Storage is abstracted behind the [`MatrixMut`] view trait, implemented
//! for a flat row-major buffer ([`FlatView`]), a jagged vector-of-rows
//! ([`RowsView`]), and [`nalgebra::DMatrix`], so the algorithm is written
//! once and copies nothing.

mod dense;
mod storage;
mod traits;

pub use dense::{ludecomp, lusolve, solve, solve_flat, solve_in_place, solve_matrix, Dense};
pub use storage::{FlatView, RowsView};
pub use traits::{Element, MatrixMut};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Matrix and vector dimensions are inconsistent. Detected before any
    /// computation; the inputs are untouched.
    #[error("size mismatch: expected {expected} elements, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A singular matrix was encountered during LU factorization (at
    /// elimination step `step`). The matrix buffer is left partially
    /// factored and must not be reused without re-initializing.
    #[error("singular matrix encountered during LU factorization (step {step})")]
    SingularMatrix { step: usize },
}
