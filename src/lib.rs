//! Dense symmetric eigen-decomposition for small fixed-size matrices.
//!
//! Classical two-phase solver: Householder reduction to tridiagonal form
//! followed by implicit-shift QL iteration (the `tred1`/`tred2` and
//! `tql1`/`tql2` lineage of Bowdler, Martin, Reinsch and Wilkinson, Num.
//! Math. 11, 1968). The numerical core has no linear-algebra dependencies
//! and accumulates in `f64` regardless of the caller's element type.
//!
//! The entry point is [`SymmetricEigenAnalysis`]: configure the matrix
//! order once, then decompose any number of matrices from any number of
//! threads. Inputs and outputs go through the small indexable-access
//! traits in [`access`], with adapters for nested `Vec`s, `nalgebra` and
//! `ndarray` containers.
//!
//! ```
//! use symeig::SymmetricEigenAnalysis;
//!
//! let a: Vec<Vec<f64>> = vec![vec![2.0, 1.0], vec![1.0, 2.0]];
//! let mut values = vec![0.0f64; 2];
//! let mut vectors = vec![vec![0.0f64; 2]; 2];
//!
//! let solver = SymmetricEigenAnalysis::new(2);
//! solver
//!     .compute_eigen_values_and_vectors(&a, &mut values, &mut vectors)
//!     .unwrap();
//!
//! assert!((values[0] - 1.0).abs() < 1e-12);
//! assert!((values[1] - 3.0).abs() < 1e-12);
//! ```
//!
//! Failure to converge within the per-eigenvalue iteration budget is
//! reported as a [`NonConvergence`] value carrying the 1-based offending
//! index; already-isolated eigenvalues stay valid in the output.

pub mod access;
pub mod analysis;
pub mod error;
pub mod ql;
pub mod tridiagonal;

pub use access::{Element, MatrixRead, MatrixWrite, VectorWrite};
pub use analysis::SymmetricEigenAnalysis;
pub use error::NonConvergence;
