// src/analysis.rs

//! Public entry point for the dense symmetric eigenproblem.
//!
//! [`SymmetricEigenAnalysis`] owns only configuration (matrix dimension,
//! processed order, eigenvalue ordering policy). Every call allocates its own
//! scratch, so one instance may be shared across threads and reused for any
//! number of independent matrices; the entry points take `&self` and the
//! configuration setters take `&mut self`, which makes concurrent
//! reconfiguration impossible rather than merely discouraged.
//!
//! No size or symmetry validation is performed. The input is treated as the
//! symmetric matrix defined by its lower triangle; the upper triangle is
//! never read and the caller's matrix is never mutated. `order` must not
//! exceed the actual extent of the input, and the output containers must
//! provide at least `order` (respectively `order` x `order`) writable slots.

use crate::access::{MatrixRead, MatrixWrite, VectorWrite};
use crate::error::NonConvergence;
use crate::{ql, tridiagonal};

/// Eigenvalue and eigenvector solver for dense real symmetric matrices.
///
/// A thread-safe alternative to pulling in a full linear-algebra backend for
/// small fixed-size matrices that are decomposed many times with different
/// coefficients. Operates on anything implementing the [`crate::access`]
/// traits.
#[derive(Debug, Clone)]
pub struct SymmetricEigenAnalysis {
    dimension: usize,
    order: usize,
    order_eigen_values: bool,
}

impl Default for SymmetricEigenAnalysis {
    fn default() -> Self {
        SymmetricEigenAnalysis {
            dimension: 0,
            order: 0,
            order_eigen_values: true,
        }
    }
}

impl SymmetricEigenAnalysis {
    /// Solver for `dimension` x `dimension` matrices, ascending eigenvalue
    /// ordering enabled.
    pub fn new(dimension: usize) -> Self {
        SymmetricEigenAnalysis {
            dimension,
            order: dimension,
            order_eigen_values: true,
        }
    }

    /// Declared size of the input matrix. Also sets the order if the order
    /// was never set explicitly.
    pub fn set_dimension(&mut self, n: usize) {
        self.dimension = n;
        if self.order == 0 {
            self.order = n;
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Restrict processing to the leading `n` x `n` principal submatrix of a
    /// larger declared matrix. Must not exceed the dimension.
    pub fn set_order(&mut self, n: usize) {
        self.order = n;
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Toggle the ascending sort of eigenvalues (and the synchronized
    /// permutation of eigenvectors). Enabled by default; when disabled the
    /// QL convergence order is returned as-is.
    pub fn set_order_eigen_values(&mut self, order: bool) {
        self.order_eigen_values = order;
    }

    pub fn order_eigen_values(&self) -> bool {
        self.order_eigen_values
    }

    /// Compute the eigenvalues of `a`, writing them to `eigen_values`.
    ///
    /// On [`NonConvergence`] the outputs are still written: eigenvalues at
    /// indices below the reported one are valid, the rest are left in their
    /// partially-processed state, and the ascending sort is skipped.
    pub fn compute_eigen_values<M, V>(
        &self,
        a: &M,
        eigen_values: &mut V,
    ) -> Result<(), NonConvergence>
    where
        M: MatrixRead + ?Sized,
        V: VectorWrite,
    {
        let n = self.order;
        let mut scratch = mirror_lower_triangle(a, n);
        let mut d = vec![0.0; n];
        let mut e = vec![0.0; n];

        tridiagonal::reduce(&mut scratch, &mut d, &mut e, None);
        let status = ql::solve_values(&mut d, &mut e);
        if status.is_ok() && self.order_eigen_values {
            ql::sort_ascending(&mut d, None);
        }
        for (i, &value) in d.iter().enumerate() {
            eigen_values.set(i, value);
        }
        status
    }

    /// Compute the eigenvalues and orthonormal eigenvectors of `a`.
    ///
    /// Row `j` of `eigen_vectors` receives the unit eigenvector paired with
    /// `eigen_values[j]`. Partial-state behavior on [`NonConvergence`]
    /// matches [`Self::compute_eigen_values`].
    pub fn compute_eigen_values_and_vectors<M, V, E>(
        &self,
        a: &M,
        eigen_values: &mut V,
        eigen_vectors: &mut E,
    ) -> Result<(), NonConvergence>
    where
        M: MatrixRead + ?Sized,
        V: VectorWrite,
        E: MatrixWrite,
    {
        let n = self.order;
        let mut z = mirror_lower_triangle(a, n);
        let mut d = vec![0.0; n];
        let mut e = vec![0.0; n];

        tridiagonal::reduce_accumulating(&mut z, &mut d, &mut e);
        let status = ql::solve_values_and_vectors(&mut d, &mut e, &mut z);
        if status.is_ok() && self.order_eigen_values {
            ql::sort_ascending(&mut d, Some(&mut z));
        }
        for (i, &value) in d.iter().enumerate() {
            eigen_values.set(i, value);
        }
        // Internal columns become output rows.
        for j in 0..n {
            for (k, row) in z.iter().enumerate() {
                eigen_vectors.set(j, k, row[j]);
            }
        }
        status
    }
}

/// Build the full symmetric working copy from the lower triangle of `a`.
fn mirror_lower_triangle<M: MatrixRead + ?Sized>(a: &M, n: usize) -> Vec<Vec<f64>> {
    let mut scratch = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..=i {
            let value = a.get(i, j);
            scratch[i][j] = value;
            scratch[j][i] = value;
        }
    }
    scratch
}
