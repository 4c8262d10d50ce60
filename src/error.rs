// src/error.rs

//! Error type for the QL iteration.

use thiserror::Error;

/// The QL iteration failed to isolate an eigenvalue within its iteration
/// budget.
///
/// `index` is the 1-based position of the offending eigenvalue, matching the
/// classical EISPACK return convention. Eigenvalues at lower indices were
/// already isolated and remain valid in the output; the rest are left in
/// their partially-processed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("eigenvalue {index} failed to converge after {iterations} QL iterations")]
pub struct NonConvergence {
    /// 1-based index of the first eigenvalue that did not converge.
    pub index: usize,
    /// The iteration budget that was exhausted.
    pub iterations: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_index_and_budget() {
        let err = NonConvergence {
            index: 3,
            iterations: 30,
        };
        assert_eq!(
            err.to_string(),
            "eigenvalue 3 failed to converge after 30 QL iterations"
        );
    }
}
