// src/ql.rs

//! Implicit-shift QL iteration for symmetric tridiagonal matrices.
//!
//! Translation of the Algol `tql1`/`tql2` procedures of Bowdler, Martin,
//! Reinsch and Wilkinson (Handbook for Auto. Comp., Vol. II - Linear
//! Algebra) and their EISPACK descendants. Eigenvalues converge one at a
//! time: for each index `l`, off-diagonal entries are tested for
//! negligibility against the running matrix magnitude at machine epsilon,
//! and while the block is not deflated a Wilkinson shift is formed from
//! the trailing 2x2 and chased through it as a sequence of plane rotations
//! applied without forming the shifted matrix.
//!
//! The vector variant additionally applies each rotation to a pair of
//! columns of `z`, so `z` stays orthonormal and tracks the evolving
//! eigen-basis at every iteration.

use crate::error::NonConvergence;

/// Iteration budget per eigenvalue, values-only path (`tql1` practice).
pub const MAX_ITERATIONS_VALUES: usize = 30;

/// Iteration budget per eigenvalue, values-and-vectors path (`tql2`
/// practice).
pub const MAX_ITERATIONS_VECTORS: usize = 1000;

/// Eigenvalues of the tridiagonal matrix given by diagonal `d` and
/// sub-diagonal `e` (`e[0]` arbitrary). On success `d` holds the
/// eigenvalues, unordered; `e` is destroyed.
pub fn solve_values(d: &mut [f64], e: &mut [f64]) -> Result<(), NonConvergence> {
    ql_iterate(d, e, None, MAX_ITERATIONS_VALUES)
}

/// Eigenvalues and eigenvectors of the tridiagonal matrix.
///
/// `z` must hold the identity (for eigenvectors of the tridiagonal matrix
/// itself) or the accumulated reduction transform (for eigenvectors of the
/// matrix that was reduced). On success column `j` of `z` is the
/// orthonormal eigenvector paired with `d[j]`.
pub fn solve_values_and_vectors(
    d: &mut [f64],
    e: &mut [f64],
    z: &mut [Vec<f64>],
) -> Result<(), NonConvergence> {
    ql_iterate(d, e, Some(z), MAX_ITERATIONS_VECTORS)
}

fn ql_iterate(
    d: &mut [f64],
    e: &mut [f64],
    mut z: Option<&mut [Vec<f64>]>,
    max_iterations: usize,
) -> Result<(), NonConvergence> {
    let n = d.len();
    if n == 0 {
        return Ok(());
    }

    // Renumber so e[i] couples d[i] and d[i+1].
    for i in 1..n {
        e[i - 1] = e[i];
    }
    e[n - 1] = 0.0;

    let mut f = 0.0;
    let mut tst1 = 0.0_f64;
    for l in 0..n {
        // Find a negligible sub-diagonal element.
        tst1 = tst1.max(d[l].abs() + e[l].abs());
        let mut m = l;
        while m < n {
            if e[m].abs() <= f64::EPSILON * tst1 {
                break;
            }
            m += 1;
        }

        // If m == l, d[l] is already an eigenvalue; otherwise iterate.
        if m > l {
            let mut iterations = 0;
            loop {
                if iterations == max_iterations {
                    return Err(NonConvergence {
                        index: l + 1,
                        iterations: max_iterations,
                    });
                }
                iterations += 1;

                // Implicit shift from the trailing 2x2 block.
                let g = d[l];
                let mut p = (d[l + 1] - g) / (2.0 * e[l]);
                let mut r = p.hypot(1.0);
                if p < 0.0 {
                    r = -r;
                }
                d[l] = e[l] / (p + r);
                d[l + 1] = e[l] * (p + r);
                let dl1 = d[l + 1];
                let mut h = g - d[l];
                for i in (l + 2)..n {
                    d[i] -= h;
                }
                f += h;

                // Chase the shift up the block with plane rotations.
                p = d[m];
                let mut c = 1.0;
                let mut c2 = c;
                let mut c3 = c;
                let el1 = e[l + 1];
                let mut s = 0.0;
                let mut s2 = 0.0;
                for i in (l..m).rev() {
                    c3 = c2;
                    c2 = c;
                    s2 = s;
                    let g = c * e[i];
                    h = c * p;
                    r = p.hypot(e[i]);
                    e[i + 1] = s * r;
                    s = e[i] / r;
                    c = p / r;
                    p = c * d[i] - s * g;
                    d[i + 1] = h + s * (c * g + s * d[i]);

                    if let Some(z) = z.as_deref_mut() {
                        for row in z.iter_mut() {
                            let h = row[i + 1];
                            row[i + 1] = s * row[i] + c * h;
                            row[i] = c * row[i] - s * h;
                        }
                    }
                }
                p = -s * s2 * c3 * el1 * e[l] / dl1;
                e[l] = s * p;
                d[l] = c * p;

                if e[l].abs() <= f64::EPSILON * tst1 {
                    break;
                }
            }
        }
        d[l] += f;
        e[l] = 0.0;
    }

    Ok(())
}

/// In-place ascending selection sort of `d`, swapping whole columns of `z`
/// in lockstep so eigenvalue/eigenvector pairing by index is preserved.
///
/// Selection sort is deliberate: `n` is small and each exchange moves a
/// full column, so the number of swaps is what matters here.
pub fn sort_ascending(d: &mut [f64], mut z: Option<&mut [Vec<f64>]>) {
    let n = d.len();
    for i in 0..n.saturating_sub(1) {
        let mut k = i;
        let mut p = d[i];
        for j in (i + 1)..n {
            if d[j] < p {
                k = j;
                p = d[j];
            }
        }
        if k != i {
            d[k] = d[i];
            d[i] = p;
            if let Some(z) = z.as_deref_mut() {
                for row in z.iter_mut() {
                    row.swap(i, k);
                }
            }
        }
    }
}
