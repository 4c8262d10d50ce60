// src/tridiagonal.rs

//! Householder reduction of a dense symmetric matrix to tridiagonal form.
//!
//! This is the classical symmetric reduction of Bowdler, Martin, Reinsch and
//! Wilkinson (Handbook for Auto. Comp., Vol. II - Linear Algebra) as carried
//! into EISPACK as `tred1`/`tred2`. Both entry points work on an `n` x `n`
//! scratch matrix that already holds the full symmetric input (the caller
//! mirrors the read triangle); the scratch is destroyed.
//!
//! Per column `i` from `n-1` down to `1`: scale the sub-row to avoid
//! under/overflow, build the Householder vector that annihilates all but one
//! entry of it, and apply the reflector from both sides as a rank-2 symmetric
//! update of the leading principal block. A sub-row with zero scale needs no
//! reflection; its off-diagonal entry is copied out directly.

/// Shared Householder recurrence.
///
/// On return `e[1..]` holds the sub-diagonal and the tridiagonal diagonal
/// sits on the scratch's main diagonal. With `accumulate` set, the reflector
/// vectors are additionally stashed in the scratch's upper columns and `d`
/// holds the per-column `h` quantities, both consumed by the accumulation
/// pass; the values-only path skips that bookkeeping.
fn householder(z: &mut [Vec<f64>], d: &mut [f64], e: &mut [f64], accumulate: bool) {
    let n = d.len();
    for j in 0..n {
        d[j] = z[n - 1][j];
    }

    for i in (1..n).rev() {
        // Scale to avoid under/overflow.
        let mut scale = 0.0;
        let mut h = 0.0;
        for k in 0..i {
            scale += d[k].abs();
        }
        if scale == 0.0 {
            // Sub-row already zero: no reflection for this column.
            e[i] = d[i - 1];
            for j in 0..i {
                d[j] = z[i - 1][j];
                z[i][j] = 0.0;
                z[j][i] = 0.0;
            }
        } else {
            // Generate the Householder vector.
            for k in 0..i {
                d[k] /= scale;
                h += d[k] * d[k];
            }
            let f = d[i - 1];
            let mut g = h.sqrt();
            if f > 0.0 {
                g = -g;
            }
            e[i] = scale * g;
            h -= f * g;
            d[i - 1] = f - g;
            for j in 0..i {
                e[j] = 0.0;
            }

            // Apply the reflector to the leading block from both sides.
            for j in 0..i {
                let f = d[j];
                if accumulate {
                    z[j][i] = f;
                }
                let mut g = e[j] + z[j][j] * f;
                for k in (j + 1)..i {
                    g += z[k][j] * d[k];
                    e[k] += z[k][j] * f;
                }
                e[j] = g;
            }
            let mut f = 0.0;
            for j in 0..i {
                e[j] /= h;
                f += e[j] * d[j];
            }
            let hh = f / (h + h);
            for j in 0..i {
                e[j] -= hh * d[j];
            }
            for j in 0..i {
                let f = d[j];
                let g = e[j];
                for k in j..i {
                    z[k][j] -= f * e[k] + g * d[k];
                }
                d[j] = z[i - 1][j];
                z[i][j] = 0.0;
            }
        }
        d[i] = h;
    }
}

/// Values-only reduction (`tred1` lineage).
///
/// Fills `d` with the tridiagonal diagonal and `e` with the sub-diagonal in
/// its last `n-1` slots (`e[0]` is set to zero). When `e2` is supplied it
/// receives the squares of `e`, a cheap negligibility pre-test for callers
/// that never form eigenvectors; pass `None` when the squares are not
/// needed. The scratch `a` is destroyed.
pub fn reduce(a: &mut [Vec<f64>], d: &mut [f64], e: &mut [f64], e2: Option<&mut [f64]>) {
    let n = d.len();
    if n == 0 {
        return;
    }
    householder(a, d, e, false);
    for i in 0..n {
        d[i] = a[i][i];
    }
    e[0] = 0.0;
    if let Some(e2) = e2 {
        for i in 0..n {
            e2[i] = e[i] * e[i];
        }
    }
}

/// Reduction with accumulation of the orthogonal transform (`tred2` lineage).
///
/// Identical recurrence, but the product of all reflectors is built up in
/// `z`, which on entry holds the mirrored symmetric input and on exit holds
/// the orthogonal matrix relating the input to the tridiagonal form. Feeding
/// that `z` into the QL stage yields eigenvectors of the original matrix.
pub fn reduce_accumulating(z: &mut [Vec<f64>], d: &mut [f64], e: &mut [f64]) {
    let n = d.len();
    if n == 0 {
        return;
    }
    householder(z, d, e, true);

    // Accumulate transformations.
    for i in 0..n.saturating_sub(1) {
        z[n - 1][i] = z[i][i];
        z[i][i] = 1.0;
        let h = d[i + 1];
        if h != 0.0 {
            for k in 0..=i {
                d[k] = z[k][i + 1] / h;
            }
            for j in 0..=i {
                let mut g = 0.0;
                for k in 0..=i {
                    g += z[k][i + 1] * z[k][j];
                }
                for k in 0..=i {
                    z[k][j] -= g * d[k];
                }
            }
        }
        for k in 0..=i {
            z[k][i + 1] = 0.0;
        }
    }
    for j in 0..n {
        d[j] = z[n - 1][j];
        z[n - 1][j] = 0.0;
    }
    z[n - 1][n - 1] = 1.0;
    e[0] = 0.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(rows: &[[f64; 3]; 3]) -> Vec<Vec<f64>> {
        rows.iter().map(|r| r.to_vec()).collect()
    }

    #[test]
    fn both_variants_agree_on_the_tridiagonal() {
        let a = [[4.0, 1.0, -2.0], [1.0, 2.0, 0.0], [-2.0, 0.0, 3.0]];

        let mut scratch = full(&a);
        let mut d1 = vec![0.0; 3];
        let mut e1 = vec![0.0; 3];
        reduce(&mut scratch, &mut d1, &mut e1, None);

        let mut z = full(&a);
        let mut d2 = vec![0.0; 3];
        let mut e2 = vec![0.0; 3];
        reduce_accumulating(&mut z, &mut d2, &mut e2);

        for i in 0..3 {
            assert!((d1[i] - d2[i]).abs() < 1e-12, "diagonal differs at {i}");
            assert!(
                (e1[i].abs() - e2[i].abs()).abs() < 1e-12,
                "sub-diagonal differs at {i}"
            );
        }
        assert_eq!(e1[0], 0.0);
    }

    #[test]
    fn trace_is_preserved() {
        let a = [[5.0, 2.0, 1.0], [2.0, -1.0, 0.5], [1.0, 0.5, 2.0]];
        let mut scratch = full(&a);
        let mut d = vec![0.0; 3];
        let mut e = vec![0.0; 3];
        reduce(&mut scratch, &mut d, &mut e, None);
        let trace: f64 = d.iter().sum();
        assert!((trace - 6.0).abs() < 1e-12);
    }

    #[test]
    fn squared_off_diagonals_when_requested() {
        let a = [[1.0, 2.0, 0.0], [2.0, 1.0, 3.0], [0.0, 3.0, 1.0]];
        let mut scratch = full(&a);
        let mut d = vec![0.0; 3];
        let mut e = vec![0.0; 3];
        let mut e2 = vec![0.0; 3];
        reduce(&mut scratch, &mut d, &mut e, Some(&mut e2));
        for i in 0..3 {
            assert!((e2[i] - e[i] * e[i]).abs() < 1e-14);
        }
    }

    #[test]
    fn values_only_path_needs_no_reflector_bookkeeping() {
        // Mixed zero and nonzero sub-rows exercise both branches of the
        // recurrence; the values-only result must still match the
        // accumulating variant's tridiagonal exactly.
        let a = vec![
            vec![1.0, 0.0, 0.0, 0.0],
            vec![0.0, 2.0, 1.0, 0.5],
            vec![0.0, 1.0, 3.0, 1.0],
            vec![0.0, 0.5, 1.0, 4.0],
        ];

        let mut scratch = a.clone();
        let mut d1 = vec![0.0; 4];
        let mut e1 = vec![0.0; 4];
        reduce(&mut scratch, &mut d1, &mut e1, None);

        let mut z = a.clone();
        let mut d2 = vec![0.0; 4];
        let mut e2 = vec![0.0; 4];
        reduce_accumulating(&mut z, &mut d2, &mut e2);

        for i in 0..4 {
            assert!((d1[i] - d2[i]).abs() < 1e-15, "diagonal differs at {i}");
            assert!(
                (e1[i].abs() - e2[i].abs()).abs() < 1e-15,
                "sub-diagonal differs at {i}"
            );
        }
    }

    #[test]
    fn order_one_matrix_is_untouched() {
        let mut scratch = vec![vec![7.5]];
        let mut d = vec![0.0];
        let mut e = vec![0.0];
        reduce_accumulating(&mut scratch, &mut d, &mut e);
        assert_eq!(d[0], 7.5);
        assert_eq!(e[0], 0.0);
        assert_eq!(scratch[0][0], 1.0);
    }
}
