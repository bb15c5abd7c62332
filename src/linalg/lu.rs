use alloc::vec;
use alloc::vec::Vec;
use num_traits::Zero;

use crate::dynmatrix::{DimensionMismatch, DynMatrix};
use crate::linalg::LinalgError;
use crate::traits::{MatrixMut, MatrixRef, PivotScalar};

/// Perform LU decomposition with partial pivoting, in place.
///
/// On return, `a` contains both L and U packed together:
/// - Upper triangle (including diagonal): U
/// - Lower triangle (excluding diagonal): L (diagonal of L is implicitly 1)
///
/// `perm` is filled with the row permutation indices.
/// Returns `true` if the number of row swaps was even.
///
/// Works for any [`PivotScalar`]: floats pivot on the largest modulus and
/// treat sub-epsilon pivots as singular, exact rationals only reject zero.
pub fn lu_in_place<T: PivotScalar>(
    a: &mut impl MatrixMut<T>,
    perm: &mut [usize],
) -> Result<bool, LinalgError> {
    let n = a.nrows();
    assert_eq!(n, a.ncols(), "LU decomposition requires a square matrix");
    assert_eq!(n, perm.len(), "permutation slice length must match matrix size");

    for (i, p) in perm.iter_mut().enumerate() {
        *p = i;
    }

    let mut even = true;

    for col in 0..n {
        // Partial pivoting: find row with largest magnitude in this column
        let mut max_row = col;
        let mut max_val = a.get(col, col).magnitude();
        for row in (col + 1)..n {
            let val = a.get(row, col).magnitude();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }

        if T::is_negligible(max_val) {
            return Err(LinalgError::Singular);
        }

        if max_row != col {
            perm.swap(col, max_row);
            for j in 0..n {
                let tmp = *a.get(col, j);
                *a.get_mut(col, j) = *a.get(max_row, j);
                *a.get_mut(max_row, j) = tmp;
            }
            even = !even;
        }

        // Column-major dgetf2-style elimination: scale the sub-column by
        // 1/pivot, then a[col+1:n, j] -= a[col, j] * a[col+1:n, col].
        let inv_pivot = T::one() / *a.get(col, col);
        for x in a.col_as_mut_slice(col, col + 1) {
            *x = *x * inv_pivot;
        }

        for j in (col + 1)..n {
            let a_col_j = *a.get(col, j);
            if a_col_j.is_zero() {
                continue;
            }
            for row in (col + 1)..n {
                let l = *a.get(row, col);
                let v = a.get_mut(row, j);
                *v = *v - l * a_col_j;
            }
        }
    }

    Ok(even)
}

/// Solve Ax = b given the packed LU decomposition and permutation.
///
/// `lu` is the packed L/U matrix from `lu_in_place`.
/// `perm` is the row permutation from `lu_in_place`.
/// `b` (input) and `x` (output) are separate slices of length n.
pub fn lu_solve<T: PivotScalar>(lu: &impl MatrixRef<T>, perm: &[usize], b: &[T], x: &mut [T]) {
    let n = lu.nrows();

    // Apply permutation and forward substitution (solve Ly = Pb)
    for i in 0..n {
        let mut sum = b[perm[i]];
        for j in 0..i {
            sum = sum - *lu.get(i, j) * x[j];
        }
        x[i] = sum;
    }

    // Back substitution (solve Ux = y)
    for i in (0..n).rev() {
        let mut sum = x[i];
        for j in (i + 1)..n {
            sum = sum - *lu.get(i, j) * x[j];
        }
        x[i] = sum / *lu.get(i, i);
    }
}

/// LU decomposition of a dynamically-sized square matrix.
///
/// Stores the packed L/U factors and permutation vector.
///
/// # Example
///
/// ```
/// use padexp::DynMatrix;
///
/// let a = DynMatrix::from_rows(2, 2, &[2.0_f64, 1.0, 5.0, 3.0]);
/// let lu = a.lu().unwrap();
///
/// let b = DynMatrix::from_rows(2, 1, &[4.0, 11.0]);
/// let x = lu.solve(&b).unwrap();
/// assert!((x[(0, 0)] - 1.0).abs() < 1e-12);
/// assert!((x[(1, 0)] - 2.0).abs() < 1e-12);
/// assert!((lu.det() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct DynLu<T> {
    lu: DynMatrix<T>,
    perm: Vec<usize>,
    even: bool,
}

impl<T: PivotScalar> DynLu<T> {
    /// Decompose a matrix.
    ///
    /// Returns [`LinalgError::Shape`] if `a` is not square and
    /// [`LinalgError::Singular`] if a pivot vanishes.
    pub fn new(a: &DynMatrix<T>) -> Result<Self, LinalgError> {
        if !a.is_square() {
            return Err(LinalgError::not_square(a.nrows(), a.ncols()));
        }
        let mut lu = a.clone();
        let mut perm = vec![0usize; a.nrows()];
        let even = lu_in_place(&mut lu, &mut perm)?;
        Ok(Self { lu, perm, even })
    }

    /// Dimension of the factored matrix.
    #[inline]
    pub fn dim(&self) -> usize {
        self.lu.nrows()
    }

    /// Solve `A X = B` for `X`, one column of `B` at a time.
    ///
    /// `B` must have as many rows as `A`; any number of columns is accepted.
    pub fn solve(&self, b: &DynMatrix<T>) -> Result<DynMatrix<T>, LinalgError> {
        let n = self.dim();
        if b.nrows() != n {
            return Err(LinalgError::Shape(DimensionMismatch {
                expected: (n, b.ncols()),
                got: b.shape(),
            }));
        }
        let mut x = DynMatrix::zeros(n, b.ncols(), T::zero());
        for col in 0..b.ncols() {
            lu_solve(
                &self.lu,
                &self.perm,
                b.col_as_slice(col, 0),
                x.col_as_mut_slice(col, 0),
            );
        }
        Ok(x)
    }

    /// Compute the matrix inverse.
    pub fn inverse(&self) -> DynMatrix<T> {
        let n = self.dim();
        let mut inv = DynMatrix::zeros(n, n, T::zero());
        let mut e = vec![T::zero(); n];

        for col in 0..n {
            if col > 0 {
                e[col - 1] = T::zero();
            }
            e[col] = T::one();
            lu_solve(&self.lu, &self.perm, &e, inv.col_as_mut_slice(col, 0));
        }

        inv
    }

    /// Compute the determinant.
    pub fn det(&self) -> T {
        let mut d = if self.even {
            T::one()
        } else {
            T::zero() - T::one()
        };
        for i in 0..self.dim() {
            d = d * self.lu[(i, i)];
        }
        d
    }
}

// ── Convenience methods on DynMatrix ────────────────────────────────

impl<T: PivotScalar> DynMatrix<T> {
    /// LU decomposition with partial pivoting.
    pub fn lu(&self) -> Result<DynLu<T>, LinalgError> {
        DynLu::new(self)
    }

    /// Solve `A X = B` for `X` via LU decomposition.
    ///
    /// ```
    /// use padexp::DynMatrix;
    /// let a = DynMatrix::from_rows(2, 2, &[4.0_f64, 7.0, 2.0, 6.0]);
    /// let b = DynMatrix::eye(2, 0.0_f64);
    /// let x = a.solve(&b).unwrap();
    /// let id = &a * &x;
    /// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!(id[(0, 1)].abs() < 1e-12);
    /// ```
    pub fn solve(&self, b: &DynMatrix<T>) -> Result<DynMatrix<T>, LinalgError> {
        self.lu()?.solve(b)
    }

    /// Matrix inverse via LU decomposition.
    pub fn inverse(&self) -> Result<DynMatrix<T>, LinalgError> {
        Ok(self.lu()?.inverse())
    }
}
