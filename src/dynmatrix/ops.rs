use alloc::vec;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::linalg::LinalgError;
use crate::traits::Scalar;

use super::{DimensionMismatch, DynMatrix};

fn assert_same_shape<T>(a: &DynMatrix<T>, b: &DynMatrix<T>, op: &str) {
    assert_eq!(
        (a.nrows, a.ncols),
        (b.nrows, b.ncols),
        "dimension mismatch: {}x{} {} {}x{}",
        a.nrows,
        a.ncols,
        op,
        b.nrows,
        b.ncols,
    );
}

// ── Element-wise addition / subtraction ─────────────────────────────

impl<T: Scalar> Add<&DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn add(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        assert_same_shape(self, rhs, "+");
        DynMatrix {
            data: self.data.iter().zip(&rhs.data).map(|(&a, &b)| a + b).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Add for DynMatrix<T> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += &rhs;
        self
    }
}

impl<T: Scalar> AddAssign<&DynMatrix<T>> for DynMatrix<T> {
    fn add_assign(&mut self, rhs: &DynMatrix<T>) {
        assert_same_shape(self, rhs, "+=");
        for (a, &b) in self.data.iter_mut().zip(&rhs.data) {
            *a = *a + b;
        }
    }
}

impl<T: Scalar> Sub<&DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn sub(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        assert_same_shape(self, rhs, "-");
        DynMatrix {
            data: self.data.iter().zip(&rhs.data).map(|(&a, &b)| a - b).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Sub for DynMatrix<T> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= &rhs;
        self
    }
}

impl<T: Scalar> SubAssign<&DynMatrix<T>> for DynMatrix<T> {
    fn sub_assign(&mut self, rhs: &DynMatrix<T>) {
        assert_same_shape(self, rhs, "-=");
        for (a, &b) in self.data.iter_mut().zip(&rhs.data) {
            *a = *a - b;
        }
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn neg(self) -> DynMatrix<T> {
        self.map(|x| T::zero() - x)
    }
}

impl<T: Scalar> Neg for DynMatrix<T> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

// ── Matrix multiplication: (M×N) * (N×P) → (M×P) ──────────────────

impl<T: Scalar> Mul<&DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn mul(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        assert_eq!(
            self.ncols, rhs.nrows,
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let m = self.nrows;
        let n = self.ncols;
        let p = rhs.ncols;
        let mut data = vec![T::zero(); m * p];
        // jki loop order: innermost runs down contiguous columns.
        for j in 0..p {
            let out = &mut data[j * m..(j + 1) * m];
            for k in 0..n {
                let b_kj = rhs.data[j * n + k];
                let a_col = &self.data[k * m..(k + 1) * m];
                for (o, &a_ik) in out.iter_mut().zip(a_col) {
                    *o = *o + a_ik * b_kj;
                }
            }
        }
        DynMatrix {
            data,
            nrows: m,
            ncols: p,
        }
    }
}

impl<T: Scalar> Mul for DynMatrix<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

// ── Scalar multiplication: matrix * scalar ──────────────────────────

impl<T: Scalar> Mul<T> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn mul(self, rhs: T) -> DynMatrix<T> {
        self.map(|x| x * rhs)
    }
}

impl<T: Scalar> Mul<T> for DynMatrix<T> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

impl<T: Scalar> MulAssign<T> for DynMatrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x * rhs;
        }
    }
}

// ── scalar * matrix (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_mul_dyn {
    ($($t:ty),*) => {
        $(
            impl Mul<DynMatrix<$t>> for $t {
                type Output = DynMatrix<$t>;
                fn mul(self, rhs: DynMatrix<$t>) -> DynMatrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&DynMatrix<$t>> for $t {
                type Output = DynMatrix<$t>;
                fn mul(self, rhs: &DynMatrix<$t>) -> DynMatrix<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul_dyn!(f32, f64);

// ── Checked and in-place kernels ────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    /// Matrix product that reports a shape mismatch instead of panicking.
    ///
    /// ```
    /// use padexp::DynMatrix;
    /// let a = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let b = DynMatrix::from_rows(2, 1, &[1.0, 1.0]);
    /// let c = a.try_mul(&b).unwrap();
    /// assert_eq!(c[(1, 0)], 7.0);
    /// assert!(b.try_mul(&a).is_err());
    /// ```
    pub fn try_mul(&self, rhs: &Self) -> Result<Self, LinalgError> {
        if self.ncols != rhs.nrows {
            return Err(LinalgError::Shape(DimensionMismatch {
                expected: (self.ncols, rhs.ncols),
                got: (rhs.nrows, rhs.ncols),
            }));
        }
        Ok(self * rhs)
    }

    /// In-place scaled accumulation: `self += alpha * b`.
    ///
    /// Panics if the shapes differ.
    ///
    /// ```
    /// use padexp::DynMatrix;
    /// let mut acc = DynMatrix::zeros(2, 2, 0.0_f64);
    /// let id = DynMatrix::eye(2, 0.0_f64);
    /// acc.combine_inplace(&id, 3.0);
    /// acc.combine_inplace(&id, -0.5);
    /// assert_eq!(acc[(0, 0)], 2.5);
    /// assert_eq!(acc[(0, 1)], 0.0);
    /// ```
    pub fn combine_inplace(&mut self, b: &Self, alpha: T) {
        assert_same_shape(self, b, "+= alpha *");
        for (a, &x) in self.data.iter_mut().zip(&b.data) {
            *a = *a + alpha * x;
        }
    }

    /// Transpose: (M×N) → (N×M).
    ///
    /// ```
    /// use padexp::DynMatrix;
    /// let a = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let t = a.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t[(2, 1)], 6.0);
    /// ```
    pub fn transpose(&self) -> Self {
        DynMatrix::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)])
    }
}
