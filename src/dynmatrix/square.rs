use crate::traits::Scalar;

use super::DynMatrix;

impl<T: Scalar> DynMatrix<T> {
    /// Integer matrix power via repeated squaring.
    ///
    /// `pow(0)` returns the identity matrix. Panics if not square.
    ///
    /// ```
    /// use padexp::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[1.0, 1.0, 0.0, 1.0]);
    /// let m3 = m.pow(3);
    /// assert_eq!(m3[(0, 1)], 3.0);
    /// ```
    pub fn pow(&self, mut n: u32) -> Self {
        assert!(self.is_square(), "pow requires a square matrix");
        let mut result = Self::eye(self.nrows, T::zero());
        let mut base = self.clone();
        while n > 0 {
            if n & 1 == 1 {
                result = &result * &base;
            }
            n >>= 1;
            if n > 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// Sum of diagonal elements.
    ///
    /// ```
    /// use padexp::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.trace(), 5.0);
    /// ```
    pub fn trace(&self) -> T {
        let n = self.nrows.min(self.ncols);
        let mut sum = T::zero();
        for i in 0..n {
            sum = sum + self[(i, i)];
        }
        sum
    }
}
