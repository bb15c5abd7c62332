use log::trace;

use crate::dynmatrix::DynMatrix;
use crate::traits::Scalar;

/// Lazy, unbounded sequence of matrix powers `I, M, M², M³, …`.
///
/// The first item is the identity (built from the dimension alone), the
/// second is a copy of `M`, and every later item costs one multiplication
/// `previous × M`. From `M²` on, the iterator keeps a copy of the power it
/// just yielded as the left operand of the next step, since the yielded
/// matrix is handed to the caller. The iterator never ends; take as many
/// terms as needed.
///
/// # Example
///
/// ```
/// use padexp::{DynMatrix, MatrixPowers};
///
/// let m = DynMatrix::from_rows(2, 2, &[1.0, 1.0, 0.0, 1.0]);
/// let p: Vec<_> = MatrixPowers::new(&m).take(4).collect();
/// assert_eq!(p[0], DynMatrix::eye(2, 0.0));
/// assert_eq!(p[1], m);
/// assert_eq!(p[3][(0, 1)], 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct MatrixPowers<'a, T> {
    base: &'a DynMatrix<T>,
    current: Option<DynMatrix<T>>,
    step: usize,
}

impl<'a, T: Scalar> MatrixPowers<'a, T> {
    /// Start the sequence at `M⁰ = I`.
    ///
    /// Panics if `base` is not square.
    pub fn new(base: &'a DynMatrix<T>) -> Self {
        assert!(base.is_square(), "matrix powers require a square matrix");
        Self {
            base,
            current: None,
            step: 0,
        }
    }

    /// Exponent of the next power to be yielded.
    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }
}

impl<T: Scalar> Iterator for MatrixPowers<'_, T> {
    type Item = DynMatrix<T>;

    fn next(&mut self) -> Option<DynMatrix<T>> {
        let next = match (self.step, self.current.take()) {
            (0, _) => DynMatrix::eye(self.base.nrows(), T::zero()),
            (1, _) => self.base.clone(),
            (_, Some(prev)) => &prev * self.base,
            // M² multiplies the borrowed base by itself
            (_, None) => self.base * self.base,
        };
        trace!("matrix power {} ({}x{})", self.step, next.nrows(), next.ncols());
        if self.step > 1 {
            self.current = Some(next.clone());
        }
        self.step += 1;
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T: Scalar> DynMatrix<T> {
    /// Lazy iterator over `I, self, self², …`. See [`MatrixPowers`].
    pub fn powers(&self) -> MatrixPowers<'_, T> {
        MatrixPowers::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_two_terms_exact() {
        let m = DynMatrix::from_rows(3, 3, &[0.3, -1.2, 4.0, 2.5, 0.0, 1.0, -7.0, 0.125, 9.0]);
        let mut p = m.powers();
        assert_eq!(p.next().unwrap(), DynMatrix::eye(3, 0.0));
        assert_eq!(p.next().unwrap(), m);
        assert_eq!(p.step(), 2);
    }

    #[test]
    fn matches_repeated_squaring() {
        let m = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        for (k, pk) in m.powers().take(8).enumerate() {
            assert_eq!(pk, m.pow(k as u32), "power {}", k);
        }
    }

    #[test]
    fn nilpotent_vanishes() {
        let m = DynMatrix::from_rows(2, 2, &[0.0, 1.0, 0.0, 0.0]);
        let p: alloc::vec::Vec<_> = m.powers().take(4).collect();
        assert_eq!(p[2], DynMatrix::zeros(2, 2, 0.0));
        assert_eq!(p[3], DynMatrix::zeros(2, 2, 0.0));
    }

    #[test]
    fn only_squares_and_later_are_retained() {
        let m = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let mut p = m.powers();
        p.next();
        p.next();
        assert!(p.current.is_none());
        assert_eq!(p.next().unwrap(), &m * &m);
        assert_eq!(p.current.as_ref(), Some(&(&m * &m)));
        assert_eq!(p.next().unwrap(), m.pow(3));
    }

    #[test]
    fn unbounded() {
        let m = DynMatrix::eye(1, 0.0_f64);
        assert_eq!(m.powers().size_hint(), (usize::MAX, None));
        assert_eq!(m.powers().nth(100).unwrap(), m);
    }

    #[test]
    #[should_panic(expected = "square")]
    fn rectangular_panics() {
        let m = DynMatrix::zeros(2, 3, 0.0_f64);
        let _ = m.powers();
    }
}
