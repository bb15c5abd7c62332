pub(crate) mod lu;

pub use lu::{lu_in_place, lu_solve, DynLu};

use crate::dynmatrix::DimensionMismatch;

/// Errors from linear algebra operations.
///
/// Returned by the LU constructor, `solve`, `inverse`, checked
/// multiplication, and both matrix-exponential entry points.
///
/// ```
/// use padexp::DynMatrix;
/// use padexp::linalg::LinalgError;
///
/// let singular = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
/// assert_eq!(singular.lu().unwrap_err(), LinalgError::Singular);
///
/// let rect = DynMatrix::zeros(2, 3, 0.0_f64);
/// assert!(matches!(padexp::expm(&rect), Err(LinalgError::Shape(_))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    /// Operand is not square, or operand shapes are incompatible.
    Shape(DimensionMismatch),
    /// Matrix is singular or nearly singular.
    Singular,
}

impl LinalgError {
    /// Shape error for an `nrows x ncols` operand that had to be square.
    pub(crate) fn not_square(nrows: usize, ncols: usize) -> Self {
        LinalgError::Shape(DimensionMismatch {
            expected: (nrows, nrows),
            got: (nrows, ncols),
        })
    }
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::Shape(e) => write!(f, "{}", e),
            LinalgError::Singular => write!(f, "matrix is singular"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}
