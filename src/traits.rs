use core::fmt::Debug;
use num_traits::{Num, One, Zero};

#[cfg(any(feature = "std", feature = "libm"))]
use num_traits::Float;

#[cfg(feature = "complex")]
use num_complex::Complex;

#[cfg(feature = "rational")]
use num_rational::Ratio;
#[cfg(feature = "rational")]
use num_traits::Signed;

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds. This is the
/// numeric context the exponential is computed in: additive identity
/// (`Zero`), multiplicative identity (`One`), and field arithmetic (`Num`).
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Scalars that Gaussian elimination can pivot on.
///
/// Covers real floats (`f32`, `f64`), complex numbers (`complex` feature),
/// and exact rationals (`rational` feature). Floats treat anything below
/// machine epsilon as zero; rationals only reject an exact zero.
pub trait PivotScalar: Scalar {
    /// Ordered magnitude used to choose the pivot row.
    type Magnitude: PartialOrd + Copy;

    /// Absolute value / modulus.
    fn magnitude(self) -> Self::Magnitude;

    /// Whether a pivot of this magnitude makes the system singular.
    fn is_negligible(m: Self::Magnitude) -> bool;
}

macro_rules! impl_pivot_scalar_float {
    ($($t:ty),*) => {
        $(
            #[cfg(any(feature = "std", feature = "libm"))]
            impl PivotScalar for $t {
                type Magnitude = $t;

                #[inline] fn magnitude(self) -> $t { Float::abs(self) }
                #[inline] fn is_negligible(m: $t) -> bool { m < <$t as Float>::epsilon() }
            }
        )*
    };
}

impl_pivot_scalar_float!(f32, f64);

#[cfg(all(feature = "complex", any(feature = "std", feature = "libm")))]
impl<T: Float + Debug> PivotScalar for Complex<T> {
    type Magnitude = T;

    #[inline]
    fn magnitude(self) -> T {
        self.norm()
    }

    #[inline]
    fn is_negligible(m: T) -> bool {
        m < T::epsilon()
    }
}

macro_rules! impl_pivot_scalar_ratio {
    ($($t:ty),*) => {
        $(
            #[cfg(feature = "rational")]
            impl PivotScalar for Ratio<$t> {
                type Magnitude = Ratio<$t>;

                #[inline]
                fn magnitude(self) -> Ratio<$t> { Signed::abs(&self) }

                #[inline]
                fn is_negligible(m: Ratio<$t>) -> bool { m.is_zero() }
            }
        )*
    };
}

impl_pivot_scalar_ratio!(i32, i64, i128);

/// Read-only access to a matrix-like type.
///
/// Storage is column-major, so a column tail is always a contiguous slice.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;

    /// Contiguous slice `self[row_start..nrows, col]`.
    fn col_as_slice(&self, col: usize, row_start: usize) -> &[T];
}

/// Mutable access to a matrix-like type.
///
/// Extends `MatrixRef` with mutable element access, enabling
/// in-place algorithms (LU) to work generically.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;

    /// Mutable contiguous slice `self[row_start..nrows, col]`.
    fn col_as_mut_slice(&mut self, col: usize, row_start: usize) -> &mut [T];
}
