use alloc::vec::Vec;

use log::debug;

use crate::dynmatrix::DynMatrix;
use crate::linalg::LinalgError;
use crate::traits::PivotScalar;

use super::pade::pade_coefficients;
use super::powers::MatrixPowers;

/// Padé order used by [`expm`] and [`expm_family`].
pub const DEFAULT_ORDER: usize = 7;

/// Settings for the Padé matrix exponential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpmSettings {
    /// Degree q of both numerator and denominator of the (q,q) approximant.
    ///
    /// Order 0 is accepted and yields the identity for every input.
    pub order: usize,
}

impl Default for ExpmSettings {
    fn default() -> Self {
        Self {
            order: DEFAULT_ORDER,
        }
    }
}

/// Numerator and denominator sums of one Padé evaluation.
struct PadeSums<T> {
    num: DynMatrix<T>,
    den: DynMatrix<T>,
    positive: bool,
}

impl<T: PivotScalar> PadeSums<T> {
    fn new(n: usize) -> Self {
        Self {
            num: DynMatrix::zeros(n, n, T::zero()),
            den: DynMatrix::zeros(n, n, T::zero()),
            positive: true,
        }
    }

    /// `num += c·P`, `den += ±c·P`; the denominator sign alternates per term.
    fn add_term(&mut self, power: &DynMatrix<T>, c: T) {
        self.num.combine_inplace(power, c);
        let signed = if self.positive { c } else { T::zero() - c };
        self.den.combine_inplace(power, signed);
        self.positive = !self.positive;
    }

    /// Solve `den · X = num`.
    fn finish(self) -> Result<DynMatrix<T>, LinalgError> {
        self.den.solve(&self.num).map_err(|e| {
            debug!("Padé denominator solve failed: {}", e);
            e
        })
    }
}

fn square_dim<T>(m: &DynMatrix<T>) -> Result<usize, LinalgError> {
    if !m.is_square() {
        return Err(LinalgError::not_square(m.nrows(), m.ncols()));
    }
    Ok(m.nrows())
}

/// Matrix exponential `exp(M)` using the diagonal Padé approximant of
/// order [`DEFAULT_ORDER`].
///
/// # Errors
///
/// Returns [`LinalgError::Shape`] if `m` is not square and
/// [`LinalgError::Singular`] if the Padé denominator cannot be inverted.
///
/// # Example
///
/// ```
/// use padexp::{expm, DynMatrix};
///
/// let m = DynMatrix::from_rows(2, 2, &[0.0_f64, 1.0, 0.0, 0.0]);
/// let e = expm(&m).unwrap();
/// assert!((e[(0, 1)] - 1.0).abs() < 1e-14);
/// assert!((e[(1, 1)] - 1.0).abs() < 1e-14);
/// ```
pub fn expm<T: PivotScalar>(m: &DynMatrix<T>) -> Result<DynMatrix<T>, LinalgError> {
    expm_with(m, &ExpmSettings::default())
}

/// Matrix exponential with explicit [`ExpmSettings`].
///
/// Accumulates `N = Σ a_j M^j` and `D = Σ (-1)^j a_j M^j` over
/// `j = 0..=order`, then returns the solution of `D X = N`.
pub fn expm_with<T: PivotScalar>(
    m: &DynMatrix<T>,
    settings: &ExpmSettings,
) -> Result<DynMatrix<T>, LinalgError> {
    let n = square_dim(m)?;
    debug!("expm: {}x{} matrix, Padé order {}", n, n, settings.order);

    let coeffs = pade_coefficients::<T>(settings.order);
    let mut sums = PadeSums::new(n);
    // Coefficients drive the zip so exactly order+1 powers are generated.
    for (&a, power) in coeffs.iter().zip(MatrixPowers::new(m)) {
        sums.add_term(&power, a);
    }
    sums.finish()
}

/// Reusable evaluator of `t ↦ exp(t·M)` for a fixed matrix `M`.
///
/// Construction computes the Padé coefficients and the powers
/// `I, M, …, M^q` once. Each [`eval`](Self::eval) then only scales and
/// adds those powers (using `(tM)^j = t^j M^j`) before one linear solve,
/// with no further matrix multiplications.
///
/// `eval` takes `&self`, so a family can be shared between threads when
/// `T` is `Send + Sync`; every call owns its own accumulators.
///
/// # Example
///
/// ```
/// use padexp::{DynMatrix, ExpmFamily, ExpmSettings};
///
/// let m = DynMatrix::from_rows(2, 2, &[0.0_f64, -1.0, 1.0, 0.0]);
/// let family = ExpmFamily::new(&m, &ExpmSettings::default()).unwrap();
///
/// // exp(t·M) is a rotation by t
/// let r = family.eval(core::f64::consts::FRAC_PI_2).unwrap();
/// assert!(r[(0, 0)].abs() < 1e-6);
/// assert!((r[(1, 0)] - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct ExpmFamily<T> {
    terms: Vec<(DynMatrix<T>, T)>,
    dim: usize,
}

impl<T: PivotScalar> ExpmFamily<T> {
    /// Precompute `(M^j, a_j)` for `j = 0..=settings.order`.
    ///
    /// Returns [`LinalgError::Shape`] if `m` is not square.
    pub fn new(m: &DynMatrix<T>, settings: &ExpmSettings) -> Result<Self, LinalgError> {
        let dim = square_dim(m)?;
        debug!(
            "expm family: {}x{} matrix, Padé order {}",
            dim, dim, settings.order
        );
        let coeffs = pade_coefficients::<T>(settings.order);
        let terms = coeffs
            .into_iter()
            .zip(MatrixPowers::new(m))
            .map(|(a, power)| (power, a))
            .collect();
        Ok(Self { terms, dim })
    }

    /// `exp(t·M)`.
    ///
    /// Returns [`LinalgError::Singular`] if the Padé denominator for this
    /// `t` cannot be inverted.
    pub fn eval(&self, t: T) -> Result<DynMatrix<T>, LinalgError> {
        let mut sums = PadeSums::new(self.dim);
        // k = t^j, advanced only when a term needs it so exact fixed-width
        // scalars never form the unused t^(q+1)
        let mut k = T::one();
        for (j, (power, a)) in self.terms.iter().enumerate() {
            if j > 0 {
                k = k * t;
            }
            sums.add_term(power, *a * k);
        }
        sums.finish()
    }

    /// Padé order the family was built with.
    #[inline]
    pub fn order(&self) -> usize {
        self.terms.len() - 1
    }

    /// Dimension n of the n×n base matrix.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }
}

/// Closure form of [`ExpmFamily`] with the default order: returns
/// `f` with `f(t) = exp(t·M)`.
///
/// # Example
///
/// ```
/// use padexp::{expm, expm_family, DynMatrix};
///
/// let m = DynMatrix::from_rows(2, 2, &[-1.0_f64, 0.5, 0.0, -2.0]);
/// let f = expm_family(&m).unwrap();
/// let e1 = f(1.0).unwrap();
/// let direct = expm(&m).unwrap();
/// assert!((e1[(0, 1)] - direct[(0, 1)]).abs() < 1e-14);
/// ```
pub fn expm_family<T: PivotScalar>(
    m: &DynMatrix<T>,
) -> Result<impl Fn(T) -> Result<DynMatrix<T>, LinalgError>, LinalgError> {
    expm_family_with(m, &ExpmSettings::default())
}

/// Closure form of [`ExpmFamily`] with explicit [`ExpmSettings`].
///
/// ```
/// use padexp::{expm_family_with, expm_with, DynMatrix, ExpmSettings};
///
/// let m = DynMatrix::from_rows(1, 1, &[0.5_f64]);
/// let settings = ExpmSettings { order: 3 };
/// let f = expm_family_with(&m, &settings).unwrap();
/// let direct = expm_with(&m, &settings).unwrap();
/// assert_eq!(f(1.0).unwrap(), direct);
/// ```
pub fn expm_family_with<T: PivotScalar>(
    m: &DynMatrix<T>,
    settings: &ExpmSettings,
) -> Result<impl Fn(T) -> Result<DynMatrix<T>, LinalgError>, LinalgError> {
    let family = ExpmFamily::new(m, settings)?;
    Ok(move |t| family.eval(t))
}

// ── Convenience methods on DynMatrix ────────────────────────────────

impl<T: PivotScalar> DynMatrix<T> {
    /// Matrix exponential with the default Padé order. See [`expm`].
    pub fn expm(&self) -> Result<DynMatrix<T>, LinalgError> {
        expm(self)
    }

    /// Precomputed `t ↦ exp(t·self)` evaluator. See [`ExpmFamily`].
    pub fn expm_family(&self) -> Result<ExpmFamily<T>, LinalgError> {
        ExpmFamily::new(self, &ExpmSettings::default())
    }
}
