//! Pre-defined type aliases for common `DynMatrix` element types.

use super::DynMatrix;

/// Dynamic matrix with `f32` elements.
pub type DynMatrixf32 = DynMatrix<f32>;
/// Dynamic matrix with `f64` elements.
pub type DynMatrixf64 = DynMatrix<f64>;

// ── Complex aliases (behind `complex` feature) ──────────────────────

/// Dynamic matrix with `Complex<f32>` elements.
#[cfg(feature = "complex")]
pub type DynMatrixz32 = DynMatrix<num_complex::Complex<f32>>;
/// Dynamic matrix with `Complex<f64>` elements.
#[cfg(feature = "complex")]
pub type DynMatrixz64 = DynMatrix<num_complex::Complex<f64>>;

// ── Rational aliases (behind `rational` feature) ────────────────────

/// Dynamic matrix with exact `Ratio<i64>` elements.
#[cfg(feature = "rational")]
pub type DynMatrixq64 = DynMatrix<num_rational::Rational64>;
