//! # padexp
//!
//! Matrix exponential by diagonal (q,q) Padé approximation, generic over the
//! scalar field. Pure Rust, `no_std` + `alloc` compatible.
//!
//! ## Quick start
//!
//! ```
//! use padexp::{expm, DynMatrix};
//!
//! // exp of a rotation generator is a rotation
//! let m = DynMatrix::from_rows(2, 2, &[0.0_f64, -1.0, 1.0, 0.0]);
//! let r = expm(&m).unwrap();
//! assert!((r[(0, 0)] - 1.0_f64.cos()).abs() < 1e-12);
//! assert!((r[(1, 0)] - 1.0_f64.sin()).abs() < 1e-12);
//! ```
//!
//! Many values of `t` for the same matrix:
//!
//! ```
//! use padexp::{DynMatrix, ExpmFamily, ExpmSettings};
//!
//! let m = DynMatrix::from_rows(2, 2, &[-1.0_f64, 0.3, 0.0, -0.5]);
//! let family = ExpmFamily::new(&m, &ExpmSettings::default()).unwrap();
//! let trajectory: Vec<_> = (0..10)
//!     .map(|i| family.eval(0.1 * i as f64).unwrap())
//!     .collect();
//! assert_eq!(trajectory[0], DynMatrix::eye(2, 0.0));
//! ```
//!
//! ## Modules
//!
//! - [`expm`](mod@expm) — Padé coefficients, the lazy [`MatrixPowers`] iterator, and
//!   the two entry points: [`expm()`] for a single evaluation and
//!   [`ExpmFamily`] / [`expm_family`] for `t ↦ exp(t·M)`.
//!
//! - [`dynmatrix`] — Heap-allocated `DynMatrix<T>` with runtime dimensions.
//!   Column-major `Vec<T>` storage. Arithmetic operators, checked
//!   multiplication, in-place scaled accumulation, integer powers.
//!
//! - [`linalg`] — LU decomposition with partial pivoting ([`DynLu`]),
//!   `solve` for matrix right-hand sides, `inverse`, `det`, and
//!   [`LinalgError`].
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`PivotScalar`] — scalars Gaussian elimination can pivot on (floats,
//!     complex, exact rationals)
//!   - [`MatrixRef`] / [`MatrixMut`] — generic read/write access for the LU routines
//!
//! ## Exact arithmetic
//!
//! With the `rational` feature, `Ratio<i64>` (and `i32`, `i128`) matrices
//! go through exactly the same code. Coefficients, powers, and the solve are
//! then exact, so e.g. the order-2 exponential of a nilpotent matrix is
//! reproduced without rounding.
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade: `debug!`
//! for each exponential set up and for failed denominator solves, `trace!`
//! per generated matrix power. Install any logger to see them.
//!
//! ## Cargo features
//!
//! | Feature    | Default  | Description |
//! |------------|----------|-------------|
//! | `std`      | yes      | Implies `alloc`. Enables `num-traits/std` and the `std::error::Error` impl for `LinalgError` |
//! | `alloc`    | via std  | `DynMatrix` and everything built on it |
//! | `libm`     | no       | Pure-Rust software float fallback for `no_std` |
//! | `complex`  | no       | `Complex<f32>` / `Complex<f64>` support via `num-complex` |
//! | `rational` | no       | Exact `Ratio<i32/i64/i128>` support via `num-rational` |
//! | `all`      | no       | All features: `std` + `complex` + `rational` |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod dynmatrix;
#[cfg(feature = "alloc")]
pub mod expm;
#[cfg(feature = "alloc")]
pub mod linalg;
pub mod traits;

#[cfg(feature = "alloc")]
pub use dynmatrix::{DynMatrix, DynMatrixf32, DynMatrixf64};
#[cfg(all(feature = "alloc", feature = "complex"))]
pub use dynmatrix::{DynMatrixz32, DynMatrixz64};
#[cfg(all(feature = "alloc", feature = "rational"))]
pub use dynmatrix::DynMatrixq64;
#[cfg(feature = "alloc")]
pub use expm::{
    expm, expm_family, expm_family_with, expm_with, pade_coefficients, ExpmFamily, ExpmSettings,
    MatrixPowers,
};
#[cfg(feature = "alloc")]
pub use linalg::{DynLu, LinalgError};
pub use traits::{MatrixMut, MatrixRef, PivotScalar, Scalar};

#[cfg(feature = "complex")]
pub use num_complex::Complex;
#[cfg(feature = "rational")]
pub use num_rational::Ratio;
