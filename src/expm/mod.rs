//! Matrix exponential via diagonal Padé approximation.
//!
//! `exp(M) ≈ Q(M)⁻¹ P(M)` where `P(x) = Σ a_j x^j` is the numerator of the
//! (q,q) Padé approximant to `exp(x)` and `Q(x) = P(-x)`. No scaling and
//! squaring is applied, so accuracy degrades as `‖M‖` grows; raise the
//! order through [`ExpmSettings`] if needed.
//!
//! - [`pade_coefficients`] — the `q+1` numerator coefficients
//! - [`MatrixPowers`] — lazy iterator `I, M, M², …`
//! - [`expm`] / [`expm_with`] — single evaluation
//! - [`ExpmFamily`] / [`expm_family`] / [`expm_family_with`] — `t ↦ exp(t·M)` for many `t`,
//!   reusing one set of matrix powers
//!
//! Everything is generic over [`PivotScalar`](crate::traits::PivotScalar),
//! so the same code runs on `f64`, complex numbers, or exact rationals.

mod engine;
mod pade;
mod powers;


pub use engine::{
    expm, expm_family, expm_family_with, expm_with, ExpmFamily, ExpmSettings, DEFAULT_ORDER,
};
pub use pade::pade_coefficients;
pub use powers::MatrixPowers;
