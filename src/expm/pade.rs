use alloc::vec::Vec;

use crate::traits::Scalar;

/// Lift a non-negative integer into `T` by binary expansion of `T::one()`.
///
/// Only ring operations are used, so exact scalar types stay exact.
pub(crate) fn from_count<T: Scalar>(mut k: usize) -> T {
    let mut acc = T::zero();
    let mut unit = T::one();
    while k > 0 {
        if k & 1 == 1 {
            acc = acc + unit;
        }
        k >>= 1;
        if k > 0 {
            unit = unit + unit;
        }
    }
    acc
}

/// Numerator coefficients `a_0 … a_q` of the diagonal (q,q) Padé
/// approximant to `exp(x)`.
///
/// The denominator uses the same coefficients with alternating signs,
/// `Q(x) = P(-x)`. Built incrementally as
/// `a_j = a_{j-1} · (q - j + 1) / (2q - j + 1) / j`, which equals
/// `(2q-j)! q! / ((2q)! j! (q-j)!)` without forming any factorial.
/// All arithmetic is done in `T`, so rationals give exact coefficients.
///
/// # Example
///
/// ```
/// use padexp::pade_coefficients;
///
/// let a: Vec<f64> = pade_coefficients(2);
/// assert_eq!(a.len(), 3);
/// assert_eq!(a[0], 1.0);
/// assert_eq!(a[1], 0.5);
/// assert!((a[2] - 1.0 / 12.0).abs() < 1e-15);
/// ```
pub fn pade_coefficients<T: Scalar>(q: usize) -> Vec<T> {
    let mut coeffs = Vec::with_capacity(q + 1);
    let mut a = T::one();
    coeffs.push(a);
    for j in 1..=q {
        a = a * from_count::<T>(q - j + 1) / from_count::<T>(2 * q - j + 1) / from_count::<T>(j);
        coeffs.push(a);
    }
    coeffs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factorial(n: u64) -> f64 {
        (1..=n).map(|k| k as f64).product()
    }

    fn closed_form(q: usize, j: usize) -> f64 {
        let (q, j) = (q as u64, j as u64);
        factorial(2 * q - j) * factorial(q) / (factorial(2 * q) * factorial(j) * factorial(q - j))
    }

    #[test]
    fn from_count_small() {
        for k in 0..40 {
            assert_eq!(from_count::<f64>(k), k as f64);
            assert_eq!(from_count::<i64>(k), k as i64);
        }
    }

    #[test]
    fn order_zero() {
        assert_eq!(pade_coefficients::<f64>(0), [1.0]);
    }

    #[test]
    fn order_one() {
        assert_eq!(pade_coefficients::<f64>(1), [1.0, 0.5]);
    }

    #[test]
    fn leading_coefficient_is_one() {
        for q in 0..12 {
            assert_eq!(pade_coefficients::<f64>(q)[0], 1.0);
        }
    }

    #[test]
    fn matches_factorial_form() {
        for q in 1..=10 {
            let a = pade_coefficients::<f64>(q);
            assert_eq!(a.len(), q + 1);
            for (j, &aj) in a.iter().enumerate() {
                let expected = closed_form(q, j);
                assert!(
                    (aj - expected).abs() <= 1e-14 * expected.abs(),
                    "q={} j={}: {} vs {}",
                    q,
                    j,
                    aj,
                    expected
                );
            }
        }
    }

    #[test]
    fn order_seven_tail() {
        // 7! 7! / 14! for the last term
        let a = pade_coefficients::<f64>(7);
        let expected = factorial(7) * factorial(7) / factorial(14);
        assert!((a[7] - expected).abs() <= 1e-14 * expected);
    }
}
