#![cfg(feature = "complex")]

use num_complex::Complex;
use padexp::{expm, DynMatrix, ExpmFamily, ExpmSettings};

type C = Complex<f64>;

fn c(re: f64, im: f64) -> C {
    Complex::new(re, im)
}

const TOL: f64 = 1e-12;

fn assert_complex_near(a: C, b: C, tol: f64, msg: &str) {
    assert!(
        (a.re - b.re).abs() < tol && (a.im - b.im).abs() < tol,
        "{}: {:?} vs {:?}",
        msg,
        a,
        b
    );
}

// ── LU ───────────────────────────────────────────────────────────────

#[test]
fn complex_solve() {
    let a = DynMatrix::from_rows(2, 2, &[c(2.0, 1.0), c(1.0, -1.0), c(1.0, 0.0), c(3.0, 2.0)]);
    let b = DynMatrix::from_rows(2, 1, &[c(5.0, 3.0), c(7.0, 4.0)]);

    let x = a.solve(&b).unwrap();
    let back = &a * &x;
    for i in 0..2 {
        assert_complex_near(back[(i, 0)], b[(i, 0)], TOL, &format!("row {}", i));
    }
}

#[test]
fn complex_det() {
    // (1+i)(1-i) - (2)(i) = 2 - 2i
    let a = DynMatrix::from_rows(2, 2, &[c(1.0, 1.0), c(2.0, 0.0), c(0.0, 1.0), c(1.0, -1.0)]);
    assert_complex_near(a.lu().unwrap().det(), c(2.0, -2.0), TOL, "det");
}

// ── expm ─────────────────────────────────────────────────────────────

#[test]
fn exp_of_imaginary_identity() {
    // exp(iθ I) = (cos θ + i sin θ) I
    let theta = 0.9;
    let m = DynMatrix::from_fn(3, 3, |i, j| if i == j { c(0.0, theta) } else { c(0.0, 0.0) });
    let e = expm(&m).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j {
                c(theta.cos(), theta.sin())
            } else {
                c(0.0, 0.0)
            };
            assert_complex_near(e[(i, j)], expected, TOL, &format!("e[{},{}]", i, j));
        }
    }
}

#[test]
fn complex_rotation_generator() {
    // exp([[0, -θ], [θ, 0]]) over the complex field is still a real rotation
    let theta = 0.6;
    let m = DynMatrix::from_rows(2, 2, &[c(0.0, 0.0), c(-theta, 0.0), c(theta, 0.0), c(0.0, 0.0)]);
    let e = expm(&m).unwrap();
    let expected = [theta.cos(), -theta.sin(), theta.sin(), theta.cos()];
    for i in 0..2 {
        for j in 0..2 {
            assert_complex_near(e[(i, j)], c(expected[i * 2 + j], 0.0), TOL, "rotation");
        }
    }
}

#[test]
fn hermitian_generator_is_unitary() {
    // exp(iH) is unitary for Hermitian H
    let h = DynMatrix::from_rows(2, 2, &[c(0.5, 0.0), c(0.2, -0.3), c(0.2, 0.3), c(-0.4, 0.0)]);
    let u = expm(&h.map(|z| z * c(0.0, 1.0))).unwrap();
    let u_h = u.transpose().map(|z| z.conj());
    let id = &u_h * &u;
    for i in 0..2 {
        for j in 0..2 {
            let expected = if i == j { c(1.0, 0.0) } else { c(0.0, 0.0) };
            assert_complex_near(id[(i, j)], expected, TOL, &format!("U^H U [{},{}]", i, j));
        }
    }
}

#[test]
fn family_with_complex_time() {
    // exp(t·M) for complex t agrees with expm of the scaled matrix
    let m = DynMatrix::from_rows(2, 2, &[c(-0.5, 0.0), c(1.0, 0.0), c(0.0, 0.0), c(-0.2, 0.0)]);
    let family = ExpmFamily::new(&m, &ExpmSettings::default()).unwrap();
    for &t in &[c(0.0, 1.0), c(0.5, -0.5), c(-1.0, 0.25)] {
        let direct = expm(&(&m * t)).unwrap();
        let via_family = family.eval(t).unwrap();
        for i in 0..2 {
            for j in 0..2 {
                assert_complex_near(via_family[(i, j)], direct[(i, j)], TOL, "family");
            }
        }
    }
}
