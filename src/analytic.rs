//! Closed-form solutions for linear and quadratic polynomials.

use arrayvec::ArrayVec;

use crate::Solution;

/// The root of `a x + b`.
///
/// The caller is responsible for making sure that `a` is non-zero.
pub fn solve_linear(a: f64, b: f64) -> ArrayVec<Solution, 1> {
    let mut ret = ArrayVec::new();
    ret.push(Solution::real(-b / a));
    ret
}

/// The roots of `a x^2 + b x + c`.
///
/// With a positive discriminant we return two real roots, the one with `+√D`
/// first. A zero discriminant gives a single (double) root, reported once. A
/// negative discriminant gives a conjugate pair, positive imaginary part
/// first.
///
/// This is the textbook formula, which loses precision to cancellation when
/// `b^2` is much larger than `4ac`. The order of the roots is part of the
/// contract, which rules out the usual `q = -(b + sign(b)√D) / 2` trick for
/// picking the stable root.
///
/// The caller is responsible for making sure that `a` is non-zero.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> ArrayVec<Solution, 2> {
    let mut ret = ArrayVec::new();
    let disc = b * b - 4.0 * a * c;
    let two_a = 2.0 * a;

    if disc > 0.0 {
        let sqrt_disc = disc.sqrt();
        ret.push(Solution::real((-b + sqrt_disc) / two_a));
        ret.push(Solution::real((-b - sqrt_disc) / two_a));
    } else if disc == 0.0 {
        ret.push(Solution::real(-b / two_a));
    } else {
        // NaN discriminants also end up here, and produce NaN "roots". That
        // only happens if the inputs were already non-finite.
        let real = -b / two_a;
        let imag = (-disc).sqrt() / two_a;
        ret.push(Solution::complex(real, imag));
        ret.push(Solution::complex(real, -imag));
    }
    ret
}
