//! Simultaneous complex root finding using the Aberth-Ehrlich method.
//!
//! Unlike the [Newton search](crate::newton), this looks for all the roots at
//! once, in the complex plane, so it also finds the complex roots of cubics,
//! quartics and quintics. Each step is Newton's correction for one root,
//! adjusted by the repulsion from the current estimates of all the others.

use arrayvec::ArrayVec;
use num_complex::Complex64;

use crate::{Coefficients, MAX_DEGREE, Roots, Solution};

const MAX_ITERATIONS: usize = 500;

// Relative size of a correction below which a root estimate stops moving.
const STEP_TOLERANCE: f64 = 1e-14;

// Roots whose imaginary part is this small (relative to their magnitude) are
// reported as real.
const REAL_TOLERANCE: f64 = 1e-7;

// Estimates within this distance (relative to their magnitude) of one another
// are candidates for being a single repeated root.
const CLUSTER_RADIUS: f64 = 0.05;

// How much wider than the rounding error predicts a cluster may be.
const CLUSTER_SLACK: f64 = 10.0;

/// Evaluates a polynomial and its derivative at a complex point.
fn eval_with_deriv(coeffs: &[f64], z: Complex64) -> (Complex64, Complex64) {
    let mut p = Complex64::new(0.0, 0.0);
    let mut dp = Complex64::new(0.0, 0.0);
    for &c in coeffs {
        dp = dp * z + p;
        p = p * z + c;
    }
    (p, dp)
}

/// Finds every root of `coeffs`, real and complex.
///
/// Real roots come first, in increasing order, followed by the complex
/// roots in conjugate pairs (positive imaginary part first), ordered by
/// their real parts. Every complex root is followed by its exact conjugate.
///
/// Repeated roots are reported once per multiplicity. The iteration only
/// gets close to them, scattering one estimate per multiplicity around the
/// true root, so each such cluster is reported as its mean.
///
/// Returns nothing if the leading coefficient is zero or some coefficient
/// isn't finite.
pub fn find_all_roots(coeffs: &Coefficients) -> Roots {
    let leading = coeffs.leading();
    let n = coeffs.degree().min(MAX_DEGREE);
    if leading == 0.0 || !coeffs.is_finite() || n == 0 {
        return ArrayVec::new();
    }
    let monic = coeffs.clone() / leading;
    let monic = monic.as_slice();

    // Every root lies within the Cauchy bound. Starting on a circle of that
    // radius, with an angular offset so that we don't start on the real axis
    // (where conjugate pairs can't split apart), keeps the start points
    // distinct and deterministic.
    let radius = 1.0 + monic[1..].iter().fold(0.0f64, |m, c| m.max(c.abs()));
    let mut z: ArrayVec<Complex64, MAX_DEGREE> = (0..n)
        .map(|k| {
            let theta = std::f64::consts::TAU * k as f64 / n as f64 + 0.4;
            Complex64::from_polar(radius, theta)
        })
        .collect();

    let mut iterations = 0;
    for _ in 0..MAX_ITERATIONS {
        iterations += 1;
        let mut converged = true;
        for i in 0..n {
            let (p, dp) = eval_with_deriv(monic, z[i]);
            if p == Complex64::new(0.0, 0.0) {
                continue;
            }

            let ratio = p / dp;
            let repulsion: Complex64 = (0..n)
                .filter(|&j| j != i && z[j] != z[i])
                .map(|j| (z[i] - z[j]).inv())
                .sum();
            let step = ratio / (1.0 - ratio * repulsion);
            if !step.is_finite() {
                converged = false;
                continue;
            }

            // Update in place, so later roots in this sweep see the new value.
            z[i] -= step;
            if step.norm() > STEP_TOLERANCE * z[i].norm().max(1.0) {
                converged = false;
            }
        }
        if converged {
            break;
        }
    }
    tracing::debug!(degree = n, iterations, "aberth iteration finished");

    merge_clusters(monic, &mut z);

    let mut real = ArrayVec::<f64, MAX_DEGREE>::new();
    let mut upper = ArrayVec::<Complex64, MAX_DEGREE>::new();
    let mut lower = ArrayVec::<Complex64, MAX_DEGREE>::new();
    for &r in &z {
        if r.im.abs() <= REAL_TOLERANCE * r.norm().max(1.0) {
            real.push(r.re);
        } else if r.im > 0.0 {
            upper.push(r);
        } else {
            lower.push(r);
        }
    }

    // Complex roots of a real polynomial come in conjugate pairs. If the
    // estimates don't, the ones closest to the real axis on the crowded side
    // are real roots that the iteration didn't manage to settle.
    while upper.len() != lower.len() {
        let side = if upper.len() > lower.len() { &mut upper } else { &mut lower };
        let Some(k) =
            (0..side.len()).min_by(|&a, &b| side[a].im.abs().total_cmp(&side[b].im.abs()))
        else {
            break;
        };
        let r = side.remove(k);
        tracing::warn!(re = r.re, im = r.im, "unpaired complex root reported as real");
        real.push(r.re);
    }

    real.sort_by(f64::total_cmp);
    upper.sort_by(|a, b| a.re.total_cmp(&b.re));
    lower.sort_by(|a, b| a.re.total_cmp(&b.re));

    let mut ret: Roots = real.into_iter().map(Solution::real).collect();
    for (u, l) in upper.into_iter().zip(lower) {
        let re = (u.re + l.re) / 2.0;
        let im = (u.im - l.im) / 2.0;
        ret.push(Solution::complex(re, im));
        ret.push(Solution::complex(re, -im));
    }
    ret
}

/// The `m`-th Taylor coefficient of `coeffs` around `c`, `p^(m)(c) / m!`.
fn taylor_coefficient(coeffs: &[f64], c: Complex64, m: usize) -> Complex64 {
    let mut b: ArrayVec<Complex64, { MAX_DEGREE + 1 }> =
        coeffs.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    // Each pass divides by (x - c), and the remainder of the k-th pass is the
    // k-th Taylor coefficient.
    for k in 0..b.len() {
        let len = b.len() - k;
        for i in 1..len {
            let prev = b[i - 1];
            b[i] += prev * c;
        }
        if k == m {
            return b[len - 1];
        }
    }
    Complex64::new(0.0, 0.0)
}

/// Replaces each cluster of estimates around a repeated root with the
/// cluster's centroid.
///
/// A root of multiplicity `m` is only determined to within about the `m`-th
/// root of the rounding error in evaluating the polynomial, so the iteration
/// leaves `m` estimates scattered around it. Their mean is far more accurate
/// than any one of them. A group of nearby estimates only counts as a
/// cluster if rounding error can explain how spread out it is, so distinct
/// roots that happen to be close together are left alone.
fn merge_clusters(monic: &[f64], z: &mut [Complex64]) {
    let n = z.len();
    let mut merged = [false; MAX_DEGREE];
    for i in 0..n {
        if merged[i] {
            continue;
        }

        let reach = CLUSTER_RADIUS * z[i].norm().max(1.0);
        let members: ArrayVec<usize, MAX_DEGREE> = (i..n)
            .filter(|&j| !merged[j] && (z[j] - z[i]).norm() <= reach)
            .collect();
        let m = members.len();
        if m < 2 {
            continue;
        }

        let mut centroid = members.iter().map(|&j| z[j]).sum::<Complex64>() / m as f64;
        let spread = members
            .iter()
            .map(|&j| (z[j] - centroid).norm())
            .fold(0.0f64, f64::max);

        // Bound on the rounding error of Horner's rule at the centroid.
        let r = centroid.norm();
        let noise = 4.0
            * n as f64
            * f64::EPSILON
            * monic.iter().fold(0.0, |acc, c| acc * r + c.abs());
        let leading = taylor_coefficient(monic, centroid, m).norm();
        let expected = (noise / leading).powf(1.0 / m as f64);
        if spread > CLUSTER_SLACK * expected {
            tracing::trace!(size = m, spread, expected, "nearby roots are distinct");
            continue;
        }

        // A cluster that straddles the real axis is a real repeated root.
        if centroid.im.abs() <= spread {
            centroid.im = 0.0;
        }
        tracing::trace!(size = m, spread, re = centroid.re, im = centroid.im, "merged cluster");
        for &j in &members {
            z[j] = centroid;
            merged[j] = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::Degree;

    fn assert_solutions(found: &[Solution], expected: &[Solution]) {
        assert_eq!(found.len(), expected.len(), "found {found:?}");
        for (f, e) in found.iter().zip(expected) {
            assert_eq!(f.is_complex, e.is_complex, "found {found:?}");
            assert_abs_diff_eq!(f.real, e.real, epsilon = 1e-9);
            assert_abs_diff_eq!(f.imag, e.imag, epsilon = 1e-9);
        }
    }

    #[test]
    fn real_roots() {
        let p = Coefficients::new(&[1.0, -6.0, 11.0, -6.0]).unwrap();
        assert_solutions(
            &find_all_roots(&p),
            &[Solution::real(1.0), Solution::real(2.0), Solution::real(3.0)],
        );
    }

    #[test]
    fn complex_roots() {
        // x^3 - 8 = (x - 2)(x^2 + 2x + 4)
        let p = Coefficients::new(&[1.0, 0.0, 0.0, -8.0]).unwrap();
        let s3 = 3.0f64.sqrt();
        assert_solutions(
            &find_all_roots(&p),
            &[
                Solution::real(2.0),
                Solution::complex(-1.0, s3),
                Solution::complex(-1.0, -s3),
            ],
        );

        // x^4 + 1 has no real roots at all.
        let p = Coefficients::new(&[1.0, 0.0, 0.0, 0.0, 1.0]).unwrap();
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_solutions(
            &find_all_roots(&p),
            &[
                Solution::complex(-h, h),
                Solution::complex(-h, -h),
                Solution::complex(h, h),
                Solution::complex(h, -h),
            ],
        );
    }

    #[test]
    fn mixed_quintic() {
        // 2 (x - 1)(x + 2)(x - 3)(x^2 + 1)
        let cubic = Coefficients::from_roots(2.0, &[1.0, -2.0, 3.0]).unwrap();
        let c = cubic.as_slice();
        let coeffs = [c[0], c[1], c[2] + c[0], c[3] + c[1], c[2], c[3]];
        let p = Coefficients::new(&coeffs).unwrap();
        assert_solutions(
            &find_all_roots(&p),
            &[
                Solution::real(-2.0),
                Solution::real(1.0),
                Solution::real(3.0),
                Solution::complex(0.0, 1.0),
                Solution::complex(0.0, -1.0),
            ],
        );
    }

    #[test]
    fn repeated_roots() {
        for (root, multiplicity) in [(1.0, 3), (1.0, 4), (2.0, 5)] {
            let p = Coefficients::from_roots(1.0, &vec![root; multiplicity]).unwrap();
            let roots = find_all_roots(&p);
            assert_eq!(roots.len(), multiplicity);
            for r in &roots {
                assert!(!r.is_complex, "{p:?} had roots {roots:?}");
                assert_eq!(r.imag, 0.0);
                assert_abs_diff_eq!(r.real, root, epsilon = 1e-3);
            }
        }

        // (x - 1)^2 (x^2 + 1)
        let p = Coefficients::new(&[1.0, -2.0, 2.0, -2.0, 1.0]).unwrap();
        let roots = find_all_roots(&p);
        assert_eq!(roots.len(), 4);
        assert!(roots[..2].iter().all(|r| !r.is_complex), "{roots:?}");
        assert_abs_diff_eq!(roots[0].real, 1.0, epsilon = 1e-3);
        assert_abs_diff_eq!(roots[1].real, 1.0, epsilon = 1e-3);
        assert!(roots[2].is_complex && roots[3].is_complex, "{roots:?}");
        assert_abs_diff_eq!(roots[2].real, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(roots[2].imag, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(roots[3].imag, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn zero_leading_coefficient() {
        let p = Coefficients::new(&[0.0, 1.0, 2.0]).unwrap();
        assert!(find_all_roots(&p).is_empty());
    }

    #[test]
    fn root_evaluation() {
        arbtest::arbtest(|u| {
            let degree = crate::arbitrary::degree(u)?;
            let p = crate::arbitrary::bounded(u, degree, 10.0)?;
            let roots = find_all_roots(&p);
            assert_eq!(roots.len(), degree.get());

            // Real roots first, then conjugate pairs with the upper one first.
            let complex: Vec<&Solution> = roots.iter().skip_while(|r| !r.is_complex).collect();
            assert_eq!(complex.len(), roots.iter().filter(|r| r.is_complex).count());
            assert_eq!(complex.len() % 2, 0, "{p:?} had roots {roots:?}");
            for pair in complex.chunks(2) {
                assert!(pair[0].imag > 0.0, "{p:?} had roots {roots:?}");
                assert_eq!(pair[1].real, pair[0].real);
                assert_eq!(pair[1].imag, -pair[0].imag);
            }

            let magnitude = p.magnitude();
            for r in &roots {
                let z = r.to_complex();
                let (y, _) = eval_with_deriv(p.as_slice(), z);
                let scale = magnitude * z.norm().max(1.0).powi(degree.get() as i32);
                // Nearly-repeated roots are only accurate to about the square
                // root of machine precision, which is what this allows for.
                assert!(
                    y.norm() <= 1e-6 * scale,
                    "{p:?} had root {r} evaluate to {y}"
                );
            }
            Ok(())
        })
        .budget_ms(2_000);
    }

    #[test]
    fn linear() {
        let p = Coefficients::new(&[2.0, -3.0]).unwrap();
        assert_solutions(&find_all_roots(&p), &[Solution::real(1.5)]);
        assert_eq!(Degree::new(p.degree()), Ok(Degree::LINEAR));
    }
}
