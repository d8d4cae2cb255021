//! Multi-start Newton-Raphson for real roots.
//!
//! This is a heuristic: we run Newton's method from a fixed list of starting
//! points and keep whatever it converges to, after discarding duplicates and
//! anything that doesn't evaluate close to zero. It only searches the real
//! line, so complex roots are never found. It can also miss real roots: a
//! double root has no sign change and a flat derivative nearby, and two roots
//! closer than [`NewtonConfig::min_separation`] get merged.
//!
//! The order of the starting points matters. Duplicates are resolved in favor
//! of whichever seed got there first, and we stop as soon as we've found as
//! many roots as the degree allows.

use arrayvec::ArrayVec;

use crate::{Coefficients, MAX_DEGREE, Roots, Solution};

/// Tuning knobs for [`NewtonConfig::find_roots`].
///
/// The defaults are what [`find_roots`] uses.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NewtonConfig {
    /// Starting points, tried in order.
    pub seeds: Vec<f64>,
    /// Iteration budget for each starting point.
    pub max_iterations: usize,
    /// We've converged once `|f(x)|` drops below this.
    pub tolerance: f64,
    /// We give up on a starting point once `|f'(x)|` drops below this.
    pub min_slope: f64,
    /// Converged points closer than this to an accepted root are duplicates.
    pub min_separation: f64,
    /// Converged points with `|f(x)|` at least this large are rejected.
    pub max_residual: f64,
    /// Accepted roots are rounded to this many decimal places.
    pub decimals: usize,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        NewtonConfig {
            seeds: vec![-10.0, -5.0, -2.0, -1.0, 0.0, 1.0, 2.0, 5.0, 10.0],
            max_iterations: 1000,
            tolerance: 1e-10,
            min_slope: 1e-10,
            min_separation: 0.01,
            max_residual: 1e-3,
            decimals: 5,
        }
    }
}

/// Finds real roots of `coeffs` using the default [`NewtonConfig`].
///
/// See the [module docs](self) for what this can and can't find.
pub fn find_roots(coeffs: &Coefficients) -> Roots {
    NewtonConfig::default().find_roots(coeffs)
}

impl NewtonConfig {
    pub fn with_seeds(mut self, seeds: impl IntoIterator<Item = f64>) -> Self {
        self.seeds = seeds.into_iter().collect();
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Finds real roots of `coeffs`, in the order they were first reached.
    ///
    /// An empty result is a legitimate answer: it means that none of the
    /// starting points converged, not that something went wrong.
    pub fn find_roots(&self, coeffs: &Coefficients) -> Roots {
        let deriv = coeffs.deriv();
        let f = |x: f64| coeffs.eval(x);
        let df = |x: f64| deriv.eval(x);

        let max_roots = coeffs.degree().min(MAX_DEGREE);
        let mut roots = ArrayVec::<f64, MAX_DEGREE>::new();

        for &seed in &self.seeds {
            if roots.len() >= max_roots {
                break;
            }

            let Some(root) = self.newton(f, df, seed) else {
                tracing::trace!(seed, "no convergence");
                continue;
            };

            let residual = f(root);
            if roots.iter().any(|r| (r - root).abs() < self.min_separation) {
                tracing::trace!(seed, root, "duplicate root");
            } else if residual.abs() >= self.max_residual {
                tracing::trace!(seed, root, residual, "residual too large");
            } else {
                tracing::trace!(seed, root, "accepted root");
                roots.push(self.round(root));
            }
        }

        tracing::debug!(degree = coeffs.degree(), found = roots.len(), "newton search finished");
        roots.into_iter().map(Solution::real).collect()
    }

    fn newton(&self, f: impl Fn(f64) -> f64, df: impl Fn(f64) -> f64, seed: f64) -> Option<f64> {
        let mut x = seed;
        for _ in 0..self.max_iterations {
            let y = f(x);
            if y.abs() < self.tolerance {
                return Some(x);
            }

            let dy = df(x);
            if dy.abs() < self.min_slope {
                return None;
            }

            x -= y / dy;
            if !x.is_finite() {
                return None;
            }
        }
        None
    }

    /// Rounds to [`decimals`](Self::decimals) places, going by the exact
    /// decimal expansion of `x`.
    ///
    /// Scaling by a power of ten first would round the product, which turns
    /// values like `0.123455` (really a little less) into ties that round up.
    fn round(&self, x: f64) -> f64 {
        format!("{x:.prec$}", prec = self.decimals).parse().unwrap_or(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Degree;

    fn reals(roots: &[Solution]) -> Vec<f64> {
        assert!(roots.iter().all(|r| !r.is_complex && r.imag == 0.0));
        roots.iter().map(|r| r.real).collect()
    }

    #[test]
    fn smoke() {
        let p = Coefficients::new(&[1.0, -6.0, 11.0, -6.0]).unwrap();
        let roots = reals(&find_roots(&p));
        assert_eq!(roots.len(), 3);
        for (r, expected) in roots.iter().zip([1.0, 2.0, 3.0]) {
            assert!((r - expected).abs() <= 0.01, "{roots:?}");
        }

        let p = Coefficients::from_roots(1.0, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        let mut roots = reals(&find_roots(&p));
        roots.sort_by(f64::total_cmp);
        assert_eq!(roots.len(), 4);
        for (r, expected) in roots.iter().zip([1.0, 2.0, 3.0, 4.0]) {
            assert!((r - expected).abs() <= 0.01, "{roots:?}");
        }
    }

    #[test]
    fn seed_order() {
        // Seeds to the left of every root walk straight to the leftmost one.
        let p = Coefficients::from_roots(1.0, &[3.0, -1.0, 0.5]).unwrap();
        let roots = reals(&find_roots(&p));
        assert_eq!(roots[0], -1.0);
        assert_eq!(roots.len(), 3);
    }

    #[test]
    fn custom_seeds() {
        // This cubic has a single real root. Every seed either finds it
        // again or gives up, so we exhaust the seed list with one root.
        let p = Coefficients::new(&[1.0, 0.0, 0.0, -8.0]).unwrap();
        let roots = reals(&find_roots(&p));
        assert_eq!(roots, vec![2.0]);

        let config = NewtonConfig::default().with_seeds([2.0, -2.0]);
        let p = Coefficients::from_roots(1.0, &[2.0, -2.0, 0.0]).unwrap();
        assert_eq!(reals(&config.find_roots(&p)), vec![2.0, -2.0]);
        let config = config.with_seeds([0.0, 2.0, -2.0]).with_max_iterations(0);
        assert!(config.find_roots(&p).is_empty());
    }

    #[test]
    fn no_real_roots() {
        // x^4 + 1 never touches zero.
        let p = Coefficients::new(&[1.0, 0.0, 0.0, 0.0, 1.0]).unwrap();
        assert!(find_roots(&p).is_empty());
    }

    #[test]
    fn flat_start() {
        // x^3 has a zero derivative at the seed 0, but 0 is also a root, so
        // that seed succeeds before the slope check.
        let p = Coefficients::new(&[1.0, 0.0, 0.0, 0.0]).unwrap();
        let roots = reals(&find_roots(&p));
        assert_eq!(roots.len(), 1);
        assert!(roots[0].abs() < 0.01);

        // x^3 - 3x + 10 has critical points at +-1, so those seeds are
        // abandoned, but the others find the real root between -3 and -2.
        let p = Coefficients::new(&[1.0, 0.0, -3.0, 10.0]).unwrap();
        let roots = reals(&find_roots(&p));
        assert_eq!(roots.len(), 1);
        assert!(p.eval(roots[0]).abs() < 1e-3);
    }

    #[test]
    fn rounding() {
        let p = Coefficients::from_roots(1.0, &[1.0 / 3.0, 7.0, -7.0]).unwrap();
        let roots = reals(&find_roots(&p));
        assert!(roots.contains(&0.33333), "{roots:?}");

        let config = NewtonConfig::default();
        assert_eq!(config.round(0.123455), 0.12345);
        assert_eq!(config.round(0.123456), 0.12346);
        assert_eq!(config.round(-2.0000049), -2.0);
        assert_eq!(config.round(1e-7), 0.0);
        let config = NewtonConfig {
            decimals: 2,
            ..NewtonConfig::default()
        };
        assert_eq!(config.round(1.005), 1.0);
    }

    #[test]
    fn finds_separated_roots() {
        arbtest::arbtest(|u| {
            let degree = Degree::new(u.int_in_range(3..=5)?).unwrap();
            let (p, expected) = crate::arbitrary::separated_roots(u, degree)?;
            let roots = reals(&find_roots(&p));

            assert!(roots.len() <= degree.get());
            for r in &roots {
                assert!(
                    expected.iter().any(|e| (e - r).abs() < 0.01),
                    "{p:?} had spurious root {r}, expected {expected:?}"
                );
            }
            for (i, r) in roots.iter().enumerate() {
                assert!(roots[..i].iter().all(|s| (s - r).abs() >= 0.01));
            }
            Ok(())
        })
        .budget_ms(2_000);
    }
}
