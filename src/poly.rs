use arrayvec::ArrayVec;

use crate::{Error, Result};

/// The largest degree we know how to handle.
pub const MAX_DEGREE: usize = 5;

/// The degree of a polynomial, between 1 and [`MAX_DEGREE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Degree(u8);

impl Degree {
    pub const LINEAR: Degree = Degree(1);
    pub const QUADRATIC: Degree = Degree(2);
    pub const CUBIC: Degree = Degree(3);
    pub const QUARTIC: Degree = Degree(4);
    pub const QUINTIC: Degree = Degree(5);

    /// Every supported degree, in increasing order.
    pub const ALL: [Degree; 5] = [
        Degree::LINEAR,
        Degree::QUADRATIC,
        Degree::CUBIC,
        Degree::QUARTIC,
        Degree::QUINTIC,
    ];

    pub fn new(degree: usize) -> Result<Degree> {
        if (1..=MAX_DEGREE).contains(&degree) {
            Ok(Degree(degree as u8))
        } else {
            Err(Error::UnsupportedDegree(degree))
        }
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for Degree {
    type Error = Error;

    fn try_from(degree: usize) -> Result<Degree> {
        Degree::new(degree)
    }
}

impl From<Degree> for usize {
    fn from(degree: Degree) -> usize {
        degree.get()
    }
}

impl std::fmt::Display for Degree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The coefficients of a real polynomial of degree at most 5.
///
/// Unlike most polynomial crates, the *leading* coefficient comes first: if
/// you pass `[a, b, c]` you'll get the polynomial `a x^2 + b x + c`. This is
/// the order people write equations in, and it's the order that input forms
/// present the coefficients in.
///
/// Nothing here insists that the leading coefficient is non-zero: a
/// half-edited form can legitimately be all zeros, and we still want to
/// format it. The solvers check the leading coefficient before doing anything.
#[derive(Clone, Debug, PartialEq)]
pub struct Coefficients {
    coeffs: ArrayVec<f64, { MAX_DEGREE + 1 }>,
}

impl Coefficients {
    /// Creates a new polynomial from coefficients, leading coefficient first.
    ///
    /// Fails unless there are between 2 and 6 coefficients (that is, unless
    /// the degree is between 1 and 5).
    pub fn new(coeffs: &[f64]) -> Result<Coefficients> {
        let degree = coeffs.len().saturating_sub(1);
        Degree::new(degree)?;
        Ok(Coefficients {
            coeffs: coeffs.iter().copied().collect(),
        })
    }

    /// The polynomial of the given degree with every coefficient zero.
    pub fn zero(degree: Degree) -> Coefficients {
        Coefficients {
            coeffs: std::iter::repeat_n(0.0, degree.get() + 1).collect(),
        }
    }

    /// Builds `leading * (x - r_1) * ... * (x - r_n)`.
    pub fn from_roots(leading: f64, roots: &[f64]) -> Result<Coefficients> {
        Degree::new(roots.len())?;

        let mut coeffs = ArrayVec::new();
        coeffs.push(leading);
        for &r in roots {
            // Multiply by (x - r): shift everything up a power, then subtract
            // r times the old polynomial.
            coeffs.push(0.0);
            for i in (1..coeffs.len()).rev() {
                coeffs[i] -= r * coeffs[i - 1];
            }
        }
        Ok(Coefficients { coeffs })
    }

    /// The coefficients, leading coefficient first.
    pub fn as_slice(&self) -> &[f64] {
        &self.coeffs
    }

    /// The coefficient of the highest power of `x`.
    pub fn leading(&self) -> f64 {
        self.coeffs.first().copied().unwrap_or(0.0)
    }

    /// The degree of this polynomial.
    ///
    /// This only looks at the number of coefficients, not their values. A
    /// polynomial with three coefficients has degree 2 even if its leading
    /// coefficient is zero.
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Evaluates this polynomial at a point.
    pub fn eval(&self, x: f64) -> f64 {
        let mut acc = 0.0;
        for c in &self.coeffs {
            // It would be nice to use `f64::mul_add` here, but it's slow on
            // architectures that don't have a dedicated instruction.
            acc = acc * x + c;
        }
        acc
    }

    /// Computes the derivative of this polynomial, as a polynomial with one
    /// less coefficient.
    ///
    /// The derivative of a linear polynomial is a constant, and so it's the
    /// one way to get a `Coefficients` of degree zero.
    pub fn deriv(&self) -> Coefficients {
        let degree = self.degree();
        let coeffs = self.coeffs[..degree]
            .iter()
            .enumerate()
            .map(|(i, c)| (degree - i) as f64 * c)
            .collect();
        Coefficients { coeffs }
    }

    /// Returns the largest absolute value of any coefficient.
    ///
    /// Always returns a non-negative number, or NaN if some coefficient is NaN.
    pub fn magnitude(&self) -> f64 {
        let mut max = 0.0f64;
        for c in &self.coeffs {
            max = max.max(c.abs());
        }
        max
    }

    /// Are all the coefficients finite?
    pub fn is_finite(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_finite())
    }

    /// Are all the coefficients zero?
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0.0)
    }
}

impl std::ops::Div<f64> for Coefficients {
    type Output = Coefficients;

    fn div(mut self, scale: f64) -> Coefficients {
        self /= scale;
        self
    }
}

impl std::ops::DivAssign<f64> for Coefficients {
    fn div_assign(&mut self, scale: f64) {
        for c in &mut self.coeffs {
            *c /= scale;
        }
    }
}
