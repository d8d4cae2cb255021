use num_complex::Complex64;

/// A root of a polynomial.
///
/// Real roots have `imag == 0.0` and `is_complex == false`. Complex roots
/// of real polynomials come in conjugate pairs, and the solvers always
/// report both halves of the pair, the one with positive imaginary part
/// first.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Solution {
    pub real: f64,
    pub imag: f64,
    pub is_complex: bool,
}

impl Solution {
    pub const fn real(x: f64) -> Solution {
        Solution {
            real: x,
            imag: 0.0,
            is_complex: false,
        }
    }

    pub const fn complex(real: f64, imag: f64) -> Solution {
        Solution {
            real,
            imag,
            is_complex: true,
        }
    }

    pub fn to_complex(self) -> Complex64 {
        Complex64::new(self.real, self.imag)
    }
}

impl From<Solution> for Complex64 {
    fn from(s: Solution) -> Complex64 {
        s.to_complex()
    }
}

/// Real roots get five decimal places, complex roots get three on each part,
/// with the sign of the imaginary part pulled out: `1.500 - 0.866i`.
impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_complex {
            let sign = if self.imag >= 0.0 { '+' } else { '-' };
            write!(f, "{:.3} {sign} {:.3}i", self.real, self.imag.abs())
        } else {
            write!(f, "{:.5}", self.real)
        }
    }
}

/// A single point on the plotted curve.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}
