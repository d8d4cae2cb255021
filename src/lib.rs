//! This is a crate for finding, formatting and plotting the roots of real
//! polynomials of degree 1 to 5.
//!
//! Linear and quadratic polynomials are solved in closed form, including
//! complex roots. Higher degrees go to a numerical method: by default a
//! multi-start Newton search that only finds real roots (see [`newton`]),
//! or optionally Aberth's method, which finds all of them (see [`aberth`]).
//!
//! ```
//! use polysolver::{Coefficients, format_equation, solve};
//!
//! let p = Coefficients::new(&[1.0, -6.0, 11.0, -6.0]).unwrap();
//! assert_eq!(format_equation(&p), "x³ - 6x² + 11x - 6 = 0");
//! assert_eq!(solve(&p).unwrap().len(), 3);
//! ```

pub mod aberth;
pub mod analytic;
mod error;
mod format;
mod input;
pub mod newton;
mod poly;
mod sample;
mod solution;
mod solve;

#[cfg(any(test, feature = "arbitrary"))]
pub mod arbitrary;

pub use error::{Error, Result};
pub use format::{format_equation, format_solutions};
pub use input::{Label, RawCoefficients, is_acceptable_input, normalize};
pub use newton::{NewtonConfig, find_roots};
pub use poly::{Coefficients, Degree, MAX_DEGREE};
pub use sample::{MAX_SAMPLES, SampleDomain, Samples, sample, samples};
pub use solution::{SamplePoint, Solution};
pub use solve::{Method, Solved, Solver, solve};

/// The roots of a polynomial. There are never more than [`MAX_DEGREE`].
pub type Roots = arrayvec::ArrayVec<Solution, MAX_DEGREE>;
