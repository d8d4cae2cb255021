//! Error types for polysolver.

use thiserror::Error;

/// Result type alias using polysolver's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Things that stop us from solving a polynomial.
///
/// Finding no roots is not an error: the numerical methods can legitimately
/// come back empty-handed, and that's reported as an empty list.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The leading coefficient is zero, so the polynomial doesn't actually
    /// have the degree it claims to have.
    #[error("the leading coefficient cannot be zero")]
    InvalidLeadingCoefficient,

    /// Only degrees 1 through 5 are supported.
    #[error("unsupported degree {0}: expected a degree between 1 and 5")]
    UnsupportedDegree(usize),
}
