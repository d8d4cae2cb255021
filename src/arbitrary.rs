//! Utilities for fuzz and/or property testing using `arbitrary`.

use arbitrary::Unstructured;

use crate::{Coefficients, Degree};

fn check_finite(f: f64) -> Result<f64, arbitrary::Error> {
    if f.is_finite() {
        Ok(f)
    } else {
        Err(arbitrary::Error::IncorrectFormat)
    }
}

/// Generate a float in the closed interval `[lower, upper]`.
pub fn float_in(
    u: &mut Unstructured<'_>,
    lower: f64,
    upper: f64,
) -> Result<f64, arbitrary::Error> {
    let t = u.int_in_range(0..=u32::MAX)? as f64 / u32::MAX as f64;
    check_finite(lower + t * (upper - lower))
}

/// Generate a supported degree.
pub fn degree(u: &mut Unstructured<'_>) -> Result<Degree, arbitrary::Error> {
    let d: usize = u.int_in_range(1..=5)?;
    Degree::new(d).map_err(|_| arbitrary::Error::IncorrectFormat)
}

/// Generate the sort of input a person might type into a coefficient box:
/// a small number with at most a few decimal places, or zero.
pub fn typed_float(u: &mut Unstructured<'_>) -> Result<f64, arbitrary::Error> {
    let hundredths: i32 = u.int_in_range(-2_000..=2_000)?;
    Ok(hundredths as f64 / 100.0)
}

/// Generate a polynomial from its (real) roots.
///
/// The roots are well separated integers or halves in `[-8, 8]`, so every
/// root lies within reach of the numerical solver's starting points. The
/// leading coefficient is bounded away from zero.
pub fn separated_roots(
    u: &mut Unstructured<'_>,
    degree: Degree,
) -> Result<(Coefficients, Vec<f64>), arbitrary::Error> {
    let mut roots: Vec<f64> = Vec::with_capacity(degree.get());
    while roots.len() < degree.get() {
        let r = u.int_in_range(-16..=16)? as f64 / 2.0;
        if roots.iter().all(|s| (r - s).abs() >= 1.0) {
            roots.push(r);
        } else if u.is_empty() {
            return Err(arbitrary::Error::NotEnoughData);
        }
    }

    let sign = if u.arbitrary()? { 1.0 } else { -1.0 };
    let leading = sign * float_in(u, 0.5, 4.0)?;
    let coeffs = Coefficients::from_roots(leading, &roots)
        .map_err(|_| arbitrary::Error::IncorrectFormat)?;
    Ok((coeffs, roots))
}

/// Generate an arbitrary polynomial with coefficients in `[-bound, bound]`
/// and a leading coefficient of magnitude at least one.
pub fn bounded(
    u: &mut Unstructured<'_>,
    degree: Degree,
    bound: f64,
) -> Result<Coefficients, arbitrary::Error> {
    let mut coeffs = vec![0.0; degree.get() + 1];
    for c in &mut coeffs {
        *c = float_in(u, -bound, bound)?;
    }
    if coeffs[0].abs() < 1.0 {
        coeffs[0] = coeffs[0].signum();
    }
    Coefficients::new(&coeffs).map_err(|_| arbitrary::Error::IncorrectFormat)
}
