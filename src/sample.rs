//! Sampling a polynomial on a regular grid, for plotting.

use crate::{Coefficients, SamplePoint};

/// The most grid points a domain may have. Finer grids count as degenerate.
pub const MAX_SAMPLES: usize = 1 << 20;

/// The x-range to plot, and the spacing between samples.
///
/// The default covers `[-10, 10]` with a step of `0.1`, which is 201 points.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleDomain {
    pub x_min: f64,
    pub x_max: f64,
    pub step: f64,
}

impl Default for SampleDomain {
    fn default() -> Self {
        SampleDomain {
            x_min: -10.0,
            x_max: 10.0,
            step: 0.1,
        }
    }
}

impl SampleDomain {
    pub fn new(x_min: f64, x_max: f64, step: f64) -> SampleDomain {
        SampleDomain { x_min, x_max, step }
    }

    /// The symmetric domain `[-half_width, half_width]`, split into `steps`
    /// equal intervals.
    pub fn symmetric(half_width: f64, steps: usize) -> SampleDomain {
        SampleDomain {
            x_min: -half_width,
            x_max: half_width,
            step: 2.0 * half_width / steps.max(1) as f64,
        }
    }

    /// How many grid points this domain has.
    ///
    /// Degenerate domains (a step that isn't positive and finite, an empty or
    /// non-finite range, or more than [`MAX_SAMPLES`] points) have none.
    pub fn len(&self) -> usize {
        let width = self.x_max - self.x_min;
        if !(self.step > 0.0 && self.step.is_finite() && width >= 0.0 && width.is_finite()) {
            return 0;
        }
        // Allow a little slop so that the endpoint isn't lost to rounding
        // when the width is a multiple of the step.
        let intervals = (width / self.step + 1e-9).floor();
        if !(intervals < MAX_SAMPLES as f64) {
            tracing::debug!(intervals, "too many sample points");
            return 0;
        }
        intervals as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `i`th grid point.
    ///
    /// Grid points are computed from their index rather than by repeatedly
    /// adding the step, so they don't drift.
    pub fn x(&self, i: usize) -> f64 {
        self.x_min + i as f64 * self.step
    }
}

/// A lazy iterator over the sample points of a polynomial.
///
/// A clone continues from the same position. The same coefficients and
/// domain always produce the same points, so starting over is just a matter
/// of calling [`samples`] again.
#[derive(Clone, Debug)]
pub struct Samples<'a> {
    coeffs: &'a Coefficients,
    domain: SampleDomain,
    next: usize,
    len: usize,
}

impl Iterator for Samples<'_> {
    type Item = SamplePoint;

    fn next(&mut self) -> Option<SamplePoint> {
        if self.next >= self.len {
            return None;
        }
        let x = self.domain.x(self.next);
        self.next += 1;
        Some(SamplePoint {
            x,
            y: self.coeffs.eval(x),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Samples<'_> {}

/// Iterates over the points of `coeffs` on the grid described by `domain`.
pub fn samples(coeffs: &Coefficients, domain: SampleDomain) -> Samples<'_> {
    Samples {
        coeffs,
        domain,
        next: 0,
        len: domain.len(),
    }
}

/// Evaluates `coeffs` on the grid described by `domain`.
pub fn sample(coeffs: &Coefficients, domain: SampleDomain) -> Vec<SamplePoint> {
    samples(coeffs, domain).collect()
}
