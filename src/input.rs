//! Turning the text in a coefficient form into a polynomial.
//!
//! Input forms label their fields `a` through `f`, with `a` always holding
//! the leading coefficient: a quadratic uses `a`, `b` and `c`, while a quintic
//! uses all six. Fields past the chosen degree are ignored.

use arrayvec::ArrayVec;

use crate::{Coefficients, Degree, Error, MAX_DEGREE, Result};

/// The label of a coefficient field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Label {
    pub const ALL: [Label; MAX_DEGREE + 1] =
        [Label::A, Label::B, Label::C, Label::D, Label::E, Label::F];

    /// Position of this field, counting from the leading coefficient.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The power of `x` that this field multiplies, in a polynomial of the
    /// given degree, or `None` if the field isn't used at that degree.
    pub fn power(self, degree: Degree) -> Option<usize> {
        degree.get().checked_sub(self.index())
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = match self {
            Label::A => 'a',
            Label::B => 'b',
            Label::C => 'c',
            Label::D => 'd',
            Label::E => 'e',
            Label::F => 'f',
        };
        write!(f, "{c}")
    }
}

/// Can `s` appear in a coefficient field while someone is typing?
///
/// That's an optional leading `-`, then digits with at most one decimal
/// point. Partial input like `""`, `"-"`, `"."` or `"3."` is fine here; it
/// counts as zero when solving.
pub fn is_acceptable_input(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let mut seen_point = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    true
}

/// Parses a single field. Anything that doesn't parse to a finite number is
/// zero.
fn parse_field(s: &str) -> f64 {
    match s.trim().parse::<f64>() {
        Ok(x) if x.is_finite() => x,
        _ => 0.0,
    }
}

/// The raw text of the coefficient fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawCoefficients {
    fields: [String; MAX_DEGREE + 1],
}

impl Default for RawCoefficients {
    /// The form as first shown: `3x³ + 2x² - 5x + 1` when viewed as a cubic.
    fn default() -> Self {
        RawCoefficients {
            fields: ["3", "2", "-5", "1", "0", "0"].map(String::from),
        }
    }
}

impl RawCoefficients {
    /// A form with every field empty.
    pub fn cleared() -> RawCoefficients {
        RawCoefficients {
            fields: Default::default(),
        }
    }

    /// Builds a form from the fields in order, starting at `a`. Missing fields
    /// are left empty and extra fields are dropped.
    ///
    /// Unlike [`RawCoefficients::set`] this doesn't check the text, so that
    /// callers can hand over whatever they have.
    pub fn from_fields<S: Into<String>>(fields: impl IntoIterator<Item = S>) -> RawCoefficients {
        let mut ret = RawCoefficients::cleared();
        for (slot, value) in ret.fields.iter_mut().zip(fields) {
            *slot = value.into();
        }
        ret
    }

    pub fn get(&self, label: Label) -> &str {
        &self.fields[label.index()]
    }

    /// Replaces the text of a field, if the new text is
    /// [acceptable](is_acceptable_input). Returns whether the field changed.
    pub fn set(&mut self, label: Label, value: &str) -> bool {
        if is_acceptable_input(value) {
            self.fields[label.index()] = value.to_owned();
            true
        } else {
            false
        }
    }

    /// Parses the fields that a polynomial of the given degree uses.
    ///
    /// Fields that don't parse count as zero. That's forgiving of
    /// half-finished input, but it also means that a typo can silently turn
    /// into a zero coefficient.
    pub fn to_coefficients(&self, degree: Degree) -> Coefficients {
        let values: ArrayVec<f64, { MAX_DEGREE + 1 }> = self.fields[..=degree.get()]
            .iter()
            .map(|s| parse_field(s))
            .collect();
        // The length always matches `degree`, so this can't fail.
        Coefficients::new(&values).unwrap_or_else(|_| Coefficients::zero(degree))
    }
}

/// Parses a coefficient form into a polynomial of the given degree.
///
/// The only failure is a leading coefficient that's zero (including one
/// that's empty or unparseable); other bad fields quietly become zero.
pub fn normalize(raw: &RawCoefficients, degree: Degree) -> Result<Coefficients> {
    let coeffs = raw.to_coefficients(degree);
    if coeffs.leading() == 0.0 {
        tracing::debug!(leading = raw.get(Label::A), %degree, "rejecting zero leading coefficient");
        return Err(Error::InvalidLeadingCoefficient);
    }
    Ok(coeffs)
}
