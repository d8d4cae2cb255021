//! Human-readable renderings of polynomials and their roots.

use crate::{Coefficients, Solution};

const SUPERSCRIPTS: [&str; 6] = ["⁰", "¹", "²", "³", "⁴", "⁵"];

/// Renders a single non-zero term, like `3x²`, `-x` or `-1`.
fn term(coeff: f64, power: usize) -> String {
    let mut ret = if coeff == -1.0 {
        "-".to_owned()
    } else if coeff == 1.0 {
        String::new()
    } else {
        coeff.to_string()
    };

    match (power, SUPERSCRIPTS.get(power)) {
        // A bare sign needs something to attach to.
        (0, _) if coeff.abs() == 1.0 => ret.push('1'),
        (0, _) => {}
        (1, _) => ret.push('x'),
        (_, Some(s)) => {
            ret.push('x');
            ret.push_str(s);
        }
        (_, None) => ret.push_str(&format!("x^{power}")),
    }
    ret
}

/// Renders `coeffs` as an equation, like `3x³ + 2x² - 5x + 1 = 0`.
///
/// Zero terms are left out, and coefficients of `±1` are left implicit
/// except on the constant term. If every coefficient is zero the result is
/// `0 = 0`.
pub fn format_equation(coeffs: &Coefficients) -> String {
    let degree = coeffs.degree();
    let terms: Vec<String> = coeffs
        .as_slice()
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c != 0.0)
        .map(|(i, &c)| term(c, degree - i))
        .collect();

    if terms.is_empty() {
        "0 = 0".to_owned()
    } else {
        terms.join(" + ").replace("+ -", "- ") + " = 0"
    }
}

/// Renders a list of solutions as a short report, one root per line.
pub fn format_solutions(solutions: &[Solution]) -> String {
    if solutions.is_empty() {
        return "No solutions found.".to_owned();
    }

    let lines: Vec<String> = solutions
        .iter()
        .enumerate()
        .map(|(i, s)| format!("x{} = {s}", i + 1))
        .collect();
    format!("Solutions found:\n{}", lines.join("\n"))
}
