use crate::{
    Coefficients, Degree, Error, RawCoefficients, Result, Roots, SampleDomain, SamplePoint, aberth,
    analytic, format_equation, newton::NewtonConfig, normalize, sample,
};

/// How to find the roots of cubics, quartics and quintics.
///
/// Linear and quadratic polynomials are always solved in closed form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Multi-start Newton-Raphson. Only finds real roots, and might miss some
    /// of those. See [`crate::newton`].
    #[default]
    Newton,
    /// Aberth-Ehrlich iteration, which finds every root, real or complex.
    /// See [`crate::aberth`].
    Aberth,
}

/// Everything a front end needs to show after solving a form.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solved {
    pub coefficients: Vec<f64>,
    pub equation: String,
    pub solutions: Roots,
    pub samples: Vec<SamplePoint>,
}

/// A root-finding configuration.
///
/// The default configuration matches [`solve`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Solver {
    pub method: Method,
    pub newton: NewtonConfig,
    pub domain: SampleDomain,
}

/// Finds the roots of `coeffs` with the default [`Solver`].
pub fn solve(coeffs: &Coefficients) -> Result<Roots> {
    Solver::default().solve(coeffs)
}

impl Solver {
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_newton(mut self, newton: NewtonConfig) -> Self {
        self.newton = newton;
        self
    }

    pub fn with_domain(mut self, domain: SampleDomain) -> Self {
        self.domain = domain;
        self
    }

    /// Finds the roots of `coeffs`.
    ///
    /// Fails only if the leading coefficient is zero. An empty list of roots
    /// is not a failure: it means the numerical method didn't find any.
    pub fn solve(&self, coeffs: &Coefficients) -> Result<Roots> {
        if coeffs.leading() == 0.0 {
            return Err(Error::InvalidLeadingCoefficient);
        }

        let degree = Degree::new(coeffs.degree())?;
        let c = coeffs.as_slice();
        let roots = match degree {
            Degree::LINEAR => analytic::solve_linear(c[0], c[1]).into_iter().collect(),
            Degree::QUADRATIC => analytic::solve_quadratic(c[0], c[1], c[2])
                .into_iter()
                .collect(),
            _ => match self.method {
                Method::Newton => self.newton.find_roots(coeffs),
                Method::Aberth => aberth::find_all_roots(coeffs),
            },
        };
        tracing::debug!(%degree, method = ?self.method, found = roots.len(), "solved");
        Ok(roots)
    }

    /// Parses a coefficient form, solves it, and renders the results.
    pub fn solve_input(&self, raw: &RawCoefficients, degree: Degree) -> Result<Solved> {
        let coeffs = normalize(raw, degree)?;
        let solutions = self.solve(&coeffs)?;
        Ok(Solved {
            coefficients: coeffs.as_slice().to_vec(),
            equation: format_equation(&coeffs),
            samples: sample(&coeffs, self.domain),
            solutions,
        })
    }
}
