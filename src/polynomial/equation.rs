use crate::Utils::config::ComputorConfig;
use crate::polynomial::coefficient_map::CoefficientMap;
use crate::polynomial::errors::ComputorError;
use crate::polynomial::grammar::validate;
use crate::polynomial::parse_terms::aggregate;
use crate::polynomial::solver::{Solution, solve};
use log::{error, info};

/// highest degree the solver accepts
pub const MAX_DEGREE: u64 = 2;

/// Equation parsed from a string and reduced to "polynomial = 0"
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    pub input: String,
    pub coefficients: CoefficientMap,
}

impl Equation {
    /// syntax check, then all terms are moved to the left side and summed by degree
    pub fn parse(input: &str) -> Result<Self, ComputorError> {
        validate(input)?;
        let coefficients = aggregate(input)?;
        info!("'{}' reduced to coefficients {}", input, coefficients);
        Ok(Equation {
            input: input.to_string(),
            coefficients,
        })
    }

    pub fn reduced_form(&self, config: &ComputorConfig) -> String {
        self.coefficients.reduced_form(config.reduced_form_style)
    }

    /// None for the zero polynomial
    pub fn degree(&self) -> Option<u64> {
        self.coefficients.degree()
    }

    /// degree as printed: "-inf" for the zero polynomial
    pub fn degree_str(&self) -> String {
        match self.degree() {
            Some(degree) => degree.to_string(),
            None => "-inf".to_string(),
        }
    }

    /// Polynomials of degree greater than 2 are refused
    pub fn solve(&self, config: &ComputorConfig) -> Result<Solution, ComputorError> {
        if let Some(degree) = self.degree() {
            if degree > MAX_DEGREE {
                error!("polynomial degree {} is greater than {}", degree, MAX_DEGREE);
                return Err(ComputorError::UnsupportedDegree(degree));
            }
        }
        let (a, b, c) = self.coefficients.quadratic_coefficients();
        solve(a, b, c, config)
    }
}
