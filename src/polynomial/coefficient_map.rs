use crate::polynomial::numeric_utils::{format_number, sign_str};
use itertools::Itertools;
use std::collections::BTreeMap;
use std::fmt;
use strum_macros::{Display, EnumString};

/// How terms of the reduced form are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ReducedFormStyle {
    /// every term as "c * X^e": "5 * X^0 + 4 * X^1 - X^2 = 0"
    #[default]
    #[strum(serialize = "canonical")]
    Canonical,
    /// "X" for the first degree and a bare number for the zero degree: "5 + 4 * X - X^2 = 0"
    #[strum(serialize = "natural")]
    Natural,
}

/// Map exponent -> coefficient of the equation with every term moved to the left side.
/// A key is present if at least one term had this exponent, even if the coefficients cancelled out.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoefficientMap {
    coefficients: BTreeMap<u64, f64>,
}

impl CoefficientMap {
    pub fn new() -> Self {
        CoefficientMap {
            coefficients: BTreeMap::new(),
        }
    }

    /// map[exponent] += coefficient, starting from zero
    pub fn add_term(&mut self, exponent: u64, coefficient: f64) {
        *self.coefficients.entry(exponent).or_insert(0.0) += coefficient;
    }

    /// coefficient of the given degree, zero if no term of this degree was seen
    pub fn get(&self, exponent: u64) -> f64 {
        self.coefficients.get(&exponent).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, exponent: u64) -> bool {
        self.coefficients.contains_key(&exponent)
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// (exponent, coefficient) pairs in ascending exponent order, zeros included
    pub fn iter(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.coefficients.iter().map(|(&e, &c)| (e, c))
    }

    /// nonzero (exponent, coefficient) pairs in ascending exponent order
    pub fn nonzero_terms(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.iter().filter(|&(_, c)| c != 0.0)
    }

    /// largest exponent with a nonzero coefficient; None for the zero polynomial
    pub fn degree(&self) -> Option<u64> {
        self.nonzero_terms().map(|(e, _)| e).max()
    }

    /// (a, b, c) of a*x^2 + b*x + c
    pub fn quadratic_coefficients(&self) -> (f64, f64, f64) {
        (self.get(2), self.get(1), self.get(0))
    }

    /// "a * X^0 + b * X^1 - ... = 0", "0 = 0" when every coefficient is zero
    pub fn reduced_form(&self, style: ReducedFormStyle) -> String {
        let terms = self
            .nonzero_terms()
            .map(|(exponent, coefficient)| render_term(exponent, coefficient, style))
            .join(" ");
        if terms.is_empty() {
            return "0 = 0".to_string();
        }
        let terms = terms.strip_prefix("+ ").unwrap_or(&terms);
        format!("{} = 0", terms)
    }
}

fn render_term(exponent: u64, coefficient: f64, style: ReducedFormStyle) -> String {
    let sign = sign_str(coefficient);
    let abs = coefficient.abs();
    let unit = abs == 1.0;
    match style {
        ReducedFormStyle::Canonical => {
            if unit {
                format!("{} X^{}", sign, exponent)
            } else {
                format!("{} {} * X^{}", sign, format_number(abs), exponent)
            }
        }
        ReducedFormStyle::Natural => match (exponent, unit) {
            (0, _) => format!("{} {}", sign, format_number(abs)),
            (1, true) => format!("{} X", sign),
            (1, false) => format!("{} {} * X", sign, format_number(abs)),
            (_, true) => format!("{} X^{}", sign, exponent),
            (_, false) => format!("{} {} * X^{}", sign, format_number(abs), exponent),
        },
    }
}

impl fmt::Display for CoefficientMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entries = self
            .iter()
            .map(|(e, c)| format!("{}: {}", e, format_number(c)))
            .join(", ");
        write!(f, "{{{}}}", entries)
    }
}

impl FromIterator<(u64, f64)> for CoefficientMap {
    fn from_iter<I: IntoIterator<Item = (u64, f64)>>(iter: I) -> Self {
        let mut map = CoefficientMap::new();
        for (exponent, coefficient) in iter {
            map.add_term(exponent, coefficient);
        }
        map
    }
}
