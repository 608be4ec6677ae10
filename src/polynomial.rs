#![allow(non_snake_case)]
/// # Polynomial equations up to the second degree
/// a module
/// 1) checks that a String equation has the form "a * X^0 + b * X^1 ... = c * X^2 ..."
/// 2) moves all terms to the left side and sums coefficients of the same degree
/// 3) renders the reduced form, finds the degree and solves the equation
///# Example
/// ```
/// use RustedComputor::polynomial::equation::Equation;
/// use RustedComputor::polynomial::solver::Classification;
/// use RustedComputor::Utils::config::ComputorConfig;
/// let config = ComputorConfig::default();
/// let equation = Equation::parse("1 * X^2 - 2 * X^1 - 3 * X^0 = 0 * X^8").unwrap();
/// println!("reduced form: {}", equation.reduced_form(&config));
/// assert_eq!(equation.degree(), Some(2));
/// let solution = equation.solve(&config).unwrap();
/// assert_eq!(solution.classification, Classification::QuadraticTwoReal);
/// assert_eq!(solution.formatted_roots(&config), vec!["-1.000", "3.000"]);
/// ```
/// ________________________________________________________________________________________________
/// syntax check of the whole equation string
pub mod grammar;
/// nom scanner of signed monomials and folding of both sides into a map exponent -> coefficient
pub mod parse_terms;
/// map exponent -> coefficient: degree and reduced form
pub mod coefficient_map;
/// roots of a*x^2 + b*x + c = 0
pub mod solver;
/// Newton-Raphson square root and small sign helpers shared by the solver
pub mod numeric_utils;
/// error type of the whole pipeline
pub mod errors;
/// string -> reduced form -> degree -> solution
pub mod equation;
#[cfg(test)]
mod polynomial_tests;
