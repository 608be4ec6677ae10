/////////////////////////////TESTS////////////////////////////////////////////////////
/*
whole pipeline: string -> coefficient map -> reduced form -> degree -> roots
*/
use crate::Utils::config::ComputorConfig;
use crate::polynomial::coefficient_map::{CoefficientMap, ReducedFormStyle};
use crate::polynomial::equation::Equation;
use crate::polynomial::errors::ComputorError;
use crate::polynomial::solver::Classification;
use approx::relative_eq;

fn coefficients(equation: &Equation) -> Vec<(u64, f64)> {
    equation.coefficients.iter().collect()
}

#[test]
fn test_cancelled_square_term_gives_linear() {
    let config = ComputorConfig::default();
    let equation = Equation::parse("5 * X^0 + 4 * X^1 + 1 * X^2 = 1 * X^2").unwrap();
    assert_eq!(coefficients(&equation), vec![(0, 5.0), (1, 4.0), (2, 0.0)]);
    assert_eq!(equation.degree(), Some(1));
    assert_eq!(equation.reduced_form(&config), "5 * X^0 + 4 * X^1 = 0");
    let solution = equation.solve(&config).unwrap();
    assert_eq!(solution.classification, Classification::Linear);
    assert!(relative_eq!(solution.roots[0].re, -1.25, epsilon = 1e-12));
    assert_eq!(solution.formatted_roots(&config), vec!["-1.250"]);
}

#[test]
fn test_two_real_roots() {
    let config = ComputorConfig::default();
    let equation = Equation::parse("1 * X^2 - 2 * X^1 - 3 * X^0 = 0 * X^8").unwrap();
    assert_eq!(
        coefficients(&equation),
        vec![(0, -3.0), (1, -2.0), (2, 1.0), (8, 0.0)]
    );
    assert_eq!(equation.degree(), Some(2));
    assert_eq!(equation.reduced_form(&config), "- 3 * X^0 - 2 * X^1 + X^2 = 0");
    let solution = equation.solve(&config).unwrap();
    assert_eq!(solution.classification, Classification::QuadraticTwoReal);
    assert_eq!(solution.discriminant, Some(16.0));
    assert_eq!(solution.formatted_roots(&config), vec!["-1.000", "3.000"]);
}

#[test]
fn test_two_real_roots_lowercase() {
    let config = ComputorConfig::default();
    let equation = Equation::parse("15 * x^0 - 2 * x^1 - 1 * x^2 = 0 * x^3").unwrap();
    let solution = equation.solve(&config).unwrap();
    assert_eq!(solution.formatted_roots(&config), vec!["3.000", "-5.000"]);
}

#[test]
fn test_one_root() {
    let config = ComputorConfig::default();
    let equation = Equation::parse("1 * X^2 + 12 * X^1 + 36 * X^0 = 0 * X^4").unwrap();
    let solution = equation.solve(&config).unwrap();
    assert_eq!(solution.classification, Classification::QuadraticOneRoot);
    assert_eq!(solution.discriminant, Some(0.0));
    assert_eq!(solution.formatted_roots(&config), vec!["-6.000"]);
}

#[test]
fn test_complex_roots() {
    let config = ComputorConfig::default();
    let equation = Equation::parse("1 * X^2 + 3 * X^1 + 5 * X^0 = 2 * X^0").unwrap();
    assert_eq!(equation.coefficients.get(0), 3.0);
    let solution = equation.solve(&config).unwrap();
    assert_eq!(solution.classification, Classification::QuadraticComplex);
    let (r1, r2) = (solution.roots[0], solution.roots[1]);
    assert_eq!(r1.re, r2.re);
    assert_eq!(r1.im, -r2.im);
    assert_eq!(
        solution.formatted_roots(&config),
        vec!["-1.50 - 0.87i", "-1.50 + 0.87i"]
    );
}

#[test]
fn test_unsupported_degree() {
    let config = ComputorConfig::default();
    let equation = Equation::parse("1 * X^3 + 1 * X^0 = 0 * X^0").unwrap();
    assert_eq!(equation.degree(), Some(3));
    assert_eq!(equation.reduced_form(&config), "X^0 + X^3 = 0");
    let result = equation.solve(&config);
    assert_eq!(result, Err(ComputorError::UnsupportedDegree(3)));
    assert_eq!(result.unwrap_err().exit_code(), 3);
}

#[test]
fn test_high_exponent_with_zero_coefficient_is_solved() {
    let config = ComputorConfig::default();
    let equation = Equation::parse("2 * X^1 + 3 * X^5 = 3 * X^5 + 4 * X^0").unwrap();
    assert_eq!(equation.degree(), Some(1));
    let solution = equation.solve(&config).unwrap();
    assert_eq!(solution.formatted_roots(&config), vec!["2.000"]);
}

#[test]
fn test_zero_polynomial() {
    let config = ComputorConfig::default();
    let equation = Equation::parse("1 * X^1 + 2 * X^2 = 1 * X^1 + 2 * X^2").unwrap();
    assert_eq!(equation.degree(), None);
    assert_eq!(equation.degree_str(), "-inf");
    assert_eq!(equation.reduced_form(&config), "0 = 0");
    let solution = equation.solve(&config).unwrap();
    assert_eq!(solution.classification, Classification::AllReals);
    assert!(solution.roots.is_empty());
}

#[test]
fn test_no_solution() {
    let config = ComputorConfig::default();
    let equation = Equation::parse("4 * X^0 + 1 * X^1 = 1 * X^1").unwrap();
    assert_eq!(equation.degree(), Some(0));
    let solution = equation.solve(&config).unwrap();
    assert_eq!(solution.classification, Classification::NoSolution);
    assert_eq!(solution.roots_or_error(), Err(ComputorError::NoSolution));
}

#[test]
fn test_malformed_input_is_rejected_before_aggregation() {
    for input in [
        "5 X^0 = 1 * X^0",
        "5 * X0 = 1 * X^0",
        "5 * X^0 + 1 * X^1",
        "5 * X^0 = 1 * X^1 = 1 * X^2",
        "5 * X^-1 = 1 * X^0",
        "X^2 = 1 * X^0",
    ] {
        let result = Equation::parse(input);
        assert_eq!(
            result,
            Err(ComputorError::InvalidExpression(input.to_string())),
            "input {}",
            input
        );
        assert_eq!(result.unwrap_err().exit_code(), 2);
    }
}

#[test]
fn test_reduced_form_is_idempotent() {
    let config = ComputorConfig::default();
    let equation = Equation::parse("5 * X^0 + 4 * X^1 - 9.3 * X^2 = 2 * X^1 + 3 * X^0").unwrap();
    let reduced = equation.reduced_form(&config);
    assert_eq!(reduced, "2 * X^0 + 2 * X^1 - 9.3 * X^2 = 0");
    // the reduced form is itself an equation once the right side gets an explicit term
    let again = Equation::parse(&reduced.replace("= 0", "= 0 * X^0")).unwrap();
    assert_eq!(again.reduced_form(&config), reduced);
    assert_eq!(
        again.coefficients.nonzero_terms().collect::<Vec<_>>(),
        equation.coefficients.nonzero_terms().collect::<Vec<_>>()
    );
}

#[test]
fn test_reduced_form_idempotent_with_leading_minus() {
    let config = ComputorConfig::default();
    let equation = Equation::parse("2 * X^1 = 3 * X^0 + 4 * X^2").unwrap();
    let reduced = equation.reduced_form(&config);
    assert_eq!(reduced, "- 3 * X^0 + 2 * X^1 - 4 * X^2 = 0");
    let again = Equation::parse(&reduced.replace("= 0", "= 0 * X^0")).unwrap();
    assert_eq!(again.reduced_form(&config), reduced);
}

#[test]
fn test_natural_reduced_form() {
    let mut config = ComputorConfig::default();
    config.reduced_form_style = ReducedFormStyle::Natural;
    let equation = Equation::parse("5 * X^0 + 4 * X^1 = 1 * X^2").unwrap();
    assert_eq!(equation.reduced_form(&config), "5 + 4 * X - X^2 = 0");
}

#[test]
fn test_solution_is_pure_function_of_coefficients() {
    let config = ComputorConfig::default();
    let a = Equation::parse("1 * X^2 - 2 * X^1 = 3 * X^0").unwrap();
    let b = Equation::parse("1 * X^2 + 1 * X^0 = 2 * X^1 + 4 * X^0").unwrap();
    assert_eq!(a.coefficients, b.coefficients);
    assert_eq!(a.solve(&config), b.solve(&config));
    let empty: CoefficientMap = Vec::<(u64, f64)>::new().into_iter().collect();
    assert_eq!(empty.degree(), None);
}

#[test]
fn test_tiny_coefficients() {
    let config = ComputorConfig::default();
    let equation = Equation::parse("0.0000000001 * X^2 = 0.0000000001 * X^0").unwrap();
    let solution = equation.solve(&config).unwrap();
    assert_eq!(solution.classification, Classification::QuadraticTwoReal);
    assert_eq!(solution.formatted_roots(&config), vec!["-1.000", "1.000"]);

    let equation = Equation::parse("0.0000000001 * X^2 + 0.0000000001 * X^0 = 0 * X^0").unwrap();
    let solution = equation.solve(&config).unwrap();
    assert_eq!(solution.classification, Classification::QuadraticComplex);
    assert_eq!(
        solution.formatted_roots(&config),
        vec!["0.00 - 1.00i", "0.00 + 1.00i"]
    );
}

#[test]
fn test_huge_coefficients() {
    let config = ComputorConfig::default();
    // 1e200 written out digit by digit
    let big = format!("1{}", "0".repeat(200));
    let input = format!("{0} * X^2 + {0} * X^1 + {0} * X^0 = 0 * X^0", big);
    let equation = Equation::parse(&input).unwrap();
    assert_eq!(equation.degree(), Some(2));
    let solution = equation.solve(&config).unwrap();
    assert_eq!(solution.classification, Classification::QuadraticComplex);
    assert_eq!(
        solution.formatted_roots(&config),
        vec!["-0.50 - 0.87i", "-0.50 + 0.87i"]
    );
}

#[test]
fn test_coefficient_beyond_f64_range() {
    let config = ComputorConfig::default();
    let huge = format!("1{}", "0".repeat(400));
    let equation = Equation::parse(&format!("{} * X^1 = 1 * X^0", huge)).unwrap();
    let result = equation.solve(&config);
    assert!(matches!(result, Err(ComputorError::NumericOverflow(_))));
    assert_eq!(result.unwrap_err().exit_code(), 2);
}

#[test]
fn test_exponent_beyond_u32_with_zero_coefficient() {
    let config = ComputorConfig::default();
    let equation = Equation::parse("1 * X^1 = 0 * X^4294967296").unwrap();
    assert_eq!(equation.degree(), Some(1));
    assert_eq!(equation.reduced_form(&config), "X^1 = 0");
    let solution = equation.solve(&config).unwrap();
    assert_eq!(solution.formatted_roots(&config), vec!["0.000"]);

    let equation = Equation::parse("1 * X^1 = 2 * X^4294967296").unwrap();
    assert_eq!(
        equation.solve(&config),
        Err(ComputorError::UnsupportedDegree(4294967296))
    );
}
