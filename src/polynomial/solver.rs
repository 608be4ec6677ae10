use crate::Utils::config::ComputorConfig;
use crate::polynomial::errors::ComputorError;
use crate::polynomial::numeric_utils::{newton_sqrt, normalize_zero};
use log::{debug, info};
use num_complex::Complex;
use strum_macros::Display;

/// Kind of the equation a*x^2 + b*x + c = 0 and of its set of roots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Classification {
    /// a = b = 0, c != 0
    NoSolution,
    /// a = b = c = 0
    AllReals,
    /// a = 0, b != 0
    Linear,
    /// discriminant is zero
    QuadraticOneRoot,
    /// discriminant is strictly positive
    QuadraticTwoReal,
    /// discriminant is strictly negative
    QuadraticComplex,
}

impl Classification {
    /// line printed before the roots
    pub fn message(&self) -> &'static str {
        match self {
            Classification::NoSolution => "No solution",
            Classification::AllReals => "All the real numbers are solution",
            Classification::Linear => "Linear equation, the solution is:",
            Classification::QuadraticOneRoot => "Discriminant is zero, the solution is:",
            Classification::QuadraticTwoReal => {
                "Discriminant is strictly positive, the two solutions are:"
            }
            Classification::QuadraticComplex => {
                "Discriminant is strictly negative, the two complex solutions are:"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub classification: Classification,
    /// for two roots the "minus" branch goes first
    pub roots: Vec<Complex<f64>>,
    /// b^2 - 4ac, only for quadratic equations
    pub discriminant: Option<f64>,
}

impl Solution {
    fn new(
        classification: Classification,
        roots: Vec<Complex<f64>>,
        discriminant: Option<f64>,
    ) -> Self {
        Solution {
            classification,
            roots,
            discriminant,
        }
    }

    /// roots, or NoSolution error for a contradictory equation
    pub fn roots_or_error(&self) -> Result<&[Complex<f64>], ComputorError> {
        match self.classification {
            Classification::NoSolution => Err(ComputorError::NoSolution),
            _ => Ok(&self.roots),
        }
    }

    /// roots as strings: real ones with config.real_precision decimals,
    /// complex ones as "re + imi" with config.complex_precision decimals
    pub fn formatted_roots(&self, config: &ComputorConfig) -> Vec<String> {
        self.roots
            .iter()
            .map(|root| {
                if self.classification == Classification::QuadraticComplex {
                    format_complex(root, config.complex_precision)
                } else {
                    format!("{:.*}", config.real_precision, normalize_zero(root.re))
                }
            })
            .collect()
    }
}

fn format_complex(root: &Complex<f64>, precision: usize) -> String {
    let sign = if root.im < 0.0 { "-" } else { "+" };
    format!(
        "{:.*} {} {:.*}i",
        precision,
        normalize_zero(root.re),
        sign,
        precision,
        root.im.abs()
    )
}

/// Solves a*x^2 + b*x + c = 0. Infinite or NaN coefficients and roots that overflow f64
/// give NumericOverflow.
pub fn solve(
    a: f64,
    b: f64,
    c: f64,
    config: &ComputorConfig,
) -> Result<Solution, ComputorError> {
    debug!("solving with a = {}, b = {}, c = {}", a, b, c);
    for (exponent, value) in [(2, a), (1, b), (0, c)] {
        if !value.is_finite() {
            return Err(ComputorError::NumericOverflow(format!(
                "coefficient of X^{} is {}",
                exponent, value
            )));
        }
    }
    let solution = if a != 0.0 {
        solve_quadratic(a, b, c, config)
    } else if b != 0.0 {
        let x = normalize_zero(-c / b);
        Solution::new(Classification::Linear, vec![Complex::new(x, 0.0)], None)
    } else if c != 0.0 {
        Solution::new(Classification::NoSolution, Vec::new(), None)
    } else {
        Solution::new(Classification::AllReals, Vec::new(), None)
    };
    if let Some(root) = solution
        .roots
        .iter()
        .find(|root| !root.re.is_finite() || !root.im.is_finite())
    {
        return Err(ComputorError::NumericOverflow(format!("root {}", root)));
    }
    info!("equation classified as {}", solution.classification);
    Ok(solution)
}

/// power of two not greater than x (x > 0), kept in the normal f64 range so that dividing by it
/// is exact
fn power_of_two_scale(x: f64) -> f64 {
    let exponent = (x.log2().floor() as i32).clamp(f64::MIN_EXP - 1, f64::MAX_EXP - 1);
    2f64.powi(exponent)
}

/// The coefficients are divided by a power of two close to max(|a|, |b|, |c|) before the
/// discriminant is computed: roots do not change and b^2 - 4ac neither overflows nor vanishes.
/// The reported discriminant is scaled back and may be infinite for huge coefficients.
fn solve_quadratic(a: f64, b: f64, c: f64, config: &ComputorConfig) -> Solution {
    let scale = power_of_two_scale(a.abs().max(b.abs()).max(c.abs()));
    let (a, b, c) = (a / scale, b / scale, c / scale);
    let d = b * b - 4.0 * a * c;
    let discriminant = d * scale * scale;
    info!("discriminant = {} (scaled by {:e}: {})", discriminant, scale, d);
    let two_a = 2.0 * a;
    if d < 0.0 {
        let sqrt_d = newton_sqrt(-d, config.tolerance, config.max_iterations);
        let re = normalize_zero(-b / two_a);
        let im = sqrt_d / two_a;
        let roots = vec![Complex::new(re, -im), Complex::new(re, im)];
        Solution::new(Classification::QuadraticComplex, roots, Some(discriminant))
    } else if d == 0.0 {
        let x = normalize_zero(-b / two_a);
        Solution::new(
            Classification::QuadraticOneRoot,
            vec![Complex::new(x, 0.0)],
            Some(discriminant),
        )
    } else {
        let sqrt_d = newton_sqrt(d, config.tolerance, config.max_iterations);
        let x1 = normalize_zero((-b - sqrt_d) / two_a);
        let x2 = normalize_zero((-b + sqrt_d) / two_a);
        Solution::new(
            Classification::QuadraticTwoReal,
            vec![Complex::new(x1, 0.0), Complex::new(x2, 0.0)],
            Some(discriminant),
        )
    }
}
