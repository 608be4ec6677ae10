use log::{debug, warn};
use num_traits::Float;

/// default distance between two successive Newton iterates at which the square root is accepted,
/// relative to the iterate when the root is below one
pub const SQRT_TOLERANCE: f64 = 1e-9;
/// starting from n itself, the largest finite f64 needs about 520 halvings before quadratic convergence
pub const SQRT_MAX_ITERATIONS: usize = 2000;

/// Square root of a nonnegative number by Newton-Raphson iterations x_{k+1} = (x_k + n/x_k)/2.
/// Iterations start above the root so the sequence decreases monotonically; they stop when two
/// successive iterates differ by less than `tolerance * min(x_k, 1)` or the sequence stops
/// decreasing (rounding floor for large arguments). Negative and NaN arguments give NaN.
pub fn newton_sqrt<T: Float>(n: T, tolerance: T, max_iterations: usize) -> T {
    if n.is_nan() || n < T::zero() {
        return T::nan();
    }
    if n == T::zero() || n.is_infinite() {
        return n;
    }
    let two = T::one() + T::one();
    let mut val = n.max(T::one());
    for i in 0..max_iterations {
        let last = val;
        val = (val + n / val) / two;
        if val >= last {
            debug!("newton_sqrt: rounding floor reached after {} iterations", i + 1);
            return last;
        }
        if last - val < tolerance * val.min(T::one()) {
            debug!("newton_sqrt: converged after {} iterations", i + 1);
            return val;
        }
    }
    warn!(
        "newton_sqrt: maximum number of iterations ({}) reached, returning last iterate",
        max_iterations
    );
    val
}

/// newton_sqrt with the default tolerance and iteration cap
pub fn sqrt(n: f64) -> f64 {
    newton_sqrt(n, SQRT_TOLERANCE, SQRT_MAX_ITERATIONS)
}

/// "+" for nonnegative numbers, "-" otherwise
pub fn sign_str(x: f64) -> &'static str {
    if x < 0.0 { "-" } else { "+" }
}

/// turns -0.0 into 0.0 so that roots are never printed as "-0.000"
pub fn normalize_zero(x: f64) -> f64 {
    if x == 0.0 { 0.0 } else { x }
}

/// shortest representation of a number without a trailing ".0"
pub fn format_number(x: f64) -> String {
    let s = normalize_zero(x).to_string();
    match s.strip_suffix(".0") {
        Some(stripped) => stripped.to_string(),
        None => s,
    }
}
