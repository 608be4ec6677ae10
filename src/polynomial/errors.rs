use std::fmt;

/// Error types of parsing, configuring and solving an equation
#[derive(Debug, Clone, PartialEq)]
pub enum ComputorError {
    /// the string does not match "number * X^degree" terms on both sides of "="
    InvalidExpression(String),
    /// the equation cannot be split into exactly two sides
    NoEqualsSign,
    /// reduced polynomial has degree greater than 2
    UnsupportedDegree(u64),
    /// a = b = 0 and c != 0
    NoSolution,
    /// a coefficient or a root is infinite or NaN
    NumericOverflow(String),
    InvalidConfig(String),
    Io(String),
}

impl fmt::Display for ComputorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ComputorError::InvalidExpression(expr) => write!(f, "Expression not valid: '{}'", expr),
            ComputorError::NoEqualsSign => write!(f, "No single \"=\" sign in the expression"),
            ComputorError::UnsupportedDegree(degree) => write!(
                f,
                "The polynomial degree is strictly greater than 2 (degree {}), I can't solve.",
                degree
            ),
            ComputorError::NoSolution => write!(f, "No solution"),
            ComputorError::NumericOverflow(msg) => {
                write!(f, "Number out of the f64 range: {}", msg)
            }
            ComputorError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            ComputorError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ComputorError {}

impl From<std::io::Error> for ComputorError {
    fn from(err: std::io::Error) -> Self {
        ComputorError::Io(err.to_string())
    }
}

impl ComputorError {
    /// process exit code reported by the command line tool
    pub fn exit_code(&self) -> i32 {
        match self {
            ComputorError::NoSolution => 0,
            ComputorError::InvalidConfig(_) | ComputorError::Io(_) => 1,
            ComputorError::InvalidExpression(_)
            | ComputorError::NoEqualsSign
            | ComputorError::NumericOverflow(_) => 2,
            ComputorError::UnsupportedDegree(_) => 3,
        }
    }
}
