use crate::polynomial::errors::ComputorError;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

// one side: optional sign of the first term, then "number * X^degree" terms joined by " + " / " - "
const SIDE_PATTERN: &str =
    r"([+\-] )?[0-9]+(\.[0-9]+)? \* [xX]\^[0-9]+( [+\-] [0-9]+(\.[0-9]+)? \* [xX]\^[0-9]+)*";

static EXPRESSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!("^{0} = {0}$", SIDE_PATTERN);
    Regex::new(&pattern).expect("equation pattern must compile")
});

/// true if the whole string is "SIDE = SIDE" with explicit coefficient and degree in every term
pub fn is_valid_expression(input: &str) -> bool {
    EXPRESSION_RE.is_match(input)
}

pub fn validate(input: &str) -> Result<(), ComputorError> {
    if is_valid_expression(input) {
        debug!("expression '{}' is valid", input);
        Ok(())
    } else {
        Err(ComputorError::InvalidExpression(input.to_string()))
    }
}
