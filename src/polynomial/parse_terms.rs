use crate::polynomial::coefficient_map::CoefficientMap;
use crate::polynomial::errors::ComputorError;
use log::debug;
use nom::{
    IResult, Parser,
    bytes::complete::tag,
    character::complete::{char, digit1, one_of},
    combinator::{all_consuming, map, map_res, opt, recognize},
    multi::many0,
    sequence::{pair, preceded, terminated},
};

/// One signed term "coefficient * X^exponent"
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Monomial {
    pub coefficient: f64,
    pub exponent: u64,
}

/// "+ " or "- " in front of a term
fn parse_sign(input: &str) -> IResult<&str, f64> {
    let sign = terminated(one_of("+-"), char(' '));
    let mut parser = map(sign, |c: char| if c == '-' { -1.0 } else { 1.0 });
    parser.parse(input)
}

/// digits with an optional fractional part: "4", "9.3"
fn parse_number(input: &str) -> IResult<&str, f64> {
    let number = recognize(pair(digit1, opt(pair(char('.'), digit1))));
    let mut parser = map_res(number, |s: &str| s.parse::<f64>());
    parser.parse(input)
}

fn parse_exponent(input: &str) -> IResult<&str, u64> {
    let mut parser = map_res(digit1, |s: &str| s.parse::<u64>());
    parser.parse(input)
}

/// number * X^exponent
fn parse_unsigned_monomial(input: &str) -> IResult<&str, Monomial> {
    let (input, coefficient) = parse_number(input)?;
    let (input, _) = tag(" * ").parse(input)?;
    let (input, _) = one_of("xX").parse(input)?;
    let (input, _) = char('^').parse(input)?;
    let (input, exponent) = parse_exponent(input)?;
    Ok((
        input,
        Monomial {
            coefficient,
            exponent,
        },
    ))
}

fn apply_sign(sign: f64, monomial: Monomial) -> Monomial {
    Monomial {
        coefficient: sign * monomial.coefficient,
        exponent: monomial.exponent,
    }
}

/// (sign)? number * X^exponent, a missing sign is "+"
pub(crate) fn parse_monomial(input: &str) -> IResult<&str, Monomial> {
    let mut parser = map(
        pair(opt(parse_sign), parse_unsigned_monomial),
        |(sign, monomial): (Option<f64>, Monomial)| apply_sign(sign.unwrap_or(1.0), monomial),
    );
    parser.parse(input)
}

/// sign number * X^exponent, every term after the first one
fn parse_signed_monomial(input: &str) -> IResult<&str, Monomial> {
    let mut parser = map(
        pair(parse_sign, parse_unsigned_monomial),
        |(sign, monomial): (f64, Monomial)| apply_sign(sign, monomial),
    );
    parser.parse(input)
}

/// all terms of one side: "5 * X^0 + 4 * X^1 - 9.3 * X^2"
fn parse_monomials(input: &str) -> IResult<&str, Vec<Monomial>> {
    let terms = pair(
        parse_monomial,
        many0(preceded(char(' '), parse_signed_monomial)),
    );
    let mut parser = all_consuming(map(terms, |(first, rest): (Monomial, Vec<Monomial>)| {
        let mut monomials = Vec::with_capacity(rest.len() + 1);
        monomials.push(first);
        monomials.extend(rest);
        monomials
    }));
    parser.parse(input)
}

/// Splits "left = right" into its two sides
pub fn split_sides(input: &str) -> Result<(&str, &str), ComputorError> {
    let sides: Vec<&str> = input.split('=').collect();
    match sides.as_slice() {
        [left, right] => Ok((left.trim(), right.trim())),
        _ => Err(ComputorError::NoEqualsSign),
    }
}

/// Scans one side left to right. side_multiplier is 1.0 for the left side and -1.0 for the right one
/// (terms of the right side are moved to the left). The whole side must consist of terms.
pub fn parse_side(side: &str, side_multiplier: f64) -> Result<Vec<Monomial>, ComputorError> {
    let (_, monomials) = parse_monomials(side)
        .map_err(|_| ComputorError::InvalidExpression(side.to_string()))?;
    let monomials: Vec<Monomial> = monomials
        .into_iter()
        .map(|m| Monomial {
            coefficient: m.coefficient * side_multiplier,
            exponent: m.exponent,
        })
        .collect();
    debug!("side '{}' -> {:?}", side, monomials);
    Ok(monomials)
}

/// Moves all terms to the left side and sums coefficients of equal degree:
/// "5 * X^0 + 4 * X^1 + 1 * X^2 = 1 * X^2" -> {0: 5, 1: 4, 2: 0}
pub fn aggregate(input: &str) -> Result<CoefficientMap, ComputorError> {
    let (left, right) = split_sides(input)?;
    let left_terms = parse_side(left, 1.0)?;
    let right_terms = parse_side(right, -1.0)?;

    let mut map = CoefficientMap::new();
    for term in left_terms.iter().chain(right_terms.iter()) {
        map.add_term(term.exponent, term.coefficient);
    }
    debug!("coefficient map {}", map);
    Ok(map)
}
