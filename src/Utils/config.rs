use crate::Utils::task_parser::{DocumentMap, Value, parse_document_as};
use crate::polynomial::coefficient_map::ReducedFormStyle;
use crate::polynomial::errors::ComputorError;
use crate::polynomial::numeric_utils::{SQRT_MAX_ITERATIONS, SQRT_TOLERANCE};
use log::info;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Settings of the solver, the output and the logger
#[derive(Debug, Clone, PartialEq)]
pub struct ComputorConfig {
    /// Newton square root: stop when two iterates differ by less than this
    pub tolerance: f64,
    pub max_iterations: usize,
    /// decimals of real roots
    pub real_precision: usize,
    /// decimals of real and imaginary parts of complex roots
    pub complex_precision: usize,
    pub reduced_form_style: ReducedFormStyle,
    /// debug, info, warn, error, off/none
    pub loglevel: Option<String>,
    pub log_to_file: bool,
}

impl Default for ComputorConfig {
    fn default() -> Self {
        ComputorConfig {
            tolerance: SQRT_TOLERANCE,
            max_iterations: SQRT_MAX_ITERATIONS,
            real_precision: 3,
            complex_precision: 2,
            reduced_form_style: ReducedFormStyle::Canonical,
            loglevel: Some("warn".to_string()),
            log_to_file: false,
        }
    }
}

impl ComputorConfig {
    /// Reads a document like
    /// ```text
    /// solver
    /// tolerance: 1e-9
    /// max_iterations: 2000
    /// output
    /// real_precision: 3
    /// complex_precision: 2
    /// reduced_form: canonical
    /// logging
    /// loglevel: info
    /// log_to_file: false
    /// ```
    /// missing keys keep their default values
    pub fn from_document(input: &str) -> Result<Self, ComputorError> {
        let document = parse_document_as(input).map_err(ComputorError::InvalidConfig)?;
        let mut config = ComputorConfig::default();
        config.apply(&document)?;
        config.check()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ComputorError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        info!("configuration loaded from {}", path.display());
        Self::from_document(&content)
    }

    fn apply(&mut self, document: &DocumentMap) -> Result<(), ComputorError> {
        for (title, section) in document {
            for (key, values) in section {
                let value = single_value(title, key, values)?;
                match (title.as_str(), key.as_str()) {
                    ("solver", "tolerance") => self.tolerance = float(title, key, value)?,
                    ("solver", "max_iterations") => {
                        self.max_iterations = unsigned(title, key, value)?
                    }
                    ("output", "real_precision") => {
                        self.real_precision = unsigned(title, key, value)?
                    }
                    ("output", "complex_precision") => {
                        self.complex_precision = unsigned(title, key, value)?
                    }
                    ("output", "reduced_form") => {
                        let style = string(title, key, value)?;
                        self.reduced_form_style =
                            ReducedFormStyle::from_str(style).map_err(|_| {
                                ComputorError::InvalidConfig(format!(
                                    "{}.{} must be canonical or natural, got '{}'",
                                    title, key, style
                                ))
                            })?;
                    }
                    ("logging", "loglevel") => {
                        self.loglevel = Some(string(title, key, value)?.to_lowercase())
                    }
                    ("logging", "log_to_file") => {
                        self.log_to_file = value.as_boolean().ok_or_else(|| {
                            wrong_type(title, key, "a boolean", value)
                        })?
                    }
                    _ => {
                        return Err(ComputorError::InvalidConfig(format!(
                            "unknown setting {}.{}",
                            title, key
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    fn check(&self) -> Result<(), ComputorError> {
        if !(self.tolerance > 0.0) {
            return Err(ComputorError::InvalidConfig(
                "tolerance should be a positive number".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(ComputorError::InvalidConfig(
                "max_iterations should be a positive number".to_string(),
            ));
        }
        Ok(())
    }
}

fn single_value<'a>(
    title: &str,
    key: &str,
    values: &'a [Value],
) -> Result<&'a Value, ComputorError> {
    match values {
        [value] => Ok(value),
        _ => Err(ComputorError::InvalidConfig(format!(
            "{}.{} expects exactly one value, got {}",
            title,
            key,
            values.len()
        ))),
    }
}

fn wrong_type(title: &str, key: &str, expected: &str, value: &Value) -> ComputorError {
    ComputorError::InvalidConfig(format!(
        "{}.{} must be {}, got '{}'",
        title, key, expected, value
    ))
}

fn float(title: &str, key: &str, value: &Value) -> Result<f64, ComputorError> {
    value
        .as_float()
        .ok_or_else(|| wrong_type(title, key, "a number", value))
}

fn unsigned(title: &str, key: &str, value: &Value) -> Result<usize, ComputorError> {
    value
        .as_integer()
        .and_then(|i| usize::try_from(i).ok())
        .ok_or_else(|| wrong_type(title, key, "a nonnegative integer", value))
}

fn string<'a>(title: &str, key: &str, value: &'a Value) -> Result<&'a str, ComputorError> {
    value
        .as_string()
        .map(|s| s.as_str())
        .ok_or_else(|| wrong_type(title, key, "a word", value))
}
