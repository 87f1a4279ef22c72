//! Field validation for raw form input.
//!
//! Every constraint is optional and they combine with logical AND. Length
//! constraints only apply to text and numeric bounds only apply to numbers;
//! a constraint that does not apply to the value's type is skipped rather
//! than treated as a failure.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime-typed field value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Constraint set checked by [`validate`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Returns true when every applicable constraint passes
pub fn validate(value: &Value, constraints: &Constraints) -> bool {
    let mut is_valid = true;

    if constraints.required {
        is_valid = is_valid && !value.to_string().trim().is_empty();
    }

    if let Value::Text(text) = value {
        let length = text.chars().count();
        if let Some(min_length) = constraints.min_length {
            is_valid = is_valid && length >= min_length;
        }
        if let Some(max_length) = constraints.max_length {
            is_valid = is_valid && length <= max_length;
        }
    }

    if let Value::Number(number) = value {
        if let Some(min) = constraints.min {
            is_valid = is_valid && *number >= min;
        }
        if let Some(max) = constraints.max {
            is_valid = is_valid && *number <= max;
        }
    }

    is_valid
}

/// A value paired with the constraints it has to satisfy
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: Value,
    pub constraints: Constraints,
}

impl Validatable {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            constraints: Constraints::default(),
        }
    }

    pub fn required(mut self) -> Self {
        self.constraints = self.constraints.required();
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.constraints = self.constraints.min_length(min_length);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.constraints = self.constraints.max_length(max_length);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.constraints = self.constraints.min(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.constraints = self.constraints.max(max);
        self
    }

    pub fn is_valid(&self) -> bool {
        validate(&self.value, &self.constraints)
    }
}

/// Converts raw form text to a number the way a numeric input is read:
/// blank text is zero, `0x`/`0o`/`0b` prefixes select a radix, `Infinity`
/// is accepted with an optional sign, and anything else unparseable is NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // f64::from_str also takes "inf" and "nan" spellings
    if trimmed
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Unsigned `0x`, `0o` or `0b` literal. `Some(NaN)` for a prefix with bad digits.
fn parse_radix_literal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }

    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}
