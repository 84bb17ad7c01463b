//! Expression evaluation using fasteval.
//!
//! Wraps fasteval with the calculator's extra functions and formats results
//! to 14 significant digits.

use std::f64::consts::{E, PI};

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use super::detection::preprocess;

/// Significant digits shown for results.
pub const PRECISION: usize = 14;

/// Why an expression could not be evaluated.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("empty expression")]
    Empty,
    #[error("invalid expression: {0}")]
    Invalid(String),
}

lazy_static! {
    /// A number with a unit suffix (`5k`, `2m`, `3µ`), which fasteval would scale.
    static ref SUFFIXED_NUMBER: Regex = Regex::new(r"[0-9.][kKMGTmuµnp]\b").unwrap();
}

/// Functions and constants fasteval does not provide itself.
fn lookup(name: &str, args: Vec<f64>) -> Option<f64> {
    match (name, args.as_slice()) {
        ("pi", []) => Some(PI),
        ("e", []) => Some(E),
        ("sqrt", [x]) => Some(x.sqrt()),
        ("log10", [x]) => Some(x.log10()),
        ("ln", [x]) => Some(x.ln()),
        ("exp", [x]) => Some(x.exp()),
        _ => None,
    }
}

/// Evaluate a mathematical expression.
///
/// The expression is preprocessed first (`√` → `sqrt`, `log` → `log10`).
/// Well-formed input with a non-finite result (`1/0`) is still `Ok`.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let expression = expression.trim();
    if expression.is_empty() {
        return Err(EvalError::Empty);
    }

    if SUFFIXED_NUMBER.is_match(expression) {
        return Err(EvalError::Invalid(format!("unit suffix in '{expression}'")));
    }

    let prepped = preprocess(expression);
    let mut namespace = |name: &str, args: Vec<f64>| lookup(name, args);

    fasteval::ez_eval(&prepped, &mut namespace).map_err(|e| EvalError::Invalid(format!("{e:?}")))
}

/// Evaluate and format in one step.
pub fn evaluate_display(expression: &str) -> Result<String, EvalError> {
    evaluate(expression).map(format_result)
}

/// Format a result with [`PRECISION`] significant digits.
///
/// Trailing zeros are dropped. Values whose decimal exponent is below -3 or
/// at least 5 use exponential notation (`1.23456e+5`).
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let msg = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return msg.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // Rounds to PRECISION significant digits, e.g. "1.2345600000000e5".
    let scientific = format!("{:.*e}", PRECISION - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if !(-3..5).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{}", trim_fraction(mantissa), sign, exponent.abs());
    }

    let rounded: f64 = scientific.parse().unwrap_or(value);
    let decimals = (PRECISION as i32 - 1 - exponent).max(0) as usize;
    trim_fraction(&format!("{rounded:.decimals$}")).to_string()
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
