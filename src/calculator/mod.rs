//! Calculator module for evaluating mathematical expressions.
//!
//! This module provides functionality to:
//! - Decide whether a query is a calculator expression
//! - Evaluate expressions using fasteval and format results
//! - Hold the interactive keypad state

mod detection;
mod evaluation;
mod pad;

pub use detection::{is_valid_math, preprocess};
pub use evaluation::{EvalError, PRECISION, evaluate, evaluate_display, format_result};
pub use pad::{CalculatorPad, ERROR_DISPLAY, KEYPAD};
