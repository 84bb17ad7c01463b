//! Interactive calculator keypad.

use super::detection::is_valid_math;
use super::evaluation::evaluate_display;

/// Text shown when an expression fails to evaluate.
pub const ERROR_DISPLAY: &str = "Error";

/// Button grid, row by row.
pub const KEYPAD: &[&[&str]] = &[
    &["7", "8", "9", "/", "sin", "cos"],
    &["4", "5", "6", "*", "tan", "log"],
    &["1", "2", "3", "-", "(", ")"],
    &["0", ".", "^", "+", "√", "="],
    &["C", "CE"],
];

/// Calculator widget state: the expression currently in the input field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalculatorPad {
    expression: String,
}

impl CalculatorPad {
    /// Seed the pad from a search query.
    ///
    /// Returns `None` when the query is not valid math; the widget is
    /// hidden in that case no matter what is typed into it later.
    pub fn from_query(query: &str) -> Option<Self> {
        if !is_valid_math(query) {
            return None;
        }
        let expression = evaluate_display(query).unwrap_or_else(|_| ERROR_DISPLAY.to_string());
        Some(Self { expression })
    }

    /// Current contents of the input field.
    pub fn display(&self) -> &str {
        &self.expression
    }

    /// Whether the last evaluation failed.
    pub fn is_error(&self) -> bool {
        self.expression == ERROR_DISPLAY
    }

    /// Replace the input field contents (typing directly).
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.expression = input.into();
    }

    /// Evaluate the current input (Enter or `=`).
    pub fn submit(&mut self) {
        self.expression =
            evaluate_display(&self.expression).unwrap_or_else(|_| ERROR_DISPLAY.to_string());
    }

    /// Handle a keypad button.
    pub fn press(&mut self, key: &str) {
        match key {
            "C" => self.expression.clear(),
            "CE" => {
                self.expression.pop();
            }
            "=" => self.submit(),
            _ if self.is_error() => self.expression = key.to_string(),
            _ => self.expression.push_str(key),
        }
    }
}
