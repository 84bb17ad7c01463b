//! Calculator card data.

use crate::calculator::CalculatorPad;

/// A calculator card for the current query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalculatorItem {
    /// The original expression entered by the user.
    pub expression: String,
    /// The formatted result, or the error text.
    pub display_result: String,
    /// Whether the result is the error text.
    pub is_error: bool,
}

impl CalculatorItem {
    /// Build the card from a query. `None` when the query is not valid math.
    pub fn from_query(query: &str) -> Option<Self> {
        let pad = CalculatorPad::from_query(query)?;
        Some(Self::from_pad(query, &pad))
    }

    /// Snapshot a keypad session.
    pub fn from_pad(expression: &str, pad: &CalculatorPad) -> Self {
        Self {
            expression: expression.trim().to_string(),
            display_result: pad.display().to_string(),
            is_error: pad.is_error(),
        }
    }
}
