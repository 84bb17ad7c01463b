//! Calculator card rendering.

use crate::items::CalculatorItem;

use super::base::card_container;

/// Render a calculator card: the expression, then the result with an `= `
/// prefix (or the error text).
pub fn render_calculator(calc: &CalculatorItem) -> String {
    let result = if calc.is_error {
        format!("! {}", calc.display_result)
    } else {
        format!("= {}", calc.display_result)
    };
    card_container("Calculator", &[calc.expression.clone(), result])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let calc = CalculatorItem::from_query("log(100)").unwrap();
        let text = render_calculator(&calc);
        assert!(text.contains("  log(100)\n"));
        assert!(text.contains("  = 2\n"));
    }
}
