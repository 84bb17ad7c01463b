//! Expression detection for the calculator feature.
//!
//! A query counts as math when it evaluates. There is no separate grammar
//! check, so anything the evaluator accepts (including `1/0`) is valid.

use super::evaluation::evaluate;

/// Rewrite calculator glyphs into evaluator syntax.
///
/// `√` becomes a `sqrt` call and every `log` becomes `log10`, so `log(x)`
/// is the base-10 logarithm.
pub fn preprocess(expression: &str) -> String {
    expression.replace('√', "sqrt").replace("log", "log10")
}

/// Check whether the raw query is a math expression the calculator can show.
pub fn is_valid_math(expression: &str) -> bool {
    evaluate(expression).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocess() {
        assert_eq!(preprocess("√(16)"), "sqrt(16)");
        assert_eq!(preprocess("log(100) + log(10)"), "log10(100) + log10(10)");
    }

    #[test]
    fn test_expressions_accepted() {
        assert!(is_valid_math("2+2"));
        assert!(is_valid_math("2 + 2"));
        assert!(is_valid_math("(2 + 3) * 4"));
        assert!(is_valid_math("2^8"));
        assert!(is_valid_math("10 % 3"));
        assert!(is_valid_math("sin(0)"));
        assert!(is_valid_math("√(9)"));
        assert!(is_valid_math("log(1000)"));
        assert!(is_valid_math("42"));
        assert!(is_valid_math("2 * sin(0)"));
        assert!(is_valid_math("3.5 * 2"));
    }

    #[test]
    fn test_non_finite_is_still_valid() {
        assert!(is_valid_math("1 / 0"));
    }

    #[test]
    fn test_invalid_input_rejected() {
        assert!(!is_valid_math(""));
        assert!(!is_valid_math("   "));
        assert!(!is_valid_math("hello world"));
        assert!(!is_valid_math("5 minute timer"));
        assert!(!is_valid_math("$5 to eur"));
        assert!(!is_valid_math("2 +* 2"));
        assert!(!is_valid_math("ubiquitous"));
        assert!(!is_valid_math("5k"));
        assert!(!is_valid_math("2m"));
        assert!(!is_valid_math("10G"));
        assert!(!is_valid_math("1.5µ"));
    }
}
