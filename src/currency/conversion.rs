//! Parsing of the conversion service's display string.
//!
//! The service answers with text like `$5 = €4.61` rather than structured
//! fields, so both sides are pulled out by pattern.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BOTH_SIDES: Regex =
        Regex::new(r"(.+?)([0-9]+\.?[0-9]*)\s*=\s*(.+?)([0-9]+\.?[0-9]*)").unwrap();
    static ref RIGHT_SIDE: Regex = Regex::new(r"=\s*(.+?)([0-9]+\.?[0-9]*)").unwrap();
}

/// Both sides of a conversion answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversion {
    pub from_symbol: String,
    pub from_amount: String,
    pub to_symbol: String,
    pub to_amount: String,
}

/// Parse `"<symbol><amount> = <symbol><amount>"`.
pub fn parse_conversion(text: &str) -> Option<Conversion> {
    let caps = BOTH_SIDES.captures(text)?;
    Some(Conversion {
        from_symbol: caps[1].trim().to_string(),
        from_amount: caps[2].to_string(),
        to_symbol: caps[3].trim().to_string(),
        to_amount: caps[4].to_string(),
    })
}

/// Extract only the amount to the right of `=`.
pub fn parse_converted_amount(text: &str) -> Option<String> {
    RIGHT_SIDE.captures(text).map(|caps| caps[2].to_string())
}
