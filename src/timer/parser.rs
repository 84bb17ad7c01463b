//! Timer query detection.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `<digits> [unit] timer`, e.g. `5 minute timer`, `90s timer`, `2 timer`.
    static ref TIMER_QUERY: Regex =
        Regex::new(r"([0-9]+)\s*(hour|hr|h|min(?:ute)?|sec(?:ond)?|s)?\s*timer").unwrap();
}

/// Extract a timer duration in seconds from a query.
///
/// Minutes are assumed when no unit is given. Returns `None` when the query
/// is absent, empty, or has no `<number> [unit] timer` phrase.
pub fn parse_timer_query(query: Option<&str>) -> Option<u64> {
    let query = query?.to_lowercase();
    let caps = TIMER_QUERY.captures(&query)?;

    let value: u64 = caps[1].parse().ok()?;
    let multiplier = match caps.get(2).map(|unit| unit.as_str()) {
        None => 60,
        Some(unit) if unit.starts_with("min") => 60,
        Some(unit) if unit.starts_with("sec") || unit == "s" => 1,
        Some(_) => 3600,
    };

    value.checked_mul(multiplier)
}
