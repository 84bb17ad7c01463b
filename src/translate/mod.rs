//! Translation language handling.

mod languages;

pub use languages::LANGUAGES;

use lazy_static::lazy_static;
use regex::Regex;

/// Source language code meaning "detect automatically".
pub const AUTO: &str = "auto";

/// Target language used when none is given.
pub const DEFAULT_TARGET: &str = "en";

lazy_static! {
    /// `translate <text> [to|into <language>]`
    static ref TRANSLATE_QUERY: Regex =
        Regex::new(r"(?i)^\s*translate\s+(.+?)(?:\s+(?:to|into)\s+(.+?))?\s*$").unwrap();
}

/// Look up a language code by name (`"french"` → `"fr"`).
///
/// Codes are accepted as-is, so `"fr"` also yields `"fr"`.
pub fn language_code(name: &str) -> Option<&'static str> {
    let name = name.trim();
    LANGUAGES
        .iter()
        .find(|(lang, code)| lang.eq_ignore_ascii_case(name) || code.eq_ignore_ascii_case(name))
        .map(|&(_, code)| code)
}

/// Display name for a language code, capitalized. Unknown codes are echoed.
pub fn language_name(code: &str) -> String {
    if code == AUTO {
        return "Auto".to_string();
    }

    match LANGUAGES.iter().find(|(_, c)| *c == code) {
        Some((name, _)) => {
            let mut chars = name.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
        None => code.to_string(),
    }
}

/// Pull the text and target language out of `translate hola to english`.
///
/// The trailing `to <language>` is only split off when the language is
/// known; otherwise it stays part of the text.
pub fn parse_translate_query(query: &str) -> Option<(String, Option<&'static str>)> {
    let caps = TRANSLATE_QUERY.captures(query)?;
    let text = caps[1].trim();

    match caps.get(2) {
        Some(lang) => match language_code(lang.as_str()) {
            Some(code) => Some((text.to_string(), Some(code))),
            None => {
                let whole = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
                let rest = whole.trim().splitn(2, char::is_whitespace).nth(1)?;
                Some((rest.trim().to_string(), None))
            }
        },
        None => Some((text.to_string(), None)),
    }
}
