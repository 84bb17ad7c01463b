//! Dictionary query cleanup.
//!
//! Best effort only: strips the usual "what is the meaning of" phrasing so
//! that `define ubiquitous` and `meaning of ubiquitous` both look up
//! `ubiquitous`. Arbitrary phrasing is not guaranteed to reduce to one word.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref STOP_PHRASES: Regex = Regex::new(
        r"\b(define|definition|meaning|what is|what's|means|mean|explain|describe|word|of|the)\b"
    )
    .unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Reduce a dictionary query to the word being looked up.
pub fn clean_query(query: &str) -> String {
    let lowered = query.to_lowercase();
    let stripped = STOP_PHRASES.replace_all(&lowered, "");
    WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}
