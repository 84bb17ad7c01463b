//! Decides which widgets a query mounts.
//!
//! Every widget has its own predicate and they are evaluated independently,
//! so one query can mount several widgets at once (`stopwatch and 10 sec
//! timer` mounts both the stopwatch and the timer). Widgets that are
//! cheap to try (currency, dictionary, infobox) mount for every non-empty
//! query and hide themselves when they have nothing to say.

use crate::calculator::is_valid_math;
use crate::timer::parse_timer_query;

/// Timer length used when the query says "timer" without a duration.
pub const DEFAULT_TIMER_SECONDS: u64 = 1;

/// Widgets mounted for one query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dispatch {
    pub query: String,
    /// Seed duration of the timer, when mounted.
    pub timer: Option<u64>,
    pub stopwatch: bool,
    pub translate: bool,
    pub currency: bool,
    /// Only when the raw query itself is valid math.
    pub calculator: bool,
    pub word_meaning: bool,
    pub infobox: bool,
}

impl Dispatch {
    pub fn for_query(query: &str) -> Self {
        let lower = query.to_lowercase();

        let timer = lower
            .contains("timer")
            .then(|| parse_timer_query(Some(query)).unwrap_or(DEFAULT_TIMER_SECONDS));
        let stopwatch = lower.contains("stopwatch");
        let translate = lower.contains("translate");
        let lookups = !query.trim().is_empty() && !translate;

        Self {
            query: query.to_string(),
            timer,
            stopwatch,
            translate,
            currency: lookups,
            calculator: lookups && is_valid_math(query),
            word_meaning: lookups,
            infobox: lookups,
        }
    }

    /// Names of the mounted widgets, in display order.
    pub fn mounted(&self) -> Vec<&'static str> {
        [
            (self.timer.is_some(), "timer"),
            (self.stopwatch, "stopwatch"),
            (self.translate, "translate"),
            (self.currency, "currency"),
            (self.calculator, "calculator"),
            (self.word_meaning, "word-meaning"),
            (self.infobox, "infobox"),
        ]
        .into_iter()
        .filter_map(|(mounted, name)| mounted.then_some(name))
        .collect()
    }
}
