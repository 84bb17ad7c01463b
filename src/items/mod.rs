mod calculator;

pub use calculator::CalculatorItem;

use crate::client::Infobox;
use crate::stopwatch::Stopwatch;
use crate::timer::TimerState;
use crate::widgets::{CurrencyCard, TranslatePanel, WordMeaningCard};

/// A widget card that can be displayed for a query.
/// This enum abstracts over the widgets that can answer a query inline.
#[derive(Clone, Debug)]
pub enum Card {
    /// A countdown timer
    Timer(TimerState),
    /// A stopwatch
    Stopwatch(Stopwatch),
    /// The translation panel
    Translate(TranslatePanel),
    /// A currency conversion
    Currency(CurrencyCard),
    /// A calculator result
    Calculator(CalculatorItem),
    /// Dictionary definitions
    Meaning(WordMeaningCard),
    /// A knowledge panel
    Infobox(Infobox),
    /// A failure worth telling the user about
    Alert(String),
}

impl Card {
    /// Get the unique identifier for this card.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Timer(_) => "timer",
            Self::Stopwatch(_) => "stopwatch",
            Self::Translate(_) => "translate",
            Self::Currency(_) => "currency",
            Self::Calculator(_) => "calculator",
            Self::Meaning(_) => "word-meaning",
            Self::Infobox(_) => "infobox",
            Self::Alert(_) => "alert",
        }
    }

    /// Get the heading shown above the card.
    pub fn section_name(&self) -> &'static str {
        match self {
            Self::Timer(_) => "Timer",
            Self::Stopwatch(_) => "Stopwatch",
            Self::Translate(_) => "Translate",
            Self::Currency(_) => "Currency Conversion",
            Self::Calculator(_) => "Calculator",
            Self::Meaning(_) => "Word Meaning",
            Self::Infobox(_) => "Infobox",
            Self::Alert(_) => "Error",
        }
    }

    /// Get the sort priority for this card.
    /// Lower values appear first.
    pub fn sort_priority(&self) -> u8 {
        match self {
            Self::Calculator(_) => 0,
            Self::Currency(_) => 1,
            Self::Timer(_) => 2,
            Self::Stopwatch(_) => 3,
            Self::Translate(_) => 4,
            Self::Meaning(_) => 5,
            Self::Infobox(_) => 6,
            Self::Alert(_) => 7,
        }
    }

    /// Whether the widget has anything to show.
    pub fn is_visible(&self) -> bool {
        match self {
            Self::Currency(card) => card.is_visible(),
            Self::Meaning(card) => card.is_visible(),
            Self::Infobox(infobox) => !infobox.is_empty(),
            Self::Alert(message) => !message.is_empty(),
            Self::Timer(_) | Self::Stopwatch(_) | Self::Translate(_) | Self::Calculator(_) => true,
        }
    }
}

// Convenient From implementations

impl From<TimerState> for Card {
    fn from(item: TimerState) -> Self {
        Self::Timer(item)
    }
}

impl From<Stopwatch> for Card {
    fn from(item: Stopwatch) -> Self {
        Self::Stopwatch(item)
    }
}

impl From<TranslatePanel> for Card {
    fn from(item: TranslatePanel) -> Self {
        Self::Translate(item)
    }
}

impl From<CurrencyCard> for Card {
    fn from(item: CurrencyCard) -> Self {
        Self::Currency(item)
    }
}

impl From<CalculatorItem> for Card {
    fn from(item: CalculatorItem) -> Self {
        Self::Calculator(item)
    }
}

impl From<WordMeaningCard> for Card {
    fn from(item: WordMeaningCard) -> Self {
        Self::Meaning(item)
    }
}

impl From<Infobox> for Card {
    fn from(item: Infobox) -> Self {
        Self::Infobox(item)
    }
}
