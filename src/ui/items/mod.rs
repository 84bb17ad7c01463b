mod base;
mod calculator;

pub use base::{CARD_WIDTH, card_container, render_action_indicator};
pub use calculator::render_calculator;

use crate::client::{InfoValue, Infobox};
use crate::items::Card;
use crate::stopwatch::Stopwatch;
use crate::timer::TimerState;
use crate::translate::language_name;
use crate::widgets::{CurrencyCard, TranslatePanel, WordMeaningCard};

/// Render any card based on its type.
/// This is the main dispatch function for card rendering.
pub fn render_card(card: &Card) -> String {
    match card {
        Card::Timer(timer) => render_timer(timer),
        Card::Stopwatch(watch) => render_stopwatch(watch),
        Card::Translate(panel) => render_translate(panel),
        Card::Currency(currency) => render_currency(currency),
        Card::Calculator(calc) => render_calculator(calc),
        Card::Meaning(meaning) => render_meaning(meaning),
        Card::Infobox(infobox) => render_infobox(infobox),
        Card::Alert(message) => card_container(card.section_name(), &[message.clone()]),
    }
}

/// Render the countdown with its Start/Pause and Reset actions.
pub fn render_timer(timer: &TimerState) -> String {
    let mut body = vec![timer.display()];
    if timer.is_alarm() {
        body.push("Time's up!".to_string());
    } else {
        let action = if timer.is_running() { "Pause" } else { "Start" };
        body.push(format!(
            "{} {}",
            render_action_indicator(action),
            render_action_indicator("Reset")
        ));
    }
    card_container("Timer", &body)
}

/// Render the stopwatch reading with its Start/Stop action.
pub fn render_stopwatch(watch: &Stopwatch) -> String {
    let action = if watch.is_running() { "Stop" } else { "Start" };
    card_container(
        "Stopwatch",
        &[watch.display(), render_action_indicator(action)],
    )
}

fn render_translate(panel: &TranslatePanel) -> String {
    let mut body = vec![
        format!("{} → {}", language_name(&panel.from), language_name(&panel.to)),
        panel.text.clone(),
    ];
    if let Some(result) = &panel.result {
        body.push(format!("» {result}"));
    }
    card_container("Translate", &body)
}

fn render_currency(card: &CurrencyCard) -> String {
    card_container(
        "Currency Conversion",
        &[
            format!("{} {}", card.from_symbol, card.from_value),
            format!("{} {}", card.to_symbol, card.to_value),
        ],
    )
}

fn render_meaning(card: &WordMeaningCard) -> String {
    let body: Vec<String> = card.meanings.iter().map(|m| format!("• {m}")).collect();
    card_container("Word Meaning", &body)
}

fn render_infobox(infobox: &Infobox) -> String {
    let mut body = Vec::new();
    if let Some(image) = &infobox.image {
        body.push(format!("image: {image}"));
    }
    for (key, value) in &infobox.fields {
        match value {
            InfoValue::Text(text) => body.push(format!("{key}: {text}")),
            InfoValue::List(items) => body.push(format!("{key}: {}", items.join(", "))),
        }
    }
    card_container(infobox.title.as_deref().unwrap_or("Infobox"), &body)
}
