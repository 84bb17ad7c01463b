//! Query-driven widgets.
//!
//! Each widget owns its state and fetches on its own. [`run_round`] mounts
//! whatever a [`Dispatch`] asks for, lets the lookups run concurrently and
//! returns the cards that ended up with something to show.

mod currency_card;
mod infobox;
mod meaning;
mod search;
mod translate;

pub use currency_card::{CurrencyCard, Side};
pub use infobox::InfoboxPanel;
pub use meaning::WordMeaningCard;
pub use search::{NO_RESULTS, SEARCHING, SearchResults, status_line_visible, suggestions, truncate};
pub use translate::{NO_TRANSLATION, TRANSLATION_FAILED, TranslatePanel};

use futures::future::OptionFuture;
use tracing::debug;

use crate::client::{ApiClient, RequestSequencer, RequestToken};
use crate::dispatch::Dispatch;
use crate::items::{CalculatorItem, Card};
use crate::stopwatch::Stopwatch;
use crate::timer::TimerState;

/// Mount and load every widget `dispatch` selected.
///
/// Cards come back sorted by priority with hidden widgets dropped.
pub async fn run_round(client: &ApiClient, dispatch: &Dispatch) -> Vec<Card> {
    let query = dispatch.query.as_str();
    debug!("Mounting {:?} for '{}'", dispatch.mounted(), query);

    let mut cards: Vec<Card> = Vec::new();

    if let Some(seconds) = dispatch.timer {
        cards.push(TimerState::new(seconds).into());
    }
    if dispatch.stopwatch {
        cards.push(Stopwatch::new().into());
    }
    if dispatch.calculator
        && let Some(item) = CalculatorItem::from_query(query)
    {
        cards.push(item.into());
    }

    let translate: OptionFuture<_> = dispatch
        .translate
        .then(|| async move {
            let mut panel = TranslatePanel::from_query(query);
            panel.translate(client).await;
            panel
        })
        .into();
    let currency: OptionFuture<_> = dispatch.currency.then(|| CurrencyCard::load(client, query)).into();
    let meaning: OptionFuture<_> = dispatch
        .word_meaning
        .then(|| WordMeaningCard::load(client, query))
        .into();
    let infobox: OptionFuture<_> = dispatch.infobox.then(|| InfoboxPanel::load(client, query)).into();

    let (translate, currency, meaning, infobox) = futures::join!(translate, currency, meaning, infobox);

    cards.extend(translate.map(Card::from));
    cards.extend(currency.map(Card::from));
    cards.extend(meaning.map(Card::from));
    match infobox {
        Some(InfoboxPanel::Panel(infobox)) => cards.push(infobox.into()),
        Some(InfoboxPanel::Alert(message)) => cards.push(Card::Alert(message)),
        Some(InfoboxPanel::Hidden) | None => {}
    }

    cards.retain(Card::is_visible);
    cards.sort_by_key(Card::sort_priority);
    cards
}

/// Like [`run_round`], but gives up the cards if a newer round was started
/// while this one was loading.
pub async fn run_round_if_current(
    client: &ApiClient,
    dispatch: &Dispatch,
    sequencer: &RequestSequencer,
    token: RequestToken,
) -> Option<Vec<Card>> {
    let cards = run_round(client, dispatch).await;
    if sequencer.is_current(token) {
        Some(cards)
    } else {
        debug!("Dropping stale results for '{}'", dispatch.query);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::{MockApi, MockReply};
    use serde_json::json;

    fn ids(cards: &[Card]) -> Vec<&'static str> {
        cards.iter().map(Card::id).collect()
    }

    #[tokio::test]
    async fn test_timer_query_round() {
        let server = MockApi::start(vec![
            ("/api/meaning", MockReply::Json(json!([]))),
            ("/api/infobox", MockReply::Status(404)),
        ])
        .await;

        let dispatch = Dispatch::for_query("5 minute timer");
        let cards = run_round(&server.client(), &dispatch).await;
        assert_eq!(ids(&cards), vec!["timer"]);
        match &cards[0] {
            Card::Timer(timer) => assert_eq!(timer.seconds_left(), 300),
            other => panic!("expected timer, got {other:?}"),
        }

        // Currency self-suppressed without a request; word and infobox tried.
        let requests = server.requests();
        assert!(requests.iter().all(|r| !r.starts_with("/api/currency")));
        assert!(requests.iter().any(|r| r.starts_with("/api/meaning")));
        assert!(requests.iter().any(|r| r.starts_with("/api/infobox")));
    }

    #[tokio::test]
    async fn test_math_and_currency_round() {
        let server = MockApi::start(vec![
            ("/api/currency", MockReply::Json(json!({"conversion": "$5 = €4.61"}))),
            ("/api/meaning", MockReply::Json(json!([]))),
            ("/api/infobox", MockReply::Status(500)),
        ])
        .await;
        let client = server.client();

        let cards = run_round(&client, &Dispatch::for_query("$5 to eur")).await;
        assert_eq!(ids(&cards), vec!["currency", "alert"]);

        let cards = run_round(&client, &Dispatch::for_query("2+2")).await;
        assert_eq!(ids(&cards), vec!["calculator", "alert"]);
    }

    #[tokio::test]
    async fn test_translate_round() {
        let server = MockApi::start(vec![(
            "/api/translate",
            MockReply::Json(json!({"translated": "thank you"})),
        )])
        .await;

        let cards = run_round(&server.client(), &Dispatch::for_query("translate merci")).await;
        assert_eq!(ids(&cards), vec!["translate"]);
        assert_eq!(server.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_superseded_round_is_dropped() {
        let server = MockApi::start(vec![
            ("/api/meaning", MockReply::Json(json!([]))),
            ("/api/infobox", MockReply::Status(404)),
        ])
        .await;
        let client = server.client();
        let sequencer = RequestSequencer::new();

        let stale = sequencer.next();
        let current = sequencer.next();
        let dispatch = Dispatch::for_query("10 sec timer");

        assert_eq!(
            run_round_if_current(&client, &dispatch, &sequencer, stale).await.map(|c| c.len()),
            None
        );
        let cards = run_round_if_current(&client, &dispatch, &sequencer, current).await.unwrap();
        assert_eq!(ids(&cards), vec!["timer"]);
    }
}
