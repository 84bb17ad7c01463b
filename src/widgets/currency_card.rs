//! Currency conversion card with two linked amount fields.
//!
//! Editing either amount re-queries the conversion service in that
//! direction and overwrites the other field with the answer.

use tracing::warn;

use crate::client::ApiClient;
use crate::currency::{CurrencyQuery, parse_conversion, parse_converted_amount, parse_currency_query};

/// Which field the user edited last.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Side {
    #[default]
    From,
    To,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CurrencyCard {
    pub from_symbol: String,
    pub to_symbol: String,
    pub from_value: String,
    pub to_value: String,
    editing: Side,
}

impl CurrencyCard {
    /// Only shown once the service told us both symbols.
    pub fn is_visible(&self) -> bool {
        !self.from_symbol.is_empty() && !self.to_symbol.is_empty()
    }

    pub fn editing(&self) -> Side {
        self.editing
    }

    /// Fill both sides from a full `"$5 = €4.61"` answer.
    pub fn apply_conversion(&mut self, text: &str) -> bool {
        let Some(conversion) = parse_conversion(text) else {
            return false;
        };
        self.from_symbol = conversion.from_symbol;
        self.to_symbol = conversion.to_symbol;
        self.from_value = conversion.from_amount;
        self.to_value = conversion.to_amount;
        true
    }

    /// The user typed into the "from" field. Returns the follow-up query.
    pub fn edit_from(&mut self, value: impl Into<String>) -> Option<CurrencyQuery> {
        self.editing = Side::From;
        self.from_value = value.into();
        if self.from_value.is_empty() {
            return None;
        }
        parse_currency_query(&format!("{}{} to {}", self.from_symbol, self.from_value, self.to_symbol))
    }

    /// The user typed into the "to" field. Returns the reverse query.
    pub fn edit_to(&mut self, value: impl Into<String>) -> Option<CurrencyQuery> {
        self.editing = Side::To;
        self.to_value = value.into();
        if self.to_value.is_empty() {
            return None;
        }
        parse_currency_query(&format!("{}{} to {}", self.to_symbol, self.to_value, self.from_symbol))
    }

    /// Write the answer to a follow-up query into the field not being edited.
    pub fn apply_update(&mut self, text: &str) -> bool {
        let Some(amount) = parse_converted_amount(text) else {
            return false;
        };
        match self.editing {
            Side::From => self.to_value = amount,
            Side::To => self.from_value = amount,
        }
        true
    }

    /// Conversion failed; blank both amounts.
    pub fn clear_values(&mut self) {
        self.from_value.clear();
        self.to_value.clear();
    }

    /// Build the card for a search query. Hidden when the query is not a
    /// conversion or the service could not answer.
    pub async fn load(client: &ApiClient, query: &str) -> Self {
        let mut card = Self::default();
        let Some(currency_query) = parse_currency_query(query) else {
            return card;
        };

        match client.convert_currency(&currency_query).await {
            Ok(Some(text)) => {
                card.apply_conversion(&text);
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Currency conversion failed: {}", e);
                card.clear_values();
            }
        }
        card
    }

    /// Send a follow-up query produced by [`edit_from`](Self::edit_from) or
    /// [`edit_to`](Self::edit_to) and apply the answer.
    pub async fn sync(&mut self, client: &ApiClient, query: &CurrencyQuery) {
        match client.convert_currency(query).await {
            Ok(Some(text)) => {
                self.apply_update(&text);
            }
            Ok(None) => {}
            Err(e) => warn!("Currency update failed: {}", e),
        }
    }
}
