//! Bookmaker quotes and best-price selection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::EventId;

/// One bookmaker's price for one outcome of one event. Immutable once
/// recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub bookmaker: String,
    pub event_id: EventId,
    #[serde(rename = "outcomeName")]
    pub outcome: String,
    pub odds: Decimal,
}

impl Quote {
    pub fn new(
        bookmaker: impl Into<String>,
        event_id: impl Into<EventId>,
        outcome: impl Into<String>,
        odds: Decimal,
    ) -> Self {
        Self {
            bookmaker: bookmaker.into(),
            event_id: event_id.into(),
            outcome: outcome.into(),
            odds,
        }
    }
}

/// Select the quote with the maximum decimal odds, the best price for a
/// bettor holding that outcome. Empty input is a normal state (an outcome
/// with no quotes yet) and returns `None`.
///
/// Ties keep the first quote holding the maximum; the winner is otherwise
/// arbitrary. Display layers must decide "is this the best price" by
/// comparing each quote's odds against the returned maximum, never by
/// identity, so every tying bookmaker highlights.
pub fn best_quote(quotes: &[Quote]) -> Option<&Quote> {
    quotes
        .iter()
        .reduce(|best, quote| if quote.odds > best.odds { quote } else { best })
}
