//! Catalog records: sports, markets, bookmakers, and events with quotes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::EventId;
use super::quote::Quote;

/// A sport offered on the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sport {
    pub id: String,
    pub name: String,
}

/// A betting market within a sport.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub id: String,
    pub name: String,
    pub sport_id: String,
}

/// A bookmaker whose prices appear on the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmaker {
    pub id: String,
    pub name: String,
}

/// One possible result of an event's market.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outcome {
    pub name: String,
}

/// A sporting event with its outcomes and the full per-bookmaker quote set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SportEvent {
    pub id: EventId,
    pub name: String,
    /// Sport display name, e.g. "Soccer".
    pub sport: String,
    /// Market display name, e.g. "Match Winner".
    pub market: String,
    pub start_time: DateTime<Utc>,
    pub outcomes: Vec<Outcome>,
    pub quotes: Vec<Quote>,
}

impl SportEvent {
    /// All quotes recorded for one outcome of this event.
    pub fn quotes_for(&self, outcome: &str) -> Vec<&Quote> {
        self.quotes.iter().filter(|q| q.outcome == outcome).collect()
    }

    /// The best price for one outcome, if any bookmaker quoted it. Same
    /// selection semantics as [`super::quote::best_quote`]: first maximum
    /// wins ties.
    pub fn best_quote_for(&self, outcome: &str) -> Option<&Quote> {
        self.quotes
            .iter()
            .filter(|q| q.outcome == outcome)
            .reduce(|best, quote| if quote.odds > best.odds { quote } else { best })
    }

    /// The quote one named bookmaker posted for one outcome.
    pub fn quote_by(&self, bookmaker: &str, outcome: &str) -> Option<&Quote> {
        self.quotes
            .iter()
            .find(|q| q.bookmaker == bookmaker && q.outcome == outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quote::best_quote;
    use rust_decimal_macros::dec;

    fn event() -> SportEvent {
        SportEvent {
            id: EventId::new("event_1"),
            name: "FC Barcelona vs Real Madrid".into(),
            sport: "Soccer".into(),
            market: "Match Winner".into(),
            start_time: Utc::now(),
            outcomes: vec![
                Outcome { name: "FC Barcelona Win".into() },
                Outcome { name: "Draw".into() },
            ],
            quotes: vec![
                Quote::new("FanDuel", "event_1", "FC Barcelona Win", dec!(2.10)),
                Quote::new("Caesars", "event_1", "FC Barcelona Win", dec!(2.15)),
                Quote::new("FanDuel", "event_1", "Draw", dec!(3.50)),
            ],
        }
    }

    #[test]
    fn quotes_are_grouped_by_outcome() {
        let event = event();
        assert_eq!(event.quotes_for("FC Barcelona Win").len(), 2);
        assert_eq!(event.quotes_for("Draw").len(), 1);
        assert!(event.quotes_for("Real Madrid Win").is_empty());
    }

    #[test]
    fn best_quote_matches_free_function() {
        let event = event();
        let best = event.best_quote_for("FC Barcelona Win").unwrap();
        assert_eq!(best.bookmaker, "Caesars");

        let quotes: Vec<Quote> = event
            .quotes_for("FC Barcelona Win")
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(best_quote(&quotes).unwrap().odds, best.odds);
    }

    #[test]
    fn missing_outcome_has_no_best() {
        assert!(event().best_quote_for("Real Madrid Win").is_none());
    }
}
