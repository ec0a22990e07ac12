//! Test fixtures shared between unit and integration tests.
//!
//! Available to downstream test code through the `testkit` feature.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::{AlertDirection, PriceAlert, Quote};
pub use crate::suggest::llm::mock::MockLlm;

/// Quotes for one outcome across the three sample bookmakers.
pub fn outcome_quotes(event_id: &str, outcome: &str, odds: [Decimal; 3]) -> Vec<Quote> {
    ["FanDuel", "DraftKings", "Caesars"]
        .into_iter()
        .zip(odds)
        .map(|(bookmaker, price)| Quote::new(bookmaker, event_id, outcome, price))
        .collect()
}

/// An alert against the sample catalog's first event.
pub fn barcelona_alert(direction: AlertDirection) -> PriceAlert {
    PriceAlert::new(
        "event_1",
        "FC Barcelona vs Real Madrid",
        "Soccer",
        "FC Barcelona Win",
        dec!(2.20),
        direction,
    )
}

/// A canned advisor answer that parses cleanly.
pub fn advisor_answer(confidence: f64) -> String {
    format!(
        r#"{{"suggestion": "Back the best price", "reasoning": "Widest margin on the board.", "confidence": {confidence}}}"#
    )
}
