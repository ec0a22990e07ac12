//! Price alerts: a target decimal odds and a threshold direction attached
//! to one (event, outcome) pair.
//!
//! Serialized with camelCase field names and `">="` / `"<="` operator
//! encoding, so an alert file exported from the web dashboard loads
//! unchanged.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ids::EventId;

/// Which side of the target odds fires the alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertDirection {
    /// Fire when the best price reaches or exceeds the target.
    #[serde(rename = ">=")]
    AtLeast,
    /// Fire when the best price drops to or below the target.
    #[serde(rename = "<=")]
    AtMost,
}

impl AlertDirection {
    /// Whether `odds` satisfies the threshold `target` in this direction.
    pub fn is_met(self, odds: Decimal, target: Decimal) -> bool {
        match self {
            Self::AtLeast => odds >= target,
            Self::AtMost => odds <= target,
        }
    }

    /// The comparison symbol used in tables and stored JSON.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::AtLeast => ">=",
            Self::AtMost => "<=",
        }
    }
}

impl std::fmt::Display for AlertDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A stored price alert. Target odds are always kept in decimal form,
/// whatever notation the user typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAlert {
    pub id: Uuid,
    pub event_id: EventId,
    /// Event display name, denormalized so the alert list renders without
    /// a catalog lookup.
    pub event_name: String,
    pub sport: String,
    #[serde(rename = "outcomeName")]
    pub outcome: String,
    pub target_odds: Decimal,
    #[serde(rename = "operator")]
    pub direction: AlertDirection,
}

impl PriceAlert {
    /// Create a new alert with a fresh id.
    pub fn new(
        event_id: impl Into<EventId>,
        event_name: impl Into<String>,
        sport: impl Into<String>,
        outcome: impl Into<String>,
        target_odds: Decimal,
        direction: AlertDirection,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_id: event_id.into(),
            event_name: event_name.into(),
            sport: sport.into(),
            outcome: outcome.into(),
            target_odds,
            direction,
        }
    }

    /// Whether `odds` satisfies this alert's threshold.
    pub fn is_met(&self, odds: Decimal) -> bool {
        self.direction.is_met(odds, self.target_odds)
    }

    /// Human-readable condition, e.g. `odds >= 2.20`.
    pub fn condition(&self) -> String {
        format!("odds {} {:.2}", self.direction, self.target_odds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn alert(direction: AlertDirection) -> PriceAlert {
        PriceAlert::new(
            "event_1",
            "FC Barcelona vs Real Madrid",
            "Soccer",
            "FC Barcelona Win",
            dec!(2.20),
            direction,
        )
    }

    #[test]
    fn at_least_fires_on_or_above_target() {
        let alert = alert(AlertDirection::AtLeast);
        assert!(alert.is_met(dec!(2.20)));
        assert!(alert.is_met(dec!(2.35)));
        assert!(!alert.is_met(dec!(2.19)));
    }

    #[test]
    fn at_most_fires_on_or_below_target() {
        let alert = alert(AlertDirection::AtMost);
        assert!(alert.is_met(dec!(2.20)));
        assert!(alert.is_met(dec!(1.95)));
        assert!(!alert.is_met(dec!(2.21)));
    }

    #[test]
    fn serializes_with_camel_case_wire_names() {
        let alert = alert(AlertDirection::AtLeast);
        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["eventId"], "event_1");
        assert_eq!(json["outcomeName"], "FC Barcelona Win");
        assert_eq!(json["operator"], ">=");
        assert_eq!(json["targetOdds"], "2.20");
    }

    #[test]
    fn direction_round_trips_through_json() {
        for direction in [AlertDirection::AtLeast, AlertDirection::AtMost] {
            let json = serde_json::to_string(&direction).unwrap();
            let back: AlertDirection = serde_json::from_str(&json).unwrap();
            assert_eq!(back, direction);
        }
    }
}
