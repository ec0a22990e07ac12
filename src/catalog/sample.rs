//! Built-in sample board data.
//!
//! Start times are offsets from "now" so the board always shows upcoming
//! events. Prices are static.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::Catalog;
use crate::domain::{
    AlertDirection, Bookmaker, EventId, Market, Outcome, PriceAlert, Quote, Sport, SportEvent,
};

pub(super) fn build() -> Catalog {
    Catalog {
        sports: sports(),
        markets: markets(),
        bookmakers: bookmakers(),
        events: events(),
    }
}

fn sports() -> Vec<Sport> {
    [
        ("soccer", "Soccer"),
        ("basketball", "Basketball"),
        ("tennis", "Tennis"),
        ("esports", "E-Sports"),
    ]
    .into_iter()
    .map(|(id, name)| Sport {
        id: id.into(),
        name: name.into(),
    })
    .collect()
}

fn markets() -> Vec<Market> {
    [
        ("match_winner_soccer", "Match Winner", "soccer"),
        ("over_under_2.5_soccer", "Over/Under 2.5 Goals", "soccer"),
        ("money_line_basketball", "Money Line", "basketball"),
        ("match_winner_tennis", "Match Winner", "tennis"),
        ("match_winner_esports", "Match Winner", "esports"),
    ]
    .into_iter()
    .map(|(id, name, sport_id)| Market {
        id: id.into(),
        name: name.into(),
        sport_id: sport_id.into(),
    })
    .collect()
}

fn bookmakers() -> Vec<Bookmaker> {
    [
        ("fanduel", "FanDuel"),
        ("draftkings", "DraftKings"),
        ("caesars", "Caesars"),
    ]
    .into_iter()
    .map(|(id, name)| Bookmaker {
        id: id.into(),
        name: name.into(),
    })
    .collect()
}

fn events() -> Vec<SportEvent> {
    let now = Utc::now();
    vec![
        event(
            "event_1",
            "FC Barcelona vs Real Madrid",
            "Soccer",
            "Match Winner",
            now + Duration::days(1),
            &["FC Barcelona Win", "Draw", "Real Madrid Win"],
            &[
                ("FanDuel", "FC Barcelona Win", dec!(2.10)),
                ("DraftKings", "FC Barcelona Win", dec!(2.05)),
                ("Caesars", "FC Barcelona Win", dec!(2.15)),
                ("FanDuel", "Draw", dec!(3.50)),
                ("DraftKings", "Draw", dec!(3.55)),
                ("Caesars", "Draw", dec!(3.45)),
                ("FanDuel", "Real Madrid Win", dec!(3.00)),
                ("DraftKings", "Real Madrid Win", dec!(3.10)),
                ("Caesars", "Real Madrid Win", dec!(2.95)),
            ],
        ),
        event(
            "event_2",
            "LA Lakers vs Golden State Warriors",
            "Basketball",
            "Money Line",
            now + Duration::days(2),
            &["LA Lakers Win", "Golden State Warriors Win"],
            &[
                ("FanDuel", "LA Lakers Win", dec!(1.90)),
                ("DraftKings", "LA Lakers Win", dec!(1.95)),
                ("Caesars", "LA Lakers Win", dec!(1.88)),
                ("FanDuel", "Golden State Warriors Win", dec!(1.90)),
                ("DraftKings", "Golden State Warriors Win", dec!(1.85)),
                ("Caesars", "Golden State Warriors Win", dec!(1.92)),
            ],
        ),
        event(
            "event_3",
            "Man City vs Liverpool (Over/Under 2.5)",
            "Soccer",
            "Over/Under 2.5 Goals",
            now,
            &["Over 2.5 Goals", "Under 2.5 Goals"],
            &[
                ("FanDuel", "Over 2.5 Goals", dec!(1.75)),
                ("DraftKings", "Over 2.5 Goals", dec!(1.80)),
                ("Caesars", "Over 2.5 Goals", dec!(1.78)),
                ("FanDuel", "Under 2.5 Goals", dec!(2.05)),
                ("DraftKings", "Under 2.5 Goals", dec!(2.00)),
                ("Caesars", "Under 2.5 Goals", dec!(2.10)),
            ],
        ),
        event(
            "event_4",
            "Team Liquid vs Fnatic",
            "E-Sports",
            "Match Winner",
            now + Duration::days(3),
            &["Team Liquid Win", "Fnatic Win"],
            &[
                ("FanDuel", "Team Liquid Win", dec!(1.65)),
                ("DraftKings", "Team Liquid Win", dec!(1.70)),
                ("Caesars", "Team Liquid Win", dec!(1.68)),
                ("FanDuel", "Fnatic Win", dec!(2.15)),
                ("DraftKings", "Fnatic Win", dec!(2.10)),
                ("Caesars", "Fnatic Win", dec!(2.20)),
            ],
        ),
    ]
}

fn event(
    id: &str,
    name: &str,
    sport: &str,
    market: &str,
    start_time: chrono::DateTime<Utc>,
    outcomes: &[&str],
    quotes: &[(&str, &str, Decimal)],
) -> SportEvent {
    SportEvent {
        id: EventId::new(id),
        name: name.into(),
        sport: sport.into(),
        market: market.into(),
        start_time,
        outcomes: outcomes
            .iter()
            .map(|&name| Outcome { name: name.into() })
            .collect(),
        quotes: quotes
            .iter()
            .map(|&(bookmaker, outcome, odds)| Quote::new(bookmaker, id, outcome, odds))
            .collect(),
    }
}

pub(super) fn seed_alerts() -> Vec<PriceAlert> {
    vec![PriceAlert::new(
        "event_1",
        "FC Barcelona vs Real Madrid",
        "Soccer",
        "FC Barcelona Win",
        dec!(2.20),
        AlertDirection::AtLeast,
    )]
}
