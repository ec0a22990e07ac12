//! The static odds catalog: sports, markets, bookmakers, and events.
//!
//! This is the dashboard's data source. There is no live feed; the catalog
//! ships with a built-in sample board and exposes the filtered views and
//! lookups every command needs.

mod sample;

use crate::domain::{Bookmaker, EventId, Market, PriceAlert, Sport, SportEvent};
use crate::error::{Error, Result};

/// Filter parameters for the odds board.
#[derive(Debug, Default, Clone)]
pub struct BoardFilter {
    /// Restrict to one sport by id, e.g. `soccer`.
    pub sport: Option<String>,
    /// Restrict to one market by id, e.g. `match_winner_soccer`.
    pub market: Option<String>,
    /// Case-insensitive substring match on the event name.
    pub search: Option<String>,
}

/// The full catalog of reference data and events.
#[derive(Debug, Clone)]
pub struct Catalog {
    sports: Vec<Sport>,
    markets: Vec<Market>,
    bookmakers: Vec<Bookmaker>,
    events: Vec<SportEvent>,
}

impl Catalog {
    /// The built-in sample board.
    pub fn sample() -> Self {
        sample::build()
    }

    pub fn sports(&self) -> &[Sport] {
        &self.sports
    }

    pub fn markets(&self) -> &[Market] {
        &self.markets
    }

    pub fn bookmakers(&self) -> &[Bookmaker] {
        &self.bookmakers
    }

    pub fn events(&self) -> &[SportEvent] {
        &self.events
    }

    /// Markets belonging to one sport.
    pub fn markets_for_sport(&self, sport_id: &str) -> Vec<&Market> {
        self.markets
            .iter()
            .filter(|m| m.sport_id == sport_id)
            .collect()
    }

    /// Look up a sport by id.
    pub fn sport(&self, id: &str) -> Result<&Sport> {
        self.sports
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| Error::NotFound(format!("sport '{id}'")))
    }

    /// Look up a market by id.
    pub fn market(&self, id: &str) -> Result<&Market> {
        self.markets
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| Error::NotFound(format!("market '{id}'")))
    }

    /// Look up an event by id.
    pub fn event(&self, id: &EventId) -> Result<&SportEvent> {
        self.events
            .iter()
            .find(|e| &e.id == id)
            .ok_or_else(|| Error::NotFound(format!("event '{id}'")))
    }

    /// Events matching a board filter. Unknown sport or market ids are
    /// reported as not-found errors rather than silently matching nothing.
    pub fn filtered_events(&self, filter: &BoardFilter) -> Result<Vec<&SportEvent>> {
        let sport_name = filter
            .sport
            .as_deref()
            .map(|id| self.sport(id).map(|s| s.name.clone()))
            .transpose()?;
        let market_name = filter
            .market
            .as_deref()
            .map(|id| self.market(id).map(|m| m.name.clone()))
            .transpose()?;
        let needle = filter.search.as_deref().map(str::to_lowercase);

        Ok(self
            .events
            .iter()
            .filter(|e| sport_name.as_deref().map_or(true, |s| e.sport == s))
            .filter(|e| market_name.as_deref().map_or(true, |m| e.market == m))
            .filter(|e| {
                needle
                    .as_deref()
                    .map_or(true, |n| e.name.to_lowercase().contains(n))
            })
            .collect())
    }

    /// The alerts seeded on first run, before the user has saved any.
    pub fn seed_alerts(&self) -> Vec<PriceAlert> {
        sample::seed_alerts()
    }
}
