//! Exchange-agnostic domain types: odds notation, quotes, events, alerts.

pub mod alert;
pub mod event;
pub mod ids;
pub mod odds;
pub mod quote;

pub use alert::{AlertDirection, PriceAlert};
pub use event::{Bookmaker, Market, Outcome, Sport, SportEvent};
pub use ids::EventId;
pub use odds::{american_to_decimal, decimal_to_american, NO_PRICE};
pub use quote::{best_quote, Quote};
