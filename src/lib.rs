//! Oddswise - terminal sports-odds dashboard.
//!
//! Displays aggregated bookmaker odds per event, manages price alerts, and
//! asks a generative model for a betting suggestion from odds JSON. Odds
//! data is a built-in static catalog; the alert list is the only persistent
//! state; the only network call is the suggestion prompt.
//!
//! # Modules
//!
//! - [`domain`] - Odds notation conversion, quotes with best-price
//!   selection, events, and price alerts
//! - [`catalog`] - The static data source with board filtering
//! - [`store`] - Whole-collection JSON persistence for the alert list
//! - [`suggest`] - The `Llm` seam, Anthropic client, and bet advisor
//! - [`config`] - TOML configuration with validation
//! - [`cli`] - clap command definitions and handlers
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use oddswise::domain::{american_to_decimal, decimal_to_american};
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(decimal_to_american(dec!(2.5)), "+150");
//! assert_eq!(american_to_decimal("-200"), Some(dec!(1.5)));
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod store;
pub mod suggest;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
