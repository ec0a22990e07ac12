//! Handlers for the `alerts` command group.

use dialoguer::{Input, Select};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tabled::{Table, Tabled};
use tracing::info;

use crate::catalog::Catalog;
use crate::cli::{output, AlertAddArgs, AlertCommand, AlertRemoveArgs, AlertsArgs};
use crate::config::Config;
use crate::domain::{american_to_decimal, AlertDirection, EventId, PriceAlert, SportEvent};
use crate::error::{Error, Result};
use crate::store::{AlertStore, FileAlertStore};

/// Targets below 1.01 decimal are never playable.
const MIN_TARGET_ODDS: Decimal = dec!(1.01);

/// Execute an alerts subcommand.
pub fn execute(config: &Config, args: &AlertsArgs) -> Result<()> {
    let path = args
        .store
        .clone()
        .unwrap_or_else(|| config.storage.resolve_alerts_path());
    let store = FileAlertStore::new(path);
    let catalog = Catalog::sample();

    match &args.command {
        AlertCommand::Add(add) => execute_add(&catalog, &store, add),
        AlertCommand::List => execute_list(&catalog, &store),
        AlertCommand::Remove(remove) => execute_remove(&catalog, &store, remove),
        AlertCommand::Check => execute_check(&catalog, &store),
    }
}

/// Load the stored collection, seeding the samples when nothing was ever
/// saved. A saved empty collection stays empty.
fn load_alerts(catalog: &Catalog, store: &dyn AlertStore) -> Result<Vec<PriceAlert>> {
    match store.load()? {
        Some(alerts) => Ok(alerts),
        None => Ok(catalog.seed_alerts()),
    }
}

fn execute_add(catalog: &Catalog, store: &dyn AlertStore, args: &AlertAddArgs) -> Result<()> {
    let alert = match (&args.event, &args.outcome, &args.direction, &args.target) {
        (Some(event), Some(outcome), Some(direction), Some(target)) => {
            let event = catalog.event(&EventId::new(event.as_str()))?;
            if !event.outcomes.iter().any(|o| o.name == *outcome) {
                return Err(Error::NotFound(format!(
                    "outcome '{outcome}' on event '{}'",
                    event.id
                )));
            }
            build_alert(event, outcome, (*direction).into(), target)?
        }
        _ => prompt_alert(catalog)?,
    };

    let mut alerts = load_alerts(catalog, store)?;
    alerts.push(alert.clone());
    store.save(&alerts)?;

    info!(alert_id = %alert.id, event = %alert.event_id, "alert saved");
    output::ok(&format!(
        "Alert saved: {} / {} when {}",
        alert.event_name,
        alert.outcome,
        alert.condition()
    ));
    Ok(())
}

/// Normalize target text through the American-odds parser and enforce the
/// 1.01 decimal floor.
fn build_alert(
    event: &SportEvent,
    outcome: &str,
    direction: AlertDirection,
    target: &str,
) -> Result<PriceAlert> {
    let target_odds = american_to_decimal(target)
        .ok_or_else(|| Error::Parse(format!("'{target}' is not valid odds")))?;
    if target_odds < MIN_TARGET_ODDS {
        return Err(Error::Parse(
            "target odds must be at least 1.01 (decimal)".to_string(),
        ));
    }

    Ok(PriceAlert::new(
        event.id.clone(),
        event.name.clone(),
        event.sport.clone(),
        outcome,
        target_odds,
        direction,
    ))
}

/// Interactive wizard: sport -> event -> outcome -> direction -> target.
fn prompt_alert(catalog: &Catalog) -> Result<PriceAlert> {
    let sports = catalog.sports();
    let sport_names: Vec<&str> = sports.iter().map(|s| s.name.as_str()).collect();
    let sport_idx = Select::new()
        .with_prompt("Sport")
        .items(&sport_names)
        .default(0)
        .interact()?;
    let sport = &sports[sport_idx];

    let events: Vec<&SportEvent> = catalog
        .events()
        .iter()
        .filter(|e| e.sport == sport.name)
        .collect();
    if events.is_empty() {
        return Err(Error::NotFound(format!("events for sport '{}'", sport.id)));
    }
    let event_names: Vec<&str> = events.iter().map(|e| e.name.as_str()).collect();
    let event_idx = Select::new()
        .with_prompt("Event")
        .items(&event_names)
        .default(0)
        .interact()?;
    let event = events[event_idx];

    let outcome_names: Vec<&str> = event.outcomes.iter().map(|o| o.name.as_str()).collect();
    let outcome_idx = Select::new()
        .with_prompt("Outcome")
        .items(&outcome_names)
        .default(0)
        .interact()?;

    let direction_idx = Select::new()
        .with_prompt("Alert when odds are")
        .items(&[">= target (at least)", "<= target (at most)"])
        .default(0)
        .interact()?;
    let direction = if direction_idx == 0 {
        AlertDirection::AtLeast
    } else {
        AlertDirection::AtMost
    };

    let target: String = Input::new()
        .with_prompt("Target odds (American like +150, or decimal like 2.5)")
        .interact_text()?;

    build_alert(event, outcome_names[outcome_idx], direction, &target)
}

#[derive(Tabled)]
struct AlertRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Event")]
    event: String,
    #[tabled(rename = "Outcome")]
    outcome: String,
    #[tabled(rename = "Condition")]
    condition: String,
}

fn execute_list(catalog: &Catalog, store: &dyn AlertStore) -> Result<()> {
    let alerts = load_alerts(catalog, store)?;

    output::section("Price Alerts");

    if alerts.is_empty() {
        output::note("No alerts configured.");
        println!(
            "  Create one with {}",
            output::highlight("oddswise alerts add")
        );
        return Ok(());
    }

    let rows: Vec<AlertRow> = alerts
        .iter()
        .map(|a| AlertRow {
            id: short_id(a),
            event: format!("{} ({})", a.event_name, a.sport),
            outcome: a.outcome.clone(),
            condition: a.condition(),
        })
        .collect();

    let table = Table::new(rows).to_string();
    for line in table.lines() {
        println!("  {line}");
    }
    println!();

    Ok(())
}

fn execute_remove(catalog: &Catalog, store: &dyn AlertStore, args: &AlertRemoveArgs) -> Result<()> {
    let mut alerts = load_alerts(catalog, store)?;

    let matches: Vec<usize> = alerts
        .iter()
        .enumerate()
        .filter(|(_, a)| a.id.to_string().starts_with(&args.id))
        .map(|(i, _)| i)
        .collect();

    match matches.as_slice() {
        [] => Err(Error::NotFound(format!("alert '{}'", args.id))),
        [index] => {
            let removed = alerts.remove(*index);
            store.save(&alerts)?;
            info!(alert_id = %removed.id, "alert removed");
            output::ok(&format!(
                "Removed alert for {} / {}",
                removed.event_name, removed.outcome
            ));
            Ok(())
        }
        _ => Err(Error::Parse(format!(
            "alert id prefix '{}' is ambiguous ({} matches)",
            args.id,
            matches.len()
        ))),
    }
}

#[derive(Tabled)]
struct CheckRow {
    #[tabled(rename = "Alert")]
    alert: String,
    #[tabled(rename = "Condition")]
    condition: String,
    #[tabled(rename = "Best")]
    best: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn execute_check(catalog: &Catalog, store: &dyn AlertStore) -> Result<()> {
    let alerts = load_alerts(catalog, store)?;

    output::section("Alert Check");

    if alerts.is_empty() {
        output::note("No alerts configured.");
        return Ok(());
    }

    let mut fired = 0usize;
    let rows: Vec<CheckRow> = alerts
        .iter()
        .map(|alert| {
            let best = catalog
                .event(&alert.event_id)
                .ok()
                .and_then(|e| e.best_quote_for(&alert.outcome).cloned());

            let (best_text, status) = match best {
                Some(quote) => {
                    if alert.is_met(quote.odds) {
                        fired += 1;
                        (
                            format!("{:.2} ({})", quote.odds, quote.bookmaker),
                            output::best_cell("fired"),
                        )
                    } else {
                        (
                            format!("{:.2} ({})", quote.odds, quote.bookmaker),
                            "not met".to_string(),
                        )
                    }
                }
                // The event or outcome left the catalog; a normal state,
                // not an error.
                None => ("-".to_string(), "unresolvable".to_string()),
            };

            CheckRow {
                alert: format!("{} / {}", alert.event_name, alert.outcome),
                condition: alert.condition(),
                best: best_text,
                status,
            }
        })
        .collect();

    let table = Table::new(rows).to_string();
    for line in table.lines() {
        println!("  {line}");
    }

    println!();
    if fired > 0 {
        output::ok(&format!("{fired} of {} alerts fired", alerts.len()));
    } else {
        output::note(&format!("0 of {} alerts fired", alerts.len()));
    }
    println!();

    Ok(())
}

/// First hyphen-group of the UUID, enough to address an alert by prefix.
fn short_id(alert: &PriceAlert) -> String {
    let id = alert.id.to_string();
    id.split('-').next().unwrap_or(&id).to_string()
}
