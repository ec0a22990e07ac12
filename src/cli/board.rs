//! Handler for the `board` command: the aggregated odds table.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::catalog::{BoardFilter, Catalog};
use crate::cli::{output, BoardArgs, OddsFormat};
use crate::domain::{decimal_to_american, Quote, SportEvent, NO_PRICE};
use crate::error::Result;
use rust_decimal::Decimal;

/// Execute the board command.
pub fn execute(args: &BoardArgs) -> Result<()> {
    let catalog = Catalog::sample();
    let filter = BoardFilter {
        sport: args.sport.clone(),
        market: args.market.clone(),
        search: args.search.clone(),
    };
    let events = catalog.filtered_events(&filter)?;

    output::section("Odds Board");

    if events.is_empty() {
        output::note("No events match the current filters.");
        return Ok(());
    }

    let mut builder = Builder::default();
    let mut header = vec![
        "Event".to_string(),
        "Starts".to_string(),
        "Outcome".to_string(),
    ];
    header.extend(catalog.bookmakers().iter().map(|b| b.name.clone()));
    header.push("Best".to_string());
    builder.push_record(header);

    for event in &events {
        for outcome in &event.outcomes {
            builder.push_record(board_row(&catalog, event, &outcome.name, args.format));
        }
    }

    let table = builder.build().with(Style::sharp()).to_string();
    for line in table.lines() {
        println!("  {line}");
    }

    println!();
    println!(
        "  Odds shown in {} notation. Run {} to switch.",
        match args.format {
            OddsFormat::Decimal => "decimal",
            OddsFormat::American => "American",
        },
        output::highlight("oddswise board --format <decimal|american>")
    );
    println!();

    Ok(())
}

/// One table row for one (event, outcome) pair.
fn board_row(
    catalog: &Catalog,
    event: &SportEvent,
    outcome: &str,
    format: OddsFormat,
) -> Vec<String> {
    let best = event.best_quote_for(outcome);

    let mut row = vec![
        format!("{}\n{} · {}", event.name, event.sport, event.market),
        event.start_time.format("%b %d %H:%M").to_string(),
        outcome.to_string(),
    ];

    for bookmaker in catalog.bookmakers() {
        let cell = match event.quote_by(&bookmaker.name, outcome) {
            Some(quote) => {
                let text = format_odds(quote.odds, format);
                // Highlight by value equality, not identity, so every
                // bookmaker tying the maximum is marked.
                if best.is_some_and(|b| b.odds == quote.odds) {
                    output::best_cell(&text)
                } else {
                    text
                }
            }
            None => NO_PRICE.to_string(),
        };
        row.push(cell);
    }

    row.push(best_summary(event, outcome, best, format));
    row
}

/// The Best column: price plus every bookmaker holding it.
fn best_summary(
    event: &SportEvent,
    outcome: &str,
    best: Option<&Quote>,
    format: OddsFormat,
) -> String {
    let Some(best) = best else {
        return NO_PRICE.to_string();
    };

    let holders: Vec<&str> = event
        .quotes_for(outcome)
        .into_iter()
        .filter(|q| q.odds == best.odds)
        .map(|q| q.bookmaker.as_str())
        .collect();

    format!(
        "{} ({})",
        output::best_cell(&format_odds(best.odds, format)),
        holders.join(", ")
    )
}

/// Render odds in the selected notation.
pub fn format_odds(odds: Decimal, format: OddsFormat) -> String {
    match format {
        OddsFormat::Decimal => format!("{odds:.2}"),
        OddsFormat::American => decimal_to_american(odds),
    }
}
