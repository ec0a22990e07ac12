//! Handler for the `markets` command: lists the filter ids.

use tabled::{Table, Tabled};

use crate::catalog::Catalog;
use crate::cli::{output, MarketsArgs};
use crate::error::Result;

#[derive(Tabled)]
struct MarketRow {
    #[tabled(rename = "Sport")]
    sport: String,
    #[tabled(rename = "Market")]
    market: String,
    #[tabled(rename = "Id")]
    id: String,
}

/// Execute the markets command.
pub fn execute(args: &MarketsArgs) -> Result<()> {
    let catalog = Catalog::sample();

    let sports: Vec<_> = match args.sport.as_deref() {
        Some(id) => vec![catalog.sport(id)?],
        None => catalog.sports().iter().collect(),
    };

    output::section("Markets");

    let rows: Vec<MarketRow> = sports
        .iter()
        .flat_map(|sport| {
            catalog
                .markets_for_sport(&sport.id)
                .into_iter()
                .map(|market| MarketRow {
                    sport: sport.name.clone(),
                    market: market.name.clone(),
                    id: market.id.clone(),
                })
        })
        .collect();

    let table = Table::new(rows).to_string();
    for line in table.lines() {
        println!("  {line}");
    }

    println!();
    println!(
        "  Filter the board with {}",
        output::highlight("oddswise board --sport <id> --market <id>")
    );
    println!();

    Ok(())
}
