//! Handler for the `suggest` command: AI bet suggestions.

use std::time::Duration;

use dialoguer::Select;
use indicatif::{ProgressBar, ProgressStyle};

use crate::catalog::Catalog;
use crate::cli::{output, SuggestArgs};
use crate::config::Config;
use crate::domain::{EventId, SportEvent};
use crate::error::{Error, Result};
use crate::suggest::llm::Anthropic;
use crate::suggest::{BetAdvisor, BetSuggestion};

/// Execute the suggest command.
pub async fn execute(config: &Config, args: &SuggestArgs) -> Result<()> {
    let catalog = Catalog::sample();
    let event = choose_event(&catalog, args)?;

    let mut suggest_config = config.suggest.clone();
    if let Some(model) = &args.model {
        suggest_config.model = model.clone();
    }
    let advisor = BetAdvisor::new(Box::new(Anthropic::from_env(suggest_config)?));

    let spinner = spinner();
    let result = match &args.data {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            // The document only has to be JSON; its internal shape is the
            // model's problem.
            let value: serde_json::Value = serde_json::from_str(&raw)
                .map_err(|e| Error::Parse(format!("odds data file is not JSON: {e}")))?;
            advisor
                .suggest(&event.market, &event.name, &value.to_string())
                .await
        }
        None => advisor.suggest_for_event(event).await,
    };
    spinner.finish_and_clear();

    let suggestion = result?;
    render(event, &suggestion);
    Ok(())
}

fn choose_event<'a>(catalog: &'a Catalog, args: &SuggestArgs) -> Result<&'a SportEvent> {
    if let Some(id) = &args.event {
        return catalog.event(&EventId::new(id.as_str()));
    }

    let names: Vec<String> = catalog
        .events()
        .iter()
        .map(|e| format!("{} ({})", e.name, e.market))
        .collect();
    let index = Select::new()
        .with_prompt("Event")
        .items(&names)
        .default(0)
        .interact()?;
    Ok(&catalog.events()[index])
}

fn spinner() -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message("Consulting the model...");
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

fn render(event: &SportEvent, suggestion: &BetSuggestion) {
    output::section(&format!("Suggestion · {}", event.name));
    output::note(&suggestion.suggestion);

    output::section("Reasoning");
    output::note(&suggestion.reasoning);

    output::section("Confidence");
    output::note(&confidence_bar(suggestion.confidence));
    println!();
}

/// A 20-cell bar like `[████████████░░░░░░░░] 62%`.
fn confidence_bar(confidence: f64) -> String {
    const WIDTH: usize = 20;
    let clamped = confidence.clamp(0.0, 1.0);
    let filled = (clamped * WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:.0}%",
        "█".repeat(filled),
        "░".repeat(WIDTH - filled),
        clamped * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_bar_scales_and_clamps() {
        assert_eq!(confidence_bar(0.0), format!("[{}] 0%", "░".repeat(20)));
        assert_eq!(confidence_bar(1.0), format!("[{}] 100%", "█".repeat(20)));
        assert!(confidence_bar(0.5).contains("50%"));
        assert_eq!(confidence_bar(7.0), confidence_bar(1.0));
    }
}
