//! AI bet suggestions from aggregated odds.
//!
//! The advisor builds a templated prompt containing the market name, event
//! name, and a JSON blob of the event's odds, sends it through the [`Llm`]
//! seam, and parses the `{suggestion, reasoning, confidence}` answer. The
//! model is instructed to answer with JSON only, but markdown fences around
//! the object are tolerated.

pub mod llm;

use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::domain::SportEvent;
use crate::error::{Error, Result};
use llm::Llm;

/// A parsed model answer.
#[derive(Debug, Clone, Deserialize)]
pub struct BetSuggestion {
    pub suggestion: String,
    pub reasoning: String,
    /// Model-reported confidence in [0, 1].
    pub confidence: f64,
}

/// Builds prompts and interprets model answers.
pub struct BetAdvisor {
    llm: Box<dyn Llm>,
}

impl BetAdvisor {
    pub fn new(llm: Box<dyn Llm>) -> Self {
        Self { llm }
    }

    /// Ask for a suggestion on one event, using that event's own odds.
    pub async fn suggest_for_event(&self, event: &SportEvent) -> Result<BetSuggestion> {
        let payload = odds_payload(event);
        self.suggest(&event.market, &event.name, &payload.to_string())
            .await
    }

    /// Ask for a suggestion with caller-supplied odds JSON.
    pub async fn suggest(
        &self,
        market: &str,
        event: &str,
        odds_json: &str,
    ) -> Result<BetSuggestion> {
        let prompt = build_prompt(market, event, odds_json);
        debug!(provider = self.llm.name(), market, event, "requesting bet suggestion");

        let response = self.llm.complete(&prompt).await?;
        parse_suggestion(&response)
    }
}

/// The odds document embedded in the prompt:
/// `{"eventName": …, "outcomes": [{"name": …, "odds": [{"bookmaker": …, "value": …}]}]}`.
pub fn odds_payload(event: &SportEvent) -> serde_json::Value {
    json!({
        "eventName": event.name,
        "outcomes": event
            .outcomes
            .iter()
            .map(|outcome| {
                json!({
                    "name": outcome.name,
                    "odds": event
                        .quotes_for(&outcome.name)
                        .iter()
                        .map(|q| {
                            json!({
                                "bookmaker": q.bookmaker,
                                "value": q.odds.to_f64(),
                            })
                        })
                        .collect::<Vec<_>>(),
                })
            })
            .collect::<Vec<_>>(),
    })
}

fn build_prompt(market: &str, event: &str, odds_json: &str) -> String {
    format!(
        "You are an AI betting assistant that provides intelligent betting suggestions.\n\
         \n\
         Based on the following odds data for the {event} in the {market},\n\
         provide a single betting suggestion, the reasoning behind it, and a confidence score (0-1).\n\
         \n\
         Odds Data:\n\
         {odds_json}\n\
         \n\
         Answer with a single JSON object with exactly these fields and nothing else:\n\
         {{\"suggestion\": string, \"reasoning\": string, \"confidence\": number}}"
    )
}

/// Parse a model answer, tolerating markdown fences around the JSON object.
fn parse_suggestion(response: &str) -> Result<BetSuggestion> {
    let json = extract_json(response)
        .ok_or_else(|| Error::Parse(format!("no JSON object in model response: {response}")))?;

    let suggestion: BetSuggestion =
        serde_json::from_str(json).map_err(|e| Error::Parse(format!("bad suggestion JSON: {e}")))?;

    if !(0.0..=1.0).contains(&suggestion.confidence) {
        return Err(Error::Parse(format!(
            "confidence {} outside [0, 1]",
            suggestion.confidence
        )));
    }

    Ok(suggestion)
}

/// The first top-level JSON object in the text.
fn extract_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::llm::mock::MockLlm;
    use super::*;
    use crate::catalog::Catalog;
    use crate::domain::EventId;

    const ANSWER: &str =
        r#"{"suggestion": "Back Caesars at 2.15", "reasoning": "Best price on the board.", "confidence": 0.62}"#;

    fn sample_event() -> SportEvent {
        Catalog::sample()
            .event(&EventId::new("event_1"))
            .unwrap()
            .clone()
    }

    #[tokio::test]
    async fn prompt_embeds_market_event_and_odds() {
        let llm = MockLlm::new(ANSWER);
        let advisor = BetAdvisor::new(Box::new(llm.clone()));
        advisor
            .suggest("Match Winner", "FC Barcelona vs Real Madrid", r#"{"odds": []}"#)
            .await
            .unwrap();

        let prompt = llm.prompts().remove(0);
        assert!(prompt.contains("Match Winner"));
        assert!(prompt.contains("FC Barcelona vs Real Madrid"));
        assert!(prompt.contains(r#"{"odds": []}"#));
    }

    #[tokio::test]
    async fn bare_json_answer_parses() {
        let advisor = BetAdvisor::new(Box::new(MockLlm::new(ANSWER)));
        let suggestion = advisor.suggest_for_event(&sample_event()).await.unwrap();
        assert_eq!(suggestion.suggestion, "Back Caesars at 2.15");
        assert!((suggestion.confidence - 0.62).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn fenced_json_answer_parses() {
        let fenced = format!("Here you go:\n```json\n{ANSWER}\n```\n");
        let advisor = BetAdvisor::new(Box::new(MockLlm::new(fenced)));
        let suggestion = advisor.suggest_for_event(&sample_event()).await.unwrap();
        assert_eq!(suggestion.reasoning, "Best price on the board.");
    }

    #[tokio::test]
    async fn confidence_outside_unit_interval_is_rejected() {
        let answer = r#"{"suggestion": "s", "reasoning": "r", "confidence": 1.4}"#;
        let advisor = BetAdvisor::new(Box::new(MockLlm::new(answer)));
        let err = advisor.suggest_for_event(&sample_event()).await.unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[tokio::test]
    async fn non_json_answer_is_rejected() {
        let advisor = BetAdvisor::new(Box::new(MockLlm::new("I cannot help with that.")));
        let err = advisor.suggest_for_event(&sample_event()).await.unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn payload_matches_the_documented_shape() {
        let payload = odds_payload(&sample_event());
        assert_eq!(payload["eventName"], "FC Barcelona vs Real Madrid");
        let outcomes = payload["outcomes"].as_array().unwrap();
        assert_eq!(outcomes.len(), 3);
        let first_odds = outcomes[0]["odds"].as_array().unwrap();
        assert_eq!(first_odds.len(), 3);
        assert_eq!(first_odds[0]["bookmaker"], "FanDuel");
        assert_eq!(first_odds[0]["value"], 2.1);
    }
}
