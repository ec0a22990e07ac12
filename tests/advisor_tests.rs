use oddswise::catalog::Catalog;
use oddswise::domain::EventId;
use oddswise::error::Error;
use oddswise::suggest::{odds_payload, BetAdvisor};
use oddswise::testkit::{self, MockLlm};

fn sample_event() -> oddswise::domain::SportEvent {
    Catalog::sample()
        .event(&EventId::new("event_1"))
        .unwrap()
        .clone()
}

#[tokio::test]
async fn end_to_end_with_catalog_payload() {
    let llm = MockLlm::new(testkit::advisor_answer(0.8));
    let advisor = BetAdvisor::new(Box::new(llm.clone()));

    let suggestion = advisor.suggest_for_event(&sample_event()).await.unwrap();
    assert_eq!(suggestion.suggestion, "Back the best price");
    assert!((suggestion.confidence - 0.8).abs() < f64::EPSILON);

    // The prompt carries the event, the market, and the odds document.
    let prompt = llm.prompts().remove(0);
    assert!(prompt.contains("FC Barcelona vs Real Madrid"));
    assert!(prompt.contains("Match Winner"));
    assert!(prompt.contains("\"eventName\""));
    assert!(prompt.contains("\"bookmaker\""));
}

#[tokio::test]
async fn boundary_confidences_are_accepted() {
    for confidence in [0.0, 1.0] {
        let advisor = BetAdvisor::new(Box::new(MockLlm::new(testkit::advisor_answer(confidence))));
        let suggestion = advisor.suggest_for_event(&sample_event()).await.unwrap();
        assert!((suggestion.confidence - confidence).abs() < f64::EPSILON);
    }
}

#[tokio::test]
async fn negative_confidence_is_rejected() {
    let advisor = BetAdvisor::new(Box::new(MockLlm::new(testkit::advisor_answer(-0.2))));
    let err = advisor.suggest_for_event(&sample_event()).await.unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn payload_covers_every_outcome_with_quotes() {
    let payload = odds_payload(&sample_event());
    let outcomes = payload["outcomes"].as_array().unwrap();
    assert_eq!(outcomes.len(), 3);
    for outcome in outcomes {
        assert_eq!(outcome["odds"].as_array().unwrap().len(), 3);
    }
}
