use pretty_assertions::assert_eq;
use rstest::rstest;
use sentiment_form::{
    form::{FormController, FormEvent},
    prediction::Outcome,
};
use std::sync::Arc;

mod common;
use common::*;

fn controller_with(outcome: Outcome) -> (FormController, Arc<MockPredictionClient>) {
    let client = Arc::new(MockPredictionClient::new(outcome));
    (FormController::new(client.clone()), client)
}

#[tokio::test]
async fn test_no_submit_makes_no_call() {
    let (controller, client) = controller_with(Outcome::Success(sentiment_positive()));

    let outcome = controller.handle(&FormEvent::idle("hello")).await;

    assert_eq!(outcome, Outcome::NotSubmitted);
    assert_eq!(client.call_count(), 0);
}

#[rstest]
#[case("")]
#[case(" ")]
#[case("   ")]
#[case("\n")]
#[case("\t \r\n ")]
#[case("\u{a0}\u{2003}")]
#[tokio::test]
async fn test_blank_input_warns_without_call(#[case] text: &str) {
    let (controller, client) = controller_with(Outcome::Success(sentiment_positive()));

    let outcome = controller.handle(&FormEvent::submit(text)).await;

    assert_eq!(outcome, Outcome::EmptyInput);
    assert_eq!(client.call_count(), 0);
}

#[rstest]
#[case("Bonjour")]
#[case("  padded text  ")]
#[case("\nJ'ai adoré ce film.\n")]
#[case("x")]
#[tokio::test]
async fn test_text_is_sent_untrimmed(#[case] text: &str) {
    let (controller, client) = controller_with(Outcome::Success(sentiment_positive()));

    let outcome = controller.handle(&FormEvent::submit(text)).await;

    assert_eq!(outcome, Outcome::Success(sentiment_positive()));
    assert_eq!(client.get_requests(), vec![text.to_string()]);
}

#[tokio::test]
async fn test_client_outcome_is_passed_through() {
    let cases = vec![
        Outcome::ParseError("not-json".to_string()),
        Outcome::TransportError("request timed out after 15s".to_string()),
    ];

    for expected in cases {
        let (controller, client) = controller_with(expected.clone());
        let outcome = controller.handle(&FormEvent::submit("Bonjour")).await;

        assert_eq!(outcome, expected);
        assert_eq!(client.call_count(), 1);
    }
}

#[test_log::test(tokio::test)]
async fn test_same_text_twice_gives_same_outcome() {
    let (controller, client) = controller_with(Outcome::Success(sentiment_positive()));
    let event = FormEvent::submit("Bonjour");

    let first = controller.handle(&event).await;
    let second = controller.handle(&event).await;

    assert_eq!(first, second);
    assert_eq!(client.call_count(), 2);
}

#[tokio::test]
async fn test_error_does_not_affect_next_submission() {
    let (failing, _) = controller_with(Outcome::TransportError("connection failed".to_string()));
    let (controller, client) = controller_with(Outcome::Success(sentiment_positive()));

    assert!(failing.handle(&FormEvent::submit("Bonjour")).await.is_error());

    let empty = controller.handle(&FormEvent::submit("  ")).await;
    let valid = controller.handle(&FormEvent::submit("Bonjour")).await;

    assert_eq!(empty, Outcome::EmptyInput);
    assert_eq!(valid, Outcome::Success(sentiment_positive()));
    assert_eq!(client.get_requests(), vec!["Bonjour".to_string()]);
}
