use super::mocks::MockPredictionClient;
use axum::Router;
use sentiment_form::{
    config::Locale,
    form::FormController,
    prediction::{HttpPredictionClient, Outcome},
    server::{self, AppState},
};
use serde_json::{Value, json};
use std::{sync::Arc, time::Duration};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const PREDICT_PATH: &str = "/predict";

pub fn sentiment_positive() -> Value {
    json!({"sentiment": "positive"})
}

/// Router backed by a mock client; the mock is returned for call inspection.
pub fn create_mock_app(outcome: Outcome, locale: Locale) -> (Router, Arc<MockPredictionClient>) {
    let client = Arc::new(MockPredictionClient::new(outcome));
    let state = AppState {
        controller: Arc::new(FormController::new(client.clone())),
        locale,
    };
    (server::router(state), client)
}

/// Router backed by a real HTTP client talking to `endpoint`.
pub fn create_http_app(endpoint: String, timeout: Duration) -> Router {
    let client = HttpPredictionClient::with_timeout(Some(endpoint), timeout).unwrap();
    let state = AppState {
        controller: Arc::new(FormController::new(Arc::new(client))),
        locale: Locale::Fr,
    };
    server::router(state)
}

pub fn http_client(server: &MockServer, timeout: Duration) -> HttpPredictionClient {
    HttpPredictionClient::with_timeout(Some(endpoint(server)), timeout).unwrap()
}

pub fn endpoint(server: &MockServer) -> String {
    format!("{}{}", server.uri(), PREDICT_PATH)
}

/// Mount a prediction endpoint that answers every POST with `response`.
pub async fn mount_predict(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(PREDICT_PATH))
        .respond_with(response)
        .mount(server)
        .await;
}

/// An address nothing is listening on.
pub async fn closed_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", addr, PREDICT_PATH)
}
