use super::types::*;
use crate::{Result, config::ApiConfig};
use async_trait::async_trait;
use std::error::Error as _;
use std::time::Duration;
use tracing::{debug, warn};

#[async_trait]
pub trait PredictionClient: Send + Sync {
    /// Sends `text` for prediction and classifies what came back.
    async fn submit(&self, text: &str) -> Outcome;
}

/// Talks to the prediction endpoint over HTTP. One POST per call, no retries.
pub struct HttpPredictionClient {
    client: reqwest::Client,
    endpoint: Option<String>,
    timeout: Duration,
}

impl HttpPredictionClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        Self::with_timeout(config.url, Duration::from_secs(config.timeout_secs))
    }

    pub fn with_timeout(endpoint: Option<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    fn describe(&self, error: &reqwest::Error) -> String {
        let kind = if error.is_timeout() {
            format!("request timed out after {}", format_timeout(self.timeout))
        } else if error.is_connect() {
            "connection failed".to_string()
        } else if error.is_builder() {
            format!(
                "invalid endpoint URL '{}'",
                self.endpoint.as_deref().unwrap_or_default()
            )
        } else if error.is_body() || error.is_decode() {
            "failed to read response body".to_string()
        } else {
            "request failed".to_string()
        };

        let mut description = format!("{}: {}", kind, error);
        let mut source = error.source();
        while let Some(cause) = source {
            description.push_str(": ");
            description.push_str(&cause.to_string());
            source = cause.source();
        }
        description
    }
}

#[async_trait]
impl PredictionClient for HttpPredictionClient {
    async fn submit(&self, text: &str) -> Outcome {
        let Some(endpoint) = self.endpoint.as_deref() else {
            warn!("Submission attempted without a configured endpoint");
            return Outcome::TransportError(
                "API endpoint is not configured (set API_URL)".to_string(),
            );
        };

        debug!("Posting {} bytes of text to {}", text.len(), endpoint);

        let response = match self
            .client
            .post(endpoint)
            .json(&PredictionRequest::new(text))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                let description = self.describe(&e);
                warn!("Prediction request failed: {}", description);
                return Outcome::TransportError(description);
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("Prediction endpoint answered with status {}", status);
            return Outcome::TransportError(format!(
                "HTTP status {} returned by {}",
                status, endpoint
            ));
        }

        match response.text().await {
            Ok(body) => classify_body(body),
            Err(e) => {
                let description = self.describe(&e);
                warn!("Failed to read prediction response: {}", description);
                Outcome::TransportError(description)
            }
        }
    }
}

/// Parses a successful response body. Anything that is not JSON is kept verbatim.
pub fn classify_body(body: String) -> Outcome {
    match serde_json::from_str(&body) {
        Ok(value) => Outcome::Success(value),
        Err(e) => {
            debug!("Response body is not JSON: {}", e);
            Outcome::ParseError(body)
        }
    }
}

fn format_timeout(timeout: Duration) -> String {
    if timeout.subsec_millis() == 0 {
        format!("{}s", timeout.as_secs())
    } else {
        format!("{}ms", timeout.as_millis())
    }
}
