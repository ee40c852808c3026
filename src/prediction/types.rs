use serde::Serialize;
use serde_json::Value;

/// Body of the POST sent to the prediction endpoint: exactly `{"text": ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionRequest<'a> {
    pub text: &'a str,
}

impl<'a> PredictionRequest<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

/// Classified result of one submission cycle.
///
/// A fresh value is produced for every submission and it alone decides what
/// the page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum Outcome {
    NotSubmitted,
    EmptyInput,
    /// The response body, parsed but otherwise untouched.
    Success(Value),
    /// A 2xx response whose body is not JSON; holds the raw body.
    ParseError(String),
    /// Anything that went wrong before a body was available for parsing,
    /// including non-2xx statuses.
    TransportError(String),
}

impl Outcome {
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::NotSubmitted => "not_submitted",
            Outcome::EmptyInput => "empty_input",
            Outcome::Success(_) => "success",
            Outcome::ParseError(_) => "parse_error",
            Outcome::TransportError(_) => "transport_error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::ParseError(_) | Outcome::TransportError(_))
    }
}
