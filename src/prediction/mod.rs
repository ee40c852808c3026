mod client;
mod types;

pub use client::{HttpPredictionClient, PredictionClient, classify_body};
pub use types::{Outcome, PredictionRequest};
