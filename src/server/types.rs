use serde::{Deserialize, Serialize};

/// Urlencoded body of the HTML form.
#[derive(Debug, Deserialize)]
pub struct FormSubmission {
    #[serde(default)]
    pub text: String,
}

impl FormSubmission {
    /// Text as typed. Browsers submit textarea line breaks as CRLF.
    pub fn into_text(self) -> String {
        self.text.replace("\r\n", "\n")
    }
}

/// JSON body of `POST /api/submit`.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
