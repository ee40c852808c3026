use super::controller::FormEvent;
use super::messages::Messages;
use crate::config::Locale;
use crate::prediction::Outcome;
use serde::Serialize;
use serde_json::Value;

pub const TEXT_AREA_HEIGHT: u32 = 200;

/// One element of the page, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Title { text: String },
    Markdown { text: String },
    TextArea { label: String, value: String, height: u32 },
    /// `busy_label` is shown while the request is in flight.
    SubmitButton { label: String, busy_label: String },
    Warning { text: String },
    Success { text: String },
    Error { text: String },
    Json { value: Value },
    Raw { text: String },
}

/// Maps a submission cycle to the blocks to draw.
pub fn render(event: &FormEvent, outcome: &Outcome, locale: Locale) -> Vec<Block> {
    let messages = Messages::for_locale(locale);

    let mut blocks = vec![
        Block::Title {
            text: messages.page_title.to_string(),
        },
        Block::Markdown {
            text: messages.description.to_string(),
        },
        Block::TextArea {
            label: messages.text_label.to_string(),
            value: event.text.clone(),
            height: TEXT_AREA_HEIGHT,
        },
        Block::SubmitButton {
            label: messages.submit_label.to_string(),
            busy_label: messages.spinner.to_string(),
        },
    ];

    match outcome {
        Outcome::NotSubmitted => {}
        Outcome::EmptyInput => blocks.push(Block::Warning {
            text: messages.empty_input.to_string(),
        }),
        Outcome::Success(value) => {
            blocks.push(Block::Success {
                text: messages.success.to_string(),
            });
            blocks.push(Block::Json {
                value: value.clone(),
            });
        }
        Outcome::ParseError(raw) => {
            blocks.push(Block::Error {
                text: messages.invalid_json.to_string(),
            });
            blocks.push(Block::Raw { text: raw.clone() });
        }
        Outcome::TransportError(detail) => blocks.push(Block::Error {
            text: messages.transport_error(detail),
        }),
    }

    blocks
}
