//! Wire payloads exchanged with the chat endpoint.

use serde::{Deserialize, Serialize};

use crate::core::message::ChatMessage;

#[derive(Serialize)]
pub struct ChatRequest<'a> {
    pub messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Body the server may attach to a non-success status.
#[derive(Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
