use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::app::App;
use crate::core::chat_client::{ChatBackend, RequestError};
use crate::core::message::ChatMessage;
use crate::ui::theme::Theme;

pub fn create_test_app() -> App {
    App::new(Theme::dark_default())
}

/// Backend that answers from a fixed script and records every request.
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<Result<String, RequestError>>>,
    requests: Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedBackend {
    pub fn new(replies: Vec<Result<String, RequestError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Vec<ChatMessage>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn send(&self, messages: &[ChatMessage]) -> Result<String, RequestError> {
        self.requests.lock().unwrap().push(messages.to_vec());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RequestError::Transport("script exhausted".to_string())))
    }
}
