//! Conversation state machine driving the chat screen.
//!
//! An exchange moves the app from idle to loading on [`App::begin_submit`] and
//! back to idle on [`App::complete_exchange`], which either appends the reply
//! or records the error text. Only one exchange can be in flight.

pub mod ui_state;

use std::time::Instant;

use tracing::{debug, warn};

use crate::core::chat_client::{ChatBackend, RequestError};
use crate::core::conversation::Conversation;
use crate::core::message::ChatMessage;
use crate::ui::theme::Theme;

use self::ui_state::UiState;

/// Payload for one in-flight exchange.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub id: u64,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug)]
struct PendingExchange {
    id: u64,
    discarded: bool,
}

pub struct App {
    conversation: Conversation,
    pub ui: UiState,
    error: Option<String>,
    pending: Option<PendingExchange>,
    next_exchange_id: u64,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self {
            conversation: Conversation::new(),
            ui: UiState::new(theme),
            error: None,
            pending: None,
            next_exchange_id: 1,
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.conversation.messages()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.ui.input_text().trim().is_empty()
    }

    pub fn can_reset(&self) -> bool {
        !self.is_loading()
    }

    /// Take the composer text and start an exchange.
    ///
    /// Returns `None` without touching any state when the trimmed input is
    /// empty or another exchange is still loading.
    pub fn begin_submit(&mut self) -> Option<Exchange> {
        if self.is_loading() {
            return None;
        }
        let input = self.ui.input_text();
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.conversation.push(ChatMessage::user(trimmed));
        self.ui.clear_input();
        self.ui.follow_bottom();
        self.ui.pulse_start = Instant::now();
        self.error = None;

        let id = self.next_exchange_id;
        self.next_exchange_id += 1;
        self.pending = Some(PendingExchange {
            id,
            discarded: false,
        });

        debug!(
            exchange_id = id,
            messages = self.conversation.len(),
            "Starting exchange"
        );
        Some(Exchange {
            id,
            messages: self.conversation.snapshot(),
        })
    }

    /// Apply the outcome of exchange `id`. Returns whether the conversation or
    /// error state changed.
    ///
    /// Outcomes for an exchange that is not in flight are ignored. An exchange
    /// discarded by [`App::reset`] only clears the loading flag.
    pub fn complete_exchange(&mut self, id: u64, result: Result<String, RequestError>) -> bool {
        match &self.pending {
            Some(pending) if pending.id == id => {}
            _ => {
                warn!(exchange_id = id, "Ignoring outcome for unknown exchange");
                return false;
            }
        }

        let discarded = self.pending.take().is_some_and(|pending| pending.discarded);
        if discarded {
            debug!(exchange_id = id, "Dropping outcome of exchange cleared by reset");
            return false;
        }

        match result {
            Ok(reply) => {
                debug!(exchange_id = id, "Exchange completed");
                self.conversation.push(ChatMessage::assistant(reply));
                self.ui.follow_bottom();
            }
            Err(err) => {
                warn!(exchange_id = id, error = %err, "Exchange failed");
                self.error = Some(err.to_string());
            }
        }
        true
    }

    /// Back to the welcome message with an empty composer and no error.
    pub fn reset(&mut self) {
        if let Some(pending) = self.pending.as_mut() {
            pending.discarded = true;
        }
        self.conversation.reset();
        self.ui.clear_input();
        self.ui.follow_bottom();
        self.error = None;
    }

    /// Run a whole exchange against `backend`. Returns `false` if the submit
    /// was a no-op.
    pub async fn submit_with<B>(&mut self, backend: &B) -> bool
    where
        B: ChatBackend + ?Sized,
    {
        let Some(exchange) = self.begin_submit() else {
            return false;
        };
        let result = backend.send(&exchange.messages).await;
        self.complete_exchange(exchange.id, result);
        true
    }
}
