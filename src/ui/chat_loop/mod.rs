//! Main chat event loop
//!
//! Terminal events arrive from a reader task, exchange outcomes from the task
//! that performed the request. Both are applied to the [`App`] on this task,
//! one at a time, and the screen is redrawn when something changed.

mod keybindings;
mod lifecycle;

use self::keybindings::{map_key, KeyAction, PAGE_SCROLL_ROWS};
use self::lifecycle::{restore_terminal, setup_terminal};

use crate::core::app::{App, Exchange};
use crate::core::chat_client::{ChatBackend, HttpChatClient, RequestError};
use crate::ui::renderer::{max_scroll, ui};
use crate::ui::theme::Theme;
use crate::utils::input::sanitize_pasted_text;
use ratatui::crossterm::event::{self, Event, KeyEvent};
use ratatui::layout::{Rect, Size};
use std::{error::Error, sync::Arc, time::Duration};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// Redraw cadence for the thinking indicator while an exchange is loading.
const INDICATOR_FRAME: Duration = Duration::from_millis(200);

/// Result of one exchange, tagged with the exchange it belongs to.
#[derive(Debug)]
pub struct ExchangeOutcome {
    pub id: u64,
    pub result: Result<String, RequestError>,
}

/// Send `exchange` on a background task and report back over `tx`.
pub fn spawn_exchange(
    backend: Arc<dyn ChatBackend>,
    exchange: Exchange,
    tx: mpsc::UnboundedSender<ExchangeOutcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let Exchange { id, messages } = exchange;
        let result = backend.send(&messages).await;
        if tx.send(ExchangeOutcome { id, result }).is_err() {
            debug!(exchange_id = id, "Chat loop closed before exchange finished");
        }
    })
}

/// Apply one terminal event to the app. Returns whether a redraw is needed.
pub fn handle_terminal_event(
    app: &mut App,
    event: Event,
    size: Size,
    backend: &Arc<dyn ChatBackend>,
    outcome_tx: &mpsc::UnboundedSender<ExchangeOutcome>,
) -> bool {
    match event {
        Event::Key(key) => handle_key(app, key, size, backend, outcome_tx),
        Event::Paste(text) => {
            if app.is_loading() {
                return false;
            }
            let sanitized = sanitize_pasted_text(&text);
            for (index, line) in sanitized.split('\n').enumerate() {
                if index > 0 {
                    app.ui.insert_newline();
                }
                app.ui.insert_text(line);
            }
            true
        }
        Event::Resize(_, _) => true,
        _ => false,
    }
}

fn handle_key(
    app: &mut App,
    key: KeyEvent,
    size: Size,
    backend: &Arc<dyn ChatBackend>,
    outcome_tx: &mpsc::UnboundedSender<ExchangeOutcome>,
) -> bool {
    match map_key(&key) {
        KeyAction::Quit => {
            app.ui.request_exit();
            true
        }
        KeyAction::Submit => match app.begin_submit() {
            Some(exchange) => {
                spawn_exchange(Arc::clone(backend), exchange, outcome_tx.clone());
                true
            }
            None => false,
        },
        KeyAction::Reset => {
            if !app.can_reset() {
                return false;
            }
            app.reset();
            true
        }
        KeyAction::NewLine => {
            if app.is_loading() {
                return false;
            }
            app.ui.insert_newline();
            true
        }
        KeyAction::ScrollUp => {
            let max = max_scroll(app, Rect::new(0, 0, size.width, size.height));
            app.ui.scroll_up(PAGE_SCROLL_ROWS, max);
            true
        }
        KeyAction::ScrollDown => {
            app.ui.scroll_down(PAGE_SCROLL_ROWS);
            true
        }
        KeyAction::Edit => {
            if app.is_loading() {
                return false;
            }
            app.ui.handle_input(key.into());
            // Cursor movement changes the screen without changing the text.
            true
        }
        KeyAction::Ignore => false,
    }
}

fn spawn_event_reader(event_tx: mpsc::UnboundedSender<Event>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(10)) {
                match event::read() {
                    Ok(ev) => {
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => continue,
                }
            } else {
                tokio::task::yield_now().await;
            }
        }
    })
}

pub async fn run_chat(client: HttpChatClient, theme: Theme) -> Result<(), Box<dyn Error>> {
    info!(base_url = client.base_url(), "Starting chat session");
    let backend: Arc<dyn ChatBackend> = Arc::new(client);
    let mut app = App::new(theme);

    let mut terminal = setup_terminal()?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();
    let event_reader_handle = spawn_event_reader(event_tx);
    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel::<ExchangeOutcome>();

    let mut ticker = tokio::time::interval(INDICATOR_FRAME);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut request_redraw = true;

    let result: Result<(), Box<dyn Error>> = loop {
        if app.ui.exit_requested() {
            break Ok(());
        }

        if request_redraw {
            if let Err(err) = terminal.draw(|f| ui(f, &app)) {
                break Err(err.into());
            }
            request_redraw = false;
        }

        tokio::select! {
            maybe_event = event_rx.recv() => {
                let Some(event) = maybe_event else {
                    break Ok(());
                };
                let size = terminal.size().unwrap_or_default();
                if handle_terminal_event(&mut app, event, size, &backend, &outcome_tx) {
                    request_redraw = true;
                }
            }
            Some(outcome) = outcome_rx.recv() => {
                app.complete_exchange(outcome.id, outcome.result);
                request_redraw = true;
            }
            _ = ticker.tick() => {
                if app.is_loading() {
                    request_redraw = true;
                }
            }
        }
    };

    event_reader_handle.abort();
    restore_terminal(&mut terminal)?;
    info!("Chat session ended");

    result
}
