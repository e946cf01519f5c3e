use std::time::Instant;

use ratatui::style::Style;
use tui_textarea::{CursorMove, Input, TextArea};

use crate::ui::theme::Theme;

pub const INPUT_PLACEHOLDER: &str = "Write your story, worries, or how you feel right now...";

/// Presentation state that is not part of the conversation itself.
pub struct UiState {
    pub theme: Theme,
    textarea: TextArea<'static>,
    /// Rows scrolled up from the bottom of the transcript; 0 follows new messages.
    scroll_from_bottom: u16,
    pub pulse_start: Instant,
    exit_requested: bool,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        let mut textarea = TextArea::default();
        configure_textarea(&mut textarea, &theme);
        Self {
            theme,
            textarea,
            scroll_from_bottom: 0,
            pulse_start: Instant::now(),
            exit_requested: false,
        }
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn input_text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn input_line_count(&self) -> usize {
        self.textarea.lines().len()
    }

    pub fn set_input_text(&mut self, text: &str) {
        let mut textarea = TextArea::from(text.split('\n'));
        configure_textarea(&mut textarea, &self.theme);
        textarea.move_cursor(CursorMove::Bottom);
        textarea.move_cursor(CursorMove::End);
        self.textarea = textarea;
    }

    pub fn clear_input(&mut self) {
        self.set_input_text("");
    }

    /// Forward a key to the composer. Returns whether the text changed.
    pub fn handle_input(&mut self, input: Input) -> bool {
        self.textarea.input(input)
    }

    pub fn insert_text(&mut self, text: &str) -> bool {
        self.textarea.insert_str(text)
    }

    pub fn insert_newline(&mut self) {
        self.textarea.insert_newline();
    }

    pub fn scroll_from_bottom(&self) -> u16 {
        self.scroll_from_bottom
    }

    pub fn scroll_up(&mut self, rows: u16, max_scroll: u16) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_add(rows).min(max_scroll);
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_sub(rows);
    }

    pub fn follow_bottom(&mut self) {
        self.scroll_from_bottom = 0;
    }

    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}

fn configure_textarea(textarea: &mut TextArea<'static>, theme: &Theme) {
    textarea.set_placeholder_text(INPUT_PLACEHOLDER);
    textarea.set_placeholder_style(theme.input_placeholder_style);
    textarea.set_style(theme.input_text_style);
    textarea.set_cursor_style(theme.input_cursor_style);
    textarea.set_cursor_line_style(Style::default());
}
