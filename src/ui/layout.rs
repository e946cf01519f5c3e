//! Width-aware transcript layout.
//!
//! Lines are wrapped here rather than by `Paragraph::wrap`, so the renderer and
//! the scroll math agree on how many rows the transcript occupies.

use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::message::{ChatMessage, ChatRole};
use crate::ui::theme::Theme;

pub const USER_PREFIX: &str = "You: ";
pub const ASSISTANT_PREFIX: &str = "Counselor: ";

/// Wrap `text` to `width` display columns.
///
/// Breaks at whitespace where possible and splits runs wider than a line
/// (long URLs, CJK text without spaces) by character. Explicit newlines are
/// kept, including empty lines. Leading indentation of each line is kept
/// (tabs become four spaces) and repeated on its continuation rows.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut wrapped = Vec::new();

    for raw_line in text.split('\n') {
        let body = raw_line.trim_start();
        let mut indent = raw_line[..raw_line.len() - body.len()].replace('\t', "    ");
        let mut indent_width = UnicodeWidthStr::width(indent.as_str());
        if indent_width >= width {
            indent.clear();
            indent_width = 0;
        }

        let mut current = indent.clone();
        let mut current_width = indent_width;
        let mut has_text = false;

        for word in body.split_whitespace() {
            let word_width = UnicodeWidthStr::width(word);
            let needed = if has_text {
                current_width + 1 + word_width
            } else {
                current_width + word_width
            };

            if needed <= width {
                if has_text {
                    current.push(' ');
                    current_width += 1;
                }
                current.push_str(word);
                current_width += word_width;
                has_text = true;
                continue;
            }

            if has_text {
                wrapped.push(std::mem::replace(&mut current, indent.clone()));
                current_width = indent_width;
                has_text = false;
            }

            if indent_width + word_width <= width {
                current.push_str(word);
                current_width += word_width;
                has_text = true;
                continue;
            }

            for ch in word.chars() {
                let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                if current_width + ch_width > width && has_text {
                    wrapped.push(std::mem::replace(&mut current, indent.clone()));
                    current_width = indent_width;
                }
                current.push(ch);
                current_width += ch_width;
                has_text = true;
            }
        }

        wrapped.push(current);
    }

    wrapped
}

/// Render the conversation as styled, pre-wrapped lines.
///
/// The first line of each message carries the role prefix; continuation
/// lines are indented to line up with it. A blank line follows each message.
pub fn build_transcript_lines(
    messages: &[ChatMessage],
    theme: &Theme,
    width: u16,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for message in messages {
        let (prefix, prefix_style, text_style) = match message.role() {
            ChatRole::User => (USER_PREFIX, theme.user_prefix_style, theme.user_text_style),
            ChatRole::Assistant => (
                ASSISTANT_PREFIX,
                theme.assistant_prefix_style,
                theme.assistant_text_style,
            ),
        };
        let indent = UnicodeWidthStr::width(prefix);
        let body_width = (width as usize).saturating_sub(indent).max(1);

        for (index, row) in wrap_text(message.content(), body_width)
            .into_iter()
            .enumerate()
        {
            let lead = if index == 0 {
                Span::styled(prefix, prefix_style)
            } else {
                Span::raw(" ".repeat(indent))
            };
            lines.push(Line::from(vec![lead, Span::styled(row, text_style)]));
        }
        lines.push(Line::from(""));
    }

    lines
}
