use std::ops::Range;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::app::App;
use crate::ui::layout::{build_transcript_lines, wrap_text};

pub const EYEBROW: &str = "Emotional counselor · AI agent";
pub const TITLE: &str = "Emotional Support Workspace";
pub const SUBTITLE: &str =
    "Write down what's on your mind and get empathy and practical suggestions.";
pub const RESET_HINT: &str = "Ctrl+N  Start a new conversation";
pub const THINKING_TEXT: &str = "Counselor is thinking";
pub const GENERATING_TITLE: &str = "Generating...";
pub const COMPOSER_TITLE: &str = "Enter to send · Alt+Enter for a new line · Ctrl+C to quit";

const HEADER_HEIGHT: u16 = 5;
const MIN_COMPOSER_ROWS: u16 = 3;
const MAX_COMPOSER_ROWS: u16 = 8;
const MAX_BANNER_ROWS: u16 = 3;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameAreas {
    pub header: Rect,
    pub transcript: Rect,
    pub banner: Option<Rect>,
    pub composer: Rect,
}

pub fn frame_areas(app: &App, area: Rect) -> FrameAreas {
    let composer_rows = app
        .ui
        .input_line_count()
        .clamp(MIN_COMPOSER_ROWS as usize, MAX_COMPOSER_ROWS as usize) as u16;
    let banner_rows = app
        .error()
        .map(|error| {
            wrap_text(error, area.width as usize)
                .len()
                .min(MAX_BANNER_ROWS as usize) as u16
        })
        .unwrap_or(0);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(banner_rows),
            Constraint::Length(composer_rows + 2), // +2 for borders
        ])
        .split(area);

    FrameAreas {
        header: chunks[0],
        transcript: chunks[1],
        banner: (banner_rows > 0).then_some(chunks[2]),
        composer: chunks[3],
    }
}

/// Transcript rows, including the thinking indicator while loading.
fn transcript_lines(app: &App, width: u16) -> Vec<Line<'static>> {
    let theme = &app.ui.theme;
    let mut lines = build_transcript_lines(app.messages(), theme, width);
    if app.is_loading() {
        let dots = (app.ui.pulse_start.elapsed().as_millis() / 400 % 4) as usize;
        lines.push(Line::from(Span::styled(
            format!("{THINKING_TEXT}{}", ".".repeat(dots)),
            theme.thinking_indicator_style,
        )));
    }
    lines
}

/// Rows of a `total`-row transcript visible in a window of `height` rows
/// scrolled `scroll_from_bottom` rows up from the end.
fn visible_window(total: usize, height: u16, scroll_from_bottom: u16) -> Range<usize> {
    let max_offset = total.saturating_sub(height as usize);
    let start = max_offset - (scroll_from_bottom as usize).min(max_offset);
    start..(start + height as usize).min(total)
}

/// Largest number of rows the transcript can be scrolled up from the bottom.
pub fn max_scroll(app: &App, area: Rect) -> u16 {
    let transcript = frame_areas(app, area).transcript;
    let total = transcript_lines(app, transcript.width).len();
    u16::try_from(total.saturating_sub(transcript.height as usize)).unwrap_or(u16::MAX)
}

pub fn ui(f: &mut Frame, app: &App) {
    let theme = &app.ui.theme;
    let areas = frame_areas(app, f.area());

    f.render_widget(
        Block::default().style(Style::default().bg(theme.background_color)),
        f.area(),
    );

    let hint_style = if app.can_reset() {
        theme.hint_style
    } else {
        theme.hint_disabled_style
    };
    let header = Paragraph::new(vec![
        Line::from(Span::styled(EYEBROW, theme.eyebrow_style)),
        Line::from(Span::styled(TITLE, theme.title_style)),
        Line::from(Span::styled(SUBTITLE, theme.subtitle_style)),
        Line::from(Span::styled(RESET_HINT, hint_style)),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.input_border_style),
    );
    f.render_widget(header, areas.header);

    let mut lines = transcript_lines(app, areas.transcript.width);
    let window = visible_window(
        lines.len(),
        areas.transcript.height,
        app.ui.scroll_from_bottom(),
    );
    let visible: Vec<Line> = lines.drain(window).collect();
    f.render_widget(Paragraph::new(visible), areas.transcript);

    if let (Some(banner), Some(error)) = (areas.banner, app.error()) {
        let rows: Vec<Line> = wrap_text(error, banner.width as usize)
            .into_iter()
            .map(Line::from)
            .collect();
        f.render_widget(
            Paragraph::new(rows).style(theme.error_banner_style),
            banner,
        );
    }

    let title = if app.is_loading() {
        GENERATING_TITLE
    } else {
        COMPOSER_TITLE
    };
    let mut composer = app.ui.textarea().clone();
    composer.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.input_border_style)
            .title(Span::styled(title, theme.input_title_style)),
    );
    if app.is_loading() {
        composer.set_cursor_style(Style::default());
    }
    f.render_widget(&composer, areas.composer);
}
