use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    // Overall background color to paint the full frame
    pub background_color: Color,

    // Header
    pub eyebrow_style: Style,
    pub title_style: Style,
    pub subtitle_style: Style,
    pub hint_style: Style,
    pub hint_disabled_style: Style,

    // Transcript
    pub user_prefix_style: Style,
    pub user_text_style: Style,
    pub assistant_prefix_style: Style,
    pub assistant_text_style: Style,
    pub thinking_indicator_style: Style,
    pub error_banner_style: Style,

    // Composer
    pub input_border_style: Style,
    pub input_title_style: Style,
    pub input_text_style: Style,
    pub input_placeholder_style: Style,
    pub input_cursor_style: Style,
}

impl Theme {
    pub const BUILTIN_NAMES: [&'static str; 2] = ["dark", "light"];

    pub fn dark_default() -> Self {
        Theme {
            name: "dark",
            background_color: Color::Reset,

            eyebrow_style: Style::default().fg(Color::Magenta),
            title_style: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            subtitle_style: Style::default().fg(Color::Gray),
            hint_style: Style::default().fg(Color::Cyan),
            hint_disabled_style: Style::default().fg(Color::DarkGray),

            user_prefix_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Cyan),
            assistant_prefix_style: Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
            assistant_text_style: Style::default().fg(Color::White),
            thinking_indicator_style: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
            error_banner_style: Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),

            input_border_style: Style::default().fg(Color::Gray),
            input_title_style: Style::default().fg(Color::Gray),
            input_text_style: Style::default().fg(Color::White),
            input_placeholder_style: Style::default().fg(Color::DarkGray),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    pub fn light() -> Self {
        Theme {
            name: "light",
            background_color: Color::White,

            eyebrow_style: Style::default().fg(Color::Magenta),
            title_style: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            subtitle_style: Style::default().fg(Color::DarkGray),
            hint_style: Style::default().fg(Color::Blue),
            hint_disabled_style: Style::default().fg(Color::Gray),

            user_prefix_style: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Blue),
            assistant_prefix_style: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            assistant_text_style: Style::default().fg(Color::Black),
            thinking_indicator_style: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            error_banner_style: Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),

            input_border_style: Style::default().fg(Color::Black),
            input_title_style: Style::default().fg(Color::DarkGray),
            input_text_style: Style::default().fg(Color::Black),
            input_placeholder_style: Style::default().fg(Color::Gray),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    /// Look up a built-in theme by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::dark_default()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark_default()
    }
}
