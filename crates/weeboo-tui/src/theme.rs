use ratatui::style::{Color, Modifier, Style};

/// Color theme for the TUI.
pub struct Theme {
    pub header_fg: Color,
    pub header_bg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub text: Color,
    pub dim: Color,
    pub highlight_bg: Color,
    pub active: Color,
    pub year: Color,
    pub score: Color,
    pub spinner: Color,
    pub footer_fg: Color,
    pub footer_bg: Color,
}

impl Theme {
    /// Pick a theme by name; unknown names fall back to modern.
    pub fn from_name(name: &str) -> Self {
        match name {
            "hacker" => Self::hacker(),
            _ => Self::modern(),
        }
    }

    /// Hacker-green terminal theme.
    pub fn hacker() -> Self {
        Self {
            header_fg: Color::Black,
            header_bg: Color::Rgb(0, 210, 0),
            border: Color::DarkGray,
            border_focused: Color::Rgb(0, 210, 0),
            text: Color::White,
            dim: Color::DarkGray,
            highlight_bg: Color::Rgb(30, 50, 30),
            active: Color::Cyan,
            year: Color::Rgb(0, 210, 0),
            score: Color::Yellow,
            spinner: Color::Cyan,
            footer_fg: Color::DarkGray,
            footer_bg: Color::Reset,
        }
    }

    /// Modern theme: white text, pink accents, dark violet header.
    pub fn modern() -> Self {
        Self {
            header_fg: Color::White,
            header_bg: Color::Rgb(90, 40, 140),
            border: Color::Rgb(60, 60, 80),
            border_focused: Color::Rgb(255, 110, 180),
            text: Color::White,
            dim: Color::Rgb(120, 120, 140),
            highlight_bg: Color::Rgb(50, 35, 70),
            active: Color::Rgb(255, 110, 180),
            year: Color::Rgb(140, 200, 255),
            score: Color::Rgb(255, 200, 0),
            spinner: Color::Rgb(255, 110, 180),
            footer_fg: Color::Rgb(120, 120, 140),
            footer_bg: Color::Reset,
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn footer_style(&self) -> Style {
        Style::default().fg(self.footer_fg).bg(self.footer_bg)
    }
}
