use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, InputMode};

/// Render the one-line key hint bar.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let hints = match app.input_mode {
        InputMode::Search => " type to search  Ctrl+u clear  Enter/Esc/Tab list  Ctrl+c quit",
        InputMode::Normal => {
            " j/k move  Enter select  / search  1/2 toggle panes  J/K scroll  ? help  q quit"
        }
    };
    let footer = Paragraph::new(Line::from(Span::raw(hints))).style(app.theme.footer_style());
    f.render_widget(footer, area);
}
