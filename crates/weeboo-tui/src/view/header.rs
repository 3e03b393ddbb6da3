use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, InputMode};
use crate::theme::Theme;
use crate::view::{ScreenLayout, spinner_char};

const LOGO: &str = "\u{1F365} WeeBoo \u{1F365}";
const PLACEHOLDER: &str = "Search anime...";

/// Render the header bar: logo, search box and result count.
pub fn render(f: &mut Frame, app: &App, layout: &ScreenLayout) {
    let theme = &app.theme;

    let logo = Paragraph::new(Line::from(Span::styled(LOGO, theme.header_style())))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(theme.border_style(false)));
    f.render_widget(logo, layout.logo);

    render_search(f, app, layout.search, theme);
    render_count(f, app, layout.count, theme);
}

fn render_search(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let focused = app.input_mode == InputMode::Search;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(focused))
        .title(" Search ");
    let inner = block.inner(area);

    let query = app.catalog.query();
    let width = inner.width.saturating_sub(1) as usize;
    let line = if query.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(theme.dim)))
    } else {
        // Keep the end of a long query (where the user is typing) visible
        let chars = query.chars().count();
        let shown: String = query.chars().skip(chars.saturating_sub(width)).collect();
        Line::from(Span::styled(shown, Style::default().fg(theme.text)))
    };

    f.render_widget(Paragraph::new(line).block(block), area);

    if focused && inner.width > 0 && inner.height > 0 {
        let typed = query.chars().count().min(width) as u16;
        f.set_cursor_position((inner.x + typed, inner.y));
    }
}

fn render_count(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let mut spans = Vec::new();
    if app.catalog.in_flight() > 0 {
        spans.push(Span::styled(
            format!("{} ", spinner_char(app.tick)),
            Style::default().fg(theme.spinner),
        ));
    }
    spans.push(Span::styled("Found ", Style::default().fg(theme.text)));
    spans.push(Span::styled(
        app.catalog.result_count().to_string(),
        Style::default().fg(theme.active).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(" results", Style::default().fg(theme.text)));

    let count = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(theme.border_style(false)));
    f.render_widget(count, area);
}
