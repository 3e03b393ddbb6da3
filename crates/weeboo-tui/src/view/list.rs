use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use weeboo_core::Entry;

use crate::app::App;
use crate::theme::Theme;
use crate::view::{truncate, year_label};

/// Terminal rows used by one result: title line plus year/cover line.
pub const ROW_HEIGHT: u16 = 2;

/// How many results fit in a list viewport of this size.
pub fn visible_items(inner: Rect) -> usize {
    (inner.height / ROW_HEIGHT) as usize
}

/// Render the result list into the pane's content area.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let results = app.catalog.results();

    if results.is_empty() {
        let msg = if app.catalog.in_flight() > 0 {
            "Loading..."
        } else {
            "No results"
        };
        f.render_widget(
            Paragraph::new(Span::styled(msg, Style::default().fg(theme.dim))),
            area,
        );
        return;
    }

    let selected = app.catalog.selected_id();
    let visible = visible_items(area);
    for (row, (index, entry)) in results
        .iter()
        .enumerate()
        .skip(app.list_offset)
        .take(visible)
        .enumerate()
    {
        let row_area = Rect {
            x: area.x,
            y: area.y + row as u16 * ROW_HEIGHT,
            width: area.width,
            height: ROW_HEIGHT,
        };
        let lines = entry_lines(
            entry,
            Some(entry.id) == selected,
            area.width as usize,
            theme,
        );
        let mut paragraph = Paragraph::new(lines);
        if index == app.list_cursor {
            paragraph = paragraph.style(theme.highlight_style());
        }
        f.render_widget(paragraph, row_area);
    }
}

fn entry_lines(entry: &Entry, selected: bool, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let marker = if selected { "\u{25CF} " } else { "  " };
    let title = Line::from(vec![
        Span::styled(marker, Style::default().fg(theme.active)),
        Span::styled(
            truncate(&entry.title, width.saturating_sub(2)),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ]);

    let year = year_label(entry);
    let cover_width = width.saturating_sub(year.chars().count() + 5);
    let meta = Line::from(vec![
        Span::raw("  "),
        Span::styled(year, Style::default().fg(theme.year)),
        Span::raw("  "),
        Span::styled(
            truncate(&entry.cover_url, cover_width),
            Style::default().fg(theme.dim),
        ),
    ]);

    vec![title, meta]
}
