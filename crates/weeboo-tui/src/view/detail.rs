use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use weeboo_core::Entry;

use crate::app::App;
use crate::theme::Theme;
use crate::view::year_label;

pub const PLACEHOLDER: &str = "Select an anime to see its details";

/// Render the selected entry, or a placeholder when nothing resolves.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let Some(entry) = app.catalog.selected() else {
        let placeholder = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(PLACEHOLDER, Style::default().fg(theme.dim))),
        ])
        .alignment(Alignment::Center);
        f.render_widget(placeholder, area);
        return;
    };

    let paragraph = Paragraph::new(detail_lines(entry, theme))
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));
    f.render_widget(paragraph, area);
}

/// Rows the detail text occupies once word-wrapped to `width` columns.
pub fn wrapped_height(entry: &Entry, theme: &Theme, width: u16) -> u16 {
    let rows: usize = detail_lines(entry, theme)
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            wrapped_rows(&text, width as usize)
        })
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Greedy word wrap, breaking words longer than the width.
fn wrapped_rows(text: &str, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    let mut rows = 1;
    let mut col = 0;
    for word in text.split(' ') {
        let w = word.chars().count();
        let needed = if col == 0 { w } else { col + 1 + w };
        if needed <= width {
            col = needed;
            continue;
        }
        if col > 0 {
            rows += 1;
        }
        rows += w.saturating_sub(1) / width;
        col = (w.saturating_sub(1) % width) + 1;
    }
    rows
}

fn detail_lines<'a>(entry: &'a Entry, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![Line::from(Span::styled(
        entry.title.as_str(),
        Style::default()
            .fg(theme.active)
            .add_modifier(Modifier::BOLD),
    ))];

    if !entry.cover_url.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Cover  ", Style::default().fg(theme.dim)),
            Span::styled(
                entry.cover_url.as_str(),
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }

    // "year • score", skipping whichever is unknown
    let mut meta = Vec::new();
    let year = year_label(entry);
    if !year.is_empty() {
        meta.push(Span::styled(year, Style::default().fg(theme.year)));
    }
    if let Some(score) = entry.score {
        if !meta.is_empty() {
            meta.push(Span::styled(" \u{2022} ", Style::default().fg(theme.dim)));
        }
        meta.push(Span::styled(
            format!("\u{2605} {score:.2}"),
            Style::default().fg(theme.score),
        ));
    }
    if !meta.is_empty() {
        lines.push(Line::from(meta));
    }

    lines.push(Line::from(""));
    if let Some(synopsis) = &entry.synopsis {
        for para in synopsis.lines() {
            lines.push(Line::from(Span::styled(
                para,
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
    }

    lines
}
