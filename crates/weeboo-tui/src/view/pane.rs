use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, InputMode};
use crate::model::panes::Pane;

/// Render a collapsible pane: border, title and `[–]`/`[+]` toggle, plus the
/// pane's content when it is open.
pub fn render(f: &mut Frame, app: &App, pane: Pane, area: Rect) {
    let theme = &app.theme;
    let open = app.panes.is_open(pane);
    let focused = pane == Pane::List && app.input_mode == InputMode::Normal;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(focused))
        .title(Span::styled(
            pane.title(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if let Some(layout) = &app.last_layout {
        let toggle = layout.toggle_rect(pane);
        if toggle.width > 0 {
            let label = if open { "[\u{2013}]" } else { "[+]" };
            f.render_widget(
                Paragraph::new(Span::styled(label, Style::default().fg(theme.active))),
                toggle,
            );
        }
    }

    if !open || inner.width == 0 || inner.height == 0 {
        return;
    }

    match pane {
        Pane::List => crate::view::list::render(f, app, inner),
        Pane::Detail => crate::view::detail::render(f, app, inner),
    }
}
