pub mod detail;
pub mod footer;
pub mod header;
pub mod help;
pub mod list;
pub mod pane;

use ratatui::layout::{Constraint, Layout, Margin, Rect};

use weeboo_core::Entry;

use crate::model::panes::Pane;

/// Spinner frames for animated progress indication.
const SPINNER_FRAMES: &[char] = &[
    '\u{280B}', '\u{2819}', '\u{2839}', '\u{2838}', '\u{283C}', '\u{2834}', '\u{2826}', '\u{2827}',
    '\u{2807}', '\u{280F}',
];

/// Get the current spinner character based on a tick counter.
pub fn spinner_char(tick: usize) -> char {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Truncate a string to fit in `max_width` columns, appending "\u{2026}" if truncated.
pub fn truncate(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    let mut truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
    truncated.push('\u{2026}');
    truncated
}

/// "1998", or empty when the air date is unknown.
pub fn year_label(entry: &Entry) -> String {
    entry.year.map(|y| y.to_string()).unwrap_or_default()
}

/// Screen regions of one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub logo: Rect,
    pub search: Rect,
    pub count: Rect,
    pub list_pane: Rect,
    pub detail_pane: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn pane(&self, pane: Pane) -> Rect {
        match pane {
            Pane::List => self.list_pane,
            Pane::Detail => self.detail_pane,
        }
    }

    /// Content area inside a pane's border.
    pub fn pane_inner(&self, pane: Pane) -> Rect {
        self.pane(pane).inner(Margin::new(1, 1))
    }

    /// The `[–]`/`[+]` toggle cell on a pane's top border.
    pub fn toggle_rect(&self, pane: Pane) -> Rect {
        let area = self.pane(pane);
        if area.width < 6 || area.height == 0 {
            return Rect::default();
        }
        Rect {
            x: area.x + area.width - 4,
            y: area.y,
            width: 3,
            height: 1,
        }
    }
}

/// Split the terminal into header, two side-by-side panes and a footer row.
pub fn compute_layout(area: Rect) -> ScreenLayout {
    let rows = Layout::vertical([
        Constraint::Length(3), // header
        Constraint::Min(4),    // panes
        Constraint::Length(1), // footer
    ])
    .split(area);

    let header = Layout::horizontal([
        Constraint::Length(16), // logo
        Constraint::Min(20),    // search box
        Constraint::Length(24), // result count
    ])
    .split(rows[0]);

    let panes = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    ScreenLayout {
        logo: header[0],
        search: header[1],
        count: header[2],
        list_pane: panes[0],
        detail_pane: panes[1],
        footer: rows[2],
    }
}
